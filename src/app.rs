mod components;
mod hero;
mod modals;
mod projects;
mod skills;
mod timeline;

use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{self, HireRequest};
use crate::theme::Theme;

use components::Button;
use hero::HeroSection;
use modals::{HireModal, ProfileModal};
use projects::ProjectsSection;
use skills::SkillsSection;
use timeline::TimelineSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

/// Opens the hire-me modal. Handed to the hero section through context so
/// the root stays the only owner of the visibility flag.
#[derive(Clone, Copy)]
pub struct OpenHireModal(pub Callback<()>);

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // All mutable UI state lives here; children only get values + callbacks.
    let (theme, set_theme) = signal(Theme::default());
    let (profile_open, set_profile_open) = signal(false);
    let (hire_open, set_hire_open) = signal(false);

    let close_modals = Callback::new(move |()| {
        set_profile_open.set(false);
        set_hire_open.set(false);
    });
    let submit_hire = Callback::new(move |req: HireRequest| {
        // The form has no transport - the submission is only logged locally.
        match serde_json::to_string(&req) {
            Ok(json) => log::info!("hire request submitted: {json}"),
            Err(e) => log::warn!("could not serialize hire request: {e}"),
        }
    });
    provide_context(OpenHireModal(Callback::new(move |()| {
        set_hire_open.set(true)
    })));

    let profile = content::profile();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Nitish Kumar - {title}") />

        <Router>
            <div class=move || {
                format!("min-h-screen font-sans p-4 {}", theme.get().page_class())
            }>
                <Nav
                    theme=theme
                    on_show_profile=Callback::new(move |()| set_profile_open.set(true))
                    on_toggle_theme=Callback::new(move |()| set_theme.update(|t| *t = t.toggled()))
                />
                <main class="mx-auto w-full max-w-7xl">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
                <ProfileModal open=profile_open on_close=close_modals profile=profile />
                <HireModal open=hire_open on_close=close_modals on_submit=submit_hire />
            </div>
        </Router>
    }
}

/// Renders the single page: hero, skills, timelines, and projects.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <HeroSection profile=content::profile() />
        <SkillsSection skills=content::skills() />
        <TimelineSection title="Work Experience" entries=content::work_history() />
        <TimelineSection title="Education" entries=content::education() />
        <ProjectsSection projects=content::projects() />
    }
}

#[component]
fn Nav(
    theme: ReadSignal<Theme>,
    on_show_profile: Callback<()>,
    on_toggle_theme: Callback<()>,
) -> impl IntoView {
    view! {
        <nav class="mb-8">
            <div class="container mx-auto flex flex-col sm:flex-row justify-between items-center bg-white dark:bg-gray-900 shadow-md rounded-lg p-4">
                <h1 class="text-3xl font-bold text-gray-900 dark:text-gray-100 mb-4 sm:mb-0">
                    "Portfolio"
                </h1>
                <div class="flex flex-col sm:flex-row items-center space-y-4 sm:space-y-0 sm:space-x-6">
                    <a
                        href="#home"
                        class="text-gray-700 dark:text-gray-300 hover:text-gray-500 transition duration-300"
                    >
                        "Home"
                    </a>
                    <Button class="bg-purple-600 hover:bg-purple-700" on_click=on_show_profile>
                        "Show Profile"
                    </Button>
                    <Button class="bg-yellow-500 hover:bg-yellow-600" on_click=on_toggle_theme>
                        {move || theme.get().toggle_label()}
                    </Button>
                </div>
            </div>
        </nav>
    }
}

fn build_year() -> i32 {
    chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .expect("BUILD_TIME should be valid RFC 3339")
        .year()
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-6 mt-16 bg-gray-100 dark:bg-gray-800 text-gray-900 dark:text-white">
            <div class="container mx-auto text-center">
                <p class="text-lg mb-2">"Thank you for visiting!"</p>
                <p>{format!("© {} Nitish Kumar. All rights reserved.", build_year())}</p>
                <div class="mt-4 flex justify-center space-x-4">
                    <a
                        href="#home"
                        class="text-gray-400 hover:text-gray-300 transition duration-300"
                    >
                        "Home"
                    </a>
                </div>
            </div>
        </footer>
    }
}
