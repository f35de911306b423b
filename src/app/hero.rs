use std::time::Duration;

use leptos::prelude::*;

use crate::content::{Profile, RESUME_URL, TYPED_SKILLS, TYPING_INTERVAL_MS};
use crate::typing::Typewriter;

use super::components::Button;
use super::OpenHireModal;

#[component]
pub fn HeroSection(profile: Profile) -> impl IntoView {
    let OpenHireModal(open_hire) = expect_context::<OpenHireModal>();

    view! {
        <section id="home" class="mb-16 section-content">
            <div class="container mx-auto flex flex-col md:flex-row items-center justify-between gap-12">
                <div class="flex-1">
                    <h2 class="text-4xl font-bold mb-6">{format!("HEY, I'M {}", profile.name)}</h2>
                    <p class="mb-6 text-lg leading-relaxed">
                        "As a web developer, my objective is to create user-friendly and
                        efficient websites that are visually appealing and easy to navigate.
                        I utilize my skills in "
                        <TypedText text=TYPED_SKILLS interval_ms=TYPING_INTERVAL_MS />
                        " to develop websites that meet all the requirements of the client."
                    </p>
                    <div class="space-x-4">
                        <Button class="bg-blue-600 hover:bg-blue-700" on_click=open_hire>
                            "Hire Me"
                        </Button>
                        <a
                            href=RESUME_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-block px-4 py-2 rounded font-bold text-white transition duration-300 bg-green-600 hover:bg-green-700"
                        >
                            "Download Resume"
                        </a>
                    </div>
                </div>
                <div class="flex-1 text-center">
                    <img
                        src=profile.avatar
                        alt="Profile"
                        class="w-64 h-64 rounded-full mx-auto border-4 border-purple-500"
                    />
                </div>
            </div>
        </section>
    }
}

/// Reveals `text` one character per `interval_ms` tick, then stops.
///
/// The interval handle is cleared through a single `stop` path reached from
/// both "animation complete" and component cleanup; clearing an
/// already-cleared handle is a no-op, and the tick callback only uses `try_`
/// accessors so a disposed owner is never written to.
#[component]
fn TypedText(text: &'static str, #[prop(default = 70)] interval_ms: u64) -> impl IntoView {
    let (revealed, set_revealed) = signal(String::new());
    let state = StoredValue::new(Typewriter::new(text));
    let handle = StoredValue::new_local(None::<IntervalHandle>);

    let stop = move || {
        if let Some(h) = handle.try_get_value().flatten() {
            h.clear();
        }
        handle.try_set_value(None);
    };

    // Intervals only exist in the browser; effects never run during SSR.
    Effect::new(move |_| {
        let h = set_interval_with_handle(
            move || {
                let step = state.try_update_value(|tw| {
                    tw.tick();
                    (tw.revealed().to_string(), tw.is_done())
                });
                match step {
                    Some((prefix, done)) => {
                        set_revealed.try_set(prefix);
                        if done {
                            stop();
                        }
                    }
                    // owner already disposed; kill the timer
                    None => stop(),
                }
            },
            Duration::from_millis(interval_ms),
        )
        .expect("should be able to start the typing interval");
        handle.set_value(Some(h));
    });
    on_cleanup(stop);

    view! { <span class="text-purple-500 font-semibold">{revealed}</span> }
}
