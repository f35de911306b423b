use leptos::prelude::*;

use crate::content::Project;

#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section id="projects" class="mb-16 section-content">
            <div class="container mx-auto">
                <h2 class="text-3xl font-bold mb-6">"Projects"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {projects
                        .into_iter()
                        .map(|project| view! { <ProjectCard project=project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-700 p-6 rounded-lg shadow-lg transition-transform transform hover:scale-105">
            <h3 class="text-xl font-semibold mb-2 text-gray-900 dark:text-gray-100">
                {project.title}
            </h3>
            <p class="mb-4 text-gray-600 dark:text-gray-300">{project.description}</p>
            <div class="flex flex-wrap gap-2 mb-4">
                {project
                    .tags
                    .iter()
                    .map(|tag| {
                        view! {
                            <span class="px-2 py-1 text-sm rounded bg-purple-100 text-purple-700 dark:bg-gray-600 dark:text-purple-300">
                                {*tag}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="space-x-4">
                {project
                    .demo_url
                    .map(|url| {
                        view! {
                            <a
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-blue-600 dark:text-blue-400 hover:underline"
                            >
                                "Live Demo"
                            </a>
                        }
                    })}
                {project
                    .source_url
                    .map(|url| {
                        view! {
                            <a
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-blue-600 dark:text-blue-400 hover:underline"
                            >
                                "Source"
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}
