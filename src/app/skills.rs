use leptos::prelude::*;

use crate::content::Skill;

#[component]
pub fn SkillsSection(skills: Vec<Skill>) -> impl IntoView {
    view! {
        <section id="skills" class="mb-16 section-content">
            <div class="container mx-auto">
                <h2 class="text-3xl font-bold mb-6">"Skills"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {skills
                        .into_iter()
                        .map(|skill| view! { <SkillCard skill=skill /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: Skill) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-700 p-6 rounded-lg shadow-lg transition-transform transform hover:scale-105">
            <h3 class="text-xl font-semibold mb-4 text-gray-900 dark:text-gray-100">
                {skill.title}
            </h3>
            <p class="text-gray-600 dark:text-gray-300">{skill.description}</p>
        </div>
    }
}
