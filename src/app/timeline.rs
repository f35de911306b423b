use leptos::prelude::*;

use crate::content::TimelineEntry;

/// Titled vertical timeline; used for both work experience and education.
#[component]
pub fn TimelineSection(#[prop(into)] title: String, entries: Vec<TimelineEntry>) -> impl IntoView {
    view! {
        <section class="mb-16 section-content">
            <div class="container mx-auto">
                <h2 class="text-3xl font-bold mb-6">{title}</h2>
                <ol class="relative border-l border-gray-300 dark:border-gray-600 space-y-8">
                    {entries
                        .into_iter()
                        .map(|entry| view! { <TimelineItem entry=entry /> })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(entry: TimelineEntry) -> impl IntoView {
    view! {
        <li class="ml-6">
            <span class="absolute w-3 h-3 bg-purple-500 rounded-full -left-1.5 mt-2"></span>
            <div class="flex items-start justify-between">
                <div class="text-left">
                    <h3 class="text-xl font-semibold text-gray-900 dark:text-gray-100">
                        {entry.title}
                    </h3>
                    <div class="text-gray-600 dark:text-gray-400">{entry.subtitle}</div>
                </div>
                <div class="shrink-0 text-right font-bold">{entry.period}</div>
            </div>
            <p class="mt-2 text-gray-600 dark:text-gray-300">{entry.description}</p>
        </li>
    }
}
