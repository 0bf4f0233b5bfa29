use leptos::prelude::*;

use super::content;
use crate::content::WorkEntry;

#[component]
pub fn Works(title: &'static str, subtitle: &'static str) -> impl IntoView {
    let works = &content().works;

    view! {
        <section id="works" class="relative z-10 py-20 lg:py-24">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <p class="text-gray-400 text-sm font-light tracking-widest uppercase font-mono mb-4">
                        {subtitle}
                    </p>
                    <h2 class="text-4xl md:text-5xl lg:text-6xl font-light text-white tracking-tight">
                        {title}
                    </h2>
                </div>
                <div class="grid lg:grid-cols-3 gap-12">
                    <div class="lg:col-span-2 relative">
                        <div class="absolute left-0 top-0 bottom-0 w-px bg-gray-800" />
                        {works
                            .entries
                            .iter()
                            .map(|entry| view! { <WorkItem entry=entry.clone() /> })
                            .collect_view()}
                    </div>
                    <div class="bg-black/40 border border-gray-800/50 rounded-3xl p-8 h-fit">
                        <p class="text-gray-400 text-sm font-light tracking-widest uppercase font-mono mb-2">
                            {works.summary.title.clone()}
                        </p>
                        <p class="text-5xl font-light text-white">
                            {works.summary.total_experience.clone()}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn WorkItem(entry: WorkEntry) -> impl IntoView {
    let technologies = entry
        .technologies()
        .map(|t| {
            view! {
                <span class="text-xs bg-gray-800 text-gray-300 px-3 py-1 rounded-full border border-gray-700">
                    {t.to_string()}
                </span>
            }
        })
        .collect_view();
    let dot_class = if entry.active {
        "absolute -left-1.5 top-8 w-3 h-3 rounded-full bg-white"
    } else {
        "absolute -left-1.5 top-8 w-3 h-3 rounded-full bg-gray-600"
    };

    view! {
        <div class="relative pl-8 py-6 border-b border-gray-800/50">
            <div class=dot_class />
            <div class="flex flex-wrap items-baseline justify-between gap-4 mb-2">
                <h3 class="text-2xl font-light text-white tracking-wide">{entry.company}</h3>
                <span class="text-sm text-gray-400 font-mono">
                    {entry.period}" · "{entry.duration}
                </span>
            </div>
            <p class="text-gray-300 font-light mb-4">{entry.position}</p>
            <div class="flex flex-wrap gap-2">{technologies}</div>
        </div>
    }
}
