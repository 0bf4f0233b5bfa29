use leptos::prelude::*;

use super::content;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Socials() -> impl IntoView {
    let profile = &content().profile;
    let links = profile
        .socials
        .iter()
        .map(|social| {
            let target = if social.opens_in_new_tab() { "_blank" } else { "_self" };
            view! {
                <a
                    href=social.href.clone()
                    target=target
                    rel="noopener noreferrer"
                    class="flex items-center border border-gray-600 text-gray-300 hover:text-white hover:bg-gray-800 rounded-md px-3 py-1.5 text-sm transition-colors duration-300"
                >
                    <i class=format!("{} mr-2", social.icon) />
                    {social.name.clone()}
                </a>
            }
        })
        .collect_view();

    view! {
        <footer class="relative z-10 py-16 border-t border-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-wrap justify-center gap-4">{links}</div>
                <div class="text-center text-xs mt-4 text-gray-300">
                    {format!("© {} {}", BUILD_YEAR, profile.name)}
                </div>
            </div>
        </footer>
    }
}
