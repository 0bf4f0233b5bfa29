use leptos::prelude::*;

use super::content;

#[component]
pub fn Hero() -> impl IntoView {
    let profile = &content().profile;

    view! {
        <section id="hero" class="relative z-10 min-h-screen flex items-center">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-24">
                <p class="text-gray-400 text-sm font-light tracking-widest uppercase font-mono mb-6">
                    {profile.name.clone()}" / "{profile.title.clone()}
                </p>
                <h1 class="text-5xl md:text-7xl font-light leading-tight tracking-tight mb-8">
                    {profile.headline.clone()}
                </h1>
                <p class="text-gray-300 font-light text-lg max-w-2xl leading-relaxed mb-12">
                    {profile.intro.clone()}
                </p>
                <div class="flex flex-wrap gap-4">
                    <a
                        href="#projects"
                        class="bg-white text-black hover:bg-gray-200 px-8 py-3 rounded-xl font-light tracking-wide transition-all duration-300"
                    >
                        "See my work"
                    </a>
                    <a
                        href="#contact"
                        class="border border-gray-600 text-gray-300 hover:text-white hover:border-gray-400 px-8 py-3 rounded-xl font-light tracking-wide transition-all duration-300"
                    >
                        "Get in touch"
                    </a>
                </div>
            </div>
        </section>
    }
}
