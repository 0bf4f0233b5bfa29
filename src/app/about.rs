use leptos::{either::Either, prelude::*};

use super::content;
use crate::content::SkillGroup;

#[component]
pub fn AboutMe() -> impl IntoView {
    let profile = &content().profile;
    let skills = &content().skills;

    view! {
        <section id="about" class="relative z-10 py-20 lg:py-24">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12">
                    <p class="text-gray-400 text-sm font-light tracking-widest uppercase font-mono">
                        "... /About me ..."
                    </p>
                </div>
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div class="order-2 lg:order-1">
                        <h2 class="text-4xl md:text-5xl lg:text-6xl font-light mb-12 leading-tight tracking-tight">
                            "Hello! I'm "{profile.name.clone()}", I'm a "
                            <span class="italic text-white font-normal">{profile.title.clone()}</span>
                            "."
                            <br />
                            "More than "
                            <span class="italic text-white font-normal">
                                {profile.experience.clone()}
                            </span>
                            " experience."
                        </h2>
                        <div class="grid md:grid-cols-2 gap-6 mb-12">
                            {skills
                                .iter()
                                .map(|skill| view! { <SkillCard skill=skill.clone() /> })
                                .collect_view()}
                        </div>
                        <p class="text-gray-400 font-light leading-relaxed tracking-wide">
                            "Some of my "
                            <span class="text-white font-normal">"favorite technologies"</span>
                            ", "
                            <span class="text-white font-normal">"topics"</span>
                            ", or "
                            <span class="text-white font-normal">"tools"</span>
                            " that I worked with"
                        </p>
                    </div>
                    <div class="order-1 lg:order-2 flex justify-center lg:justify-end">
                        <div class="w-80 h-96 bg-black/20 border border-gray-800/50 rounded-3xl overflow-hidden hover:scale-105 transition-all duration-500 shadow-2xl">
                            <img
                                src=profile.profile_image.clone()
                                alt="Profile"
                                class="w-full h-full object-cover grayscale hover:grayscale-0 transition-all duration-500"
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: SkillGroup) -> impl IntoView {
    let lines = skill
        .lines
        .into_iter()
        .map(|line| view! { <div>{line}</div> })
        .collect_view();
    let body = view! {
        <h3 class="font-light text-lg text-white tracking-wide mb-4">{skill.title}</h3>
        <div class="text-sm space-y-1 text-gray-300 font-light leading-relaxed">{lines}</div>
    };
    let class = "block bg-black/40 border border-gray-800/50 text-white p-6 rounded-3xl transition-all duration-500 hover:bg-black/60 hover:border-gray-700/50 hover:scale-105 shadow-2xl";

    match skill.link {
        Some(href) => Either::Left(view! {
            <a href=href target="_blank" rel="noopener noreferrer" class=class>
                {body}
            </a>
        }),
        None => Either::Right(view! { <div class=class>{body}</div> }),
    }
}
