use leptos::prelude::*;

use super::about::AboutMe;
use super::contact::ContactSection;
use super::hero::Hero;
use super::projects::ProjectsCarousel;
use super::socials::Socials;
use super::works::Works;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <ProjectsCarousel title="Latest Projects" subtitle="... /Projects ..." />
        <AboutMe />
        <Works title="Recent Work Experience" subtitle="... /Experience ..." />
        <ContactSection title="Let's Work Together" subtitle="... /Contact me ..." />
        <Socials />
    }
}
