// Home page - hero, about, gallery and systems
use super::{About, Hero, Rovers, Systems};
use crate::SiteConfig;
use leptos::prelude::*;
use surover_model::content::SYSTEMS;

/// Landing page at `#/home`.
#[component]
pub fn HomePage(config: SiteConfig) -> impl IntoView {
    view! {
        <main id="home" class="page page-home">
            <Hero config=config.hero />
            <About photo=config.assets.team_photo />
            <Rovers />
            <Systems systems=SYSTEMS />
        </main>
    }
}
