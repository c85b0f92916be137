use leptos::prelude::*;
use surover_model::content::expos_with_status;
use surover_model::{ExpoEntry, ExpoStatus};

/// Exhibitions timeline: past expos first, then upcoming ones.
#[component]
pub fn ExposPage() -> impl IntoView {
    view! {
        <main class="page page-expos container">
            <h1 class="page-title">"Expos"</h1>
            <section class="expo-group" data-status="participated">
                <h2 class="section-title">"Participated Expos"</h2>
                {expos_with_status(ExpoStatus::Participated).map(|expo| view! { <ExpoItem expo=expo /> }).collect::<Vec<_>>()}
            </section>
            <section class="expo-group" data-status="upcoming">
                <h2 class="section-title">"Upcoming Expos"</h2>
                {expos_with_status(ExpoStatus::Upcoming).map(|expo| view! { <ExpoItem expo=expo /> }).collect::<Vec<_>>()}
            </section>
        </main>
    }
}

#[component]
fn ExpoItem(expo: &'static ExpoEntry) -> impl IntoView {
    view! {
        <article class="expo">
            <h3 class="expo-name">{expo.name}</h3>
            <p class="section-text">{expo.description}</p>
            {expo.image.map(|src| view! { <img src=src alt=expo.name class="expo-image" /> })}
        </article>
    }
}
