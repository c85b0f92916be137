use leptos::prelude::*;
use surover_model::content::SPONSORS_STATEMENT;

/// Sponsor statement and logo wall.
#[component]
pub fn SponsorsPage(
    /// Sponsor logo wall
    image: String,
) -> impl IntoView {
    view! {
        <main class="page page-sponsors container narrow centered">
            <h1 class="page-title">"Our Sponsors"</h1>
            <p class="section-text">{SPONSORS_STATEMENT}</p>
            <img src=image alt="Sponsor logos" class="sponsor-image" />
        </main>
    }
}
