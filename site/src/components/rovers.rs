use leptos::prelude::*;
use surover_model::content::{ROVERS, ROVERS_INTRO};

/// Gallery of rovers built so far.
#[component]
pub fn Rovers() -> impl IntoView {
    view! {
        <section id="our-rover" class="section rovers">
            <div class="container">
                <h3 class="section-subtitle">"Our Rovers"</h3>
                <p class="section-text">{ROVERS_INTRO}</p>
                <div class="rover-grid">
                    {ROVERS.iter().map(|rover| view! {
                        <figure class="card rover-card">
                            <img src=rover.image alt=format!("{} rover", rover.name) class="rover-image" />
                            <figcaption class="rover-caption">
                                <span class="rover-name">{rover.name}</span>
                                {format!(" — {}", rover.caption)}
                            </figcaption>
                        </figure>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
