use leptos::prelude::*;
use surover_model::content::{CAPTAINS, SUBTEAM_PLACEHOLDER, SUBTEAMS, TEAM_INTRO};

/// Captains, then subteams, both in their defined order.
#[component]
pub fn TeamPage() -> impl IntoView {
    view! {
        <main class="page page-team container">
            <h1 class="page-title">"Team"</h1>
            <p class="section-text">{TEAM_INTRO}</p>

            <section class="team-captains">
                <h2 class="section-title">"Team Captains"</h2>
                <div class="captain-grid">
                    {CAPTAINS.iter().map(|captain| view! {
                        <div class="card captain" data-member=captain.email>
                            <img src=captain.photo alt=captain.name class="avatar" />
                            <div>
                                <div class="captain-name">{captain.name}</div>
                                <a href=captain.mailto() class="captain-email">{captain.email}</a>
                            </div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </section>

            <section class="team-subteams">
                <h2 class="section-title">"Subteams"</h2>
                <div class="subteam-grid">
                    {SUBTEAMS.iter().map(|team| view! {
                        <div class="card subteam" data-subteam=team.key>
                            <div class="avatar placeholder"></div>
                            <div class="subteam-title">{team.title}</div>
                            <p class="section-text small">{SUBTEAM_PLACEHOLDER}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </section>
        </main>
    }
}
