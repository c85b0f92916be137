use leptos::prelude::*;
use surover_model::content::{PROGRAM_BLURB, PROGRAM_HIGHLIGHTS, PROGRAMS, PROGRAMS_INTRO};

/// Support programmes, each with an optional badge, then a summary list.
#[component]
pub fn ProgramsPage() -> impl IntoView {
    view! {
        <main class="page page-programs container">
            <h1 class="page-title">"Programs"</h1>
            <p class="section-text">{PROGRAMS_INTRO}</p>
            <section class="program-grid">
                {PROGRAMS.iter().map(|program| view! {
                    <div class="card program-card">
                        <div class="program-head">
                            <h3 class="program-name">{program.name}</h3>
                            {program.note.map(|note| view! { <span class="badge">{note}</span> })}
                        </div>
                        <p class="section-text small">{PROGRAM_BLURB}</p>
                    </div>
                }).collect::<Vec<_>>()}
            </section>
            <section class="card glance">
                <h4 class="glance-title">"At a glance"</h4>
                <ul class="point-list">
                    {PROGRAM_HIGHLIGHTS.iter().map(|item| view! { <li class="point">{*item}</li> }).collect::<Vec<_>>()}
                </ul>
            </section>
        </main>
    }
}
