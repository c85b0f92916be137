//! Systems tabs: one button per subsystem, one panel for the active one.

use super::link_mode;
use leptos::prelude::*;
use surover_model::{Route, SectionSelector, SystemDescriptor};

/// Subsystem selector: a button per entry and the panel of the active one.
///
/// Renders nothing for an empty list.
#[component]
pub fn Systems(
    /// Subsystems in tab order; the first one starts active
    systems: &'static [SystemDescriptor],
) -> impl IntoView {
    let Some(initial) = SectionSelector::new(systems) else {
        return view! { "" }.into_any();
    };
    let selector = RwSignal::new(initial);
    let team_href = link_mode().href(Route::Team);

    view! {
        <section id="systems" class="section systems">
            <div class="container">
                <div class="section-heading">
                    <h3 class="section-subtitle">"Systems"</h3>
                    <a href=team_href class="section-link">"View all team members →"</a>
                </div>
                <div class="systems-grid">
                    <div class="system-tabs" role="tablist">
                        {systems.iter().map(|system| {
                            let key = system.key;
                            view! {
                                <button
                                    class=move || if selector.get().is_active(key) { "system-tab active" } else { "system-tab" }
                                    role="tab"
                                    aria-selected=move || selector.get().is_active(key).to_string()
                                    data-system=key.as_str()
                                    on:click=move |_| selector.update(|s| {
                                        s.select(key);
                                    })
                                >
                                    {system.title}
                                </button>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                    {move || view! { <SystemPanel system=selector.get().active() /> }}
                </div>
            </div>
        </section>
    }
    .into_any()
}

/// Heading, summary and bullet points of one subsystem.
#[component]
pub fn SystemPanel(system: &'static SystemDescriptor) -> impl IntoView {
    view! {
        <div class="card system-panel" role="tabpanel" data-system=system.key.as_str()>
            <h4 class="system-title">{system.title}</h4>
            <p class="section-text">{system.summary}</p>
            <ul class="point-list">
                {system.points.iter().map(|point| view! { <li class="point">{*point}</li> }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
