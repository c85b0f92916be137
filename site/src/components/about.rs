use leptos::prelude::*;
use surover_model::content::{ABOUT_TAGS, ABOUT_TEXT, ABOUT_TITLE};

/// "What is a rover?" section with the team photo.
#[component]
pub fn About(photo: String) -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <div class="container about-grid">
                <div>
                    <h2 class="section-title">{ABOUT_TITLE}</h2>
                    <p class="section-text">{ABOUT_TEXT}</p>
                    <div class="tag-list">
                        {ABOUT_TAGS.iter().map(|tag| view! { <span class="tag">{*tag}</span> }).collect::<Vec<_>>()}
                    </div>
                </div>
                <img src=photo alt="Team photo" class="about-photo" />
            </div>
        </section>
    }
}
