use super::{Icon, social_icon};
use leptos::prelude::*;
use surover_model::content::SOCIAL_LINKS;

/// Social links and copyright line, shared by every page.
#[component]
pub fn Footer(
    /// Brand text
    brand: String,
    /// Copyright year, omitted when `None`
    year: Option<i32>,
) -> impl IntoView {
    let copyright = match year {
        Some(year) => format!("© {year} {brand} • All rights reserved."),
        None => format!("© {brand} • All rights reserved."),
    };

    view! {
        <footer id="social" class="footer">
            <div class="container footer-inner">
                <p class="footer-label">"Follow us"</p>
                <div class="footer-links">
                    {SOCIAL_LINKS.iter().map(|link| view! {
                        <a href=link.href class="social-link" aria-label=link.label target="_blank" rel="noopener">
                            {match social_icon(link.label) {
                                Some(path) => view! { <Icon path=path /> }.into_any(),
                                None => view! { {link.label} }.into_any(),
                            }}
                        </a>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
            <p class="footer-copyright">{copyright}</p>
        </footer>
    }
}
