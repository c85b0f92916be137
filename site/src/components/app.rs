//! Route switch: mounts exactly one page for the current route.

use super::{ExposPage, Footer, HomePage, ProgramsPage, SiteHeader, SponsorsPage, TeamPage};
use crate::{LinkMode, SiteConfig};
use leptos::prelude::*;
use surover_model::Route;

/// Top-level view.
///
/// `route` is owned by the caller: the browser shell feeds it from
/// `RouteResolver`, the prerenderer passes a fixed value. A page remounts
/// only when the route actually changes, so following an in-page anchor
/// such as `#about` keeps the hero video and the systems tab as they are.
#[component]
pub fn App(
    /// Current page
    #[prop(into)]
    route: Signal<Route>,
    /// Presentation settings
    config: SiteConfig,
    /// How page links are written
    #[prop(optional)]
    link_mode: LinkMode,
) -> impl IntoView {
    provide_context(link_mode);

    let page = Memo::new(move |_| route.get());
    let brand = config.brand.clone();
    let year = config.copyright_year;
    let config = StoredValue::new(config);

    view! {
        <div class="site">
            <SiteHeader current=page brand=brand.clone() />
            {move || config.with_value(|config| page_view(page.get(), config))}
            <Footer brand=brand year=year />
        </div>
    }
}

fn page_view(route: Route, config: &SiteConfig) -> AnyView {
    match route {
        Route::Home => view! { <HomePage config=config.clone() /> }.into_any(),
        Route::Expos => view! { <ExposPage /> }.into_any(),
        Route::Sponsors => {
            view! { <SponsorsPage image=config.assets.sponsor_image.clone() /> }.into_any()
        }
        Route::Programs => view! { <ProgramsPage /> }.into_any(),
        Route::Team => view! { <TeamPage /> }.into_any(),
    }
}
