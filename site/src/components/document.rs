//! Root document component - the complete HTML page

use super::App;
use crate::styles::SITE_CSS;
use crate::{BootState, LinkMode, SiteConfig};
use leptos::prelude::*;
use surover_model::Route;

/// Element the browser app mounts into, replacing the prerendered markup.
pub const MOUNT_ID: &str = "app";

/// The complete HTML document for one page.
#[component]
pub fn SiteDocument(
    /// Page to render
    route: Route,
    /// Presentation settings
    config: SiteConfig,
    /// How page links are written
    #[prop(optional)]
    link_mode: LinkMode,
) -> impl IntoView {
    let title = config.page_title(route);
    let boot = config
        .bundle
        .clone()
        .map(|bundle| format!("import init from '{bundle}'; init();"));
    // Only pages that start the app need to hand it their state.
    let state = boot.as_ref().and_then(|_| {
        BootState {
            route,
            link_mode,
            config: config.clone(),
        }
        .to_json()
        .ok()
    });

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <div id=MOUNT_ID data-boot=state>
                    <App route=Signal::derive(move || route) config=config link_mode=link_mode />
                </div>
                {boot.map(|script| view! { <script type="module">{script}</script> })}
            </body>
        </html>
    }
}
