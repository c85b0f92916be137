use super::{ICON_LIST, Icon, link_mode};
use leptos::prelude::*;
use surover_model::content::NAV;
use surover_model::{MenuToggle, Route};

/// Fixed top bar: brand, page links, and the mobile menu button.
#[component]
pub fn SiteHeader(
    /// Page to mark as current
    #[prop(into)]
    current: Signal<Route>,
    /// Brand text
    brand: String,
) -> impl IntoView {
    let links = link_mode();
    let menu = RwSignal::new(MenuToggle::default());

    view! {
        <header class="site-header">
            <div class="container header-inner">
                <a href=links.href(Route::Home) class="brand">{brand}</a>
                <button
                    class="menu-button"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| menu.update(|m| {
                        m.toggle();
                    })
                >
                    <Icon path=ICON_LIST size="22" />
                </button>
                <nav class=move || if menu.get().is_open() { "site-nav open" } else { "site-nav" }>
                    {NAV.iter().map(|entry| {
                        let route = entry.route;
                        view! {
                            <a
                                href=links.nav_href(entry)
                                class=move || if current.get() == route { "nav-link active" } else { "nav-link" }
                                aria-current=move || (current.get() == route).then_some("page")
                                on:click=move |_| menu.update(|m| m.close())
                            >
                                {entry.label}
                            </a>
                        }
                    }).collect::<Vec<_>>()}
                </nav>
            </div>
        </header>
    }
}
