// SuRover site - browser entry point (Leptos 0.8, client-side rendering)

mod router;

use leptos::prelude::*;
use surover_site::components::{App, MOUNT_ID};
use surover_site::{BOOT_ATTR, BootState};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();

    let root = mount_point();
    let BootState {
        route: landing,
        link_mode,
        mut config,
    } = root.as_ref().map(boot_state).unwrap_or_default();
    config
        .copyright_year
        .get_or_insert(js_sys::Date::new_0().get_full_year() as i32);

    let route = router::install(landing);
    let app = move || view! { <App route=route config=config link_mode=link_mode /> };

    // Prerendered pages ship their markup inside #app; replace it with the live tree.
    match root {
        Some(root) => {
            root.set_inner_html("");
            leptos::mount::mount_to(root, app).forget();
        }
        None => leptos::mount::mount_to_body(app),
    }
}

fn mount_point() -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(MOUNT_ID)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

/// State the prerendered page left on the mount element; defaults without one.
fn boot_state(root: &web_sys::HtmlElement) -> BootState {
    let Some(raw) = root.get_attribute(BOOT_ATTR) else {
        return BootState::default();
    };
    BootState::from_json(&raw).unwrap_or_else(|err| {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "[surover] ignoring {BOOT_ATTR}: {err}"
        )));
        BootState::default()
    })
}
