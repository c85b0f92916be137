//! Browser side of hash routing.
//!
//! `RouteResolver` stays free of browser globals; this module is the only
//! place that reads `window.location.hash`. It seeds the resolver with the
//! fragment present at load time, forwards every `hashchange` event to
//! `navigate`, and mirrors the resolved route into a Leptos signal.
//!
//! An empty hash keeps the page the document was prerendered as, so
//! `expos.html` opened without a fragment stays on Expos.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use surover_model::{Route, RouteResolver};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

/// Start listening for navigation. Returns the route signal for `App`.
pub fn install(landing: Route) -> ReadSignal<Route> {
    let resolver = RouteResolver::with_landing(&current_fragment(), landing);
    let resolver = Rc::new(RefCell::new(resolver));
    let (route, set_route) = signal(resolver.borrow().current());

    resolver.borrow_mut().subscribe(move |next| {
        web_sys::console::debug_1(&JsValue::from_str(&format!("[surover] route {next}")));
        set_route.set(next);
    });

    if let Some(window) = web_sys::window() {
        let resolver = resolver.clone();
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            resolver.borrow_mut().navigate(&current_fragment());
        }) as Box<dyn FnMut(_)>);

        let _ = window
            .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());

        closure.forget(); // Listener lives as long as the page
    }

    route
}

fn current_fragment() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}
