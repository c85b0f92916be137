//! # surover-site
//!
//! Leptos components for the SuRover team site, plus an SSR entry point
//! that prerenders each page to a static HTML document.
//!
//! The same components run in two places:
//!
//! - **SSR** (`ssr` feature, default) - the `surover` CLI calls
//!   [`render_page`] / [`render_site`] to write static files.
//! - **CSR** (`csr` feature) - `surover-web` mounts [`components::App`] in the
//!   browser and drives its route signal from the `hashchange` event,
//!   starting from the [`BootState`] the prerendered page carries.
//!
//! ```rust
//! use surover_model::Route;
//! use surover_site::{render_page, LinkMode, SiteConfig};
//!
//! let html = render_page(Route::Team, &SiteConfig::default(), LinkMode::Hash);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Modules
//!
//! - [`boot`] - page state handed from prerendered markup to the browser app
//! - [`config`] - presentation settings (brand, hero video, asset URLs)
//! - [`components`] - pages, sections and the route-switching `App`
//! - [`styles`] - the site stylesheet

#![warn(missing_docs)]
#![recursion_limit = "256"]

pub mod boot;
pub mod components;
pub mod config;
#[cfg(feature = "ssr")]
mod render;
pub mod styles;

pub use boot::{BOOT_ATTR, BootState};
pub use config::{AssetConfig, HeroConfig, LinkMode, SiteConfig};
#[cfg(feature = "ssr")]
pub use render::{RenderedPage, render_page, render_site};
