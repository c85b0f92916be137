//! Leptos components for the site.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument (SSR only: <html>, <head>, stylesheet)
//! └── App (route signal -> page)
//!     ├── SiteHeader (nav + mobile menu)
//!     ├── HomePage
//!     │   ├── Hero (video + play/pause)
//!     │   ├── About
//!     │   ├── Rovers
//!     │   └── Systems (SectionSelector)
//!     │       └── SystemPanel
//!     ├── ExposPage
//!     ├── SponsorsPage
//!     ├── ProgramsPage
//!     ├── TeamPage
//!     └── Footer
//! ```
//!
//! Links between pages go through [`crate::LinkMode`], provided as context
//! by [`App`], so the same tree serves the SPA and the prerendered files.

mod about;
mod app;
mod document;
mod expos;
mod footer;
mod header;
mod hero;
mod home;
mod icons;
mod programs;
mod rovers;
mod sponsors;
mod systems;
mod team;

pub use about::About;
pub use app::App;
pub use document::{MOUNT_ID, SiteDocument};
pub use expos::ExposPage;
pub use footer::Footer;
pub use header::SiteHeader;
pub use hero::Hero;
pub use home::HomePage;
pub use icons::*;
pub use programs::ProgramsPage;
pub use rovers::Rovers;
pub use sponsors::SponsorsPage;
pub use systems::{SystemPanel, Systems};
pub use team::TeamPage;

use crate::LinkMode;
use leptos::prelude::*;

/// Link mode from context; hash links when none was provided.
pub(crate) fn link_mode() -> LinkMode {
    use_context::<LinkMode>().unwrap_or_default()
}
