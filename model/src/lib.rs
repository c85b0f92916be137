//! Framework-free state and content for the SuRover site.
//!
//! Everything here is plain Rust: the hash router, the section selector,
//! the playback and menu toggles, and the static content arrays. The Leptos
//! components in `surover-site` and the browser bootstrap in `surover-web`
//! build on top of these types.

pub mod content;
pub mod menu;
pub mod playback;
pub mod route;
pub mod selector;
pub mod types;

pub use menu::MenuToggle;
pub use playback::{MediaControl, PlaybackToggle};
pub use route::{Route, RouteResolver, SubscriptionId};
pub use selector::{Section, SectionSelector};
pub use types::*;
