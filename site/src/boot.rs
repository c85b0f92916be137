//! Page state handed from a prerendered document to the browser app.
//!
//! A prerendered page that loads the wasm bundle carries its route, link mode
//! and settings as JSON in the [`BOOT_ATTR`] attribute of the mount element.
//! The browser app reads it back before mounting, so the live tree matches the
//! markup it replaces.

use serde::{Deserialize, Serialize};
use surover_model::Route;

use crate::{LinkMode, SiteConfig};

/// Attribute on the mount element holding the serialized [`BootState`].
pub const BOOT_ATTR: &str = "data-boot";

/// Everything the browser app needs to rebuild a prerendered page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootState {
    /// Page the document was prerendered as
    pub route: Route,
    /// Link style of the prerendered markup
    pub link_mode: LinkMode,
    /// Settings the page was rendered with
    pub config: SiteConfig,
}

impl BootState {
    /// Serialize for the mount element attribute.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse the attribute value as the browser hands it back (entities decoded).
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
