//! Presentation settings.
//!
//! These are the knobs a deployment may want to change without touching the
//! content arrays: brand text, the hero video and the two large photos. The
//! CLI reads them from `surover.toml`; every field has a default so an empty
//! file (or none at all) renders the stock site.

use serde::{Deserialize, Serialize};
use surover_model::{NavEntry, Route};

/// Placeholder hero clip until the team's own footage is hosted.
pub const DEFAULT_HERO_VIDEO: &str =
    "https://cdn.coverr.co/videos/coverr-nasa-mission-control-7857/1080p.mp4";

/// Seconds after which the hero clip pauses itself.
pub const DEFAULT_PAUSE_AT_SECS: f64 = 30.0;

const DEFAULT_TEAM_PHOTO: &str =
    "https://images.unsplash.com/photo-1551836022-d5d88e9218df?q=80&w=1600&auto=format&fit=crop";
const DEFAULT_SPONSOR_IMAGE: &str =
    "https://images.unsplash.com/photo-1520975922139-994804f9b2ea?q=80&w=1600&auto=format&fit=crop";

/// Site-wide presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Brand shown in the header and footer
    pub brand: String,
    /// Document title of the home page; other pages use `"<Page> | <brand>"`
    pub title: String,
    /// Year in the footer copyright line. `None` hides the year.
    pub copyright_year: Option<i32>,
    /// Module script that boots the wasm app (e.g. `/pkg/surover_web.js`)
    pub bundle: Option<String>,
    /// Hero video settings
    pub hero: HeroConfig,
    /// Image URLs
    pub assets: AssetConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: surover_model::content::BRAND.to_string(),
            title: "SuRover | University Rover Team".to_string(),
            copyright_year: None,
            bundle: None,
            hero: HeroConfig::default(),
            assets: AssetConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Link style when neither the command line nor the config picks one.
    ///
    /// Hash links only work once the wasm app is running, so pages without a
    /// bundle link to each other's files.
    pub fn default_link_mode(&self) -> LinkMode {
        match self.bundle {
            Some(_) => LinkMode::Hash,
            None => LinkMode::Static,
        }
    }

    /// Document title for a route.
    pub fn page_title(&self, route: Route) -> String {
        match route {
            Route::Home => self.title.clone(),
            other => format!("{} | {}", other.label(), self.brand),
        }
    }
}

/// Hero banner video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Video source URL
    pub video: String,
    /// Start playing (muted) on load
    pub autoplay: bool,
    /// Auto-pause offset in seconds; `None` plays to the end
    pub pause_at_secs: Option<f64>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            video: DEFAULT_HERO_VIDEO.to_string(),
            autoplay: true,
            pause_at_secs: Some(DEFAULT_PAUSE_AT_SECS),
        }
    }
}

/// Large photos that are not part of a content record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Team photo in the about section
    pub team_photo: String,
    /// Sponsor logo wall
    pub sponsor_image: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            team_photo: DEFAULT_TEAM_PHOTO.to_string(),
            sponsor_image: DEFAULT_SPONSOR_IMAGE.to_string(),
        }
    }
}

/// How page links are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkMode {
    /// `#/expos` - the single-page app resolves the fragment
    #[default]
    Hash,
    /// `expos.html` - one prerendered file per page, no script needed
    Static,
}

impl LinkMode {
    /// Link target for a page.
    pub fn href(self, route: Route) -> &'static str {
        match self {
            LinkMode::Hash => route.fragment(),
            LinkMode::Static => route.static_file(),
        }
    }

    /// Link target for a navigation entry.
    pub fn nav_href(self, entry: &NavEntry) -> &'static str {
        match self {
            LinkMode::Hash => entry.target(),
            LinkMode::Static => entry.route.static_file(),
        }
    }
}
