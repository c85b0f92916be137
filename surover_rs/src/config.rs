//! Configuration file support.
//!
//! Loads an optional `surover.toml` from the working directory, or the file
//! given with `--config`. Every key is optional:
//!
//! ```toml
//! brand = "SuRover"
//! out_dir = "dist"
//! link_mode = "static"
//! copyright_year = 2025
//!
//! [hero]
//! video = "/media/erc-opening.mp4"
//! pause_at_secs = 30.0
//!
//! [assets]
//! team_photo = "/img/team.jpg"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use surover_site::{LinkMode, SiteConfig};
use thiserror::Error;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "surover.toml";

/// Default output directory for `surover build`.
pub const DEFAULT_OUT_DIR: &str = "dist";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Root configuration: build settings plus the presentation settings that
/// are handed to the renderer untouched.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SuroverConfig {
    /// Where `build` writes the site
    pub out_dir: Option<PathBuf>,
    /// Link style for `build` and `render`
    pub link_mode: Option<LinkMode>,
    #[serde(flatten)]
    pub site: SiteConfig,
}

impl SuroverConfig {
    /// Load `surover.toml` from `root`. A missing file yields defaults.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_path(&path)
    }

    /// Load a specific file. The file must exist.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn out_dir(&self) -> PathBuf {
        self.out_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
    }

    /// Fill the copyright year with `year` unless the file pinned one.
    pub fn with_year_fallback(mut self, year: i32) -> Self {
        self.site.copyright_year.get_or_insert(year);
        self
    }
}
