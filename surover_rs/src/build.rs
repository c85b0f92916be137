//! Prerender the whole site into a directory.
//!
//! Output layout:
//!
//! ```text
//! <out>/index.html      Home
//! <out>/expos.html
//! <out>/sponsors.html
//! <out>/programs.html
//! <out>/team.html
//! <out>/site.json       route manifest
//! ```

use serde::Serialize;
use std::path::{Path, PathBuf};
use surover_model::Route;
use surover_site::{LinkMode, SiteConfig, render_site};
use thiserror::Error;
use tracing::{debug, info};

/// Manifest file written next to the pages.
pub const MANIFEST_FILE: &str = "site.json";

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize site manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// One row of `site.json`.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestEntry {
    pub route: Route,
    pub label: &'static str,
    pub path: &'static str,
    pub fragment: &'static str,
    pub file: &'static str,
}

impl From<Route> for ManifestEntry {
    fn from(route: Route) -> Self {
        Self {
            route,
            label: route.label(),
            path: route.path(),
            fragment: route.fragment(),
            file: route.static_file(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SiteManifest {
    pub brand: String,
    pub link_mode: LinkMode,
    pub pages: Vec<ManifestEntry>,
}

impl SiteManifest {
    pub fn new(config: &SiteConfig, link_mode: LinkMode) -> Self {
        Self {
            brand: config.brand.clone(),
            link_mode,
            pages: Route::ALL.into_iter().map(ManifestEntry::from).collect(),
        }
    }
}

/// What a build produced.
#[derive(Debug)]
pub struct BuildReport {
    pub out_dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub bytes: usize,
}

/// Render every page into `out_dir`, creating it if needed.
pub fn build_site(
    out_dir: &Path,
    config: &SiteConfig,
    link_mode: LinkMode,
) -> Result<BuildReport, BuildError> {
    std::fs::create_dir_all(out_dir).map_err(|source| BuildError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    let mut bytes = 0;

    for page in render_site(config, link_mode) {
        let path = out_dir.join(page.file_name);
        write_file(&path, &page.html)?;
        debug!(route = %page.route, file = %path.display(), "wrote page");
        bytes += page.html.len();
        files.push(path);
    }

    let manifest = serde_json::to_string_pretty(&SiteManifest::new(config, link_mode))?;
    let manifest_path = out_dir.join(MANIFEST_FILE);
    write_file(&manifest_path, &manifest)?;
    files.push(manifest_path);

    info!(
        pages = Route::ALL.len(),
        bytes,
        "site written to {}",
        out_dir.display()
    );

    Ok(BuildReport {
        out_dir: out_dir.to_path_buf(),
        files,
        bytes,
    })
}

fn write_file(path: &Path, content: &str) -> Result<(), BuildError> {
    std::fs::write(path, content).map_err(|source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_every_page_and_manifest() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("dist");

        let report = build_site(&out, &SiteConfig::default(), LinkMode::Static).expect("build");

        assert_eq!(report.files.len(), Route::ALL.len() + 1);
        for route in Route::ALL {
            let html = std::fs::read_to_string(out.join(route.static_file())).expect("page");
            assert!(html.starts_with("<!DOCTYPE html>"));
        }
        assert!(report.bytes > 0);
    }

    #[test]
    fn manifest_lists_routes_in_order() {
        let temp = TempDir::new().expect("temp dir");
        build_site(temp.path(), &SiteConfig::default(), LinkMode::Hash).expect("build");

        let raw = std::fs::read_to_string(temp.path().join(MANIFEST_FILE)).expect("manifest");
        let json: serde_json::Value = serde_json::from_str(&raw).expect("json");

        assert_eq!(json["link_mode"], "hash");
        let slugs: Vec<&str> = json["pages"]
            .as_array()
            .expect("pages")
            .iter()
            .map(|p| p["route"].as_str().expect("route"))
            .collect();
        assert_eq!(slugs, vec!["home", "expos", "sponsors", "programs", "team"]);
        assert_eq!(json["pages"][4]["fragment"], "#/team");
    }

    #[test]
    fn unwritable_target_is_reported() {
        let temp = TempDir::new().expect("temp dir");
        let blocker = temp.path().join("taken");
        std::fs::write(&blocker, "file, not a dir").expect("write");

        let err = build_site(&blocker, &SiteConfig::default(), LinkMode::Hash).unwrap_err();
        assert!(matches!(err, BuildError::CreateDir { .. }));
    }
}
