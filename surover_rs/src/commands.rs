//! Subcommand implementations.

use anyhow::{Context, Result};
use chrono::Datelike;
use std::io::Write;
use std::path::Path;
use surover_model::Route;
use surover_site::{LinkMode, render_page};
use tracing::{debug, info, warn};

use crate::args::{BuildArgs, Cli, Command, RenderArgs};
use crate::build::{ManifestEntry, build_site};
use crate::config::SuroverConfig;

/// Resolve the config for this invocation.
pub fn load_config(explicit: Option<&Path>) -> Result<SuroverConfig> {
    let config = match explicit {
        Some(path) => SuroverConfig::load_from_path(path)?,
        None => {
            let cwd = std::env::current_dir().context("cannot determine working directory")?;
            SuroverConfig::load(&cwd)?
        }
    };
    Ok(config.with_year_fallback(chrono::Local::now().year()))
}

pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Build(args) => build(args, config, out),
        Command::Render(args) => render(args, config, out),
        Command::Route { fragment } => {
            let route = Route::resolve(&fragment);
            debug!(%fragment, %route, "resolved");
            writeln!(out, "{}", route.slug())?;
            Ok(())
        }
        Command::Routes { json } => routes(json, out),
    }
}

fn build(args: BuildArgs, mut config: SuroverConfig, out: &mut impl Write) -> Result<()> {
    let out_dir = args.out.clone().unwrap_or_else(|| config.out_dir());
    if args.bundle.is_some() {
        config.site.bundle = args.bundle;
    }
    let link_mode = link_mode(args.link_mode.map(Into::into), &config);
    if link_mode == LinkMode::Hash && config.site.bundle.is_none() {
        warn!("hash links without a bundle: page links need the wasm app to work");
    }

    info!("Building {} ({:?} links)", config.site.brand, link_mode);
    let report = build_site(&out_dir, &config.site, link_mode)
        .with_context(|| format!("build into {} failed", out_dir.display()))?;

    for file in &report.files {
        writeln!(out, "{}", file.display())?;
    }
    Ok(())
}

fn render(args: RenderArgs, config: SuroverConfig, out: &mut impl Write) -> Result<()> {
    let route = Route::resolve(&args.fragment);
    let link_mode = link_mode(args.link_mode.map(Into::into), &config);
    info!("Rendering {} for fragment {:?}", route, args.fragment);

    let html = render_page(route, &config.site, link_mode);
    out.write_all(html.as_bytes())?;
    writeln!(out)?;
    Ok(())
}

fn routes(json: bool, out: &mut impl Write) -> Result<()> {
    let entries: Vec<ManifestEntry> = Route::ALL.into_iter().map(ManifestEntry::from).collect();
    if json {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
        return Ok(());
    }
    for entry in entries {
        writeln!(out, "{:<10} {:<12} {}", entry.label, entry.fragment, entry.file)?;
    }
    Ok(())
}

/// Flag beats config. Without either, hash links only when a bundle is set.
fn link_mode(flag: Option<LinkMode>, config: &SuroverConfig) -> LinkMode {
    flag.or(config.link_mode).unwrap_or_else(|| config.site.default_link_mode())
}
