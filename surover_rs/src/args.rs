//! Command-line arguments.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use surover_site::LinkMode;

#[derive(Parser, Debug)]
#[command(name = "surover")]
#[command(about = "Prerender and inspect the SuRover team site")]
#[command(version)]
pub struct Cli {
    /// Config file (default: ./surover.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prerender every page into a directory
    Build(BuildArgs),
    /// Print the HTML document for a fragment
    Render(RenderArgs),
    /// Print the page a fragment resolves to
    Route {
        /// Location fragment, e.g. '#/team'
        fragment: String,
    },
    /// List pages in navigation order
    Routes {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Output directory (default: config `out_dir`, else ./dist)
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// How pages link to each other
    #[arg(long, value_enum)]
    pub link_mode: Option<LinkModeArg>,

    /// Module script that boots the wasm app
    #[arg(long)]
    pub bundle: Option<String>,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Location fragment, e.g. '#/expos'
    #[arg(default_value = "#/home")]
    pub fragment: String,

    /// How pages link to each other
    #[arg(long, value_enum)]
    pub link_mode: Option<LinkModeArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LinkModeArg {
    /// `#/expos` links for the single-page app
    Hash,
    /// `expos.html` links between prerendered files
    Static,
}

impl From<LinkModeArg> for LinkMode {
    fn from(arg: LinkModeArg) -> Self {
        match arg {
            LinkModeArg::Hash => LinkMode::Hash,
            LinkModeArg::Static => LinkMode::Static,
        }
    }
}
