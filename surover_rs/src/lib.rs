//! # surover
//!
//! Command-line front end for the SuRover team site: prerenders every page
//! with [`surover_site`], resolves fragments with [`surover_model::Route`],
//! and carries the configuration file and logging setup.

pub mod args;
pub mod build;
pub mod commands;
pub mod config;

pub use build::{BuildError, BuildReport, build_site};
pub use config::{ConfigError, SuroverConfig};
