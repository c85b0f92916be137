//! `surover` binary entry point.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use surover::args::Cli;
use surover::commands;

fn init_tracing(level: &str) {
    // Logs go to stderr; stdout carries rendered HTML and listings.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.parse().unwrap_or_default()),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = commands::run(cli, &mut out).and_then(|()| out.flush().map_err(Into::into));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[surover] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
