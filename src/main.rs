use std::process::ExitCode;

use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Args, CliError};

fn main() -> ExitCode {
    init_logging();

    let args = Args::parse();
    tracing::debug!(
        "Starting pwd-check (stdin: {}, json: {}, blocklist: {:?})",
        args.stdin,
        args.json,
        args.blocklist
    );

    match cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::EmptyPassword) => {
            eprintln!("{}", style(CliError::EmptyPassword).red());
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!("pwd-check failed: {}", e);
            eprintln!("{} {}", style("Error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Logs to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
