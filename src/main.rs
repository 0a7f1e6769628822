//! Decoy - fake credentials and demo prompts for secret-scanner demos.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use decoy::cli::output;
use decoy::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("DECOY_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("decoy=debug")
        } else {
            EnvFilter::new("decoy=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
