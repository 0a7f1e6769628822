//! Command-line interface.

pub mod completions;
pub mod generate;
pub mod output;
pub mod scan;

use clap::{Parser, Subcommand};

/// Decoy - fake credentials and demo prompts for secret-scanner demos.
#[derive(Parser)]
#[command(
    name = "decoy",
    about = "Generate fake credentials and demo prompts for secret-scanner demos",
    version,
    after_help = "Plant fakes. Catch leaks. 🪤"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate fake secrets and demo prompts (the default)
    Generate {
        /// Seed the generator for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Scan text for credential-shaped strings
    Scan {
        /// File to scan (reads stdin when omitted or "-")
        path: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command. A bare `decoy` runs the full generate-and-report flow.
pub fn execute(command: Option<Command>) -> crate::error::Result<()> {
    use Command::*;

    match command.unwrap_or(Generate {
        seed: None,
        json: false,
    }) {
        Generate { seed, json } => generate::execute(seed, json),
        Scan { path, json } => scan::execute(path.as_deref(), json),
        Completions { shell } => completions::execute(shell),
    }
}
