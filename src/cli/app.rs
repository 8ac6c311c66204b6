//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use imagehook::GitBackend;
use imagehook::output::OutputMode;

/// imagehook - Find newly staged files for pre-commit image processing
#[derive(Parser, Debug)]
#[command(
    name = "imagehook",
    version,
    about = "Find newly staged files for pre-commit image processing",
    long_about = "Lists files staged as newly added in the current git repository.\n\n\
                  Paths are relative to the repository root, one per line, sorted.\n\
                  Any failure exits non-zero so the calling hook aborts the commit."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List files staged as newly added
    Staged {
        /// Directory inside the repository (defaults to the current directory)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Backend used to read the index: cli, libgit2
        #[arg(short, long)]
        backend: Option<GitBackend>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays a clean path list
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Staged { root, backend }) => commands::staged(root, backend, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": imagehook::VERSION
                    })
                );
            } else {
                println!("imagehook v{}", imagehook::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": imagehook::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("imagehook v{}", imagehook::VERSION);
                println!("\nRun 'imagehook --help' for usage");
                println!("Run 'imagehook staged' to list newly staged files");
            }
            Ok(())
        },
    }
}
