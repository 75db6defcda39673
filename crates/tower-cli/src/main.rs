//! Tower CLI
//!
//! Resolves per-repository GitHub settings from shared defaults and
//! shows or exports what provisioning would apply.

mod cli;
mod commands;
mod error;

use std::path::Path;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(cmd) => execute_command(cmd, &cli.config),
        None => {
            println!("{} Repository settings as code", "tower".green().bold());
            println!();
            println!("Run {} for available commands.", "tower --help".cyan());
            Ok(())
        }
    }
}

/// `--verbose` forces DEBUG; otherwise `RUST_LOG` applies, defaulting to warnings.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let initialized = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
    if initialized.is_ok() {
        tracing::debug!("Verbose mode enabled");
    }
}

fn execute_command(cmd: Commands, config: &Path) -> Result<()> {
    match cmd {
        Commands::Resolve { name, json } => commands::run_resolve(config, name.as_deref(), json),
        Commands::Check { json } => commands::run_check(config, json),
        Commands::Plan { owner, json } => commands::run_plan(config, owner.as_deref(), json),
        Commands::Export { output, owner } => {
            commands::run_export(config, &output, owner.as_deref())
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "tower", &mut std::io::stdout());
            Ok(())
        }
    }
}
