//! Resolve command: print resolved repository configurations

use std::path::Path;

use colored::Colorize;
use tower_core::ResolvedConfig;

use super::load_document;
use crate::error::{CliError, Result};

/// Run the resolve command
pub fn run_resolve(config: &Path, name: Option<&str>, json: bool) -> Result<()> {
    let document = load_document(config)?;
    let batch = document.resolve();

    for (repo, error) in batch.failures() {
        if name.is_none_or(|n| n == repo) {
            eprintln!("{} {}: {}", "warning:".yellow().bold(), repo, error);
        }
    }

    let configs: Vec<&ResolvedConfig> = batch
        .resolved()
        .filter(|c| name.is_none_or(|n| n == c.name))
        .collect();

    if let Some(n) = name {
        if configs.is_empty() {
            return Err(CliError::user(format!(
                "Repository '{}' is not configured or failed to resolve",
                n
            )));
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&configs)?);
    } else {
        print!("{}", serde_yaml::to_string(&configs)?);
    }

    Ok(())
}
