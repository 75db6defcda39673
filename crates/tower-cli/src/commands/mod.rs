//! Command implementations for tower-cli

pub mod check;
pub mod export;
pub mod plan;
pub mod resolve;

pub use check::run_check;
pub use export::run_export;
pub use plan::run_plan;
pub use resolve::run_resolve;

use std::path::Path;

use colored::Colorize;
use tower_core::{LoadedDocument, RunReport};

use crate::error::{CliError, Result};

/// Load the configuration document, with a hint when it does not exist
fn load_document(path: &Path) -> Result<LoadedDocument> {
    if !path.exists() {
        return Err(CliError::user(format!(
            "Configuration not found at {}. Use --config or TOWER_CONFIG to point at it.",
            path.display()
        )));
    }
    tracing::debug!(path = %path.display(), "Loading configuration");
    Ok(LoadedDocument::load(path)?)
}

/// Print provisioning failures to stderr
fn print_failures(report: &RunReport) {
    for failure in &report.failures {
        eprintln!(
            "{} {}: {}",
            "failed:".red().bold(),
            failure.repository,
            failure.message
        );
    }
}

/// Turn failures into a non-zero exit
fn failures_to_error(failed: usize, total: usize) -> Result<()> {
    if failed == 0 {
        Ok(())
    } else {
        Err(CliError::user(format!(
            "{failed} of {total} repositories failed"
        )))
    }
}
