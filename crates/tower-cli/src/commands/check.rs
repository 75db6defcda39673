//! Check command: validate and lint the configuration

use std::path::Path;

use colored::Colorize;
use serde::Serialize;
use tower_core::{LintWarning, WarnLevel, lint_document};

use super::{failures_to_error, load_document};
use crate::error::{CliError, Result};

#[derive(Serialize)]
struct CheckEntry<'a> {
    repository: &'a str,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    repositories: Vec<CheckEntry<'a>>,
    warnings: &'a [LintWarning],
}

/// Run the check command
pub fn run_check(config: &Path, json: bool) -> Result<()> {
    let document = load_document(config)?;
    let warnings = lint_document(&document);
    let batch = document.resolve();

    let entries: Vec<CheckEntry<'_>> = batch
        .resolutions
        .iter()
        .map(|r| CheckEntry {
            repository: &r.name,
            ok: r.result.is_ok(),
            error: r.result.as_ref().err().map(|e| e.to_string()),
        })
        .collect();
    let failed = entries.iter().filter(|e| !e.ok).count();

    if json {
        let output = CheckOutput {
            repositories: entries,
            warnings: &warnings,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return check_result(failed, batch.len(), &warnings);
    }

    println!("{}", "Repositories".bold());
    for entry in &entries {
        match &entry.error {
            None => println!("  {} {}", "ok".green(), entry.repository),
            Some(error) => println!("  {} {}: {}", "fail".red().bold(), entry.repository, error),
        }
    }

    if !warnings.is_empty() {
        println!();
        println!("{}", "Lint".bold());
        for warning in &warnings {
            let level = match warning.level {
                WarnLevel::Info => warning.level.to_string().blue(),
                WarnLevel::Warning => warning.level.to_string().yellow(),
                WarnLevel::Error => warning.level.to_string().red(),
            };
            println!("  {} [{}] {}", level, warning.repository, warning.message);
        }
    }

    println!();
    println!(
        "{} {} repositories, {} failed, {} lint findings.",
        "Checked:".dimmed(),
        batch.len(),
        failed,
        warnings.len()
    );

    check_result(failed, batch.len(), &warnings)
}

/// Resolution failures first, then error-level lint findings
fn check_result(failed: usize, total: usize, warnings: &[LintWarning]) -> Result<()> {
    failures_to_error(failed, total)?;
    let errors = warnings
        .iter()
        .filter(|w| w.level == WarnLevel::Error)
        .count();
    if errors > 0 {
        return Err(CliError::user(format!("{errors} lint error(s) found")));
    }
    Ok(())
}
