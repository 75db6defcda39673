//! Plan command: show what provisioning would do

use std::path::Path;

use colored::Colorize;
use serde::Serialize;
use tower_core::{Action, Plan, PlanProvisioner, RunReport, provision};

use super::{failures_to_error, load_document, print_failures};
use crate::error::Result;

#[derive(Serialize)]
struct PlanOutput<'a> {
    plan: &'a Plan,
    report: &'a RunReport,
}

/// Build a plan for every repository in the configuration
pub(crate) fn build_plan(config: &Path, owner: Option<&str>) -> Result<(Plan, RunReport, usize)> {
    let document = load_document(config)?;
    let batch = document.resolve();

    let mut planner = match owner {
        Some(owner) => PlanProvisioner::with_default_owner(owner),
        None => PlanProvisioner::new(),
    };
    let report = provision(&batch, &mut planner);

    Ok((planner.into_plan(), report, batch.len()))
}

/// Run the plan command
pub fn run_plan(config: &Path, owner: Option<&str>, json: bool) -> Result<()> {
    let (plan, report, total) = build_plan(config, owner)?;

    if json {
        let output = PlanOutput {
            plan: &plan,
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return failures_to_error(report.failures.len(), total);
    }

    println!("{}", "Plan".bold());
    for action in &plan.actions {
        let marker = match action {
            Action::ConfigureRepository { .. } => "~".yellow(),
            _ => "+".green(),
        };
        println!("  {} {}", marker, action);
    }

    if !report.outputs.is_empty() {
        println!();
        println!("{}", "Outputs".bold());
        for (key, url) in &report.outputs {
            println!("  {:<32} {}", key.cyan(), url);
        }
    }

    print_failures(&report);

    println!();
    println!(
        "{} {} actions for {} repositories.",
        "Total:".dimmed(),
        plan.len(),
        report.provisioned.len()
    );

    failures_to_error(report.failures.len(), total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CONFIG: &str = "defaults:\n  ruleset: {}\nrepositories:\n  - name: acme/api\n  - name: web\n";

    #[test]
    fn test_build_plan_with_owner() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("repos.yaml");
        fs::write(&path, CONFIG).unwrap();

        let (plan, report, total) = build_plan(&path, Some("acme")).unwrap();

        assert_eq!(total, 2);
        assert_eq!(plan.len(), 4);
        assert_eq!(report.outputs["web_url"], "https://github.com/acme/web");
    }

    #[test]
    fn test_plan_without_owner_fails_for_bare_names() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("repos.yaml");
        fs::write(&path, CONFIG).unwrap();

        assert!(run_plan(&path, None, false).is_err());
        assert!(run_plan(&path, Some("acme"), true).is_ok());
    }
}
