//! Export command: write repository URL outputs to a file

use std::path::Path;

use colored::Colorize;
use tower_fs::ConfigStore;

use super::plan::build_plan;
use super::{failures_to_error, print_failures};
use crate::error::Result;

/// Run the export command
///
/// Outputs of repositories that provisioned cleanly are written even when
/// others failed; the command still exits non-zero in that case.
pub fn run_export(config: &Path, output: &Path, owner: Option<&str>) -> Result<()> {
    let (_, report, total) = build_plan(config, owner)?;

    ConfigStore::new().save(output, &report.outputs)?;
    println!(
        "{} Wrote {} outputs to {}",
        "OK".green().bold(),
        report.outputs.len(),
        output.display()
    );

    print_failures(&report);
    failures_to_error(report.failures.len(), total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_export_writes_urls() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("repos.yaml");
        fs::write(&config, "repositories:\n  - name: acme/api\n").unwrap();
        let output = dir.path().join("out").join("urls.json");

        run_export(&config, &output, None).unwrap();

        let written: BTreeMap<String, String> = ConfigStore::new().load(&output).unwrap();
        assert_eq!(written["acme/api_url"], "https://github.com/acme/api");
    }

    #[test]
    fn test_export_rejects_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("repos.yaml");
        fs::write(&config, "repositories:\n  - name: acme/api\n").unwrap();

        assert!(run_export(&config, &dir.path().join("urls.txt"), None).is_err());
    }
}
