//! Provisioning boundary
//!
//! A [`Provisioner`] turns resolved configurations into live changes. The
//! engine only decides *what* each repository should look like; the
//! provisioner owns every remote interaction. [`provision`] drives a
//! provisioner over a batch, one repository at a time, and keeps going
//! when a single repository fails.

mod plan;

use std::collections::BTreeMap;

use serde::Serialize;
use tower_meta::{RepositorySecret, RepositoryVariable, Ruleset, Visibility};

use crate::Result;
use crate::config::{BatchResolution, ResolvedConfig};

pub use plan::{Action, Plan, PlanProvisioner};

/// Convert a repository name to a resource identifier (`owner/repo` -> `owner-repo`)
pub fn resource_name(name: &str) -> String {
    name.replace('/', "-")
}

/// Strip the owner from a repository name (`owner/repo` -> `repo`)
pub fn repo_name(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

/// A repository as known to the provisioning side
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryHandle {
    pub name: String,
    pub html_url: String,
}

/// Repository-level settings sent when configuring a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositorySettings {
    pub name: String,
    pub description: String,
    pub visibility: Visibility,
    pub has_issues: bool,
    pub has_wiki: bool,
    pub has_projects: bool,
    pub delete_branch_on_merge: bool,
    pub allow_merge_commit: bool,
    pub allow_squash_merge: bool,
    pub allow_rebase_merge: bool,
    pub topics: Vec<String>,
}

impl From<&ResolvedConfig> for RepositorySettings {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            name: repo_name(&config.name).to_string(),
            description: config.description.clone(),
            visibility: config.visibility,
            has_issues: config.has_issues,
            has_wiki: config.has_wiki,
            has_projects: config.has_projects,
            delete_branch_on_merge: config.delete_branch_on_merge,
            allow_merge_commit: config.allow_merge_commit,
            allow_squash_merge: config.allow_squash_merge,
            allow_rebase_merge: config.allow_rebase_merge,
            topics: config.topics.clone(),
        }
    }
}

/// Applies resolved configurations to a remote system
pub trait Provisioner {
    /// Create or adopt the repository with the resolved settings.
    fn configure_repository(&mut self, config: &ResolvedConfig) -> Result<RepositoryHandle>;

    /// Apply the resolved ruleset to the repository.
    fn configure_ruleset(&mut self, config: &ResolvedConfig, ruleset: &Ruleset) -> Result<()>;

    /// Create an Actions secret on `repository`.
    fn create_secret(&mut self, repository: &str, secret: &RepositorySecret) -> Result<()>;

    /// Create an Actions variable on `repository`.
    fn create_variable(&mut self, repository: &str, variable: &RepositoryVariable) -> Result<()>;
}

/// A repository that could not be resolved or provisioned
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub repository: String,
    pub message: String,
}

/// Result of driving a provisioner over a batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Repositories provisioned without error, in order
    pub provisioned: Vec<String>,
    /// Exported outputs, keyed `<name>_url`
    pub outputs: BTreeMap<String, String>,
    pub failures: Vec<Failure>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Provision every resolved repository in `batch`.
///
/// Per repository the order is: repository settings, ruleset, secrets,
/// variables. The first failing step abandons that repository only.
pub fn provision<P: Provisioner + ?Sized>(batch: &BatchResolution, provisioner: &mut P) -> RunReport {
    let mut report = RunReport::default();

    for resolution in &batch.resolutions {
        let outcome = match &resolution.result {
            Ok(config) => provision_one(config, provisioner),
            Err(e) => {
                report.failures.push(Failure {
                    repository: resolution.name.clone(),
                    message: e.to_string(),
                });
                continue;
            }
        };

        match outcome {
            Ok(handle) => {
                report
                    .outputs
                    .insert(format!("{}_url", resolution.name), handle.html_url);
                report.provisioned.push(resolution.name.clone());
            }
            Err(e) => {
                tracing::warn!(repository = %resolution.name, error = %e, "Provisioning failed");
                report.failures.push(Failure {
                    repository: resolution.name.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    tracing::debug!(
        provisioned = report.provisioned.len(),
        failed = report.failures.len(),
        "Provisioning run complete"
    );
    report
}

fn provision_one<P: Provisioner + ?Sized>(
    config: &ResolvedConfig,
    provisioner: &mut P,
) -> Result<RepositoryHandle> {
    let handle = provisioner.configure_repository(config)?;

    if let Some(ruleset) = &config.ruleset {
        provisioner.configure_ruleset(config, ruleset)?;
    }
    for secret in &config.secrets {
        provisioner.create_secret(&config.name, secret)?;
    }
    for variable in &config.variables {
        provisioner.create_variable(&config.name, variable)?;
    }

    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::config::ConfigResolver;
    use tower_meta::{RepositoryDefaults, RepositoryOverride};

    /// Records calls and fails on a chosen repository.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        fail_on: Option<String>,
    }

    impl Provisioner for Recorder {
        fn configure_repository(&mut self, config: &ResolvedConfig) -> Result<RepositoryHandle> {
            if self.fail_on.as_deref() == Some(config.name.as_str()) {
                return Err(Error::ProvisionFailed {
                    repository: config.name.clone(),
                    reason: "boom".to_string(),
                });
            }
            self.calls.push(format!("repo:{}", config.name));
            Ok(RepositoryHandle {
                name: config.name.clone(),
                html_url: format!("https://example.test/{}", config.name),
            })
        }

        fn configure_ruleset(&mut self, config: &ResolvedConfig, ruleset: &Ruleset) -> Result<()> {
            self.calls.push(format!("ruleset:{}:{}", config.name, ruleset.name));
            Ok(())
        }

        fn create_secret(&mut self, repository: &str, secret: &RepositorySecret) -> Result<()> {
            self.calls.push(format!("secret:{}:{}", repository, secret.name));
            Ok(())
        }

        fn create_variable(&mut self, repository: &str, variable: &RepositoryVariable) -> Result<()> {
            self.calls.push(format!("var:{}:{}", repository, variable.name));
            Ok(())
        }
    }

    #[test]
    fn naming_helpers() {
        assert_eq!(resource_name("my-org/api"), "my-org-api");
        assert_eq!(resource_name("api"), "api");
        assert_eq!(repo_name("my-org/api"), "api");
        assert_eq!(repo_name("api"), "api");
    }

    #[test]
    fn provisions_in_order() {
        let defaults = RepositoryDefaults {
            ruleset: Some(Ruleset::default()),
            ..RepositoryDefaults::default()
        };
        let over = RepositoryOverride {
            secrets: vec![RepositorySecret::new("TOKEN", "x")],
            variables: vec![RepositoryVariable::new("ENV", "prod")],
            ..RepositoryOverride::named("api")
        };
        let batch = ConfigResolver::new(&defaults).resolve_all([&over]);

        let mut recorder = Recorder::default();
        let report = provision(&batch, &mut recorder);

        assert_eq!(
            recorder.calls,
            vec![
                "repo:api",
                "ruleset:api:default-branch",
                "secret:api:TOKEN",
                "var:api:ENV"
            ]
        );
        assert!(report.is_success());
        assert_eq!(report.outputs["api_url"], "https://example.test/api");
    }

    #[test]
    fn failure_does_not_stop_other_repositories() {
        let defaults = RepositoryDefaults::default();
        let overrides = vec![
            RepositoryOverride::named("a"),
            RepositoryOverride::named("b"),
            RepositoryOverride::named("bad name"),
            RepositoryOverride::named("c"),
        ];
        let batch = ConfigResolver::new(&defaults).resolve_all(&overrides);

        let mut recorder = Recorder {
            fail_on: Some("b".to_string()),
            ..Recorder::default()
        };
        let report = provision(&batch, &mut recorder);

        assert_eq!(report.provisioned, vec!["a", "c"]);
        let failed: Vec<_> = report.failures.iter().map(|f| f.repository.as_str()).collect();
        assert_eq!(failed, vec!["b", "bad name"]);
        assert!(!report.is_success());
    }
}
