//! Dry-run provisioner that records the actions a real run would take

use std::fmt;

use serde::Serialize;
use tower_meta::{RepositorySecret, RepositoryVariable, Ruleset};

use super::{Provisioner, RepositoryHandle, RepositorySettings, repo_name, resource_name};
use crate::config::ResolvedConfig;
use crate::{Error, Result};

const GITHUB_URL: &str = "https://github.com";

/// One provisioning step
///
/// Secret values are never part of an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    ConfigureRepository {
        resource: String,
        /// Existing repository to adopt
        import: String,
        settings: RepositorySettings,
    },
    ApplyRuleset {
        resource: String,
        repository: String,
        ruleset: Ruleset,
    },
    CreateSecret {
        resource: String,
        repository: String,
        secret_name: String,
    },
    CreateVariable {
        resource: String,
        repository: String,
        variable_name: String,
        value: String,
    },
}

impl Action {
    pub fn resource(&self) -> &str {
        match self {
            Self::ConfigureRepository { resource, .. }
            | Self::ApplyRuleset { resource, .. }
            | Self::CreateSecret { resource, .. }
            | Self::CreateVariable { resource, .. } => resource,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigureRepository { import, settings, .. } => write!(
                f,
                "configure repository '{}' ({}, topics: [{}])",
                import,
                settings.visibility,
                settings.topics.join(", ")
            ),
            Self::ApplyRuleset {
                repository,
                ruleset,
                ..
            } => write!(
                f,
                "apply {} ruleset '{}' on {} '{}' to {} ({} approval(s))",
                ruleset.enforcement,
                ruleset.name,
                ruleset.target,
                ruleset.pattern,
                repository,
                ruleset.required_approving_review_count
            ),
            Self::CreateSecret {
                repository,
                secret_name,
                ..
            } => write!(f, "create secret {} on {}", secret_name, repository),
            Self::CreateVariable {
                repository,
                variable_name,
                value,
                ..
            } => write!(
                f,
                "create variable {}={} on {}",
                variable_name, value, repository
            ),
        }
    }
}

/// Ordered list of provisioning steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub actions: Vec<Action>,
}

impl Plan {
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Provisioner that only records a [`Plan`]
#[derive(Debug, Clone, Default)]
pub struct PlanProvisioner {
    default_owner: Option<String>,
    plan: Plan,
}

impl PlanProvisioner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Owner used for repositories named without an `owner/` prefix
    pub fn with_default_owner(owner: impl Into<String>) -> Self {
        Self {
            default_owner: Some(owner.into()),
            plan: Plan::default(),
        }
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn into_plan(self) -> Plan {
        self.plan
    }

    fn html_url(&self, config: &ResolvedConfig) -> Result<String> {
        let owner = config
            .owner()
            .or(self.default_owner.as_deref())
            .ok_or_else(|| Error::MissingOwner {
                repository: config.name.clone(),
            })?;
        Ok(format!("{GITHUB_URL}/{owner}/{}", config.repo_name()))
    }
}

impl Provisioner for PlanProvisioner {
    fn configure_repository(&mut self, config: &ResolvedConfig) -> Result<RepositoryHandle> {
        let html_url = self.html_url(config)?;
        self.plan.actions.push(Action::ConfigureRepository {
            resource: resource_name(&config.name),
            import: repo_name(&config.name).to_string(),
            settings: RepositorySettings::from(config),
        });
        Ok(RepositoryHandle {
            name: config.name.clone(),
            html_url,
        })
    }

    fn configure_ruleset(&mut self, config: &ResolvedConfig, ruleset: &Ruleset) -> Result<()> {
        self.plan.actions.push(Action::ApplyRuleset {
            resource: format!("{}-{}-ruleset", resource_name(&config.name), ruleset.name),
            repository: repo_name(&config.name).to_string(),
            ruleset: ruleset.clone(),
        });
        Ok(())
    }

    fn create_secret(&mut self, repository: &str, secret: &RepositorySecret) -> Result<()> {
        self.plan.actions.push(Action::CreateSecret {
            resource: format!("{}-secret-{}", resource_name(repository), secret.name),
            repository: repo_name(repository).to_string(),
            secret_name: secret.name.clone(),
        });
        Ok(())
    }

    fn create_variable(&mut self, repository: &str, variable: &RepositoryVariable) -> Result<()> {
        self.plan.actions.push(Action::CreateVariable {
            resource: format!("{}-var-{}", resource_name(repository), variable.name),
            repository: repo_name(repository).to_string(),
            variable_name: variable.name.clone(),
            value: variable.value.clone(),
        });
        Ok(())
    }
}
