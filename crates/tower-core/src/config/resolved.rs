//! The fully concrete configuration for one repository

use serde::Serialize;
use tower_meta::validation::validate_repository_name;
use tower_meta::{RepositorySecret, RepositoryVariable, Ruleset, Visibility};

use crate::{Error, Result};

/// The final resolved configuration after merging defaults and override
///
/// Every field is concrete; `ruleset: None` means the repository gets no
/// ruleset. Secret values are never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
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
    pub ruleset: Option<Ruleset>,
    pub secrets: Vec<RepositorySecret>,
    pub variables: Vec<RepositoryVariable>,
    pub topics: Vec<String>,
}

impl ResolvedConfig {
    /// Repository name without the owner (`owner/repo` -> `repo`)
    pub fn repo_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// Owner prefix, if the name carries one
    pub fn owner(&self) -> Option<&str> {
        self.name.split_once('/').map(|(owner, _)| owner)
    }

    /// Check the repository name, the only field resolution can reject.
    pub fn validate(&self) -> Result<()> {
        validate_repository_name(&self.name)
            .map_err(|e| Error::invalid_field(&self.name, "name", e.to_string()))
    }
}
