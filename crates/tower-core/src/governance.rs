//! Config governance: non-fatal lint diagnostics
//!
//! Lints flag overrides that resolve deterministically but probably do not
//! say what the operator meant, and resolved records GitHub will refuse.
//! They never block resolution; `Error`-level findings fail `tower check`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tower_meta::validation::{is_valid_topic, validate_env_name};
use tower_meta::{RepositoryDefaults, RepositoryOverride, Ruleset};

use crate::config::{LoadedDocument, ResolvedConfig, merge};

/// Highest review count GitHub accepts on a ruleset.
const MAX_REQUIRED_REVIEWS: u32 = 10;

/// Severity level for lint warnings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarnLevel {
    /// Informational notice
    Info,
    /// Potential problem
    Warning,
    /// Configuration error
    Error,
}

impl std::fmt::Display for WarnLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A lint warning about one repository's configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintWarning {
    /// Severity
    pub level: WarnLevel,
    /// Repository this relates to
    pub repository: String,
    /// Human-readable description
    pub message: String,
}

impl LintWarning {
    fn new(level: WarnLevel, repository: &str, message: impl Into<String>) -> Self {
        Self {
            level,
            repository: repository.to_string(),
            message: message.into(),
        }
    }
}

/// Lint one override against the defaults
///
/// Checks for:
/// - A replacement ruleset that `ruleset_disabled` silently discards
/// - `ruleset_disabled` when there is no default ruleset to disable
/// - `topics` and `extra_topics` used together
///
/// plus everything [`lint_resolved`] reports for the merged record.
pub fn lint_override(defaults: &RepositoryDefaults, over: &RepositoryOverride) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    let repo = over.name.as_str();

    if over.has_conflicting_ruleset() {
        warnings.push(LintWarning::new(
            WarnLevel::Warning,
            repo,
            "Both 'ruleset' and 'ruleset_disabled' are set; the ruleset will not be applied.",
        ));
    } else if over.ruleset_disabled && defaults.ruleset.is_none() {
        warnings.push(LintWarning::new(
            WarnLevel::Info,
            repo,
            "'ruleset_disabled' has no effect: defaults define no ruleset.",
        ));
    }

    if over.topics.is_some() && !over.extra_topics.is_empty() {
        warnings.push(LintWarning::new(
            WarnLevel::Info,
            repo,
            "'topics' replaces the default topics; 'extra_topics' could be merged into it.",
        ));
    }

    warnings.extend(lint_resolved(&merge(defaults, over)));
    warnings
}

/// Lint a resolved record for settings GitHub rejects
///
/// Errors:
/// - All three merge methods disabled
/// - Malformed, reserved (`GITHUB_`) or duplicated secret and variable names
/// - A ruleset with an empty name or pattern, or too many required reviews
///
/// Warnings:
/// - Duplicate topics
/// - Topics GitHub will reject
pub fn lint_resolved(config: &ResolvedConfig) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    let repo = config.name.as_str();

    if !(config.allow_merge_commit || config.allow_squash_merge || config.allow_rebase_merge) {
        warnings.push(LintWarning::new(
            WarnLevel::Error,
            repo,
            "All merge methods are disabled; GitHub requires at least one.",
        ));
    }

    let secret_names = config.secrets.iter().map(|s| s.name.as_str());
    lint_env_names(&mut warnings, repo, "secret", secret_names);
    let variable_names = config.variables.iter().map(|v| v.name.as_str());
    lint_env_names(&mut warnings, repo, "variable", variable_names);

    if let Some(ruleset) = &config.ruleset {
        lint_ruleset(&mut warnings, repo, ruleset);
    }

    let mut seen = HashSet::new();
    for topic in &config.topics {
        if !seen.insert(topic.as_str()) {
            warnings.push(LintWarning::new(
                WarnLevel::Warning,
                repo,
                format!("Duplicate topic '{}'.", topic),
            ));
        } else if !is_valid_topic(topic) {
            warnings.push(LintWarning::new(
                WarnLevel::Warning,
                repo,
                format!(
                    "Topic '{}' is not valid on GitHub (lowercase letters, digits and '-', max 50).",
                    topic
                ),
            ));
        }
    }

    warnings
}

fn lint_env_names<'a>(
    warnings: &mut Vec<LintWarning>,
    repo: &str,
    kind: &'static str,
    names: impl Iterator<Item = &'a str>,
) {
    // GitHub compares these names case-insensitively
    let mut seen = HashSet::new();
    for name in names {
        if let Err(e) = validate_env_name(kind, name) {
            warnings.push(LintWarning::new(WarnLevel::Error, repo, format!("{e}.")));
        } else if !seen.insert(name.to_ascii_uppercase()) {
            warnings.push(LintWarning::new(
                WarnLevel::Error,
                repo,
                format!("Duplicate {kind} '{name}'."),
            ));
        }
    }
}

fn lint_ruleset(warnings: &mut Vec<LintWarning>, repo: &str, ruleset: &Ruleset) {
    if ruleset.name.trim().is_empty() {
        warnings.push(LintWarning::new(WarnLevel::Error, repo, "Ruleset name is empty."));
    }
    if ruleset.pattern.trim().is_empty() {
        warnings.push(LintWarning::new(WarnLevel::Error, repo, "Ruleset pattern is empty."));
    }
    if ruleset.required_approving_review_count > MAX_REQUIRED_REVIEWS {
        warnings.push(LintWarning::new(
            WarnLevel::Error,
            repo,
            format!(
                "Ruleset requires {} approvals; GitHub allows at most {MAX_REQUIRED_REVIEWS}.",
                ruleset.required_approving_review_count
            ),
        ));
    }
}

/// Lint every decodable entry of a document, plus the defaults' topics
pub fn lint_document(document: &LoadedDocument) -> Vec<LintWarning> {
    let mut warnings: Vec<_> = document
        .overrides()
        .flat_map(|over| lint_override(&document.defaults, over))
        .collect();

    if document.entries.is_empty() {
        warnings.push(LintWarning::new(
            WarnLevel::Info,
            "-",
            "No repositories configured.",
        ));
    }

    warnings
}
