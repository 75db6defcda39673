//! Branch/tag ruleset applied to a repository
//!
//! A ruleset is treated as one unit: an override that supplies a ruleset
//! replaces the defaults' ruleset as a whole, never field by field.

use serde::{Deserialize, Serialize};

use crate::config::{Enforcement, RulesetTarget};

/// Ref pattern GitHub expands to the repository's default branch.
pub const DEFAULT_BRANCH_MARKER: &str = "~DEFAULT_BRANCH";

fn default_name() -> String {
    "default-branch".to_string()
}

fn default_pattern() -> String {
    DEFAULT_BRANCH_MARKER.to_string()
}

/// Protection rules for the refs matching `pattern`.
///
/// Every field has a default, so an empty block (`ruleset: {}`) yields a
/// ruleset protecting the default branch with one required approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Ruleset {
    /// Ruleset name as shown on GitHub
    pub name: String,

    /// Ref kind the ruleset targets
    pub target: RulesetTarget,

    /// Enforcement mode
    pub enforcement: Enforcement,

    /// Ref name pattern (`~DEFAULT_BRANCH`, `main`, `release/*`, ...)
    pub pattern: String,

    /// Repository admins may bypass the rules
    pub bypass_admins: bool,

    /// Reject force pushes to matching refs
    pub block_force_pushes: bool,

    /// Reject deletion of matching refs
    pub block_deletions: bool,

    /// Only allow linear history (no merge commits)
    pub require_linear_history: bool,

    /// Require signed commits
    pub require_signed_commits: bool,

    /// Approving reviews required before merging
    #[serde(alias = "required_reviews")]
    pub required_approving_review_count: u32,

    /// Dismiss approvals when new commits are pushed
    #[serde(alias = "dismiss_stale_reviews")]
    pub dismiss_stale_reviews_on_push: bool,

    /// Require a review from a code owner
    #[serde(alias = "require_code_owner_reviews")]
    pub require_code_owner_review: bool,

    /// All review threads must be resolved before merging
    pub require_thread_resolution: bool,

    /// Status check contexts that must pass before merging
    pub required_status_checks: Vec<String>,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self {
            name: default_name(),
            target: RulesetTarget::Branch,
            enforcement: Enforcement::Active,
            pattern: default_pattern(),
            bypass_admins: true,
            block_force_pushes: true,
            block_deletions: true,
            require_linear_history: false,
            require_signed_commits: false,
            required_approving_review_count: 1,
            dismiss_stale_reviews_on_push: true,
            require_code_owner_review: false,
            require_thread_resolution: true,
            required_status_checks: Vec::new(),
        }
    }
}
