//! Shared defaults and per-repository overrides

use serde::{Deserialize, Serialize};

use super::ruleset::Ruleset;
use super::secret::{RepositorySecret, RepositoryVariable};
use crate::config::Visibility;

fn default_true() -> bool {
    true
}

/// Settings applied to every managed repository unless overridden.
///
/// Every scalar has a concrete value; lists default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryDefaults {
    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default = "default_true")]
    pub has_issues: bool,

    #[serde(default)]
    pub has_wiki: bool,

    #[serde(default)]
    pub has_projects: bool,

    #[serde(default = "default_true")]
    pub delete_branch_on_merge: bool,

    #[serde(default)]
    pub allow_merge_commit: bool,

    #[serde(default = "default_true")]
    pub allow_squash_merge: bool,

    #[serde(default)]
    pub allow_rebase_merge: bool,

    /// Ruleset inherited by repositories that neither replace nor disable it
    #[serde(default, alias = "branch_protection")]
    pub ruleset: Option<Ruleset>,

    #[serde(default)]
    pub topics: Vec<String>,
}

impl Default for RepositoryDefaults {
    fn default() -> Self {
        Self {
            visibility: Visibility::default(),
            has_issues: true,
            has_wiki: false,
            has_projects: false,
            delete_branch_on_merge: true,
            allow_merge_commit: false,
            allow_squash_merge: true,
            allow_rebase_merge: false,
            ruleset: None,
            topics: Vec::new(),
        }
    }
}

/// How an override affects the defaults' ruleset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesetDirective<'a> {
    /// Keep whatever the defaults specify (possibly nothing)
    Inherit,
    /// Use this ruleset instead of the defaults' one
    Replace(&'a Ruleset),
    /// No ruleset, regardless of defaults
    Suppress,
}

/// Repository-specific deviations from [`RepositoryDefaults`].
///
/// `None` on a scalar means "inherit", so an explicit `false` stays
/// distinguishable from an unset field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryOverride {
    /// Repository name, either `repo` or `owner/repo`
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub visibility: Option<Visibility>,

    #[serde(default)]
    pub has_issues: Option<bool>,

    #[serde(default)]
    pub has_wiki: Option<bool>,

    #[serde(default)]
    pub has_projects: Option<bool>,

    #[serde(default)]
    pub delete_branch_on_merge: Option<bool>,

    #[serde(default)]
    pub allow_merge_commit: Option<bool>,

    #[serde(default)]
    pub allow_squash_merge: Option<bool>,

    #[serde(default)]
    pub allow_rebase_merge: Option<bool>,

    /// Replacement ruleset (replaces the defaults' block wholesale)
    #[serde(default, alias = "branch_protection")]
    pub ruleset: Option<Ruleset>,

    /// Drop the ruleset even if the defaults define one
    #[serde(default, alias = "branch_protection_disabled")]
    pub ruleset_disabled: bool,

    #[serde(default)]
    pub secrets: Vec<RepositorySecret>,

    #[serde(default)]
    pub variables: Vec<RepositoryVariable>,

    /// `None` inherits the default topics, `Some(vec![])` clears them
    #[serde(default)]
    pub topics: Option<Vec<String>>,

    /// Appended after whichever topic list applies
    #[serde(default)]
    pub extra_topics: Vec<String>,
}

impl RepositoryOverride {
    /// An override that inherits everything.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Collapse `ruleset` and `ruleset_disabled` into a single directive.
    pub fn ruleset_directive(&self) -> RulesetDirective<'_> {
        match (self.ruleset_disabled, self.ruleset.as_ref()) {
            (true, Some(_)) => {
                tracing::warn!(
                    repository = %self.name,
                    "ruleset_disabled is set alongside a replacement ruleset; the ruleset is dropped"
                );
                RulesetDirective::Suppress
            }
            (true, None) => RulesetDirective::Suppress,
            (false, Some(ruleset)) => RulesetDirective::Replace(ruleset),
            (false, None) => RulesetDirective::Inherit,
        }
    }

    /// Both a replacement ruleset and the disable flag are set.
    pub fn has_conflicting_ruleset(&self) -> bool {
        self.ruleset_disabled && self.ruleset.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_empty_document() {
        let defaults: RepositoryDefaults = serde_yaml::from_str("{}").unwrap();
        assert_eq!(defaults, RepositoryDefaults::default());
    }

    #[test]
    fn override_distinguishes_false_from_unset() {
        let over: RepositoryOverride =
            serde_yaml::from_str("name: docs\nhas_wiki: false\n").unwrap();

        assert_eq!(over.has_wiki, Some(false));
        assert_eq!(over.has_issues, None);
        assert_eq!(over.topics, None);
    }

    #[test]
    fn override_distinguishes_empty_topics_from_unset() {
        let over: RepositoryOverride = serde_yaml::from_str("name: docs\ntopics: []\n").unwrap();
        assert_eq!(over.topics, Some(vec![]));
    }

    #[test]
    fn override_requires_name() {
        let err = serde_yaml::from_str::<RepositoryOverride>("visibility: public").unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn override_rejects_unknown_field() {
        let err =
            serde_yaml::from_str::<RepositoryOverride>("name: docs\nhas_wikii: true\n").unwrap_err();
        assert!(err.to_string().contains("has_wikii"));
    }

    #[test]
    fn legacy_branch_protection_keys() {
        let over: RepositoryOverride =
            serde_yaml::from_str("name: docs\nbranch_protection_disabled: true\n").unwrap();
        assert!(over.ruleset_disabled);
    }

    #[test]
    fn ruleset_directive_covers_all_combinations() {
        let ruleset = Ruleset::default();

        let inherit = RepositoryOverride::named("a");
        assert_eq!(inherit.ruleset_directive(), RulesetDirective::Inherit);

        let replace = RepositoryOverride {
            ruleset: Some(ruleset.clone()),
            ..RepositoryOverride::named("b")
        };
        assert_eq!(
            replace.ruleset_directive(),
            RulesetDirective::Replace(&ruleset)
        );

        let suppress = RepositoryOverride {
            ruleset_disabled: true,
            ..RepositoryOverride::named("c")
        };
        assert_eq!(suppress.ruleset_directive(), RulesetDirective::Suppress);
        assert!(!suppress.has_conflicting_ruleset());

        let both = RepositoryOverride {
            ruleset: Some(ruleset.clone()),
            ruleset_disabled: true,
            ..RepositoryOverride::named("d")
        };
        assert_eq!(both.ruleset_directive(), RulesetDirective::Suppress);
        assert!(both.has_conflicting_ruleset());
    }
}
