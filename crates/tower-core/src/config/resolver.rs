//! Resolution of a repository override against the shared defaults
//!
//! Resolution is pure: neither input is modified, nothing is cached, and
//! the same inputs always produce the same [`ResolvedConfig`].

use std::collections::HashMap;

use tower_meta::{RepositoryDefaults, RepositoryOverride, Ruleset, RulesetDirective};

use super::document::DocumentEntry;
use super::resolved::ResolvedConfig;
use crate::{Error, Result};

/// The override's value when set, otherwise the default.
pub fn pick<T: Clone>(default: &T, overridden: Option<&T>) -> T {
    overridden.unwrap_or(default).clone()
}

/// Replace-or-extend resolution for list settings.
///
/// A present `replacement` (even an empty one) is used instead of
/// `defaults`; `extra` is appended in order either way. Duplicates are kept.
pub fn extend_or_replace<T: Clone>(defaults: &[T], replacement: Option<&[T]>, extra: &[T]) -> Vec<T> {
    let base = replacement.unwrap_or(defaults);
    base.iter().chain(extra).cloned().collect()
}

/// Apply a ruleset directive to the defaults' ruleset.
pub fn resolve_ruleset(defaults: Option<&Ruleset>, directive: RulesetDirective<'_>) -> Option<Ruleset> {
    match directive {
        RulesetDirective::Suppress => None,
        RulesetDirective::Replace(ruleset) => Some(ruleset.clone()),
        RulesetDirective::Inherit => defaults.cloned(),
    }
}

/// Merge `defaults` with a repository's override.
///
/// Total: every setting comes from the override when present and from the
/// defaults otherwise. Nothing is checked here.
pub fn merge(defaults: &RepositoryDefaults, over: &RepositoryOverride) -> ResolvedConfig {
    ResolvedConfig {
        name: over.name.clone(),
        description: over.description.clone().unwrap_or_default(),
        visibility: pick(&defaults.visibility, over.visibility.as_ref()),
        has_issues: pick(&defaults.has_issues, over.has_issues.as_ref()),
        has_wiki: pick(&defaults.has_wiki, over.has_wiki.as_ref()),
        has_projects: pick(&defaults.has_projects, over.has_projects.as_ref()),
        delete_branch_on_merge: pick(
            &defaults.delete_branch_on_merge,
            over.delete_branch_on_merge.as_ref(),
        ),
        allow_merge_commit: pick(&defaults.allow_merge_commit, over.allow_merge_commit.as_ref()),
        allow_squash_merge: pick(&defaults.allow_squash_merge, over.allow_squash_merge.as_ref()),
        allow_rebase_merge: pick(&defaults.allow_rebase_merge, over.allow_rebase_merge.as_ref()),
        ruleset: resolve_ruleset(defaults.ruleset.as_ref(), over.ruleset_directive()),
        secrets: over.secrets.clone(),
        variables: over.variables.clone(),
        topics: extend_or_replace(&defaults.topics, over.topics.as_deref(), &over.extra_topics),
    }
}

/// Merge `defaults` with a repository's override and check the repository name.
///
/// GitHub policy concerns (merge methods, reserved secret names, review
/// limits) are reported by [`crate::governance`] and never fail resolution.
pub fn resolve(defaults: &RepositoryDefaults, over: &RepositoryOverride) -> Result<ResolvedConfig> {
    let config = merge(defaults, over);
    config.validate()?;

    tracing::debug!(
        repository = %config.name,
        topics = config.topics.len(),
        ruleset = config.ruleset.as_ref().map(|r| r.name.as_str()),
        "Resolved repository config"
    );
    Ok(config)
}

/// Outcome of resolving one repository entry
#[derive(Debug)]
pub struct Resolution {
    /// Repository name, or `#<index>` when the entry had none
    pub name: String,
    pub result: Result<ResolvedConfig>,
}

/// Outcomes for every entry of a document, in input order
#[derive(Debug, Default)]
pub struct BatchResolution {
    pub resolutions: Vec<Resolution>,
}

impl BatchResolution {
    /// Successfully resolved records
    pub fn resolved(&self) -> impl Iterator<Item = &ResolvedConfig> {
        self.resolutions.iter().filter_map(|r| r.result.as_ref().ok())
    }

    /// Entries that failed, with their errors
    pub fn failures(&self) -> impl Iterator<Item = (&str, &Error)> {
        self.resolutions
            .iter()
            .filter_map(|r| r.result.as_ref().err().map(|e| (r.name.as_str(), e)))
    }

    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.resolutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolutions.is_empty()
    }
}

/// Resolves repository overrides against one shared defaults record
///
/// The resolver only borrows the defaults, so one resolver (or many) can
/// serve any number of overrides.
#[derive(Debug, Clone, Copy)]
pub struct ConfigResolver<'a> {
    defaults: &'a RepositoryDefaults,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(defaults: &'a RepositoryDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &'a RepositoryDefaults {
        self.defaults
    }

    /// Resolve a single override.
    pub fn resolve(&self, over: &RepositoryOverride) -> Result<ResolvedConfig> {
        resolve(self.defaults, over)
    }

    /// Resolve every override independently.
    ///
    /// A failing override only fails its own entry. Repeated names fail
    /// every occurrence after the first.
    pub fn resolve_all<'o>(
        &self,
        overrides: impl IntoIterator<Item = &'o RepositoryOverride>,
    ) -> BatchResolution {
        let mut seen = HashMap::new();
        let resolutions = overrides
            .into_iter()
            .enumerate()
            .map(|(index, over)| self.resolve_entry(&mut seen, index, over))
            .collect();
        BatchResolution { resolutions }
    }

    /// Resolve loaded document entries, keeping load failures in place.
    pub fn resolve_entries<'o>(
        &self,
        entries: impl IntoIterator<Item = &'o DocumentEntry>,
    ) -> BatchResolution {
        let mut seen = HashMap::new();
        let resolutions = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                DocumentEntry::Valid(over) => self.resolve_entry(&mut seen, index, over),
                DocumentEntry::Invalid { message, .. } => Resolution {
                    name: entry.label(index),
                    result: Err(Error::InvalidEntry {
                        label: entry.label(index),
                        message: message.clone(),
                    }),
                },
            })
            .collect();
        BatchResolution { resolutions }
    }

    fn resolve_entry(
        &self,
        seen: &mut HashMap<String, usize>,
        index: usize,
        over: &RepositoryOverride,
    ) -> Resolution {
        let result = match seen.get(&over.name) {
            Some(&first) => Err(Error::DuplicateRepository {
                name: over.name.clone(),
                first,
            }),
            None => {
                seen.insert(over.name.clone(), index);
                self.resolve(over)
            }
        };

        if let Err(e) = &result {
            tracing::warn!(repository = %over.name, error = %e, "Skipping repository");
        }

        Resolution {
            name: over.name.clone(),
            result,
        }
    }
}
