//! Configuration resolution for Tower
//!
//! This crate turns one shared [`RepositoryDefaults`] record and a list of
//! per-repository [`RepositoryOverride`]s into fully concrete
//! [`ResolvedConfig`]s, then hands those to a [`Provisioner`]:
//!
//! - **Document loading**: defaults plus repository entries, each entry parsed in isolation
//! - **Resolution**: scalar override, list replace-or-extend, ruleset inherit/replace/suppress
//! - **Governance**: non-fatal lint diagnostics for suspicious overrides
//! - **Provisioning**: the boundary trait and an in-tree dry-run planner
//!
//! # Architecture
//!
//! ```text
//!                tower-cli
//!                    |
//!               tower-core
//!                    |
//!           +--------+--------+
//!           |                 |
//!       tower-fs          tower-meta
//! ```
//!
//! # Example
//!
//! ```
//! use tower_core::{ConfigResolver, RepositoryDefaults, RepositoryOverride};
//!
//! let defaults = RepositoryDefaults {
//!     topics: vec!["managed-by-tower".to_string()],
//!     ..RepositoryDefaults::default()
//! };
//! let over = RepositoryOverride {
//!     extra_topics: vec!["data".to_string()],
//!     ..RepositoryOverride::named("data-repo")
//! };
//!
//! let config = ConfigResolver::new(&defaults).resolve(&over).unwrap();
//! assert_eq!(config.topics, vec!["managed-by-tower", "data"]);
//! ```

pub mod config;
pub mod error;
pub mod governance;
pub mod provision;

pub use config::{
    BatchResolution, ConfigResolver, DocumentEntry, LoadedDocument, Resolution, ResolvedConfig,
    extend_or_replace, merge, pick, resolve, resolve_ruleset,
};
pub use error::{Error, Result};
pub use governance::{LintWarning, WarnLevel, lint_document, lint_override, lint_resolved};
pub use provision::{
    Action, Failure, Plan, PlanProvisioner, Provisioner, RepositoryHandle, RepositorySettings,
    RunReport, provision, repo_name, resource_name,
};
pub use tower_meta::{
    RepositoryDefaults, RepositoryOverride, RepositorySecret, RepositoryVariable, Ruleset,
    RulesetDirective,
};
