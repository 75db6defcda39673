//! Repository configuration records for Tower.
//!
//! This crate defines the shapes that flow into and out of resolution:
//! the shared [`RepositoryDefaults`], per-repository [`RepositoryOverride`]s,
//! the atomic [`Ruleset`] policy block, and the secret/variable requests
//! carried through to provisioning. It also owns the naming rules GitHub
//! enforces on those records.

pub mod config;
pub mod error;
pub mod schema;
pub mod validation;

pub use config::{Enforcement, RulesetTarget, Visibility};
pub use error::{Error, Result};
pub use schema::{
    DEFAULT_BRANCH_MARKER, RepositoryDefaults, RepositoryOverride, RepositorySecret,
    RepositoryVariable, Ruleset, RulesetDirective,
};
