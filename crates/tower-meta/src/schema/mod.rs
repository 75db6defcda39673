//! Record shapes for defaults, overrides and their nested blocks

mod repository;
mod ruleset;
mod secret;

pub use repository::{RepositoryDefaults, RepositoryOverride, RulesetDirective};
pub use ruleset::{DEFAULT_BRANCH_MARKER, Ruleset};
pub use secret::{RepositorySecret, RepositoryVariable};
