//! Enumerated settings shared by defaults, overrides and rulesets

use std::fmt;

use serde::{Deserialize, Serialize};

/// Repository visibility on GitHub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    #[default]
    Private,
    /// Visible to members of the owning enterprise only.
    Internal,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
            Visibility::Internal => write!(f, "internal"),
        }
    }
}

/// Which kind of ref a ruleset applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulesetTarget {
    #[default]
    Branch,
    Tag,
}

impl fmt::Display for RulesetTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesetTarget::Branch => write!(f, "branch"),
            RulesetTarget::Tag => write!(f, "tag"),
        }
    }
}

/// Ruleset enforcement mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforcement {
    #[default]
    Active,
    /// Rules are evaluated and reported but not enforced.
    Evaluate,
    Disabled,
}

impl fmt::Display for Enforcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Enforcement::Active => write!(f, "active"),
            Enforcement::Evaluate => write!(f, "evaluate"),
            Enforcement::Disabled => write!(f, "disabled"),
        }
    }
}
