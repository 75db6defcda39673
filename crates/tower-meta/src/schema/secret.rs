//! Secret and variable requests carried through to provisioning

use std::fmt;

use serde::{Deserialize, Serialize};

/// An Actions secret to create on the repository.
///
/// The value is read from configuration but is never serialized and never
/// shown by `Debug`, so resolved records can be logged or exported safely.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositorySecret {
    pub name: String,
    #[serde(skip_serializing)]
    value: String,
}

impl RepositorySecret {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The plaintext value, for handing to the provisioning layer only.
    pub fn expose_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for RepositorySecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepositorySecret")
            .field("name", &self.name)
            .field("value", &"***")
            .finish()
    }
}

/// An Actions variable to create on the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryVariable {
    pub name: String,
    pub value: String,
}

impl RepositoryVariable {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_value_is_read_but_not_written() {
        let secret: RepositorySecret =
            serde_json::from_str(r#"{"name": "API_TOKEN", "value": "hunter2"}"#).unwrap();
        assert_eq!(secret.expose_value(), "hunter2");

        let json = serde_json::to_string(&secret).unwrap();
        assert_eq!(json, r#"{"name":"API_TOKEN"}"#);
    }

    #[test]
    fn secret_debug_masks_value() {
        let secret = RepositorySecret::new("API_TOKEN", "hunter2");
        let debug = format!("{:?}", secret);

        assert!(debug.contains("API_TOKEN"));
        assert!(debug.contains("***"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn secret_requires_value() {
        let err = serde_json::from_str::<RepositorySecret>(r#"{"name": "API_TOKEN"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("value"));
    }

    #[test]
    fn variable_serializes_value() {
        let var = RepositoryVariable::new("ENV", "prod");
        let json = serde_json::to_string(&var).unwrap();
        assert_eq!(json, r#"{"name":"ENV","value":"prod"}"#);
    }
}
