//! Loading of Tower documents into defaults and repository overrides
//!
//! Repository entries are decoded one by one so that a malformed entry only
//! invalidates itself. A malformed `defaults` section fails the whole load,
//! since every entry depends on it.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tower_fs::{ConfigFormat, ConfigStore};
use tower_meta::{RepositoryDefaults, RepositoryOverride};

use super::resolver::{BatchResolution, ConfigResolver};
use crate::Result;

/// On-disk shape of a document before per-entry decoding
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDocument {
    #[serde(default)]
    defaults: RepositoryDefaults,

    #[serde(default)]
    repositories: Vec<Value>,
}

/// One entry of the `repositories` collection
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentEntry {
    Valid(RepositoryOverride),
    /// The entry failed to decode; `name` is recovered when possible
    Invalid {
        name: Option<String>,
        message: String,
    },
}

impl DocumentEntry {
    fn decode(value: Value) -> Self {
        let name = value
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string);
        match serde_json::from_value::<RepositoryOverride>(value) {
            Ok(over) => Self::Valid(over),
            Err(e) => Self::Invalid {
                name,
                message: e.to_string(),
            },
        }
    }

    /// Human-readable label: the repository name, or the entry position.
    pub fn label(&self, index: usize) -> String {
        match self {
            Self::Valid(over) => over.name.clone(),
            Self::Invalid {
                name: Some(name), ..
            } => format!("#{index} ({name})"),
            Self::Invalid { name: None, .. } => format!("#{index}"),
        }
    }

    pub fn as_override(&self) -> Option<&RepositoryOverride> {
        match self {
            Self::Valid(over) => Some(over),
            Self::Invalid { .. } => None,
        }
    }
}

/// A parsed document: the shared defaults plus every repository entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedDocument {
    pub defaults: RepositoryDefaults,
    pub entries: Vec<DocumentEntry>,
}

impl LoadedDocument {
    /// Load a document, detecting its format from the file extension.
    pub fn load(path: &Path) -> Result<Self> {
        let raw: RawDocument = ConfigStore::new().load(path)?;
        Ok(Self::from_raw(raw))
    }

    /// Parse a document from a string in the given format.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        let raw: RawDocument = format.parse(content, Path::new("<inline>"))?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawDocument) -> Self {
        let entries: Vec<_> = raw
            .repositories
            .into_iter()
            .map(DocumentEntry::decode)
            .collect();

        for (index, entry) in entries.iter().enumerate() {
            if let DocumentEntry::Invalid { message, .. } = entry {
                tracing::warn!(entry = %entry.label(index), %message, "Invalid repository entry");
            }
        }
        tracing::debug!(repositories = entries.len(), "Loaded document");

        Self {
            defaults: raw.defaults,
            entries,
        }
    }

    /// Overrides that decoded successfully
    pub fn overrides(&self) -> impl Iterator<Item = &RepositoryOverride> {
        self.entries.iter().filter_map(DocumentEntry::as_override)
    }

    pub fn resolver(&self) -> ConfigResolver<'_> {
        ConfigResolver::new(&self.defaults)
    }

    /// Resolve every entry against the document's defaults.
    pub fn resolve(&self) -> BatchResolution {
        self.resolver().resolve_entries(&self.entries)
    }
}
