//! Error types for tower-core

/// Result type for tower-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tower-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A resolved field failed validation
    #[error("{repository}: invalid {field}: {message}")]
    InvalidField {
        repository: String,
        field: String,
        message: String,
    },

    /// A repository entry could not be read from the document
    #[error("Invalid repository entry {label}: {message}")]
    InvalidEntry { label: String, message: String },

    /// The same repository name appears more than once in a document
    #[error("Duplicate repository '{name}' (first defined by entry #{first})")]
    DuplicateRepository { name: String, first: usize },

    /// No owner could be determined for a repository without an `owner/` prefix
    #[error("No owner for repository '{repository}'; use 'owner/repo' or set a default owner")]
    MissingOwner { repository: String },

    /// The provisioning collaborator rejected an operation
    #[error("Provisioning failed for {repository}: {reason}")]
    ProvisionFailed { repository: String, reason: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from tower-fs
    #[error(transparent)]
    Fs(#[from] tower_fs::Error),

    /// Metadata error from tower-meta
    #[error(transparent)]
    Meta(#[from] tower_meta::Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_field(
        repository: &str,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            repository: repository.to_string(),
            field: field.into(),
            message: message.into(),
        }
    }
}
