//! Naming rules GitHub applies to repositories, secrets, variables and topics

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static REPOSITORY_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9][A-Za-z0-9-]*/)?[A-Za-z0-9._-]+$").expect("valid regex")
});

static ENV_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"));

static TOPIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9-]{0,49}$").expect("valid regex"));

/// Validate a repository name (`repo` or `owner/repo`).
pub fn validate_repository_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(invalid("repository", name, "name must not be empty"));
    }
    if !REPOSITORY_NAME.is_match(name) {
        return Err(invalid(
            "repository",
            name,
            "expected 'repo' or 'owner/repo' using letters, digits, '.', '-' or '_'",
        ));
    }
    let repo = name.rsplit('/').next().unwrap_or(name);
    if repo == "." || repo == ".." {
        return Err(invalid("repository", name, "name is reserved"));
    }
    Ok(())
}

/// Validate an Actions secret or variable name.
///
/// `kind` is used in the error message ("secret" or "variable").
pub fn validate_env_name(kind: &'static str, name: &str) -> Result<()> {
    if !ENV_NAME.is_match(name) {
        return Err(invalid(
            kind,
            name,
            "only letters, digits and '_' are allowed and it must not start with a digit",
        ));
    }
    if name.to_ascii_uppercase().starts_with("GITHUB_") {
        return Err(invalid(kind, name, "the GITHUB_ prefix is reserved"));
    }
    Ok(())
}

/// Whether `topic` is accepted by GitHub as a repository topic.
pub fn is_valid_topic(topic: &str) -> bool {
    TOPIC.is_match(topic)
}

fn invalid(kind: &'static str, name: &str, reason: &str) -> Error {
    Error::InvalidName {
        kind,
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("tower")]
    #[case("my-org/tower")]
    #[case("dotfiles.d")]
    #[case("snake_case_repo")]
    fn accepts_repository_names(#[case] name: &str) {
        assert!(validate_repository_name(name).is_ok(), "{name}");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("a/b/c")]
    #[case("has space")]
    #[case("org/..")]
    #[case("-org/repo")]
    fn rejects_repository_names(#[case] name: &str) {
        assert!(validate_repository_name(name).is_err(), "{name:?}");
    }

    #[rstest]
    #[case("API_TOKEN")]
    #[case("_private")]
    #[case("deploy_key2")]
    fn accepts_env_names(#[case] name: &str) {
        assert!(validate_env_name("secret", name).is_ok());
    }

    #[rstest]
    #[case("2FA")]
    #[case("API-TOKEN")]
    #[case("GITHUB_TOKEN")]
    #[case("github_sha")]
    #[case("")]
    fn rejects_env_names(#[case] name: &str) {
        assert!(validate_env_name("variable", name).is_err());
    }

    #[test]
    fn env_name_error_mentions_kind() {
        let err = validate_env_name("variable", "bad-name").unwrap_err();
        assert!(err.to_string().starts_with("Invalid variable name 'bad-name'"));
    }

    #[test]
    fn topics() {
        assert!(is_valid_topic("rust"));
        assert!(is_valid_topic("managed-by-tower"));
        assert!(!is_valid_topic("Rust"));
        assert!(!is_valid_topic("-leading"));
        assert!(!is_valid_topic(&"a".repeat(51)));
    }
}
