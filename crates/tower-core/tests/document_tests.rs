//! End-to-end tests: document on disk -> resolution -> lint -> plan

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use tower_core::{
    Action, Error, LoadedDocument, PlanProvisioner, WarnLevel, lint_document, provision,
};
use tower_meta::Visibility;

const REPOS_YAML: &str = r#"
defaults:
  visibility: private
  has_wiki: false
  topics: [managed-by-tower]
  ruleset:
    required_approving_review_count: 1

repositories:
  - name: acme/docs
    description: Documentation site
    visibility: public
    has_wiki: true
    ruleset_disabled: true

  - name: acme/payments
    extra_topics: [payments]
    ruleset:
      required_approving_review_count: 3
      required_status_checks: [ci/test]
    secrets:
      - name: STRIPE_KEY
        value: sk_live_123
    variables:
      - name: ENV
        value: prod

  - name: acme/sandbox
    topics: []
    ruleset: {}
    ruleset_disabled: true

  - name: acme/docs
"#;

fn write_document(dir: &TempDir, file: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(file);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn loads_and_resolves_yaml_document() {
    let dir = TempDir::new().unwrap();
    let path = write_document(&dir, "repos.yaml", REPOS_YAML);

    let document = LoadedDocument::load(&path).unwrap();
    let batch = document.resolve();

    assert_eq!(batch.len(), 4);

    let docs = batch.resolutions[0].result.as_ref().unwrap();
    assert_eq!(docs.visibility, Visibility::Public);
    assert!(docs.has_wiki);
    assert_eq!(docs.ruleset, None);
    assert_eq!(docs.topics, vec!["managed-by-tower"]);

    let payments = batch.resolutions[1].result.as_ref().unwrap();
    assert_eq!(payments.visibility, Visibility::Private);
    assert_eq!(payments.topics, vec!["managed-by-tower", "payments"]);
    let ruleset = payments.ruleset.as_ref().unwrap();
    assert_eq!(ruleset.required_approving_review_count, 3);
    assert_eq!(ruleset.required_status_checks, vec!["ci/test"]);

    let sandbox = batch.resolutions[2].result.as_ref().unwrap();
    assert!(sandbox.topics.is_empty());
    assert_eq!(sandbox.ruleset, None);

    assert!(matches!(
        batch.resolutions[3].result,
        Err(Error::DuplicateRepository { first: 0, .. })
    ));
}

#[test]
fn lints_conflicting_ruleset_settings() {
    let document = LoadedDocument::parse(REPOS_YAML, tower_fs::ConfigFormat::Yaml).unwrap();

    let warnings = lint_document(&document);

    let sandbox: Vec<_> = warnings
        .iter()
        .filter(|w| w.repository == "acme/sandbox")
        .collect();
    assert_eq!(sandbox.len(), 1);
    assert_eq!(sandbox[0].level, WarnLevel::Warning);
}

#[test]
fn plans_every_resolved_repository() {
    let dir = TempDir::new().unwrap();
    let path = write_document(&dir, "repos.yaml", REPOS_YAML);
    let document = LoadedDocument::load(&path).unwrap();

    let mut planner = PlanProvisioner::new();
    let report = provision(&document.resolve(), &mut planner);

    assert_eq!(report.provisioned, vec!["acme/docs", "acme/payments", "acme/sandbox"]);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.outputs["acme/payments_url"], "https://github.com/acme/payments");

    let rulesets = planner
        .plan()
        .actions
        .iter()
        .filter(|a| matches!(a, Action::ApplyRuleset { .. }))
        .count();
    assert_eq!(rulesets, 1);

    let rendered = serde_json::to_string(planner.plan()).unwrap();
    assert!(rendered.contains("STRIPE_KEY"));
    assert!(!rendered.contains("sk_live_123"));
}

#[test]
fn json_and_yaml_documents_resolve_identically() {
    let dir = TempDir::new().unwrap();
    let yaml = write_document(
        &dir,
        "repos.yml",
        "defaults:\n  topics: [a]\nrepositories:\n  - name: x\n    extra_topics: [b]\n",
    );
    let json = write_document(
        &dir,
        "repos.json",
        r#"{"defaults": {"topics": ["a"]}, "repositories": [{"name": "x", "extra_topics": ["b"]}]}"#,
    );

    let from_yaml = LoadedDocument::load(&yaml).unwrap();
    let from_json = LoadedDocument::load(&json).unwrap();

    assert_eq!(from_yaml, from_json);
    let configs: Vec<_> = from_yaml.resolve().resolved().cloned().collect();
    assert_eq!(configs[0].topics, vec!["a", "b"]);
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = LoadedDocument::load(&dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, Error::Fs(tower_fs::Error::Io { .. })));
}
