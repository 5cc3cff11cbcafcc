//! Scenario tests for the rule engine
//!
//! Each test lays out a repository and bucket on disk exactly as the CLI
//! does, then drives the engine through its public API only.

use std::fs;
use std::path::Path;

use bucket_core::{Error, Rule, RuleStore, Verdict, address_of, check_bucket};
use bucket_fs::{BucketConfig, DocumentStore, RepositoryConfig, find_upward};
use bucket_test_utils::TestRepo;
use pretty_assertions::assert_eq;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn store(bucket: &Path) -> RuleStore {
    RuleStore::for_bucket(bucket, DocumentStore::new())
}

fn absent(kind: &str, name: &str) -> Rule {
    let mut rule = Rule::new(kind, name);
    rule.mark_not_exists();
    rule
}

/// A repository named `garden` holding one empty bucket `demo`.
fn garden() -> (TestRepo, std::path::PathBuf) {
    let repo = TestRepo::new();
    repo.init_repository("garden");
    let bucket = repo.create_bucket("demo");
    (repo, bucket)
}

// =============================================================================
// Create + declare + check
// =============================================================================

#[test]
fn missing_target_is_reported() {
    let (_repo, bucket) = garden();
    store(&bucket).save(&Rule::new("bucket", "Flower")).unwrap();

    let report = check_bucket(&bucket).unwrap();

    assert_eq!(report.verdict, Verdict::Violated);
    let violations: Vec<_> = report.violations().collect();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].rule.name(), "Flower");
    assert_eq!(
        violations[0].diagnostic.as_deref(),
        Some("target does not exist")
    );
    assert_eq!(report.verdict.message(), "expectations not met");
}

#[test]
fn every_rule_is_evaluated_after_the_first_failure() {
    let (repo, bucket) = garden();
    let store = store(&bucket);
    for name in ["a", "b", "c", "d", "e"] {
        store.save(&Rule::new("bucket", name)).unwrap();
    }
    repo.mkdir("demo/c");

    let report = check_bucket(&bucket).unwrap();

    assert_eq!(report.evaluations.len(), 5);
    assert_eq!(report.violations().count(), 4);
    assert_eq!(report.verdict, Verdict::Violated);
}

#[test]
fn nested_targets_resolve_against_bucket_root() {
    let (repo, bucket) = garden();
    store(&bucket)
        .save(&Rule::new("output", "build/report.txt"))
        .unwrap();
    repo.mkdir("demo/build");
    fs::write(repo.root().join("demo/build/report.txt"), "ok").unwrap();

    assert!(check_bucket(&bucket).unwrap().is_met());
}

// =============================================================================
// Store behaviour
// =============================================================================

#[test]
fn duplicate_declare_keeps_one_record() {
    let (repo, bucket) = garden();
    let rule = Rule::new("bucket", "Flower");

    store(&bucket).save(&rule).unwrap();
    let err = store(&bucket).save(&rule).unwrap_err();

    assert!(matches!(err, Error::DuplicateRule { .. }));
    assert_eq!(repo.record_files("demo"), vec![address_of(&rule).file_name()]);
}

#[test]
fn saved_rules_round_trip() {
    let (_repo, bucket) = garden();
    let rules = vec![
        Rule::new("bucket", "Flower"),
        Rule::new("input", "seeds.csv"),
        absent("create", "tmp"),
        absent("bucket", "Flower"),
    ];
    for rule in &rules {
        store(&bucket).save(rule).unwrap();
    }

    let mut loaded = store(&bucket).load_all().unwrap();
    let mut expected = rules.clone();
    let key = |r: &Rule| (r.kind().to_string(), r.name().to_string(), r.expected_exists());
    loaded.sort_by_key(key);
    expected.sort_by_key(key);

    assert_eq!(loaded, expected);
}

#[test]
fn bucket_metadata_is_never_a_rule() {
    let (_repo, bucket) = garden();
    store(&bucket).save(&Rule::new("bucket", "Flower")).unwrap();

    let loaded = store(&bucket).load_all().unwrap();

    assert_eq!(loaded.len(), 1);
    assert_eq!(
        BucketConfig::load(&DocumentStore::new(), &bucket).unwrap().name,
        "demo"
    );
}

#[test]
fn record_file_has_three_fields() {
    let (repo, bucket) = garden();
    let rule = Rule::new("bucket", "Flower");
    store(&bucket).save(&rule).unwrap();

    let path = repo.rules_dir("demo").join(address_of(&rule).file_name());
    let content = fs::read_to_string(path).unwrap();

    assert_eq!(content, "name: Flower\ntype: bucket\nexist: true\n");
}

// =============================================================================
// Failure modes
// =============================================================================

#[test]
fn malformed_record_fails_the_check() {
    let (repo, bucket) = garden();
    store(&bucket).save(&Rule::new("bucket", "Flower")).unwrap();
    let broken = repo.write_raw_record("demo", "broken.yaml", "exist: [\n");

    let err = check_bucket(&bucket).unwrap_err();

    match err {
        Error::MalformedRecord { path, .. } => assert_eq!(path, broken),
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

// =============================================================================
// Discovery
// =============================================================================

#[test]
fn bucket_and_repository_are_found_from_subdirectories() {
    let (repo, bucket) = garden();
    repo.mkdir("demo/deep/er");
    let start = repo.root().join("demo/deep/er");

    let found_bucket = find_upward(&start, ".b").unwrap();
    let found_repo = find_upward(&start, ".buckets").unwrap();

    assert_eq!(found_bucket, fs::canonicalize(&bucket).unwrap());
    assert_eq!(found_repo, fs::canonicalize(repo.root()).unwrap());
    assert_eq!(
        RepositoryConfig::load(&DocumentStore::new(), &found_repo)
            .unwrap()
            .name,
        "garden"
    );
}

#[test]
fn report_serializes_for_scripting() {
    let (_repo, bucket) = garden();
    store(&bucket).save(&Rule::new("bucket", "Flower")).unwrap();

    let report = check_bucket(&bucket).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["verdict"], "violated");
    assert_eq!(json["evaluations"][0]["target_exists"], false);
}
