use assert_fs::prelude::*;
use bucket_fs::{BucketConfig, BucketPath, DocumentFormat, DocumentStore, Error};
use predicates::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Sample {
    name: String,
    exist: bool,
}

fn sample() -> Sample {
    Sample {
        name: "Flower".into(),
        exist: true,
    }
}

#[test]
fn yaml_document_on_disk() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("sample.yaml");

    DocumentStore::new().save(file.path(), &sample()).unwrap();

    file.assert(predicate::str::contains("name: Flower"));
    file.assert(predicate::str::contains("exist: true"));
}

#[test]
fn each_format_loads_what_it_saved() {
    let temp = assert_fs::TempDir::new().unwrap();
    let store = DocumentStore::new();

    for ext in ["yaml", "toml", "json"] {
        let file = temp.child(format!("sample.{}", ext));
        store.save(file.path(), &sample()).unwrap();
        let loaded: Sample = store.load(file.path()).unwrap();
        assert_eq!(loaded, sample(), "format {}", ext);
    }
}

#[test]
fn create_does_not_overwrite() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("sample.yaml");
    file.write_str("name: Other\nexist: false\n").unwrap();

    let err = DocumentStore::new().create(file.path(), &sample()).unwrap_err();

    assert!(matches!(err, Error::AlreadyExists { .. }));
    file.assert(predicate::str::contains("Other"));
}

#[test]
fn malformed_document_reports_parse_error() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("broken.yaml");
    file.write_str("name: [unterminated\n").unwrap();

    let err = DocumentStore::new().load::<Sample>(file.path()).unwrap_err();

    match err {
        Error::DocumentParse { format, path, .. } => {
            assert_eq!(format, DocumentFormat::Yaml.as_str());
            assert_eq!(path, file.path());
        }
        other => panic!("expected DocumentParse, got {:?}", other),
    }
}

#[test]
fn bucket_config_lands_in_rules_dir() {
    let temp = assert_fs::TempDir::new().unwrap();

    BucketConfig::new("demo")
        .create(&DocumentStore::new(), temp.path())
        .unwrap();

    temp.child(BucketPath::RulesDir.as_str())
        .child(BucketPath::BucketConfig.as_str())
        .assert(predicate::str::contains("name: demo"));
}
