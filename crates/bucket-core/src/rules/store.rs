//! Rule store: one record file per distinct rule
//!
//! Records live in a bucket's `.b/` directory next to the bucket metadata
//! file. A record is written once, under the name derived from the rule's
//! content address, and never overwritten. The read path never recomputes
//! identities; it trusts the file names it finds.

use std::fs;
use std::path::{Path, PathBuf};

use bucket_fs::{BucketPath, DocumentFormat, DocumentStore, io};

use super::address::{RuleId, address_of};
use super::record::RuleRecord;
use super::rule::Rule;
use crate::{Error, Result};

/// A rule loaded from disk together with the record it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRule {
    pub path: PathBuf,
    pub rule: Rule,
}

/// Persistent, deduplicated rule records for one bucket.
#[derive(Debug, Clone)]
pub struct RuleStore {
    rules_dir: PathBuf,
    documents: DocumentStore,
}

impl RuleStore {
    /// Store backed by an already resolved rules directory.
    pub fn new(rules_dir: impl Into<PathBuf>, documents: DocumentStore) -> Self {
        Self {
            rules_dir: rules_dir.into(),
            documents,
        }
    }

    /// Store for the bucket rooted at `bucket_root` (records in `<root>/.b`).
    pub fn for_bucket(bucket_root: &Path, documents: DocumentStore) -> Self {
        Self::new(bucket_root.join(BucketPath::RulesDir), documents)
    }

    pub fn rules_dir(&self) -> &Path {
        &self.rules_dir
    }

    /// Where the record for `id` lives (whether or not it exists).
    pub fn record_path(&self, id: &RuleId) -> PathBuf {
        self.rules_dir.join(id.file_name())
    }

    /// Persist `rule` as a new record.
    ///
    /// The rules directory must already exist; creating buckets is not the
    /// store's job.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateRule`] if a record with the same identity exists
    /// - [`Error::DirectoryUnavailable`] if the rules directory is missing
    /// - [`Error::InvalidRule`] for an empty kind or name
    pub fn save(&self, rule: &Rule) -> Result<RuleId> {
        rule.validate()?;

        if !self.rules_dir.is_dir() {
            return Err(Error::DirectoryUnavailable {
                path: self.rules_dir.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "rules directory does not exist",
                ),
            });
        }

        let id = address_of(rule);
        let path = self.record_path(&id);
        let record = RuleRecord::from(rule);

        match self.documents.create(&path, &record) {
            Ok(()) => {
                tracing::info!(rule = %rule, id = %id, "saved rule record");
                Ok(id)
            }
            Err(bucket_fs::Error::AlreadyExists { path }) => {
                tracing::debug!(rule = %rule, path = %path.display(), "rule record already present");
                Err(Error::DuplicateRule {
                    id: id.to_hex(),
                    path,
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Load every rule record, sorted by file name.
    ///
    /// Skips the bucket metadata file, subdirectories and temp files left by
    /// an interrupted write. Any other file that is not a valid record fails
    /// the whole enumeration.
    pub fn load_entries(&self) -> Result<Vec<StoredRule>> {
        let unavailable = |source: std::io::Error| Error::DirectoryUnavailable {
            path: self.rules_dir.clone(),
            source,
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.rules_dir).map_err(unavailable)? {
            let entry = entry.map_err(unavailable)?;
            let file_name = entry.file_name().to_string_lossy().into_owned();
            let path = entry.path();

            if file_name == BucketPath::BucketConfig.as_str() {
                continue;
            }
            // Follows symlinks, so a link to a directory is skipped too.
            if path.is_dir() {
                tracing::debug!(path = %path.display(), "skipping directory in rules dir");
                continue;
            }
            if io::is_temp_file(&file_name) {
                tracing::warn!(path = %path.display(), "skipping in-flight temp file in rules dir");
                continue;
            }
            paths.push(path);
        }
        paths.sort();

        paths
            .into_iter()
            .map(|path| {
                let rule = self.load_record(&path)?;
                tracing::debug!(path = %path.display(), rule = %rule, "loaded rule record");
                Ok(StoredRule { path, rule })
            })
            .collect()
    }

    /// Load every stored rule.
    pub fn load_all(&self) -> Result<Vec<Rule>> {
        Ok(self
            .load_entries()?
            .into_iter()
            .map(|stored| stored.rule)
            .collect())
    }

    fn load_record(&self, path: &Path) -> Result<Rule> {
        let malformed = |message: String| Error::MalformedRecord {
            path: path.to_path_buf(),
            message,
        };
        let content = String::from_utf8(io::read_bytes(path)?)
            .map_err(|e| malformed(format!("record is not valid UTF-8: {e}")))?;

        let record: RuleRecord = self
            .documents
            .parse(DocumentFormat::Yaml, &content, path)
            .map_err(|e| match e {
                bucket_fs::Error::DocumentParse { message, .. } => malformed(message),
                other => malformed(other.to_string()),
            })?;

        Rule::try_from(record).map_err(|e| malformed(e.to_string()))
    }
}
