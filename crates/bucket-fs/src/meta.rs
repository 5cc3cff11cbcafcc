//! Metadata documents for repositories and buckets
//!
//! Neither document is a rule record. The bucket metadata file lives in the
//! same directory as the rule records and is excluded from rule enumeration
//! by its name, [`BucketPath::BucketConfig`].

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{BucketPath, DocumentFormat, DocumentStore, Result, io};

/// Contents of `<bucket>/.b/config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketConfig {
    /// Bucket name, kept in sync with the directory name by `rename`
    pub name: String,
}

impl BucketConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Path of the metadata file for the bucket rooted at `bucket_root`.
    pub fn path(bucket_root: &Path) -> PathBuf {
        bucket_root
            .join(BucketPath::RulesDir)
            .join(BucketPath::BucketConfig)
    }

    pub fn load(store: &DocumentStore, bucket_root: &Path) -> Result<Self> {
        store.load(&Self::path(bucket_root))
    }

    /// Write the metadata file for a new bucket; never overwrites.
    pub fn create(&self, store: &DocumentStore, bucket_root: &Path) -> Result<()> {
        store.create(&Self::path(bucket_root), self)
    }

    /// Replace the metadata file of an existing bucket.
    pub fn save(&self, store: &DocumentStore, bucket_root: &Path) -> Result<()> {
        store.save(&Self::path(bucket_root), self)
    }
}

/// Contents of `<repository>/.buckets/config` (TOML, no extension).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Name of the top-level repository directory
    pub name: String,
    /// When the repository was initialised
    pub created: DateTime<Utc>,
}

impl RepositoryConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created: Utc::now(),
        }
    }

    /// Path of the config file for the repository rooted at `root`.
    pub fn path(root: &Path) -> PathBuf {
        root.join(BucketPath::RepositoryDir)
            .join(BucketPath::RepositoryConfig)
    }

    pub fn load(store: &DocumentStore, root: &Path) -> Result<Self> {
        store.load_as(&Self::path(root), DocumentFormat::Toml)
    }

    /// Write the config file for a new repository; never overwrites.
    pub fn create(&self, store: &DocumentStore, root: &Path) -> Result<()> {
        let path = Self::path(root);
        let content = store.render(DocumentFormat::Toml, self, &path)?;
        io::write_new(&path, content.as_bytes())
    }
}
