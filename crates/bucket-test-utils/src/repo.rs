//! [`TestRepo`] builder for bucket test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use bucket_fs::{BucketConfig, BucketPath, DocumentStore, RepositoryConfig};
use tempfile::TempDir;

/// A temporary directory with helpers for laying out repositories and
/// buckets exactly as the `bucket` tool does.
///
/// # Example
///
/// ```rust,no_run
/// use bucket_test_utils::TestRepo;
///
/// let repo = TestRepo::new();
/// repo.init_repository("garden");
/// let bucket = repo.create_bucket("demo");
/// repo.assert_file_exists("demo/.b/config.yaml");
/// # let _ = bucket;
/// ```
pub struct TestRepo {
    temp_dir: TempDir,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Mark the root as a repository by writing `.buckets/config`.
    pub fn init_repository(&self, name: &str) {
        RepositoryConfig::new(name)
            .create(&DocumentStore::new(), self.root())
            .expect("TestRepo::init_repository: failed to write repository config");
    }

    /// Create bucket `name` directly under the root and return its path.
    pub fn create_bucket(&self, name: &str) -> PathBuf {
        let bucket = self.root().join(name);
        fs::create_dir_all(bucket.join(BucketPath::RulesDir)).unwrap();
        BucketConfig::new(name)
            .create(&DocumentStore::new(), &bucket)
            .expect("TestRepo::create_bucket: failed to write bucket config");
        bucket
    }

    /// Path of the rules directory of bucket `name`.
    pub fn rules_dir(&self, bucket: &str) -> PathBuf {
        self.root().join(bucket).join(BucketPath::RulesDir)
    }

    /// Write a raw file into a bucket's rules directory, bypassing the store.
    pub fn write_raw_record(&self, bucket: &str, file_name: &str, content: &str) -> PathBuf {
        let path = self.rules_dir(bucket).join(file_name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Names of rule record files in a bucket (metadata file excluded), sorted.
    pub fn record_files(&self, bucket: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.rules_dir(bucket))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|n| n != BucketPath::BucketConfig.as_str())
            .collect();
        names.sort();
        names
    }

    /// Create a directory (relative to the root), e.g. a rule target.
    pub fn mkdir(&self, path: &str) {
        fs::create_dir_all(self.root().join(path)).unwrap();
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            full_path.display(),
            content,
            file_content
        );
    }
}
