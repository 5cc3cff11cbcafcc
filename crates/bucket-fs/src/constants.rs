//! Well-known names inside a bucket repository.

use std::path::Path;

/// Fixed directory and file names used by the bucket tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketPath {
    /// The `.buckets` directory marking a repository root
    RepositoryDir,
    /// The `config` file inside `.buckets`
    RepositoryConfig,
    /// The `.b` directory holding a bucket's metadata and rule records
    RulesDir,
    /// The `config.yaml` metadata file inside `.b` (never a rule record)
    BucketConfig,
}

impl BucketPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RepositoryDir => ".buckets",
            Self::RepositoryConfig => "config",
            Self::RulesDir => ".b",
            Self::BucketConfig => "config.yaml",
        }
    }
}

impl AsRef<Path> for BucketPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for BucketPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for BucketPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
