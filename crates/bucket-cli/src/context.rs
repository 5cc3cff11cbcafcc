//! Bucket context detection
//!
//! Works out which repository and bucket the current directory belongs to,
//! so commands work from anywhere inside a bucket.

use std::path::{Path, PathBuf};

use bucket_fs::{BucketPath, find_upward};

use crate::error::{CliError, Result};

/// Where a command is being run from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BucketContext {
    /// Inside a bucket (a directory holding `.b`), possibly within a repository
    Bucket {
        root: PathBuf,
        repository: Option<PathBuf>,
    },

    /// Inside a repository but not inside any bucket
    Repository { root: PathBuf },

    /// Not inside any recognized repository or bucket
    Outside,
}

impl BucketContext {
    /// Root of the enclosing bucket
    pub fn bucket_root(&self) -> Option<&Path> {
        match self {
            BucketContext::Bucket { root, .. } => Some(root),
            _ => None,
        }
    }

    /// Root of the enclosing repository (the directory holding `.buckets`)
    pub fn repository_root(&self) -> Option<&Path> {
        match self {
            BucketContext::Bucket { repository, .. } => repository.as_deref(),
            BucketContext::Repository { root } => Some(root),
            BucketContext::Outside => None,
        }
    }

    /// Bucket root, or a user error naming what is missing
    pub fn require_bucket(&self) -> Result<&Path> {
        self.bucket_root().ok_or_else(|| {
            CliError::user(format!(
                "Not inside a bucket (no {} directory found)",
                BucketPath::RulesDir
            ))
        })
    }

    /// Repository root, or a user error
    pub fn require_repository(&self) -> Result<&Path> {
        self.repository_root()
            .ok_or_else(|| CliError::user("Not in a bucket repository"))
    }
}

/// Detect the bucket context from the given directory
///
/// Walks up from `cwd` looking for `.b` (bucket) and `.buckets` (repository).
pub fn detect_context(cwd: &Path) -> BucketContext {
    let repository = find_upward(cwd, BucketPath::RepositoryDir);

    match find_upward(cwd, BucketPath::RulesDir) {
        Some(root) => BucketContext::Bucket { root, repository },
        None => match repository {
            Some(root) => BucketContext::Repository { root },
            None => BucketContext::Outside,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bucket_test_utils::TestRepo;

    fn canonical(path: &Path) -> PathBuf {
        std::fs::canonicalize(path).unwrap()
    }

    #[test]
    fn test_detect_bucket_inside_repository() {
        let repo = TestRepo::new();
        repo.init_repository("garden");
        let bucket = repo.create_bucket("demo");

        let context = detect_context(&bucket);

        assert_eq!(context.bucket_root(), Some(canonical(&bucket).as_path()));
        assert_eq!(context.repository_root(), Some(canonical(repo.root()).as_path()));
    }

    #[test]
    fn test_detect_from_subdirectory_of_bucket() {
        let repo = TestRepo::new();
        let bucket = repo.create_bucket("demo");
        repo.mkdir("demo/Flower/petals");

        let context = detect_context(&bucket.join("Flower/petals"));

        assert_eq!(context.bucket_root(), Some(canonical(&bucket).as_path()));
        assert!(context.repository_root().is_none());
    }

    #[test]
    fn test_detect_repository_root() {
        let repo = TestRepo::new();
        repo.init_repository("garden");

        let context = detect_context(repo.root());

        assert!(matches!(context, BucketContext::Repository { .. }));
        assert!(context.require_bucket().is_err());
        assert!(context.require_repository().is_ok());
    }

    #[test]
    fn test_detect_outside() {
        let repo = TestRepo::new();
        repo.mkdir("plain");

        let context = detect_context(&repo.root().join("plain"));

        assert_eq!(context, BucketContext::Outside);
        let err = context.require_repository().unwrap_err();
        assert_eq!(err.to_string(), "Not in a bucket repository");
    }
}
