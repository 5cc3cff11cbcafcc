//! Info command implementation

use std::fs;
use std::path::{Path, PathBuf};

use bucket_fs::{BucketPath, RepositoryConfig, io};
use colored::Colorize;

use crate::context::detect_context;
use crate::error::{CliError, Result};

/// Run the info command
///
/// Prints the repository root, its raw configuration and the buckets found
/// directly under the root.
pub fn run_info(cwd: &Path) -> Result<()> {
    let context = detect_context(cwd);
    let root = context
        .repository_root()
        .ok_or_else(|| CliError::user("Not a repository"))?;

    let config = io::read_text(&RepositoryConfig::path(root))?;

    println!("{} {}", "Repository:".bold(), root.display());
    println!();
    println!("{}", config.trim_end());
    println!();

    let buckets = list_buckets(root)?;
    if buckets.is_empty() {
        println!("{}", "No buckets.".dimmed());
    } else {
        println!("{}", "Buckets:".bold());
        for bucket in buckets {
            let name = bucket
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            println!("  {}", name.cyan());
        }
    }

    Ok(())
}

/// Subdirectories of `root` that are buckets, sorted by path
pub fn list_buckets(root: &Path) -> Result<Vec<PathBuf>> {
    let mut buckets = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        if path.join(BucketPath::RulesDir).is_dir() {
            buckets.push(path);
        }
    }
    buckets.sort();
    Ok(buckets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bucket_test_utils::TestRepo;

    #[test]
    fn test_info_inside_repository() {
        let repo = TestRepo::new();
        repo.init_repository("garden");

        assert!(run_info(repo.root()).is_ok());
    }

    #[test]
    fn test_info_outside_repository_fails() {
        let repo = TestRepo::new();

        let err = run_info(repo.root()).unwrap_err();

        assert_eq!(err.to_string(), "Not a repository");
    }

    #[test]
    fn test_list_buckets_ignores_plain_directories() {
        let repo = TestRepo::new();
        repo.init_repository("garden");
        repo.create_bucket("beta");
        repo.create_bucket("alpha");
        repo.mkdir("notes");

        let names: Vec<String> = list_buckets(repo.root())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["alpha", "beta"]);
    }
}
