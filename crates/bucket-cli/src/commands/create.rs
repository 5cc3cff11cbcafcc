//! Create command implementation
//!
//! Creates a bucket: a directory with a `.b` rules directory and its
//! metadata file.

use std::fs;
use std::path::{Path, PathBuf};

use bucket_fs::{BucketConfig, BucketPath, DocumentStore, validate_identifier};
use colored::Colorize;

use crate::context::detect_context;
use crate::error::{CliError, Result};

/// Run the create command
pub fn run_create(cwd: &Path, name: &str) -> Result<()> {
    println!("{} Creating bucket {}...", "=>".blue().bold(), name.cyan());

    let bucket = create_bucket(cwd, name)?;

    println!(
        "{} Created bucket at {}",
        "OK".green().bold(),
        bucket.display()
    );
    Ok(())
}

/// Create `<cwd>/<name>/.b/config.yaml`
///
/// Must be run inside a repository.
pub fn create_bucket(cwd: &Path, name: &str) -> Result<PathBuf> {
    validate_identifier(name)?;
    detect_context(cwd).require_repository()?;

    let bucket = cwd.join(name);
    if bucket.exists() {
        return Err(CliError::user(format!("Bucket already exists: {}", name)));
    }

    fs::create_dir_all(bucket.join(BucketPath::RulesDir))?;
    BucketConfig::new(name).create(&DocumentStore::new(), &bucket)?;

    tracing::info!(bucket = %bucket.display(), "created bucket");
    Ok(bucket)
}
