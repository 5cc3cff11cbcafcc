//! Init command implementation
//!
//! Creates a new bucket repository directory.

use std::fs;
use std::path::{Path, PathBuf};

use bucket_fs::{BucketPath, DocumentStore, RepositoryConfig, validate_identifier};
use colored::Colorize;

use crate::error::{CliError, Result};

/// Run the init command
pub fn run_init(cwd: &Path, name: &str) -> Result<()> {
    println!(
        "{} Initializing bucket repository {}...",
        "=>".blue().bold(),
        name.cyan()
    );

    let root = init_repository(cwd, name)?;

    println!(
        "{} Initialised bucket repository at {}",
        "OK".green().bold(),
        root.display()
    );
    Ok(())
}

/// Create `<cwd>/<name>/.buckets/config`
///
/// Fails if `<cwd>/<name>` already exists in any form.
pub fn init_repository(cwd: &Path, name: &str) -> Result<PathBuf> {
    validate_identifier(name)?;

    let root = cwd.join(name);
    if root.exists() {
        return Err(CliError::user(format!("Directory already exists: {}", name)));
    }

    fs::create_dir_all(root.join(BucketPath::RepositoryDir))?;
    RepositoryConfig::new(name).create(&DocumentStore::new(), &root)?;

    tracing::info!(root = %root.display(), "initialised repository");
    Ok(root)
}
