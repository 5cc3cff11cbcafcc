//! Rename command implementation

use std::fs;
use std::path::{Path, PathBuf};

use bucket_fs::{BucketConfig, BucketPath, DocumentStore, validate_identifier};
use colored::Colorize;

use crate::error::{CliError, Result};

/// Run the rename command
pub fn run_rename(cwd: &Path, old: &str, new: &str) -> Result<()> {
    println!(
        "{} Renaming bucket {} to {}...",
        "=>".blue().bold(),
        old.cyan(),
        new.cyan()
    );

    rename_bucket(cwd, old, new)?;

    println!("{} Bucket renamed.", "OK".green().bold());
    Ok(())
}

/// Move `<cwd>/<old>` to `<cwd>/<new>` and update the bucket metadata name.
pub fn rename_bucket(cwd: &Path, old: &str, new: &str) -> Result<PathBuf> {
    validate_identifier(old)?;
    validate_identifier(new)?;

    let from = cwd.join(old);
    let to = cwd.join(new);

    if !from.exists() {
        return Err(CliError::user(format!(
            "Bucket doesn't exist in this directory: {}",
            old
        )));
    }
    if !from.join(BucketPath::RulesDir).is_dir() {
        return Err(CliError::user(format!(
            "Directory isn't a bucket, missing {} directory",
            BucketPath::RulesDir
        )));
    }
    if to.exists() {
        return Err(CliError::user(format!("Bucket already exists: {}", new)));
    }

    let documents = DocumentStore::new();
    let mut config = BucketConfig::load(&documents, &from)?;

    fs::rename(&from, &to)?;
    config.name = new.to_string();
    config.save(&documents, &to)?;

    tracing::info!(from = %from.display(), to = %to.display(), "renamed bucket");
    Ok(to)
}
