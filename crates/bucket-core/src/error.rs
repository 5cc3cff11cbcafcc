//! Error types for bucket-core

use std::path::PathBuf;

/// Result type for bucket-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while storing or checking rules
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A record with the same identity is already stored
    #[error("Rule already exists: {path}")]
    DuplicateRule { id: String, path: PathBuf },

    /// A file in the rules directory is not a valid rule record
    #[error("Malformed rule record at {path}: {message}")]
    MalformedRecord { path: PathBuf, message: String },

    /// The rules directory is missing or cannot be listed
    #[error("Rules directory unavailable at {path}: {source}")]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rule target could not be inspected (other than being absent)
    #[error("Failed to inspect target '{target}': {source}")]
    Probe {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// A rule has an empty kind or name
    #[error("Invalid rule: {message}")]
    InvalidRule { message: String },

    /// Filesystem error from bucket-fs
    #[error(transparent)]
    Fs(#[from] bucket_fs::Error),
}
