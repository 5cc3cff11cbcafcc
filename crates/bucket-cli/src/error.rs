//! Error types for bucket-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from bucket-core
    #[error(transparent)]
    Core(#[from] bucket_core::Error),

    /// Error from bucket-fs
    #[error(transparent)]
    Fs(#[from] bucket_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON rendering error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Interactive prompt error
    #[error("Interactive prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// The check ran and at least one expectation does not hold
    #[error("expectations not met")]
    ExpectationsNotMet,

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Whether the message was already shown to the user by the command
    pub fn already_reported(&self) -> bool {
        matches!(self, Self::ExpectationsNotMet)
    }
}
