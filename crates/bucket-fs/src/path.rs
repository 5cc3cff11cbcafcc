//! Path helpers: name validation and upward marker discovery

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Validate a bucket or repository name used as a single directory component.
///
/// Rejects empty names, `.`/`..`, and anything containing a path separator,
/// so a name can never escape the directory it is created in.
pub fn validate_identifier(name: &str) -> Result<()> {
    let reason = if name.trim().is_empty() {
        Some("name cannot be empty")
    } else if name == "." || name == ".." {
        Some("name cannot be '.' or '..'")
    } else if name.contains('/') || name.contains('\\') {
        Some("name cannot contain path separators")
    } else if name.chars().any(char::is_control) {
        Some("name cannot contain control characters")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::InvalidIdentifier {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

/// Walk from `start` towards the filesystem root looking for a directory
/// that contains `marker` as a subdirectory.
///
/// Returns the directory holding the marker (not the marker itself), or
/// `None` once the root has been checked. `start` itself is checked first.
pub fn find_upward(start: &Path, marker: impl AsRef<Path>) -> Option<PathBuf> {
    let start = dunce::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());
    let marker = marker.as_ref();

    let found = start.ancestors().find(|dir| dir.join(marker).is_dir());
    match found {
        Some(dir) => {
            tracing::debug!(root = %dir.display(), marker = %marker.display(), "found marker directory");
            Some(dir.to_path_buf())
        }
        None => {
            tracing::debug!(start = %start.display(), marker = %marker.display(), "marker directory not found");
            None
        }
    }
}
