//! Atomic I/O operations with file locking

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use fs2::FileExt;

use crate::{Error, Result};

/// Suffix shared by every in-flight temp file written by this module.
const TEMP_SUFFIX: &str = ".tmp";

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Build a hidden temp path next to `path` (same filesystem, so rename and
/// link stay atomic).
///
/// The name follows `.{file_name}.{pid}.{n}.tmp`.
fn temp_path_for(path: &Path) -> PathBuf {
    let temp_name = format!(
        ".{}.{}.{}{}",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id(),
        TEMP_COUNTER.fetch_add(1, Ordering::Relaxed),
        TEMP_SUFFIX
    );
    path.with_file_name(temp_name)
}

/// Returns true if `file_name` looks like a temp file left by [`write_atomic`]
/// or [`write_new`].
pub fn is_temp_file(file_name: &str) -> bool {
    file_name.starts_with('.') && file_name.ends_with(TEMP_SUFFIX)
}

/// Write `content` into a fresh temp file next to `path`, locked and synced.
fn write_temp(path: &Path, content: &[u8]) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }

    let temp_path = temp_path_for(path);
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    let written = fill_locked(&mut temp_file, path, &temp_path, content);
    if written.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    written.map(|()| temp_path)
}

fn fill_locked(file: &mut File, target: &Path, temp_path: &Path, content: &[u8]) -> Result<()> {
    file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;
    file.write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;
    file.sync_all().map_err(|e| Error::io(temp_path, e))?;
    file.unlock().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;
    Ok(())
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename, so readers observe either the old
/// content or the new content. Existing files are replaced.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let temp_path = write_temp(path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(path, e));
    }
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file atomically");
    Ok(())
}

/// Create a new file with the given content, failing if it already exists.
///
/// The content is fully written and synced to a temp file first and then
/// hard-linked into place. Linking fails atomically when the target name is
/// taken, so a crash never leaves a partially written file under `path`.
///
/// # Errors
///
/// Returns [`Error::AlreadyExists`] when `path` is occupied.
pub fn write_new(path: &Path, content: &[u8]) -> Result<()> {
    if path.exists() {
        return Err(Error::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    let temp_path = write_temp(path, content)?;
    let linked = fs::hard_link(&temp_path, path);
    if let Err(e) = fs::remove_file(&temp_path) {
        tracing::warn!(
            path = %temp_path.display(),
            error = %e,
            "failed to remove temp file after create"
        );
    }

    match linked {
        Ok(()) => {
            tracing::debug!(path = %path.display(), bytes = content.len(), "created file");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(Error::AlreadyExists {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Read raw bytes from a file.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::io(path, e))
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
