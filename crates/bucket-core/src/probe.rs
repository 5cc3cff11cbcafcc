//! Filesystem probe used to evaluate rules against live state

use std::io::{self, ErrorKind};
use std::path::PathBuf;

/// Answers whether a named target exists.
pub trait Probe {
    /// `Ok(false)` only when the target is absent; other failures are errors.
    fn exists(&self, target: &str) -> io::Result<bool>;
}

impl<P: Probe + ?Sized> Probe for &P {
    fn exists(&self, target: &str) -> io::Result<bool> {
        (**self).exists(target)
    }
}

/// Probe that stats targets relative to a base directory.
///
/// For bucket checks the base is the bucket root, the directory holding `.b/`.
#[derive(Debug, Clone)]
pub struct FsProbe {
    base: PathBuf,
}

impl FsProbe {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl Probe for FsProbe {
    fn exists(&self, target: &str) -> io::Result<bool> {
        match std::fs::metadata(self.base.join(target)) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}
