//! Filesystem layer for the bucket tool
//!
//! Provides the on-disk vocabulary shared by the rule engine and the CLI:
//! well-known path names, upward marker discovery, atomic and
//! create-exclusive writes, and a format-agnostic document store used for
//! every structured file the tool touches.

pub mod constants;
pub mod document;
pub mod error;
pub mod io;
pub mod meta;
pub mod path;

pub use constants::BucketPath;
pub use document::{DocumentFormat, DocumentStore};
pub use error::{Error, Result};
pub use meta::{BucketConfig, RepositoryConfig};
pub use path::{find_upward, validate_identifier};
