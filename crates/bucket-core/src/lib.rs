//! Expectation engine for buckets
//!
//! A bucket is a directory tree whose contents are governed by a set of
//! expectations ("rules"). This crate implements:
//!
//! - **Rule model**: one expectation about whether a named resource exists
//! - **Content addressing**: a deterministic SHA-256 identity per rule
//! - **Rule store**: one record file per identity inside the bucket's `.b/`
//!   directory, never overwritten
//! - **Checker**: evaluates every stored rule against the live filesystem and
//!   aggregates a single verdict
//!
//! # Architecture
//!
//! ```text
//!        bucket-cli (expect / check)
//!                  |
//!             bucket-core
//!    rules::{Rule, address_of, RuleStore}
//!    check::{Checker, CheckReport}
//!                  |
//!              bucket-fs
//! ```
//!
//! Bucket discovery is the caller's job: everything here takes an already
//! resolved bucket root or rules directory.
//!
//! # Example
//!
//! ```no_run
//! use bucket_core::{Rule, RuleKind, RuleStore, check_bucket};
//! use bucket_fs::DocumentStore;
//! use std::path::Path;
//!
//! fn example(bucket: &Path) -> bucket_core::Result<()> {
//!     let store = RuleStore::for_bucket(bucket, DocumentStore::new());
//!     store.save(&Rule::new(RuleKind::bucket(), "Flower"))?;
//!
//!     let report = check_bucket(bucket)?;
//!     println!("{}", report.verdict);
//!     Ok(())
//! }
//! ```

pub mod check;
pub mod error;
pub mod probe;
pub mod rules;

pub use check::{CheckReport, Checker, Evaluation, Verdict, check_bucket};
pub use error::{Error, Result};
pub use probe::{FsProbe, Probe};
pub use rules::{
    RECORD_EXTENSION, ResourceType, Rule, RuleId, RuleKind, RuleRecord, RuleStore, StoredRule,
    address_of,
};
