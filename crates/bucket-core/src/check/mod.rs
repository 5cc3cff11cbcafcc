//! Checking stored expectations against the filesystem

mod checker;
mod report;

pub use checker::{Checker, check_bucket};
pub use report::{CheckReport, Evaluation, Verdict};
