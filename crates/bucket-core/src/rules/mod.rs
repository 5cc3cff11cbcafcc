//! Rules module
//!
//! A rule is an expectation about a single named resource. Each distinct rule
//! is stored exactly once, as a YAML record named after its content address.

mod address;
mod record;
mod rule;
mod store;

pub use address::{RECORD_EXTENSION, RuleId, address_of};
pub use record::RuleRecord;
pub use rule::{ResourceType, Rule, RuleKind};
pub use store::{RuleStore, StoredRule};
