//! Persisted form of a rule

use serde::{Deserialize, Serialize};

use super::rule::Rule;
use crate::{Error, Result};

/// A rule record document: exactly `name`, `type` and `exist`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub exist: bool,
}

impl From<&Rule> for RuleRecord {
    fn from(rule: &Rule) -> Self {
        Self {
            name: rule.name().to_string(),
            kind: rule.kind().as_str().to_string(),
            exist: rule.expected_exists(),
        }
    }
}

impl TryFrom<RuleRecord> for Rule {
    type Error = Error;

    fn try_from(record: RuleRecord) -> Result<Self> {
        let mut rule = Rule::new(record.kind, record.name);
        if !record.exist {
            rule.mark_not_exists();
        }
        rule.validate()?;
        Ok(rule)
    }
}
