//! Rule model: one expectation about whether a named resource exists

use serde::{Deserialize, Serialize};

use crate::check::Evaluation;
use crate::probe::Probe;
use crate::{Error, Result};

/// Category of thing a rule asserts about, persisted as the record's `type`.
///
/// Kinds are open-ended: records written by other versions of the tool may
/// carry kinds this build has no constructor for, and they still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleKind(String);

impl RuleKind {
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    pub fn bucket() -> Self {
        Self::new("bucket")
    }

    pub fn input() -> Self {
        Self::new("input")
    }

    pub fn create() -> Self {
        Self::new("create")
    }

    pub fn output() -> Self {
        Self::new("output")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RuleKind {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RuleKind {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Resource types offered by the interactive selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    Input,
    Create,
    Output,
}

impl ResourceType {
    /// All selectable resource types, in menu order.
    pub const ALL: [ResourceType; 3] = [Self::Input, Self::Create, Self::Output];

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Create => "Create",
            Self::Output => "Output",
        }
    }
}

impl From<ResourceType> for RuleKind {
    fn from(resource: ResourceType) -> Self {
        match resource {
            ResourceType::Input => RuleKind::input(),
            ResourceType::Create => RuleKind::create(),
            ResourceType::Output => RuleKind::output(),
        }
    }
}

/// An expectation about one named resource.
///
/// `(kind, name, expected_exists)` is the whole identity of a rule: two rules
/// with equal fields are the same rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    kind: RuleKind,
    name: String,
    expected_exists: bool,
}

impl Rule {
    /// Create a rule asserting that `name` exists.
    pub fn new(kind: impl Into<RuleKind>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            expected_exists: true,
        }
    }

    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expected_exists(&self) -> bool {
        self.expected_exists
    }

    /// Assert presence of the target.
    pub fn mark_exists(&mut self) {
        self.expected_exists = true;
    }

    /// Assert absence of the target.
    pub fn mark_not_exists(&mut self) {
        self.expected_exists = false;
    }

    /// Reject rules that could never be checked meaningfully.
    pub fn validate(&self) -> Result<()> {
        if self.kind.as_str().trim().is_empty() {
            return Err(Error::InvalidRule {
                message: "rule kind cannot be empty".to_string(),
            });
        }
        if self.name.trim().is_empty() {
            return Err(Error::InvalidRule {
                message: "rule target name cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Evaluate this rule against live state.
    ///
    /// Passes when the target's presence matches `expected_exists`.
    pub fn evaluate<P: Probe + ?Sized>(&self, probe: &P) -> Result<Evaluation> {
        let target_exists = probe.exists(&self.name).map_err(|source| Error::Probe {
            target: self.name.clone(),
            source,
        })?;
        let evaluation = Evaluation::new(self.clone(), target_exists);
        tracing::debug!(
            rule = %self,
            target_exists,
            passed = evaluation.passed,
            "evaluated rule"
        );
        Ok(evaluation)
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}'", self.kind, self.name)?;
        if !self.expected_exists {
            write!(f, " (absent)")?;
        }
        Ok(())
    }
}
