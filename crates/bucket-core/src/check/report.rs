//! Check result types
//!
//! Provides the per-rule evaluation outcome and the aggregate verdict of a
//! bucket check.

use serde::Serialize;

use crate::rules::Rule;

/// Printed when a presence rule's target is missing.
pub const DIAGNOSTIC_MISSING: &str = "target does not exist";
/// Printed when an absence rule's target is present.
pub const DIAGNOSTIC_PRESENT: &str = "target exists";

/// Aggregate outcome of checking a bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Every rule holds (also the verdict for a bucket without rules)
    Met,
    /// At least one rule does not hold
    Violated,
}

impl Verdict {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Met => "expectations met",
            Self::Violated => "expectations not met",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of evaluating one rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// The rule that was evaluated
    pub rule: Rule,
    /// Whether the target was found
    pub target_exists: bool,
    /// Whether the target's presence matched the expectation
    pub passed: bool,
    /// Human-readable note, present only when the rule failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

impl Evaluation {
    pub fn new(rule: Rule, target_exists: bool) -> Self {
        let passed = target_exists == rule.expected_exists();
        let diagnostic = match (passed, target_exists) {
            (true, _) => None,
            (false, false) => Some(DIAGNOSTIC_MISSING.to_string()),
            (false, true) => Some(DIAGNOSTIC_PRESENT.to_string()),
        };
        Self {
            rule,
            target_exists,
            passed,
            diagnostic,
        }
    }
}

/// Report from checking every rule in a bucket
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Aggregate verdict
    pub verdict: Verdict,
    /// One entry per stored rule, in record file name order
    pub evaluations: Vec<Evaluation>,
}

impl CheckReport {
    /// Report for a bucket with no rules
    pub fn empty() -> Self {
        Self {
            verdict: Verdict::Met,
            evaluations: Vec::new(),
        }
    }

    pub fn is_met(&self) -> bool {
        self.verdict == Verdict::Met
    }

    /// Evaluations that failed, in evaluation order
    pub fn violations(&self) -> impl Iterator<Item = &Evaluation> {
        self.evaluations.iter().filter(|e| !e.passed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_met() {
        let report = CheckReport::empty();
        assert!(report.is_met());
        assert_eq!(report.violations().count(), 0);
    }

    #[test]
    fn test_verdict_messages() {
        assert_eq!(Verdict::Met.to_string(), "expectations met");
        assert_eq!(Verdict::Violated.to_string(), "expectations not met");
    }

    #[test]
    fn test_violations_filters_passed() {
        let report = CheckReport {
            verdict: Verdict::Violated,
            evaluations: vec![
                Evaluation::new(Rule::new("bucket", "Here"), true),
                Evaluation::new(Rule::new("bucket", "Gone"), false),
            ],
        };
        let names: Vec<&str> = report.violations().map(|e| e.rule.name()).collect();
        assert_eq!(names, vec!["Gone"]);
    }

    #[test]
    fn test_report_json_shape() {
        let report = CheckReport {
            verdict: Verdict::Violated,
            evaluations: vec![Evaluation::new(Rule::new("bucket", "Flower"), false)],
        };
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["verdict"], "violated");
        assert_eq!(json["evaluations"][0]["rule"]["name"], "Flower");
        assert_eq!(json["evaluations"][0]["rule"]["kind"], "bucket");
        assert_eq!(json["evaluations"][0]["diagnostic"], "target does not exist");
    }

    #[test]
    fn test_passing_evaluation_omits_diagnostic() {
        let json =
            serde_json::to_value(Evaluation::new(Rule::new("bucket", "Flower"), true)).unwrap();
        assert!(json.get("diagnostic").is_none());
    }
}
