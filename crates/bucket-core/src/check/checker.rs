//! Checker: evaluates every stored rule and aggregates a verdict

use std::path::Path;

use bucket_fs::DocumentStore;

use super::report::{CheckReport, Verdict};
use crate::Result;
use crate::probe::{FsProbe, Probe};
use crate::rules::RuleStore;

/// Evaluates all rules of one store against a probe.
///
/// Every rule is evaluated, even after the verdict is already `Violated`, so
/// the report lists each failing rule.
pub struct Checker<'a, P: Probe + ?Sized> {
    store: &'a RuleStore,
    probe: &'a P,
}

impl<'a, P: Probe + ?Sized> Checker<'a, P> {
    pub fn new(store: &'a RuleStore, probe: &'a P) -> Self {
        Self { store, probe }
    }

    /// Load every record and evaluate it.
    ///
    /// Fails on the first unreadable or malformed record, or on a probe error;
    /// there is no partial check.
    pub fn check(&self) -> Result<CheckReport> {
        let entries = self.store.load_entries()?;
        tracing::debug!(
            rules_dir = %self.store.rules_dir().display(),
            count = entries.len(),
            "checking rules"
        );

        let mut report = CheckReport::empty();
        report.evaluations.reserve(entries.len());

        for entry in entries {
            let evaluation = entry.rule.evaluate(self.probe)?;
            if !evaluation.passed {
                tracing::warn!(
                    record = %entry.path.display(),
                    rule = %entry.rule,
                    "expectation violated"
                );
                report.verdict = Verdict::Violated;
            }
            report.evaluations.push(evaluation);
        }

        tracing::info!(
            rules = report.evaluations.len(),
            violations = report.violations().count(),
            verdict = ?report.verdict,
            "check complete"
        );
        Ok(report)
    }
}

/// Check the bucket rooted at `bucket_root` against the live filesystem.
///
/// Rule targets are resolved relative to `bucket_root`.
pub fn check_bucket(bucket_root: &Path) -> Result<CheckReport> {
    let store = RuleStore::for_bucket(bucket_root, DocumentStore::new());
    let probe = FsProbe::new(bucket_root);
    Checker::new(&store, &probe).check()
}
