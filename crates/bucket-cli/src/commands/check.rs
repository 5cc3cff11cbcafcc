//! Check command implementation
//!
//! Evaluates every rule of the enclosing bucket and prints the verdict.

use std::path::Path;

use bucket_core::{CheckReport, Evaluation, check_bucket};
use colored::Colorize;

use crate::context::detect_context;
use crate::error::{CliError, Result};

/// Run the check command
///
/// Returns [`CliError::ExpectationsNotMet`] after printing the report when
/// any rule fails, so the process exits non-zero.
pub fn run_check(cwd: &Path, json: bool) -> Result<()> {
    let context = detect_context(cwd);
    let bucket = context.require_bucket()?;

    let report = check_bucket(bucket)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.is_met() {
        Ok(())
    } else {
        Err(CliError::ExpectationsNotMet)
    }
}

fn print_report(report: &CheckReport) {
    for evaluation in report.violations() {
        println!("{} {}", "[X]".red(), violation_line(evaluation));
    }

    if report.is_met() {
        println!("{} {}", "OK".green().bold(), report.verdict);
    } else {
        println!("{} {}", "FAIL".red().bold(), report.verdict);
    }
}

/// One line per failed rule: `<kind> '<name>': <diagnostic>`
fn violation_line(evaluation: &Evaluation) -> String {
    format!(
        "{} '{}': {}",
        evaluation.rule.kind(),
        evaluation.rule.name(),
        evaluation.diagnostic.as_deref().unwrap_or_default()
    )
}
