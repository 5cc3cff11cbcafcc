//! Expect command implementation
//!
//! Records a new rule in the enclosing bucket.

use std::path::Path;

use bucket_core::{Rule, RuleId, RuleKind, RuleStore};
use bucket_fs::DocumentStore;
use colored::Colorize;

use crate::context::detect_context;
use crate::error::Result;
use crate::interactive;

/// Run the expect command with explicit kind and name
pub fn run_expect(cwd: &Path, kind: &str, name: &str, absent: bool) -> Result<()> {
    let rule = build_rule(kind, name, absent);
    let id = save_rule(cwd, &rule)?;
    report_saved(&rule, &id);
    Ok(())
}

/// Run `expect set`: choose the resource type from a menu
pub fn run_expect_set(cwd: &Path, absent: bool) -> Result<()> {
    // Fail before prompting when there is nowhere to save.
    detect_context(cwd).require_bucket()?;

    let (resource, name) = interactive::select_resource()?;
    let rule = build_rule(RuleKind::from(resource), name.trim(), absent);
    let id = save_rule(cwd, &rule)?;
    report_saved(&rule, &id);
    Ok(())
}

fn build_rule(kind: impl Into<RuleKind>, name: &str, absent: bool) -> Rule {
    let mut rule = Rule::new(kind, name);
    if absent {
        rule.mark_not_exists();
    }
    rule
}

/// Save `rule` into the bucket enclosing `cwd`
pub fn save_rule(cwd: &Path, rule: &Rule) -> Result<RuleId> {
    let context = detect_context(cwd);
    let bucket = context.require_bucket()?;
    let store = RuleStore::for_bucket(bucket, DocumentStore::new());
    Ok(store.save(rule)?)
}

fn report_saved(rule: &Rule, id: &RuleId) {
    println!("{} Expecting {}", "OK".green().bold(), rule);
    println!("   {}", id.to_string().dimmed());
}
