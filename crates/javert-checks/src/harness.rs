//! The check runner: sequential, panic-isolating, order-preserving.

use std::panic::{catch_unwind, AssertUnwindSafe};

use javert_ast::CompilationUnitTree;
use rustc_hash::FxHashMap;

use crate::context::{Issue, RuleKey, ScannerContext};

/// A lint rule: a visitor paired with per-file bootstrap logic.
pub trait FileScanner {
    /// The rule's key, used for reporting and failure attribution.
    fn rule_key(&self) -> RuleKey;

    /// Scans one compilation unit, reporting through the context.
    fn scan_file(&mut self, context: &ScannerContext<'_>);
}

/// The outcome of running a set of checks over one compilation unit.
#[derive(Debug)]
pub struct ScanReport {
    issues: Vec<Issue>,
    failures: FxHashMap<RuleKey, String>,
}

impl ScanReport {
    /// Issues in report order: traversal-encounter order within a check,
    /// harness invocation order across checks.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Panic messages keyed by the rule that raised them.
    #[must_use]
    pub fn failures(&self) -> &FxHashMap<RuleKey, String> {
        &self.failures
    }
}

/// Runs every check over the compilation unit, isolating raised checks.
///
/// A check that panics is reported against its rule and the remaining
/// checks still run; issues it appended before raising are kept.
pub fn run_checks(
    tree: &CompilationUnitTree,
    checks: &mut [Box<dyn FileScanner>],
) -> ScanReport {
    let context = ScannerContext::new(tree);
    let mut failures = FxHashMap::default();
    for check in checks.iter_mut() {
        let rule = check.rule_key();
        let outcome = catch_unwind(AssertUnwindSafe(|| check.scan_file(&context)));
        if let Err(payload) = outcome {
            let message = panic_message(&payload);
            tracing::error!(rule = %rule, error = message, "check raised; continuing with remaining checks");
            failures.insert(rule, message.to_owned());
        }
    }
    ScanReport {
        issues: context.into_issues(),
        failures,
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "check panicked"
    }
}
