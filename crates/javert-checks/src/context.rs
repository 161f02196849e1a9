//! The per-file reporting context handed to checks.

use std::cell::RefCell;
use std::fmt;

use javert_ast::{AstNode, CompilationUnitTree};
use smol_str::SmolStr;

/// Identifies a rule, e.g. `S1145`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleKey(SmolStr);

impl RuleKey {
    /// Creates a rule key from its textual form.
    #[must_use]
    pub fn new(key: &str) -> Self {
        Self(SmolStr::new(key))
    }

    /// The textual form of the key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single reported issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    rule: RuleKey,
    line: u32,
    message: String,
}

impl Issue {
    /// The rule that reported the issue.
    #[must_use]
    pub fn rule(&self) -> &RuleKey {
        &self.rule
    }

    /// The 1-based source line the issue points at.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The issue message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The context a check scans one compilation unit through.
///
/// Issue reporting is append-only and never touches the AST; the context is
/// exclusively owned by one check at a time within a file, so interior
/// mutability over the issue list is single-threaded by contract.
#[derive(Debug)]
pub struct ScannerContext<'a> {
    tree: &'a CompilationUnitTree,
    issues: RefCell<Vec<Issue>>,
}

impl<'a> ScannerContext<'a> {
    /// Creates a context over a lowered compilation unit.
    #[must_use]
    pub fn new(tree: &'a CompilationUnitTree) -> Self {
        Self {
            tree,
            issues: RefCell::new(Vec::new()),
        }
    }

    /// The root AST of the scanned file.
    #[must_use]
    pub fn tree(&self) -> &'a CompilationUnitTree {
        self.tree
    }

    /// Reports an issue against a node; the node's concrete-syntax
    /// back-reference supplies the source line.
    pub fn add_issue<N: AstNode + ?Sized>(&self, node: &N, rule: &RuleKey, message: &str) {
        self.issues.borrow_mut().push(Issue {
            rule: rule.clone(),
            line: node.line(),
            message: message.to_owned(),
        });
    }

    /// Consumes the context, yielding the issues in report order.
    #[must_use]
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues.into_inner()
    }
}
