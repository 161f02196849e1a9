//! `javert-checks` - Check harness and lint rules over the Java analysis
//! AST.
//!
//! A *check* pairs a [`TreeVisitor`](javert_ast::TreeVisitor) with per-file
//! bootstrap logic behind the [`FileScanner`] trait. The harness invokes
//! `scan_file` once per compilation unit; the check reads the root AST from
//! the [`ScannerContext`] and reports issues through it. A check that
//! raises is isolated: the harness records the failure against the rule and
//! continues with the remaining checks.
//!
//! # Example
//!
//! ```
//! use javert_ast::build_compilation_unit;
//! use javert_checks::checks::IfConditionAlwaysTrueOrFalse;
//! use javert_checks::{run_checks, FileScanner};
//! use javert_syntax::build::{build, node};
//! use javert_syntax::SyntaxKind;
//!
//! let root = build(node(SyntaxKind::CompilationUnit, []));
//! let unit = build_compilation_unit(&root).unwrap();
//! let mut checks: Vec<Box<dyn FileScanner>> =
//!     vec![Box::new(IfConditionAlwaysTrueOrFalse)];
//! let report = run_checks(&unit, &mut checks);
//! assert!(report.issues().is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod checks;
mod context;
mod harness;

pub use context::{Issue, RuleKey, ScannerContext};
pub use harness::{run_checks, FileScanner, ScanReport};
