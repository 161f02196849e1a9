//! `javert-ast` - Typed abstract syntax tree for Java source analysis.
//!
//! This crate turns the concrete syntax trees of `javert-syntax` into a
//! typed, immutable AST and provides the traversal substrate checks build
//! on:
//!
//! - **Kinds**: the closed [`Kind`] and [`Modifier`] vocabularies and the
//!   pure operator/literal/modifier lookup tables
//! - **Tree**: one variant per syntactic shape, with read-only accessors
//!   and concrete-syntax back-references on every node
//! - **Builder**: [`build_compilation_unit`], a single-pass lowering that
//!   fails closed on out-of-contract input
//! - **Visitor**: [`TreeVisitor`] double dispatch with declaration-order
//!   default descent
//!
//! # Example
//!
//! ```
//! use javert_ast::build_compilation_unit;
//! use javert_syntax::build::{build, node};
//! use javert_syntax::SyntaxKind;
//!
//! let root = build(node(SyntaxKind::CompilationUnit, []));
//! let unit = build_compilation_unit(&root).unwrap();
//! assert!(unit.types().is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod dump;
mod error;
mod kind;
mod lower;
mod tables;
mod tree;
pub mod visitor;

pub use error::LowerError;
pub use kind::{Kind, Modifier};
pub use lower::build_compilation_unit;
pub use tables::{
    assignment_kind, binary_kind, literal_kind, modifier_kind, postfix_kind, prefix_kind,
};
pub use tree::{
    ArrayAccessTree, ArrayTypeTree, AssertStatementTree, AssignmentExpressionTree, AstNode,
    BinaryExpressionTree, BlockTree, BreakStatementTree, CaseGroupTree, CaseLabelTree, CatchTree,
    ClassTree, CompilationUnitTree, ConditionalExpressionTree, ContinueStatementTree,
    DoWhileStatementTree, EmptyStatementTree, ExpressionStatementTree, ForEachStatementTree,
    ForStatementTree, IdentifierTree, IfStatementTree, ImportTree, InstanceOfTree,
    LabeledStatementTree, LiteralTree, MemberSelectTree, MethodInvocationTree, MethodTree,
    ModifiersTree, NewArrayTree, NewClassTree, ParenthesizedTree, PrimitiveTypeTree,
    ReturnStatementTree, SwitchStatementTree, SynchronizedStatementTree, ThrowStatementTree,
    Tree, TryStatementTree, TypeCastTree, UnaryExpressionTree, VariableTree, WhileStatementTree,
    WildcardTree,
};
pub use visitor::{BaseVisitor, TreeVisitor};
