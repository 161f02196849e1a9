//! `javert-syntax` - Concrete syntax tree interface for Java source analysis.
//!
//! This crate defines the vocabulary shared between a Java parser and the
//! analysis layers built on top of it:
//!
//! - **Syntax Kinds**: the closed set of terminal token tags and
//!   non-terminal grammar-rule tags
//! - **Syntax Tree**: `rowan`-backed lossless trees over those kinds
//! - **Construction**: a value-level description API a parser can target
//! - **Line Index**: offset-to-line mapping for issue reporting
//!
//! # Design Principles
//!
//! This crate follows the design of `rust-analyzer` and uses the `rowan`
//! library for building lossless syntax trees. The parser itself lives
//! outside this repository; everything here treats the tree as read-only
//! input.
//!
//! # Example
//!
//! ```
//! use javert_syntax::build::{build, node, token};
//! use javert_syntax::{LineIndex, SyntaxKind};
//!
//! let root = build(node(
//!     SyntaxKind::EmptyStatement,
//!     [token(SyntaxKind::Semi, ";")],
//! ));
//! let index = LineIndex::of(&root);
//! assert_eq!(index.line_of(&root), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod build;
mod line_index;
mod syntax;

pub use line_index::LineIndex;
pub use syntax::{
    JavaLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, SyntaxTreeBuilder,
};
