//! Programmatic construction of concrete syntax trees.
//!
//! The analysis core never parses source text; it consumes trees that an
//! external parser produces. This module is the construction side of that
//! contract: a parser (or a test) describes the tree as nested
//! [`Element`] values and [`build`] materialises them as a `rowan` tree.
//!
//! # Example
//!
//! ```
//! use javert_syntax::build::{build, node, token};
//! use javert_syntax::SyntaxKind;
//!
//! let root = build(node(
//!     SyntaxKind::QualifiedIdentifier,
//!     [
//!         token(SyntaxKind::Ident, "a"),
//!         token(SyntaxKind::Dot, "."),
//!         token(SyntaxKind::Ident, "b"),
//!     ],
//! ));
//! assert_eq!(root.text().to_string(), "a.b");
//! ```

use smol_str::SmolStr;

use crate::syntax::{SyntaxKind, SyntaxNode, SyntaxTreeBuilder};

/// A node or token description, prior to interning into a green tree.
#[derive(Debug, Clone)]
pub enum Element {
    /// An interior node with a grammar-rule kind and ordered children.
    Node(SyntaxKind, Vec<Element>),
    /// A leaf token with a terminal kind and its source text.
    Token(SyntaxKind, SmolStr),
}

/// Describes an interior node.
pub fn node(kind: SyntaxKind, children: impl IntoIterator<Item = Element>) -> Element {
    debug_assert!(kind.is_node(), "{kind:?} is not a grammar-rule kind");
    Element::Node(kind, children.into_iter().collect())
}

/// Describes a leaf token.
pub fn token(kind: SyntaxKind, text: &str) -> Element {
    debug_assert!(kind.is_token(), "{kind:?} is not a terminal kind");
    Element::Token(kind, SmolStr::new(text))
}

/// Materialises an element description as a syntax tree and returns its root.
///
/// A bare token is wrapped in an `Error` node so that the result is always a
/// node; parsers hand over nodes, so this only matters for degenerate input.
#[must_use]
pub fn build(root: Element) -> SyntaxNode {
    let mut builder = SyntaxTreeBuilder::new();
    match root {
        Element::Node(..) => emit(&mut builder, &root),
        Element::Token(..) => {
            builder.start_node(SyntaxKind::Error.into());
            emit(&mut builder, &root);
            builder.finish_node();
        }
    }
    SyntaxNode::new_root(builder.finish())
}

fn emit(builder: &mut SyntaxTreeBuilder, element: &Element) {
    match element {
        Element::Node(kind, children) => {
            builder.start_node((*kind).into());
            for child in children {
                emit(builder, child);
            }
            builder.finish_node();
        }
        Element::Token(kind, text) => builder.token((*kind).into(), text),
    }
}
