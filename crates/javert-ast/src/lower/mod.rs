//! Lowering from concrete syntax trees to the typed AST.
//!
//! The builder is a deterministic, single-pass, top-down recursion over the
//! concrete tree, with locally right-to-left folds for the right-associative
//! expression classes. It fails only on input whose shape contradicts the
//! closed grammar-tag set; it never returns a partial tree.

mod declarations;
mod expressions;
mod statements;

use javert_syntax::{LineIndex, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
use smol_str::SmolStr;

use crate::error::LowerError;
use crate::tree::{CompilationUnitTree, ModifiersTree};

/// Transforms a concrete `CompilationUnit` node into an AST compilation
/// unit, preserving source provenance on every produced node.
///
/// # Errors
///
/// Returns [`LowerError`] when the tree violates the expected grammar-tag
/// shape; the error carries the offending tag.
pub fn build_compilation_unit(root: &SyntaxNode) -> Result<CompilationUnitTree, LowerError> {
    if root.kind() != SyntaxKind::CompilationUnit {
        return Err(LowerError::malformed(root.kind()));
    }
    let lower = Lower {
        line_index: LineIndex::of(root),
    };
    lower.compilation_unit(root)
}

/// Carries per-unit lowering state: just the line index of the tree text.
pub(crate) struct Lower {
    line_index: LineIndex,
}

impl Lower {
    pub(crate) fn line(&self, node: &SyntaxNode) -> u32 {
        self.line_index.line_of(node)
    }

    /// Lowers the `Modifiers` child of `owner`, or synthesises an empty
    /// modifier list anchored at `owner` when none is present.
    pub(crate) fn modifiers_of(&self, owner: &SyntaxNode) -> Result<ModifiersTree, LowerError> {
        match find_node(owner, SyntaxKind::Modifiers) {
            Some(node) => self.modifiers(&node),
            None => Ok(self.empty_modifiers(owner)),
        }
    }

    pub(crate) fn empty_modifiers(&self, owner: &SyntaxNode) -> ModifiersTree {
        ModifiersTree {
            syntax: owner.clone(),
            line: self.line(owner),
            modifiers: Vec::new(),
        }
    }

    /// Lowers a `Modifiers` node: keyword tokens map through the modifier
    /// table, annotations are dropped.
    fn modifiers(&self, node: &SyntaxNode) -> Result<ModifiersTree, LowerError> {
        let mut modifiers = Vec::new();
        for element in elements(node) {
            match element {
                SyntaxElement::Token(token) => {
                    modifiers.push(crate::tables::modifier_kind(token.kind())?);
                }
                SyntaxElement::Node(child) if child.kind() == SyntaxKind::Annotation => {}
                SyntaxElement::Node(child) => return Err(LowerError::malformed(child.kind())),
            }
        }
        Ok(ModifiersTree {
            syntax: node.clone(),
            line: self.line(node),
            modifiers,
        })
    }
}

/// Non-trivia child elements (nodes and tokens) in source order.
pub(crate) fn elements(node: &SyntaxNode) -> impl Iterator<Item = SyntaxElement> + '_ {
    node.children_with_tokens()
        .filter(|element| !element.kind().is_trivia())
}

/// First direct child node of the given kind.
pub(crate) fn find_node(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxNode> {
    node.children().find(|child| child.kind() == kind)
}

/// First direct child token of the given kind.
pub(crate) fn find_token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(rowan::NodeOrToken::into_token)
        .find(|token| token.kind() == kind)
}

/// Whether a direct child token of the given kind is present.
pub(crate) fn has_token(node: &SyntaxNode, kind: SyntaxKind) -> bool {
    find_token(node, kind).is_some()
}

/// First direct child node, or `MalformedAst` at the parent's tag.
pub(crate) fn first_node(node: &SyntaxNode) -> Result<SyntaxNode, LowerError> {
    node.first_child()
        .ok_or_else(|| LowerError::malformed(node.kind()))
}

/// Count of direct `Dim` children.
pub(crate) fn dim_count(node: &SyntaxNode) -> usize {
    node.children()
        .filter(|child| child.kind() == SyntaxKind::Dim)
        .count()
}

/// The token's text as a small string.
pub(crate) fn token_text(token: &SyntaxToken) -> SmolStr {
    SmolStr::new(token.text())
}
