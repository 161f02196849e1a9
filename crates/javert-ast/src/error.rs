//! Error types for concrete-tree lowering.

use javert_syntax::SyntaxKind;
use thiserror::Error;

/// Failure while lowering a concrete syntax tree to an abstract one.
///
/// Both variants are fatal to the compilation unit being lowered: the
/// builder never recovers and never returns a partial tree. Neither is
/// reachable from a parser that respects the closed tag set; the paths
/// exist as assertions against out-of-contract input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LowerError {
    /// The concrete tree does not have the shape the grammar promises at
    /// the given tag.
    #[error("concrete tree shape does not match the grammar at {tag:?}")]
    MalformedAst {
        /// The tag of the offending concrete node or token.
        tag: SyntaxKind,
    },

    /// A punctuation token that does not belong to the requested operator
    /// category.
    #[error("{tag:?} is not an operator of the requested category")]
    UnknownOperator {
        /// The tag of the offending token.
        tag: SyntaxKind,
    },
}

impl LowerError {
    /// Shorthand for [`LowerError::MalformedAst`].
    #[must_use]
    pub fn malformed(tag: SyntaxKind) -> Self {
        Self::MalformedAst { tag }
    }

    /// Shorthand for [`LowerError::UnknownOperator`].
    #[must_use]
    pub fn unknown_operator(tag: SyntaxKind) -> Self {
        Self::UnknownOperator { tag }
    }
}
