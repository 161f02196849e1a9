//! Mapping from text offsets to 1-based line numbers.

use text_size::TextSize;

use crate::syntax::SyntaxNode;

/// Precomputed newline positions for a fixed text.
///
/// Built once per tree; lookups are binary searches over the line starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Offset of the first character of each line. `line_starts[0]` is 0.
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    /// Builds an index over the given text.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        for (pos, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::from(pos as u32 + 1));
            }
        }
        Self { line_starts }
    }

    /// Builds an index over the full text of a syntax tree.
    #[must_use]
    pub fn of(root: &SyntaxNode) -> Self {
        Self::new(&root.text().to_string())
    }

    /// Returns the 1-based line containing the given offset.
    #[must_use]
    pub fn line(&self, offset: TextSize) -> u32 {
        let lines_before = self.line_starts.partition_point(|start| *start <= offset);
        lines_before as u32
    }

    /// Returns the 1-based line on which the given node starts.
    #[must_use]
    pub fn line_of(&self, node: &SyntaxNode) -> u32 {
        self.line(node.text_range().start())
    }
}
