//! Flags `if` conditions that are literally `true` or `false`.

use javert_ast::visitor;
use javert_ast::{IfStatementTree, Tree, TreeVisitor};

use crate::context::{RuleKey, ScannerContext};
use crate::harness::FileScanner;

const MESSAGE: &str = "Remove this \"if\" statement; its condition is always the same.";

/// `if (true)` and `if (false)` conditions, however parenthesized, make one
/// branch unconditional and the other dead.
#[derive(Debug, Default)]
pub struct IfConditionAlwaysTrueOrFalse;

impl FileScanner for IfConditionAlwaysTrueOrFalse {
    fn rule_key(&self) -> RuleKey {
        RuleKey::new("S1145")
    }

    fn scan_file(&mut self, context: &ScannerContext<'_>) {
        let mut visitor = IfConditionVisitor {
            context,
            rule: self.rule_key(),
        };
        visitor.visit_compilation_unit(context.tree());
    }
}

struct IfConditionVisitor<'a, 'b> {
    context: &'a ScannerContext<'b>,
    rule: RuleKey,
}

impl TreeVisitor for IfConditionVisitor<'_, '_> {
    fn visit_if_statement(&mut self, tree: &IfStatementTree) {
        if strip_parentheses(tree.condition()).is(javert_ast::Kind::BooleanLiteral) {
            self.context.add_issue(tree, &self.rule, MESSAGE);
        }
        visitor::walk_if_statement(self, tree);
    }
}

fn strip_parentheses(tree: &Tree) -> &Tree {
    match tree {
        Tree::Parenthesized(inner) => strip_parentheses(inner.expression()),
        _ => tree,
    }
}
