//! Flags empty statement blocks.

use javert_ast::visitor;
use javert_ast::{BlockTree, MethodTree, Tree, TreeVisitor};

use crate::context::{RuleKey, ScannerContext};
use crate::harness::FileScanner;

const MESSAGE: &str = "Either remove or fill this block of code.";

/// Empty blocks in statement position usually mark forgotten code; empty
/// method bodies are intentional often enough to be exempt.
#[derive(Debug, Default)]
pub struct EmptyBlock;

impl FileScanner for EmptyBlock {
    fn rule_key(&self) -> RuleKey {
        RuleKey::new("S00108")
    }

    fn scan_file(&mut self, context: &ScannerContext<'_>) {
        let mut visitor = EmptyBlockVisitor {
            context,
            rule: self.rule_key(),
        };
        visitor.visit_compilation_unit(context.tree());
    }
}

struct EmptyBlockVisitor<'a, 'b> {
    context: &'a ScannerContext<'b>,
    rule: RuleKey,
}

impl TreeVisitor for EmptyBlockVisitor<'_, '_> {
    fn visit_method(&mut self, tree: &MethodTree) {
        // Descend past the method body block itself so it is never flagged.
        tree.modifiers().accept(self);
        if let Some(return_type) = tree.return_type() {
            return_type.accept(self);
        }
        for parameter in tree.parameters() {
            parameter.accept(self);
        }
        if let Some(Tree::Block(body)) = tree.body() {
            for statement in body.body() {
                statement.accept(self);
            }
        }
        for thrown in tree.throws() {
            thrown.accept(self);
        }
        if let Some(default_value) = tree.default_value() {
            default_value.accept(self);
        }
    }

    fn visit_block(&mut self, tree: &BlockTree) {
        if tree.body().is_empty() {
            self.context.add_issue(tree, &self.rule, MESSAGE);
        }
        visitor::walk_block(self, tree);
    }
}
