//! Flags `switch` statements with no `default` case.

use javert_ast::visitor;
use javert_ast::{SwitchStatementTree, Tree, TreeVisitor};

use crate::context::{RuleKey, ScannerContext};
use crate::harness::FileScanner;

const MESSAGE: &str = "Add a default case to this switch.";

/// A switch without a default silently ignores unanticipated values.
#[derive(Debug, Default)]
pub struct SwitchWithoutDefault;

impl FileScanner for SwitchWithoutDefault {
    fn rule_key(&self) -> RuleKey {
        RuleKey::new("S131")
    }

    fn scan_file(&mut self, context: &ScannerContext<'_>) {
        let mut visitor = SwitchVisitor {
            context,
            rule: self.rule_key(),
        };
        visitor.visit_compilation_unit(context.tree());
    }
}

struct SwitchVisitor<'a, 'b> {
    context: &'a ScannerContext<'b>,
    rule: RuleKey,
}

impl TreeVisitor for SwitchVisitor<'_, '_> {
    fn visit_switch_statement(&mut self, tree: &SwitchStatementTree) {
        let has_default = tree.cases().iter().any(|case| match case {
            Tree::CaseGroup(group) => group
                .labels()
                .iter()
                .any(|label| matches!(label, Tree::CaseLabel(label) if label.is_default())),
            _ => false,
        });
        if !has_default {
            self.context.add_issue(tree, &self.rule, MESSAGE);
        }
        visitor::walk_switch_statement(self, tree);
    }
}
