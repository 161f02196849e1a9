//! Compact textual rendering of an abstract syntax tree.
//!
//! One node per line, children indented two spaces, labels carrying the
//! dispatch-relevant detail (kind, operator, name, literal text). The
//! renderer is itself a [`TreeVisitor`], so its output order is exactly the
//! framework's traversal order.

use std::fmt::Write as _;

use crate::tree::{
    ArrayAccessTree, ArrayTypeTree, AssertStatementTree, AssignmentExpressionTree,
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
use crate::visitor::{self, TreeVisitor};

/// Renders a whole compilation unit.
#[must_use]
pub fn dump_compilation_unit(tree: &CompilationUnitTree) -> String {
    let mut dump = AstDump::default();
    dump.visit_compilation_unit(tree);
    dump.buf
}

/// Renders any subtree.
#[must_use]
pub fn dump(tree: &Tree) -> String {
    let mut dump = AstDump::default();
    tree.accept(&mut dump);
    dump.buf
}

#[derive(Debug, Default)]
struct AstDump {
    buf: String,
    depth: usize,
}

impl AstDump {
    fn line(&mut self, label: &str) {
        for _ in 0..self.depth {
            self.buf.push_str("  ");
        }
        self.buf.push_str(label);
        self.buf.push('\n');
    }

    fn nested(&mut self, walk: impl FnOnce(&mut Self)) {
        self.depth += 1;
        walk(self);
        self.depth -= 1;
    }
}

impl TreeVisitor for AstDump {
    fn visit_compilation_unit(&mut self, tree: &CompilationUnitTree) {
        self.line("CompilationUnit");
        self.nested(|v| visitor::walk_compilation_unit(v, tree));
    }

    fn visit_class(&mut self, tree: &ClassTree) {
        let mut label = format!("{:?}", tree.declared_kind());
        if !tree.simple_name().is_empty() {
            let _ = write!(label, " `{}`", tree.simple_name());
        }
        self.line(&label);
        self.nested(|v| visitor::walk_class(v, tree));
    }

    fn visit_method(&mut self, tree: &MethodTree) {
        let label = if tree.is_constructor() {
            format!("Method `{}` constructor", tree.simple_name())
        } else {
            format!("Method `{}`", tree.simple_name())
        };
        self.line(&label);
        self.nested(|v| visitor::walk_method(v, tree));
    }

    fn visit_variable(&mut self, tree: &VariableTree) {
        let label = format!("{:?} `{}`", tree.kind, tree.simple_name());
        self.line(&label);
        self.nested(|v| visitor::walk_variable(v, tree));
    }

    fn visit_block(&mut self, tree: &BlockTree) {
        let label = format!("{:?}", tree.kind);
        self.line(&label);
        self.nested(|v| visitor::walk_block(v, tree));
    }

    fn visit_empty_statement(&mut self, _tree: &EmptyStatementTree) {
        self.line("EmptyStatement");
    }

    fn visit_labeled_statement(&mut self, tree: &LabeledStatementTree) {
        let label = format!("LabeledStatement `{}`", tree.label());
        self.line(&label);
        self.nested(|v| visitor::walk_labeled_statement(v, tree));
    }

    fn visit_expression_statement(&mut self, tree: &ExpressionStatementTree) {
        self.line("ExpressionStatement");
        self.nested(|v| visitor::walk_expression_statement(v, tree));
    }

    fn visit_if_statement(&mut self, tree: &IfStatementTree) {
        self.line("IfStatement");
        self.nested(|v| visitor::walk_if_statement(v, tree));
    }

    fn visit_assert_statement(&mut self, tree: &AssertStatementTree) {
        self.line("AssertStatement");
        self.nested(|v| visitor::walk_assert_statement(v, tree));
    }

    fn visit_switch_statement(&mut self, tree: &SwitchStatementTree) {
        self.line("SwitchStatement");
        self.nested(|v| visitor::walk_switch_statement(v, tree));
    }

    fn visit_case_group(&mut self, tree: &CaseGroupTree) {
        self.line("CaseGroup");
        self.nested(|v| visitor::walk_case_group(v, tree));
    }

    fn visit_case_label(&mut self, tree: &CaseLabelTree) {
        let label = if tree.is_default() {
            "CaseLabel default"
        } else {
            "CaseLabel"
        };
        self.line(label);
        self.nested(|v| visitor::walk_case_label(v, tree));
    }

    fn visit_while_statement(&mut self, tree: &WhileStatementTree) {
        self.line("WhileStatement");
        self.nested(|v| visitor::walk_while_statement(v, tree));
    }

    fn visit_do_while_statement(&mut self, tree: &DoWhileStatementTree) {
        self.line("DoStatement");
        self.nested(|v| visitor::walk_do_while_statement(v, tree));
    }

    fn visit_for_statement(&mut self, tree: &ForStatementTree) {
        self.line("ForStatement");
        self.nested(|v| visitor::walk_for_statement(v, tree));
    }

    fn visit_for_each_statement(&mut self, tree: &ForEachStatementTree) {
        self.line("EnhancedForStatement");
        self.nested(|v| visitor::walk_for_each_statement(v, tree));
    }

    fn visit_break_statement(&mut self, tree: &BreakStatementTree) {
        match tree.label() {
            Some(label) => {
                let text = format!("BreakStatement `{label}`");
                self.line(&text);
            }
            None => self.line("BreakStatement"),
        }
    }

    fn visit_continue_statement(&mut self, tree: &ContinueStatementTree) {
        match tree.label() {
            Some(label) => {
                let text = format!("ContinueStatement `{label}`");
                self.line(&text);
            }
            None => self.line("ContinueStatement"),
        }
    }

    fn visit_return_statement(&mut self, tree: &ReturnStatementTree) {
        self.line("ReturnStatement");
        self.nested(|v| visitor::walk_return_statement(v, tree));
    }

    fn visit_throw_statement(&mut self, tree: &ThrowStatementTree) {
        self.line("ThrowStatement");
        self.nested(|v| visitor::walk_throw_statement(v, tree));
    }

    fn visit_synchronized_statement(&mut self, tree: &SynchronizedStatementTree) {
        self.line("SynchronizedStatement");
        self.nested(|v| visitor::walk_synchronized_statement(v, tree));
    }

    fn visit_try_statement(&mut self, tree: &TryStatementTree) {
        self.line("TryStatement");
        self.nested(|v| visitor::walk_try_statement(v, tree));
    }

    fn visit_catch(&mut self, tree: &CatchTree) {
        self.line("Catch");
        self.nested(|v| visitor::walk_catch(v, tree));
    }

    fn visit_identifier(&mut self, tree: &IdentifierTree) {
        let label = format!("Identifier `{}`", tree.name());
        self.line(&label);
    }

    fn visit_literal(&mut self, tree: &LiteralTree) {
        let label = format!("{:?} `{}`", tree.literal_kind(), tree.value());
        self.line(&label);
    }

    fn visit_parenthesized(&mut self, tree: &ParenthesizedTree) {
        self.line("Parenthesized");
        self.nested(|v| visitor::walk_parenthesized(v, tree));
    }

    fn visit_conditional_expression(&mut self, tree: &ConditionalExpressionTree) {
        self.line("ConditionalExpression");
        self.nested(|v| visitor::walk_conditional_expression(v, tree));
    }

    fn visit_instance_of(&mut self, tree: &InstanceOfTree) {
        self.line("InstanceOf");
        self.nested(|v| visitor::walk_instance_of(v, tree));
    }

    fn visit_type_cast(&mut self, tree: &TypeCastTree) {
        self.line("TypeCast");
        self.nested(|v| visitor::walk_type_cast(v, tree));
    }

    fn visit_method_invocation(&mut self, tree: &MethodInvocationTree) {
        self.line("MethodInvocation");
        self.nested(|v| visitor::walk_method_invocation(v, tree));
    }

    fn visit_new_array(&mut self, tree: &NewArrayTree) {
        self.line("NewArray");
        self.nested(|v| visitor::walk_new_array(v, tree));
    }

    fn visit_new_class(&mut self, tree: &NewClassTree) {
        self.line("NewClass");
        self.nested(|v| visitor::walk_new_class(v, tree));
    }

    fn visit_member_select(&mut self, tree: &MemberSelectTree) {
        let label = format!("MemberSelect `{}`", tree.identifier());
        self.line(&label);
        self.nested(|v| visitor::walk_member_select(v, tree));
    }

    fn visit_array_access(&mut self, tree: &ArrayAccessTree) {
        self.line("ArrayAccess");
        self.nested(|v| visitor::walk_array_access(v, tree));
    }

    fn visit_binary_expression(&mut self, tree: &BinaryExpressionTree) {
        let label = format!("Binary {:?}", tree.op());
        self.line(&label);
        self.nested(|v| visitor::walk_binary_expression(v, tree));
    }

    fn visit_unary_expression(&mut self, tree: &UnaryExpressionTree) {
        let label = format!("Unary {:?}", tree.op());
        self.line(&label);
        self.nested(|v| visitor::walk_unary_expression(v, tree));
    }

    fn visit_assignment_expression(&mut self, tree: &AssignmentExpressionTree) {
        let label = format!("Assignment {:?}", tree.op());
        self.line(&label);
        self.nested(|v| visitor::walk_assignment_expression(v, tree));
    }

    fn visit_primitive_type(&mut self, tree: &PrimitiveTypeTree) {
        let label = format!("PrimitiveType `{}`", tree.name());
        self.line(&label);
    }

    fn visit_array_type(&mut self, tree: &ArrayTypeTree) {
        self.line("ArrayType");
        self.nested(|v| tree.element_type().accept(v));
    }

    fn visit_wildcard(&mut self, tree: &WildcardTree) {
        self.line("Wildcard");
        if let Some(bound) = tree.bound() {
            self.nested(|v| bound.accept(v));
        }
    }

    fn visit_import(&mut self, tree: &ImportTree) {
        let label = if tree.is_static() {
            "Import static"
        } else {
            "Import"
        };
        self.line(label);
        self.nested(|v| tree.qualified_identifier().accept(v));
    }

    fn visit_modifiers(&mut self, tree: &ModifiersTree) {
        if tree.is_empty() {
            return;
        }
        let mut label = String::from("Modifiers");
        for modifier in tree.modifiers() {
            let _ = write!(label, " {modifier:?}");
        }
        self.line(&label);
    }
}
