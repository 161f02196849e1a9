//! Double-dispatch traversal over the abstract syntax tree.
//!
//! [`TreeVisitor`] exposes one method per AST category. Every default
//! implementation delegates to the matching `walk_*` function, which
//! recurses into each structural child in declaration order, so a visitor
//! that overrides nothing performs a full depth-first traversal. Custom
//! visitors override any subset and call the `walk_*` function (or the
//! super behaviour they replaced) to continue the descent.
//!
//! The auxiliary kindless shapes (primitive types, array types, wildcards,
//! imports, modifiers) have no-op defaults: their contents are not part of
//! the structural traversal.

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

/// A visitor over the abstract syntax tree.
///
/// Implementors override the categories they care about; unoverridden
/// categories descend into their children.
#[allow(unused_variables)]
pub trait TreeVisitor {
    /// Visits a compilation unit.
    fn visit_compilation_unit(&mut self, tree: &CompilationUnitTree) {
        walk_compilation_unit(self, tree);
    }

    /// Visits a class, interface, enum, or annotation-type declaration.
    fn visit_class(&mut self, tree: &ClassTree) {
        walk_class(self, tree);
    }

    /// Visits a method or constructor declaration.
    fn visit_method(&mut self, tree: &MethodTree) {
        walk_method(self, tree);
    }

    /// Visits a variable declaration.
    fn visit_variable(&mut self, tree: &VariableTree) {
        walk_variable(self, tree);
    }

    /// Visits a block or initializer.
    fn visit_block(&mut self, tree: &BlockTree) {
        walk_block(self, tree);
    }

    /// Visits an empty statement.
    fn visit_empty_statement(&mut self, tree: &EmptyStatementTree) {}

    /// Visits a labeled statement.
    fn visit_labeled_statement(&mut self, tree: &LabeledStatementTree) {
        walk_labeled_statement(self, tree);
    }

    /// Visits an expression statement.
    fn visit_expression_statement(&mut self, tree: &ExpressionStatementTree) {
        walk_expression_statement(self, tree);
    }

    /// Visits an `if` statement.
    fn visit_if_statement(&mut self, tree: &IfStatementTree) {
        walk_if_statement(self, tree);
    }

    /// Visits an `assert` statement.
    fn visit_assert_statement(&mut self, tree: &AssertStatementTree) {
        walk_assert_statement(self, tree);
    }

    /// Visits a `switch` statement.
    fn visit_switch_statement(&mut self, tree: &SwitchStatementTree) {
        walk_switch_statement(self, tree);
    }

    /// Visits a case group.
    fn visit_case_group(&mut self, tree: &CaseGroupTree) {
        walk_case_group(self, tree);
    }

    /// Visits a case label.
    fn visit_case_label(&mut self, tree: &CaseLabelTree) {
        walk_case_label(self, tree);
    }

    /// Visits a `while` statement.
    fn visit_while_statement(&mut self, tree: &WhileStatementTree) {
        walk_while_statement(self, tree);
    }

    /// Visits a `do` statement.
    fn visit_do_while_statement(&mut self, tree: &DoWhileStatementTree) {
        walk_do_while_statement(self, tree);
    }

    /// Visits a classical `for` statement.
    fn visit_for_statement(&mut self, tree: &ForStatementTree) {
        walk_for_statement(self, tree);
    }

    /// Visits an enhanced `for` statement.
    fn visit_for_each_statement(&mut self, tree: &ForEachStatementTree) {
        walk_for_each_statement(self, tree);
    }

    /// Visits a `break` statement.
    fn visit_break_statement(&mut self, tree: &BreakStatementTree) {}

    /// Visits a `continue` statement.
    fn visit_continue_statement(&mut self, tree: &ContinueStatementTree) {}

    /// Visits a `return` statement.
    fn visit_return_statement(&mut self, tree: &ReturnStatementTree) {
        walk_return_statement(self, tree);
    }

    /// Visits a `throw` statement.
    fn visit_throw_statement(&mut self, tree: &ThrowStatementTree) {
        walk_throw_statement(self, tree);
    }

    /// Visits a `synchronized` statement.
    fn visit_synchronized_statement(&mut self, tree: &SynchronizedStatementTree) {
        walk_synchronized_statement(self, tree);
    }

    /// Visits a `try` statement.
    fn visit_try_statement(&mut self, tree: &TryStatementTree) {
        walk_try_statement(self, tree);
    }

    /// Visits a catch clause.
    fn visit_catch(&mut self, tree: &CatchTree) {
        walk_catch(self, tree);
    }

    /// Visits an identifier.
    fn visit_identifier(&mut self, tree: &IdentifierTree) {}

    /// Visits a literal.
    fn visit_literal(&mut self, tree: &LiteralTree) {}

    /// Visits a parenthesized expression.
    fn visit_parenthesized(&mut self, tree: &ParenthesizedTree) {
        walk_parenthesized(self, tree);
    }

    /// Visits a conditional expression.
    fn visit_conditional_expression(&mut self, tree: &ConditionalExpressionTree) {
        walk_conditional_expression(self, tree);
    }

    /// Visits an `instanceof` expression.
    fn visit_instance_of(&mut self, tree: &InstanceOfTree) {
        walk_instance_of(self, tree);
    }

    /// Visits a type cast.
    fn visit_type_cast(&mut self, tree: &TypeCastTree) {
        walk_type_cast(self, tree);
    }

    /// Visits a method invocation.
    fn visit_method_invocation(&mut self, tree: &MethodInvocationTree) {
        walk_method_invocation(self, tree);
    }

    /// Visits an array creation.
    fn visit_new_array(&mut self, tree: &NewArrayTree) {
        walk_new_array(self, tree);
    }

    /// Visits a class instance creation.
    fn visit_new_class(&mut self, tree: &NewClassTree) {
        walk_new_class(self, tree);
    }

    /// Visits a member select.
    fn visit_member_select(&mut self, tree: &MemberSelectTree) {
        walk_member_select(self, tree);
    }

    /// Visits an array access.
    fn visit_array_access(&mut self, tree: &ArrayAccessTree) {
        walk_array_access(self, tree);
    }

    /// Visits a binary expression.
    fn visit_binary_expression(&mut self, tree: &BinaryExpressionTree) {
        walk_binary_expression(self, tree);
    }

    /// Visits a unary expression.
    fn visit_unary_expression(&mut self, tree: &UnaryExpressionTree) {
        walk_unary_expression(self, tree);
    }

    /// Visits an assignment expression.
    fn visit_assignment_expression(&mut self, tree: &AssignmentExpressionTree) {
        walk_assignment_expression(self, tree);
    }

    /// Visits a primitive type. No-op by default.
    fn visit_primitive_type(&mut self, tree: &PrimitiveTypeTree) {}

    /// Visits an array type. No-op by default.
    fn visit_array_type(&mut self, tree: &ArrayTypeTree) {}

    /// Visits a wildcard type. No-op by default.
    fn visit_wildcard(&mut self, tree: &WildcardTree) {}

    /// Visits an import declaration. No-op by default.
    fn visit_import(&mut self, tree: &ImportTree) {}

    /// Visits a modifier list. No-op by default.
    fn visit_modifiers(&mut self, tree: &ModifiersTree) {}
}

/// The default visitor: a plain depth-first descent with no overrides.
#[derive(Debug, Default, Clone, Copy)]
pub struct BaseVisitor;

impl TreeVisitor for BaseVisitor {}

fn walk_opt<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: Option<&Tree>) {
    if let Some(tree) = tree {
        tree.accept(visitor);
    }
}

fn walk_all<V: TreeVisitor + ?Sized>(visitor: &mut V, trees: &[Tree]) {
    for tree in trees {
        tree.accept(visitor);
    }
}

/// Descends into package name, imports, and type declarations.
pub fn walk_compilation_unit<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: &CompilationUnitTree) {
    walk_opt(visitor, tree.package_name());
    for import in tree.imports() {
        import.accept(visitor);
    }
    walk_all(visitor, tree.types());
}

/// Descends into modifiers, super class, super interfaces, and members.
pub fn walk_class<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: &ClassTree) {
    tree.modifiers().accept(visitor);
    walk_opt(visitor, tree.super_class());
    walk_all(visitor, tree.super_interfaces());
    walk_all(visitor, tree.members());
}

/// Descends into modifiers, return type, parameters, body, throws, and
/// default value.
pub fn walk_method<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: &MethodTree) {
    tree.modifiers().accept(visitor);
    walk_opt(visitor, tree.return_type());
    walk_all(visitor, tree.parameters());
    walk_opt(visitor, tree.body());
    walk_all(visitor, tree.throws());
    walk_opt(visitor, tree.default_value());
}

/// Descends into modifiers, type, and initializer.
pub fn walk_variable<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: &VariableTree) {
    tree.modifiers().accept(visitor);
    tree.ty().accept(visitor);
    walk_opt(visitor, tree.initializer());
}

/// Descends into the statements.
pub fn walk_block<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: &BlockTree) {
    walk_all(visitor, tree.body());
}

/// Descends into the labeled statement.
pub fn walk_labeled_statement<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: &LabeledStatementTree) {
    tree.statement().accept(visitor);
}

/// Descends into the expression.
pub fn walk_expression_statement<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    tree: &ExpressionStatementTree,
) {
    tree.expression().accept(visitor);
}

/// Descends into condition, then branch, and else branch.
pub fn walk_if_statement<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: &IfStatementTree) {
    tree.condition().accept(visitor);
    tree.then_statement().accept(visitor);
    walk_opt(visitor, tree.else_statement());
}

/// Descends into condition and detail.
pub fn walk_assert_statement<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: &AssertStatementTree) {
    tree.condition().accept(visitor);
    walk_opt(visitor, tree.detail());
}

/// Descends into the selector expression and the case groups.
pub fn walk_switch_statement<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: &SwitchStatementTree) {
    tree.expression().accept(visitor);
    walk_all(visitor, tree.cases());
}

/// Descends into labels and body.
pub fn walk_case_group<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: &CaseGroupTree) {
    walk_all(visitor, tree.labels());
    walk_all(visitor, tree.body());
}

/// Descends into the case expression.
pub fn walk_case_label<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: &CaseLabelTree) {
    walk_opt(visitor, tree.expression());
}

/// Descends into condition and body.
pub fn walk_while_statement<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: &WhileStatementTree) {
    tree.condition().accept(visitor);
    tree.statement().accept(visitor);
}

/// Descends into body and condition.
pub fn walk_do_while_statement<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    tree: &DoWhileStatementTree,
) {
    tree.statement().accept(visitor);
    tree.condition().accept(visitor);
}

/// Descends into initializer, condition, update, and body.
pub fn walk_for_statement<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: &ForStatementTree) {
    walk_all(visitor, tree.initializer());
    walk_opt(visitor, tree.condition());
    walk_all(visitor, tree.update());
    tree.statement().accept(visitor);
}

/// Descends into variable, expression, and body.
pub fn walk_for_each_statement<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    tree: &ForEachStatementTree,
) {
    tree.variable().accept(visitor);
    tree.expression().accept(visitor);
    tree.statement().accept(visitor);
}

/// Descends into the returned expression.
pub fn walk_return_statement<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: &ReturnStatementTree) {
    walk_opt(visitor, tree.expression());
}

/// Descends into the thrown expression.
pub fn walk_throw_statement<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: &ThrowStatementTree) {
    tree.expression().accept(visitor);
}

/// Descends into the monitor expression and the block.
pub fn walk_synchronized_statement<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    tree: &SynchronizedStatementTree,
) {
    tree.expression().accept(visitor);
    tree.block().accept(visitor);
}

/// Descends into resources, block, catches, and finally.
pub fn walk_try_statement<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: &TryStatementTree) {
    walk_all(visitor, tree.resources());
    tree.block().accept(visitor);
    walk_all(visitor, tree.catches());
    walk_opt(visitor, tree.finally_block());
}

/// Descends into parameter and block.
pub fn walk_catch<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: &CatchTree) {
    tree.parameter().accept(visitor);
    tree.block().accept(visitor);
}

/// Descends into the wrapped expression.
pub fn walk_parenthesized<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: &ParenthesizedTree) {
    tree.expression().accept(visitor);
}

/// Descends into condition and both branches.
pub fn walk_conditional_expression<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    tree: &ConditionalExpressionTree,
) {
    tree.condition().accept(visitor);
    tree.true_expression().accept(visitor);
    tree.false_expression().accept(visitor);
}

/// Descends into expression and type.
pub fn walk_instance_of<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: &InstanceOfTree) {
    tree.expression().accept(visitor);
    tree.ty().accept(visitor);
}

/// Descends into type and expression.
pub fn walk_type_cast<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: &TypeCastTree) {
    tree.ty().accept(visitor);
    tree.expression().accept(visitor);
}

/// Descends into method select and arguments.
pub fn walk_method_invocation<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    tree: &MethodInvocationTree,
) {
    tree.method_select().accept(visitor);
    walk_all(visitor, tree.arguments());
}

/// Descends into element type, dimensions, and initializers.
pub fn walk_new_array<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: &NewArrayTree) {
    walk_opt(visitor, tree.ty());
    walk_all(visitor, tree.dimensions());
    walk_all(visitor, tree.initializers());
}

/// Descends into enclosing expression, identifier, arguments, and body.
pub fn walk_new_class<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: &NewClassTree) {
    walk_opt(visitor, tree.enclosing_expression());
    tree.identifier().accept(visitor);
    walk_all(visitor, tree.arguments());
    walk_opt(visitor, tree.class_body());
}

/// Descends into the qualifier expression.
pub fn walk_member_select<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: &MemberSelectTree) {
    tree.expression().accept(visitor);
}

/// Descends into the accessed expression and the index.
pub fn walk_array_access<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: &ArrayAccessTree) {
    tree.expression().accept(visitor);
    tree.index().accept(visitor);
}

/// Descends into both operands.
pub fn walk_binary_expression<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    tree: &BinaryExpressionTree,
) {
    tree.left_operand().accept(visitor);
    tree.right_operand().accept(visitor);
}

/// Descends into the operand.
pub fn walk_unary_expression<V: TreeVisitor + ?Sized>(visitor: &mut V, tree: &UnaryExpressionTree) {
    tree.expression().accept(visitor);
}

/// Descends into variable and value.
pub fn walk_assignment_expression<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    tree: &AssignmentExpressionTree,
) {
    tree.variable().accept(visitor);
    tree.expression().accept(visitor);
}
