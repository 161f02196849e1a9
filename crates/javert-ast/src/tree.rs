//! The typed abstract syntax tree.
//!
//! The AST is a closed sum: one [`Tree`] variant per syntactic shape, each
//! carrying a payload struct with the structural children of that shape.
//! Every node keeps a back-reference to its originating concrete-syntax
//! node (for token text and position) and the 1-based line of its first
//! token, stamped at build time.
//!
//! Nodes are immutable after the builder returns: fields are only readable
//! through accessors, children are owned values, and lists are snapshot
//! copies taken during lowering.

use javert_syntax::SyntaxNode;
use smol_str::SmolStr;

use crate::kind::{Kind, Modifier};
use crate::visitor::TreeVisitor;

/// Common provenance surface of every AST node.
///
/// All accessors return stored values verbatim; the line is stamped at
/// build time from the builder's line index.
pub trait AstNode {
    /// Returns the originating concrete-syntax node.
    fn syntax(&self) -> &SyntaxNode;

    /// Returns the 1-based source line of the node's first token.
    fn line(&self) -> u32;
}

macro_rules! impl_tree_node {
    ($($payload:ident),* $(,)?) => {$(
        impl AstNode for $payload {
            fn syntax(&self) -> &SyntaxNode {
                &self.syntax
            }

            fn line(&self) -> u32 {
                self.line
            }
        }
    )*};
}

// ---------------------------------------------------------------------------
// Declarations
// ---------------------------------------------------------------------------

/// A whole source file: package, imports, top-level type declarations.
#[derive(Debug, Clone)]
pub struct CompilationUnitTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) package_name: Option<Box<Tree>>,
    pub(crate) imports: Vec<ImportTree>,
    pub(crate) types: Vec<Tree>,
}

impl CompilationUnitTree {
    /// The package name as a qualified-identifier expression, if declared.
    #[must_use]
    pub fn package_name(&self) -> Option<&Tree> {
        self.package_name.as_deref()
    }

    /// The import declarations, in source order.
    #[must_use]
    pub fn imports(&self) -> &[ImportTree] {
        &self.imports
    }

    /// The top-level type declarations, in source order.
    #[must_use]
    pub fn types(&self) -> &[Tree] {
        &self.types
    }
}

/// A single import declaration.
///
/// Imports are auxiliary shapes: they report no [`Kind`] and are skipped by
/// `is` predicates.
#[derive(Debug, Clone)]
pub struct ImportTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) is_static: bool,
    pub(crate) qualified_identifier: Box<Tree>,
}

impl ImportTree {
    /// Whether the import carries the `static` keyword.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// The imported qualified identifier.
    #[must_use]
    pub fn qualified_identifier(&self) -> &Tree {
        &self.qualified_identifier
    }

    /// Double-dispatch entry point.
    pub fn accept<V: TreeVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_import(self);
    }

    /// Imports carry no kind.
    #[must_use]
    pub fn kind(&self) -> Option<Kind> {
        None
    }

    /// Always false; imports carry no kind.
    #[must_use]
    pub fn is(&self, _kind: Kind) -> bool {
        false
    }
}

/// A class, interface, enum, or annotation-type declaration.
#[derive(Debug, Clone)]
pub struct ClassTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) kind: Kind,
    pub(crate) modifiers: ModifiersTree,
    pub(crate) simple_name: SmolStr,
    pub(crate) super_class: Option<Box<Tree>>,
    pub(crate) super_interfaces: Vec<Tree>,
    pub(crate) members: Vec<Tree>,
}

impl ClassTree {
    /// One of `Class`, `Interface`, `Enum`, `AnnotationType`.
    #[must_use]
    pub fn declared_kind(&self) -> Kind {
        self.kind
    }

    /// The declaration modifiers.
    #[must_use]
    pub fn modifiers(&self) -> &ModifiersTree {
        &self.modifiers
    }

    /// The simple name; empty for anonymous class bodies.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// The extended class type, if any.
    #[must_use]
    pub fn super_class(&self) -> Option<&Tree> {
        self.super_class.as_deref()
    }

    /// The implemented (or, for interfaces, extended) interface types.
    #[must_use]
    pub fn super_interfaces(&self) -> &[Tree] {
        &self.super_interfaces
    }

    /// The member declarations, in source order.
    #[must_use]
    pub fn members(&self) -> &[Tree] {
        &self.members
    }
}

/// A method or constructor declaration.
#[derive(Debug, Clone)]
pub struct MethodTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) modifiers: ModifiersTree,
    pub(crate) return_type: Option<Box<Tree>>,
    pub(crate) simple_name: SmolStr,
    pub(crate) parameters: Vec<Tree>,
    pub(crate) body: Option<Box<Tree>>,
    pub(crate) throws: Vec<Tree>,
    pub(crate) default_value: Option<Box<Tree>>,
}

impl MethodTree {
    /// The declaration modifiers.
    #[must_use]
    pub fn modifiers(&self) -> &ModifiersTree {
        &self.modifiers
    }

    /// The return type; absent exactly for constructors.
    #[must_use]
    pub fn return_type(&self) -> Option<&Tree> {
        self.return_type.as_deref()
    }

    /// The simple name.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// The formal parameters, each a `Variable`.
    #[must_use]
    pub fn parameters(&self) -> &[Tree] {
        &self.parameters
    }

    /// The body block; absent for abstract and interface methods.
    #[must_use]
    pub fn body(&self) -> Option<&Tree> {
        self.body.as_deref()
    }

    /// The declared thrown types.
    #[must_use]
    pub fn throws(&self) -> &[Tree] {
        &self.throws
    }

    /// The annotation-element default value, if any.
    #[must_use]
    pub fn default_value(&self) -> Option<&Tree> {
        self.default_value.as_deref()
    }

    /// Whether this declaration is a constructor.
    #[must_use]
    pub fn is_constructor(&self) -> bool {
        self.return_type.is_none()
    }
}

/// A variable: field, local, parameter, resource, or enum constant.
#[derive(Debug, Clone)]
pub struct VariableTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) kind: Kind,
    pub(crate) modifiers: ModifiersTree,
    pub(crate) ty: Box<Tree>,
    pub(crate) simple_name: SmolStr,
    pub(crate) initializer: Option<Box<Tree>>,
}

impl VariableTree {
    /// The declaration modifiers.
    #[must_use]
    pub fn modifiers(&self) -> &ModifiersTree {
        &self.modifiers
    }

    /// The declared type.
    #[must_use]
    pub fn ty(&self) -> &Tree {
        &self.ty
    }

    /// The simple name.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// The initializer expression, if any. For enum constants this is the
    /// synthesised `NewClass` wrapping the constant's arguments and body.
    #[must_use]
    pub fn initializer(&self) -> Option<&Tree> {
        self.initializer.as_deref()
    }
}

/// A statement block, instance initializer, or static initializer.
#[derive(Debug, Clone)]
pub struct BlockTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) kind: Kind,
    pub(crate) body: Vec<Tree>,
}

impl BlockTree {
    /// The statements, in source order.
    #[must_use]
    pub fn body(&self) -> &[Tree] {
        &self.body
    }
}

/// The modifier list of a declaration.
///
/// Modifiers are auxiliary shapes: they report no [`Kind`] and are skipped
/// by `is` predicates. An absent modifier list is represented by an empty
/// one whose back-reference is the owning declaration.
#[derive(Debug, Clone)]
pub struct ModifiersTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) modifiers: Vec<Modifier>,
}

impl ModifiersTree {
    /// The modifier keywords, in source order.
    #[must_use]
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Whether no modifiers are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    /// Whether the given modifier is present.
    #[must_use]
    pub fn has(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// Double-dispatch entry point.
    pub fn accept<V: TreeVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_modifiers(self);
    }

    /// Modifier lists carry no kind.
    #[must_use]
    pub fn kind(&self) -> Option<Kind> {
        None
    }

    /// Always false; modifier lists carry no kind.
    #[must_use]
    pub fn is(&self, _kind: Kind) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

/// `;`
#[derive(Debug, Clone)]
pub struct EmptyStatementTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
}

/// `label: statement`
#[derive(Debug, Clone)]
pub struct LabeledStatementTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) label: SmolStr,
    pub(crate) statement: Box<Tree>,
}

impl LabeledStatementTree {
    /// The label name.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The labeled statement.
    #[must_use]
    pub fn statement(&self) -> &Tree {
        &self.statement
    }
}

/// An expression in statement position.
#[derive(Debug, Clone)]
pub struct ExpressionStatementTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) expression: Box<Tree>,
}

impl ExpressionStatementTree {
    /// The wrapped expression.
    #[must_use]
    pub fn expression(&self) -> &Tree {
        &self.expression
    }
}

/// `if (condition) then else other`
#[derive(Debug, Clone)]
pub struct IfStatementTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) condition: Box<Tree>,
    pub(crate) then_statement: Box<Tree>,
    pub(crate) else_statement: Option<Box<Tree>>,
}

impl IfStatementTree {
    /// The condition expression.
    #[must_use]
    pub fn condition(&self) -> &Tree {
        &self.condition
    }

    /// The then branch.
    #[must_use]
    pub fn then_statement(&self) -> &Tree {
        &self.then_statement
    }

    /// The else branch, if any.
    #[must_use]
    pub fn else_statement(&self) -> Option<&Tree> {
        self.else_statement.as_deref()
    }
}

/// `assert condition : detail`
#[derive(Debug, Clone)]
pub struct AssertStatementTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) condition: Box<Tree>,
    pub(crate) detail: Option<Box<Tree>>,
}

impl AssertStatementTree {
    /// The asserted condition.
    #[must_use]
    pub fn condition(&self) -> &Tree {
        &self.condition
    }

    /// The detail expression after `:`, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&Tree> {
        self.detail.as_deref()
    }
}

/// `switch (expression) { cases }`
#[derive(Debug, Clone)]
pub struct SwitchStatementTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) expression: Box<Tree>,
    pub(crate) cases: Vec<Tree>,
}

impl SwitchStatementTree {
    /// The selector expression.
    #[must_use]
    pub fn expression(&self) -> &Tree {
        &self.expression
    }

    /// The case groups, in source order.
    #[must_use]
    pub fn cases(&self) -> &[Tree] {
        &self.cases
    }
}

/// One or more case labels sharing a statement list.
#[derive(Debug, Clone)]
pub struct CaseGroupTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) labels: Vec<Tree>,
    pub(crate) body: Vec<Tree>,
}

impl CaseGroupTree {
    /// The labels of the group; never empty.
    #[must_use]
    pub fn labels(&self) -> &[Tree] {
        &self.labels
    }

    /// The statements of the group; may be empty for trailing labels.
    #[must_use]
    pub fn body(&self) -> &[Tree] {
        &self.body
    }
}

/// `case expression:` or `default:`
#[derive(Debug, Clone)]
pub struct CaseLabelTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) expression: Option<Box<Tree>>,
}

impl CaseLabelTree {
    /// The case expression; absent for the default label.
    #[must_use]
    pub fn expression(&self) -> Option<&Tree> {
        self.expression.as_deref()
    }

    /// Whether this is the `default` label.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.expression.is_none()
    }
}

/// `while (condition) statement`
#[derive(Debug, Clone)]
pub struct WhileStatementTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) condition: Box<Tree>,
    pub(crate) statement: Box<Tree>,
}

impl WhileStatementTree {
    /// The loop condition.
    #[must_use]
    pub fn condition(&self) -> &Tree {
        &self.condition
    }

    /// The loop body.
    #[must_use]
    pub fn statement(&self) -> &Tree {
        &self.statement
    }
}

/// `do statement while (condition);`
#[derive(Debug, Clone)]
pub struct DoWhileStatementTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) statement: Box<Tree>,
    pub(crate) condition: Box<Tree>,
}

impl DoWhileStatementTree {
    /// The loop body.
    #[must_use]
    pub fn statement(&self) -> &Tree {
        &self.statement
    }

    /// The loop condition.
    #[must_use]
    pub fn condition(&self) -> &Tree {
        &self.condition
    }
}

/// A classical `for` statement.
#[derive(Debug, Clone)]
pub struct ForStatementTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) initializer: Vec<Tree>,
    pub(crate) condition: Option<Box<Tree>>,
    pub(crate) update: Vec<Tree>,
    pub(crate) statement: Box<Tree>,
}

impl ForStatementTree {
    /// The initializer: variables or expression statements.
    #[must_use]
    pub fn initializer(&self) -> &[Tree] {
        &self.initializer
    }

    /// The loop condition, if any.
    #[must_use]
    pub fn condition(&self) -> Option<&Tree> {
        self.condition.as_deref()
    }

    /// The update expression statements.
    #[must_use]
    pub fn update(&self) -> &[Tree] {
        &self.update
    }

    /// The loop body.
    #[must_use]
    pub fn statement(&self) -> &Tree {
        &self.statement
    }
}

/// `for (variable : expression) statement`
#[derive(Debug, Clone)]
pub struct ForEachStatementTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) variable: Box<Tree>,
    pub(crate) expression: Box<Tree>,
    pub(crate) statement: Box<Tree>,
}

impl ForEachStatementTree {
    /// The loop variable.
    #[must_use]
    pub fn variable(&self) -> &Tree {
        &self.variable
    }

    /// The iterated expression.
    #[must_use]
    pub fn expression(&self) -> &Tree {
        &self.expression
    }

    /// The loop body.
    #[must_use]
    pub fn statement(&self) -> &Tree {
        &self.statement
    }
}

/// `break label;`
#[derive(Debug, Clone)]
pub struct BreakStatementTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) label: Option<SmolStr>,
}

impl BreakStatementTree {
    /// The target label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// `continue label;`
#[derive(Debug, Clone)]
pub struct ContinueStatementTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) label: Option<SmolStr>,
}

impl ContinueStatementTree {
    /// The target label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// `return expression;`
#[derive(Debug, Clone)]
pub struct ReturnStatementTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) expression: Option<Box<Tree>>,
}

impl ReturnStatementTree {
    /// The returned expression, if any.
    #[must_use]
    pub fn expression(&self) -> Option<&Tree> {
        self.expression.as_deref()
    }
}

/// `throw expression;`
#[derive(Debug, Clone)]
pub struct ThrowStatementTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) expression: Box<Tree>,
}

impl ThrowStatementTree {
    /// The thrown expression.
    #[must_use]
    pub fn expression(&self) -> &Tree {
        &self.expression
    }
}

/// `synchronized (expression) block`
#[derive(Debug, Clone)]
pub struct SynchronizedStatementTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) expression: Box<Tree>,
    pub(crate) block: Box<Tree>,
}

impl SynchronizedStatementTree {
    /// The monitor expression.
    #[must_use]
    pub fn expression(&self) -> &Tree {
        &self.expression
    }

    /// The guarded block.
    #[must_use]
    pub fn block(&self) -> &Tree {
        &self.block
    }
}

/// A `try` statement, with or without resources.
#[derive(Debug, Clone)]
pub struct TryStatementTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) resources: Vec<Tree>,
    pub(crate) block: Box<Tree>,
    pub(crate) catches: Vec<Tree>,
    pub(crate) finally_block: Option<Box<Tree>>,
}

impl TryStatementTree {
    /// The declared resources, each a `Variable`.
    #[must_use]
    pub fn resources(&self) -> &[Tree] {
        &self.resources
    }

    /// The guarded block.
    #[must_use]
    pub fn block(&self) -> &Tree {
        &self.block
    }

    /// The catch clauses, in source order.
    #[must_use]
    pub fn catches(&self) -> &[Tree] {
        &self.catches
    }

    /// The finally block, if any.
    #[must_use]
    pub fn finally_block(&self) -> Option<&Tree> {
        self.finally_block.as_deref()
    }
}

/// `catch (parameter) block`
#[derive(Debug, Clone)]
pub struct CatchTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) parameter: Box<Tree>,
    pub(crate) block: Box<Tree>,
}

impl CatchTree {
    /// The caught parameter, a `Variable`.
    #[must_use]
    pub fn parameter(&self) -> &Tree {
        &self.parameter
    }

    /// The handler block.
    #[must_use]
    pub fn block(&self) -> &Tree {
        &self.block
    }
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

/// A plain identifier, including the `this` and `super` receivers.
#[derive(Debug, Clone)]
pub struct IdentifierTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) name: SmolStr,
}

impl IdentifierTree {
    /// The identifier text.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A literal of any of the eight literal kinds.
#[derive(Debug, Clone)]
pub struct LiteralTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) kind: Kind,
    pub(crate) value: SmolStr,
}

impl LiteralTree {
    /// The literal kind.
    #[must_use]
    pub fn literal_kind(&self) -> Kind {
        self.kind
    }

    /// The original token text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// `(expression)`
#[derive(Debug, Clone)]
pub struct ParenthesizedTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) expression: Box<Tree>,
}

impl ParenthesizedTree {
    /// The wrapped expression.
    #[must_use]
    pub fn expression(&self) -> &Tree {
        &self.expression
    }
}

/// `condition ? true : false`
#[derive(Debug, Clone)]
pub struct ConditionalExpressionTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) condition: Box<Tree>,
    pub(crate) true_expression: Box<Tree>,
    pub(crate) false_expression: Box<Tree>,
}

impl ConditionalExpressionTree {
    /// The condition expression.
    #[must_use]
    pub fn condition(&self) -> &Tree {
        &self.condition
    }

    /// The expression taken when the condition holds.
    #[must_use]
    pub fn true_expression(&self) -> &Tree {
        &self.true_expression
    }

    /// The expression taken when the condition does not hold.
    #[must_use]
    pub fn false_expression(&self) -> &Tree {
        &self.false_expression
    }
}

/// `expression instanceof type`
#[derive(Debug, Clone)]
pub struct InstanceOfTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) expression: Box<Tree>,
    pub(crate) ty: Box<Tree>,
}

impl InstanceOfTree {
    /// The tested expression.
    #[must_use]
    pub fn expression(&self) -> &Tree {
        &self.expression
    }

    /// The tested-against type.
    #[must_use]
    pub fn ty(&self) -> &Tree {
        &self.ty
    }
}

/// `(type) expression`
#[derive(Debug, Clone)]
pub struct TypeCastTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) ty: Box<Tree>,
    pub(crate) expression: Box<Tree>,
}

impl TypeCastTree {
    /// The target type.
    #[must_use]
    pub fn ty(&self) -> &Tree {
        &self.ty
    }

    /// The cast expression.
    #[must_use]
    pub fn expression(&self) -> &Tree {
        &self.expression
    }
}

/// `select(arguments)`
#[derive(Debug, Clone)]
pub struct MethodInvocationTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) method_select: Box<Tree>,
    pub(crate) arguments: Vec<Tree>,
}

impl MethodInvocationTree {
    /// The invoked expression: an identifier or a member select.
    #[must_use]
    pub fn method_select(&self) -> &Tree {
        &self.method_select
    }

    /// The arguments, in source order.
    #[must_use]
    pub fn arguments(&self) -> &[Tree] {
        &self.arguments
    }
}

/// `new type[dims]` or an array initializer.
#[derive(Debug, Clone)]
pub struct NewArrayTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) ty: Option<Box<Tree>>,
    pub(crate) dimensions: Vec<Tree>,
    pub(crate) initializers: Vec<Tree>,
}

impl NewArrayTree {
    /// The element type; absent for initializer-only array creations.
    #[must_use]
    pub fn ty(&self) -> Option<&Tree> {
        self.ty.as_deref()
    }

    /// The dimension expressions, in source order.
    #[must_use]
    pub fn dimensions(&self) -> &[Tree] {
        &self.dimensions
    }

    /// The initializer elements, in source order.
    #[must_use]
    pub fn initializers(&self) -> &[Tree] {
        &self.initializers
    }
}

/// `new identifier(arguments) body`, possibly with an enclosing receiver.
#[derive(Debug, Clone)]
pub struct NewClassTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) enclosing_expression: Option<Box<Tree>>,
    pub(crate) identifier: Box<Tree>,
    pub(crate) arguments: Vec<Tree>,
    pub(crate) class_body: Option<Box<Tree>>,
}

impl NewClassTree {
    /// The enclosing receiver of an inner-class creator, if any.
    #[must_use]
    pub fn enclosing_expression(&self) -> Option<&Tree> {
        self.enclosing_expression.as_deref()
    }

    /// The created type's identifier.
    #[must_use]
    pub fn identifier(&self) -> &Tree {
        &self.identifier
    }

    /// The constructor arguments, in source order.
    #[must_use]
    pub fn arguments(&self) -> &[Tree] {
        &self.arguments
    }

    /// The inline class body, if any.
    #[must_use]
    pub fn class_body(&self) -> Option<&Tree> {
        self.class_body.as_deref()
    }
}

/// `expression.identifier`
#[derive(Debug, Clone)]
pub struct MemberSelectTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) expression: Box<Tree>,
    pub(crate) identifier: SmolStr,
}

impl MemberSelectTree {
    /// The qualifier expression.
    #[must_use]
    pub fn expression(&self) -> &Tree {
        &self.expression
    }

    /// The selected identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

/// `expression[index]`
#[derive(Debug, Clone)]
pub struct ArrayAccessTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) expression: Box<Tree>,
    pub(crate) index: Box<Tree>,
}

impl ArrayAccessTree {
    /// The accessed expression.
    #[must_use]
    pub fn expression(&self) -> &Tree {
        &self.expression
    }

    /// The index expression.
    #[must_use]
    pub fn index(&self) -> &Tree {
        &self.index
    }
}

/// A binary expression; the operator is one of the 19 binary kinds.
#[derive(Debug, Clone)]
pub struct BinaryExpressionTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) op: Kind,
    pub(crate) left_operand: Box<Tree>,
    pub(crate) right_operand: Box<Tree>,
}

impl BinaryExpressionTree {
    /// The operator kind.
    #[must_use]
    pub fn op(&self) -> Kind {
        self.op
    }

    /// The left operand.
    #[must_use]
    pub fn left_operand(&self) -> &Tree {
        &self.left_operand
    }

    /// The right operand.
    #[must_use]
    pub fn right_operand(&self) -> &Tree {
        &self.right_operand
    }
}

/// A unary expression; the operator is one of the 8 unary kinds.
#[derive(Debug, Clone)]
pub struct UnaryExpressionTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) op: Kind,
    pub(crate) expression: Box<Tree>,
}

impl UnaryExpressionTree {
    /// The operator kind.
    #[must_use]
    pub fn op(&self) -> Kind {
        self.op
    }

    /// The operand.
    #[must_use]
    pub fn expression(&self) -> &Tree {
        &self.expression
    }
}

/// An assignment; the operator is `=` or one of the 11 compound forms.
#[derive(Debug, Clone)]
pub struct AssignmentExpressionTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) op: Kind,
    pub(crate) variable: Box<Tree>,
    pub(crate) expression: Box<Tree>,
}

impl AssignmentExpressionTree {
    /// The operator kind.
    #[must_use]
    pub fn op(&self) -> Kind {
        self.op
    }

    /// The assigned-to expression.
    #[must_use]
    pub fn variable(&self) -> &Tree {
        &self.variable
    }

    /// The assigned value.
    #[must_use]
    pub fn expression(&self) -> &Tree {
        &self.expression
    }
}

// ---------------------------------------------------------------------------
// Auxiliary type shapes
// ---------------------------------------------------------------------------

/// A primitive type, including `void`.
#[derive(Debug, Clone)]
pub struct PrimitiveTypeTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) name: SmolStr,
}

impl PrimitiveTypeTree {
    /// The primitive keyword text.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An array type wrapping an element type.
#[derive(Debug, Clone)]
pub struct ArrayTypeTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) element_type: Box<Tree>,
}

impl ArrayTypeTree {
    /// The element type.
    #[must_use]
    pub fn element_type(&self) -> &Tree {
        &self.element_type
    }
}

/// A wildcard type argument.
#[derive(Debug, Clone)]
pub struct WildcardTree {
    pub(crate) syntax: SyntaxNode,
    pub(crate) line: u32,
    pub(crate) bound: Option<Box<Tree>>,
}

impl WildcardTree {
    /// The wildcard bound, if any.
    #[must_use]
    pub fn bound(&self) -> Option<&Tree> {
        self.bound.as_deref()
    }
}

impl_tree_node!(
    CompilationUnitTree,
    ImportTree,
    ClassTree,
    MethodTree,
    VariableTree,
    BlockTree,
    ModifiersTree,
    EmptyStatementTree,
    LabeledStatementTree,
    ExpressionStatementTree,
    IfStatementTree,
    AssertStatementTree,
    SwitchStatementTree,
    CaseGroupTree,
    CaseLabelTree,
    WhileStatementTree,
    DoWhileStatementTree,
    ForStatementTree,
    ForEachStatementTree,
    BreakStatementTree,
    ContinueStatementTree,
    ReturnStatementTree,
    ThrowStatementTree,
    SynchronizedStatementTree,
    CatchTree,
    TryStatementTree,
    IdentifierTree,
    LiteralTree,
    ParenthesizedTree,
    ConditionalExpressionTree,
    InstanceOfTree,
    TypeCastTree,
    MethodInvocationTree,
    NewArrayTree,
    NewClassTree,
    MemberSelectTree,
    ArrayAccessTree,
    BinaryExpressionTree,
    UnaryExpressionTree,
    AssignmentExpressionTree,
    PrimitiveTypeTree,
    ArrayTypeTree,
    WildcardTree,
);

// ---------------------------------------------------------------------------
// The closed sum
// ---------------------------------------------------------------------------

macro_rules! define_tree {
    ($(($variant:ident, $payload:ident, $visit:ident),)*) => {
        /// A node of the abstract syntax tree.
        ///
        /// The sum is closed; dispatch either by matching or through the
        /// visitor framework via [`Tree::accept`].
        // Variants mirror their payload struct names.
        #[allow(missing_docs)]
        #[derive(Debug, Clone)]
        pub enum Tree {
            $($variant($payload),)*
        }

        impl AstNode for Tree {
            fn syntax(&self) -> &SyntaxNode {
                match self {
                    $(Self::$variant(tree) => tree.syntax(),)*
                }
            }

            fn line(&self) -> u32 {
                match self {
                    $(Self::$variant(tree) => tree.line(),)*
                }
            }
        }

        impl Tree {
            /// Double-dispatch entry point: invokes the visitor method for
            /// this node's category.
            pub fn accept<V: TreeVisitor + ?Sized>(&self, visitor: &mut V) {
                match self {
                    $(Self::$variant(tree) => visitor.$visit(tree),)*
                }
            }
        }
    };
}

define_tree! {
    (CompilationUnit, CompilationUnitTree, visit_compilation_unit),
    (Class, ClassTree, visit_class),
    (Method, MethodTree, visit_method),
    (Variable, VariableTree, visit_variable),
    (Block, BlockTree, visit_block),
    (EmptyStatement, EmptyStatementTree, visit_empty_statement),
    (LabeledStatement, LabeledStatementTree, visit_labeled_statement),
    (ExpressionStatement, ExpressionStatementTree, visit_expression_statement),
    (If, IfStatementTree, visit_if_statement),
    (Assert, AssertStatementTree, visit_assert_statement),
    (Switch, SwitchStatementTree, visit_switch_statement),
    (CaseGroup, CaseGroupTree, visit_case_group),
    (CaseLabel, CaseLabelTree, visit_case_label),
    (While, WhileStatementTree, visit_while_statement),
    (DoWhile, DoWhileStatementTree, visit_do_while_statement),
    (For, ForStatementTree, visit_for_statement),
    (ForEach, ForEachStatementTree, visit_for_each_statement),
    (Break, BreakStatementTree, visit_break_statement),
    (Continue, ContinueStatementTree, visit_continue_statement),
    (Return, ReturnStatementTree, visit_return_statement),
    (Throw, ThrowStatementTree, visit_throw_statement),
    (Synchronized, SynchronizedStatementTree, visit_synchronized_statement),
    (Try, TryStatementTree, visit_try_statement),
    (Catch, CatchTree, visit_catch),
    (Identifier, IdentifierTree, visit_identifier),
    (Literal, LiteralTree, visit_literal),
    (Parenthesized, ParenthesizedTree, visit_parenthesized),
    (Conditional, ConditionalExpressionTree, visit_conditional_expression),
    (InstanceOf, InstanceOfTree, visit_instance_of),
    (TypeCast, TypeCastTree, visit_type_cast),
    (MethodInvocation, MethodInvocationTree, visit_method_invocation),
    (NewArray, NewArrayTree, visit_new_array),
    (NewClass, NewClassTree, visit_new_class),
    (MemberSelect, MemberSelectTree, visit_member_select),
    (ArrayAccess, ArrayAccessTree, visit_array_access),
    (Binary, BinaryExpressionTree, visit_binary_expression),
    (Unary, UnaryExpressionTree, visit_unary_expression),
    (Assignment, AssignmentExpressionTree, visit_assignment_expression),
    (PrimitiveType, PrimitiveTypeTree, visit_primitive_type),
    (ArrayType, ArrayTypeTree, visit_array_type),
    (Wildcard, WildcardTree, visit_wildcard),
}

impl Tree {
    /// Returns the kind tag of this node, or `None` for the auxiliary
    /// kindless shapes (primitive types, array types, wildcards).
    #[must_use]
    pub fn kind(&self) -> Option<Kind> {
        match self {
            Self::CompilationUnit(_) => Some(Kind::CompilationUnit),
            Self::Class(tree) => Some(tree.kind),
            Self::Method(_) => Some(Kind::Method),
            Self::Variable(tree) => Some(tree.kind),
            Self::Block(tree) => Some(tree.kind),
            Self::EmptyStatement(_) => Some(Kind::EmptyStatement),
            Self::LabeledStatement(_) => Some(Kind::LabeledStatement),
            Self::ExpressionStatement(_) => Some(Kind::ExpressionStatement),
            Self::If(_) => Some(Kind::IfStatement),
            Self::Assert(_) => Some(Kind::AssertStatement),
            Self::Switch(_) => Some(Kind::SwitchStatement),
            Self::CaseGroup(_) => Some(Kind::CaseGroup),
            Self::CaseLabel(_) => Some(Kind::CaseLabel),
            Self::While(_) => Some(Kind::WhileStatement),
            Self::DoWhile(_) => Some(Kind::DoStatement),
            Self::For(_) => Some(Kind::ForStatement),
            Self::ForEach(_) => Some(Kind::EnhancedForStatement),
            Self::Break(_) => Some(Kind::BreakStatement),
            Self::Continue(_) => Some(Kind::ContinueStatement),
            Self::Return(_) => Some(Kind::ReturnStatement),
            Self::Throw(_) => Some(Kind::ThrowStatement),
            Self::Synchronized(_) => Some(Kind::SynchronizedStatement),
            Self::Try(_) => Some(Kind::TryStatement),
            Self::Catch(_) => Some(Kind::Catch),
            Self::Identifier(_) => Some(Kind::Identifier),
            Self::Literal(tree) => Some(tree.kind),
            Self::Parenthesized(_) => Some(Kind::ParenthesizedExpression),
            Self::Conditional(_) => Some(Kind::ConditionalExpression),
            Self::InstanceOf(_) => Some(Kind::InstanceOf),
            Self::TypeCast(_) => Some(Kind::TypeCast),
            Self::MethodInvocation(_) => Some(Kind::MethodInvocation),
            Self::NewArray(_) => Some(Kind::NewArray),
            Self::NewClass(_) => Some(Kind::NewClass),
            Self::MemberSelect(_) => Some(Kind::MemberSelect),
            Self::ArrayAccess(_) => Some(Kind::ArrayAccessExpression),
            Self::Binary(tree) => Some(tree.op),
            Self::Unary(tree) => Some(tree.op),
            Self::Assignment(tree) => Some(tree.op),
            Self::PrimitiveType(_) | Self::ArrayType(_) | Self::Wildcard(_) => None,
        }
    }

    /// Returns `true` iff this node's kind tag equals `kind`.
    ///
    /// Kindless nodes always return `false`.
    #[must_use]
    pub fn is(&self, kind: Kind) -> bool {
        self.kind() == Some(kind)
    }
}
