//! Lowering of expressions: the single-dispatch classifier, the iterative
//! folds for the associative families, and the primary/suffix/selector/
//! creator routines.

use javert_syntax::{SyntaxElement, SyntaxKind, SyntaxNode};
use smol_str::SmolStr;

use super::{dim_count, elements, find_node, find_token, first_node, token_text, Lower};
use crate::error::LowerError;
use crate::tables::{assignment_kind, binary_kind, literal_kind, postfix_kind, prefix_kind};
use crate::tree::{
    ArrayAccessTree, AssignmentExpressionTree, BinaryExpressionTree, ConditionalExpressionTree,
    IdentifierTree, InstanceOfTree, LiteralTree, MemberSelectTree, MethodInvocationTree,
    NewArrayTree, NewClassTree, ParenthesizedTree, Tree, TypeCastTree, UnaryExpressionTree,
};

impl Lower {
    /// The single expression dispatcher, classified by grammar tag.
    pub(crate) fn expression(&self, node: &SyntaxNode) -> Result<Tree, LowerError> {
        match node.kind() {
            // Wrappers unwrap to their first meaningful child.
            SyntaxKind::Expression
            | SyntaxKind::StatementExpression
            | SyntaxKind::ConstantExpression => {
                let inner = first_node(node)?;
                self.expression(&inner)
            }
            SyntaxKind::ParExpression => Ok(Tree::Parenthesized(ParenthesizedTree {
                syntax: node.clone(),
                line: self.line(node),
                expression: Box::new(self.par_expression_contents(node)?),
            })),
            SyntaxKind::Primary => self.primary(node),
            SyntaxKind::ConditionalOrExpression
            | SyntaxKind::ConditionalAndExpression
            | SyntaxKind::InclusiveOrExpression
            | SyntaxKind::ExclusiveOrExpression
            | SyntaxKind::AndExpression
            | SyntaxKind::EqualityExpression
            | SyntaxKind::RelationalExpression
            | SyntaxKind::ShiftExpression
            | SyntaxKind::AdditiveExpression
            | SyntaxKind::MultiplicativeExpression => self.binary_family(node),
            SyntaxKind::ConditionalExpression => self.conditional(node),
            SyntaxKind::AssignmentExpression => self.assignment(node),
            SyntaxKind::UnaryExpression => self.unary(node),
            SyntaxKind::Literal => self.literal(node),
            SyntaxKind::QualifiedIdentifier => self.identifier_chain(node),
            _ => Err(LowerError::malformed(node.kind())),
        }
    }

    /// The expression inside a `ParExpression`, without a `Parenthesized`
    /// wrapper; statement conditions use this form.
    pub(crate) fn par_expression_inner(&self, owner: &SyntaxNode) -> Result<Tree, LowerError> {
        let par = find_node(owner, SyntaxKind::ParExpression)
            .ok_or_else(|| LowerError::malformed(owner.kind()))?;
        self.par_expression_contents(&par)
    }

    fn par_expression_contents(&self, par: &SyntaxNode) -> Result<Tree, LowerError> {
        let inner = first_node(par)?;
        self.expression(&inner)
    }

    /// Iterative left-leaning fold of a left-associative operator family;
    /// `instanceof` is non-chainable and consumes a reference type instead
    /// of an operand.
    fn binary_family(&self, node: &SyntaxNode) -> Result<Tree, LowerError> {
        let parts: Vec<SyntaxElement> = elements(node).collect();
        let first = as_node(parts.first(), node)?;
        let mut result = self.expression(&first)?;

        let mut index = 1;
        while index + 1 < parts.len() {
            let operator = as_token(parts.get(index), node)?;
            let operand = as_node(parts.get(index + 1), node)?;
            if operator.kind() == SyntaxKind::KwInstanceof {
                result = Tree::InstanceOf(InstanceOfTree {
                    syntax: node.clone(),
                    line: self.line(node),
                    expression: Box::new(result),
                    ty: Box::new(self.ty(&operand)?),
                });
            } else {
                result = Tree::Binary(BinaryExpressionTree {
                    syntax: node.clone(),
                    line: self.line(node),
                    op: binary_kind(operator.kind())?,
                    left_operand: Box::new(result),
                    right_operand: Box::new(self.expression(&operand)?),
                });
            }
            index += 2;
        }
        if index != parts.len() {
            return Err(LowerError::malformed(node.kind()));
        }
        Ok(result)
    }

    /// Right-associative fold stepping backward by four children:
    /// `cond ? a : cond2 ? b : c`.
    fn conditional(&self, node: &SyntaxNode) -> Result<Tree, LowerError> {
        let parts: Vec<SyntaxElement> = elements(node).collect();
        let last = as_node(parts.last(), node)?;
        let mut result = self.expression(&last)?;
        if parts.len() == 1 {
            return Ok(result);
        }
        if parts.len() % 4 != 1 {
            return Err(LowerError::malformed(node.kind()));
        }

        let mut index = parts.len() - 1;
        while index >= 4 {
            let condition = as_node(parts.get(index - 4), node)?;
            let true_branch = as_node(parts.get(index - 2), node)?;
            result = Tree::Conditional(ConditionalExpressionTree {
                syntax: node.clone(),
                line: self.line(node),
                condition: Box::new(self.expression(&condition)?),
                true_expression: Box::new(self.expression(&true_branch)?),
                false_expression: Box::new(result),
            });
            index -= 4;
        }
        Ok(result)
    }

    /// Right-associative fold in steps of two: `lhs op rhs`.
    fn assignment(&self, node: &SyntaxNode) -> Result<Tree, LowerError> {
        let parts: Vec<SyntaxElement> = elements(node).collect();
        let last = as_node(parts.last(), node)?;
        let mut result = self.expression(&last)?;
        if parts.len() == 1 {
            return Ok(result);
        }
        if parts.len() % 2 == 0 {
            return Err(LowerError::malformed(node.kind()));
        }

        let mut index = parts.len() - 1;
        while index >= 2 {
            let operator = as_token(parts.get(index - 1), node)?;
            let variable = as_node(parts.get(index - 2), node)?;
            result = Tree::Assignment(AssignmentExpressionTree {
                syntax: node.clone(),
                line: self.line(node),
                op: assignment_kind(operator.kind())?,
                variable: Box::new(self.expression(&variable)?),
                expression: Box::new(result),
            });
            index -= 2;
        }
        Ok(result)
    }

    /// A unary expression is a cast, a prefix application, or a primary
    /// followed by selectors and postfix operators.
    fn unary(&self, node: &SyntaxNode) -> Result<Tree, LowerError> {
        if let Some(ty_node) = find_node(node, SyntaxKind::Type) {
            let parts: Vec<SyntaxElement> = elements(node).collect();
            let operand = as_node(parts.last(), node)?;
            return Ok(Tree::TypeCast(TypeCastTree {
                syntax: node.clone(),
                line: self.line(node),
                ty: Box::new(self.ty(&ty_node)?),
                expression: Box::new(self.expression(&operand)?),
            }));
        }

        let parts: Vec<SyntaxElement> = elements(node).collect();
        let first = parts
            .first()
            .ok_or_else(|| LowerError::malformed(node.kind()))?;
        if let Some(token) = first.as_token() {
            let operand = as_node(parts.get(1), node)?;
            return Ok(Tree::Unary(UnaryExpressionTree {
                syntax: node.clone(),
                line: self.line(node),
                op: prefix_kind(token.kind())?,
                expression: Box::new(self.expression(&operand)?),
            }));
        }

        let base = as_node(parts.first(), node)?;
        let mut result = self.expression(&base)?;
        for part in &parts[1..] {
            match part {
                SyntaxElement::Node(selector) if selector.kind() == SyntaxKind::Selector => {
                    result = self.selector(result, selector)?;
                }
                SyntaxElement::Token(token) => {
                    result = Tree::Unary(UnaryExpressionTree {
                        syntax: node.clone(),
                        line: self.line(node),
                        op: postfix_kind(token.kind())?,
                        expression: Box::new(result),
                    });
                }
                SyntaxElement::Node(other) => return Err(LowerError::malformed(other.kind())),
            }
        }
        Ok(result)
    }

    fn literal(&self, node: &SyntaxNode) -> Result<Tree, LowerError> {
        let token = elements(node)
            .find_map(|element| element.into_token())
            .ok_or_else(|| LowerError::malformed(node.kind()))?;
        Ok(Tree::Literal(LiteralTree {
            syntax: node.clone(),
            line: self.line(node),
            kind: literal_kind(token.kind())?,
            value: token_text(&token),
        }))
    }

    /// Primary lowering, enumerated by the first child's tag.
    fn primary(&self, node: &SyntaxNode) -> Result<Tree, LowerError> {
        let parts: Vec<SyntaxElement> = elements(node).collect();
        let first = parts
            .first()
            .ok_or_else(|| LowerError::malformed(node.kind()))?;

        match first {
            SyntaxElement::Node(child) => match child.kind() {
                SyntaxKind::ParExpression => self.expression(child),
                SyntaxKind::Literal => self.literal(child),
                SyntaxKind::QualifiedIdentifier => {
                    let base = self.identifier_chain(child)?;
                    match parts.get(1).and_then(|part| part.as_node()) {
                        Some(suffix) if suffix.kind() == SyntaxKind::IdentifierSuffix => {
                            self.identifier_suffix(base, suffix)
                        }
                        _ => Ok(base),
                    }
                }
                SyntaxKind::BasicType => {
                    let base = self.ty(child)?;
                    let with_dims = self.apply_dims(base, dim_count(node), node);
                    Ok(self.select(node, with_dims, "class"))
                }
                _ => Err(LowerError::malformed(child.kind())),
            },
            SyntaxElement::Token(token) => match token.kind() {
                SyntaxKind::KwThis => {
                    let this = self.keyword_identifier(node, "this");
                    match parts.get(1).and_then(|part| part.as_node()) {
                        Some(arguments) if arguments.kind() == SyntaxKind::Arguments => {
                            Ok(self.invocation(node, this, self.arguments(arguments)?))
                        }
                        _ => Ok(this),
                    }
                }
                SyntaxKind::KwSuper => {
                    let super_ = self.keyword_identifier(node, "super");
                    match parts.get(1).and_then(|part| part.as_node()) {
                        Some(suffix) if suffix.kind() == SyntaxKind::SuperSuffix => {
                            self.super_suffix(super_, suffix)
                        }
                        _ => Ok(super_),
                    }
                }
                SyntaxKind::KwNew => {
                    let creator = parts
                        .get(1)
                        .and_then(|part| part.as_node())
                        .filter(|creator| creator.kind() == SyntaxKind::Creator)
                        .cloned()
                        .ok_or_else(|| LowerError::malformed(node.kind()))?;
                    self.creator(&creator)
                }
                SyntaxKind::KwVoid => Ok(self.select(
                    node,
                    self.void_type(node),
                    "class",
                )),
                _ => Err(LowerError::malformed(token.kind())),
            },
        }
    }

    /// Applies an identifier suffix: array access or class literal after
    /// `[`, invocation after arguments, and the dotted forms.
    fn identifier_suffix(&self, base: Tree, suffix: &SyntaxNode) -> Result<Tree, LowerError> {
        let parts: Vec<SyntaxElement> = elements(suffix).collect();
        let first = parts
            .first()
            .ok_or_else(|| LowerError::malformed(suffix.kind()))?;

        match first {
            SyntaxElement::Node(arguments) if arguments.kind() == SyntaxKind::Arguments => {
                Ok(self.invocation(suffix, base, self.arguments(arguments)?))
            }
            SyntaxElement::Token(token) if token.kind() == SyntaxKind::LBracket => {
                match parts.get(1) {
                    // `[` `]` dims `.` class
                    Some(SyntaxElement::Token(bracket))
                        if bracket.kind() == SyntaxKind::RBracket =>
                    {
                        let dims = 1 + dim_count(suffix);
                        let array = self.apply_dims(base, dims, suffix);
                        Ok(self.select(suffix, array, "class"))
                    }
                    Some(SyntaxElement::Node(index)) => Ok(Tree::ArrayAccess(ArrayAccessTree {
                        syntax: suffix.clone(),
                        line: self.line(suffix),
                        expression: Box::new(base),
                        index: Box::new(self.expression(index)?),
                    })),
                    _ => Err(LowerError::malformed(suffix.kind())),
                }
            }
            SyntaxElement::Token(token) if token.kind() == SyntaxKind::Dot => {
                match parts.get(1) {
                    Some(SyntaxElement::Token(keyword)) => match keyword.kind() {
                        SyntaxKind::KwClass => Ok(self.select(suffix, base, "class")),
                        SyntaxKind::KwThis => Ok(self.select(suffix, base, "this")),
                        SyntaxKind::KwSuper => {
                            let super_select = self.select(suffix, base, "super");
                            let rest = parts
                                .get(2)
                                .and_then(|part| part.as_node())
                                .filter(|rest| rest.kind() == SyntaxKind::SuperSuffix)
                                .cloned()
                                .ok_or_else(|| LowerError::malformed(suffix.kind()))?;
                            self.super_suffix(super_select, &rest)
                        }
                        SyntaxKind::KwNew => {
                            let inner = parts
                                .get(2)
                                .and_then(|part| part.as_node())
                                .filter(|inner| inner.kind() == SyntaxKind::InnerCreator)
                                .cloned()
                                .ok_or_else(|| LowerError::malformed(suffix.kind()))?;
                            self.inner_creator(base, &inner)
                        }
                        _ => Err(LowerError::malformed(keyword.kind())),
                    },
                    Some(SyntaxElement::Node(invocation))
                        if invocation.kind() == SyntaxKind::ExplicitGenericInvocation =>
                    {
                        self.explicit_generic_invocation(base, invocation)
                    }
                    _ => Err(LowerError::malformed(suffix.kind())),
                }
            }
            _ => Err(LowerError::malformed(suffix.kind())),
        }
    }

    /// Applies one selector: `.id`, `.id(args)`, explicit generic
    /// invocation, `.this`, `.super…`, `.new`, or `[expr]`.
    fn selector(&self, base: Tree, selector: &SyntaxNode) -> Result<Tree, LowerError> {
        let parts: Vec<SyntaxElement> = elements(selector).collect();
        let first = parts
            .first()
            .ok_or_else(|| LowerError::malformed(selector.kind()))?;

        match first {
            SyntaxElement::Token(token) if token.kind() == SyntaxKind::LBracket => {
                let index = parts
                    .get(1)
                    .and_then(|part| part.as_node())
                    .cloned()
                    .ok_or_else(|| LowerError::malformed(selector.kind()))?;
                Ok(Tree::ArrayAccess(ArrayAccessTree {
                    syntax: selector.clone(),
                    line: self.line(selector),
                    expression: Box::new(base),
                    index: Box::new(self.expression(&index)?),
                }))
            }
            SyntaxElement::Token(token) if token.kind() == SyntaxKind::Dot => {
                match parts.get(1) {
                    Some(SyntaxElement::Token(name)) if name.kind() == SyntaxKind::Ident => {
                        let select = self.select(selector, base, name.text());
                        match parts.get(2).and_then(|part| part.as_node()) {
                            Some(arguments) if arguments.kind() == SyntaxKind::Arguments => {
                                Ok(self.invocation(selector, select, self.arguments(arguments)?))
                            }
                            _ => Ok(select),
                        }
                    }
                    Some(SyntaxElement::Token(keyword))
                        if keyword.kind() == SyntaxKind::KwThis =>
                    {
                        Ok(self.select(selector, base, "this"))
                    }
                    Some(SyntaxElement::Token(keyword))
                        if keyword.kind() == SyntaxKind::KwSuper =>
                    {
                        let super_select = self.select(selector, base, "super");
                        let rest = parts
                            .get(2)
                            .and_then(|part| part.as_node())
                            .filter(|rest| rest.kind() == SyntaxKind::SuperSuffix)
                            .cloned()
                            .ok_or_else(|| LowerError::malformed(selector.kind()))?;
                        self.super_suffix(super_select, &rest)
                    }
                    Some(SyntaxElement::Token(keyword)) if keyword.kind() == SyntaxKind::KwNew => {
                        let inner = parts
                            .get(2)
                            .and_then(|part| part.as_node())
                            .filter(|inner| inner.kind() == SyntaxKind::InnerCreator)
                            .cloned()
                            .ok_or_else(|| LowerError::malformed(selector.kind()))?;
                        self.inner_creator(base, &inner)
                    }
                    Some(SyntaxElement::Node(invocation))
                        if invocation.kind() == SyntaxKind::ExplicitGenericInvocation =>
                    {
                        self.explicit_generic_invocation(base, invocation)
                    }
                    _ => Err(LowerError::malformed(selector.kind())),
                }
            }
            _ => Err(LowerError::malformed(selector.kind())),
        }
    }

    /// With arguments: an invocation of the incoming expression, optionally
    /// through a member select; without: a member select.
    fn super_suffix(&self, base: Tree, suffix: &SyntaxNode) -> Result<Tree, LowerError> {
        let parts: Vec<SyntaxElement> = elements(suffix).collect();
        match parts.first() {
            Some(SyntaxElement::Node(arguments)) if arguments.kind() == SyntaxKind::Arguments => {
                Ok(self.invocation(suffix, base, self.arguments(arguments)?))
            }
            Some(SyntaxElement::Token(token)) if token.kind() == SyntaxKind::Dot => {
                let name = match parts.get(1) {
                    Some(SyntaxElement::Token(name)) if name.kind() == SyntaxKind::Ident => name,
                    _ => return Err(LowerError::malformed(suffix.kind())),
                };
                let select = self.select(suffix, base, name.text());
                match parts.get(2).and_then(|part| part.as_node()) {
                    Some(arguments) if arguments.kind() == SyntaxKind::Arguments => {
                        Ok(self.invocation(suffix, select, self.arguments(arguments)?))
                    }
                    _ => Ok(select),
                }
            }
            _ => Err(LowerError::malformed(suffix.kind())),
        }
    }

    /// `<T>` invocations erase their type arguments; the suffix is either a
    /// named invocation or a super form.
    fn explicit_generic_invocation(
        &self,
        base: Tree,
        node: &SyntaxNode,
    ) -> Result<Tree, LowerError> {
        let suffix = find_node(node, SyntaxKind::ExplicitGenericInvocationSuffix)
            .ok_or_else(|| LowerError::malformed(node.kind()))?;
        if let Some(name) = find_token(&suffix, SyntaxKind::Ident) {
            let arguments = find_node(&suffix, SyntaxKind::Arguments)
                .ok_or_else(|| LowerError::malformed(suffix.kind()))?;
            let select = self.select(&suffix, base, name.text());
            return Ok(self.invocation(&suffix, select, self.arguments(&arguments)?));
        }
        if super::has_token(&suffix, SyntaxKind::KwSuper) {
            let super_select = self.select(&suffix, base, "super");
            let rest = find_node(&suffix, SyntaxKind::SuperSuffix)
                .ok_or_else(|| LowerError::malformed(suffix.kind()))?;
            return self.super_suffix(super_select, &rest);
        }
        Err(LowerError::malformed(suffix.kind()))
    }

    /// The creator routine: a class creator over a created name, or an
    /// array creator over a basic or class element type.
    fn creator(&self, node: &SyntaxNode) -> Result<Tree, LowerError> {
        let created = node
            .children()
            .find(|child| {
                matches!(
                    child.kind(),
                    SyntaxKind::CreatedName | SyntaxKind::BasicType | SyntaxKind::QualifiedIdentifier
                )
            })
            .ok_or_else(|| LowerError::malformed(node.kind()))?;
        let element = self.ty(&created)?;

        if let Some(rest) = find_node(node, SyntaxKind::ClassCreatorRest) {
            return self.class_creator_rest(node, None, element, &rest);
        }
        if let Some(rest) = find_node(node, SyntaxKind::ArrayCreatorRest) {
            return self.array_creator_rest(node, element, &rest);
        }
        Err(LowerError::malformed(node.kind()))
    }

    fn inner_creator(&self, enclosing: Tree, node: &SyntaxNode) -> Result<Tree, LowerError> {
        let name = find_token(node, SyntaxKind::Ident)
            .ok_or_else(|| LowerError::malformed(node.kind()))?;
        let identifier = Tree::Identifier(IdentifierTree {
            syntax: node.clone(),
            line: self.line(node),
            name: token_text(&name),
        });
        let rest = find_node(node, SyntaxKind::ClassCreatorRest)
            .ok_or_else(|| LowerError::malformed(node.kind()))?;
        self.class_creator_rest(node, Some(enclosing), identifier, &rest)
    }

    /// Produces a `NewClass` with the supplied enclosing expression, the
    /// lowered arguments, and the optional inline class body.
    fn class_creator_rest(
        &self,
        origin: &SyntaxNode,
        enclosing: Option<Tree>,
        identifier: Tree,
        rest: &SyntaxNode,
    ) -> Result<Tree, LowerError> {
        let arguments = match find_node(rest, SyntaxKind::Arguments) {
            Some(arguments) => self.arguments(&arguments)?,
            None => return Err(LowerError::malformed(rest.kind())),
        };
        let class_body = match find_node(rest, SyntaxKind::ClassBody) {
            Some(body) => Some(Box::new(self.anonymous_class_body(origin, &body)?)),
            None => None,
        };
        Ok(Tree::NewClass(NewClassTree {
            syntax: origin.clone(),
            line: self.line(origin),
            enclosing_expression: enclosing.map(Box::new),
            identifier: Box::new(identifier),
            arguments,
            class_body,
        }))
    }

    /// An array creator is either initializer-based or carries a non-empty
    /// dimension-expression list.
    fn array_creator_rest(
        &self,
        origin: &SyntaxNode,
        element: Tree,
        rest: &SyntaxNode,
    ) -> Result<Tree, LowerError> {
        if let Some(initializer) = find_node(rest, SyntaxKind::ArrayInitializer) {
            return Ok(Tree::NewArray(NewArrayTree {
                syntax: origin.clone(),
                line: self.line(origin),
                ty: Some(Box::new(element)),
                dimensions: Vec::new(),
                initializers: self.array_initializer_elements(&initializer)?,
            }));
        }

        let mut dimensions = Vec::new();
        if let Some(first) = find_node(rest, SyntaxKind::Expression) {
            dimensions.push(self.expression(&first)?);
        }
        for dim_expr in rest
            .children()
            .filter(|child| child.kind() == SyntaxKind::DimExpr)
        {
            let expression = find_node(&dim_expr, SyntaxKind::Expression)
                .ok_or_else(|| LowerError::malformed(dim_expr.kind()))?;
            dimensions.push(self.expression(&expression)?);
        }
        if dimensions.is_empty() {
            return Err(LowerError::malformed(rest.kind()));
        }
        Ok(Tree::NewArray(NewArrayTree {
            syntax: origin.clone(),
            line: self.line(origin),
            ty: Some(Box::new(element)),
            dimensions,
            initializers: Vec::new(),
        }))
    }

    /// A variable initializer is an expression or a nested array
    /// initializer, which lowers to a type-less `NewArray`.
    pub(crate) fn variable_initializer(&self, node: &SyntaxNode) -> Result<Tree, LowerError> {
        let child = first_node(node)?;
        if child.kind() == SyntaxKind::ArrayInitializer {
            return Ok(Tree::NewArray(NewArrayTree {
                syntax: child.clone(),
                line: self.line(&child),
                ty: None,
                dimensions: Vec::new(),
                initializers: self.array_initializer_elements(&child)?,
            }));
        }
        self.expression(&child)
    }

    fn array_initializer_elements(&self, node: &SyntaxNode) -> Result<Vec<Tree>, LowerError> {
        let mut initializers = Vec::new();
        for child in node
            .children()
            .filter(|child| child.kind() == SyntaxKind::VariableInitializer)
        {
            initializers.push(self.variable_initializer(&child)?);
        }
        Ok(initializers)
    }

    /// Lowers each `Expression` child of an `Arguments` node, in order.
    pub(crate) fn arguments(&self, node: &SyntaxNode) -> Result<Vec<Tree>, LowerError> {
        let mut arguments = Vec::new();
        for child in node
            .children()
            .filter(|child| child.kind() == SyntaxKind::Expression)
        {
            arguments.push(self.expression(&child)?);
        }
        Ok(arguments)
    }

    fn keyword_identifier(&self, origin: &SyntaxNode, name: &str) -> Tree {
        Tree::Identifier(IdentifierTree {
            syntax: origin.clone(),
            line: self.line(origin),
            name: SmolStr::new(name),
        })
    }

    fn select(&self, origin: &SyntaxNode, expression: Tree, identifier: &str) -> Tree {
        Tree::MemberSelect(MemberSelectTree {
            syntax: origin.clone(),
            line: self.line(origin),
            expression: Box::new(expression),
            identifier: SmolStr::new(identifier),
        })
    }

    fn invocation(&self, origin: &SyntaxNode, select: Tree, arguments: Vec<Tree>) -> Tree {
        Tree::MethodInvocation(MethodInvocationTree {
            syntax: origin.clone(),
            line: self.line(origin),
            method_select: Box::new(select),
            arguments,
        })
    }
}

fn as_node(part: Option<&SyntaxElement>, owner: &SyntaxNode) -> Result<SyntaxNode, LowerError> {
    part.and_then(|part| part.as_node())
        .cloned()
        .ok_or_else(|| LowerError::malformed(owner.kind()))
}

fn as_token<'a>(
    part: Option<&'a SyntaxElement>,
    owner: &SyntaxNode,
) -> Result<&'a javert_syntax::SyntaxToken, LowerError> {
    part.and_then(|part| part.as_token())
        .ok_or_else(|| LowerError::malformed(owner.kind()))
}
