//! Lowering of statements: blocks, control flow, switch grouping, and try
//! forms.

use javert_syntax::{SyntaxKind, SyntaxNode};

use super::{find_node, find_token, first_node, token_text, Lower};
use crate::error::LowerError;
use crate::kind::Kind;
use crate::tree::{
    AssertStatementTree, BlockTree, BreakStatementTree, CaseGroupTree, CaseLabelTree, CatchTree,
    ContinueStatementTree, DoWhileStatementTree, EmptyStatementTree, ExpressionStatementTree,
    ForEachStatementTree, ForStatementTree, IfStatementTree, LabeledStatementTree,
    ReturnStatementTree, SwitchStatementTree, SynchronizedStatementTree, ThrowStatementTree,
    Tree, TryStatementTree, WhileStatementTree,
};

impl Lower {
    /// Dispatches on the single child of a `Statement` node.
    pub(crate) fn statement(&self, node: &SyntaxNode) -> Result<Tree, LowerError> {
        let child = first_node(node)?;
        match child.kind() {
            SyntaxKind::Block => self.block_of_kind(&child, Kind::Block),
            SyntaxKind::EmptyStatement => Ok(Tree::EmptyStatement(EmptyStatementTree {
                syntax: child.clone(),
                line: self.line(&child),
            })),
            SyntaxKind::LabeledStatement => {
                let label = find_token(&child, SyntaxKind::Ident)
                    .ok_or_else(|| LowerError::malformed(child.kind()))?;
                let statement = find_node(&child, SyntaxKind::Statement)
                    .ok_or_else(|| LowerError::malformed(child.kind()))?;
                Ok(Tree::LabeledStatement(LabeledStatementTree {
                    syntax: child.clone(),
                    line: self.line(&child),
                    label: token_text(&label),
                    statement: Box::new(self.statement(&statement)?),
                }))
            }
            SyntaxKind::ExpressionStatement => {
                let expression = first_node(&child)?;
                Ok(Tree::ExpressionStatement(ExpressionStatementTree {
                    syntax: child.clone(),
                    line: self.line(&child),
                    expression: Box::new(self.expression(&expression)?),
                }))
            }
            SyntaxKind::IfStatement => self.if_statement(&child),
            SyntaxKind::AssertStatement => self.assert_statement(&child),
            SyntaxKind::SwitchStatement => self.switch_statement(&child),
            SyntaxKind::WhileStatement => {
                let condition = self.par_expression_inner(&child)?;
                let statement = find_node(&child, SyntaxKind::Statement)
                    .ok_or_else(|| LowerError::malformed(child.kind()))?;
                Ok(Tree::While(WhileStatementTree {
                    syntax: child.clone(),
                    line: self.line(&child),
                    condition: Box::new(condition),
                    statement: Box::new(self.statement(&statement)?),
                }))
            }
            SyntaxKind::DoStatement => {
                let statement = find_node(&child, SyntaxKind::Statement)
                    .ok_or_else(|| LowerError::malformed(child.kind()))?;
                let condition = self.par_expression_inner(&child)?;
                Ok(Tree::DoWhile(DoWhileStatementTree {
                    syntax: child.clone(),
                    line: self.line(&child),
                    statement: Box::new(self.statement(&statement)?),
                    condition: Box::new(condition),
                }))
            }
            SyntaxKind::ForStatement => self.for_statement(&child),
            SyntaxKind::BreakStatement => Ok(Tree::Break(BreakStatementTree {
                syntax: child.clone(),
                line: self.line(&child),
                label: find_token(&child, SyntaxKind::Ident)
                    .map(|token| token_text(&token)),
            })),
            SyntaxKind::ContinueStatement => Ok(Tree::Continue(ContinueStatementTree {
                syntax: child.clone(),
                line: self.line(&child),
                label: find_token(&child, SyntaxKind::Ident)
                    .map(|token| token_text(&token)),
            })),
            SyntaxKind::ReturnStatement => {
                let expression = match find_node(&child, SyntaxKind::Expression) {
                    Some(expression) => Some(Box::new(self.expression(&expression)?)),
                    None => None,
                };
                Ok(Tree::Return(ReturnStatementTree {
                    syntax: child.clone(),
                    line: self.line(&child),
                    expression,
                }))
            }
            SyntaxKind::ThrowStatement => {
                let expression = find_node(&child, SyntaxKind::Expression)
                    .ok_or_else(|| LowerError::malformed(child.kind()))?;
                Ok(Tree::Throw(ThrowStatementTree {
                    syntax: child.clone(),
                    line: self.line(&child),
                    expression: Box::new(self.expression(&expression)?),
                }))
            }
            SyntaxKind::SynchronizedStatement => {
                let expression = self.par_expression_inner(&child)?;
                let block = find_node(&child, SyntaxKind::Block)
                    .ok_or_else(|| LowerError::malformed(child.kind()))?;
                Ok(Tree::Synchronized(SynchronizedStatementTree {
                    syntax: child.clone(),
                    line: self.line(&child),
                    expression: Box::new(expression),
                    block: Box::new(self.block_of_kind(&block, Kind::Block)?),
                }))
            }
            SyntaxKind::TryStatement => self.try_statement(&child),
            _ => Err(LowerError::malformed(child.kind())),
        }
    }

    /// Lowers a `Block` node to a block of the given kind (`Block`,
    /// `Initializer`, or `StaticInitializer`).
    pub(crate) fn block_of_kind(
        &self,
        node: &SyntaxNode,
        kind: Kind,
    ) -> Result<Tree, LowerError> {
        let body = match find_node(node, SyntaxKind::BlockStatements) {
            Some(statements) => self.block_statements(&statements)?,
            None => Vec::new(),
        };
        Ok(Tree::Block(BlockTree {
            syntax: node.clone(),
            line: self.line(node),
            kind,
            body,
        }))
    }

    /// Concatenates the statements of a `BlockStatements` node: statements
    /// recurse, local variable declarations expand into their declarators,
    /// and local type declarations lower with empty modifiers.
    fn block_statements(&self, node: &SyntaxNode) -> Result<Vec<Tree>, LowerError> {
        let mut statements = Vec::new();
        for child in node.children() {
            match child.kind() {
                SyntaxKind::Statement => statements.push(self.statement(&child)?),
                SyntaxKind::LocalVariableDeclarationStatement => {
                    statements.extend(self.local_variable_declaration(&child)?);
                }
                SyntaxKind::ClassDeclaration
                | SyntaxKind::InterfaceDeclaration
                | SyntaxKind::EnumDeclaration
                | SyntaxKind::AnnotationTypeDeclaration => {
                    let modifiers = self.empty_modifiers(&child);
                    statements.push(self.type_like(modifiers, &child)?);
                }
                _ => return Err(LowerError::malformed(child.kind())),
            }
        }
        Ok(statements)
    }

    fn local_variable_declaration(&self, node: &SyntaxNode) -> Result<Vec<Tree>, LowerError> {
        let modifiers = self.modifiers_of(node)?;
        let ty_node = find_node(node, SyntaxKind::Type)
            .ok_or_else(|| LowerError::malformed(node.kind()))?;
        let base_ty = self.ty(&ty_node)?;
        let declarators = find_node(node, SyntaxKind::VariableDeclarators)
            .ok_or_else(|| LowerError::malformed(node.kind()))?;
        self.variable_declarators(&modifiers, &base_ty, &declarators)
    }

    fn if_statement(&self, node: &SyntaxNode) -> Result<Tree, LowerError> {
        let condition = self.par_expression_inner(node)?;
        let mut branches = node
            .children()
            .filter(|child| child.kind() == SyntaxKind::Statement);
        let then_statement = branches
            .next()
            .ok_or_else(|| LowerError::malformed(node.kind()))?;
        let else_statement = match branches.next() {
            Some(statement) => Some(Box::new(self.statement(&statement)?)),
            None => None,
        };
        Ok(Tree::If(IfStatementTree {
            syntax: node.clone(),
            line: self.line(node),
            condition: Box::new(condition),
            then_statement: Box::new(self.statement(&then_statement)?),
            else_statement,
        }))
    }

    fn assert_statement(&self, node: &SyntaxNode) -> Result<Tree, LowerError> {
        let mut expressions = node
            .children()
            .filter(|child| child.kind() == SyntaxKind::Expression);
        let condition = expressions
            .next()
            .ok_or_else(|| LowerError::malformed(node.kind()))?;
        let detail = match expressions.next() {
            Some(expression) => Some(Box::new(self.expression(&expression)?)),
            None => None,
        };
        Ok(Tree::Assert(AssertStatementTree {
            syntax: node.clone(),
            line: self.line(node),
            condition: Box::new(self.expression(&condition)?),
            detail,
        }))
    }

    /// Walks the switch groups in order, accumulating pending labels until a
    /// group carries statements; trailing labels form a final empty group.
    fn switch_statement(&self, node: &SyntaxNode) -> Result<Tree, LowerError> {
        let expression = self.par_expression_inner(node)?;

        let mut cases = Vec::new();
        let mut pending: Vec<Tree> = Vec::new();
        let mut last_group: Option<SyntaxNode> = None;
        for group in node
            .children()
            .filter(|child| child.kind() == SyntaxKind::SwitchBlockStatementGroup)
        {
            for label in group
                .children()
                .filter(|child| child.kind() == SyntaxKind::SwitchLabel)
            {
                pending.push(self.switch_label(&label)?);
            }
            let body = match find_node(&group, SyntaxKind::BlockStatements) {
                Some(statements) => self.block_statements(&statements)?,
                None => Vec::new(),
            };
            if !body.is_empty() {
                cases.push(Tree::CaseGroup(CaseGroupTree {
                    syntax: group.clone(),
                    line: self.line(&group),
                    labels: std::mem::take(&mut pending),
                    body,
                }));
            }
            last_group = Some(group);
        }
        if !pending.is_empty() {
            let group = last_group.ok_or_else(|| LowerError::malformed(node.kind()))?;
            cases.push(Tree::CaseGroup(CaseGroupTree {
                syntax: group.clone(),
                line: self.line(&group),
                labels: pending,
                body: Vec::new(),
            }));
        }

        Ok(Tree::Switch(SwitchStatementTree {
            syntax: node.clone(),
            line: self.line(node),
            expression: Box::new(expression),
            cases,
        }))
    }

    /// A label is expression-bearing when it carries a constant expression
    /// (`case X:`); otherwise it is the default label.
    fn switch_label(&self, node: &SyntaxNode) -> Result<Tree, LowerError> {
        let expression = match find_node(node, SyntaxKind::ConstantExpression) {
            Some(constant) => Some(Box::new(self.expression(&constant)?)),
            None => None,
        };
        Ok(Tree::CaseLabel(CaseLabelTree {
            syntax: node.clone(),
            line: self.line(node),
            expression,
        }))
    }

    fn for_statement(&self, node: &SyntaxNode) -> Result<Tree, LowerError> {
        let statement = find_node(node, SyntaxKind::Statement)
            .ok_or_else(|| LowerError::malformed(node.kind()))?;

        if let Some(parameter) = find_node(node, SyntaxKind::FormalParameter) {
            let mut variables = self.formal_parameters(&parameter)?;
            if variables.len() != 1 {
                return Err(LowerError::malformed(parameter.kind()));
            }
            let expression = find_node(node, SyntaxKind::Expression)
                .ok_or_else(|| LowerError::malformed(node.kind()))?;
            return Ok(Tree::ForEach(ForEachStatementTree {
                syntax: node.clone(),
                line: self.line(node),
                variable: Box::new(variables.remove(0)),
                expression: Box::new(self.expression(&expression)?),
                statement: Box::new(self.statement(&statement)?),
            }));
        }

        let initializer = match find_node(node, SyntaxKind::ForInit) {
            Some(init) => self.for_init(&init)?,
            None => Vec::new(),
        };
        let condition = match find_node(node, SyntaxKind::Expression) {
            Some(expression) => Some(Box::new(self.expression(&expression)?)),
            None => None,
        };
        let update = match find_node(node, SyntaxKind::ForUpdate) {
            Some(update) => self.statement_expressions(&update)?,
            None => Vec::new(),
        };
        Ok(Tree::For(ForStatementTree {
            syntax: node.clone(),
            line: self.line(node),
            initializer,
            condition,
            update,
            statement: Box::new(self.statement(&statement)?),
        }))
    }

    /// A for-init is either a declarator expansion (when a type is present)
    /// or a list of expression statements.
    fn for_init(&self, node: &SyntaxNode) -> Result<Vec<Tree>, LowerError> {
        if let Some(ty_node) = find_node(node, SyntaxKind::Type) {
            let modifiers = self.modifiers_of(node)?;
            let base_ty = self.ty(&ty_node)?;
            let declarators = find_node(node, SyntaxKind::VariableDeclarators)
                .ok_or_else(|| LowerError::malformed(node.kind()))?;
            return self.variable_declarators(&modifiers, &base_ty, &declarators);
        }
        self.statement_expressions(node)
    }

    /// Wraps each `StatementExpression` child in an expression statement.
    fn statement_expressions(&self, node: &SyntaxNode) -> Result<Vec<Tree>, LowerError> {
        let mut statements = Vec::new();
        for child in node
            .children()
            .filter(|child| child.kind() == SyntaxKind::StatementExpression)
        {
            statements.push(Tree::ExpressionStatement(ExpressionStatementTree {
                syntax: child.clone(),
                line: self.line(&child),
                expression: Box::new(self.expression(&child)?),
            }));
        }
        Ok(statements)
    }

    fn try_statement(&self, node: &SyntaxNode) -> Result<Tree, LowerError> {
        let inner = find_node(node, SyntaxKind::TryWithResourcesStatement)
            .unwrap_or_else(|| node.clone());

        let resources = match find_node(&inner, SyntaxKind::ResourceSpecification) {
            Some(specification) => self.resources(&specification)?,
            None => Vec::new(),
        };
        let block = find_node(&inner, SyntaxKind::Block)
            .ok_or_else(|| LowerError::malformed(inner.kind()))?;
        let mut catches = Vec::new();
        for clause in inner
            .children()
            .filter(|child| child.kind() == SyntaxKind::CatchClause)
        {
            catches.push(self.catch_clause(&clause)?);
        }
        let finally_block = match find_node(&inner, SyntaxKind::Finally) {
            Some(finally) => {
                let block = find_node(&finally, SyntaxKind::Block)
                    .ok_or_else(|| LowerError::malformed(finally.kind()))?;
                Some(Box::new(self.block_of_kind(&block, Kind::Block)?))
            }
            None => None,
        };

        Ok(Tree::Try(TryStatementTree {
            syntax: node.clone(),
            line: self.line(node),
            resources,
            block: Box::new(self.block_of_kind(&block, Kind::Block)?),
            catches,
            finally_block,
        }))
    }

    fn resources(&self, node: &SyntaxNode) -> Result<Vec<Tree>, LowerError> {
        let mut resources = Vec::new();
        for resource in node
            .children()
            .filter(|child| child.kind() == SyntaxKind::Resource)
        {
            let ty_node = resource
                .children()
                .find(|child| {
                    matches!(
                        child.kind(),
                        SyntaxKind::Type
                            | SyntaxKind::ReferenceType
                            | SyntaxKind::ClassType
                            | SyntaxKind::QualifiedIdentifier
                    )
                })
                .ok_or_else(|| LowerError::malformed(resource.kind()))?;
            let ty = self.ty(&ty_node)?;
            let declarator_id = find_node(&resource, SyntaxKind::VariableDeclaratorId)
                .ok_or_else(|| LowerError::malformed(resource.kind()))?;
            let expression = find_node(&resource, SyntaxKind::Expression)
                .ok_or_else(|| LowerError::malformed(resource.kind()))?;
            let initializer = self.expression(&expression)?;
            resources.push(self.declarator_id_variable(
                &resource,
                &declarator_id,
                ty,
                Some(initializer),
            )?);
        }
        Ok(resources)
    }

    /// The catch parameter's declared type is the first alternative of the
    /// (possibly unioned) catch type.
    fn catch_clause(&self, node: &SyntaxNode) -> Result<Tree, LowerError> {
        let parameter = find_node(node, SyntaxKind::CatchFormalParameter)
            .ok_or_else(|| LowerError::malformed(node.kind()))?;
        let catch_type = find_node(&parameter, SyntaxKind::CatchType)
            .ok_or_else(|| LowerError::malformed(parameter.kind()))?;
        let first_type = find_node(&catch_type, SyntaxKind::QualifiedIdentifier)
            .ok_or_else(|| LowerError::malformed(catch_type.kind()))?;
        let ty = self.identifier_chain(&first_type)?;
        let declarator_id = find_node(&parameter, SyntaxKind::VariableDeclaratorId)
            .ok_or_else(|| LowerError::malformed(parameter.kind()))?;
        let variable = self.declarator_id_variable(&parameter, &declarator_id, ty, None)?;
        let block = find_node(node, SyntaxKind::Block)
            .ok_or_else(|| LowerError::malformed(node.kind()))?;
        Ok(Tree::Catch(CatchTree {
            syntax: node.clone(),
            line: self.line(node),
            parameter: Box::new(variable),
            block: Box::new(self.block_of_kind(&block, Kind::Block)?),
        }))
    }
}
