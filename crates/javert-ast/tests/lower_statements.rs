//! Lowering tests for statements: control flow, switch grouping, loops, and
//! try forms.

mod common;

use common::*;
use javert_ast::{build_compilation_unit, AstNode, Kind, LowerError, Tree};

/// Lowers a method body's statements and returns the block's contents.
fn lower_body(statements: Vec<Element>) -> Vec<Tree> {
    let root = unit(vec![type_decl(class_decl(
        "A",
        vec![void_method("m", statements)],
    ))]);
    let tree = build_compilation_unit(&root).unwrap();
    let Tree::Class(class) = &tree.types()[0] else {
        panic!("expected class");
    };
    let Tree::Method(method) = &class.members()[0] else {
        panic!("expected method");
    };
    let Some(Tree::Block(block)) = method.body() else {
        panic!("expected body block");
    };
    block.body().to_vec()
}

fn lower_single(statement_element: Element) -> Tree {
    let mut statements = lower_body(vec![statement_element]);
    assert_eq!(statements.len(), 1);
    statements.remove(0)
}

#[test]
fn if_with_parenthesized_literal_condition() {
    let lowered = lower_single(if_stmt(
        par_expression(bool_literal(true)),
        block_stmt(vec![]),
        Some(empty_stmt()),
    ));

    let Tree::If(if_statement) = &lowered else {
        panic!("expected if statement");
    };
    let Tree::Parenthesized(condition) = if_statement.condition() else {
        panic!("expected parenthesized condition");
    };
    assert!(matches!(
        condition.expression(),
        Tree::Literal(literal) if literal.literal_kind() == Kind::BooleanLiteral
    ));
    assert!(matches!(if_statement.then_statement(), Tree::Block(block) if block.body().is_empty()));
    assert!(matches!(
        if_statement.else_statement(),
        Some(Tree::EmptyStatement(_))
    ));
}

#[test]
fn if_without_else() {
    let lowered = lower_single(if_stmt(bool_literal(false), empty_stmt(), None));
    let Tree::If(if_statement) = &lowered else {
        panic!("expected if statement");
    };
    assert!(if_statement.else_statement().is_none());
}

#[test]
fn switch_groups_accumulate_fall_through_labels() {
    // switch(x){ case 1: case 2: f(); case 3: }
    let lowered = lower_single(switch_stmt(
        name(&["x"]),
        vec![
            switch_group(vec![case_label(int_literal("1"))], vec![]),
            switch_group(
                vec![case_label(int_literal("2"))],
                vec![expr_stmt(invocation(&["f"], vec![]))],
            ),
            switch_group(vec![case_label(int_literal("3"))], vec![]),
        ],
    ));

    let Tree::Switch(switch) = &lowered else {
        panic!("expected switch");
    };
    assert_eq!(switch.cases().len(), 2);

    let Tree::CaseGroup(first) = &switch.cases()[0] else {
        panic!("expected case group");
    };
    assert_eq!(first.labels().len(), 2, "fall-through labels join the group");
    assert_eq!(first.body().len(), 1);
    for label in first.labels() {
        assert!(label.is(Kind::CaseLabel));
        let Tree::CaseLabel(label) = label else {
            panic!("expected case label");
        };
        assert!(!label.is_default());
    }

    let Tree::CaseGroup(trailing) = &switch.cases()[1] else {
        panic!("expected case group");
    };
    assert_eq!(trailing.labels().len(), 1);
    assert!(trailing.body().is_empty(), "trailing labels form an empty group");
}

#[test]
fn switch_default_label_has_no_expression() {
    let lowered = lower_single(switch_stmt(
        name(&["x"]),
        vec![switch_group(vec![default_label()], vec![empty_stmt()])],
    ));
    let Tree::Switch(switch) = &lowered else {
        panic!("expected switch");
    };
    let Tree::CaseGroup(group) = &switch.cases()[0] else {
        panic!("expected case group");
    };
    let Tree::CaseLabel(label) = &group.labels()[0] else {
        panic!("expected case label");
    };
    assert!(label.is_default());
    assert!(label.expression().is_none());
}

#[test]
fn while_and_do_while() {
    let lowered = lower_single(statement(node(
        K::WhileStatement,
        [
            token(K::KwWhile, "while"),
            par_expression(bool_literal(true)),
            empty_stmt(),
        ],
    )));
    assert!(matches!(lowered, Tree::While(_)));
    assert!(lowered.is(Kind::WhileStatement));

    let lowered = lower_single(statement(node(
        K::DoStatement,
        [
            token(K::KwDo, "do"),
            empty_stmt(),
            token(K::KwWhile, "while"),
            par_expression(bool_literal(true)),
            token(K::Semi, ";"),
        ],
    )));
    let Tree::DoWhile(do_while) = &lowered else {
        panic!("expected do statement");
    };
    assert!(matches!(do_while.statement(), Tree::EmptyStatement(_)));
    assert!(lowered.is(Kind::DoStatement));
}

#[test]
fn classical_for_with_declaration_init() {
    // for (int i = 0; i < 10; i++) ;
    let for_init = node(
        K::ForInit,
        [
            ty_int(),
            ws(),
            variable_declarators(vec![declarator(
                "i",
                0,
                Some(expression(int_literal("0"))),
            )]),
        ],
    );
    let condition = expression(node(
        K::RelationalExpression,
        [name(&["i"]), token(K::Lt, "<"), int_literal("10")],
    ));
    let update = node(
        K::ForUpdate,
        [node(
            K::StatementExpression,
            [unary(vec![name(&["i"]), token(K::PlusPlus, "++")])],
        )],
    );
    let lowered = lower_single(statement(node(
        K::ForStatement,
        [
            token(K::KwFor, "for"),
            token(K::LParen, "("),
            for_init,
            token(K::Semi, ";"),
            condition,
            token(K::Semi, ";"),
            update,
            token(K::RParen, ")"),
            empty_stmt(),
        ],
    )));

    let Tree::For(for_statement) = &lowered else {
        panic!("expected for statement");
    };
    assert_eq!(for_statement.initializer().len(), 1);
    assert!(for_statement.initializer()[0].is(Kind::Variable));
    assert!(matches!(for_statement.condition(), Some(Tree::Binary(binary)) if binary.op() == Kind::LessThan));
    assert_eq!(for_statement.update().len(), 1);
    let Tree::ExpressionStatement(update) = &for_statement.update()[0] else {
        panic!("expected expression statement update");
    };
    assert!(matches!(update.expression(), Tree::Unary(unary) if unary.op() == Kind::PostfixIncrement));
}

#[test]
fn classical_for_with_expression_init() {
    // for (i = 0, j = 1; ; ) ;
    let assign =
        |target: &str, value: &str| {
            node(
                K::StatementExpression,
                [node(
                    K::AssignmentExpression,
                    [
                        name(&[target]),
                        token(K::Eq, "="),
                        int_literal(value),
                    ],
                )],
            )
        };
    let for_init = node(K::ForInit, [assign("i", "0"), token(K::Comma, ","), assign("j", "1")]);
    let lowered = lower_single(statement(node(
        K::ForStatement,
        [
            token(K::KwFor, "for"),
            token(K::LParen, "("),
            for_init,
            token(K::Semi, ";"),
            token(K::Semi, ";"),
            token(K::RParen, ")"),
            empty_stmt(),
        ],
    )));

    let Tree::For(for_statement) = &lowered else {
        panic!("expected for statement");
    };
    assert_eq!(for_statement.initializer().len(), 2);
    for initializer in for_statement.initializer() {
        assert!(initializer.is(Kind::ExpressionStatement));
    }
    assert!(for_statement.condition().is_none());
    assert!(for_statement.update().is_empty());
}

#[test]
fn enhanced_for_lowers_parameter_and_iterable() {
    // for (String s : xs) ;
    let lowered = lower_single(statement(node(
        K::ForStatement,
        [
            token(K::KwFor, "for"),
            token(K::LParen, "("),
            formal_parameter(ty_class("String"), "s"),
            token(K::Colon, ":"),
            expression(name(&["xs"])),
            token(K::RParen, ")"),
            empty_stmt(),
        ],
    )));

    let Tree::ForEach(for_each) = &lowered else {
        panic!("expected enhanced for");
    };
    assert!(lowered.is(Kind::EnhancedForStatement));
    let Tree::Variable(variable) = for_each.variable() else {
        panic!("expected loop variable");
    };
    assert_eq!(variable.simple_name(), "s");
    assert!(matches!(for_each.expression(), Tree::Identifier(identifier) if identifier.name() == "xs"));
}

#[test]
fn labeled_break_continue_return_throw() {
    let lowered = lower_single(statement(node(
        K::LabeledStatement,
        [ident("outer"), token(K::Colon, ":"), empty_stmt()],
    )));
    let Tree::LabeledStatement(labeled) = &lowered else {
        panic!("expected labeled statement");
    };
    assert_eq!(labeled.label(), "outer");

    let lowered = lower_single(statement(node(
        K::BreakStatement,
        [token(K::KwBreak, "break"), ws(), ident("outer"), token(K::Semi, ";")],
    )));
    let Tree::Break(break_statement) = &lowered else {
        panic!("expected break");
    };
    assert_eq!(break_statement.label(), Some("outer"));

    let lowered = lower_single(statement(node(
        K::ContinueStatement,
        [token(K::KwContinue, "continue"), token(K::Semi, ";")],
    )));
    let Tree::Continue(continue_statement) = &lowered else {
        panic!("expected continue");
    };
    assert!(continue_statement.label().is_none());

    let lowered = lower_single(statement(node(
        K::ReturnStatement,
        [token(K::KwReturn, "return"), ws(), expression(int_literal("1")), token(K::Semi, ";")],
    )));
    let Tree::Return(return_statement) = &lowered else {
        panic!("expected return");
    };
    assert!(return_statement.expression().is_some());

    let lowered = lower_single(statement(node(
        K::ThrowStatement,
        [token(K::KwThrow, "throw"), ws(), expression(name(&["e"])), token(K::Semi, ";")],
    )));
    assert!(lowered.is(Kind::ThrowStatement));
}

#[test]
fn assert_with_detail() {
    let lowered = lower_single(statement(node(
        K::AssertStatement,
        [
            token(K::KwAssert, "assert"),
            ws(),
            expression(bool_literal(true)),
            token(K::Colon, ":"),
            expression(string_literal("\"m\"")),
            token(K::Semi, ";"),
        ],
    )));
    let Tree::Assert(assert_statement) = &lowered else {
        panic!("expected assert");
    };
    assert!(assert_statement.detail().is_some());
}

#[test]
fn synchronized_statement() {
    let lowered = lower_single(statement(node(
        K::SynchronizedStatement,
        [
            token(K::KwSynchronized, "synchronized"),
            par_expression(name(&["lock"])),
            block(vec![]),
        ],
    )));
    let Tree::Synchronized(synchronized) = &lowered else {
        panic!("expected synchronized");
    };
    assert!(matches!(synchronized.expression(), Tree::Identifier(_)));
}

#[test]
fn local_variable_declarations_expand_in_blocks() {
    // int a = 1, b[] = null;
    let statements = lower_body(vec![local_var(
        ty_int(),
        vec![
            declarator("a", 0, Some(expression(int_literal("1")))),
            declarator("b", 1, Some(expression(null_literal()))),
        ],
    )]);

    assert_eq!(statements.len(), 2);
    let Tree::Variable(a) = &statements[0] else {
        panic!("expected variable");
    };
    assert_eq!(a.simple_name(), "a");
    let Tree::Variable(b) = &statements[1] else {
        panic!("expected variable");
    };
    assert_eq!(b.simple_name(), "b");
    assert!(matches!(b.ty(), Tree::ArrayType(_)));
}

#[test]
fn local_class_lowers_with_empty_modifiers() {
    let statements = lower_body(vec![class_decl("Local", vec![])]);
    let Tree::Class(class) = &statements[0] else {
        panic!("expected local class");
    };
    assert!(class.modifiers().is_empty());
}

#[test]
fn plain_try_with_catch_and_finally() {
    let catch_clause = node(
        K::CatchClause,
        [
            token(K::KwCatch, "catch"),
            token(K::LParen, "("),
            node(
                K::CatchFormalParameter,
                [
                    node(K::CatchType, [qualified(&["E1"])]),
                    ws(),
                    node(K::VariableDeclaratorId, [ident("e")]),
                ],
            ),
            token(K::RParen, ")"),
            block(vec![]),
        ],
    );
    let lowered = lower_single(statement(node(
        K::TryStatement,
        [
            token(K::KwTry, "try"),
            block(vec![empty_stmt()]),
            catch_clause,
            node(K::Finally, [token(K::KwFinally, "finally"), block(vec![])]),
        ],
    )));

    let Tree::Try(try_statement) = &lowered else {
        panic!("expected try");
    };
    assert!(try_statement.resources().is_empty());
    assert!(matches!(try_statement.block(), Tree::Block(block) if block.body().len() == 1));
    assert_eq!(try_statement.catches().len(), 1);
    assert!(try_statement.finally_block().is_some());

    let Tree::Catch(catch) = &try_statement.catches()[0] else {
        panic!("expected catch");
    };
    let Tree::Variable(parameter) = catch.parameter() else {
        panic!("expected catch parameter");
    };
    assert_eq!(parameter.simple_name(), "e");
    assert!(matches!(parameter.ty(), Tree::Identifier(identifier) if identifier.name() == "E1"));
    assert!(parameter.initializer().is_none());
}

#[test]
fn multi_catch_takes_first_alternative() {
    let catch_clause = node(
        K::CatchClause,
        [
            token(K::KwCatch, "catch"),
            token(K::LParen, "("),
            node(
                K::CatchFormalParameter,
                [
                    node(
                        K::CatchType,
                        [qualified(&["E1"]), token(K::Pipe, "|"), qualified(&["E2"])],
                    ),
                    ws(),
                    node(K::VariableDeclaratorId, [ident("e")]),
                ],
            ),
            token(K::RParen, ")"),
            block(vec![]),
        ],
    );
    let lowered = lower_single(statement(node(
        K::TryStatement,
        [token(K::KwTry, "try"), block(vec![]), catch_clause],
    )));

    let Tree::Try(try_statement) = &lowered else {
        panic!("expected try");
    };
    let Tree::Catch(catch) = &try_statement.catches()[0] else {
        panic!("expected catch");
    };
    let Tree::Variable(parameter) = catch.parameter() else {
        panic!("expected catch parameter");
    };
    assert!(matches!(parameter.ty(), Tree::Identifier(identifier) if identifier.name() == "E1"));
}

#[test]
fn try_with_resources() {
    let resource = node(
        K::Resource,
        [
            ty_class("Reader"),
            ws(),
            node(K::VariableDeclaratorId, [ident("r")]),
            token(K::Eq, "="),
            expression(invocation(&["open"], vec![])),
        ],
    );
    let lowered = lower_single(statement(node(
        K::TryStatement,
        [node(
            K::TryWithResourcesStatement,
            [
                token(K::KwTry, "try"),
                node(
                    K::ResourceSpecification,
                    [token(K::LParen, "("), resource, token(K::RParen, ")")],
                ),
                block(vec![]),
            ],
        )],
    )));

    let Tree::Try(try_statement) = &lowered else {
        panic!("expected try");
    };
    assert_eq!(try_statement.resources().len(), 1);
    let Tree::Variable(resource) = &try_statement.resources()[0] else {
        panic!("expected resource variable");
    };
    assert_eq!(resource.simple_name(), "r");
    assert!(resource.initializer().is_some());
    assert!(try_statement.catches().is_empty());
    assert!(try_statement.finally_block().is_none());
}

#[test]
fn statement_lines_come_from_token_positions() {
    // Two statements on separate lines.
    let statements = lower_body(vec![nl(), empty_stmt(), nl(), empty_stmt()]);
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0].line(), 2);
    assert_eq!(statements[1].line(), 3);
}

#[test]
fn unknown_statement_child_is_malformed() {
    let root = unit(vec![type_decl(class_decl(
        "A",
        vec![void_method("m", vec![statement(expression(int_literal("1")))])],
    ))]);
    let error = build_compilation_unit(&root).unwrap_err();
    assert!(matches!(error, LowerError::MalformedAst { .. }));
}
