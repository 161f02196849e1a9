//! Lowering tests for expressions: folds, primaries, suffixes, selectors,
//! and creators.

mod common;

use common::*;
use expect_test::expect;
use javert_ast::{build_compilation_unit, dump, Kind, LowerError, Tree};

/// Lowers a single expression statement and returns its expression.
fn lower_expr(child: Element) -> Tree {
    let root = unit(vec![type_decl(class_decl(
        "A",
        vec![void_method("m", vec![expr_stmt(child)])],
    ))]);
    let tree = build_compilation_unit(&root).unwrap();
    let Tree::Class(class) = &tree.types()[0] else {
        panic!("expected class");
    };
    let Tree::Method(method) = &class.members()[0] else {
        panic!("expected method");
    };
    let Some(Tree::Block(block)) = method.body() else {
        panic!("expected body");
    };
    let Tree::ExpressionStatement(statement) = &block.body()[0] else {
        panic!("expected expression statement");
    };
    statement.expression().clone()
}

#[test]
fn qualified_invocation_with_binary_argument() {
    // a.b.c(1+2)
    let lowered = lower_expr(invocation(
        &["a", "b", "c"],
        vec![additive(vec![int_literal("1"), token(K::Plus, "+"), int_literal("2")])],
    ));

    expect![[r#"
        MethodInvocation
          MemberSelect `c`
            MemberSelect `b`
              Identifier `a`
          Binary Plus
            IntLiteral `1`
            IntLiteral `2`
    "#]]
    .assert_eq(&dump::dump(&lowered));

    let Tree::MethodInvocation(call) = &lowered else {
        panic!("expected invocation");
    };
    assert_eq!(call.arguments().len(), 1);
    assert!(call.arguments()[0].is(Kind::Plus));
}

#[test]
fn binary_chain_folds_left() {
    // 1 + 2 - 3 == Binary(Minus, Binary(Plus, 1, 2), 3)
    let lowered = lower_expr(additive(vec![
        int_literal("1"),
        token(K::Plus, "+"),
        int_literal("2"),
        token(K::Minus, "-"),
        int_literal("3"),
    ]));

    let Tree::Binary(outer) = &lowered else {
        panic!("expected binary");
    };
    assert_eq!(outer.op(), Kind::Minus);
    let Tree::Binary(inner) = outer.left_operand() else {
        panic!("expected nested binary");
    };
    assert_eq!(inner.op(), Kind::Plus);
    assert!(matches!(outer.right_operand(), Tree::Literal(literal) if literal.value() == "3"));
}

#[test]
fn instance_of_is_a_leaf_case() {
    // x instanceof T
    let lowered = lower_expr(node(
        K::RelationalExpression,
        [
            name(&["x"]),
            token(K::KwInstanceof, "instanceof"),
            node(K::ReferenceType, [class_type("T")]),
        ],
    ));

    let Tree::InstanceOf(instance_of) = &lowered else {
        panic!("expected instanceof");
    };
    assert!(matches!(instance_of.expression(), Tree::Identifier(identifier) if identifier.name() == "x"));
    assert!(matches!(instance_of.ty(), Tree::Identifier(identifier) if identifier.name() == "T"));
    assert!(lowered.is(Kind::InstanceOf));
}

#[test]
fn conditional_folds_right() {
    // a ? b : c ? d : e == Conditional(a, b, Conditional(c, d, e))
    let lowered = lower_expr(node(
        K::ConditionalExpression,
        [
            name(&["a"]),
            token(K::Question, "?"),
            expression(name(&["b"])),
            token(K::Colon, ":"),
            name(&["c"]),
            token(K::Question, "?"),
            expression(name(&["d"])),
            token(K::Colon, ":"),
            name(&["e"]),
        ],
    ));

    let Tree::Conditional(outer) = &lowered else {
        panic!("expected conditional");
    };
    assert!(matches!(outer.condition(), Tree::Identifier(identifier) if identifier.name() == "a"));
    assert!(matches!(outer.true_expression(), Tree::Identifier(identifier) if identifier.name() == "b"));
    let Tree::Conditional(inner) = outer.false_expression() else {
        panic!("expected nested conditional");
    };
    assert!(matches!(inner.condition(), Tree::Identifier(identifier) if identifier.name() == "c"));
}

#[test]
fn assignment_folds_right_and_keeps_operator() {
    // a = b = c
    let lowered = lower_expr(node(
        K::AssignmentExpression,
        [
            name(&["a"]),
            token(K::Eq, "="),
            name(&["b"]),
            token(K::Eq, "="),
            name(&["c"]),
        ],
    ));

    let Tree::Assignment(outer) = &lowered else {
        panic!("expected assignment");
    };
    assert_eq!(outer.op(), Kind::Assignment);
    assert!(matches!(outer.variable(), Tree::Identifier(identifier) if identifier.name() == "a"));
    let Tree::Assignment(inner) = outer.expression() else {
        panic!("expected nested assignment");
    };
    assert!(matches!(inner.variable(), Tree::Identifier(identifier) if identifier.name() == "b"));

    // a += 1
    let lowered = lower_expr(node(
        K::AssignmentExpression,
        [name(&["a"]), token(K::PlusEq, "+="), int_literal("1")],
    ));
    assert!(lowered.is(Kind::PlusAssignment));
}

#[test]
fn type_cast_and_prefix_unary() {
    // (int) x
    let lowered = lower_expr(unary(vec![
        token(K::LParen, "("),
        node(K::Type, [basic_type(K::KwInt, "int")]),
        token(K::RParen, ")"),
        unary(vec![name(&["x"])]),
    ]));
    let Tree::TypeCast(cast) = &lowered else {
        panic!("expected cast");
    };
    assert!(matches!(cast.ty(), Tree::PrimitiveType(ty) if ty.name() == "int"));
    assert!(matches!(cast.expression(), Tree::Identifier(_)));

    // !x
    let lowered = lower_expr(unary(vec![token(K::Bang, "!"), unary(vec![name(&["x"])])]));
    assert!(lowered.is(Kind::LogicalComplement));

    // -x
    let lowered = lower_expr(unary(vec![token(K::Minus, "-"), unary(vec![name(&["x"])])]));
    assert!(lowered.is(Kind::UnaryMinus));
}

#[test]
fn postfix_operators_apply_after_selectors() {
    // a.b++
    let lowered = lower_expr(unary(vec![
        name(&["a"]),
        node(K::Selector, [token(K::Dot, "."), ident("b")]),
        token(K::PlusPlus, "++"),
    ]));

    let Tree::Unary(postfix) = &lowered else {
        panic!("expected unary");
    };
    assert_eq!(postfix.op(), Kind::PostfixIncrement);
    let Tree::MemberSelect(select) = postfix.expression() else {
        panic!("expected member select");
    };
    assert_eq!(select.identifier(), "b");
}

#[test]
fn selector_invocation_and_array_access() {
    // a.f(1)[0]
    let lowered = lower_expr(unary(vec![
        name(&["a"]),
        node(
            K::Selector,
            [token(K::Dot, "."), ident("f"), arguments(vec![int_literal("1")])],
        ),
        node(
            K::Selector,
            [
                token(K::LBracket, "["),
                expression(int_literal("0")),
                token(K::RBracket, "]"),
            ],
        ),
    ]));

    let Tree::ArrayAccess(access) = &lowered else {
        panic!("expected array access");
    };
    let Tree::MethodInvocation(call) = access.expression() else {
        panic!("expected invocation");
    };
    let Tree::MemberSelect(select) = call.method_select() else {
        panic!("expected member select");
    };
    assert_eq!(select.identifier(), "f");
    assert!(matches!(access.index(), Tree::Literal(_)));
}

#[test]
fn parenthesized_primary() {
    // ((true))
    let lowered = lower_expr(primary(vec![par_expression(bool_literal(true))]));
    let Tree::Parenthesized(parenthesized) = &lowered else {
        panic!("expected parenthesized");
    };
    assert!(parenthesized.expression().is(Kind::BooleanLiteral));
    assert!(lowered.is(Kind::ParenthesizedExpression));
}

#[test]
fn this_and_super_forms() {
    // this(1)
    let lowered = lower_expr(primary(vec![
        token(K::KwThis, "this"),
        arguments(vec![int_literal("1")]),
    ]));
    let Tree::MethodInvocation(call) = &lowered else {
        panic!("expected invocation");
    };
    assert!(matches!(call.method_select(), Tree::Identifier(identifier) if identifier.name() == "this"));

    // super.m(1)
    let lowered = lower_expr(primary(vec![
        token(K::KwSuper, "super"),
        node(
            K::SuperSuffix,
            [token(K::Dot, "."), ident("m"), arguments(vec![int_literal("1")])],
        ),
    ]));
    let Tree::MethodInvocation(call) = &lowered else {
        panic!("expected invocation");
    };
    let Tree::MemberSelect(select) = call.method_select() else {
        panic!("expected member select");
    };
    assert_eq!(select.identifier(), "m");
    assert!(matches!(select.expression(), Tree::Identifier(identifier) if identifier.name() == "super"));

    // super(1)
    let lowered = lower_expr(primary(vec![
        token(K::KwSuper, "super"),
        node(K::SuperSuffix, [arguments(vec![int_literal("1")])]),
    ]));
    let Tree::MethodInvocation(call) = &lowered else {
        panic!("expected invocation");
    };
    assert!(matches!(call.method_select(), Tree::Identifier(identifier) if identifier.name() == "super"));
}

#[test]
fn class_literals() {
    // int[].class
    let lowered = lower_expr(primary(vec![
        basic_type(K::KwInt, "int"),
        dim(),
        token(K::Dot, "."),
        token(K::KwClass, "class"),
    ]));
    let Tree::MemberSelect(select) = &lowered else {
        panic!("expected member select");
    };
    assert_eq!(select.identifier(), "class");
    assert!(matches!(select.expression(), Tree::ArrayType(_)));

    // String.class
    let lowered = lower_expr(primary(vec![
        qualified(&["String"]),
        node(
            K::IdentifierSuffix,
            [token(K::Dot, "."), token(K::KwClass, "class")],
        ),
    ]));
    let Tree::MemberSelect(select) = &lowered else {
        panic!("expected member select");
    };
    assert_eq!(select.identifier(), "class");
    assert!(matches!(select.expression(), Tree::Identifier(identifier) if identifier.name() == "String"));
}

#[test]
fn identifier_suffix_array_access() {
    // xs[0]
    let lowered = lower_expr(primary(vec![
        qualified(&["xs"]),
        node(
            K::IdentifierSuffix,
            [
                token(K::LBracket, "["),
                expression(int_literal("0")),
                token(K::RBracket, "]"),
            ],
        ),
    ]));
    assert!(lowered.is(Kind::ArrayAccessExpression));
}

#[test]
fn new_class_with_body_and_inner_creator() {
    // new A(1) { }
    let lowered = lower_expr(primary(vec![
        token(K::KwNew, "new"),
        ws(),
        node(
            K::Creator,
            [
                node(K::CreatedName, [ident("A")]),
                node(
                    K::ClassCreatorRest,
                    [arguments(vec![int_literal("1")]), ws(), class_body(vec![])],
                ),
            ],
        ),
    ]));
    let Tree::NewClass(creation) = &lowered else {
        panic!("expected new class");
    };
    assert!(creation.enclosing_expression().is_none());
    assert!(matches!(creation.identifier(), Tree::Identifier(identifier) if identifier.name() == "A"));
    assert_eq!(creation.arguments().len(), 1);
    assert!(creation.class_body().is_some());

    // outer.new Inner()
    let lowered = lower_expr(primary(vec![
        qualified(&["outer"]),
        node(
            K::IdentifierSuffix,
            [
                token(K::Dot, "."),
                token(K::KwNew, "new"),
                node(
                    K::InnerCreator,
                    [
                        ident("Inner"),
                        node(K::ClassCreatorRest, [arguments(vec![])]),
                    ],
                ),
            ],
        ),
    ]));
    let Tree::NewClass(creation) = &lowered else {
        panic!("expected new class");
    };
    assert!(matches!(
        creation.enclosing_expression(),
        Some(Tree::Identifier(identifier)) if identifier.name() == "outer"
    ));
    assert!(creation.class_body().is_none());
}

#[test]
fn new_array_with_dimensions() {
    // new int[2][3]
    let lowered = lower_expr(primary(vec![
        token(K::KwNew, "new"),
        ws(),
        node(
            K::Creator,
            [
                basic_type(K::KwInt, "int"),
                node(
                    K::ArrayCreatorRest,
                    [
                        token(K::LBracket, "["),
                        expression(int_literal("2")),
                        token(K::RBracket, "]"),
                        node(
                            K::DimExpr,
                            [
                                token(K::LBracket, "["),
                                expression(int_literal("3")),
                                token(K::RBracket, "]"),
                            ],
                        ),
                    ],
                ),
            ],
        ),
    ]));
    let Tree::NewArray(creation) = &lowered else {
        panic!("expected new array");
    };
    assert!(matches!(creation.ty(), Some(Tree::PrimitiveType(ty)) if ty.name() == "int"));
    assert_eq!(creation.dimensions().len(), 2);
    assert!(creation.initializers().is_empty());
}

#[test]
fn new_array_with_initializer() {
    // new int[] {1, 2}
    let lowered = lower_expr(primary(vec![
        token(K::KwNew, "new"),
        ws(),
        node(
            K::Creator,
            [
                basic_type(K::KwInt, "int"),
                node(
                    K::ArrayCreatorRest,
                    [
                        dim(),
                        node(
                            K::ArrayInitializer,
                            [
                                token(K::LBrace, "{"),
                                node(K::VariableInitializer, [expression(int_literal("1"))]),
                                token(K::Comma, ","),
                                node(K::VariableInitializer, [expression(int_literal("2"))]),
                                token(K::RBrace, "}"),
                            ],
                        ),
                    ],
                ),
            ],
        ),
    ]));
    let Tree::NewArray(creation) = &lowered else {
        panic!("expected new array");
    };
    assert!(creation.ty().is_some());
    assert!(creation.dimensions().is_empty());
    assert_eq!(creation.initializers().len(), 2);
}

#[test]
fn initializer_only_array_has_no_type() {
    // int[] a = {1};
    let root = unit(vec![type_decl(class_decl(
        "A",
        vec![field(
            ty_int_array(1),
            vec![declarator(
                "a",
                0,
                Some(node(
                    K::ArrayInitializer,
                    [
                        token(K::LBrace, "{"),
                        node(K::VariableInitializer, [expression(int_literal("1"))]),
                        token(K::RBrace, "}"),
                    ],
                )),
            )],
        )],
    ))]);
    let tree = build_compilation_unit(&root).unwrap();
    let Tree::Class(class) = &tree.types()[0] else {
        panic!("expected class");
    };
    let Tree::Variable(variable) = &class.members()[0] else {
        panic!("expected variable");
    };
    let Some(Tree::NewArray(initializer)) = variable.initializer() else {
        panic!("expected array initializer");
    };
    assert!(initializer.ty().is_none());
    assert!(initializer.dimensions().is_empty());
    assert_eq!(initializer.initializers().len(), 1);
}

#[test]
fn explicit_generic_invocation_erases_type_arguments() {
    // x.<T>m(1)
    let lowered = lower_expr(unary(vec![
        name(&["x"]),
        node(
            K::Selector,
            [
                token(K::Dot, "."),
                node(
                    K::ExplicitGenericInvocation,
                    [
                        node(K::NonWildcardTypeArguments, [token(K::Lt, "<"), class_type("T"), token(K::Gt, ">")]),
                        node(
                            K::ExplicitGenericInvocationSuffix,
                            [ident("m"), arguments(vec![int_literal("1")])],
                        ),
                    ],
                ),
            ],
        ),
    ]));
    let Tree::MethodInvocation(call) = &lowered else {
        panic!("expected invocation");
    };
    let Tree::MemberSelect(select) = call.method_select() else {
        panic!("expected member select");
    };
    assert_eq!(select.identifier(), "m");
}

#[test]
fn operator_outside_category_is_rejected() {
    // A `!` token in binary position is not a binary operator.
    let lowered = lower_expr_result(additive(vec![
        int_literal("1"),
        token(K::Bang, "!"),
        int_literal("2"),
    ]));
    assert!(matches!(lowered, Err(LowerError::UnknownOperator { .. })));
}

fn lower_expr_result(child: Element) -> Result<Tree, LowerError> {
    let root = unit(vec![type_decl(class_decl(
        "A",
        vec![void_method("m", vec![expr_stmt(child)])],
    ))]);
    build_compilation_unit(&root).map(|tree| {
        let Tree::Class(class) = &tree.types()[0] else {
            panic!("expected class");
        };
        let Tree::Method(method) = &class.members()[0] else {
            panic!("expected method");
        };
        let Some(Tree::Block(block)) = method.body() else {
            panic!("expected body");
        };
        let Tree::ExpressionStatement(statement) = &block.body()[0] else {
            panic!("expected expression statement");
        };
        statement.expression().clone()
    })
}
