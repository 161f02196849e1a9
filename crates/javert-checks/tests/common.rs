//! Shared fixture helpers: just enough concrete-syntax construction to host
//! statements inside a compilation unit.
#![allow(dead_code)]

pub use javert_syntax::build::{build, node, token, Element};
pub use javert_syntax::{SyntaxKind as K, SyntaxNode};

pub fn ws() -> Element {
    token(K::Whitespace, " ")
}

pub fn nl() -> Element {
    token(K::Whitespace, "\n")
}

pub fn ident(text: &str) -> Element {
    token(K::Ident, text)
}

/// A compilation unit holding `class A { void m() { <statements> } }`.
pub fn unit_with_statements(statements: Vec<Element>) -> SyntaxNode {
    let body = node(
        K::MethodBody,
        [node(
            K::Block,
            [
                token(K::LBrace, "{"),
                node(K::BlockStatements, statements),
                token(K::RBrace, "}"),
            ],
        )],
    );
    let method = node(
        K::ClassBodyDeclaration,
        [node(
            K::MemberDecl,
            [
                token(K::KwVoid, "void"),
                ws(),
                ident("m"),
                node(
                    K::VoidMethodDeclaratorRest,
                    [
                        node(
                            K::FormalParameters,
                            [token(K::LParen, "("), token(K::RParen, ")")],
                        ),
                        ws(),
                        body,
                    ],
                ),
            ],
        )],
    );
    let class = node(
        K::ClassDeclaration,
        [
            token(K::KwClass, "class"),
            ws(),
            ident("A"),
            ws(),
            node(
                K::ClassBody,
                [token(K::LBrace, "{"), method, token(K::RBrace, "}")],
            ),
        ],
    );
    build(node(
        K::CompilationUnit,
        [node(K::TypeDeclaration, [class])],
    ))
}

pub fn statement(child: Element) -> Element {
    node(K::Statement, [child])
}

pub fn empty_stmt() -> Element {
    statement(node(K::EmptyStatement, [token(K::Semi, ";")]))
}

pub fn block_stmt(statements: Vec<Element>) -> Element {
    statement(node(
        K::Block,
        [
            token(K::LBrace, "{"),
            node(K::BlockStatements, statements),
            token(K::RBrace, "}"),
        ],
    ))
}

pub fn expression(child: Element) -> Element {
    node(K::Expression, [child])
}

pub fn par_expression(child: Element) -> Element {
    node(
        K::ParExpression,
        [token(K::LParen, "("), expression(child), token(K::RParen, ")")],
    )
}

pub fn bool_literal(value: bool) -> Element {
    if value {
        node(K::Literal, [token(K::KwTrue, "true")])
    } else {
        node(K::Literal, [token(K::KwFalse, "false")])
    }
}

pub fn int_literal(text: &str) -> Element {
    node(K::Literal, [token(K::IntLiteral, text)])
}

pub fn name(segments: &[&str]) -> Element {
    let mut children = Vec::new();
    for (index, segment) in segments.iter().enumerate() {
        if index > 0 {
            children.push(token(K::Dot, "."));
        }
        children.push(ident(segment));
    }
    node(K::Primary, [node(K::QualifiedIdentifier, children)])
}

pub fn if_stmt(condition: Element, then: Element, r#else: Option<Element>) -> Element {
    let mut children = vec![
        token(K::KwIf, "if"),
        ws(),
        par_expression(condition),
        ws(),
        then,
    ];
    if let Some(r#else) = r#else {
        children.push(token(K::KwElse, "else"));
        children.push(ws());
        children.push(r#else);
    }
    statement(node(K::IfStatement, children))
}

pub fn switch_stmt(selector: Element, groups: Vec<Element>) -> Element {
    let mut children = vec![
        token(K::KwSwitch, "switch"),
        par_expression(selector),
        token(K::LBrace, "{"),
    ];
    children.extend(groups);
    children.push(token(K::RBrace, "}"));
    statement(node(K::SwitchStatement, children))
}

pub fn switch_group(labels: Vec<Element>, statements: Vec<Element>) -> Element {
    let mut children = labels;
    children.push(node(K::BlockStatements, statements));
    node(K::SwitchBlockStatementGroup, children)
}

pub fn case_label(constant: Element) -> Element {
    node(
        K::SwitchLabel,
        [
            token(K::KwCase, "case"),
            ws(),
            node(K::ConstantExpression, [constant]),
            token(K::Colon, ":"),
        ],
    )
}

pub fn default_label() -> Element {
    node(
        K::SwitchLabel,
        [token(K::KwDefault, "default"), token(K::Colon, ":")],
    )
}
