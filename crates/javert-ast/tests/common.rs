//! Shared fixture helpers: concrete-syntax tree construction in the shape
//! the external parser produces.
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

/// Builds a `CompilationUnit` root from its direct children.
pub fn unit(children: Vec<Element>) -> SyntaxNode {
    build(node(K::CompilationUnit, children))
}

pub fn qualified(segments: &[&str]) -> Element {
    let mut children = Vec::new();
    for (index, segment) in segments.iter().enumerate() {
        if index > 0 {
            children.push(token(K::Dot, "."));
        }
        children.push(ident(segment));
    }
    node(K::QualifiedIdentifier, children)
}

pub fn package_decl(segments: &[&str]) -> Element {
    node(
        K::PackageDeclaration,
        [
            token(K::KwPackage, "package"),
            ws(),
            qualified(segments),
            token(K::Semi, ";"),
        ],
    )
}

pub fn import_decl(is_static: bool, segments: &[&str]) -> Element {
    let mut children = vec![token(K::KwImport, "import"), ws()];
    if is_static {
        children.push(token(K::KwStatic, "static"));
        children.push(ws());
    }
    children.push(qualified(segments));
    children.push(token(K::Semi, ";"));
    node(K::ImportDeclaration, children)
}

pub fn type_decl(declaration: Element) -> Element {
    node(K::TypeDeclaration, [declaration])
}

pub fn type_decl_with(modifiers: Element, declaration: Element) -> Element {
    node(K::TypeDeclaration, [modifiers, ws(), declaration])
}

pub fn modifiers(keywords: &[(K, &str)]) -> Element {
    let mut children = Vec::new();
    for (index, (kind, text)) in keywords.iter().enumerate() {
        if index > 0 {
            children.push(ws());
        }
        children.push(token(*kind, text));
    }
    node(K::Modifiers, children)
}

// ---------------------------------------------------------------------------
// Type declarations
// ---------------------------------------------------------------------------

pub fn class_body(members: Vec<Element>) -> Element {
    let mut children = vec![token(K::LBrace, "{")];
    children.extend(members);
    children.push(token(K::RBrace, "}"));
    node(K::ClassBody, children)
}

pub fn class_decl(name: &str, members: Vec<Element>) -> Element {
    node(
        K::ClassDeclaration,
        [
            token(K::KwClass, "class"),
            ws(),
            ident(name),
            ws(),
            class_body(members),
        ],
    )
}

pub fn class_decl_extending(
    name: &str,
    super_class: Option<Element>,
    interfaces: Vec<Element>,
    members: Vec<Element>,
) -> Element {
    let mut children = vec![token(K::KwClass, "class"), ws(), ident(name)];
    if let Some(super_class) = super_class {
        children.push(ws());
        children.push(token(K::KwExtends, "extends"));
        children.push(ws());
        children.push(super_class);
    }
    if !interfaces.is_empty() {
        children.push(ws());
        children.push(token(K::KwImplements, "implements"));
        children.push(ws());
        children.push(class_type_list(interfaces));
    }
    children.push(ws());
    children.push(class_body(members));
    node(K::ClassDeclaration, children)
}

pub fn class_type(name: &str) -> Element {
    node(K::ClassType, [ident(name)])
}

pub fn class_type_list(types: Vec<Element>) -> Element {
    let mut children = Vec::new();
    for (index, ty) in types.into_iter().enumerate() {
        if index > 0 {
            children.push(token(K::Comma, ","));
        }
        children.push(ty);
    }
    node(K::ClassTypeList, children)
}

pub fn interface_decl(name: &str, members: Vec<Element>) -> Element {
    let mut children = vec![token(K::KwInterface, "interface"), ws(), ident(name), ws()];
    let mut body = vec![token(K::LBrace, "{")];
    body.extend(members);
    body.push(token(K::RBrace, "}"));
    children.push(node(K::InterfaceBody, body));
    node(K::InterfaceDeclaration, children)
}

pub fn enum_decl(name: &str, interfaces: Vec<Element>, constants: Vec<Element>) -> Element {
    enum_decl_with_body(name, interfaces, constants, None)
}

pub fn enum_decl_with_body(
    name: &str,
    interfaces: Vec<Element>,
    constants: Vec<Element>,
    body_declarations: Option<Vec<Element>>,
) -> Element {
    let mut children = vec![token(K::KwEnum, "enum"), ws(), ident(name)];
    if !interfaces.is_empty() {
        children.push(ws());
        children.push(token(K::KwImplements, "implements"));
        children.push(ws());
        children.push(class_type_list(interfaces));
    }
    let mut body = vec![token(K::LBrace, "{"), node(K::EnumConstants, constants)];
    if let Some(declarations) = body_declarations {
        let mut decls = vec![token(K::Semi, ";")];
        decls.extend(declarations);
        body.push(node(K::EnumBodyDeclarations, decls));
    }
    body.push(token(K::RBrace, "}"));
    children.push(node(K::EnumBody, body));
    node(K::EnumDeclaration, children)
}

pub fn enum_constant(
    name: &str,
    arguments: Option<Element>,
    body: Option<Vec<Element>>,
) -> Element {
    let mut children = vec![ident(name)];
    if let Some(arguments) = arguments {
        children.push(arguments);
    }
    if let Some(members) = body {
        children.push(ws());
        children.push(class_body(members));
    }
    node(K::EnumConstant, children)
}

// ---------------------------------------------------------------------------
// Members
// ---------------------------------------------------------------------------

pub fn member(children: Vec<Element>) -> Element {
    node(K::ClassBodyDeclaration, [node(K::MemberDecl, children)])
}

pub fn member_with(modifiers: Element, children: Vec<Element>) -> Element {
    node(
        K::ClassBodyDeclaration,
        [modifiers, ws(), node(K::MemberDecl, children)],
    )
}

pub fn void_method(name: &str, statements: Vec<Element>) -> Element {
    member(vec![
        token(K::KwVoid, "void"),
        ws(),
        ident(name),
        node(
            K::VoidMethodDeclaratorRest,
            [formal_parameters(vec![]), ws(), method_body(statements)],
        ),
    ])
}

pub fn method_body(statements: Vec<Element>) -> Element {
    node(K::MethodBody, [block(statements)])
}

pub fn formal_parameters(parameters: Vec<Element>) -> Element {
    let mut children = vec![token(K::LParen, "(")];
    for (index, parameter) in parameters.into_iter().enumerate() {
        if index > 0 {
            children.push(token(K::Comma, ","));
        }
        children.push(parameter);
    }
    children.push(token(K::RParen, ")"));
    node(K::FormalParameters, children)
}

pub fn formal_parameter(ty: Element, name: &str) -> Element {
    node(
        K::FormalParameter,
        [ty, ws(), node(K::VariableDeclaratorId, [ident(name)])],
    )
}

pub fn varargs_parameter(ty: Element, name: &str) -> Element {
    node(
        K::FormalParameter,
        [
            ty,
            token(K::Ellipsis, "..."),
            ws(),
            node(K::VariableDeclaratorId, [ident(name)]),
        ],
    )
}

pub fn field(ty: Element, declarators: Vec<Element>) -> Element {
    member(vec![node(
        K::FieldDeclaration,
        [ty, ws(), variable_declarators(declarators), token(K::Semi, ";")],
    )])
}

pub fn variable_declarators(declarators: Vec<Element>) -> Element {
    let mut children = Vec::new();
    for (index, declarator) in declarators.into_iter().enumerate() {
        if index > 0 {
            children.push(token(K::Comma, ","));
        }
        children.push(declarator);
    }
    node(K::VariableDeclarators, children)
}

pub fn declarator(name: &str, dims: usize, initializer: Option<Element>) -> Element {
    let mut children = vec![ident(name)];
    for _ in 0..dims {
        children.push(dim());
    }
    if let Some(initializer) = initializer {
        children.push(token(K::Eq, "="));
        children.push(node(K::VariableInitializer, [initializer]));
    }
    node(K::VariableDeclarator, children)
}

pub fn dim() -> Element {
    node(K::Dim, [token(K::LBracket, "["), token(K::RBracket, "]")])
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

pub fn basic_type(kind: K, text: &str) -> Element {
    node(K::BasicType, [token(kind, text)])
}

pub fn ty_int() -> Element {
    node(K::Type, [basic_type(K::KwInt, "int")])
}

pub fn ty_int_array(dims: usize) -> Element {
    let mut children = vec![basic_type(K::KwInt, "int")];
    for _ in 0..dims {
        children.push(dim());
    }
    node(K::Type, children)
}

pub fn ty_class(name: &str) -> Element {
    node(K::Type, [class_type(name)])
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

pub fn statement(child: Element) -> Element {
    node(K::Statement, [child])
}

pub fn block(statements: Vec<Element>) -> Element {
    node(
        K::Block,
        [
            token(K::LBrace, "{"),
            node(K::BlockStatements, statements),
            token(K::RBrace, "}"),
        ],
    )
}

pub fn block_stmt(statements: Vec<Element>) -> Element {
    statement(block(statements))
}

pub fn empty_stmt() -> Element {
    statement(node(K::EmptyStatement, [token(K::Semi, ";")]))
}

pub fn expression(child: Element) -> Element {
    node(K::Expression, [child])
}

pub fn expr_stmt(child: Element) -> Element {
    statement(node(
        K::ExpressionStatement,
        [
            node(K::StatementExpression, [child]),
            token(K::Semi, ";"),
        ],
    ))
}

pub fn par_expression(child: Element) -> Element {
    node(
        K::ParExpression,
        [token(K::LParen, "("), expression(child), token(K::RParen, ")")],
    )
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

pub fn local_var(ty: Element, declarators: Vec<Element>) -> Element {
    node(
        K::LocalVariableDeclarationStatement,
        [ty, ws(), variable_declarators(declarators), token(K::Semi, ";")],
    )
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

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

pub fn int_literal(text: &str) -> Element {
    node(K::Literal, [token(K::IntLiteral, text)])
}

pub fn bool_literal(value: bool) -> Element {
    if value {
        node(K::Literal, [token(K::KwTrue, "true")])
    } else {
        node(K::Literal, [token(K::KwFalse, "false")])
    }
}

pub fn null_literal() -> Element {
    node(K::Literal, [token(K::KwNull, "null")])
}

pub fn string_literal(text: &str) -> Element {
    node(K::Literal, [token(K::StringLiteral, text)])
}

/// A primary wrapping a (possibly dotted) name.
pub fn name(segments: &[&str]) -> Element {
    node(K::Primary, [qualified(segments)])
}

pub fn primary(children: Vec<Element>) -> Element {
    node(K::Primary, children)
}

pub fn arguments(expressions: Vec<Element>) -> Element {
    let mut children = vec![token(K::LParen, "(")];
    for (index, child) in expressions.into_iter().enumerate() {
        if index > 0 {
            children.push(token(K::Comma, ","));
        }
        children.push(expression(child));
    }
    children.push(token(K::RParen, ")"));
    node(K::Arguments, children)
}

/// A primary invoking a dotted name: `a.b.c(args)`.
pub fn invocation(segments: &[&str], args: Vec<Element>) -> Element {
    primary(vec![
        qualified(segments),
        node(K::IdentifierSuffix, [arguments(args)]),
    ])
}

pub fn additive(parts: Vec<Element>) -> Element {
    node(K::AdditiveExpression, parts)
}

pub fn unary(children: Vec<Element>) -> Element {
    node(K::UnaryExpression, children)
}
