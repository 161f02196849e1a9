//! Lowering of declarations: compilation units, type declarations, members,
//! methods, fields, and the shared type and declarator routines.

use javert_syntax::{SyntaxKind, SyntaxNode, SyntaxToken};
use smol_str::SmolStr;

use super::{dim_count, elements, find_node, find_token, first_node, token_text, Lower};
use crate::error::LowerError;
use crate::kind::Kind;
use crate::tree::{
    ArrayTypeTree, ClassTree, CompilationUnitTree, IdentifierTree, ImportTree, MemberSelectTree,
    MethodTree, ModifiersTree, NewClassTree, PrimitiveTypeTree, Tree, VariableTree,
};

impl Lower {
    pub(crate) fn compilation_unit(
        &self,
        node: &SyntaxNode,
    ) -> Result<CompilationUnitTree, LowerError> {
        let package_name = match find_node(node, SyntaxKind::PackageDeclaration) {
            Some(package) => {
                let qualified = find_node(&package, SyntaxKind::QualifiedIdentifier)
                    .ok_or_else(|| LowerError::malformed(package.kind()))?;
                Some(Box::new(self.identifier_chain(&qualified)?))
            }
            None => None,
        };

        let mut imports = Vec::new();
        for import in node
            .children()
            .filter(|child| child.kind() == SyntaxKind::ImportDeclaration)
        {
            imports.push(self.import(&import)?);
        }

        let mut types = Vec::new();
        for declaration in node
            .children()
            .filter(|child| child.kind() == SyntaxKind::TypeDeclaration)
        {
            if let Some(tree) = self.type_declaration(&declaration)? {
                types.push(tree);
            }
        }

        Ok(CompilationUnitTree {
            syntax: node.clone(),
            line: self.line(node),
            package_name,
            imports,
            types,
        })
    }

    fn import(&self, node: &SyntaxNode) -> Result<ImportTree, LowerError> {
        let qualified = find_node(node, SyntaxKind::QualifiedIdentifier)
            .ok_or_else(|| LowerError::malformed(node.kind()))?;
        Ok(ImportTree {
            syntax: node.clone(),
            line: self.line(node),
            is_static: super::has_token(node, SyntaxKind::KwStatic),
            qualified_identifier: Box::new(self.identifier_chain(&qualified)?),
        })
    }

    /// Lowers a `TypeDeclaration`; `None` for stray semicolons.
    fn type_declaration(&self, node: &SyntaxNode) -> Result<Option<Tree>, LowerError> {
        let modifiers = self.modifiers_of(node)?;
        for child in node.children() {
            if is_type_declaration(child.kind()) {
                return self.type_like(modifiers, &child).map(Some);
            }
        }
        Ok(None)
    }

    /// Dispatches a class-like declaration node on its tag.
    pub(crate) fn type_like(
        &self,
        modifiers: ModifiersTree,
        node: &SyntaxNode,
    ) -> Result<Tree, LowerError> {
        match node.kind() {
            SyntaxKind::ClassDeclaration => self.class_declaration(modifiers, node),
            SyntaxKind::InterfaceDeclaration => self.interface_declaration(modifiers, node),
            SyntaxKind::EnumDeclaration => self.enum_declaration(modifiers, node),
            SyntaxKind::AnnotationTypeDeclaration => {
                self.annotation_type_declaration(modifiers, node)
            }
            _ => Err(LowerError::malformed(node.kind())),
        }
    }

    fn class_declaration(
        &self,
        modifiers: ModifiersTree,
        node: &SyntaxNode,
    ) -> Result<Tree, LowerError> {
        let name = find_token(node, SyntaxKind::Ident)
            .ok_or_else(|| LowerError::malformed(node.kind()))?;
        let super_class = match find_node(node, SyntaxKind::ClassType) {
            Some(class_type) => Some(Box::new(self.identifier_chain(&class_type)?)),
            None => None,
        };
        let super_interfaces = match find_node(node, SyntaxKind::ClassTypeList) {
            Some(list) => self.class_type_list(&list)?,
            None => Vec::new(),
        };
        let body = find_node(node, SyntaxKind::ClassBody)
            .ok_or_else(|| LowerError::malformed(node.kind()))?;
        Ok(Tree::Class(ClassTree {
            syntax: node.clone(),
            line: self.line(node),
            kind: Kind::Class,
            modifiers,
            simple_name: token_text(&name),
            super_class,
            super_interfaces,
            members: self.class_body_members(&body)?,
        }))
    }

    fn interface_declaration(
        &self,
        modifiers: ModifiersTree,
        node: &SyntaxNode,
    ) -> Result<Tree, LowerError> {
        let name = find_token(node, SyntaxKind::Ident)
            .ok_or_else(|| LowerError::malformed(node.kind()))?;
        let super_interfaces = match find_node(node, SyntaxKind::ClassTypeList) {
            Some(list) => self.class_type_list(&list)?,
            None => Vec::new(),
        };
        let body = find_node(node, SyntaxKind::InterfaceBody)
            .ok_or_else(|| LowerError::malformed(node.kind()))?;
        Ok(Tree::Class(ClassTree {
            syntax: node.clone(),
            line: self.line(node),
            kind: Kind::Interface,
            modifiers,
            simple_name: token_text(&name),
            super_class: None,
            super_interfaces,
            members: self.interface_body_members(&body)?,
        }))
    }

    fn enum_declaration(
        &self,
        modifiers: ModifiersTree,
        node: &SyntaxNode,
    ) -> Result<Tree, LowerError> {
        let name = find_token(node, SyntaxKind::Ident)
            .ok_or_else(|| LowerError::malformed(node.kind()))?;
        let enum_name = token_text(&name);
        let super_interfaces = match find_node(node, SyntaxKind::ClassTypeList) {
            Some(list) => self.class_type_list(&list)?,
            None => Vec::new(),
        };
        let body = find_node(node, SyntaxKind::EnumBody)
            .ok_or_else(|| LowerError::malformed(node.kind()))?;

        let mut members = Vec::new();
        if let Some(constants) = find_node(&body, SyntaxKind::EnumConstants) {
            for constant in constants
                .children()
                .filter(|child| child.kind() == SyntaxKind::EnumConstant)
            {
                members.push(self.enum_constant(&enum_name, &constant)?);
            }
        }
        if let Some(declarations) = find_node(&body, SyntaxKind::EnumBodyDeclarations) {
            members.extend(self.class_body_members(&declarations)?);
        }

        Ok(Tree::Class(ClassTree {
            syntax: node.clone(),
            line: self.line(node),
            kind: Kind::Enum,
            modifiers,
            simple_name: enum_name,
            super_class: None,
            super_interfaces,
            members,
        }))
    }

    /// Desugars an enum constant into a variable whose initializer is a
    /// synthesised `NewClass` over the constant's arguments and body.
    fn enum_constant(&self, enum_name: &str, node: &SyntaxNode) -> Result<Tree, LowerError> {
        let name = find_token(node, SyntaxKind::Ident)
            .ok_or_else(|| LowerError::malformed(node.kind()))?;
        let arguments = match find_node(node, SyntaxKind::Arguments) {
            Some(arguments) => self.arguments(&arguments)?,
            None => Vec::new(),
        };
        let class_body = match find_node(node, SyntaxKind::ClassBody) {
            Some(body) => Some(Box::new(self.anonymous_class_body(node, &body)?)),
            None => None,
        };
        let identifier = Tree::Identifier(IdentifierTree {
            syntax: node.clone(),
            line: self.line(node),
            name: SmolStr::new(enum_name),
        });
        let initializer = Tree::NewClass(NewClassTree {
            syntax: node.clone(),
            line: self.line(node),
            enclosing_expression: None,
            identifier: Box::new(identifier.clone()),
            arguments,
            class_body,
        });
        Ok(Tree::Variable(VariableTree {
            syntax: node.clone(),
            line: self.line(node),
            kind: Kind::EnumConstant,
            modifiers: self.empty_modifiers(node),
            ty: Box::new(identifier),
            simple_name: token_text(&name),
            initializer: Some(Box::new(initializer)),
        }))
    }

    fn annotation_type_declaration(
        &self,
        modifiers: ModifiersTree,
        node: &SyntaxNode,
    ) -> Result<Tree, LowerError> {
        let name = find_token(node, SyntaxKind::Ident)
            .ok_or_else(|| LowerError::malformed(node.kind()))?;
        let body = find_node(node, SyntaxKind::AnnotationTypeBody)
            .ok_or_else(|| LowerError::malformed(node.kind()))?;

        let mut members = Vec::new();
        for declaration in body
            .children()
            .filter(|child| child.kind() == SyntaxKind::AnnotationTypeElementDeclaration)
        {
            self.annotation_type_element(&declaration, &mut members)?;
        }

        Ok(Tree::Class(ClassTree {
            syntax: node.clone(),
            line: self.line(node),
            kind: Kind::AnnotationType,
            modifiers,
            simple_name: token_text(&name),
            super_class: None,
            super_interfaces: Vec::new(),
            members,
        }))
    }

    /// Lowers one annotation-type element: an annotation method (with an
    /// optional default value) or a constant declaration.
    fn annotation_type_element(
        &self,
        node: &SyntaxNode,
        out: &mut Vec<Tree>,
    ) -> Result<(), LowerError> {
        let modifiers = self.modifiers_of(node)?;
        let rest = find_node(node, SyntaxKind::AnnotationTypeElementRest)
            .ok_or_else(|| LowerError::malformed(node.kind()))?;
        let ty_node = find_node(&rest, SyntaxKind::Type)
            .ok_or_else(|| LowerError::malformed(rest.kind()))?;
        let base_ty = self.ty(&ty_node)?;
        let name = find_token(&rest, SyntaxKind::Ident)
            .ok_or_else(|| LowerError::malformed(rest.kind()))?;
        let method_or_constant = find_node(&rest, SyntaxKind::AnnotationMethodOrConstantRest)
            .ok_or_else(|| LowerError::malformed(rest.kind()))?;

        if let Some(method_rest) = find_node(&method_or_constant, SyntaxKind::AnnotationMethodRest)
        {
            let default_value = match find_node(&method_rest, SyntaxKind::DefaultValue) {
                Some(default) => {
                    let value = first_node(&default)?;
                    Some(Box::new(self.expression(&value)?))
                }
                None => None,
            };
            out.push(Tree::Method(MethodTree {
                syntax: node.clone(),
                line: self.line(node),
                modifiers: self.empty_modifiers(node),
                return_type: Some(Box::new(base_ty)),
                simple_name: token_text(&name),
                parameters: Vec::new(),
                body: None,
                throws: Vec::new(),
                default_value,
            }));
            return Ok(());
        }

        let declarators = find_node(&method_or_constant, SyntaxKind::ConstantDeclaratorsRest)
            .ok_or_else(|| LowerError::malformed(method_or_constant.kind()))?;
        out.extend(self.constants(&modifiers, &base_ty, &name, &declarators)?);
        Ok(())
    }

    /// Lowers the members of a `ClassBody` or `EnumBodyDeclarations` node.
    pub(crate) fn class_body_members(&self, body: &SyntaxNode) -> Result<Vec<Tree>, LowerError> {
        let mut members = Vec::new();
        for declaration in body
            .children()
            .filter(|child| child.kind() == SyntaxKind::ClassBodyDeclaration)
        {
            self.class_body_declaration(&declaration, &mut members)?;
        }
        Ok(members)
    }

    fn class_body_declaration(
        &self,
        node: &SyntaxNode,
        out: &mut Vec<Tree>,
    ) -> Result<(), LowerError> {
        if let Some(initializer) = find_node(node, SyntaxKind::ClassInitDeclaration) {
            let kind = if super::has_token(&initializer, SyntaxKind::KwStatic) {
                Kind::StaticInitializer
            } else {
                Kind::Initializer
            };
            let block = find_node(&initializer, SyntaxKind::Block)
                .ok_or_else(|| LowerError::malformed(initializer.kind()))?;
            out.push(self.block_of_kind(&block, kind)?);
            return Ok(());
        }

        let Some(member) = find_node(node, SyntaxKind::MemberDecl) else {
            // Stray semicolon.
            return Ok(());
        };
        let modifiers = self.modifiers_of(node)?;

        if let Some(field) = find_node(&member, SyntaxKind::FieldDeclaration) {
            let ty_node = find_node(&field, SyntaxKind::Type)
                .ok_or_else(|| LowerError::malformed(field.kind()))?;
            let base_ty = self.ty(&ty_node)?;
            let declarators = find_node(&field, SyntaxKind::VariableDeclarators)
                .ok_or_else(|| LowerError::malformed(field.kind()))?;
            out.extend(self.variable_declarators(&modifiers, &base_ty, &declarators)?);
            return Ok(());
        }

        out.push(self.member_declaration(modifiers, &member)?);
        Ok(())
    }

    /// Lowers a `MemberDecl` that is not a field: a nested type declaration
    /// or a method/constructor.
    fn member_declaration(
        &self,
        modifiers: ModifiersTree,
        member: &SyntaxNode,
    ) -> Result<Tree, LowerError> {
        for child in member.children() {
            if is_type_declaration(child.kind()) {
                return self.type_like(modifiers, &child);
            }
        }

        if let Some(generic) = find_node(member, SyntaxKind::GenericMethodOrConstructorRest) {
            let return_type = self.optional_return_type(&generic)?;
            let name = find_token(&generic, SyntaxKind::Ident)
                .ok_or_else(|| LowerError::malformed(generic.kind()))?;
            let rest = find_node(&generic, SyntaxKind::MethodDeclaratorRest)
                .or_else(|| find_node(&generic, SyntaxKind::ConstructorDeclaratorRest))
                .ok_or_else(|| LowerError::malformed(generic.kind()))?;
            return self.method(member, modifiers, return_type, &name, &rest);
        }

        let rest = find_node(member, SyntaxKind::MethodDeclaratorRest)
            .or_else(|| find_node(member, SyntaxKind::VoidMethodDeclaratorRest))
            .or_else(|| find_node(member, SyntaxKind::ConstructorDeclaratorRest))
            .ok_or_else(|| LowerError::malformed(member.kind()))?;
        let return_type = self.optional_return_type(member)?;
        let name = find_token(member, SyntaxKind::Ident)
            .ok_or_else(|| LowerError::malformed(member.kind()))?;
        self.method(member, modifiers, return_type, &name, &rest)
    }

    /// The declared return type of a member: a `Type` child, the `void`
    /// keyword, or nothing (a constructor).
    fn optional_return_type(&self, node: &SyntaxNode) -> Result<Option<Tree>, LowerError> {
        if let Some(ty) = find_node(node, SyntaxKind::Type) {
            return Ok(Some(self.ty(&ty)?));
        }
        if super::has_token(node, SyntaxKind::KwVoid) {
            return Ok(Some(self.void_type(node)));
        }
        Ok(None)
    }

    /// Shared method/constructor lowering over a declarator-rest node.
    pub(crate) fn method(
        &self,
        declaration: &SyntaxNode,
        modifiers: ModifiersTree,
        return_type: Option<Tree>,
        name: &SyntaxToken,
        rest: &SyntaxNode,
    ) -> Result<Tree, LowerError> {
        let return_type = return_type.map(|ty| self.apply_dims(ty, dim_count(rest), rest));
        let parameters = match find_node(rest, SyntaxKind::FormalParameters) {
            Some(parameters) => self.formal_parameters(&parameters)?,
            None => return Err(LowerError::malformed(rest.kind())),
        };
        let body = match find_node(rest, SyntaxKind::MethodBody) {
            Some(body) => {
                let block = first_node(&body)?;
                Some(Box::new(self.block_of_kind(&block, Kind::Block)?))
            }
            None => None,
        };
        let throws = match find_node(rest, SyntaxKind::QualifiedIdentifierList) {
            Some(list) => {
                let mut throws = Vec::new();
                for qualified in list
                    .children()
                    .filter(|child| child.kind() == SyntaxKind::QualifiedIdentifier)
                {
                    throws.push(self.identifier_chain(&qualified)?);
                }
                throws
            }
            None => Vec::new(),
        };
        Ok(Tree::Method(MethodTree {
            syntax: declaration.clone(),
            line: self.line(declaration),
            modifiers,
            return_type: return_type.map(Box::new),
            simple_name: token_text(name),
            parameters,
            body,
            throws,
            default_value: None,
        }))
    }

    /// Walks the `VariableDeclaratorId` descendants; the previous sibling of
    /// each is its type, with `...` marking a varargs array of the type
    /// before it.
    pub(crate) fn formal_parameters(&self, node: &SyntaxNode) -> Result<Vec<Tree>, LowerError> {
        let mut parameters = Vec::new();
        for declarator_id in node
            .descendants()
            .filter(|descendant| descendant.kind() == SyntaxKind::VariableDeclaratorId)
        {
            let mut previous = declarator_id
                .siblings_with_tokens(rowan::Direction::Prev)
                .skip(1)
                .filter(|element| !element.kind().is_trivia());
            let sibling = previous
                .next()
                .ok_or_else(|| LowerError::malformed(node.kind()))?;
            let ty = match &sibling {
                rowan::NodeOrToken::Token(token) if token.kind() == SyntaxKind::Ellipsis => {
                    let ty_node = previous
                        .next()
                        .and_then(rowan::NodeOrToken::into_node)
                        .ok_or_else(|| LowerError::malformed(node.kind()))?;
                    let element = self.ty(&ty_node)?;
                    self.apply_dims(element, 1, &ty_node)
                }
                rowan::NodeOrToken::Node(ty_node) => self.ty(ty_node)?,
                rowan::NodeOrToken::Token(token) => {
                    return Err(LowerError::malformed(token.kind()))
                }
            };
            let owner = declarator_id.parent().unwrap_or_else(|| node.clone());
            parameters.push(self.declarator_id_variable(&owner, &declarator_id, ty, None)?);
        }
        Ok(parameters)
    }

    /// Builds a `Variable` from a `VariableDeclaratorId`, honoring its
    /// array-dimension suffixes.
    pub(crate) fn declarator_id_variable(
        &self,
        owner: &SyntaxNode,
        declarator_id: &SyntaxNode,
        ty: Tree,
        initializer: Option<Tree>,
    ) -> Result<Tree, LowerError> {
        let name = find_token(declarator_id, SyntaxKind::Ident)
            .ok_or_else(|| LowerError::malformed(declarator_id.kind()))?;
        let ty = self.apply_dims(ty, dim_count(declarator_id), declarator_id);
        Ok(Tree::Variable(VariableTree {
            syntax: owner.clone(),
            line: self.line(owner),
            kind: Kind::Variable,
            modifiers: self.empty_modifiers(owner),
            ty: Box::new(ty),
            simple_name: token_text(&name),
            initializer: initializer.map(Box::new),
        }))
    }

    /// Expands `VariableDeclarators` into one `Variable` per declarator,
    /// sharing modifiers and base type, with per-declarator dimension
    /// suffixes and initializers.
    pub(crate) fn variable_declarators(
        &self,
        modifiers: &ModifiersTree,
        base_ty: &Tree,
        node: &SyntaxNode,
    ) -> Result<Vec<Tree>, LowerError> {
        let mut variables = Vec::new();
        for declarator in node
            .children()
            .filter(|child| child.kind() == SyntaxKind::VariableDeclarator)
        {
            let name = find_token(&declarator, SyntaxKind::Ident)
                .ok_or_else(|| LowerError::malformed(declarator.kind()))?;
            let ty = self.apply_dims(base_ty.clone(), dim_count(&declarator), &declarator);
            let initializer = match find_node(&declarator, SyntaxKind::VariableInitializer) {
                Some(initializer) => Some(Box::new(self.variable_initializer(&initializer)?)),
                None => None,
            };
            variables.push(Tree::Variable(VariableTree {
                syntax: declarator.clone(),
                line: self.line(&declarator),
                kind: Kind::Variable,
                modifiers: modifiers.clone(),
                ty: Box::new(ty),
                simple_name: token_text(&name),
                initializer,
            }));
        }
        Ok(variables)
    }

    /// Expands interface or annotation constants: the first name comes from
    /// the owning declaration, later names interleave with their rests.
    pub(crate) fn constants(
        &self,
        modifiers: &ModifiersTree,
        base_ty: &Tree,
        first_name: &SyntaxToken,
        node: &SyntaxNode,
    ) -> Result<Vec<Tree>, LowerError> {
        let mut names = vec![first_name.clone()];
        names.extend(
            node.children_with_tokens()
                .filter_map(rowan::NodeOrToken::into_token)
                .filter(|token| token.kind() == SyntaxKind::Ident),
        );
        let rests: Vec<SyntaxNode> = node
            .children()
            .filter(|child| child.kind() == SyntaxKind::ConstantDeclaratorRest)
            .collect();
        if names.len() != rests.len() {
            return Err(LowerError::malformed(node.kind()));
        }

        let mut constants = Vec::new();
        for (name, rest) in names.iter().zip(&rests) {
            let ty = self.apply_dims(base_ty.clone(), dim_count(rest), rest);
            let initializer = match find_node(rest, SyntaxKind::VariableInitializer) {
                Some(initializer) => Some(Box::new(self.variable_initializer(&initializer)?)),
                None => None,
            };
            constants.push(Tree::Variable(VariableTree {
                syntax: rest.clone(),
                line: self.line(rest),
                kind: Kind::Variable,
                modifiers: modifiers.clone(),
                ty: Box::new(ty),
                simple_name: token_text(name),
                initializer,
            }));
        }
        Ok(constants)
    }

    fn interface_body_members(&self, body: &SyntaxNode) -> Result<Vec<Tree>, LowerError> {
        let mut members = Vec::new();
        for declaration in body
            .children()
            .filter(|child| child.kind() == SyntaxKind::InterfaceBodyDeclaration)
        {
            let Some(member) = find_node(&declaration, SyntaxKind::InterfaceMemberDecl) else {
                // Stray semicolon.
                continue;
            };
            let modifiers = self.modifiers_of(&declaration)?;
            self.interface_member_declaration(modifiers, &member, &mut members)?;
        }
        Ok(members)
    }

    fn interface_member_declaration(
        &self,
        modifiers: ModifiersTree,
        member: &SyntaxNode,
        out: &mut Vec<Tree>,
    ) -> Result<(), LowerError> {
        for child in member.children() {
            if is_type_declaration(child.kind()) {
                out.push(self.type_like(modifiers, &child)?);
                return Ok(());
            }
        }

        if let Some(decl) = find_node(member, SyntaxKind::InterfaceMethodOrFieldDecl) {
            let ty_node = find_node(&decl, SyntaxKind::Type)
                .ok_or_else(|| LowerError::malformed(decl.kind()))?;
            let base_ty = self.ty(&ty_node)?;
            let name = find_token(&decl, SyntaxKind::Ident)
                .ok_or_else(|| LowerError::malformed(decl.kind()))?;
            let rest = find_node(&decl, SyntaxKind::InterfaceMethodOrFieldRest)
                .ok_or_else(|| LowerError::malformed(decl.kind()))?;
            if let Some(declarators) = find_node(&rest, SyntaxKind::ConstantDeclaratorsRest) {
                out.extend(self.constants(&modifiers, &base_ty, &name, &declarators)?);
            } else {
                let method_rest = find_node(&rest, SyntaxKind::InterfaceMethodDeclaratorRest)
                    .ok_or_else(|| LowerError::malformed(rest.kind()))?;
                out.push(self.method(member, modifiers, Some(base_ty), &name, &method_rest)?);
            }
            return Ok(());
        }

        if let Some(generic) = find_node(member, SyntaxKind::InterfaceGenericMethodDecl) {
            let return_type = self.optional_return_type(&generic)?;
            let name = find_token(&generic, SyntaxKind::Ident)
                .ok_or_else(|| LowerError::malformed(generic.kind()))?;
            let rest = find_node(&generic, SyntaxKind::InterfaceMethodDeclaratorRest)
                .ok_or_else(|| LowerError::malformed(generic.kind()))?;
            out.push(self.method(member, modifiers, return_type, &name, &rest)?);
            return Ok(());
        }

        if let Some(rest) = find_node(member, SyntaxKind::VoidInterfaceMethodDeclaratorsRest) {
            let name = find_token(member, SyntaxKind::Ident)
                .ok_or_else(|| LowerError::malformed(member.kind()))?;
            let void = self.void_type(member);
            out.push(self.method(member, modifiers, Some(void), &name, &rest)?);
            return Ok(());
        }

        Err(LowerError::malformed(member.kind()))
    }

    /// Lowers an inline class body to an anonymous class declaration.
    pub(crate) fn anonymous_class_body(
        &self,
        origin: &SyntaxNode,
        body: &SyntaxNode,
    ) -> Result<Tree, LowerError> {
        Ok(Tree::Class(ClassTree {
            syntax: body.clone(),
            line: self.line(body),
            kind: Kind::Class,
            modifiers: self.empty_modifiers(origin),
            simple_name: SmolStr::default(),
            super_class: None,
            super_interfaces: Vec::new(),
            members: self.class_body_members(body)?,
        }))
    }

    // -----------------------------------------------------------------------
    // Types and names
    // -----------------------------------------------------------------------

    /// Lowers a type node to a primitive type, an identifier chain, or an
    /// array type. Type arguments are erased in this pass.
    pub(crate) fn ty(&self, node: &SyntaxNode) -> Result<Tree, LowerError> {
        match node.kind() {
            SyntaxKind::Type | SyntaxKind::ReferenceType => {
                let base = first_node(node)?;
                let ty = self.ty(&base)?;
                Ok(self.apply_dims(ty, dim_count(node), node))
            }
            SyntaxKind::BasicType => {
                let keyword = elements(node)
                    .find_map(|element| element.into_token())
                    .ok_or_else(|| LowerError::malformed(node.kind()))?;
                Ok(Tree::PrimitiveType(PrimitiveTypeTree {
                    syntax: node.clone(),
                    line: self.line(node),
                    name: token_text(&keyword),
                }))
            }
            SyntaxKind::ClassType
            | SyntaxKind::CreatedName
            | SyntaxKind::QualifiedIdentifier => self.identifier_chain(node),
            _ => Err(LowerError::malformed(node.kind())),
        }
    }

    /// A synthesised `void` primitive anchored at the declaration.
    pub(crate) fn void_type(&self, origin: &SyntaxNode) -> Tree {
        Tree::PrimitiveType(PrimitiveTypeTree {
            syntax: origin.clone(),
            line: self.line(origin),
            name: SmolStr::new("void"),
        })
    }

    /// Lowers a dotted identifier sequence into a left-leaning
    /// `MemberSelect` chain over `Identifier` leaves, skipping any type
    /// arguments the node carries.
    pub(crate) fn identifier_chain(&self, node: &SyntaxNode) -> Result<Tree, LowerError> {
        let mut chain: Option<Tree> = None;
        for token in node
            .children_with_tokens()
            .filter_map(rowan::NodeOrToken::into_token)
            .filter(|token| token.kind() == SyntaxKind::Ident)
        {
            chain = Some(match chain {
                None => Tree::Identifier(IdentifierTree {
                    syntax: node.clone(),
                    line: self.line(node),
                    name: token_text(&token),
                }),
                Some(expression) => Tree::MemberSelect(MemberSelectTree {
                    syntax: node.clone(),
                    line: self.line(node),
                    expression: Box::new(expression),
                    identifier: token_text(&token),
                }),
            });
        }
        chain.ok_or_else(|| LowerError::malformed(node.kind()))
    }

    fn class_type_list(&self, node: &SyntaxNode) -> Result<Vec<Tree>, LowerError> {
        let mut types = Vec::new();
        for class_type in node
            .children()
            .filter(|child| child.kind() == SyntaxKind::ClassType)
        {
            types.push(self.identifier_chain(&class_type)?);
        }
        Ok(types)
    }

    /// Wraps `ty` in `count` nested array types.
    pub(crate) fn apply_dims(&self, ty: Tree, count: usize, origin: &SyntaxNode) -> Tree {
        let mut ty = ty;
        for _ in 0..count {
            ty = Tree::ArrayType(ArrayTypeTree {
                syntax: origin.clone(),
                line: self.line(origin),
                element_type: Box::new(ty),
            });
        }
        ty
    }
}

fn is_type_declaration(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::ClassDeclaration
            | SyntaxKind::InterfaceDeclaration
            | SyntaxKind::EnumDeclaration
            | SyntaxKind::AnnotationTypeDeclaration
    )
}
