//! Syntax tree types for the Java grammar surface.
//!
//! This module provides the `rowan`-based syntax tree vocabulary: the
//! `SyntaxKind` enum covering both terminal token tags and non-terminal
//! grammar-rule tags, and the `JavaLanguage` marker that ties the kinds to
//! `rowan`'s untyped trees.
//!
//! The tag set is closed. A parser producing these trees and any consumer
//! lowering them agree on this vocabulary and nothing else.

/// Defines `SyntaxKind` together with the raw-kind lookup table.
///
/// Tokens come first so that `is_token` can test against the `Error`
/// boundary; the lookup table must enumerate the variants in declaration
/// order for `kind_from_raw` to be correct, which is why both are generated
/// from the same list.
macro_rules! define_syntax_kinds {
    (
        tokens: [$($token:ident,)*],
        nodes: [$($node:ident,)*],
    ) => {
        /// All syntax token and node kinds in the Java grammar surface.
        ///
        /// Token kinds are terminal tags (keywords, punctuation, literals,
        /// identifiers, trivia); node kinds are the grammar-rule tags
        /// produced by the parser.
        // Variants mirror grammar-rule names; documenting each would be noisy.
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        pub enum SyntaxKind {
            $($token,)*
            $($node,)*
        }

        const SYNTAX_KINDS: &[SyntaxKind] = &[
            $(SyntaxKind::$token,)*
            $(SyntaxKind::$node,)*
        ];
    };
}

define_syntax_kinds! {
    tokens: [
        // Trivia
        Whitespace,
        LineComment,
        BlockComment,

        // Identifiers and literals
        Ident,
        IntLiteral,
        LongLiteral,
        FloatLiteral,
        DoubleLiteral,
        CharLiteral,
        StringLiteral,

        // Declaration keywords
        KwPackage,
        KwImport,
        KwClass,
        KwInterface,
        KwEnum,
        KwExtends,
        KwImplements,
        KwThrows,
        KwVoid,

        // Expression keywords
        KwThis,
        KwSuper,
        KwNew,
        KwInstanceof,
        KwTrue,
        KwFalse,
        KwNull,

        // Modifier keywords
        KwPublic,
        KwProtected,
        KwPrivate,
        KwStatic,
        KwAbstract,
        KwFinal,
        KwNative,
        KwSynchronized,
        KwTransient,
        KwVolatile,
        KwStrictfp,

        // Statement keywords
        KwAssert,
        KwIf,
        KwElse,
        KwSwitch,
        KwCase,
        KwDefault,
        KwWhile,
        KwDo,
        KwFor,
        KwBreak,
        KwContinue,
        KwReturn,
        KwThrow,
        KwTry,
        KwCatch,
        KwFinally,

        // Primitive type keywords
        KwBoolean,
        KwByte,
        KwChar,
        KwShort,
        KwInt,
        KwLong,
        KwFloat,
        KwDouble,

        // Assignment operators
        Eq,
        PlusEq,
        MinusEq,
        StarEq,
        SlashEq,
        PercentEq,
        AmpEq,
        PipeEq,
        CaretEq,
        ShlEq,
        ShrEq,
        UshrEq,

        // Comparison operators
        EqEq,
        NotEq,
        Lt,
        Gt,
        LtEq,
        GtEq,

        // Logical and bitwise operators
        AmpAmp,
        PipePipe,
        Amp,
        Pipe,
        Caret,

        // Arithmetic and shift operators
        Plus,
        Minus,
        Star,
        Slash,
        Percent,
        Shl,
        Shr,
        Ushr,

        // Unary operators
        Bang,
        Tilde,
        PlusPlus,
        MinusMinus,

        // Punctuation
        Question,
        Colon,
        Dot,
        Comma,
        Semi,
        LParen,
        RParen,
        LBrace,
        RBrace,
        LBracket,
        RBracket,
        At,
        Ellipsis,

        // Must stay last: doubles as the token/node boundary.
        Error,
    ],
    nodes: [
        // Compilation unit structure
        CompilationUnit,
        PackageDeclaration,
        ImportDeclaration,
        TypeDeclaration,

        // Type declarations
        ClassDeclaration,
        InterfaceDeclaration,
        EnumDeclaration,
        AnnotationTypeDeclaration,
        ClassBody,
        InterfaceBody,
        EnumBody,
        EnumConstants,
        EnumConstant,
        EnumBodyDeclarations,

        // Member declarations
        ClassBodyDeclaration,
        InterfaceBodyDeclaration,
        ClassInitDeclaration,
        MemberDecl,
        InterfaceMemberDecl,
        FieldDeclaration,
        MethodDeclaratorRest,
        VoidMethodDeclaratorRest,
        ConstructorDeclaratorRest,
        GenericMethodOrConstructorRest,
        InterfaceMethodOrFieldDecl,
        InterfaceMethodOrFieldRest,
        InterfaceMethodDeclaratorRest,
        VoidInterfaceMethodDeclaratorsRest,
        InterfaceGenericMethodDecl,
        ConstantDeclaratorsRest,
        ConstantDeclaratorRest,

        // Annotation type members
        AnnotationTypeBody,
        AnnotationTypeElementDeclaration,
        AnnotationTypeElementRest,
        AnnotationMethodOrConstantRest,
        AnnotationMethodRest,
        DefaultValue,

        // Method pieces
        MethodBody,
        FormalParameters,
        FormalParameter,
        VariableDeclaratorId,

        // Variable declarators
        VariableDeclarators,
        VariableDeclarator,
        VariableInitializer,
        ArrayInitializer,

        // Modifiers and annotations
        Modifiers,
        Annotation,

        // Types
        Type,
        ReferenceType,
        ClassType,
        ClassTypeList,
        BasicType,
        TypeArguments,
        TypeParameters,
        NonWildcardTypeArguments,
        Dim,
        DimExpr,

        // Names
        QualifiedIdentifier,
        QualifiedIdentifierList,

        // Statements
        Statement,
        Block,
        BlockStatements,
        LocalVariableDeclarationStatement,
        EmptyStatement,
        LabeledStatement,
        ExpressionStatement,
        IfStatement,
        AssertStatement,
        SwitchStatement,
        SwitchBlockStatementGroup,
        SwitchLabel,
        WhileStatement,
        DoStatement,
        ForStatement,
        ForInit,
        ForUpdate,
        BreakStatement,
        ContinueStatement,
        ReturnStatement,
        ThrowStatement,
        SynchronizedStatement,
        TryStatement,
        TryWithResourcesStatement,
        ResourceSpecification,
        Resource,
        CatchClause,
        CatchFormalParameter,
        CatchType,
        Finally,

        // Expressions
        Expression,
        StatementExpression,
        ConstantExpression,
        AssignmentExpression,
        ConditionalExpression,
        ConditionalOrExpression,
        ConditionalAndExpression,
        InclusiveOrExpression,
        ExclusiveOrExpression,
        AndExpression,
        EqualityExpression,
        RelationalExpression,
        ShiftExpression,
        AdditiveExpression,
        MultiplicativeExpression,
        UnaryExpression,
        ParExpression,
        Primary,
        Selector,
        IdentifierSuffix,
        SuperSuffix,
        Literal,
        Arguments,

        // Creators
        Creator,
        CreatedName,
        InnerCreator,
        ClassCreatorRest,
        ArrayCreatorRest,
        ExplicitGenericInvocation,
        ExplicitGenericInvocationSuffix,
    ],
}

impl SyntaxKind {
    /// Returns `true` if this is a trivia kind.
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::LineComment | Self::BlockComment
        )
    }

    /// Returns `true` if this is a token kind (a terminal tag).
    #[must_use]
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::Error as u16)
    }

    /// Returns `true` if this is a grammar-rule kind (a non-terminal tag).
    #[must_use]
    pub fn is_node(self) -> bool {
        !self.is_token()
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// The language type for the Java grammar surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JavaLanguage {}

impl rowan::Language for JavaLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        SYNTAX_KINDS
            .get(raw.0 as usize)
            .copied()
            .unwrap_or(SyntaxKind::Error)
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// A syntax node in the Java concrete syntax tree.
pub type SyntaxNode = rowan::SyntaxNode<JavaLanguage>;

/// A syntax token in the Java concrete syntax tree.
pub type SyntaxToken = rowan::SyntaxToken<JavaLanguage>;

/// A syntax element (either node or token) in the Java concrete syntax tree.
pub type SyntaxElement = rowan::SyntaxElement<JavaLanguage>;

/// A builder for syntax trees.
pub type SyntaxTreeBuilder = rowan::GreenNodeBuilder<'static>;
