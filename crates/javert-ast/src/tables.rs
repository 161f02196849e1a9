//! Kind tables: pure mappings from terminal tags to AST kinds.
//!
//! Each lookup is a build-time constant match over a closed input domain.
//! A tag outside the requested category fails closed with
//! [`LowerError::UnknownOperator`] (operators) or
//! [`LowerError::MalformedAst`] (literals, modifiers).

use javert_syntax::SyntaxKind;

use crate::error::LowerError;
use crate::kind::{Kind, Modifier};

/// Maps a literal terminal tag to its literal kind.
pub fn literal_kind(tag: SyntaxKind) -> Result<Kind, LowerError> {
    match tag {
        SyntaxKind::IntLiteral => Ok(Kind::IntLiteral),
        SyntaxKind::LongLiteral => Ok(Kind::LongLiteral),
        SyntaxKind::FloatLiteral => Ok(Kind::FloatLiteral),
        SyntaxKind::DoubleLiteral => Ok(Kind::DoubleLiteral),
        SyntaxKind::CharLiteral => Ok(Kind::CharLiteral),
        SyntaxKind::StringLiteral => Ok(Kind::StringLiteral),
        SyntaxKind::KwTrue | SyntaxKind::KwFalse => Ok(Kind::BooleanLiteral),
        SyntaxKind::KwNull => Ok(Kind::NullLiteral),
        _ => Err(LowerError::malformed(tag)),
    }
}

/// Maps a punctuation tag to its binary operator kind.
pub fn binary_kind(tag: SyntaxKind) -> Result<Kind, LowerError> {
    match tag {
        SyntaxKind::Star => Ok(Kind::Multiply),
        SyntaxKind::Slash => Ok(Kind::Divide),
        SyntaxKind::Percent => Ok(Kind::Remainder),
        SyntaxKind::Plus => Ok(Kind::Plus),
        SyntaxKind::Minus => Ok(Kind::Minus),
        SyntaxKind::Shl => Ok(Kind::LeftShift),
        SyntaxKind::Shr => Ok(Kind::RightShift),
        SyntaxKind::Ushr => Ok(Kind::UnsignedRightShift),
        SyntaxKind::Lt => Ok(Kind::LessThan),
        SyntaxKind::Gt => Ok(Kind::GreaterThan),
        SyntaxKind::LtEq => Ok(Kind::LessThanOrEqual),
        SyntaxKind::GtEq => Ok(Kind::GreaterThanOrEqual),
        SyntaxKind::EqEq => Ok(Kind::EqualTo),
        SyntaxKind::NotEq => Ok(Kind::NotEqualTo),
        SyntaxKind::Amp => Ok(Kind::And),
        SyntaxKind::Caret => Ok(Kind::Xor),
        SyntaxKind::Pipe => Ok(Kind::Or),
        SyntaxKind::AmpAmp => Ok(Kind::ConditionalAnd),
        SyntaxKind::PipePipe => Ok(Kind::ConditionalOr),
        _ => Err(LowerError::unknown_operator(tag)),
    }
}

/// Maps a punctuation tag to its prefix operator kind.
pub fn prefix_kind(tag: SyntaxKind) -> Result<Kind, LowerError> {
    match tag {
        SyntaxKind::Plus => Ok(Kind::UnaryPlus),
        SyntaxKind::Minus => Ok(Kind::UnaryMinus),
        SyntaxKind::PlusPlus => Ok(Kind::PrefixIncrement),
        SyntaxKind::MinusMinus => Ok(Kind::PrefixDecrement),
        SyntaxKind::Bang => Ok(Kind::LogicalComplement),
        SyntaxKind::Tilde => Ok(Kind::BitwiseComplement),
        _ => Err(LowerError::unknown_operator(tag)),
    }
}

/// Maps a punctuation tag to its postfix operator kind.
pub fn postfix_kind(tag: SyntaxKind) -> Result<Kind, LowerError> {
    match tag {
        SyntaxKind::PlusPlus => Ok(Kind::PostfixIncrement),
        SyntaxKind::MinusMinus => Ok(Kind::PostfixDecrement),
        _ => Err(LowerError::unknown_operator(tag)),
    }
}

/// Maps a punctuation tag to its assignment operator kind.
pub fn assignment_kind(tag: SyntaxKind) -> Result<Kind, LowerError> {
    match tag {
        SyntaxKind::Eq => Ok(Kind::Assignment),
        SyntaxKind::StarEq => Ok(Kind::MultiplyAssignment),
        SyntaxKind::SlashEq => Ok(Kind::DivideAssignment),
        SyntaxKind::PercentEq => Ok(Kind::RemainderAssignment),
        SyntaxKind::PlusEq => Ok(Kind::PlusAssignment),
        SyntaxKind::MinusEq => Ok(Kind::MinusAssignment),
        SyntaxKind::ShlEq => Ok(Kind::LeftShiftAssignment),
        SyntaxKind::ShrEq => Ok(Kind::RightShiftAssignment),
        SyntaxKind::UshrEq => Ok(Kind::UnsignedRightShiftAssignment),
        SyntaxKind::AmpEq => Ok(Kind::AndAssignment),
        SyntaxKind::CaretEq => Ok(Kind::XorAssignment),
        SyntaxKind::PipeEq => Ok(Kind::OrAssignment),
        _ => Err(LowerError::unknown_operator(tag)),
    }
}

/// Maps a modifier keyword tag to its [`Modifier`].
pub fn modifier_kind(tag: SyntaxKind) -> Result<Modifier, LowerError> {
    match tag {
        SyntaxKind::KwPublic => Ok(Modifier::Public),
        SyntaxKind::KwProtected => Ok(Modifier::Protected),
        SyntaxKind::KwPrivate => Ok(Modifier::Private),
        SyntaxKind::KwStatic => Ok(Modifier::Static),
        SyntaxKind::KwAbstract => Ok(Modifier::Abstract),
        SyntaxKind::KwFinal => Ok(Modifier::Final),
        SyntaxKind::KwNative => Ok(Modifier::Native),
        SyntaxKind::KwSynchronized => Ok(Modifier::Synchronized),
        SyntaxKind::KwTransient => Ok(Modifier::Transient),
        SyntaxKind::KwVolatile => Ok(Modifier::Volatile),
        SyntaxKind::KwStrictfp => Ok(Modifier::Strictfp),
        _ => Err(LowerError::malformed(tag)),
    }
}
