//! The operator precedence table.
//!
//! Every token kind maps to a [`ParseRule`]: an optional prefix handler, an
//! optional infix handler, and a pair of binding powers. The driver consumes
//! an infix operator while its left binding power is at least the minimum it
//! was asked to honor, then recurses at the operator's right binding power.
//!
//! Associativity lives entirely in the binding powers:
//!
//! - left-associative: `right_bind = left_bind + 1`, so `a - b - c` parses
//!   as `(a - b) - c`
//! - right-associative: `right_bind = left_bind`, so `a = b = c` parses as
//!   `a = (b = c)`
//!
//! Ruby's table has its famous quirks: `and`/`or` bind far looser than
//! `&&`/`||`, the modifier keywords bind looser still, and assignment sits
//! in the middle rather than at the bottom.

use rbp_lex::TokenKind;

use crate::expr::{
    parse_array, parse_assign, parse_begin, parse_binary, parse_defined, parse_grouping,
    parse_index, parse_literal, parse_loop, parse_not, parse_ternary, parse_unary,
};
use crate::Parser;

/// Precedence levels, loosest to tightest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Precedence {
    /// Tokens that take part in no expression.
    None,
    /// Literals, grouping, `begin`, loops.
    Literal,
    /// Modifier `if` `unless` `while` `until`.
    Modifier,
    /// `and` `or`
    Composition,
    /// `not`
    Not,
    /// `defined?`
    Defined,
    /// `=` and every compound assignment.
    Assignment,
    /// Modifier `rescue`.
    ModifierRescue,
    /// `? :`
    Ternary,
    /// `..` `...`
    Range,
    /// `||`
    LogicalOr,
    /// `&&`
    LogicalAnd,
    /// `<=>` `==` `===` `!=` `=~` `!~`
    Equality,
    /// `>` `>=` `<` `<=`
    Comparison,
    /// `|` `^`
    BitwiseOr,
    /// `&`
    BitwiseAnd,
    /// `<<` `>>`
    Shift,
    /// `+` `-`
    Term,
    /// `*` `/` `%`
    Factor,
    /// `**`
    Exponent,
    /// Prefix `!` `~` `+` `-`.
    Unary,
    /// `[` as an index.
    Index,
}

impl Precedence {
    /// The binding power of this level.
    #[inline]
    pub const fn bind(self) -> u8 {
        self as u8
    }

    /// One more than this level's binding power. Passing this to the driver
    /// excludes operators at the level itself.
    #[inline]
    pub const fn tighter(self) -> u8 {
        self as u8 + 1
    }
}

/// A handler invoked with the triggering token already committed.
pub(crate) type ParseFn = for<'a, 'b> fn(&'b mut Parser<'a>);

/// One row of the precedence table.
#[derive(Clone, Copy)]
pub(crate) struct ParseRule {
    /// Handler when the token opens an expression.
    pub(crate) prefix: Option<ParseFn>,
    /// Handler when the token continues an expression.
    pub(crate) infix: Option<ParseFn>,
    /// How strongly the token binds what is to its left.
    pub(crate) left_bind: u8,
    /// The minimum binding the token demands of its right operand.
    pub(crate) right_bind: u8,
}

/// A left-associative rule at the given level.
const fn left(
    prefix: Option<ParseFn>,
    infix: Option<ParseFn>,
    precedence: Precedence,
) -> ParseRule {
    ParseRule {
        prefix,
        infix,
        left_bind: precedence.bind(),
        right_bind: precedence.bind() + 1,
    }
}

/// A right-associative rule at the given level.
const fn right(
    prefix: Option<ParseFn>,
    infix: Option<ParseFn>,
    precedence: Precedence,
) -> ParseRule {
    ParseRule {
        prefix,
        infix,
        left_bind: precedence.bind(),
        right_bind: precedence.bind(),
    }
}

/// A rule for tokens that take part in no expression.
const fn none() -> ParseRule {
    right(None, None, Precedence::None)
}

/// The rule for a token kind.
#[rustfmt::skip]
pub(crate) fn parse_rule(kind: TokenKind) -> ParseRule {
    use TokenKind::*;
    match kind {
        //                         Prefix                Infix                Level
        AmpersandEqual       => right(None,                Some(parse_assign),  Precedence::Assignment),
        Ampersand            => left(None,                 Some(parse_binary),  Precedence::BitwiseAnd),
        And                  => left(None,                 Some(parse_binary),  Precedence::Composition),
        BackReference        => right(Some(parse_literal), None,                Precedence::Literal),
        BangEqual            => left(None,                 Some(parse_binary),  Precedence::Equality),
        BangTilde            => left(None,                 Some(parse_binary),  Precedence::Equality),
        Bang                 => left(Some(parse_unary),    None,                Precedence::Unary),
        Begin                => right(Some(parse_begin),   None,                Precedence::Literal),
        CaretEqual           => right(None,                Some(parse_assign),  Precedence::Assignment),
        Caret                => left(None,                 Some(parse_binary),  Precedence::BitwiseOr),
        Compare              => left(None,                 Some(parse_binary),  Precedence::Equality),
        Defined              => left(Some(parse_defined),  None,                Precedence::Defined),
        DoubleAmpersandEqual => right(None,                Some(parse_assign),  Precedence::Assignment),
        DoubleAmpersand      => left(None,                 Some(parse_binary),  Precedence::LogicalAnd),
        DoubleDot            => left(Some(parse_unary),    Some(parse_binary),  Precedence::Range),
        DoubleEqual          => left(None,                 Some(parse_binary),  Precedence::Equality),
        DoublePipeEqual      => right(None,                Some(parse_assign),  Precedence::Assignment),
        DoublePipe           => left(None,                 Some(parse_binary),  Precedence::LogicalOr),
        DoubleStarEqual      => right(None,                Some(parse_assign),  Precedence::Assignment),
        DoubleStar           => right(None,                Some(parse_binary),  Precedence::Exponent),
        EqualTilde           => left(None,                 Some(parse_binary),  Precedence::Equality),
        Equal                => right(None,                Some(parse_assign),  Precedence::Assignment),
        False                => right(Some(parse_literal), None,                Precedence::Literal),
        GlobalVariable       => right(Some(parse_literal), None,                Precedence::Literal),
        GreaterEqual         => left(None,                 Some(parse_binary),  Precedence::Comparison),
        Greater              => left(None,                 Some(parse_binary),  Precedence::Comparison),
        Identifier           => right(Some(parse_literal), None,                Precedence::Literal),
        If                   => left(None,                 Some(parse_binary),  Precedence::Modifier),
        Integer              => right(Some(parse_literal), None,                Precedence::Literal),
        LeftBracket          => left(Some(parse_array),    Some(parse_index),   Precedence::Index),
        LeftParenthesis      => right(Some(parse_grouping), None,               Precedence::Literal),
        LessEqual            => left(None,                 Some(parse_binary),  Precedence::Comparison),
        Less                 => left(None,                 Some(parse_binary),  Precedence::Comparison),
        MethodIdentifier     => right(Some(parse_literal), None,                Precedence::Literal),
        MinusEqual           => right(None,                Some(parse_assign),  Precedence::Assignment),
        Minus                => left(Some(parse_unary),    Some(parse_binary),  Precedence::Term),
        Nil                  => right(Some(parse_literal), None,                Precedence::Literal),
        Not                  => left(Some(parse_not),      None,                Precedence::Not),
        NthReference         => right(Some(parse_literal), None,                Precedence::Literal),
        Or                   => left(None,                 Some(parse_binary),  Precedence::Composition),
        PercentEqual         => right(None,                Some(parse_assign),  Precedence::Assignment),
        Percent              => left(None,                 Some(parse_binary),  Precedence::Factor),
        PipeEqual            => right(None,                Some(parse_assign),  Precedence::Assignment),
        Pipe                 => left(None,                 Some(parse_binary),  Precedence::BitwiseOr),
        PlusEqual            => right(None,                Some(parse_assign),  Precedence::Assignment),
        Plus                 => left(Some(parse_unary),    Some(parse_binary),  Precedence::Term),
        QuestionMark         => right(None,                Some(parse_ternary), Precedence::Ternary),
        Rescue               => right(None,                Some(parse_binary),  Precedence::ModifierRescue),
        Self_                => right(Some(parse_literal), None,                Precedence::Literal),
        ShiftLeftEqual       => right(None,                Some(parse_assign),  Precedence::Assignment),
        ShiftLeft            => left(None,                 Some(parse_binary),  Precedence::Shift),
        ShiftRightEqual      => right(None,                Some(parse_assign),  Precedence::Assignment),
        ShiftRight           => left(None,                 Some(parse_binary),  Precedence::Shift),
        SlashEqual           => right(None,                Some(parse_assign),  Precedence::Assignment),
        Slash                => left(None,                 Some(parse_binary),  Precedence::Factor),
        StarEqual            => right(None,                Some(parse_assign),  Precedence::Assignment),
        Star                 => left(None,                 Some(parse_binary),  Precedence::Factor),
        Tilde                => left(Some(parse_unary),    None,                Precedence::Unary),
        TripleDot            => left(Some(parse_unary),    Some(parse_binary),  Precedence::Range),
        TripleEqual          => left(None,                 Some(parse_binary),  Precedence::Equality),
        True                 => right(Some(parse_literal), None,                Precedence::Literal),
        Unless               => left(None,                 Some(parse_binary),  Precedence::Modifier),
        Until                => left(Some(parse_loop),     Some(parse_binary),  Precedence::Modifier),
        While                => left(Some(parse_loop),     Some(parse_binary),  Precedence::Modifier),

        Eof | Colon | Comma | End | Ensure | Newline | RightBracket
        | RightParenthesis | Semicolon => none(),
    }
}
