//! Expression handlers.
//!
//! Each handler runs with its triggering token already committed as
//! `previous` and one token of look-ahead in `current`. Prefix handlers own
//! the whole form they start; infix handlers own the right operand of the
//! operator they were dispatched on. Every handler ends by reporting the
//! finished node to the visitor, which is what makes the visit order
//! bottom-up.

use rbp_lex::TokenKind;

use crate::context::ContextKind;
use crate::grammar::{parse_rule, Precedence};
use crate::Parser;

/// A literal value.
///
/// ```text
///     1
///     foo
///     $1
///     nil
/// ```
///
pub(crate) fn parse_literal(parser: &mut Parser<'_>) {
    let value = parser.previous();
    parser.visitor.literal(value);
}

/// A prefix operator expression.
///
/// ```text
///     -foo
///     !bar
/// ```
///
pub(crate) fn parse_unary(parser: &mut Parser<'_>) {
    let operator = parser.previous();
    parser.parse_precedence(Precedence::Unary.bind());
    parser.visitor.unary(operator);
}

/// A binary expression. The right operand binds at the operator's own right
/// binding power, which is where associativity comes from.
///
/// ```text
///     1 + 2
///     foo if bar
/// ```
///
pub(crate) fn parse_binary(parser: &mut Parser<'_>) {
    let operator = parser.previous();
    parser.parse_precedence(parse_rule(operator.kind).right_bind);
    parser.visitor.binary(operator);
}

/// An assignment expression, plain or compound.
///
/// ```text
///     foo = 1
///     foo += 1
/// ```
///
pub(crate) fn parse_assign(parser: &mut Parser<'_>) {
    let operator = parser.previous();
    parser.parse_precedence(parse_rule(operator.kind).right_bind);
    parser.visitor.assign(operator);
}

/// A parenthesized expression.
///
/// ```text
///     (1 + 2)
/// ```
///
pub(crate) fn parse_grouping(parser: &mut Parser<'_>) {
    let opening = parser.previous();

    parser.parse_expression();
    parser.expect(
        TokenKind::RightParenthesis,
        "Expected ')' after expression.",
    );

    let closing = parser.previous();
    parser.visitor.group(opening, closing);
}

/// An array literal.
///
/// ```text
///     []
///     [1, 2, 3]
/// ```
///
pub(crate) fn parse_array(parser: &mut Parser<'_>) {
    let opening = parser.previous();

    let size = if parser.accept(TokenKind::RightBracket) {
        0
    } else {
        let size = parser.parse_list(ContextKind::Array);
        parser.expect(
            TokenKind::RightBracket,
            "Expected ']' after the array elements.",
        );
        size
    };

    let closing = parser.previous();
    parser.visitor.array(opening, closing, size);
}

/// An index expression, with or without an argument. The receiver has
/// already been parsed.
///
/// ```text
///     foo[]
///     foo[1]
/// ```
///
pub(crate) fn parse_index(parser: &mut Parser<'_>) {
    let opening = parser.previous();

    if parser.accept(TokenKind::RightBracket) {
        let closing = parser.previous();
        parser.visitor.index_call(opening, closing);
    } else {
        parser.parse_precedence(Precedence::ModifierRescue.tighter());
        parser.expect(TokenKind::RightBracket, "Expected ']' after expression.");

        let closing = parser.previous();
        parser.visitor.index_expr(opening, closing);
    }
}

/// A ternary conditional. Both arms bind at the `?` token's right binding
/// power, so chains nest to the right.
///
/// ```text
///     foo ? bar : baz
/// ```
///
pub(crate) fn parse_ternary(parser: &mut Parser<'_>) {
    let right_bind = parse_rule(parser.previous().kind).right_bind;

    parser.parse_precedence(right_bind);
    parser.expect(TokenKind::Colon, "Expected ':' after expression.");

    parser.parse_precedence(right_bind);
    parser.visitor.ternary();
}

/// A `defined?` expression, with or without parentheses.
///
/// ```text
///     defined? foo
///     defined?(foo)
/// ```
///
pub(crate) fn parse_defined(parser: &mut Parser<'_>) {
    let keyword = parser.previous();

    if parser.accept(TokenKind::LeftParenthesis) {
        parser.parse_expression();
        parser.expect(
            TokenKind::RightParenthesis,
            "Expected ')' after expression.",
        );
    } else {
        parser.parse_expression();
    }

    parser.visitor.defined(keyword);
}

/// A `not` expression, with or without parentheses. The bare operand binds
/// just above `not` itself, so `not a and b` negates only `a`.
///
/// ```text
///     not foo
///     not (foo)
/// ```
///
pub(crate) fn parse_not(parser: &mut Parser<'_>) {
    let keyword = parser.previous();

    if parser.accept(TokenKind::LeftParenthesis) {
        parser.parse_expression();
        parser.expect(
            TokenKind::RightParenthesis,
            "Expected ')' after expression.",
        );
    } else {
        parser.parse_precedence(parse_rule(keyword.kind).right_bind);
    }

    parser.visitor.not(keyword);
}

/// A `begin` block with an optional `ensure` clause.
///
/// ```text
///     begin
///     end
///
///     begin
///     ensure
///     end
/// ```
///
pub(crate) fn parse_begin(parser: &mut Parser<'_>) {
    let opening = parser.previous();

    parser.accept_any(&[TokenKind::Newline, TokenKind::Semicolon]);
    parser.parse_list(ContextKind::Begin);

    if parser.accept(TokenKind::Ensure) {
        parser.accept_any(&[TokenKind::Newline, TokenKind::Semicolon]);
        parser.parse_list(ContextKind::Ensure);
    }

    parser.expect(TokenKind::End, "Expected 'end' after the begin block.");
    let closing = parser.previous();
    parser.visitor.begin(opening, closing);
}

/// A `while` or `until` loop.
///
/// ```text
///     while foo
///     end
/// ```
///
pub(crate) fn parse_loop(parser: &mut Parser<'_>) {
    let keyword = parser.previous();

    parser.parse_expression();
    parser.expect_any(
        &[TokenKind::Newline, TokenKind::Semicolon],
        "Expected separator after predicate.",
    );
    parser.parse_list(ContextKind::Loop);
    parser.expect(TokenKind::End, "Expected 'end' after the loop body.");

    if keyword.kind == TokenKind::While {
        parser.visitor.while_block(keyword);
    } else {
        parser.visitor.until_block(keyword);
    }
}
