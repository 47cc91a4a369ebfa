//! The visitor interface.
//!
//! The parser builds no tree. As each syntactic form is recognized it calls
//! the matching method on the caller's visitor, bottom-up: operands before
//! operators, bodies before the construct that encloses them. Whatever the
//! visitor accumulates (text, a packed buffer, an AST of its own) is its
//! business; the parser only reports shapes and the tokens that bracket
//! them.
//!
//! Every method defaults to a no-op so a visitor implements only the shapes
//! it cares about. Visitors must not reach back into the parser; one parse
//! is strictly sequential.

use rbp_lex::Token;

/// Callbacks invoked as each node is recognized.
pub trait Visitor {
    /// An array literal. `size` is the number of elements parsed between the
    /// brackets.
    fn array(&mut self, _opening: Token, _closing: Token, _size: usize) {}

    /// An assignment, plain or compound. The operator token tells which.
    fn assign(&mut self, _operator: Token) {}

    /// A `begin ... end` block, with or without an `ensure` clause.
    fn begin(&mut self, _opening: Token, _closing: Token) {}

    /// A binary expression. Modifier keywords (`if`, `unless`, `while`,
    /// `until`, `rescue`) arrive here too; the operator token distinguishes
    /// them.
    fn binary(&mut self, _operator: Token) {}

    /// A `defined?` expression.
    fn defined(&mut self, _keyword: Token) {}

    /// A parenthesized expression.
    fn group(&mut self, _opening: Token, _closing: Token) {}

    /// An index with no argument, `foo[]`.
    fn index_call(&mut self, _opening: Token, _closing: Token) {}

    /// An index with an argument expression, `foo[bar]`.
    fn index_expr(&mut self, _opening: Token, _closing: Token) {}

    /// A literal value: integer, identifier, method identifier, global,
    /// back reference, nth reference, `true`, `false`, `nil`, or `self`.
    fn literal(&mut self, _value: Token) {}

    /// A `not` expression.
    fn not(&mut self, _keyword: Token) {}

    /// A ternary conditional. Predicate, truthy, and falsey arms have
    /// already been visited.
    fn ternary(&mut self) {}

    /// A prefix operator expression: `-a`, `+a`, `!a`, `~a`, or a beginless
    /// range.
    fn unary(&mut self, _operator: Token) {}

    /// An `until ... end` loop.
    fn until_block(&mut self, _keyword: Token) {}

    /// A `while ... end` loop.
    fn while_block(&mut self, _keyword: Token) {}
}
