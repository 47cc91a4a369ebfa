//! Syntactic context frames.
//!
//! The driver stops consuming an expression when the look-ahead token closes
//! the construct it is currently inside. Which tokens close what is a
//! property of the innermost open frame: `]` closes an array, `end` closes
//! a loop or an ensure clause, and a begin body stops at either `ensure` or
//! `end`. The top level has no terminator at all; only end-of-input stops
//! it.

use rbp_lex::TokenKind;

/// The kind of the innermost open construct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextKind {
    /// Top-level statements.
    Main,
    /// Between `[` and `]`.
    Array,
    /// Between `begin` and its `ensure` or `end`.
    Begin,
    /// Between `ensure` and `end`.
    Ensure,
    /// Between a loop predicate's separator and `end`.
    Loop,
}

impl ContextKind {
    /// Returns true if the given token closes this context.
    pub fn terminates(self, kind: TokenKind) -> bool {
        match self {
            ContextKind::Main => false,
            ContextKind::Array => kind == TokenKind::RightBracket,
            ContextKind::Begin => kind == TokenKind::Ensure || kind == TokenKind::End,
            ContextKind::Ensure | ContextKind::Loop => kind == TokenKind::End,
        }
    }
}
