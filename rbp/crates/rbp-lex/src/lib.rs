//! rbp-lex - Lexical analysis for a Ruby subset.
//!
//! This crate turns a borrowed byte buffer into a stream of typed tokens.
//! The scanner is hand-written and direct-coded: one dispatch on the leading
//! byte, then a specialized method per token family (operators, numbers,
//! identifiers, `$`-prefixed globals). Tokens are `{kind, start, end}` spans
//! into the caller's buffer; the scanner allocates nothing and copies no
//! source text.
//!
//! Two consumers sit on top of the token stream: the Pratt parser in
//! `rbp-par`, which pulls tokens one at a time through the scanner's
//! previous/current window, and [`tokenize`], which dumps the whole stream
//! in a Ripper-compatible textual form.
//!
//! Known limitation: a bare `.` is not a token in this subset, so the
//! scanner reports end-of-input when it sees one.

pub mod cursor;
mod edge_cases;
pub mod encoding;
pub mod lexer;
pub mod ripper;
pub mod token;
mod tokenize;

pub use encoding::{Ascii, Encoding};
pub use lexer::Lexer;
pub use ripper::ripper_event;
pub use token::{keyword_from_ident, Token, TokenKind};
pub use tokenize::tokenize;
