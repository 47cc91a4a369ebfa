//! rbp-par - A single-pass Pratt parser for a Ruby subset.
//!
//! The parser pulls tokens from `rbp-lex` one at a time and drives a
//! caller-supplied [`Visitor`] as each syntactic form is recognized. There
//! is no AST here: the visitor is the only output channel, and the
//! diagnostic [`Handler`] is the only error channel. Parsing is best-effort;
//! a malformed construct produces one diagnostic and parsing resumes as if
//! the missing token had been present.
//!
//! The driver is a classic top-down operator precedence loop: dispatch the
//! committed token's prefix handler, then keep consuming infix operators
//! while their left binding power clears the minimum the caller asked for.
//! A stack of [`ContextKind`] frames tells the loop which tokens close the
//! construct it is currently inside, so `]` stops an array element where it
//! would be an orphan at the top level.
//!
//! # Examples
//!
//! ```
//! use rbp_lex::Token;
//! use rbp_par::{parse, Visitor};
//! use rbp_util::Handler;
//!
//! #[derive(Default)]
//! struct Counter {
//!     literals: usize,
//! }
//!
//! impl Visitor for Counter {
//!     fn literal(&mut self, _value: Token) {
//!         self.literals += 1;
//!     }
//! }
//!
//! let mut counter = Counter::default();
//! let handler = Handler::new();
//! parse(b"1 + 2 * 3", &mut counter, &handler);
//! assert_eq!(counter.literals, 3);
//! ```

pub mod context;
mod edge_cases;
mod expr;
pub mod grammar;
pub mod visitor;

use rbp_lex::{Lexer, Token, TokenKind};
use rbp_util::Handler;

pub use context::ContextKind;
pub use grammar::Precedence;
pub use visitor::Visitor;

use grammar::parse_rule;

/// Parse the source, reporting each recognized node to the visitor.
///
/// The source buffer is borrowed for the duration of the call and the
/// visitor is the only side-effect sink. Anything the parser had to guess
/// about lands on the handler as a diagnostic; the parse itself always runs
/// to completion.
pub fn parse(source: &[u8], visitor: &mut dyn Visitor, handler: &Handler) {
    let mut parser = Parser::new(source, visitor, handler);
    parser.advance();
    parser.parse_list(ContextKind::Main);
}

/// Parser state for one parse. Not reentrant; visitors must not call back
/// into it.
pub struct Parser<'a> {
    /// Token source, holding the previous/current window.
    pub(crate) lexer: Lexer<'a>,

    /// Where recognized nodes go.
    pub(crate) visitor: &'a mut dyn Visitor,

    /// Where diagnostics go.
    pub(crate) handler: &'a Handler,

    /// Open syntactic frames, innermost last.
    pub(crate) context: Vec<ContextKind>,
}

impl<'a> Parser<'a> {
    /// Create a parser over the given source.
    pub fn new(source: &'a [u8], visitor: &'a mut dyn Visitor, handler: &'a Handler) -> Self {
        Self {
            lexer: Lexer::new(source),
            visitor,
            handler,
            context: Vec::new(),
        }
    }

    /// The last committed token.
    #[inline]
    pub(crate) fn previous(&self) -> Token {
        self.lexer.previous()
    }

    /// The look-ahead token.
    #[inline]
    pub(crate) fn current(&self) -> Token {
        self.lexer.current()
    }

    /// Commit the look-ahead token and scan the next one.
    #[inline]
    pub(crate) fn advance(&mut self) {
        self.lexer.next_token();
    }

    /// The innermost open frame.
    #[inline]
    fn current_context(&self) -> ContextKind {
        self.context.last().copied().unwrap_or(ContextKind::Main)
    }

    /// Consume the look-ahead token if it has the given kind.
    pub(crate) fn accept(&mut self, kind: TokenKind) -> bool {
        if self.current().kind == kind {
            self.advance();
            return true;
        }
        false
    }

    /// Consume the look-ahead token if it has any of the given kinds.
    pub(crate) fn accept_any(&mut self, kinds: &[TokenKind]) -> bool {
        for &kind in kinds {
            if self.accept(kind) {
                return true;
            }
        }
        false
    }

    /// Consume the look-ahead token if it has the given kind, or record a
    /// diagnostic and carry on as if it had been there.
    pub(crate) fn expect(&mut self, kind: TokenKind, message: &str) {
        if !self.accept(kind) {
            let found = self.current();
            self.handler.error(message, found.span(self.lexer.line()));
        }
    }

    /// [`expect`](Parser::expect) over a set of acceptable kinds.
    pub(crate) fn expect_any(&mut self, kinds: &[TokenKind], message: &str) {
        if !self.accept_any(kinds) {
            let found = self.current();
            self.handler.error(message, found.span(self.lexer.line()));
        }
    }

    /// The driver. Parses one expression whose operators all bind at least
    /// as tightly as `min_bind`.
    ///
    /// Returns without consuming anything at end-of-input or when the
    /// look-ahead token closes the innermost open frame. A token with no
    /// prefix rule in opening position is an orphan; the driver gives up on
    /// it silently and leaves the visitor untouched.
    pub(crate) fn parse_precedence(&mut self, min_bind: u8) {
        if self.current().kind == TokenKind::Eof {
            return;
        }
        if self.current_context().terminates(self.current().kind) {
            return;
        }

        self.advance();

        let Some(prefix) = parse_rule(self.previous().kind).prefix else {
            return;
        };
        prefix(self);

        while parse_rule(self.current().kind).left_bind >= min_bind {
            self.advance();

            let Some(infix) = parse_rule(self.previous().kind).infix else {
                return;
            };
            infix(self);
        }
    }

    /// Parse one full expression, modifiers included.
    pub(crate) fn parse_expression(&mut self) {
        self.parse_precedence(Precedence::None.tighter());
    }

    /// Parse a separated run of expressions inside a new context frame.
    ///
    /// Array frames separate with `,`; every other frame separates with a
    /// newline or `;`. The loop stops at the first missing separator, and
    /// the frame is popped on the way out. Returns the number of
    /// expressions parsed, counting a trailing empty slot when the list
    /// ends with a separator.
    pub(crate) fn parse_list(&mut self, context: ContextKind) -> usize {
        self.context.push(context);

        let mut size = 0;
        loop {
            self.parse_expression();
            size += 1;

            let more = match context {
                ContextKind::Array => self.accept(TokenKind::Comma),
                _ => self.accept_any(&[TokenKind::Newline, TokenKind::Semicolon]),
            };
            if !more {
                break;
            }
        }

        self.context.pop();
        size
    }
}
