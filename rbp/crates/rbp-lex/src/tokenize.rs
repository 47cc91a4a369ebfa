//! The `tokenize` entry point.

use std::io::{self, Write};

use crate::lexer::Lexer;
use crate::ripper::ripper_event;
use crate::token::TokenKind;

/// Scan the whole source and write one descriptive line per token.
///
/// Each line has the shape `<start>-<end> <category> <text>` where the
/// offsets are bytes from the start of the source and the category follows
/// the Ripper naming scheme.
///
/// # Examples
///
/// ```
/// use rbp_lex::tokenize;
///
/// let mut out = Vec::new();
/// tokenize(b"1 + 2", &mut out).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "0-1 int 1\n2-3 op +\n4-5 int 2\n"
/// );
/// ```
pub fn tokenize<W: Write>(source: &[u8], out: &mut W) -> io::Result<()> {
    let mut lexer = Lexer::new(source);

    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::Eof {
            return Ok(());
        }

        writeln!(
            out,
            "{}-{} {} {}",
            token.start,
            token.end,
            ripper_event(token.kind),
            String::from_utf8_lossy(token.text(source))
        )?;
    }
}
