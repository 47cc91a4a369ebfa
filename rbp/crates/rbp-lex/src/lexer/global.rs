//! Global variable, back reference, and nth reference lexing.
//!
//! Everything here starts from a `$` sigil. Ruby's punctuation globals
//! (`$~`, `$$`, `$/`, ...) are single-byte names; `$-X` takes exactly one
//! identifier byte after the dash; `` $& $` $' $+ `` are regexp back
//! references and `$1`..`$9` (with more digits) are numbered match
//! references. Anything else after the sigil scans as an identifier run.

use crate::token::TokenKind;
use crate::Lexer;

impl Lexer<'_> {
    /// Lexes the token following an already-consumed `$` sigil.
    pub(crate) fn lex_global_variable(&mut self) -> TokenKind {
        match self.cursor.bump() {
            // $_ is the last read line; $_foo is an ordinary global.
            b'_' => {
                if self.is_ident_byte(self.cursor.peek(0)) {
                    self.scan_ident_run();
                }
                TokenKind::GlobalVariable
            }

            b'~' | b'*' | b'$' | b'?' | b'!' | b'@' | b'/' | b'\\' | b';' | b',' | b'.'
            | b'=' | b':' | b'<' | b'>' => TokenKind::GlobalVariable,

            // $-X: one identifier byte rides along after the dash.
            b'-' => {
                if self.is_ident_byte(self.cursor.peek(0)) {
                    self.cursor.bump();
                }
                TokenKind::GlobalVariable
            }

            b'&' | b'`' | b'\'' | b'+' => TokenKind::BackReference,

            b'1'..=b'9' => {
                while self.cursor.peek(0).is_ascii_digit() {
                    self.cursor.bump();
                }
                TokenKind::NthReference
            }

            _ => {
                self.scan_ident_run();
                TokenKind::GlobalVariable
            }
        }
    }
}
