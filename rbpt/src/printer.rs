//! The pretty-printing visitor.
//!
//! Writes one line per visited node. Since the parser visits bottom-up, the
//! output reads as a postorder walk of the expression: operands first, then
//! the operator that joins them. Valueless keywords print bare
//! (`TRUE`, `NIL`); everything else that carries text prints as
//! `NAME=<text>`.

use std::io::Write;

use rbp_lex::{Token, TokenKind};
use rbp_par::Visitor;

/// A visitor that pretty-prints every node to a writer.
pub struct Printer<'a, W> {
    source: &'a [u8],
    out: W,
}

impl<'a, W: Write> Printer<'a, W> {
    /// Create a printer over the source the tokens point into.
    pub fn new(source: &'a [u8], out: W) -> Self {
        Self { source, out }
    }

    fn line(&mut self, name: &str) {
        let _ = writeln!(self.out, "{name}");
    }

    fn line_with_text(&mut self, name: &str, token: Token) {
        let _ = writeln!(
            self.out,
            "{name}={}",
            String::from_utf8_lossy(token.text(self.source))
        );
    }
}

impl<W: Write> Visitor for Printer<'_, W> {
    fn array(&mut self, _opening: Token, _closing: Token, size: usize) {
        let _ = writeln!(self.out, "ARRAY={size}");
    }

    fn assign(&mut self, operator: Token) {
        let name = match operator.kind {
            TokenKind::AmpersandEqual => "BITWISE_AND_ASSIGN",
            TokenKind::CaretEqual => "BITWISE_XOR_ASSIGN",
            TokenKind::DoubleAmpersandEqual => "LOGICAL_AND_ASSIGN",
            TokenKind::DoublePipeEqual => "LOGICAL_OR_ASSIGN",
            TokenKind::DoubleStarEqual => "EXPONENT_ASSIGN",
            TokenKind::Equal => "ASSIGN",
            TokenKind::MinusEqual => "SUBTRACT_ASSIGN",
            TokenKind::PercentEqual => "MODULO_ASSIGN",
            TokenKind::PipeEqual => "BITWISE_OR_ASSIGN",
            TokenKind::PlusEqual => "ADD_ASSIGN",
            TokenKind::ShiftLeftEqual => "SHIFT_LEFT_ASSIGN",
            TokenKind::ShiftRightEqual => "SHIFT_RIGHT_ASSIGN",
            TokenKind::SlashEqual => "DIVIDE_ASSIGN",
            TokenKind::StarEqual => "MULTIPLY_ASSIGN",
            _ => "???",
        };
        self.line(name);
    }

    fn begin(&mut self, _opening: Token, _closing: Token) {
        self.line("BEGIN");
    }

    fn binary(&mut self, operator: Token) {
        let name = match operator.kind {
            TokenKind::Ampersand => "BITWISE_AND",
            TokenKind::And => "COMPOSITION_AND",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::BangTilde => "BANG_TILDE",
            TokenKind::Caret => "BITWISE_XOR",
            TokenKind::Compare => "COMPARE",
            TokenKind::DoubleAmpersand => "LOGICAL_AND",
            TokenKind::DoubleDot => "RANGE_INCLUSIVE",
            TokenKind::DoubleEqual => "DOUBLE_EQUAL",
            TokenKind::DoublePipe => "LOGICAL_OR",
            TokenKind::DoubleStar => "EXPONENT",
            TokenKind::EqualTilde => "EQUAL_TILDE",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::If => "IF_MODIFIER",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::Minus => "SUBTRACT",
            TokenKind::Or => "COMPOSITION_OR",
            TokenKind::Percent => "MODULO",
            TokenKind::Pipe => "BITWISE_OR",
            TokenKind::Plus => "ADD",
            TokenKind::Rescue => "RESCUE_MODIFIER",
            TokenKind::ShiftLeft => "SHIFT_LEFT",
            TokenKind::ShiftRight => "SHIFT_RIGHT",
            TokenKind::Slash => "DIVIDE",
            TokenKind::Star => "MULTIPLY",
            TokenKind::TripleDot => "RANGE_EXCLUSIVE",
            TokenKind::TripleEqual => "TRIPLE_EQUAL",
            TokenKind::Unless => "UNLESS_MODIFIER",
            TokenKind::Until => "UNTIL_MODIFIER",
            TokenKind::While => "WHILE_MODIFIER",
            _ => "???",
        };
        self.line(name);
    }

    fn defined(&mut self, _keyword: Token) {
        self.line("DEFINED");
    }

    fn group(&mut self, _opening: Token, _closing: Token) {
        self.line("GROUP");
    }

    fn index_call(&mut self, _opening: Token, _closing: Token) {
        self.line("INDEX_CALL");
    }

    fn index_expr(&mut self, _opening: Token, _closing: Token) {
        self.line("INDEX");
    }

    fn literal(&mut self, value: Token) {
        match value.kind {
            TokenKind::False => self.line("FALSE"),
            TokenKind::Nil => self.line("NIL"),
            TokenKind::Self_ => self.line("SELF"),
            TokenKind::True => self.line("TRUE"),

            TokenKind::BackReference => self.line_with_text("BACK_REFERENCE", value),
            TokenKind::GlobalVariable => self.line_with_text("GLOBAL_VARIABLE", value),
            TokenKind::Identifier => self.line_with_text("VCALL", value),
            TokenKind::Integer => self.line_with_text("INTEGER", value),
            TokenKind::MethodIdentifier => self.line_with_text("FCALL", value),
            TokenKind::NthReference => self.line_with_text("NTH_REFERENCE", value),

            _ => self.line_with_text("???", value),
        }
    }

    fn not(&mut self, _keyword: Token) {
        self.line("NOT");
    }

    fn ternary(&mut self) {
        self.line("TERNARY");
    }

    fn unary(&mut self, operator: Token) {
        let name = match operator.kind {
            TokenKind::Minus => "UMINUS",
            TokenKind::Bang => "UBANG",
            TokenKind::Tilde => "UTILDE",
            TokenKind::Plus => "UPLUS",
            TokenKind::TripleDot => "BEGINLESS_RANGE_EXCLUSIVE",
            TokenKind::DoubleDot => "BEGINLESS_RANGE_INCLUSIVE",
            _ => "???",
        };
        self.line(name);
    }

    fn until_block(&mut self, _keyword: Token) {
        self.line("UNTIL");
    }

    fn while_block(&mut self, _keyword: Token) {
        self.line("WHILE");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbp_par::parse;
    use rbp_util::Handler;

    fn print(source: &[u8]) -> String {
        let handler = Handler::new();
        let mut out = Vec::new();
        let mut printer = Printer::new(source, &mut out);
        parse(source, &mut printer, &handler);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_precedence_walk() {
        assert_eq!(
            print(b"1 + 2 * 3\n"),
            "INTEGER=1\nINTEGER=2\nINTEGER=3\nMULTIPLY\nADD\n"
        );
    }

    #[test]
    fn test_chained_assignment() {
        assert_eq!(
            print(b"a = b = 1\n"),
            "VCALL=a\nVCALL=b\nINTEGER=1\nASSIGN\nASSIGN\n"
        );
    }

    #[test]
    fn test_array() {
        assert_eq!(
            print(b"[1, 2, 3]\n"),
            "INTEGER=1\nINTEGER=2\nINTEGER=3\nARRAY=3\n"
        );
    }

    #[test]
    fn test_begin_ensure() {
        assert_eq!(
            print(b"begin\n1\nensure\n2\nend\n"),
            "INTEGER=1\nINTEGER=2\nBEGIN\n"
        );
    }

    #[test]
    fn test_while() {
        assert_eq!(print(b"while x\ny\nend\n"), "VCALL=x\nVCALL=y\nWHILE\n");
    }

    #[test]
    fn test_not_against_and() {
        assert_eq!(
            print(b"not a and b\n"),
            "VCALL=a\nNOT\nVCALL=b\nCOMPOSITION_AND\n"
        );
    }

    #[test]
    fn test_nested_ternary() {
        assert_eq!(
            print(b"a ? b : c ? d : e\n"),
            "VCALL=a\nVCALL=b\nVCALL=c\nVCALL=d\nVCALL=e\nTERNARY\nTERNARY\n"
        );
    }

    #[test]
    fn test_exponent_right_associativity() {
        assert_eq!(
            print(b"2 ** 3 ** 2\n"),
            "INTEGER=2\nINTEGER=3\nINTEGER=2\nEXPONENT\nEXPONENT\n"
        );
    }

    #[test]
    fn test_literal_vocabulary() {
        assert_eq!(print(b"nil\n"), "NIL\n");
        assert_eq!(print(b"true\n"), "TRUE\n");
        assert_eq!(print(b"false\n"), "FALSE\n");
        assert_eq!(print(b"self\n"), "SELF\n");
        assert_eq!(print(b"$foo\n"), "GLOBAL_VARIABLE=$foo\n");
        assert_eq!(print(b"$1\n"), "NTH_REFERENCE=$1\n");
        assert_eq!(print(b"$&\n"), "BACK_REFERENCE=$&\n");
        assert_eq!(print(b"foo!\n"), "FCALL=foo!\n");
    }

    #[test]
    fn test_unary_vocabulary() {
        assert_eq!(print(b"-a\n"), "VCALL=a\nUMINUS\n");
        assert_eq!(print(b"!a\n"), "VCALL=a\nUBANG\n");
        assert_eq!(print(b"~a\n"), "VCALL=a\nUTILDE\n");
        assert_eq!(print(b"+a\n"), "VCALL=a\nUPLUS\n");
        assert_eq!(print(b"..a\n"), "VCALL=a\nBEGINLESS_RANGE_INCLUSIVE\n");
        assert_eq!(print(b"...a\n"), "VCALL=a\nBEGINLESS_RANGE_EXCLUSIVE\n");
    }

    #[test]
    fn test_compound_assign_vocabulary() {
        assert_eq!(print(b"a += 1\n"), "VCALL=a\nINTEGER=1\nADD_ASSIGN\n");
        assert_eq!(print(b"a ||= 1\n"), "VCALL=a\nINTEGER=1\nLOGICAL_OR_ASSIGN\n");
        assert_eq!(print(b"a **= 1\n"), "VCALL=a\nINTEGER=1\nEXPONENT_ASSIGN\n");
    }

    #[test]
    fn test_index_vocabulary() {
        assert_eq!(print(b"a[]\n"), "VCALL=a\nINDEX_CALL\n");
        assert_eq!(print(b"a[1]\n"), "VCALL=a\nINTEGER=1\nINDEX\n");
    }

    #[test]
    fn test_group_and_defined() {
        assert_eq!(print(b"(1)\n"), "INTEGER=1\nGROUP\n");
        assert_eq!(print(b"defined? a\n"), "VCALL=a\nDEFINED\n");
    }

    #[test]
    fn test_modifier_vocabulary() {
        assert_eq!(print(b"a if b\n"), "VCALL=a\nVCALL=b\nIF_MODIFIER\n");
        assert_eq!(print(b"a rescue b\n"), "VCALL=a\nVCALL=b\nRESCUE_MODIFIER\n");
    }

    #[test]
    fn test_until() {
        assert_eq!(print(b"until x\ny\nend\n"), "VCALL=x\nVCALL=y\nUNTIL\n");
    }
}
