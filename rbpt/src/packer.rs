//! The binary packing visitor.
//!
//! Serializes visited nodes into a growing byte buffer. Literals pack as a
//! 12-byte record (kind, start offset, end offset, each a little-endian
//! `u32`); binary, assignment, and unary operators pack as a 4-byte kind
//! record. Structural nodes (groups, arrays, blocks) carry no record of
//! their own.

use rbp_lex::Token;
use rbp_par::{parse, Visitor};
use rbp_util::Handler;

/// A visitor that packs visited nodes into a byte buffer.
#[derive(Default)]
pub struct Packer {
    buffer: Vec<u8>,
}

impl Packer {
    /// Create an empty packer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the packer, returning the packed bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    fn pack_kind(&mut self, token: Token) {
        self.buffer
            .extend_from_slice(&(token.kind as u32).to_le_bytes());
    }
}

impl Visitor for Packer {
    fn assign(&mut self, operator: Token) {
        self.pack_kind(operator);
    }

    fn binary(&mut self, operator: Token) {
        self.pack_kind(operator);
    }

    fn literal(&mut self, value: Token) {
        self.pack_kind(value);
        self.buffer
            .extend_from_slice(&(value.start as u32).to_le_bytes());
        self.buffer
            .extend_from_slice(&(value.end as u32).to_le_bytes());
    }

    fn unary(&mut self, operator: Token) {
        self.pack_kind(operator);
    }
}

/// Parse the source and return its packed byte form.
pub fn parse_and_pack(source: &[u8]) -> Vec<u8> {
    let handler = Handler::new();
    let mut packer = Packer::new();
    parse(source, &mut packer, &handler);
    packer.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbp_lex::TokenKind;

    fn u32_at(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes([
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ])
    }

    #[test]
    fn test_empty_source_packs_nothing() {
        assert!(parse_and_pack(b"").is_empty());
    }

    #[test]
    fn test_literal_record_layout() {
        let bytes = parse_and_pack(b"42\n");
        assert_eq!(bytes.len(), 12);
        assert_eq!(u32_at(&bytes, 0), TokenKind::Integer as u32);
        assert_eq!(u32_at(&bytes, 4), 0);
        assert_eq!(u32_at(&bytes, 8), 2);
    }

    #[test]
    fn test_binary_expression_layout() {
        // Two 12-byte literal records followed by one 4-byte operator record.
        let bytes = parse_and_pack(b"1 + 2\n");
        assert_eq!(bytes.len(), 28);
        assert_eq!(u32_at(&bytes, 0), TokenKind::Integer as u32);
        assert_eq!(u32_at(&bytes, 12), TokenKind::Integer as u32);
        assert_eq!(u32_at(&bytes, 16), 4);
        assert_eq!(u32_at(&bytes, 20), 5);
        assert_eq!(u32_at(&bytes, 24), TokenKind::Plus as u32);
    }

    #[test]
    fn test_assign_and_unary_pack_kind_only() {
        let bytes = parse_and_pack(b"a = -1\n");
        // literal a (12) + literal 1 (12) + unary minus (4) + assign (4)
        assert_eq!(bytes.len(), 32);
        assert_eq!(u32_at(&bytes, 24), TokenKind::Minus as u32);
        assert_eq!(u32_at(&bytes, 28), TokenKind::Equal as u32);
    }

    #[test]
    fn test_structural_nodes_pack_nothing() {
        // The group itself adds no bytes beyond its inner literal.
        assert_eq!(parse_and_pack(b"(1)\n").len(), 12);
        assert_eq!(parse_and_pack(b"[]\n").len(), 0);
    }
}
