//! Character classification for the scanner.
//!
//! All tables here are fixed for the lifetime of the process.

use super::tokens::TokenKind;

pub const OPERATOR_CHARS: [char; 12] = ['=', '+', '-', '*', '/', '%', '^', '&', '|', '$', '!', '~'];

pub const COMMENT_CHAR: char = '#';

pub const BLOCK_COMMENT: &str = "###";

pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C' | '\x0B')
}

pub fn is_operator(c: char) -> bool {
    OPERATOR_CHARS.contains(&c)
}

/// Maps single-character punctuation to its dedicated kind.
pub fn punctuation(c: char) -> Option<TokenKind> {
    let kind = match c {
        ';' => TokenKind::Semicolon,
        '{' => TokenKind::OpenBrace,
        '}' => TokenKind::CloseBrace,
        '[' => TokenKind::OpenBracket,
        ']' => TokenKind::CloseBracket,
        '(' => TokenKind::OpenParen,
        ')' => TokenKind::CloseParen,
        '<' => TokenKind::LessThan,
        '>' => TokenKind::GreaterThan,
        '.' => TokenKind::Period,
        ',' => TokenKind::Comma,
        ':' => TokenKind::Colon,
        '|' => TokenKind::Pipe,
        _ => return None,
    };

    Some(kind)
}

pub fn is_string_delimiter(c: char) -> bool {
    c == '"' || c == '\''
}

pub fn is_digit_start(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

pub fn is_identifier_continue(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit() || c == '_'
}

/// Digit set selected by a numeric prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Binary,
    Octal,
    Hexadecimal,
}

impl Radix {
    pub fn from_prefix(c: char) -> Option<Radix> {
        match c {
            'b' => Some(Radix::Binary),
            'c' => Some(Radix::Octal),
            'x' => Some(Radix::Hexadecimal),
            _ => None,
        }
    }

    pub fn accepts(&self, c: char) -> bool {
        c == '_'
            || match self {
                Radix::Binary => c == '0' || c == '1',
                Radix::Octal => ('0'..='7').contains(&c),
                Radix::Hexadecimal => c.is_ascii_hexdigit(),
            }
    }
}

/// Characters allowed in an unprefixed numeric run, signs excluded.
pub fn is_number_body(c: char) -> bool {
    c.is_ascii_hexdigit() || matches!(c, '.' | '_' | 'x' | 'E' | 'e' | 'f')
}

pub fn is_exponent_marker(c: char) -> bool {
    c == 'e' || c == 'E'
}

pub fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}
