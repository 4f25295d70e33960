use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        for keyword in [
            "import", "using", "type", "namespace", "data", "class", "descriptor", "inputs",
            "def", "override", "op", "construct", "destroy", "extends", "let", "new", "public",
            "protected", "private", "shared", "const", "dynamic", "if", "for", "in", "while",
            "do", "switch", "case", "default", "pass", "continue", "break", "return",
        ] {
            map.insert(keyword, TokenKind::Keyword);
        }
        map.insert("true", TokenKind::BooleanLiteral);
        map.insert("false", TokenKind::BooleanLiteral);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    IntegerLiteral,
    FloatLiteral,
    StringLiteral,
    BooleanLiteral,
    Keyword,
    Operator,

    Semicolon,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
    LessThan,
    GreaterThan,
    Period,
    Comma,
    Colon,
    Pipe,
}

impl TokenKind {
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::IntegerLiteral
                | TokenKind::FloatLiteral
                | TokenKind::StringLiteral
                | TokenKind::BooleanLiteral
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text covered by the token, delimiters included.
    pub lexeme: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} {}({})",
            self.line(),
            self.column(),
            self.kind,
            self.lexeme
        )
    }
}

impl Token {
    pub fn line(&self) -> u32 {
        self.span.start.line
    }

    pub fn column(&self) -> u32 {
        self.span.start.column
    }

    /// Decodes the body of a string/char literal, resolving escapes.
    ///
    /// Returns `None` for any other kind of token.
    pub fn string_value(&self) -> Option<String> {
        if self.kind != TokenKind::StringLiteral {
            return None;
        }

        let mut body = self.lexeme.chars();
        body.next();
        body.next_back();

        let mut result = String::new();
        let mut chars = body.peekable();

        while let Some(ch) = chars.next() {
            if ch != '\\' {
                result.push(ch);
                continue;
            }

            match chars.peek() {
                Some('n') => {
                    result.push('\n');
                    chars.next();
                }
                Some('t') => {
                    result.push('\t');
                    chars.next();
                }
                Some('r') => {
                    result.push('\r');
                    chars.next();
                }
                Some('\\') => {
                    result.push('\\');
                    chars.next();
                }
                Some('"') => {
                    result.push('"');
                    chars.next();
                }
                Some('\'') => {
                    result.push('\'');
                    chars.next();
                }
                Some('0') => {
                    result.push('\0');
                    chars.next();
                }
                Some('x') => {
                    chars.next();
                    let mut hex = String::new();

                    for _ in 0..2 {
                        match chars.peek() {
                            Some(digit) if digit.is_ascii_hexdigit() => {
                                hex.push(*digit);
                                chars.next();
                            }
                            _ => break,
                        }
                    }

                    match u8::from_str_radix(&hex, 16) {
                        Ok(byte) => result.push(byte as char),
                        // `\x` without digits stays as written
                        Err(_) => {
                            result.push('\\');
                            result.push('x');
                            result.push_str(&hex);
                        }
                    }
                }
                _ => result.push(ch), // Keep the backslash
            }
        }

        Some(result)
    }
}
