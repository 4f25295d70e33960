use std::sync::Arc;

use tracing::{debug, trace};

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_TOKEN};

use super::{
    chars::{
        is_digit_start, is_exponent_marker, is_identifier_continue, is_identifier_start,
        is_number_body, is_operator, is_sign, is_string_delimiter, is_whitespace, punctuation,
        Radix, BLOCK_COMMENT, COMMENT_CHAR,
    },
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

/// Forward-only cursor over a decoded source buffer.
///
/// Every read goes through [`Lexer::at`] / [`Lexer::peek`], which return
/// `None` past the end of the buffer instead of indexing out of bounds.
#[derive(Clone)]
pub struct Lexer {
    tokens: Vec<Token>,
    source: Vec<char>,
    pos: usize,
    offset: usize,
    line: u32,
    column: u32,
    file: Arc<String>,
}

impl Lexer {
    pub fn new(source: &str, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Arc::new(file)
        } else {
            Arc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source: source.chars().collect(),
            pos: 0,
            offset: 0,
            line: 1,
            column: 1,
            file: file_name,
        }
    }

    pub fn at(&self) -> Option<char> {
        self.peek(0)
    }

    pub fn peek(&self, n: usize) -> Option<char> {
        self.source.get(self.pos + n).copied()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn starts_with(&self, pattern: &str) -> bool {
        pattern
            .chars()
            .enumerate()
            .all(|(i, c)| self.peek(i) == Some(c))
    }

    /// Consumes one character, keeping line and column in step.
    pub fn advance(&mut self) -> Option<char> {
        let current = self.at()?;

        self.pos += 1;
        self.offset += current.len_utf8();

        if current == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(current)
    }

    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Length of the run of characters satisfying `predicate`, starting at the cursor.
    pub fn run_len(&self, predicate: impl Fn(char) -> bool) -> usize {
        let mut len = 0;

        while self.peek(len).is_some_and(&predicate) {
            len += 1;
        }

        len
    }

    pub fn position(&self) -> Position {
        Position {
            offset: self.offset,
            line: self.line,
            column: self.column,
            file: Arc::clone(&self.file),
        }
    }

    pub fn push(&mut self, token: Token) {
        trace!(kind = %token.kind, lexeme = %token.lexeme, line = token.line(), column = token.column(), "token");
        self.tokens.push(token);
    }

    /// Consumes `len` characters and pushes them as one token.
    fn emit(&mut self, kind: TokenKind, len: usize) {
        let start = self.position();
        let start_index = self.pos;

        self.advance_n(len);
        self.finish(kind, start, start_index);
    }

    /// Pushes everything consumed since `start_index` as one token.
    fn finish(&mut self, kind: TokenKind, start: Position, start_index: usize) {
        let lexeme = self.source[start_index..self.pos].iter().collect::<String>();
        let end = self.position();

        self.push(MK_TOKEN!(kind, lexeme, Span { start, end }));
    }

    fn text(&self, len: usize) -> String {
        self.source[self.pos..self.pos + len].iter().collect()
    }
}

fn comment_handler(lexer: &mut Lexer) -> Result<(), Error> {
    let start = lexer.position();

    if lexer.starts_with(BLOCK_COMMENT) {
        lexer.advance_n(BLOCK_COMMENT.len());

        loop {
            if lexer.starts_with(BLOCK_COMMENT) {
                lexer.advance_n(BLOCK_COMMENT.len());
                trace!(line = start.line, "skipped block comment");
                return Ok(());
            }

            if lexer.advance().is_none() {
                return Err(Error::new(ErrorImpl::UnterminatedBlockComment, start));
            }
        }
    }

    while let Some(current) = lexer.advance() {
        if current == '\n' {
            break;
        }
    }

    trace!(line = start.line, "skipped line comment");
    Ok(())
}

fn string_handler(lexer: &mut Lexer, delimiter: char) -> Result<(), Error> {
    let start = lexer.position();
    let start_index = lexer.pos;

    lexer.advance();

    loop {
        match lexer.advance() {
            Some('\\') => {
                // The escaped character never closes the literal
                if lexer.advance().is_none() {
                    return Err(Error::new(
                        ErrorImpl::UnterminatedStringLiteral { delimiter },
                        start,
                    ));
                }
            }
            Some(current) if current == delimiter => break,
            Some(_) => {}
            None => {
                return Err(Error::new(
                    ErrorImpl::UnterminatedStringLiteral { delimiter },
                    start,
                ))
            }
        }
    }

    lexer.finish(TokenKind::StringLiteral, start, start_index);
    Ok(())
}

/// Measures the numeric run at the cursor without consuming it.
fn number_len(lexer: &Lexer) -> (usize, TokenKind) {
    if lexer.at() == Some('0') {
        if let Some(radix) = lexer.peek(1).and_then(Radix::from_prefix) {
            let mut len = 2;
            while lexer.peek(len).is_some_and(|c| radix.accepts(c)) {
                len += 1;
            }

            return (len, TokenKind::IntegerLiteral);
        }
    }

    let mut len = 0;
    let mut is_float = false;

    while let Some(current) = lexer.peek(len) {
        if is_number_body(current) {
            if current == '.' || is_exponent_marker(current) {
                is_float = true;
            }
        } else if !(is_sign(current) && len > 0 && lexer.peek(len - 1).is_some_and(is_exponent_marker)) {
            break;
        }

        len += 1;
    }

    if is_float {
        (len, TokenKind::FloatLiteral)
    } else {
        (len, TokenKind::IntegerLiteral)
    }
}

fn number_handler(lexer: &mut Lexer) {
    let (len, kind) = number_len(lexer);

    // A numeral running straight into a letter is the head of an identifier
    if lexer.peek(len).is_some_and(is_identifier_start) {
        debug!(line = lexer.line, column = lexer.column, "numeric run reclassified as identifier");
        symbol_handler(lexer);
        return;
    }

    lexer.emit(kind, len);
}

fn symbol_handler(lexer: &mut Lexer) {
    let len = lexer.run_len(is_identifier_continue);
    let value = lexer.text(len);

    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.emit(kind, len);
}

#[tracing::instrument(level = "debug", skip_all, fields(file = file.as_deref().unwrap_or("shell"), len = source.len()))]
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(&source, file);

    while let Some(current) = lex.at() {
        if is_whitespace(current) {
            lex.advance();
            continue;
        }

        if current == COMMENT_CHAR {
            comment_handler(&mut lex).inspect_err(|err| debug!(%err, "lexing failed"))?;
            continue;
        }

        if let Some(kind) = punctuation(current) {
            if !is_operator(current) || !lex.peek(1).is_some_and(is_operator) {
                lex.emit(kind, 1);
                continue;
            }
        }

        if is_operator(current) {
            let len = lex.run_len(is_operator);
            lex.emit(TokenKind::Operator, len);
            continue;
        }

        if is_string_delimiter(current) {
            string_handler(&mut lex, current).inspect_err(|err| debug!(%err, "lexing failed"))?;
            continue;
        }

        if is_digit_start(current) {
            number_handler(&mut lex);
            continue;
        }

        if is_identifier_start(current) {
            symbol_handler(&mut lex);
            continue;
        }

        let err = Error::new(
            ErrorImpl::UnrecognizedCharacter { character: current },
            lex.position(),
        );
        debug!(%err, "lexing failed");
        return Err(err);
    }

    debug!(count = lex.tokens.len(), file = %lex.file, "tokenized");
    Ok(lex.tokens)
}
