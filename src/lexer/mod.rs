//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - A single forward pass over a bounds-checked cursor
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line and block (`###`) comments and whitespace handling
//! - Token position tracking for error reporting

pub mod chars;
pub mod lexer;
pub mod tokens;
