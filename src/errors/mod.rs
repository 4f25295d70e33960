//! Error types and error handling for the compiler.
//!
//! This module defines the error types raised while tokenizing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each lexical failure
//! - Helpful error messages and suggestions

pub mod errors;
