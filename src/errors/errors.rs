use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedStringLiteral { .. } => "UnterminatedStringLiteral",
            ErrorImpl::UnterminatedBlockComment => "UnterminatedBlockComment",
            ErrorImpl::UnrecognizedCharacter { .. } => "UnrecognizedCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedStringLiteral { delimiter } => ErrorTip::Suggestion(format!(
                "Literal opened here is never closed, add a matching `{}`",
                delimiter
            )),
            ErrorImpl::UnterminatedBlockComment => ErrorTip::Suggestion(String::from(
                "Block comment opened here is never closed, add a matching `###`",
            )),
            ErrorImpl::UnrecognizedCharacter { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unterminated string literal (delimiter {delimiter:?})")]
    UnterminatedStringLiteral { delimiter: char },
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
    #[error("unrecognized character: {character:?}")]
    UnrecognizedCharacter { character: char },
}
