#![allow(clippy::module_inception)]

use std::{fmt::Display, sync::Arc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

pub use lexer::lexer::tokenize;

/// A point in a source buffer.
///
/// `offset` is a byte offset; `line` and `column` are 1-based and the
/// column counts characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
    pub file: Arc<String>,
}

impl Position {
    pub fn null() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
            file: Arc::new(String::from("<null>")),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing byte `position`.
///
/// Returns the 1-based line number, the line text (newline included) and
/// the byte offset of `position` within that line.
pub fn get_line_at_position(content: &str, position: usize) -> Option<(usize, String, usize)> {
    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return Some((line_number, line.to_string(), position - start));
        }

        start = end;
        line_number += 1;
    }

    // End of buffer sits just past the last line
    if position == content.len() {
        let last = content.rsplit('\n').next().unwrap_or("");
        let line_number = content.matches('\n').count() + 1;
        return Some((line_number, last.to_string(), last.len()));
    }

    None
}

pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: UnrecognizedCharacter
        -> final.cbrn
           |
        20 | let a = @;
           | --------^
    */

    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.offset) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let column = line_text[..line_pos].chars().count();
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ' || *c == '\t').count();

    (string.chars().skip(start).collect(), start)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        tokenize, Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nfoo\nbar\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_buffer() {
        let (line_number, line, line_pos) = super::get_line_at_position("ab\ncd", 5).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "cd");
        assert_eq!(line_pos, 2);

        assert!(super::get_line_at_position("ab", 9).is_none());
    }

    #[test]
    fn test_position_display() {
        let pos = Position {
            offset: 4,
            line: 2,
            column: 3,
            file: Arc::new("main.cbrn".to_string()),
        };
        assert_eq!(pos.to_string(), "main.cbrn:2:3");
    }

    #[test]
    fn test_render_unrecognized_character() {
        let source = "let a = 1;\n  let b = @;\n";
        let error = tokenize(source.to_string(), Some("main.cbrn".to_string())).unwrap_err();
        let rendered = super::render_error(&error, source);

        assert_eq!(
            rendered,
            concat!(
                "Error: UnrecognizedCharacter\n",
                "-> main.cbrn:2:11\n",
                "  |\n",
                "2 | let b = @;\n",
                "  | --------^\n",
            )
        );
    }

    #[test]
    fn test_render_includes_tip() {
        let error = Error::new(ErrorImpl::UnterminatedBlockComment, Position::null());
        let rendered = super::render_error(&error, "### never closed");

        assert!(rendered.starts_with("Error: UnterminatedBlockComment (Block comment"));
        assert!(rendered.contains("1 | ### never closed"));
    }
}
