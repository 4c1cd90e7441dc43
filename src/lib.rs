#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc};

use serde::Serialize;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into a source, tagged with the name of the file it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing the byte offset `position`.
///
/// Returns the 1-based line number, the line's text (including its newline) and the
/// offset of `position` within that line. An offset at the very end of the source maps
/// onto the last line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // End of input: point just past the last character of the last line
    let last = content.split_inclusive('\n').last().unwrap_or("");
    let line_number = content.split_inclusive('\n').count().max(1);
    Some((line_number, last.to_string(), last.trim_end_matches('\n').len()))
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nlet a = 1\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 33).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("let a =", 7).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "let a =");
        assert_eq!(line_pos, 7);

        assert!(super::get_line_at_position("abc", 10).is_none());
    }
}

/// Renders an error as a caret diagnostic against the source it was raised for.
///
/// ```text
/// Error: UnexpectedToken (unexpected token `return`, expected `line break`, did you miss a semicolon?)
/// -> main.mjs
///   |
/// 1 | return 1 return 2
///   | ---------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let mut out = String::new();
    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", position.1);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        let _ = writeln!(out, "   {}", error);
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
