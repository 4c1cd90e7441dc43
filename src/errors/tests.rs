//! Unit tests for error handling.
//!
//! This module contains tests for error types, classification and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::{render_error, Position};
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.mjs".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.kind(), ErrorKind::Lexical);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
            expected: "identifier".to_string(),
        },
        at(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.mjs");
}

#[test]
fn test_syntax_error_messages() {
    let unexpected = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "2".to_string(),
            expected: ";".to_string(),
        },
        at(0),
    );
    let end_of_input = Error::new(
        ErrorImpl::UnexpectedEndOfInput {
            expected: "}".to_string(),
        },
        at(0),
    );

    assert!(unexpected.is_syntax_error());
    assert!(end_of_input.is_syntax_error());
    assert_eq!(
        unexpected.get_impl().to_string(),
        "unexpected token 2, expected ;"
    );
    assert_eq!(
        end_of_input.get_impl().to_string(),
        "unexpected end of input, expected }"
    );
}

#[test]
fn test_internal_error_kind() {
    let error = Error::new(
        ErrorImpl::InternalError {
            message: "no token".to_string(),
        },
        at(0),
    );

    assert_eq!(error.kind(), ErrorKind::Internal);
    assert_eq!(error.get_error_name(), "InternalError");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggests_semicolon() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "return".to_string(),
            expected: "line break".to_string(),
        },
        at(0),
    );

    let ErrorTip::Suggestion(tip) = error.get_tip() else {
        panic!("expected a suggestion");
    };
    assert!(tip.contains("did you miss a semicolon?"));
}

#[test]
fn test_render_error() {
    let source = "let a = 1\n  return 1 return 2\n";
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "return".to_string(),
            expected: "line break".to_string(),
        },
        at(21),
    );

    let rendered = render_error(&error, source);
    let lines: Vec<&str> = rendered.lines().collect();

    assert!(lines[0].starts_with("Error: UnexpectedToken ("));
    assert_eq!(lines[1], "-> test.mjs");
    assert_eq!(lines[2], "  |");
    assert_eq!(lines[3], "2 | return 1 return 2");
    assert_eq!(lines[4], "  | ---------^");
}

#[test]
fn test_render_error_at_end_of_input() {
    let error = Error::new(
        ErrorImpl::UnexpectedEndOfInput {
            expected: "}".to_string(),
        },
        at(1),
    );

    let rendered = render_error(&error, "{");
    assert!(rendered.contains("1 | {"));
    assert!(rendered.ends_with("  | -^\n"));
}
