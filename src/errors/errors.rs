use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// Coarse classification of an [`Error`].
///
/// Every grammar violation found by the parser is a `Syntax` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Lexical,
    Internal,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorKind::Lexical,
            ErrorImpl::InternalError { .. } => ErrorKind::Internal,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedEndOfInput { .. }
            | ErrorImpl::UnexpectedTokenDetailed { .. }
            | ErrorImpl::NumberParseError { .. }
            | ErrorImpl::RecursionLimit { .. } => ErrorKind::Syntax,
        }
    }

    pub fn is_syntax_error(&self) -> bool {
        self.kind() == ErrorKind::Syntax
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::RecursionLimit { .. } => "RecursionLimit",
            ErrorImpl::InternalError { .. } => "InternalError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token, expected } => {
                let hint = match expected.as_str() {
                    ";" | "line break" => ", did you miss a semicolon?",
                    _ => "",
                };
                ErrorTip::Suggestion(format!(
                    "unexpected token `{}`, expected `{}`{}",
                    token, expected, hint
                ))
            }
            ErrorImpl::UnexpectedEndOfInput { expected } => ErrorTip::Suggestion(format!(
                "input ended while `{}` was still expected",
                expected
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("unexpected token `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "invalid number `{}`, only decimal literals are supported",
                token
            )),
            ErrorImpl::RecursionLimit { limit } => ErrorTip::Suggestion(format!(
                "expressions and blocks may be nested at most {} levels deep",
                limit
            )),
            ErrorImpl::InternalError { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.internal_error, self.position.1, self.position.0
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token {token}, expected {expected}")]
    UnexpectedToken { token: String, expected: String },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: String },
    #[error("unexpected token {token}, {message}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("maximum nesting depth of {limit} exceeded")]
    RecursionLimit { limit: usize },
    #[error("internal error: {message}")]
    InternalError { message: String },
}
