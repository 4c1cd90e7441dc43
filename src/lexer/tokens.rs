use lazy_static::lazy_static;
use serde::Serialize;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("var", TokenKind::Var);
        map.insert("const", TokenKind::Const);
        map.insert("return", TokenKind::Return);
        map.insert("function", TokenKind::Function);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum TokenKind {
    Number,
    String,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    SimpleAssignment,  // =
    ComplexAssignment, // += -= *= /=
    AdditiveOperator,  // + -

    Spread, // ...
    Semicolon,
    Colon,
    Comma,
    LineBreak,

    // Reserved
    Let,
    Var,
    Const,
    Return,
    Function,
}

impl TokenKind {
    pub fn is_assignment_operator(&self) -> bool {
        matches!(self, TokenKind::SimpleAssignment | TokenKind::ComplexAssignment)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::SimpleAssignment => "=",
            TokenKind::ComplexAssignment => "compound assignment",
            TokenKind::AdditiveOperator => "additive operator",
            TokenKind::Spread => "...",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::LineBreak => "line break",
            TokenKind::Let => "let",
            TokenKind::Var => "var",
            TokenKind::Const => "const",
            TokenKind::Return => "return",
            TokenKind::Function => "function",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::LineBreak => write!(f, "line break"),
            _ => write!(f, "{}", self.value),
        }
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// One-line description used by the token dump: `Kind (value)`.
    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::AdditiveOperator,
            TokenKind::ComplexAssignment,
        ]) {
            format!("{:?} ({})", self.kind, self.value)
        } else {
            format!("{:?} ()", self.kind)
        }
    }
}
