//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into tokens on demand for the parser. It handles:
//!
//! - Tokenization of source text using an ordered table of regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line breaks as statement separators, including the implicit trailing one
//! - Comments and whitespace handling
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
