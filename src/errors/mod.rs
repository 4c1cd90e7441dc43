//! Error types and error handling for the parser.
//!
//! This module defines the errors raised while turning source text into
//! an AST. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the lexing and parsing phases
//! - Error categorisation (syntax, lexical, internal)
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
