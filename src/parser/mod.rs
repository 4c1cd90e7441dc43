//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that pulls tokens from
//! the lexer one at a time and builds the AST. It handles:
//!
//! - Statement parsing (declarations, blocks, functions, returns)
//! - Expression parsing (assignment, additive, calls, spread, literals)
//! - Object literals, destructuring patterns and parameter lists
//! - Positional syntax errors; the first one aborts the parse
//!
//! There are two levels of precedence below assignment: additive operators
//! and primary expressions. Parentheses regroup.

pub mod expr;
pub mod object;
pub mod parser;
pub mod stmt;
