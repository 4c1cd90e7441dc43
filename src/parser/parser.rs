//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parse entry points.
//! The parser is a recursive-descent parser that pulls tokens from the lexer
//! on demand and keeps exactly one token of lookahead.
//!
//! Token consumption goes exclusively through [`Parser::eat`], so between any
//! two productions the lookahead is always the first token not yet consumed.

use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

use super::stmt::parse_program;

/// Nesting depth allowed by default before parsing is aborted.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options controlling a parse.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Label used in positions and diagnostics. Defaults to `shell`.
    pub file: Option<String>,
    /// Maximum number of nested statements/expressions before a `RecursionLimit` error.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            file: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn with_file(file: impl Into<String>) -> Self {
        ParseOptions {
            file: Some(file.into()),
            ..Default::default()
        }
    }
}

/// The main parser structure that maintains parsing state.
///
/// A `Parser` can be reused for several sources, one after the other: every call
/// to [`Parser::parse`] starts over with a fresh lexer and discards whatever state
/// the previous call left behind.
pub struct Parser {
    /// Token source for the current parse
    lexer: Lexer,
    /// The single token of lookahead; `None` once the input is exhausted
    lookahead: Option<Token>,
    /// The name of the source being parsed
    file: Rc<String>,
    /// End of the last consumed token, where end-of-input errors point
    last_end: Position,
    /// Current nesting of guarded productions
    depth: usize,
    max_depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    pub fn new(options: ParseOptions) -> Self {
        let file = Rc::new(options.file.unwrap_or_else(|| String::from("shell")));

        Parser {
            lexer: Lexer::new(String::new(), Rc::clone(&file)),
            lookahead: None,
            last_end: Position(0, Rc::clone(&file)),
            file,
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// Parses `source` into a [`Program`].
    ///
    /// The first syntax error aborts the parse; there is no recovery and no
    /// partial tree.
    pub fn parse(&mut self, source: &str) -> Result<Program, Error> {
        self.lexer = Lexer::new(source.to_string(), Rc::clone(&self.file));
        self.last_end = Position(0, Rc::clone(&self.file));
        self.depth = 0;

        debug!(file = %self.file, bytes = source.len(), "parsing source");

        self.lookahead = self.lexer.next_token()?;
        if self.lookahead.is_none() {
            return Err(Error::new(
                ErrorImpl::InternalError {
                    message: String::from("the tokenizer produced no token to prime the parser"),
                },
                self.get_position(),
            ));
        }

        let program = parse_program(self)?;

        debug!(file = %self.file, statements = program.body.len(), "parsed program");
        Ok(program)
    }

    /// Returns the lookahead token without consuming it.
    pub fn current_token(&self) -> Option<&Token> {
        self.lookahead.as_ref()
    }

    /// Returns the kind of the lookahead token, `None` at end of input.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.lookahead.as_ref().map(|token| token.kind)
    }

    /// Checks whether the lookahead is a token of the given kind.
    pub fn is_at(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == Some(kind)
    }

    /// Checks whether any lookahead remains.
    pub fn has_tokens(&self) -> bool {
        self.lookahead.is_some()
    }

    /// Consumes the lookahead if it is of the expected kind and returns it.
    ///
    /// This is the only place the lookahead advances.
    ///
    /// # Errors
    ///
    /// `UnexpectedEndOfInput` when no lookahead remains, `UnexpectedToken` when the
    /// lookahead is of another kind. In both cases nothing is consumed.
    pub fn eat(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = match self.lookahead.take() {
            Some(token) if token.kind == expected_kind => token,
            Some(token) => {
                let error = Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: token.to_string(),
                        expected: expected_kind.to_string(),
                    },
                    token.span.start.clone(),
                );
                self.lookahead = Some(token);
                return Err(error);
            }
            None => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedEndOfInput {
                        expected: expected_kind.to_string(),
                    },
                    self.last_end.clone(),
                ))
            }
        };

        trace!(kind = ?token.kind, value = %token.value, "consumed token");

        self.last_end = token.span.end.clone();
        self.lookahead = self.lexer.next_token()?;
        Ok(token)
    }

    /// Runs a production one nesting level deeper, failing once `max_depth` is exceeded.
    pub fn nested<T>(
        &mut self,
        production: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.deepen()?;
        let result = production(self);
        self.depth -= 1;
        result
    }

    /// Takes one more level of the nesting budget without returning it.
    ///
    /// Used by loops that build left-nested trees; the caller hands the levels back
    /// with [`Parser::restore_depth`].
    pub fn deepen(&mut self) -> Result<(), Error> {
        if self.depth >= self.max_depth {
            return Err(Error::new(
                ErrorImpl::RecursionLimit { limit: self.max_depth },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn restore_depth(&mut self, depth: usize) {
        self.depth = depth;
    }

    /// Returns the position of the lookahead, or the end of input.
    pub fn get_position(&self) -> Position {
        match &self.lookahead {
            Some(token) => token.span.start.clone(),
            None => self.last_end.clone(),
        }
    }

    /// Span from `start` up to the end of the last consumed token.
    pub fn span_from(&self, start: &Position) -> Span {
        Span {
            start: start.clone(),
            end: self.last_end.clone(),
        }
    }

    pub fn get_file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }
}

/// Parses source text into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance with
/// default options and parses the whole source.
///
/// # Arguments
///
/// * `source` - The source text
/// * `file` - Optional name of the source, used in error positions
///
/// # Returns
///
/// The [`Program`] root, or the first error encountered.
pub fn parse(source: &str, file: Option<String>) -> Result<Program, Error> {
    let mut parser = Parser::new(ParseOptions {
        file,
        ..Default::default()
    });

    parser.parse(source)
}
