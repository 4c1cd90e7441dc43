use std::{collections::VecDeque, rc::Rc};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(regex).expect("invalid lexer pattern"),
        handler,
    }
}

lazy_static! {
    // Order matters: the first pattern matching at the cursor wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern("^[ \\t\\r]+", skip_handler),
        pattern("^\\n[ \\t\\r\\n]*", line_break_handler),
        pattern("^//[^\\n]*", skip_handler),
        pattern("^/\\*(?s:.*?)\\*/", skip_handler),
        pattern("^[a-zA-Z_$][a-zA-Z0-9_$]*", symbol_handler),
        pattern("^[0-9]+(\\.[0-9]+)?", number_handler),
        pattern("^\"(?:[^\"\\\\\\n]|\\\\.)*\"", string_handler),
        pattern("^'(?:[^'\\\\\\n]|\\\\.)*'", string_handler),
        pattern("^\\.\\.\\.", MK_DEFAULT_HANDLER!(TokenKind::Spread, "...")),
        pattern("^\\+=", MK_DEFAULT_HANDLER!(TokenKind::ComplexAssignment, "+=")),
        pattern("^-=", MK_DEFAULT_HANDLER!(TokenKind::ComplexAssignment, "-=")),
        pattern("^\\*=", MK_DEFAULT_HANDLER!(TokenKind::ComplexAssignment, "*=")),
        pattern("^/=", MK_DEFAULT_HANDLER!(TokenKind::ComplexAssignment, "/=")),
        pattern("^\\+", MK_DEFAULT_HANDLER!(TokenKind::AdditiveOperator, "+")),
        pattern("^-", MK_DEFAULT_HANDLER!(TokenKind::AdditiveOperator, "-")),
        pattern("^=", MK_DEFAULT_HANDLER!(TokenKind::SimpleAssignment, "=")),
        pattern("^\\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[")),
        pattern("^\\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]")),
        pattern("^\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        pattern("^\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        pattern("^\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        pattern("^\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        pattern("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        pattern("^:", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        pattern("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
    ];
}

/// Pull-style scanner: every call to [`Lexer::next_token`] scans just far enough
/// to produce one token.
///
/// Once the source is exhausted the lexer emits a single synthetic `LineBreak`
/// (unless the last token already was one) before reporting end of input, so a
/// trailing statement is always terminated and even empty input yields a token.
pub struct Lexer {
    pending: VecDeque<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
    last_kind: Option<TokenKind>,
    finished: bool,
}

impl Lexer {
    pub fn new(source: String, file: Rc<String>) -> Lexer {
        Lexer {
            pending: VecDeque::new(),
            source,
            pos: 0,
            file,
            last_kind: None,
            finished: false,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.last_kind = Some(token.kind);
        self.pending.push_back(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span of the next `len` bytes starting at the cursor.
    pub fn span_for(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            if self.at_eof() {
                if self.finished {
                    return Ok(None);
                }
                self.finished = true;

                if self.last_kind != Some(TokenKind::LineBreak) {
                    let span = self.span_for(0);
                    self.push(MK_TOKEN!(TokenKind::LineBreak, String::from("\n"), span));
                }
                continue;
            }

            self.scan()?;
        }
    }

    fn scan(&mut self) -> Result<(), Error> {
        for pattern in PATTERNS.iter() {
            if pattern.regex.is_match(self.remainder()) {
                (pattern.handler)(self, &pattern.regex);
                return Ok(());
            }
        }

        Err(Error::new(
            ErrorImpl::UnrecognisedToken { token: self.at().to_string() },
            self.position(),
        ))
    }
}

fn matched_len(lexer: &Lexer, regex: &Regex) -> usize {
    regex.find(lexer.remainder()).map_or(0, |m| m.end())
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = matched_len(lexer, regex);
    lexer.advance_n(matched);
}

fn line_break_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = matched_len(lexer, regex);

    // Runs of blank lines (and lines holding only comments) collapse into one separator
    if lexer.last_kind != Some(TokenKind::LineBreak) {
        let span = lexer.span_for(matched);
        lexer.push(MK_TOKEN!(TokenKind::LineBreak, String::from("\n"), span));
    }
    lexer.advance_n(matched);
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = matched_len(lexer, regex);
    let value = lexer.remainder()[..matched].to_string();

    let span = lexer.span_for(matched);
    lexer.push(MK_TOKEN!(TokenKind::Number, value, span));
    lexer.advance_n(matched);
}

// String tokens keep their delimiters; the parser strips and unescapes them.
fn string_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = matched_len(lexer, regex);
    let value = lexer.remainder()[..matched].to_string();

    let span = lexer.span_for(matched);
    lexer.push(MK_TOKEN!(TokenKind::String, value, span));
    lexer.advance_n(matched);
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = matched_len(lexer, regex);
    let value = lexer.remainder()[..matched].to_string();
    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let span = lexer.span_for(matched);
    lexer.push(MK_TOKEN!(kind, value, span));
    lexer.advance_n(matched);
}

/// Decodes backslash escapes in the body of a string literal.
///
/// Supports `\n \t \r \\ \" \' \0` and `\xHH`; any other escape keeps its backslash.
pub fn unescape(string_literal: &str) -> String {
    let mut result = String::new();
    let mut chars = string_literal.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.peek().copied() {
            Some('n') => {
                result.push('\n');
                chars.next();
            }
            Some('t') => {
                result.push('\t');
                chars.next();
            }
            Some('r') => {
                result.push('\r');
                chars.next();
            }
            Some('\\') => {
                result.push('\\');
                chars.next();
            }
            Some('"') => {
                result.push('"');
                chars.next();
            }
            Some('\'') => {
                result.push('\'');
                chars.next();
            }
            Some('0') => {
                result.push('\0');
                chars.next();
            }
            Some('x') => {
                chars.next();
                let mut hex = String::new();

                for _ in 0..2 {
                    match chars.peek() {
                        Some(ch) if ch.is_ascii_hexdigit() => {
                            hex.push(*ch);
                            chars.next();
                        }
                        _ => break,
                    }
                }

                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) => result.push(byte as char),
                    Err(_) => {
                        result.push_str("\\x");
                        result.push_str(&hex);
                    }
                }
            }
            // Keep the backslash (lone or unknown escape)
            _ => result.push(ch),
        }
    }

    result
}

/// Drains a fresh lexer over `source` into a token list.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let file_name = Rc::new(file.unwrap_or_else(|| String::from("shell")));
    let mut lex = Lexer::new(source, file_name);
    let mut tokens = Vec::new();

    while let Some(token) = lex.next_token()? {
        tokens.push(token);
    }

    Ok(tokens)
}
