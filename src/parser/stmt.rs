use crate::{
    ast::{
        ast::{Program, Stmt},
        statements::{
            BlockStmt, DeclarationKind, EmptyStmt, ExpressionStmt, FunctionDecl, ReturnStmt,
            VariableDeclarator, VariableStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Position,
};

use super::{
    expr::{parse_additive_expr, parse_expr, parse_identifier},
    object::{parse_parameter_declaration, parse_parameter_list},
    parser::Parser,
};

pub fn parse_program(parser: &mut Parser) -> Result<Program, Error> {
    let start = Position(0, parser.get_file());

    let body = if parser.has_tokens() {
        parse_stmt_list(parser, None)?
    } else {
        vec![]
    };

    Ok(Program {
        body,
        span: parser.span_from(&start),
    })
}

/// Parses statements until the lookahead is `stop` (or input runs out).
///
/// Line breaks between statements are separators only and never produce nodes.
pub fn parse_stmt_list(parser: &mut Parser, stop: Option<TokenKind>) -> Result<Vec<Stmt>, Error> {
    let mut statements = Vec::new();

    loop {
        skip_line_breaks(parser)?;
        if at_stop(parser, stop) {
            break;
        }

        statements.push(parse_stmt(parser)?);

        if at_stop(parser, stop) {
            break;
        }
    }

    Ok(statements)
}

fn at_stop(parser: &Parser, stop: Option<TokenKind>) -> bool {
    match parser.current_token_kind() {
        None => true,
        Some(kind) => Some(kind) == stop,
    }
}

pub fn skip_line_breaks(parser: &mut Parser) -> Result<(), Error> {
    while parser.is_at(TokenKind::LineBreak) {
        parser.eat(TokenKind::LineBreak)?;
    }

    Ok(())
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.nested(|parser| match parser.current_token_kind() {
        Some(TokenKind::Semicolon) => parse_empty_stmt(parser),
        Some(TokenKind::OpenCurly) => Ok(Stmt::Block(parse_block_stmt(parser)?)),
        Some(TokenKind::Let | TokenKind::Var | TokenKind::Const) => parse_var_decl_stmt(parser),
        Some(TokenKind::Return) => parse_return_stmt(parser),
        Some(TokenKind::Function) => parse_fn_decl_stmt(parser),
        // Exhaustive so a new TokenKind has to be placed explicitly.
        // LineBreak and `}` are unreachable from parse_stmt_list.
        Some(
            TokenKind::Number
            | TokenKind::String
            | TokenKind::Identifier
            | TokenKind::OpenBracket
            | TokenKind::CloseBracket
            | TokenKind::CloseCurly
            | TokenKind::OpenParen
            | TokenKind::CloseParen
            | TokenKind::SimpleAssignment
            | TokenKind::ComplexAssignment
            | TokenKind::AdditiveOperator
            | TokenKind::Spread
            | TokenKind::Colon
            | TokenKind::Comma
            | TokenKind::LineBreak,
        )
        | None => parse_expression_stmt(parser),
    })
}

/// A statement ends at `;` or at a line break, both consumed. A `}` also ends it but is
/// left for the enclosing block. Anything else is an error.
pub fn parse_end_of_expression(parser: &mut Parser) -> Result<(), Error> {
    match parser.current_token_kind() {
        Some(TokenKind::Semicolon) => {
            parser.eat(TokenKind::Semicolon)?;
        }
        Some(TokenKind::CloseCurly) => {}
        _ => {
            parser.eat(TokenKind::LineBreak)?;
        }
    }

    Ok(())
}

pub fn parse_empty_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.eat(TokenKind::Semicolon)?;

    Ok(Stmt::Empty(EmptyStmt { span: token.span }))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.eat(TokenKind::OpenCurly)?.span.start;

    let body = if !parser.is_at(TokenKind::CloseCurly) {
        parse_stmt_list(parser, Some(TokenKind::CloseCurly))?
    } else {
        vec![]
    };

    parser.eat(TokenKind::CloseCurly)?;

    Ok(BlockStmt {
        body,
        span: parser.span_from(&start),
    })
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let (kind, keyword) = match parser.current_token_kind() {
        Some(TokenKind::Var) => (DeclarationKind::Var, TokenKind::Var),
        Some(TokenKind::Const) => (DeclarationKind::Const, TokenKind::Const),
        _ => (DeclarationKind::Let, TokenKind::Let),
    };
    let start = parser.eat(keyword)?.span.start;

    let mut declarations = vec![parse_variable_declarator(parser)?];

    while parser.is_at(TokenKind::Comma) {
        parser.eat(TokenKind::Comma)?;
        skip_line_breaks(parser)?;
        declarations.push(parse_variable_declarator(parser)?);
    }

    let span = parser.span_from(&start);

    parse_end_of_expression(parser)?;

    Ok(Stmt::Variable(VariableStmt {
        kind,
        declarations,
        span,
    }))
}

fn parse_variable_declarator(parser: &mut Parser) -> Result<VariableDeclarator, Error> {
    let name = parse_identifier(parser)?;
    let start = name.span.start.clone();

    let init = if parser.is_at(TokenKind::SimpleAssignment) {
        parser.eat(TokenKind::SimpleAssignment)?;
        Some(parse_expr(parser)?)
    } else {
        None
    };

    Ok(VariableDeclarator {
        name,
        init,
        span: parser.span_from(&start),
    })
}

/// `return` takes an additive expression, never an assignment.
pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.eat(TokenKind::Return)?.span.start;

    let value = parse_additive_expr(parser)?;
    let span = parser.span_from(&start);

    parse_end_of_expression(parser)?;

    Ok(Stmt::Return(ReturnStmt { value, span }))
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.eat(TokenKind::Function)?.span.start;

    let name = parse_identifier(parser)?;

    parser.eat(TokenKind::OpenParen)?;
    let params = parse_parameter_list(parser, parse_parameter_declaration)?;
    parser.eat(TokenKind::CloseParen)?;

    // Only block bodies are supported
    if !parser.is_at(TokenKind::OpenCurly) {
        return Err(match parser.current_token() {
            Some(token) => Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.to_string(),
                    message: format!("expected {} to open the function body", TokenKind::OpenCurly),
                },
                token.span.start.clone(),
            ),
            None => Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: TokenKind::OpenCurly.to_string(),
                },
                parser.get_position(),
            ),
        });
    }

    let body = parse_block_stmt(parser)?;

    Ok(Stmt::Function(FunctionDecl {
        name,
        params,
        body: body.body,
        span: parser.span_from(&start),
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser)?;
    let span = expression.get_span().clone();

    parse_end_of_expression(parser)?;

    Ok(Stmt::Expression(ExpressionStmt { expression, span }))
}
