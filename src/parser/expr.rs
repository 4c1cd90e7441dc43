use crate::{
    ast::{
        ast::Expr,
        expressions::{
            AssignmentExpr, BinaryExpr, CallExpr, Identifier, NumericLiteral, SpreadExpr,
            StringLiteral,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::unescape, tokens::TokenKind},
    Span,
};

use super::{
    object::{parse_call_argument, parse_object_decl, parse_parameter_list},
    parser::Parser,
};

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_assignment_expr(parser)
}

/// `additive (assignment-op assignment)?`, right-associative.
pub fn parse_assignment_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nested(|parser| {
        let left = parse_additive_expr(parser)?;

        let operator_kind = match parser.current_token_kind() {
            Some(kind) if kind.is_assignment_operator() => kind,
            _ => return Ok(left),
        };

        let operator = parser.eat(operator_kind)?;
        let value = parse_assignment_expr(parser)?;

        Ok(Expr::Assignment(AssignmentExpr {
            span: Span {
                start: left.get_span().start.clone(),
                end: value.get_span().end.clone(),
            },
            assignee: Box::new(left),
            operator,
            value: Box::new(value),
        }))
    })
}

/// `primary (additive-op primary)*`, folded to the left.
///
/// Every fold nests the tree one level deeper, so each operator counts against the
/// nesting budget.
pub fn parse_additive_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let depth = parser.depth();
    let result = parse_additive_chain(parser);
    parser.restore_depth(depth);
    result
}

fn parse_additive_chain(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_primary_expr(parser)?;

    while parser.is_at(TokenKind::AdditiveOperator) {
        parser.deepen()?;
        let operator = parser.eat(TokenKind::AdditiveOperator)?;
        let right = parse_primary_expr(parser)?;

        left = Expr::Binary(BinaryExpr {
            span: Span {
                start: left.get_span().start.clone(),
                end: right.get_span().end.clone(),
            },
            left: Box::new(left),
            operator,
            right: Box::new(right),
        });
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nested(|parser| match parser.current_token_kind() {
        Some(TokenKind::OpenParen) => parse_parenthesized_expr(parser),
        Some(TokenKind::OpenCurly) => Ok(Expr::Object(parse_object_decl(parser)?)),
        Some(TokenKind::Identifier) => parse_callable_identifier(parser),
        Some(TokenKind::Spread) => parse_spread_expr(parser),
        Some(
            TokenKind::Number
            | TokenKind::String
            | TokenKind::OpenBracket
            | TokenKind::CloseBracket
            | TokenKind::CloseCurly
            | TokenKind::CloseParen
            | TokenKind::SimpleAssignment
            | TokenKind::ComplexAssignment
            | TokenKind::AdditiveOperator
            | TokenKind::Semicolon
            | TokenKind::Colon
            | TokenKind::Comma
            | TokenKind::LineBreak
            | TokenKind::Let
            | TokenKind::Var
            | TokenKind::Const
            | TokenKind::Return
            | TokenKind::Function,
        )
        | None => parse_literal(parser),
    })
}

pub fn parse_parenthesized_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.eat(TokenKind::OpenParen)?;
    let expr = parse_expr(parser)?;
    parser.eat(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Identifier, Error> {
    let token = parser.eat(TokenKind::Identifier)?;

    Ok(Identifier {
        name: token.value,
        span: token.span,
    })
}

/// An identifier, or a call when directly followed by `(`.
pub fn parse_callable_identifier(parser: &mut Parser) -> Result<Expr, Error> {
    let callee = parse_identifier(parser)?;

    if !parser.is_at(TokenKind::OpenParen) {
        return Ok(Expr::Identifier(callee));
    }

    parser.eat(TokenKind::OpenParen)?;
    let arguments = parse_parameter_list(parser, parse_call_argument)?;
    parser.eat(TokenKind::CloseParen)?;

    Ok(Expr::Call(CallExpr {
        span: parser.span_from(&callee.span.start),
        callee,
        arguments,
    }))
}

pub fn parse_spread_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator = parser.eat(TokenKind::Spread)?;
    let operand = parse_additive_expr(parser)?;

    Ok(Expr::Spread(SpreadExpr {
        span: Span {
            start: operator.span.start.clone(),
            end: operand.get_span().end.clone(),
        },
        operator,
        operand: Box::new(operand),
    }))
}

pub fn parse_literal(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        Some(TokenKind::Number) => {
            let token = parser.eat(TokenKind::Number)?;

            match token.value.parse::<f64>() {
                Ok(value) => Ok(Expr::Number(NumericLiteral {
                    value,
                    span: token.span,
                })),
                Err(_) => Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value },
                    token.span.start,
                )),
            }
        }
        Some(TokenKind::String) => {
            let token = parser.eat(TokenKind::String)?;

            // Strip the delimiters, both single-byte quotes
            let body = token
                .value
                .get(1..token.value.len().saturating_sub(1))
                .unwrap_or_default();

            Ok(Expr::String(StringLiteral {
                value: unescape(body),
                span: token.span,
            }))
        }
        _ => Err(match parser.current_token() {
            Some(token) => Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.to_string(),
                    message: String::from("expected an expression"),
                },
                token.span.start.clone(),
            ),
            None => Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: String::from("an expression"),
                },
                parser.get_position(),
            ),
        }),
    }
}
