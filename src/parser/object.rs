//! Object literals, destructuring patterns and comma-separated parameter lists.

use crate::{
    ast::{
        ast::Expr,
        expressions::{DestructuringProperty, Identifier, ObjectDecl, ObjectPattern, ObjectProperty},
        statements::Param,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    expr::{parse_additive_expr, parse_identifier, parse_primary_expr},
    parser::Parser,
    stmt::skip_line_breaks,
};

pub type ElementHandler<T> = fn(&mut Parser) -> Result<T, Error>;

/// Reads list elements until the lookahead is `)`, which is left unconsumed.
///
/// A `,` after an element is consumed when present, so a trailing comma is fine.
pub fn parse_parameter_list<T>(
    parser: &mut Parser,
    element: ElementHandler<T>,
) -> Result<Vec<T>, Error> {
    let mut elements = Vec::new();

    while parser.has_tokens() && !parser.is_at(TokenKind::CloseParen) {
        elements.push(element(parser)?);

        if parser.is_at(TokenKind::Comma) {
            parser.eat(TokenKind::Comma)?;
        }
    }

    Ok(elements)
}

/// A declared parameter: a name, or an object pattern when the lookahead is not one.
pub fn parse_parameter_declaration(parser: &mut Parser) -> Result<Param, Error> {
    if parser.is_at(TokenKind::Identifier) {
        Ok(Param::Identifier(parse_identifier(parser)?))
    } else {
        Ok(Param::Pattern(parse_object_pattern(parser)?))
    }
}

/// Call arguments are additive expressions; assignments need parentheses.
pub fn parse_call_argument(parser: &mut Parser) -> Result<Expr, Error> {
    parse_additive_expr(parser)
}

/// Shared `{ ... }` walk for object literals and patterns.
///
/// Properties are collected locally and handed back only once `}` is consumed.
fn parse_object_body<T>(
    parser: &mut Parser,
    property: ElementHandler<T>,
) -> Result<(Vec<T>, Span), Error> {
    let start = parser.eat(TokenKind::OpenCurly)?.span.start;
    let mut properties = Vec::new();

    while !parser.is_at(TokenKind::CloseCurly) {
        skip_line_breaks(parser)?;
        if parser.is_at(TokenKind::CloseCurly) {
            break;
        }

        properties.push(property(parser)?);
    }

    parser.eat(TokenKind::CloseCurly)?;

    Ok((properties, parser.span_from(&start)))
}

pub fn parse_object_decl(parser: &mut Parser) -> Result<ObjectDecl, Error> {
    let (properties, span) = parse_object_body(parser, parse_object_property)?;

    Ok(ObjectDecl { properties, span })
}

pub fn parse_object_pattern(parser: &mut Parser) -> Result<ObjectPattern, Error> {
    let (properties, span) = parse_object_body(parser, parse_destructuring_property)?;

    Ok(ObjectPattern { properties, span })
}

/// `name` or `name: alias`, with an optional trailing `,`.
pub fn parse_destructuring_property(parser: &mut Parser) -> Result<DestructuringProperty, Error> {
    let name = parse_identifier(parser)?;
    let start = name.span.start.clone();

    let alias = if parser.is_at(TokenKind::Colon) {
        parser.eat(TokenKind::Colon)?;
        Some(parse_identifier(parser)?)
    } else {
        None
    };

    let span = parser.span_from(&start);

    if parser.is_at(TokenKind::Comma) {
        parser.eat(TokenKind::Comma)?;
    }

    Ok(DestructuringProperty { name, alias, span })
}

/// `...expr`, `key: value`, `[key]: value` or shorthand `key`, with an optional trailing `,`.
pub fn parse_object_property(parser: &mut Parser) -> Result<ObjectProperty, Error> {
    let start = parser.get_position();

    let property = if parser.is_at(TokenKind::Spread) {
        let init = parse_primary_expr(parser)?;
        ObjectProperty::Spread {
            span: parser.span_from(&start),
            init,
        }
    } else {
        let key = parse_object_property_identifier(parser)?;

        if parser.is_at(TokenKind::Colon) {
            parser.eat(TokenKind::Colon)?;
            let value = parse_additive_expr(parser)?;

            ObjectProperty::KeyValue {
                span: parser.span_from(&start),
                key,
                value,
            }
        } else {
            ObjectProperty::Shorthand {
                span: parser.span_from(&start),
                key,
            }
        }
    };

    if parser.is_at(TokenKind::Comma) {
        parser.eat(TokenKind::Comma)?;
    }

    Ok(property)
}

// `[key]` is accepted but resolves to the same identifier as `key`.
fn parse_object_property_identifier(parser: &mut Parser) -> Result<Identifier, Error> {
    if !parser.is_at(TokenKind::OpenBracket) {
        return parse_identifier(parser);
    }

    parser.eat(TokenKind::OpenBracket)?;
    let key = parse_identifier(parser)?;
    parser.eat(TokenKind::CloseBracket)?;

    Ok(key)
}
