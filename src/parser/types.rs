//! Type-spec and parameter-list parsing.

use crate::{
    ast::types::{FunctionType, Param, TypeBase, TypeSpec},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// Parses `"["* type-base "]"*`; the closing brackets must match the
/// opening ones one for one.
pub fn parse_type(parser: &mut Parser) -> Result<TypeSpec, Error> {
    let mut array_depth = 0;
    while parser.at(TokenKind::OpenBracket) {
        parser.advance();
        array_depth += 1;
    }

    let base = parse_type_base(parser)?;

    for _ in 0..array_depth {
        parser.expect(TokenKind::CloseBracket)?;
    }

    Ok(TypeSpec { base, array_depth })
}

pub fn parse_type_base(parser: &mut Parser) -> Result<TypeBase, Error> {
    match parser.current_token_kind() {
        Some(TokenKind::Primitive) => {
            let name = parser.expect(TokenKind::Primitive)?.value;
            Ok(TypeBase::Primitive(name))
        }
        Some(TokenKind::OpenParen) => {
            parser.advance();
            let parameters = parse_params(parser)?;
            parser.expect(TokenKind::CloseParen)?;
            parser.expect(TokenKind::Colon)?;
            let return_type = parse_type(parser)?;

            Ok(TypeBase::Function(FunctionType {
                parameters,
                return_type: Box::new(return_type),
            }))
        }
        _ => Err(parser.unexpected("type")),
    }
}

/// Parses `(param ("," param)*)?` up to, but not including, the closing `)`.
///
/// Duplicate names are kept; rejecting them is left to the type checker.
pub fn parse_params(parser: &mut Parser) -> Result<Vec<Param>, Error> {
    let mut parameters = Vec::new();

    if parser.at(TokenKind::CloseParen) {
        return Ok(parameters);
    }

    loop {
        parameters.push(parse_param(parser)?);

        if !parser.at(TokenKind::Comma) {
            break;
        }
        parser.advance();
    }

    Ok(parameters)
}

pub fn parse_param(parser: &mut Parser) -> Result<Param, Error> {
    let id = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::Colon)?;
    let ty = parse_type(parser)?;

    let default = if parser.at(TokenKind::Assignment) {
        parser.advance();
        Some(parse_expr(parser)?)
    } else {
        None
    };

    Ok(Param { id, ty, default })
}
