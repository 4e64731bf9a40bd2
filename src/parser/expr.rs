use crate::{
    ast::expressions::{
        AddExpr, Arg, ArrayExpr, CallExpr, ClosureExpr, Condition, Expr, Factor, Term, VarExpr,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    parser::Parser,
    stmt::parse_stmt_list,
    types::{parse_params, parse_type},
};

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        Some(TokenKind::OpenBracket) => parse_array_expr(parser),
        Some(TokenKind::OpenParen) if is_closure_start(parser) => parse_closure_expr(parser),
        _ => parse_condition(parser),
    }
}

/// A `(` opens a closure when it is followed by `)` or by `id :`, neither of
/// which can begin a parenthesised expression.
fn is_closure_start(parser: &Parser) -> bool {
    match parser.peek_kind(1) {
        Some(TokenKind::CloseParen) => true,
        Some(TokenKind::Identifier) => parser.peek_kind(2) == Some(TokenKind::Colon),
        _ => false,
    }
}

/// Parses `add-expr relop add-expr (boolop cond)?`.
///
/// Without a relational operator the bare arithmetic expression is returned,
/// which is how plain values such as `x + 1` reach assignments and arguments.
pub fn parse_condition(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_add_expr(parser)?;

    if !parser.at(TokenKind::RelOp) {
        return Ok(Expr::Add(left));
    }

    let relop = parser.expect(TokenKind::RelOp)?.value;
    let right = parse_add_expr(parser)?;

    let next = if parser.at(TokenKind::BoolOp) {
        let boolop = parser.expect(TokenKind::BoolOp)?.value;
        let position = parser.get_position();

        match parse_condition(parser)? {
            Expr::Condition(condition) => Some((boolop, Box::new(condition))),
            _ => {
                return Err(Error::new(
                    ErrorImpl::ExpectedCondition { keyword: boolop },
                    position,
                ))
            }
        }
    } else {
        None
    };

    Ok(Expr::Condition(Condition {
        left,
        relop,
        right,
        next,
    }))
}

pub fn parse_add_expr(parser: &mut Parser) -> Result<AddExpr, Error> {
    let term = parse_term(parser)?;

    let next = if parser.at(TokenKind::AddOp) {
        let addop = parser.expect(TokenKind::AddOp)?.value;
        Some((addop, Box::new(parse_add_expr(parser)?)))
    } else {
        None
    };

    Ok(AddExpr { term, next })
}

pub fn parse_term(parser: &mut Parser) -> Result<Term, Error> {
    let factor = parse_factor(parser)?;

    let next = if parser.at(TokenKind::MulOp) {
        let mulop = parser.expect(TokenKind::MulOp)?.value;
        Some((mulop, Box::new(parse_term(parser)?)))
    } else {
        None
    };

    Ok(Term { factor, next })
}

pub fn parse_factor(parser: &mut Parser) -> Result<Factor, Error> {
    match parser.current_token_kind() {
        Some(TokenKind::Identifier) => parse_id_factor(parser),
        Some(TokenKind::Number) => {
            let token = parser.expect(TokenKind::Number)?;
            let value = token.value.parse::<i64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    token.position.clone(),
                )
            })?;

            Ok(Factor::Int(value))
        }
        Some(TokenKind::Float) => {
            let token = parser.expect(TokenKind::Float)?;
            let value = token.value.parse::<f64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    token.position.clone(),
                )
            })?;

            Ok(Factor::Float(value))
        }
        Some(TokenKind::OpenParen) => {
            parser.advance();
            let expr = parse_expr(parser)?;
            parser.expect(TokenKind::CloseParen)?;

            Ok(Factor::Paren(Box::new(expr)))
        }
        _ => Err(parser.unexpected("factor")),
    }
}

/// An identifier followed by `[`-indices is an indexed variable, followed by
/// `(` a call, and otherwise a plain variable.
pub fn parse_id_factor(parser: &mut Parser) -> Result<Factor, Error> {
    let id = parser.expect(TokenKind::Identifier)?.value;

    if parser.at(TokenKind::OpenParen) {
        let arguments = parse_arguments(parser)?;
        return Ok(Factor::Call(CallExpr {
            callee: id,
            arguments,
        }));
    }

    let mut indices = Vec::new();
    while parser.at(TokenKind::OpenBracket) {
        parser.advance();
        indices.push(parse_expr(parser)?);
        parser.expect(TokenKind::CloseBracket)?;
    }

    Ok(Factor::Var(VarExpr { id, indices }))
}

/// Parses `( (arg ("," arg)*)? )`. Only keyword arguments exist.
pub fn parse_arguments(parser: &mut Parser) -> Result<Vec<Arg>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut arguments = Vec::new();
    if !parser.at(TokenKind::CloseParen) {
        loop {
            arguments.push(parse_arg(parser)?);

            if !parser.at(TokenKind::Comma) {
                break;
            }
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseParen)?;
    Ok(arguments)
}

pub fn parse_arg(parser: &mut Parser) -> Result<Arg, Error> {
    let id = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::Colon)?;
    let value = parse_expr(parser)?;

    Ok(Arg { id, value })
}

pub fn parse_array_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenBracket)?;

    let mut entries = Vec::new();
    if !parser.at(TokenKind::CloseBracket) {
        loop {
            entries.push(parse_expr(parser)?);

            if !parser.at(TokenKind::Comma) {
                break;
            }
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseBracket)?;
    Ok(Expr::Array(ArrayExpr { entries }))
}

pub fn parse_closure_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let parameters = parse_params(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    parser.expect(TokenKind::Colon)?;
    let return_type = parse_type(parser)?;

    parser.expect(TokenKind::Assignment)?;
    parser.expect(TokenKind::OpenCurly)?;
    let body = parse_stmt_list(parser)?;
    parser.expect(TokenKind::CloseCurly)?;

    Ok(Expr::Closure(ClosureExpr {
        parameters,
        return_type,
        body,
    }))
}
