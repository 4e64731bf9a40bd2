use log::trace;

use crate::{
    ast::{
        expressions::{CallExpr, Condition, Expr},
        statements::{AssignStmt, FnDeclStmt, IfStmt, ReturnStmt, Stmt, VarDeclStmt, WhileStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_arguments, parse_condition, parse_expr},
    parser::Parser,
    types::{parse_params, parse_type},
};

/// Parses statements until the lookahead can no longer start one.
///
/// Running into a token that cannot begin a statement ends the list without
/// error; the enclosing production decides whether that token is valid.
pub fn parse_stmt_list(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    let mut statements = Vec::new();

    while let Some(stmt) = parse_stmt(parser)? {
        statements.push(stmt);
    }

    Ok(statements)
}

/// Attempts one statement.
///
/// Returns `Ok(None)` without consuming anything when the lookahead does not
/// start a statement, and an error when a statement started but is malformed.
pub fn parse_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    let stmt = match parser.current_token_kind() {
        Some(TokenKind::If) => parse_if_stmt(parser)?,
        Some(TokenKind::While) => parse_while_stmt(parser)?,
        Some(TokenKind::Return) => parse_return_stmt(parser)?,
        Some(TokenKind::Let) => parse_var_decl_stmt(parser)?,
        Some(TokenKind::Fun) => parse_fn_decl_stmt(parser)?,
        Some(TokenKind::Identifier) => parse_id_stmt(parser)?,
        _ => return Ok(None),
    };

    trace!("parsed statement {:?}", stmt);
    Ok(Some(stmt))
}

/// `if` and `while` only accept a full comparison, not a bare arithmetic
/// expression.
fn parse_required_condition(parser: &mut Parser, keyword: TokenKind) -> Result<Condition, Error> {
    let position = parser.get_position();

    match parse_condition(parser)? {
        Expr::Condition(condition) => Ok(condition),
        _ => Err(Error::new(
            ErrorImpl::ExpectedCondition {
                keyword: String::from(keyword.category()),
            },
            position,
        )),
    }
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::If)?;

    let condition = parse_required_condition(parser, TokenKind::If)?;
    parser.expect(TokenKind::Then)?;
    let then_body = parse_stmt_list(parser)?;

    let else_body = if parser.at(TokenKind::Else) {
        parser.advance();
        Some(parse_stmt_list(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::Fi)?;

    Ok(Stmt::If(IfStmt {
        condition,
        then_body,
        else_body,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::While)?;

    let condition = parse_required_condition(parser, TokenKind::While)?;
    parser.expect(TokenKind::Do)?;
    let body = parse_stmt_list(parser)?;
    parser.expect(TokenKind::Done)?;

    Ok(Stmt::While(WhileStmt { condition, body }))
}

/// Assignment (`id <- expr ;`) or call statement (`id ( args ) ;`), told
/// apart by the token after the identifier.
pub fn parse_id_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let identifier = parser.expect(TokenKind::Identifier)?.value;

    if parser.at(TokenKind::Assignment) {
        parser.advance();
        let value = parse_expr(parser)?;
        parser.expect(TokenKind::Semicolon)?;

        return Ok(Stmt::Assign(AssignStmt { identifier, value }));
    }

    let arguments = parse_arguments(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Call(CallExpr {
        callee: identifier,
        arguments,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Return)?;

    let value = parse_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Return(ReturnStmt { value }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Let)?;

    let identifier = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::Colon)?;
    let explicit_type = parse_type(parser)?;
    parser.expect(TokenKind::Assignment)?;
    let assigned_value = parse_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::VarDecl(VarDeclStmt {
        identifier,
        explicit_type,
        assigned_value,
    }))
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Fun)?;

    let identifier = parser.expect(TokenKind::Identifier)?.value;

    parser.expect(TokenKind::OpenParen)?;
    let parameters = parse_params(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    parser.expect(TokenKind::Colon)?;
    let return_type = parse_type(parser)?;

    parser.expect(TokenKind::Assignment)?;
    parser.expect(TokenKind::Begin)?;
    let body = parse_stmt_list(parser)?;
    parser.expect(TokenKind::End)?;

    Ok(Stmt::FnDecl(FnDeclStmt {
        identifier,
        parameters,
        return_type,
        body,
    }))
}
