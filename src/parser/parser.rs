//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The grammar is LL(1): every production either consumes a token of an
//! expected category or dispatches on the category of the lookahead token.

use std::rc::Rc;

use log::debug;

use crate::{
    ast::ast::Start,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::stmt::parse_stmt_list;

/// The main parser structure that maintains parsing state.
///
/// Holds the token stream and the position of the lookahead token. Tokens
/// are never rewound.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
        }
    }

    /// Returns the lookahead token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the lookahead token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Returns the kind of the token `n` places after the lookahead.
    pub fn peek_kind(&self, n: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + n).map(|token| token.kind)
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == Some(kind)
    }

    /// Advances to the next token and returns the one consumed.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consumes the lookahead token if it has the expected kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the lookahead matches, otherwise an
    /// `UnexpectedToken` (or `UnexpectedEndOfInput`) error naming the
    /// expected category.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.at(expected_kind) {
            if let Some(token) = self.advance() {
                return Ok(token);
            }
        }

        Err(self.unexpected(expected_kind.category()))
    }

    /// Builds the error for a lookahead that does not fit `expected`.
    pub fn unexpected(&self, expected: &str) -> Error {
        match self.current_token() {
            Some(token) => Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.value.clone(),
                    expected: String::from(expected),
                },
                token.position.clone(),
            ),
            None => Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: String::from(expected),
                },
                self.get_position(),
            ),
        }
    }

    /// Position of the lookahead token, or of the last token at end of input.
    pub fn get_position(&self) -> Position {
        self.current_token()
            .or_else(|| self.tokens.last())
            .map(|token| token.position.clone())
            .unwrap_or_else(|| Position(1, Rc::clone(&self.file)))
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. The top-level statement list
/// must drain the whole stream; anything left over is a fault.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse
/// * `file` - Reference-counted string containing the source file name
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Start, Error> {
    if let Some(token) = tokens.iter().find(|token| token.kind == TokenKind::Error) {
        return Err(Error::new(
            ErrorImpl::UnrecognisedToken {
                token: token.value.clone(),
            },
            token.position.clone(),
        ));
    }

    let mut parser = Parser::new(tokens, Rc::clone(&file));
    let body = parse_stmt_list(&mut parser)?;

    if let Some(token) = parser.current_token() {
        return Err(Error::new(
            ErrorImpl::TrailingTokens {
                token: token.value.clone(),
            },
            token.position.clone(),
        ));
    }

    debug!("parsed {} top-level statements from {}", body.len(), file);
    Ok(Start { body })
}
