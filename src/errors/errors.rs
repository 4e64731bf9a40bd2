use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// The broad class a fault belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No lexical pattern matched.
    Lex,
    /// An expected token category was not found.
    Syntax,
    /// Unbound identifier or duplicate declaration in one scope.
    Name,
    /// Structural type mismatch.
    Type,
    /// Unknown or missing keyword argument.
    Arity,
}

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position: Some(position),
        }
    }

    /// An error with no source position, as raised by the type checker.
    pub fn semantic(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
            position: None,
        }
    }

    pub fn get_position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorKind::Lex,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedEndOfInput { .. }
            | ErrorImpl::TrailingTokens { .. }
            | ErrorImpl::ExpectedCondition { .. }
            | ErrorImpl::NumberParseError { .. } => ErrorKind::Syntax,
            ErrorImpl::VariableAlreadyDeclared { .. }
            | ErrorImpl::VariableNotDeclared { .. }
            | ErrorImpl::DuplicateParameter { .. }
            | ErrorImpl::ScopeUnderflow => ErrorKind::Name,
            ErrorImpl::TypeMatchError { .. }
            | ErrorImpl::ArgumentTypeMatchError { .. }
            | ErrorImpl::NotArithmetic { .. }
            | ErrorImpl::NotComparable { .. }
            | ErrorImpl::MixedArrayEntries { .. }
            | ErrorImpl::TooManyIndices { .. }
            | ErrorImpl::NotCallable { .. }
            | ErrorImpl::ReturnOutsideFunction => ErrorKind::Type,
            ErrorImpl::UnexpectedArgument { .. } | ErrorImpl::MissingArgument { .. } => {
                ErrorKind::Arity
            }
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::TrailingTokens { .. } => "TrailingTokens",
            ErrorImpl::ExpectedCondition { .. } => "ExpectedCondition",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::DuplicateParameter { .. } => "DuplicateParameter",
            ErrorImpl::ScopeUnderflow => "ScopeUnderflow",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
            ErrorImpl::ArgumentTypeMatchError { .. } => "ArgumentTypeMatchError",
            ErrorImpl::NotArithmetic { .. } => "NotArithmetic",
            ErrorImpl::NotComparable { .. } => "NotComparable",
            ErrorImpl::MixedArrayEntries { .. } => "MixedArrayEntries",
            ErrorImpl::TooManyIndices { .. } => "TooManyIndices",
            ErrorImpl::NotCallable { .. } => "NotCallable",
            ErrorImpl::ReturnOutsideFunction => "ReturnOutsideFunction",
            ErrorImpl::UnexpectedArgument { .. } => "UnexpectedArgument",
            ErrorImpl::MissingArgument { .. } => "MissingArgument",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token, expected } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected `{}`",
                token, expected
            )),
            ErrorImpl::UnexpectedEndOfInput { expected } => ErrorTip::Suggestion(format!(
                "Input ended while expecting `{}`, did you miss a semicolon?",
                expected
            )),
            ErrorImpl::TrailingTokens { token } => ErrorTip::Suggestion(format!(
                "Could not parse a statement starting at `{}`",
                token
            )),
            ErrorImpl::ExpectedCondition { keyword } => ErrorTip::Suggestion(format!(
                "`{}` needs a comparison such as `x < 10`",
                keyword
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::VariableAlreadyDeclared { variable } => {
                ErrorTip::Suggestion(format!("`{}` already declared in this scope", variable))
            }
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("`{}` not declared", variable))
            }
            ErrorImpl::DuplicateParameter { parameter } => {
                ErrorTip::Suggestion(format!("Parameter `{}` appears more than once", parameter))
            }
            ErrorImpl::ScopeUnderflow => ErrorTip::None,
            ErrorImpl::TypeMatchError { expected, received } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::ArgumentTypeMatchError {
                argument,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "Expected argument `{}` of type `{}`, received `{}`",
                argument, expected, received
            )),
            ErrorImpl::NotArithmetic { type_ } => ErrorTip::Suggestion(format!(
                "Operators need `int`, `float` or `bool` operands, found `{}`",
                type_
            )),
            ErrorImpl::NotComparable { relop, type_ } => ErrorTip::Suggestion(format!(
                "`{}` cannot order values of type `{}`",
                relop, type_
            )),
            ErrorImpl::MixedArrayEntries { first, other } => ErrorTip::Suggestion(format!(
                "Array entries must share a type, found `{}` and `{}`",
                first, other
            )),
            ErrorImpl::TooManyIndices {
                variable,
                depth,
                indices,
            } => ErrorTip::Suggestion(format!(
                "`{}` has {} array levels but is indexed {} times",
                variable, depth, indices
            )),
            ErrorImpl::NotCallable { callee, type_ } => {
                ErrorTip::Suggestion(format!("`{}` has type `{}` and cannot be called", callee, type_))
            }
            ErrorImpl::ReturnOutsideFunction => {
                ErrorTip::Suggestion(String::from("`return` is only allowed inside a function body"))
            }
            ErrorImpl::UnexpectedArgument { callee, argument } => ErrorTip::Suggestion(format!(
                "`{}` has no parameter named `{}`",
                callee, argument
            )),
            ErrorImpl::MissingArgument { callee, parameter } => ErrorTip::Suggestion(format!(
                "Call to `{}` is missing argument `{}`",
                callee, parameter
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.position {
            Some(position) => write!(f, "{} at {}:{}", self.internal_error, position.1, position.0),
            None => write!(f, "{}", self.internal_error),
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token {token:?}, expected {expected:?}")]
    UnexpectedToken { token: String, expected: String },
    #[error("unexpected end of input, expected {expected:?}")]
    UnexpectedEndOfInput { expected: String },
    #[error("unparsed input starting at {token:?}")]
    TrailingTokens { token: String },
    #[error("{keyword:?} expects a condition")]
    ExpectedCondition { keyword: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("variable {variable:?} already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("parameter {parameter:?} declared more than once")]
    DuplicateParameter { parameter: String },
    #[error("attempted to pop the global scope")]
    ScopeUnderflow,
    #[error("types do not match: expected {expected:?}, received {received:?}")]
    TypeMatchError { expected: String, received: String },
    #[error("argument {argument:?} does not match: expected {expected:?}, received {received:?}")]
    ArgumentTypeMatchError {
        argument: String,
        expected: String,
        received: String,
    },
    #[error("type {type_} is not arithmetic")]
    NotArithmetic { type_: String },
    #[error("{relop:?} cannot compare values of type {type_}")]
    NotComparable { relop: String, type_: String },
    #[error("array entries have different types: {first} and {other}")]
    MixedArrayEntries { first: String, other: String },
    #[error("variable {variable:?} indexed {indices} times but has depth {depth}")]
    TooManyIndices {
        variable: String,
        depth: usize,
        indices: usize,
    },
    #[error("{callee:?} of type {type_} is not callable")]
    NotCallable { callee: String, type_: String },
    #[error("return statement outside of function")]
    ReturnOutsideFunction,
    #[error("{callee:?} has no parameter {argument:?}")]
    UnexpectedArgument { callee: String, argument: String },
    #[error("call to {callee:?} is missing argument {parameter:?}")]
    MissingArgument { callee: String, parameter: String },
}
