//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! A hand-written recursive-descent parser with one token of lookahead:
//!
//! - Statement parsing (declarations, control flow, assignments, calls)
//! - Expression parsing (conditions, arithmetic chains, factors, arrays, closures)
//! - Type-spec and parameter-list parsing
//!
//! Statement lists end quietly at the first token that cannot start a
//! statement; every other mismatch is reported as an error.

pub mod expr;
pub mod parser;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
