//! Lexical analysis module.
//!
//! Converts source text into the token stream consumed by the parser:
//!
//! - Whitespace-delimited words are matched against an ordered regex list
//! - Longest match wins, later patterns win ties (keywords over identifiers)
//! - Characters no pattern accepts become `Error` tokens
//! - Every token records the line it came from for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
