//! Error types and error handling for the front end.
//!
//! Every lexical, syntactic and semantic fault is one `Error` value:
//!
//! - `ErrorImpl` variants carry the offending lexeme, names or types
//! - `ErrorKind` groups them into lex/syntax/name/type/arity faults
//! - Errors raised from a token keep that token's position
//! - Helpful suggestions for the command-line report

pub mod errors;
