//! Type checking and semantic analysis module.
//!
//! This module walks the AST once and either completes silently or stops at
//! the first fault. It:
//!
//! - Verifies that expressions and statements are structurally well typed
//! - Resolves names through a stack of lexical scopes
//! - Binds keyword arguments to function parameters, honouring defaults
//! - Checks `return` values against the innermost enclosing function
//!
//! All state lives in a `TypeChecker` built fresh for each run.

pub mod environment;
pub mod type_checker;
