/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root
/// - expressions: Conditions, arithmetic chains, factors, calls, closures
/// - statements: Control flow, declarations, assignments, returns
/// - types: The type model (primitives, arrays, function signatures)
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
