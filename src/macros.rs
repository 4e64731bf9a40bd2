//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PRIMITIVE!` - Creates a non-array primitive TypeSpec
//!
//! These macros reduce boilerplate in the lexer, the type checker and tests.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's lexeme
/// * `$position` - The source position
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}

/// Creates a primitive TypeSpec, optionally wrapped in array levels.
///
/// # Example
///
/// ```ignore
/// let int = MK_PRIMITIVE!("int");
/// let int_matrix = MK_PRIMITIVE!("int", 2);
/// ```
#[macro_export]
macro_rules! MK_PRIMITIVE {
    ($name:expr) => {
        $crate::ast::types::TypeSpec::primitive($name)
    };
    ($name:expr, $depth:expr) => {
        $crate::ast::types::TypeSpec::primitive($name).with_array_depth($depth)
    };
}
