#![allow(clippy::module_inception)]

use std::rc::Rc;

use log::debug;

use crate::{
    ast::ast::Start,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::type_check,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

/// A 1-based source line and the name of the file it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

/// Runs the whole front end over `source`: tokenize, parse, verify.
///
/// Every call builds its own analysis context, so independent runs never
/// see each other's bindings.
pub fn check_source(source: &str, file: Option<String>) -> Result<Start, Error> {
    let file_name = Rc::new(file.clone().unwrap_or_else(|| String::from("shell")));

    let tokens = tokenize(source, file);
    let ast = parse(tokens, Rc::clone(&file_name))?;
    type_check(&ast)?;

    debug!("{} verified", file_name);
    Ok(ast)
}

/// Returns the text of the 1-based `line` in `source`, if it exists.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    source.lines().nth((line as usize).checked_sub(1)?)
}

pub fn display_error(error: &Error, source: &str) {
    /*
        Error: name (tip)
        -> file.sa:20
           |
        20 | let a : int <- @;
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }

    let Some(position) = error.get_position() else {
        return;
    };

    eprintln!("-> {}:{}", position.1, position.0);

    if let Some(line_text) = get_line_at_position(source, position.0) {
        let line_string = position.0.to_string();
        let padding = line_string.len() + 2;

        eprintln!("{:>padding$}", "|");
        eprintln!("{} | {}", line_string, line_text.trim());
    }
}
