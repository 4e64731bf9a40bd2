//! Unit tests for the lexer module.
//!
//! Covers keyword/identifier disambiguation, numeric literals, operators,
//! punctuation, unknown characters and line tracking.

use pretty_assertions::assert_eq;

use super::{lexer::tokenize, tokens::TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source, Some("test.sa".to_string()))
        .iter()
        .map(|token| token.kind)
        .collect()
}

fn categories(source: &str) -> Vec<&'static str> {
    tokenize(source, Some("test.sa".to_string()))
        .iter()
        .map(|token| token.category())
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "if then else fi while do done let fun begin end return";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::If,
            TokenKind::Then,
            TokenKind::Else,
            TokenKind::Fi,
            TokenKind::While,
            TokenKind::Do,
            TokenKind::Done,
            TokenKind::Let,
            TokenKind::Fun,
            TokenKind::Begin,
            TokenKind::End,
            TokenKind::Return,
        ]
    );
}

#[test]
fn test_primitive_wins_tie_with_identifier() {
    let tokens = tokenize("int", None);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Primitive);
    assert_eq!(tokens[0].category(), "primitive");
    assert_eq!(tokens[0].value, "int");
}

#[test]
fn test_longer_identifier_beats_primitive() {
    let tokens = tokenize("intx", None);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "intx");
}

#[test]
fn test_done_is_not_split_into_do() {
    assert_eq!(kinds("done"), vec![TokenKind::Done]);
    assert_eq!(kinds("dot"), vec![TokenKind::Identifier]);
}

#[test]
fn test_tokenize_primitives_and_boolops() {
    assert_eq!(
        categories("int float bool none and or xor nor nand"),
        vec![
            "primitive",
            "primitive",
            "primitive",
            "primitive",
            "boolop",
            "boolop",
            "boolop",
            "boolop",
            "boolop",
        ]
    );
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5", None);

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[3].kind, TokenKind::Float);
    assert_eq!(tokens[3].value, "100.5");
}

#[test]
fn test_trailing_dot_is_not_a_float() {
    let tokens = tokenize("3.", None);

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[1].kind, TokenKind::Error);
    assert_eq!(tokens[1].value, ".");
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        categories("+ - * / >= <= == < > !="),
        vec![
            "addop", "addop", "mulop", "mulop", "relop", "relop", "relop", "relop", "relop",
            "relop",
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        categories("<- -> ( ) [ ] { } ; : ,"),
        vec!["<-", "->", "(", ")", "[", "]", "{", "}", ";", ":", ","]
    );
}

#[test]
fn test_arrow_beats_less_than() {
    let tokens = tokenize("x<-5;", None);

    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_words_are_split_without_spaces() {
    let tokens = tokenize("print(x:2);", None);

    assert_eq!(
        tokens.iter().map(|token| token.value.as_str()).collect::<Vec<_>>(),
        vec!["print", "(", "x", ":", "2", ")", ";"]
    );
}

#[test]
fn test_unrecognised_character_becomes_error_token() {
    let tokens = tokenize("a@b", None);

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].kind, TokenKind::Error);
    assert_eq!(tokens[1].category(), "Error");
    assert_eq!(tokens[1].value, "@");
}

#[test]
fn test_non_ascii_error_token_is_one_character() {
    let tokens = tokenize("é1", None);

    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!(tokens[0].value, "é");
    assert_eq!(tokens[1].kind, TokenKind::Number);
}

#[test]
fn test_identifiers_have_no_digits_or_underscores() {
    assert_eq!(
        categories("abc12 a_b"),
        vec!["id", "num", "id", "Error", "id"]
    );
}

#[test]
fn test_whitespace_handling() {
    assert_eq!(kinds("  let\t\tx \r\n "), vec![TokenKind::Let, TokenKind::Identifier]);
    assert!(tokenize("   \n\t", None).is_empty());
}

#[test]
fn test_line_numbers() {
    let tokens = tokenize("let\n\nx", Some("lines.sa".to_string()));

    assert_eq!(tokens[0].position.0, 1);
    assert_eq!(tokens[1].position.0, 3);
    assert_eq!(*tokens[1].position.1, "lines.sa");
}

#[test]
fn test_tokenize_is_deterministic() {
    let source = "fun square(x: int) : int <- begin return x * x; end";

    assert_eq!(tokenize(source, None), tokenize(source, None));
}

#[test]
fn test_token_display() {
    let tokens = tokenize("<- foo", None);

    assert_eq!(tokens[0].to_string(), "(<-, <-)");
    assert_eq!(tokens[1].to_string(), "(id, foo)");
}
