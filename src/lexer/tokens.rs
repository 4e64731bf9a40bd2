use lazy_static::lazy_static;
use std::fmt::Display;

use crate::Position;

lazy_static! {
    /// Single-meaning keywords and punctuation. The category of each of these
    /// tokens is the lexeme itself.
    pub static ref RESERVED_LOOKUP: Vec<(&'static str, TokenKind)> = vec![
        ("if", TokenKind::If),
        ("then", TokenKind::Then),
        ("else", TokenKind::Else),
        ("fi", TokenKind::Fi),
        ("while", TokenKind::While),
        ("do", TokenKind::Do),
        ("done", TokenKind::Done),
        ("let", TokenKind::Let),
        ("fun", TokenKind::Fun),
        ("begin", TokenKind::Begin),
        ("end", TokenKind::End),
        ("return", TokenKind::Return),
        ("<-", TokenKind::Assignment),
        ("->", TokenKind::Arrow),
        ("(", TokenKind::OpenParen),
        (")", TokenKind::CloseParen),
        ("[", TokenKind::OpenBracket),
        ("]", TokenKind::CloseBracket),
        ("{", TokenKind::OpenCurly),
        ("}", TokenKind::CloseCurly),
        (";", TokenKind::Semicolon),
        (":", TokenKind::Colon),
        (",", TokenKind::Comma),
    ];
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Number,
    Float,

    AddOp,
    MulOp,
    Primitive,
    BoolOp,
    RelOp,

    // Reserved
    If,
    Then,
    Else,
    Fi,
    While,
    Do,
    Done,
    Let,
    Fun,
    Begin,
    End,
    Return,

    Assignment, // <-
    Arrow,      // ->

    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,

    Semicolon,
    Colon,
    Comma,

    /// A character no pattern accepts.
    Error,
}

impl TokenKind {
    /// The category string of the language surface: a structural name for
    /// the generic classes, the lexeme itself for keywords and punctuation.
    pub fn category(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "id",
            TokenKind::Number => "num",
            TokenKind::Float => "float",
            TokenKind::AddOp => "addop",
            TokenKind::MulOp => "mulop",
            TokenKind::Primitive => "primitive",
            TokenKind::BoolOp => "boolop",
            TokenKind::RelOp => "relop",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::Fi => "fi",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::Done => "done",
            TokenKind::Let => "let",
            TokenKind::Fun => "fun",
            TokenKind::Begin => "begin",
            TokenKind::End => "end",
            TokenKind::Return => "return",
            TokenKind::Assignment => "<-",
            TokenKind::Arrow => "->",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Error => "Error",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.category())
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Token {
    pub fn category(&self) -> &'static str {
        self.kind.category()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.kind, self.value)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}
