use std::rc::Rc;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::{Position, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    kind: TokenKind,
}

impl RegexPattern {
    fn new(pattern: &str, kind: TokenKind) -> Self {
        RegexPattern {
            // Patterns only ever match at the front of the remaining word
            regex: Regex::new(&format!("^(?:{})", pattern)).expect("token patterns are valid regexes"),
            kind,
        }
    }
}

lazy_static! {
    /// Ordered pattern list. On an equal-length match the later pattern wins,
    /// which is what turns `int` from an identifier into a primitive.
    static ref PATTERNS: Vec<RegexPattern> = {
        let mut patterns = vec![
            RegexPattern::new("[a-zA-Z]+", TokenKind::Identifier),
            RegexPattern::new("[0-9]+", TokenKind::Number),
            RegexPattern::new("[0-9]+\\.[0-9]+", TokenKind::Float),
            RegexPattern::new("[+\\-]", TokenKind::AddOp),
            RegexPattern::new("[*/]", TokenKind::MulOp),
            RegexPattern::new("int|float|bool|none", TokenKind::Primitive),
            RegexPattern::new("and|or|xor|nor|nand", TokenKind::BoolOp),
            RegexPattern::new(">=|<=|==|<|>|!=", TokenKind::RelOp),
        ];

        for (keyword, kind) in RESERVED_LOOKUP.iter() {
            patterns.push(RegexPattern::new(&regex::escape(keyword), *kind));
        }

        patterns
    };
}

pub struct Lexer {
    tokens: Vec<Token>,
    line: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            line: 1,
            file: file_name,
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    fn position(&self) -> Position {
        Position(self.line, Rc::clone(&self.file))
    }

    /// Consumes one whitespace-free word, emitting the longest match at each
    /// step until nothing is left.
    pub fn lex_word(&mut self, word: &str) {
        let mut remaining = word;

        while !remaining.is_empty() {
            let (kind, length) = longest_match(remaining);
            let (value, rest) = remaining.split_at(length);

            self.push(MK_TOKEN!(kind, String::from(value), self.position()));
            remaining = rest;
        }
    }
}

fn longest_match(remaining: &str) -> (TokenKind, usize) {
    let mut longest: Option<(TokenKind, usize)> = None;

    for pattern in PATTERNS.iter() {
        if let Some(found) = pattern.regex.find(remaining) {
            let length = found.end();
            if length > 0 && longest.map_or(true, |(_, best)| length >= best) {
                longest = Some((pattern.kind, length));
            }
        }
    }

    longest.unwrap_or_else(|| {
        let width = remaining.chars().next().map_or(1, char::len_utf8);
        (TokenKind::Error, width)
    })
}

/// Splits `source` into words on spaces, tabs and line breaks and lexes each
/// word independently. Unknown characters become one-character `Error` tokens
/// rather than failing here.
pub fn tokenize(source: &str, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(file);

    for line in source.split('\n') {
        for word in line.split(&[' ', '\t', '\r'][..]).filter(|word| !word.is_empty()) {
            lex.lex_word(word);
        }
        lex.line += 1;
    }

    debug!("tokenized {} into {} tokens", lex.file, lex.tokens.len());
    lex.tokens
}
