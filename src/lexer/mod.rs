use std::str::Chars;

use crate::KdlError;
use crate::ast::Number;

mod scanner;
mod tokenizer;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // --- literals ---
    Ident(String),
    String(String),
    RawString(String),
    Number(Number),
    Bool(bool),
    Null,

    // --- structure ---
    LBrace,
    RBrace,
    LParen,
    RParen,
    Equals,

    // --- markers ---
    Slashdash,

    // --- layout ---
    Newline,
    Semicolon,
    Eof,
}

pub struct Lexer<'a> {
    input: Chars<'a>,
    peek: Option<char>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer {
            input: input.chars(),
            peek: None,
            line: 1,
            column: 1,
        };
        lexer.peek = lexer.input.next();
        lexer
    }

    /// 1-based line of the next unconsumed character.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the next unconsumed character.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Pull the next token. Newlines and semicolons are significant and
    /// produced as tokens; whitespace and comments are skipped.
    pub fn next_token(&mut self) -> Result<Token, KdlError> {
        tokenizer::next_token(self)
    }
}
