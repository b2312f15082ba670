use crate::KdlError;
use crate::ast::Document;
use crate::lexer::{Lexer, Token};

mod document;
mod node;

/// Children blocks deeper than this are rejected instead of risking a
/// stack overflow on adversarial input.
pub const MAX_DEPTH: usize = 64;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    peek: Option<Token>,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Result<Self, KdlError> {
        let mut lexer = Lexer::new(input);
        let peek = Some(lexer.next_token()?);
        Ok(Self {
            lexer,
            peek,
            depth: 0,
        })
    }

    pub(crate) fn bump(&mut self) -> Result<Token, KdlError> {
        let curr = self.peek.take().ok_or(KdlError::UnexpectedEof {
            message: "Unexpected end of input".into(),
            line: self.lexer.line(),
            column: self.lexer.column(),
            hint: None,
            code: Some(201),
        })?;
        self.peek = Some(self.lexer.next_token()?);
        Ok(curr)
    }

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.peek.as_ref()
    }

    pub(crate) fn expect(&mut self, expected: Token) -> Result<Token, KdlError> {
        let token = self.bump()?;
        if token != expected {
            return Err(KdlError::SyntaxError {
                message: format!("Expected {:?}, got {:?}", expected, token),
                line: self.lexer.line(),
                column: self.lexer.column(),
                hint: Some("Check your syntax".into()),
                code: Some(202),
            });
        }
        Ok(token)
    }

    pub(crate) fn line(&self) -> usize {
        self.lexer.line()
    }

    pub(crate) fn column(&self) -> usize {
        self.lexer.column()
    }

    /// Parse a complete document and require that nothing but EOF follows.
    pub fn parse_document(&mut self) -> Result<Document, KdlError> {
        document::parse_document(self)
    }
}

#[cfg(test)]
mod tests;
