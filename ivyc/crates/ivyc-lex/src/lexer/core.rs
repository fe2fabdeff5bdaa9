//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use crate::cursor::Cursor;
use crate::lexer::identifier::is_letter;
use crate::token::{Token, TokenKind};

/// Lexer for the Ivy programming language.
///
/// The lexer transforms source text into a stream of tokens, one per
/// [`next_token`](Lexer::next_token) call. It skips whitespace, resolves
/// identifiers against the keyword table, and uses a single character of
/// lookahead to recognize the two-character operators `==` and `!=`.
///
/// The lexer has no failure states: input it cannot classify comes back as
/// [`TokenKind::Illegal`] tokens, and once the source is exhausted every
/// further call returns [`TokenKind::Eof`].
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub cursor: Cursor<'a>,

    /// Starting byte offset of the current token.
    pub(crate) token_start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over the given source text.
    ///
    /// Construction cannot fail; the lexer holds the source for its whole
    /// lifetime and never mutates it.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
        }
    }

    /// Returns the next token from the source text.
    ///
    /// This is the main entry point for tokenization. It skips leading
    /// whitespace, then dispatches on the current character. The cursor is
    /// past the consumed characters when this returns, so each call makes
    /// strict progress until the EOF steady state.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        self.token_start = self.cursor.position();

        if self.cursor.is_at_end() {
            return Token::new(TokenKind::Eof, "");
        }

        match self.cursor.current_char() {
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            '+' => self.lex_single(TokenKind::Plus),
            '-' => self.lex_single(TokenKind::Minus),
            '*' => self.lex_single(TokenKind::Asterisk),
            '/' => self.lex_single(TokenKind::Slash),
            '%' => self.lex_single(TokenKind::Mod),
            '<' => self.lex_single(TokenKind::Lt),
            '>' => self.lex_single(TokenKind::Gt),
            ',' => self.lex_single(TokenKind::Comma),
            ';' => self.lex_single(TokenKind::Semicolon),
            ':' => self.lex_single(TokenKind::Colon),
            '(' => self.lex_single(TokenKind::LParen),
            ')' => self.lex_single(TokenKind::RParen),
            '{' => self.lex_single(TokenKind::LBrace),
            '}' => self.lex_single(TokenKind::RBrace),
            c if is_letter(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            _ => self.lex_single(TokenKind::Illegal),
        }
    }

    /// Consumes the current character and emits it as a one-character
    /// token of the given kind.
    pub(crate) fn lex_single(&mut self, kind: TokenKind) -> Token<'a> {
        self.cursor.advance();
        self.token(kind)
    }

    /// Builds a token of the given kind whose literal is everything
    /// consumed since the start of the current token.
    pub(crate) fn token(&self, kind: TokenKind) -> Token<'a> {
        Token::new(kind, self.cursor.slice_from(self.token_start))
    }

    /// Skips whitespace characters: space, tab, newline, carriage return.
    ///
    /// Whitespace is consumed silently and never emitted as a token.
    fn skip_whitespace(&mut self) {
        loop {
            match self.cursor.current_char() {
                ' ' | '\t' | '\n' | '\r' => self.cursor.advance(),
                _ => return,
            }
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
