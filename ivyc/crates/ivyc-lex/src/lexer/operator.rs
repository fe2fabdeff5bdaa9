//! Two-character operator lexing.
//!
//! Only `=` and `!` need lookahead; every other operator and delimiter is
//! a fixed single character handled directly by the dispatch loop.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes assignment or equality.
    ///
    /// Handles: `=`, `==`
    pub fn lex_equals(&mut self) -> Token<'a> {
        if self.cursor.peek_char() == '=' {
            self.cursor.advance();
            self.lex_single(TokenKind::Eq)
        } else {
            self.lex_single(TokenKind::Assign)
        }
    }

    /// Lexes logical negation or inequality.
    ///
    /// Handles: `!`, `!=`
    pub fn lex_bang(&mut self) -> Token<'a> {
        if self.cursor.peek_char() == '=' {
            self.cursor.advance();
            self.lex_single(TokenKind::NotEq)
        } else {
            self.lex_single(TokenKind::Bang)
        }
    }
}
