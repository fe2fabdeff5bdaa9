//! Integer literal lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer literal.
    ///
    /// Consumes a maximal run of decimal digits. There are no signs, radix
    /// prefixes, floating-point forms, or digit separators; the literal is
    /// the exact digit spelling and no numeric conversion happens here.
    pub fn lex_number(&mut self) -> Token<'a> {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        self.token(TokenKind::Int)
    }
}
