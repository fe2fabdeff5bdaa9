//! Identifier and keyword lexing.

use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

/// Returns true for the characters that may appear in an identifier:
/// ASCII letters and underscore.
///
/// Digits are excluded from the whole run, so `foo123` lexes as the
/// identifier `foo` followed by the integer `123`.
pub(crate) fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes a maximal run of letters and underscores, then resolves
    /// the collected spelling against the keyword table. Spellings absent
    /// from the table come back as generic identifiers.
    ///
    /// # Returns
    ///
    /// A token whose literal is the exact spelling, with a keyword kind
    /// (e.g. [`TokenKind::Let`]) or [`TokenKind::Ident`].
    pub fn lex_identifier(&mut self) -> Token<'a> {
        while is_letter(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);

        self.token(keyword_from_ident(text).unwrap_or(TokenKind::Ident))
    }
}
