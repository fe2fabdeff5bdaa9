//! ivyc-lex - Lexical Analyzer for the Ivy Programming Language
//!
//! This crate provides the complete lexer (tokenizer) for the Ivy
//! programming language. It transforms source text into a stream of tokens
//! that can be consumed by the parser.
//!
//! # Overview
//!
//! Lexical analysis is the first phase of compilation. The lexer makes a
//! single pass over the source with one character of lookahead, producing
//! exactly one token per call. It is total: any input, including arbitrary
//! garbage, yields a finite token sequence terminated by an EOF token, and
//! unrecognized characters degrade to `Illegal` tokens instead of errors.
//!
//! # Example Usage
//!
//! ```
//! use ivyc_lex::{Lexer, TokenKind};
//!
//! let source = "let five = 5;";
//! let mut lexer = Lexer::new(source);
//!
//! let token = lexer.next_token();
//! assert_eq!(token.kind, TokenKind::Let);
//! assert_eq!(token.literal, "let");
//!
//! // Or iterate over all tokens up to EOF
//! let rest: Vec<_> = lexer.map(|t| t.kind).collect();
//! assert_eq!(
//!     rest,
//!     vec![
//!         TokenKind::Ident,
//!         TokenKind::Assign,
//!         TokenKind::Int,
//!         TokenKind::Semicolon,
//!     ]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and the keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `fn`, `let`, `true`, `false`, `if`, `else`, `return`, `while`, `for`,
//! `break`, `continue`, `switch`, `case`
//!
//! ## Identifiers
//!
//! Maximal runs of ASCII letters and underscores. Digits never extend an
//! identifier: `foo123` is the identifier `foo` followed by the integer
//! `123`.
//!
//! ## Literals
//!
//! Unsigned decimal integers only: `5`, `10`, `9999`. No floats, radix
//! prefixes, or digit separators.
//!
//! ## Operators
//!
//! `=`, `+`, `-`, `!`, `*`, `/`, `%`, `<`, `>`, and the two-character
//! `==` and `!=`.
//!
//! ## Delimiters
//!
//! `,`, `;`, `:`, `(`, `)`, `{`, `}`
//!
//! ## Special
//!
//! - **Eof**: end-of-input marker, repeated on every call past the end
//! - **Illegal**: any single character that fits no other category

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, TokenKind};
