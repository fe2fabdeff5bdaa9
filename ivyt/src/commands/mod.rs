//! Command modules for the ivyt CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized
//! pattern: an arguments struct, a command handler, and a `run_*`
//! convenience function.

pub mod lex;
pub mod repl;

// Re-export command types and functions
pub use lex::{run_lex, LexArgs};
pub use repl::{run_repl, ReplArgs};
