//! Error handling module for the ivyt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application. The lexer itself never fails
//! (unrecognized input degrades to ILLEGAL tokens), so every variant here
//! concerns the tool around it.

use thiserror::Error;

/// Main error type for the ivyt CLI application.
///
/// This enum represents all possible errors that can occur
/// during the execution of ivyt commands.
#[derive(Error, Debug)]
pub enum IvytError {
    /// Error when a required configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using IvytError.
///
/// This type alias simplifies function signatures by providing
/// a consistent result type throughout the application.
pub type Result<T> = std::result::Result<T, IvytError>;
