//! Lex command implementation.
//!
//! This module provides functionality to tokenize source files and print
//! one token per line. Illegal tokens are reported as warnings with their
//! line number but never abort the run; a lexically broken file still
//! produces its full token stream.

use std::io::Write;
use std::path::{Path, PathBuf};

use ivyc_lex::{Lexer, TokenKind};
use tracing::{debug, warn};

use crate::error::{IvytError, Result};

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Input files to tokenize.
    pub input: Vec<PathBuf>,
    /// Enable verbose output.
    pub verbose: bool,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
}

impl LexCommand {
    /// Create a new LexCommand.
    pub fn new(args: LexArgs) -> Self {
        Self { args }
    }

    /// Execute the command.
    pub fn run(&self, output: &mut impl Write) -> Result<()> {
        for path in &self.args.input {
            self.validate_input_path(path)?;
            self.lex_file(path, output)?;
        }
        Ok(())
    }

    /// Validate that an input path exists and is a file.
    fn validate_input_path(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(IvytError::Validation(format!(
                "input file does not exist: {}",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(IvytError::Validation(format!(
                "input path is not a file: {}",
                path.display()
            )));
        }

        Ok(())
    }

    /// Tokenize a single file and print its tokens.
    fn lex_file(&self, path: &Path, output: &mut impl Write) -> Result<()> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            IvytError::FileOperation(format!("failed to read {}: {}", path.display(), e))
        })?;

        debug!("lexing {}", path.display());

        let mut lexer = Lexer::new(&source);
        let mut total = 0usize;
        let mut illegal = 0usize;

        loop {
            let token = lexer.next_token();
            if token.is_eof() {
                break;
            }

            if token.kind == TokenKind::Illegal {
                illegal += 1;
                warn!(
                    "{}:{}: illegal character {:?}",
                    path.display(),
                    lexer.line(),
                    token.literal
                );
            }

            writeln!(output, "{token}")?;
            total += 1;
        }

        if self.args.verbose {
            eprintln!(
                "✅ {}: {} token(s), {} illegal",
                path.display(),
                total,
                illegal
            );
        }

        Ok(())
    }
}

/// Run the lex command with the given arguments.
pub fn run_lex(args: LexArgs, mut output: impl Write) -> Result<()> {
    LexCommand::new(args).run(&mut output)
}
