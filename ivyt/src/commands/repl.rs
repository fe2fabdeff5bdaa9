//! REPL command implementation.
//!
//! The REPL reads one line at a time, tokenizes it with a fresh lexer, and
//! prints every token until the end-of-input token is observed. No parsing
//! or evaluation happens here; the loop exists to inspect the token stream
//! interactively.

use std::io::{BufRead, Write};

use ivyc_lex::Lexer;

use crate::config::DEFAULT_PROMPT;
use crate::error::Result;

/// Arguments for the repl command.
#[derive(Debug, Clone)]
pub struct ReplArgs {
    /// Prompt printed before each input line.
    pub prompt: String,
    /// Whether to print the greeting banner on startup.
    pub greeting: bool,
}

impl Default for ReplArgs {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            greeting: true,
        }
    }
}

/// Repl command handler.
pub struct ReplCommand {
    args: ReplArgs,
}

impl ReplCommand {
    /// Create a new ReplCommand.
    pub fn new(args: ReplArgs) -> Self {
        Self { args }
    }

    /// Run the read-lex-print loop until the input stream ends.
    ///
    /// Reader and writer are injected so the loop can be driven by tests
    /// and by piped input alike.
    pub fn run(&self, mut input: impl BufRead, mut output: impl Write) -> Result<()> {
        if self.args.greeting {
            writeln!(
                output,
                "Ivy {} token inspector. Press Ctrl-D to exit.",
                env!("CARGO_PKG_VERSION")
            )?;
        }

        let mut line = String::new();
        loop {
            write!(output, "{}", self.args.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                // End of input stream
                writeln!(output)?;
                return Ok(());
            }

            let mut lexer = Lexer::new(&line);
            loop {
                let token = lexer.next_token();
                if token.is_eof() {
                    break;
                }
                writeln!(output, "{token}")?;
            }
        }
    }
}

/// Run the repl command with the given arguments.
pub fn run_repl(args: ReplArgs, input: impl BufRead, output: impl Write) -> Result<()> {
    ReplCommand::new(args).run(input, output)
}
