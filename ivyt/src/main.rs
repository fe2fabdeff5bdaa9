//! Ivyt CLI - The command-line tool for the Ivy language.
//!
//! This is the main entry point for the ivyt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    lex::{run_lex, LexArgs},
    repl::{run_repl, ReplArgs},
};
use config::Config;
use error::{IvytError, Result};

/// Ivyt - the Ivy language command-line tool
///
/// Ivyt tokenizes Ivy source text: interactively, one line at a time, or
/// over whole files.
#[derive(Parser, Debug)]
#[command(name = "ivyt")]
#[command(author = "Ivy Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool for the Ivy language", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "IVYT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "IVYT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "IVYT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the ivyt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive token inspector
    ///
    /// Reads one line at a time, tokenizes it, and prints every token
    /// until the end of the line. Exit with Ctrl-D.
    Repl(ReplCommand),

    /// Tokenize source files
    ///
    /// Reads each input file, prints one token per line, and reports
    /// illegal characters with their line numbers.
    Lex(LexCommand),
}

/// Arguments for the repl subcommand.
#[derive(Parser, Debug)]
struct ReplCommand {
    /// Prompt to print before each line
    #[arg(short, long)]
    prompt: Option<String>,

    /// Skip the greeting banner
    #[arg(long)]
    no_greeting: bool,
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Input files to tokenize
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

/// Main entry point for the ivyt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
///
/// # Returns
/// * `Result<()>` - Success or an error
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.no_color)?;

    // Load configuration
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    // Execute the selected command
    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// # Arguments
/// * `verbose` - Whether to enable verbose logging
/// * `no_color` - Whether to disable colored output
///
/// # Returns
/// * `Result<()>` - Success or an error
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| IvytError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// # Arguments
/// * `config_path` - Optional path to configuration file
///
/// # Returns
/// * `Result<Config>` - The loaded configuration or an error
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
///
/// # Arguments
/// * `command` - The command to execute
/// * `verbose` - Whether verbose output is enabled
/// * `config` - The application configuration
///
/// # Returns
/// * `Result<()>` - Success or an error
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Repl(args) => execute_repl(args, config),
        Commands::Lex(args) => execute_lex(args, verbose),
    }
}

/// Execute the repl command.
fn execute_repl(args: ReplCommand, config: Config) -> Result<()> {
    let repl_args = ReplArgs {
        prompt: args.prompt.unwrap_or(config.repl.prompt),
        greeting: !args.no_greeting && config.repl.greeting,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_repl(repl_args, stdin.lock(), stdout.lock())
}

/// Execute the lex command.
fn execute_lex(args: LexCommand, verbose: bool) -> Result<()> {
    let lex_args = LexArgs {
        input: args.input,
        verbose,
    };

    run_lex(lex_args, io::stdout().lock())
}
