//! tslex CLI - A command-line front end for the tslex lexer.
//!
//! This is the main entry point for the tslex binary. It uses clap for
//! argument parsing and dispatches to the command handlers.
//!
//! Exit status is 0 when every input lexed cleanly, 1 when any input had
//! lexical errors and 2 when a command could not run at all.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::Summary;
use commands::{run_check, run_codes, run_tokens, CheckArgs, CodesArgs, TokensArgs};
use config::{Config, OutputFormat};
use error::{CliError, Result};

/// tslex - A lexer for TypeScript-like source
///
/// tslex splits source files into tokens and reports lexical errors with
/// TypeScript-style error codes.
#[derive(Parser, Debug)]
#[command(name = "tslex")]
#[command(author = "tslex Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A lexer for TypeScript-like source", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "TSLEX_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "TSLEX_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "TSLEX_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the tslex CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of each input
    ///
    /// Prints one `KIND lexeme` line per token, or a JSON array holding the
    /// tokens and errors of every file.
    Tokens(TokensCommand),

    /// Report lexical errors without printing tokens
    Check(CheckCommand),

    /// List lexical error codes
    ///
    /// Prints every code with its message, or only the given one.
    Codes(CodesCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Input files (`-` for standard input)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Leave comment tokens out of the output
    #[arg(long)]
    no_comments: bool,

    /// Don't print diagnostics
    #[arg(short, long)]
    quiet: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Input files (`-` for standard input)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Don't print diagnostics or the summary line
    #[arg(short, long)]
    quiet: bool,
}

/// Arguments for the codes subcommand.
#[derive(Parser, Debug)]
struct CodesCommand {
    /// Code to explain (`TS1002` or `1002`)
    code: Option<String>,
}

/// Main entry point for the tslex CLI.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(summary) if summary.is_clean() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        },
    }
}

/// Initialize logging, load configuration and run the selected command.
fn run(cli: Cli) -> Result<Summary> {
    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;
    let color = config.output.color && !cli.no_color;

    execute_command(cli.command, color, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with token output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CliError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, color: bool, config: Config) -> Result<Summary> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, color, config),
        Commands::Check(args) => execute_check(args, color, config),
        Commands::Codes(args) => execute_codes(args),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, color: bool, config: Config) -> Result<Summary> {
    let tokens_args = TokensArgs {
        files: args.files,
        format: args.format.unwrap_or(config.output.format),
        include_comments: config.output.include_comments && !args.no_comments,
        color,
        quiet: args.quiet || config.report.quiet,
    };
    run_tokens(tokens_args)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, color: bool, config: Config) -> Result<Summary> {
    let check_args = CheckArgs {
        files: args.files,
        color,
        quiet: args.quiet || config.report.quiet,
    };
    run_check(check_args)
}

/// Execute the codes command.
fn execute_codes(args: CodesCommand) -> Result<Summary> {
    run_codes(CodesArgs { code: args.code })?;
    Ok(Summary::default())
}
