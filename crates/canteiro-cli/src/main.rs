//! # canteiro CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use canteiro_cli::check::{run_check, CheckArgs};
use canteiro_cli::format::{
    run_mask, run_message, run_unmask, run_validate, MaskArgs, MessageArgs, UnmaskArgs,
    ValidateArgs,
};
use canteiro_cli::EXIT_ERROR;

/// Mask and validate Brazilian document fields (CPF, CNPJ, CEP, phone,
/// currency, dates) and whole registration forms.
#[derive(Parser, Debug)]
#[command(name = "canteiro", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory relative form paths are resolved against.
    #[arg(long, global = true, default_value = ".")]
    forms_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Format a value with a display mask.
    Mask(MaskArgs),

    /// Strip a value down to its digits.
    Unmask(UnmaskArgs),

    /// Check one value against a mask kind.
    Validate(ValidateArgs),

    /// Print the message for a failure reason.
    Message(MessageArgs),

    /// Check a record against a YAML form definition.
    Check(CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut out = std::io::stdout().lock();
    let result = match cli.command {
        Commands::Mask(args) => run_mask(&args, &mut out),
        Commands::Unmask(args) => run_unmask(&args, &mut out),
        Commands::Validate(args) => run_validate(&args, &mut out),
        Commands::Message(args) => run_message(&args, &mut out),
        Commands::Check(args) => run_check(&args, &cli.forms_dir, &mut out),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
