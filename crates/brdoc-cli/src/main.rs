//! # brdoc CLI entry point
//!
//! Parses command-line arguments, loads configuration, and dispatches to
//! subcommand handlers.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use brdoc_cli::config::{CliConfig, OutputFormat};
use brdoc_cli::generate::{run_generate, GenerateArgs};
use brdoc_cli::inspect::{run_clean, run_detect, run_format, DocumentsArgs};
use brdoc_cli::validate::{run_validate, ValidateArgs};
use brdoc_cli::EXIT_ERROR;

/// Brazilian taxpayer identifier toolkit.
///
/// Validates, formats, and generates CPF (individual) and CNPJ (entity)
/// identifiers.
#[derive(Parser, Debug)]
#[command(name = "brdoc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides config and BRDOC_OUTPUT).
    #[arg(long, value_enum, global = true)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate identifiers and report every violated rule.
    Validate(ValidateArgs),

    /// Punctuate identifiers for display.
    Format(DocumentsArgs),

    /// Strip everything except digits.
    Clean(DocumentsArgs),

    /// Report the identifier kind implied by the digit count.
    Detect(DocumentsArgs),

    /// Generate valid identifiers for test fixtures.
    Generate(GenerateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("brdoc CLI v{} starting", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let config = CliConfig::load(cli.config.as_deref())?;
    let output = cli.output.unwrap_or(config.output);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = match &cli.command {
        Commands::Validate(args) => run_validate(args, output, &mut out),
        Commands::Format(args) => run_format(args, output, &mut out),
        Commands::Clean(args) => run_clean(args, output, &mut out),
        Commands::Detect(args) => run_detect(args, output, &mut out),
        Commands::Generate(args) => run_generate(args, &config.generate, output, &mut out),
    }?;

    out.flush()?;
    Ok(code)
}
