//! # Validate Subcommand
//!
//! `brdoc validate [--kind auto|cpf|cnpj] <DOC>...`
//!
//! Prints one verdict per input and exits with [`crate::EXIT_INVALID`] if any
//! input was rejected.

use std::io::Write;

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;

use brdoc_core::{validate, validate_cnpj, validate_cpf, ValidationResult};

use crate::config::OutputFormat;
use crate::{write_json_line, EXIT_INVALID, EXIT_OK};

/// Which checker to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Detect from the digit count.
    #[default]
    Auto,
    /// Always check as a CPF.
    Cpf,
    /// Always check as a CNPJ.
    Cnpj,
}

/// Arguments for `brdoc validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Identifiers to validate, punctuated or bare.
    #[arg(required = true)]
    pub documents: Vec<String>,

    /// Force a specific identifier kind instead of detecting it.
    #[arg(long, value_enum, default_value_t = KindArg::Auto)]
    pub kind: KindArg,
}

#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    #[serde(flatten)]
    result: &'a ValidationResult,
}

/// Execute the validate subcommand.
pub fn run_validate<W: Write + ?Sized>(
    args: &ValidateArgs,
    output: OutputFormat,
    out: &mut W,
) -> Result<u8> {
    let mut rejected = 0usize;

    for input in &args.documents {
        let result = match args.kind {
            KindArg::Auto => validate(input),
            KindArg::Cpf => validate_cpf(input),
            KindArg::Cnpj => validate_cnpj(input),
        };
        if !result.is_valid {
            rejected += 1;
        }

        match output {
            OutputFormat::Json => write_json_line(
                out,
                &Report {
                    input,
                    result: &result,
                },
            )?,
            OutputFormat::Text => {
                if result.is_valid {
                    writeln!(out, "VALID    {:<7} {}", result.kind.as_str(), result.formatted)?;
                } else {
                    writeln!(
                        out,
                        "INVALID  {:<7} {}: {}",
                        result.kind.as_str(),
                        result.formatted,
                        result.messages().join("; ")
                    )?;
                }
            }
        }
    }

    tracing::info!(
        total = args.documents.len(),
        rejected,
        "validation finished"
    );

    Ok(if rejected == 0 { EXIT_OK } else { EXIT_INVALID })
}
