//! # Format, Clean, and Detect Subcommands
//!
//! Single-pass transformations with no verdict: they always exit
//! [`crate::EXIT_OK`].

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use brdoc_core::{clean_document, format_document, get_document_type, DocumentKind};

use crate::config::OutputFormat;
use crate::{write_json_line, EXIT_OK};

/// Identifiers passed to `format`, `clean`, and `detect`.
#[derive(Args, Debug)]
pub struct DocumentsArgs {
    /// Identifiers, punctuated or bare.
    #[arg(required = true)]
    pub documents: Vec<String>,
}

#[derive(Serialize)]
struct Transformed<'a> {
    input: &'a str,
    output: String,
}

#[derive(Serialize)]
struct Detected<'a> {
    input: &'a str,
    kind: DocumentKind,
}

fn run_transform<W: Write + ?Sized>(
    args: &DocumentsArgs,
    output: OutputFormat,
    out: &mut W,
    transform: fn(&str) -> String,
) -> Result<u8> {
    for input in &args.documents {
        let transformed = transform(input);
        match output {
            OutputFormat::Text => writeln!(out, "{transformed}")?,
            OutputFormat::Json => write_json_line(
                out,
                &Transformed {
                    input,
                    output: transformed,
                },
            )?,
        }
    }
    Ok(EXIT_OK)
}

/// Execute `brdoc format`.
pub fn run_format<W: Write + ?Sized>(
    args: &DocumentsArgs,
    output: OutputFormat,
    out: &mut W,
) -> Result<u8> {
    run_transform(args, output, out, format_document)
}

/// Execute `brdoc clean`.
pub fn run_clean<W: Write + ?Sized>(
    args: &DocumentsArgs,
    output: OutputFormat,
    out: &mut W,
) -> Result<u8> {
    run_transform(args, output, out, clean_document)
}

/// Execute `brdoc detect`.
pub fn run_detect<W: Write + ?Sized>(
    args: &DocumentsArgs,
    output: OutputFormat,
    out: &mut W,
) -> Result<u8> {
    for input in &args.documents {
        let kind = get_document_type(input);
        match output {
            OutputFormat::Text => writeln!(out, "{}", kind.as_str())?,
            OutputFormat::Json => write_json_line(out, &Detected { input, kind })?,
        }
    }
    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(items: &[&str]) -> DocumentsArgs {
        DocumentsArgs {
            documents: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn text(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn format_text() {
        let mut out = Vec::new();
        let code =
            run_format(&docs(&["11144477735", "12345"]), OutputFormat::Text, &mut out).unwrap();
        assert_eq!(code, EXIT_OK);
        assert_eq!(text(out), "111.444.777-35\n123.45\n");
    }

    #[test]
    fn clean_text() {
        let mut out = Vec::new();
        run_clean(&docs(&["11.222.333/0001-81"]), OutputFormat::Text, &mut out).unwrap();
        assert_eq!(text(out), "11222333000181\n");
    }

    #[test]
    fn clean_json() {
        let mut out = Vec::new();
        run_clean(&docs(&["1.2-3"]), OutputFormat::Json, &mut out).unwrap();
        assert_eq!(text(out), "{\"input\":\"1.2-3\",\"output\":\"123\"}\n");
    }

    #[test]
    fn detect_text() {
        let mut out = Vec::new();
        run_detect(
            &docs(&["111.444.777-35", "11.222.333/0001-81", "42"]),
            OutputFormat::Text,
            &mut out,
        )
        .unwrap();
        assert_eq!(text(out), "cpf\ncnpj\nunknown\n");
    }

    #[test]
    fn detect_json() {
        let mut out = Vec::new();
        run_detect(&docs(&["11144477735"]), OutputFormat::Json, &mut out).unwrap();
        assert_eq!(text(out), "{\"input\":\"11144477735\",\"kind\":\"cpf\"}\n");
    }
}
