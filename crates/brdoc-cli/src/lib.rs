//! # brdoc-cli: Command-Line Front End for brdoc-core
//!
//! Provides the `brdoc` binary, a thin shell over the identifier engine for
//! scripting and fixture generation.
//!
//! ## Subcommands
//!
//! - `brdoc validate`: Check CPF/CNPJ identifiers and list every violation.
//! - `brdoc format`: Punctuate identifiers for display.
//! - `brdoc clean`: Strip everything but digits.
//! - `brdoc detect`: Report the kind implied by the digit count.
//! - `brdoc generate`: Emit valid identifiers for test fixtures.
//!
//! ```bash
//! brdoc validate 111.444.777-35 11.222.333/0001-81
//! brdoc --output json validate --kind cpf 11144477736
//! brdoc generate cnpj --count 10 --seed 42 --formatted
//! ```
//!
//! Every handler writes to a caller-supplied [`std::io::Write`] and returns
//! the process exit code.

pub mod config;
pub mod generate;
pub mod inspect;
pub mod validate;

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

/// Exit code when every input was valid (or the command has no verdict).
pub const EXIT_OK: u8 = 0;
/// Exit code when the command itself failed.
pub const EXIT_ERROR: u8 = 1;
/// Exit code when at least one input failed validation.
pub const EXIT_INVALID: u8 = 2;

/// Serialize `value` as one line of JSON.
pub(crate) fn write_json_line<W: Write + ?Sized, T: Serialize>(
    out: &mut W,
    value: &T,
) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        assert_ne!(EXIT_OK, EXIT_ERROR);
        assert_ne!(EXIT_OK, EXIT_INVALID);
        assert_ne!(EXIT_ERROR, EXIT_INVALID);
    }

    #[test]
    fn json_line_is_newline_terminated() {
        let mut out = Vec::new();
        write_json_line(&mut out, &serde_json::json!({"a": 1})).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"a\":1}\n");
    }
}
