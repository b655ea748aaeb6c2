//! # Error Types
//!
//! All derived with `thiserror`:
//!
//! - [`Violation`]: a single broken rule. Validation collects these into
//!   [`crate::ValidationResult::errors`]; their `Display` text is the message
//!   shown to the person typing the identifier.
//! - [`DocumentError`]: returned by the validating constructors
//!   ([`crate::Cpf::new`], [`crate::Cnpj::new`], [`crate::Document::parse`])
//!   and carries every violation found.
//! - [`UnknownKind`]: a kind label that does not parse as a [`DocumentKind`].

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::normalize::DocumentKind;

/// A single rule violated by an identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Violation {
    /// Wrong digit count for the requested kind.
    #[error("{kind} must have exactly {expected} digits (got {actual})")]
    Length {
        /// Kind the input was checked as.
        kind: DocumentKind,
        /// Required digit count.
        expected: usize,
        /// Digit count after normalization.
        actual: usize,
    },

    /// Every digit is the same (e.g. `111.111.111-11`).
    #[error("{kind} cannot be all identical digits")]
    IdenticalDigits {
        /// Kind the input was checked as.
        kind: DocumentKind,
    },

    /// The first check digit does not match the weighted sum.
    #[error("{kind} first check digit invalid (expected {expected}, found {found})")]
    FirstCheckDigit {
        /// Kind the input was checked as.
        kind: DocumentKind,
        /// Digit computed from the preceding positions.
        expected: u8,
        /// Digit present in the input.
        found: u8,
    },

    /// The second check digit does not match the weighted sum.
    #[error("{kind} second check digit invalid (expected {expected}, found {found})")]
    SecondCheckDigit {
        /// Kind the input was checked as.
        kind: DocumentKind,
        /// Digit computed from the preceding positions.
        expected: u8,
        /// Digit present in the input.
        found: u8,
    },

    /// The digit count matches neither identifier.
    #[error("document must have 11 digits (CPF) or 14 digits (CNPJ) (got {actual})")]
    UnknownLength {
        /// Digit count after normalization.
        actual: usize,
    },
}

impl Violation {
    /// Stable machine-readable code for this violation.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Length { .. } => "length",
            Self::IdenticalDigits { .. } => "identical_digits",
            Self::FirstCheckDigit { .. } => "first_check_digit",
            Self::SecondCheckDigit { .. } => "second_check_digit",
            Self::UnknownLength { .. } => "unknown_length",
        }
    }
}

/// Violations serialize as their human-readable message.
impl Serialize for Violation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An identifier was rejected by a validating constructor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind}: {}", join_messages(.violations))]
pub struct DocumentError {
    /// Kind the input was checked as.
    pub kind: DocumentKind,
    /// Every rule the input broke, in check order. Never empty.
    pub violations: Vec<Violation>,
}

/// A kind label that names neither identifier nor `unknown`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown document kind: {0}")]
pub struct UnknownKind(pub String);

fn join_messages(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_message_names_expected_count() {
        let v = Violation::Length {
            kind: DocumentKind::Cpf,
            expected: 11,
            actual: 9,
        };
        assert_eq!(v.to_string(), "CPF must have exactly 11 digits (got 9)");
    }

    #[test]
    fn identical_digits_message() {
        let v = Violation::IdenticalDigits {
            kind: DocumentKind::Cnpj,
        };
        assert_eq!(v.to_string(), "CNPJ cannot be all identical digits");
    }

    #[test]
    fn check_digit_messages() {
        let first = Violation::FirstCheckDigit {
            kind: DocumentKind::Cpf,
            expected: 3,
            found: 4,
        };
        let second = Violation::SecondCheckDigit {
            kind: DocumentKind::Cpf,
            expected: 5,
            found: 6,
        };
        assert!(first.to_string().contains("first check digit invalid"));
        assert!(second.to_string().contains("second check digit invalid"));
    }

    #[test]
    fn unknown_length_names_both_lengths() {
        let msg = Violation::UnknownLength { actual: 3 }.to_string();
        assert!(msg.contains("11"));
        assert!(msg.contains("14"));
    }

    #[test]
    fn codes_are_distinct() {
        let all = [
            Violation::Length {
                kind: DocumentKind::Cpf,
                expected: 11,
                actual: 0,
            },
            Violation::IdenticalDigits {
                kind: DocumentKind::Cpf,
            },
            Violation::FirstCheckDigit {
                kind: DocumentKind::Cpf,
                expected: 0,
                found: 1,
            },
            Violation::SecondCheckDigit {
                kind: DocumentKind::Cpf,
                expected: 0,
                found: 1,
            },
            Violation::UnknownLength { actual: 0 },
        ];
        let codes: std::collections::HashSet<_> = all.iter().map(Violation::code).collect();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn violation_serializes_as_message() {
        let v = Violation::UnknownLength { actual: 3 };
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, format!("\"{v}\""));
    }

    #[test]
    fn unknown_kind_message_names_label() {
        let err = UnknownKind("rg".to_string());
        assert_eq!(err.to_string(), "unknown document kind: rg");
    }

    #[test]
    fn document_error_joins_violations() {
        let err = DocumentError {
            kind: DocumentKind::Cpf,
            violations: vec![
                Violation::IdenticalDigits {
                    kind: DocumentKind::Cpf,
                },
                Violation::UnknownLength { actual: 2 },
            ],
        };
        let msg = err.to_string();
        assert!(msg.starts_with("invalid CPF: "));
        assert!(msg.contains("; "));
    }
}
