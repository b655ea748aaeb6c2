//! # Validation Entry Point
//!
//! [`validate`] normalizes raw input, detects the identifier kind from the
//! digit count, and dispatches to the CPF or CNPJ checker. The result has
//! the same shape for every outcome so a form can render it without
//! branching on the kind.

use serde::Serialize;

use crate::cnpj;
use crate::cpf;
use crate::error::Violation;
use crate::normalize::{clean_document, DocumentKind};

/// Outcome of validating one identifier.
///
/// Serializes with camelCase field names and violation messages as plain
/// strings:
///
/// ```json
/// {"isValid":false,"kind":"cpf","formatted":"111.444.777-36",
///  "errors":["CPF second check digit invalid (expected 5, found 6)"]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// `true` iff `errors` is empty.
    pub is_valid: bool,
    /// Kind the input was checked as.
    pub kind: DocumentKind,
    /// Best-effort display form, derived from the normalized digits only.
    pub formatted: String,
    /// Every rule the input broke, in check order.
    pub errors: Vec<Violation>,
}

impl ValidationResult {
    pub(crate) fn from_violations(
        kind: DocumentKind,
        formatted: String,
        errors: Vec<Violation>,
    ) -> Self {
        Self {
            is_valid: errors.is_empty(),
            kind,
            formatted,
            errors,
        }
    }

    /// Human-readable messages for every violation, in order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Validate an identifier of either kind.
///
/// Inputs whose digit count is neither 11 nor 14 come back as
/// [`DocumentKind::Unknown`] with a single [`Violation::UnknownLength`] and
/// the normalized digits, unpunctuated, as `formatted`.
pub fn validate(raw: &str) -> ValidationResult {
    let digits = clean_document(raw);
    let kind = DocumentKind::from_digits(&digits);
    tracing::debug!(%kind, digits = digits.len(), "validating document");

    let result = match kind {
        DocumentKind::Cpf => cpf::check_normalized(digits),
        DocumentKind::Cnpj => cnpj::check_normalized(digits),
        DocumentKind::Unknown => {
            let actual = digits.len();
            ValidationResult::from_violations(
                DocumentKind::Unknown,
                digits,
                vec![Violation::UnknownLength { actual }],
            )
        }
    };

    if !result.is_valid {
        tracing::trace!(
            %kind,
            violations = result.errors.len(),
            "document rejected"
        );
    }
    result
}

/// `true` iff [`validate`] accepts `raw`.
pub fn is_valid_document(raw: &str) -> bool {
    validate(raw).is_valid
}
