//! # CNPJ: Legal-Entity Taxpayer Identifier
//!
//! 14 digits: an 8-digit company root, a 4-digit branch number (`0001` for
//! the head office), and two check digits. Canonical display form is
//! `DD.DDD.DDD/DDDD-DD`.

use serde::Serialize;

use crate::checksum::{check, CNPJ_SCHEME};
use crate::error::DocumentError;
use crate::format::{is_digits_of_len, CNPJ_MASK};
use crate::normalize::{clean_document, DocumentKind};
use crate::validation::ValidationResult;

/// Number of digits in a CNPJ.
pub const CNPJ_LENGTH: usize = 14;

/// Render 14 normalized digits as `DD.DDD.DDD/DDDD-DD`.
///
/// Anything that is not exactly 14 ASCII digits is returned unchanged.
pub fn format_cnpj(digits: &str) -> String {
    if is_digits_of_len(digits, CNPJ_LENGTH) {
        CNPJ_MASK.apply(digits)
    } else {
        digits.to_string()
    }
}

/// Validate `raw` as a CNPJ regardless of its digit count.
///
/// The result always has `kind = Cnpj`.
pub fn validate_cnpj(raw: &str) -> ValidationResult {
    check_normalized(clean_document(raw))
}

pub(crate) fn check_normalized(digits: String) -> ValidationResult {
    let errors = check(&digits, &CNPJ_SCHEME);
    let formatted = format_cnpj(&digits);
    ValidationResult::from_violations(DocumentKind::Cnpj, formatted, errors)
}

/// A CNPJ that passed every rule. Stored as 14 digits without punctuation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cnpj(String);

impl_validating_deserialize!(Cnpj);

impl Cnpj {
    /// Normalize and validate a CNPJ.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError`] listing every violated rule.
    pub fn new(value: impl AsRef<str>) -> Result<Self, DocumentError> {
        let result = validate_cnpj(value.as_ref());
        if result.is_valid {
            Ok(Self(clean_document(value.as_ref())))
        } else {
            Err(DocumentError {
                kind: DocumentKind::Cnpj,
                violations: result.errors,
            })
        }
    }

    /// The 14 canonical digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 8-digit company root shared by every branch.
    pub fn root(&self) -> &str {
        &self.0[..8]
    }

    /// The 4-digit branch number.
    pub fn branch(&self) -> &str {
        &self.0[8..12]
    }

    /// Whether this CNPJ identifies the head office (branch `0001`).
    pub fn is_head_office(&self) -> bool {
        self.branch() == crate::generate::CNPJ_HEAD_OFFICE_BRANCH
    }

    /// Return the CNPJ in display form: `DD.DDD.DDD/DDDD-DD`.
    pub fn formatted(&self) -> String {
        CNPJ_MASK.apply(&self.0)
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for Cnpj {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
