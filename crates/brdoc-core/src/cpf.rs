//! # CPF: Individual Taxpayer Identifier
//!
//! 11 digits: a 9-digit body followed by two check digits. Canonical display
//! form is `DDD.DDD.DDD-DD`.

use serde::Serialize;

use crate::checksum::{check, CPF_SCHEME};
use crate::error::DocumentError;
use crate::format::{is_digits_of_len, CPF_MASK};
use crate::normalize::{clean_document, DocumentKind};
use crate::validation::ValidationResult;

/// Number of digits in a CPF.
pub const CPF_LENGTH: usize = 11;

/// Render 11 normalized digits as `DDD.DDD.DDD-DD`.
///
/// Anything that is not exactly 11 ASCII digits is returned unchanged.
pub fn format_cpf(digits: &str) -> String {
    if is_digits_of_len(digits, CPF_LENGTH) {
        CPF_MASK.apply(digits)
    } else {
        digits.to_string()
    }
}

/// Validate `raw` as a CPF regardless of its digit count.
///
/// The result always has `kind = Cpf`. A wrong digit count is reported as a
/// [`crate::Violation::Length`].
pub fn validate_cpf(raw: &str) -> ValidationResult {
    check_normalized(clean_document(raw))
}

pub(crate) fn check_normalized(digits: String) -> ValidationResult {
    let errors = check(&digits, &CPF_SCHEME);
    let formatted = format_cpf(&digits);
    ValidationResult::from_violations(DocumentKind::Cpf, formatted, errors)
}

/// A CPF that passed every rule. Stored as 11 digits without punctuation.
///
/// # Validation
///
/// - Exactly 11 digits after normalization
/// - Not all identical digits
/// - Both check digits correct
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cpf(String);

impl_validating_deserialize!(Cpf);

impl Cpf {
    /// Normalize and validate a CPF.
    ///
    /// Accepts punctuated (`"111.444.777-35"`) and bare (`"11144477735"`)
    /// input.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError`] listing every violated rule.
    pub fn new(value: impl AsRef<str>) -> Result<Self, DocumentError> {
        let result = validate_cpf(value.as_ref());
        if result.is_valid {
            Ok(Self(clean_document(value.as_ref())))
        } else {
            Err(DocumentError {
                kind: DocumentKind::Cpf,
                violations: result.errors,
            })
        }
    }

    /// The 11 canonical digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the CPF in display form: `DDD.DDD.DDD-DD`.
    pub fn formatted(&self) -> String {
        CPF_MASK.apply(&self.0)
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for Cpf {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Violation;

    #[test]
    fn format_full_length() {
        assert_eq!(format_cpf("11144477735"), "111.444.777-35");
    }

    #[test]
    fn format_wrong_length_unchanged() {
        assert_eq!(format_cpf("1114447773"), "1114447773");
        assert_eq!(format_cpf("111444777355"), "111444777355");
        assert_eq!(format_cpf(""), "");
    }

    #[test]
    fn format_non_digits_unchanged() {
        assert_eq!(format_cpf("111.444.777"), "111.444.777");
    }

    #[test]
    fn validate_known_valid() {
        let r = validate_cpf("111.444.777-35");
        assert!(r.is_valid);
        assert_eq!(r.kind, DocumentKind::Cpf);
        assert_eq!(r.formatted, "111.444.777-35");
    }

    #[test]
    fn validate_all_identical_rejected() {
        let r = validate_cpf("11111111111");
        assert!(!r.is_valid);
        assert!(r
            .errors
            .contains(&Violation::IdenticalDigits { kind: DocumentKind::Cpf }));
        assert!(r.messages().iter().any(|m| m.contains("identical digits")));
    }

    #[test]
    fn validate_every_repeated_digit_rejected() {
        for d in '0'..='9' {
            let raw: String = std::iter::repeat(d).take(CPF_LENGTH).collect();
            let r = validate_cpf(&raw);
            assert!(!r.is_valid, "{raw}");
            assert!(r
                .errors
                .contains(&Violation::IdenticalDigits { kind: DocumentKind::Cpf }));
        }
    }

    #[test]
    fn validate_wrong_length_still_cpf_kind() {
        let r = validate_cpf("11.222.333/0001-81");
        assert_eq!(r.kind, DocumentKind::Cpf);
        assert!(!r.is_valid);
        assert_eq!(
            r.errors,
            vec![Violation::Length {
                kind: DocumentKind::Cpf,
                expected: 11,
                actual: 14,
            }]
        );
        assert_eq!(r.formatted, "11222333000181");
    }

    #[test]
    fn validate_first_digit_error() {
        let r = validate_cpf("111.444.777-45");
        assert!(r.messages()[0].contains("first check digit invalid"));
    }

    #[test]
    fn newtype_accepts_valid_and_stores_digits() {
        let cpf = Cpf::new("111.444.777-35").unwrap();
        assert_eq!(cpf.as_str(), "11144477735");
        assert_eq!(cpf.formatted(), "111.444.777-35");
        assert_eq!(format!("{cpf}"), "111.444.777-35");
    }

    #[test]
    fn newtype_rejects_invalid_with_all_violations() {
        let err = Cpf::new("111.444.777-36").unwrap_err();
        assert_eq!(err.kind, DocumentKind::Cpf);
        assert_eq!(err.violations.len(), 1);
        assert!(Cpf::new("").is_err());
        assert!(Cpf::new("00000000000").is_err());
    }

    #[test]
    fn newtype_from_str() {
        let cpf: Cpf = "11144477735".parse().unwrap();
        assert_eq!(cpf.as_str(), "11144477735");
        assert!("123".parse::<Cpf>().is_err());
    }

    #[test]
    fn newtype_serde_roundtrip() {
        let cpf = Cpf::new("111.444.777-35").unwrap();
        let json = serde_json::to_string(&cpf).unwrap();
        assert_eq!(json, "\"11144477735\"");
        let back: Cpf = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cpf);
    }

    #[test]
    fn newtype_deserialize_accepts_punctuated() {
        let cpf: Cpf = serde_json::from_str("\"111.444.777-35\"").unwrap();
        assert_eq!(cpf.as_str(), "11144477735");
    }

    #[test]
    fn newtype_deserialize_rejects_invalid() {
        assert!(serde_json::from_str::<Cpf>("\"111.444.777-36\"").is_err());
    }
}
