//! # Normalization and Type Detection
//!
//! Raw identifiers arrive punctuated (`111.444.777-35`), padded with
//! whitespace, or pasted with stray symbols. Everything downstream works on
//! the normalized digit string produced here.

use serde::{Deserialize, Serialize};

use crate::cnpj::CNPJ_LENGTH;
use crate::cpf::CPF_LENGTH;
use crate::error::UnknownKind;

/// The identifier family a digit string belongs to, decided by length alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// 11-digit individual taxpayer identifier.
    Cpf,
    /// 14-digit legal-entity taxpayer identifier.
    Cnpj,
    /// Any other digit count.
    Unknown,
}

impl DocumentKind {
    /// Classify a normalized digit string by its length.
    ///
    /// Digit values are not inspected: `"00000000000"` is a [`DocumentKind::Cpf`]
    /// even though it can never validate.
    pub fn from_digits(digits: &str) -> Self {
        match digits.len() {
            CPF_LENGTH => Self::Cpf,
            CNPJ_LENGTH => Self::Cnpj,
            _ => Self::Unknown,
        }
    }

    /// The exact digit count required for this kind, if any.
    pub fn expected_length(&self) -> Option<usize> {
        match self {
            Self::Cpf => Some(CPF_LENGTH),
            Self::Cnpj => Some(CNPJ_LENGTH),
            Self::Unknown => None,
        }
    }

    /// Lowercase machine label, as used in serialized results.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cpf => f.write_str("CPF"),
            Self::Cnpj => f.write_str("CNPJ"),
            Self::Unknown => f.write_str("document"),
        }
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cpf" => Ok(Self::Cpf),
            "cnpj" => Ok(Self::Cnpj),
            "unknown" => Ok(Self::Unknown),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

/// Strip every character that is not an ASCII decimal digit.
///
/// Never fails. Input with no digits yields an empty string.
pub fn clean_document(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Normalize `raw` and classify it by digit count. No checksum is computed.
pub fn get_document_type(raw: &str) -> DocumentKind {
    DocumentKind::from_digits(&clean_document(raw))
}

/// Decode a normalized digit string into digit values.
///
/// Callers must pass the output of [`clean_document`]; any other byte is
/// mapped through `saturating_sub` and will not match a check digit.
pub(crate) fn digit_values(digits: &str) -> Vec<u8> {
    digits.bytes().map(|b| b.saturating_sub(b'0')).collect()
}
