//! # Either Identifier
//!
//! [`Document`] holds a validated CPF or CNPJ when the caller accepts both,
//! as a single "CPF/CNPJ" form field does.

use serde::{Deserialize, Serialize};

use crate::cnpj::Cnpj;
use crate::cpf::Cpf;
use crate::error::{DocumentError, Violation};
use crate::normalize::{clean_document, DocumentKind};

/// A validated CPF or CNPJ.
///
/// Serializes untagged, as its canonical digits; the digit count tells the
/// kinds apart on the way back in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Document {
    /// Individual taxpayer.
    Cpf(Cpf),
    /// Legal entity.
    Cnpj(Cnpj),
}

impl Document {
    /// Detect the kind from the digit count and validate accordingly.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError`] with kind [`DocumentKind::Unknown`] when the
    /// digit count is neither 11 nor 14, otherwise the violations of the
    /// detected kind.
    pub fn parse(raw: &str) -> Result<Self, DocumentError> {
        let digits = clean_document(raw);
        match DocumentKind::from_digits(&digits) {
            DocumentKind::Cpf => Cpf::new(digits).map(Self::Cpf),
            DocumentKind::Cnpj => Cnpj::new(digits).map(Self::Cnpj),
            DocumentKind::Unknown => Err(DocumentError {
                kind: DocumentKind::Unknown,
                violations: vec![Violation::UnknownLength {
                    actual: digits.len(),
                }],
            }),
        }
    }

    /// The kind of this document. Never [`DocumentKind::Unknown`].
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Cpf(_) => DocumentKind::Cpf,
            Self::Cnpj(_) => DocumentKind::Cnpj,
        }
    }

    /// The canonical digits.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cpf(cpf) => cpf.as_str(),
            Self::Cnpj(cnpj) => cnpj.as_str(),
        }
    }

    /// The punctuated display form.
    pub fn formatted(&self) -> String {
        match self {
            Self::Cpf(cpf) => cpf.formatted(),
            Self::Cnpj(cnpj) => cnpj.formatted(),
        }
    }
}

impl From<Cpf> for Document {
    fn from(cpf: Cpf) -> Self {
        Self::Cpf(cpf)
    }
}

impl From<Cnpj> for Document {
    fn from(cnpj: Cnpj) -> Self {
        Self::Cnpj(cnpj)
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for Document {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
