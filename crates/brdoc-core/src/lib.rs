//! # brdoc-core: Brazilian Taxpayer Identifiers
//!
//! Validation and formatting engine for the two national taxpayer
//! identifiers accepted by registration forms:
//!
//! - **CPF** (*Cadastro de Pessoas Físicas*): 11 digits, individuals.
//! - **CNPJ** (*Cadastro Nacional da Pessoa Jurídica*): 14 digits, legal
//!   entities.
//!
//! Both carry two trailing check digits computed by a weighted modulus-11
//! sum over the preceding digits.
//!
//! ## Key Design Principles
//!
//! 1. **Stateless free functions.** Every operation is a pure
//!    input → output transformation. Nothing is cached between calls, so the
//!    engine can be used from any number of threads without coordination.
//!
//! 2. **Violations are values.** [`validate`] never panics and never returns
//!    `Err`. Every broken rule becomes a [`Violation`] inside the returned
//!    [`ValidationResult`], and all applicable violations are reported at
//!    once.
//!
//! 3. **Digits first.** Raw input is normalized with [`clean_document`]
//!    before any check. The `formatted` field of a result is derived from the
//!    normalized digits only, never from the raw input.
//!
//! 4. **Injectable randomness.** The fixture generators take any
//!    [`rand::Rng`], so tests can seed them.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No subscriber is installed here; `tracing` events are emitted for the
//!   host application to collect.

/// Implement `Deserialize` for a document newtype by routing the raw string
/// through the type's validating `new()` constructor.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub mod checksum;
pub mod cnpj;
pub mod cpf;
pub mod document;
pub mod error;
pub mod format;
pub mod generate;
pub mod normalize;
pub mod validation;

// Re-export primary types for ergonomic imports.
pub use checksum::{cnpj_check_digits, cpf_check_digits};
pub use cnpj::{format_cnpj, validate_cnpj, Cnpj, CNPJ_LENGTH};
pub use cpf::{format_cpf, validate_cpf, Cpf, CPF_LENGTH};
pub use document::Document;
pub use error::{DocumentError, UnknownKind, Violation};
pub use format::format_document;
pub use generate::{
    generate_valid_cnpj, generate_valid_cnpj_with, generate_valid_cpf, generate_valid_cpf_with,
    CNPJ_HEAD_OFFICE_BRANCH,
};
pub use normalize::{clean_document, get_document_type, DocumentKind};
pub use validation::{is_valid_document, validate, ValidationResult};
