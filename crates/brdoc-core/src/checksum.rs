//! # Weighted Modulus-11 Check Digits
//!
//! CPF and CNPJ share one check-digit rule and differ only in length and
//! weight vectors:
//!
//! ```text
//! sum       = Σ digit[i] × weight[i]
//! remainder = sum mod 11
//! digit     = 0            if remainder < 2
//!             11 − remainder otherwise
//! ```
//!
//! The second check digit is computed over the body *plus the observed first
//! check digit*, not the computed one. A wrong first digit therefore usually
//! produces a second-digit violation as well.
//!
//! Maximum weighted sum is 9 × 11 × 13 < 2^11, so `u32` arithmetic cannot
//! overflow.

use crate::cnpj::CNPJ_LENGTH;
use crate::cpf::CPF_LENGTH;
use crate::error::Violation;
use crate::normalize::{digit_values, DocumentKind};

/// CPF first check digit weights (positions 0..=8).
pub const CPF_FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
/// CPF second check digit weights (positions 0..=9).
pub const CPF_SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];
/// CNPJ first check digit weights (positions 0..=11).
pub const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
/// CNPJ second check digit weights (positions 0..=12).
pub const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Length and weights of one identifier family.
#[derive(Debug)]
pub(crate) struct Scheme {
    pub kind: DocumentKind,
    pub length: usize,
    pub first_weights: &'static [u32],
    pub second_weights: &'static [u32],
}

pub(crate) const CPF_SCHEME: Scheme = Scheme {
    kind: DocumentKind::Cpf,
    length: CPF_LENGTH,
    first_weights: &CPF_FIRST_WEIGHTS,
    second_weights: &CPF_SECOND_WEIGHTS,
};

pub(crate) const CNPJ_SCHEME: Scheme = Scheme {
    kind: DocumentKind::Cnpj,
    length: CNPJ_LENGTH,
    first_weights: &CNPJ_FIRST_WEIGHTS,
    second_weights: &CNPJ_SECOND_WEIGHTS,
};

/// Compute one check digit from `digits` zipped against `weights`.
pub(crate) fn check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        // remainder is in 2..=10, so the result is in 1..=9.
        (11 - remainder) as u8
    }
}

/// Compute both check digits for a body of any scheme.
fn check_digits_for(body: &[u8], scheme: &Scheme) -> [u8; 2] {
    let first = check_digit(body, scheme.first_weights);
    let mut extended = Vec::with_capacity(body.len() + 1);
    extended.extend_from_slice(body);
    extended.push(first);
    let second = check_digit(&extended, scheme.second_weights);
    [first, second]
}

/// Compute the two CPF check digits for a 9-digit body.
///
/// Each body element must be a digit value in `0..=9`.
pub fn cpf_check_digits(body: &[u8; 9]) -> [u8; 2] {
    check_digits_for(body, &CPF_SCHEME)
}

/// Compute the two CNPJ check digits for a 12-digit body
/// (8-digit root followed by the 4-digit branch number).
///
/// Each body element must be a digit value in `0..=9`.
pub fn cnpj_check_digits(body: &[u8; 12]) -> [u8; 2] {
    check_digits_for(body, &CNPJ_SCHEME)
}

/// Run every rule of `scheme` over normalized `digits`, collecting all
/// violations in check order.
///
/// A length mismatch is reported alone: positional rules are undefined for a
/// string of the wrong size.
pub(crate) fn check(digits: &str, scheme: &Scheme) -> Vec<Violation> {
    let kind = scheme.kind;
    if digits.len() != scheme.length {
        return vec![Violation::Length {
            kind,
            expected: scheme.length,
            actual: digits.len(),
        }];
    }

    let values = digit_values(digits);
    let mut violations = Vec::new();

    if values.windows(2).all(|pair| pair[0] == pair[1]) {
        violations.push(Violation::IdenticalDigits { kind });
    }

    let body = scheme.length - 2;

    let expected = check_digit(&values[..body], scheme.first_weights);
    let found = values[body];
    if expected != found {
        violations.push(Violation::FirstCheckDigit {
            kind,
            expected,
            found,
        });
    }

    let expected = check_digit(&values[..=body], scheme.second_weights);
    let found = values[body + 1];
    if expected != found {
        violations.push(Violation::SecondCheckDigit {
            kind,
            expected,
            found,
        });
    }

    violations
}
