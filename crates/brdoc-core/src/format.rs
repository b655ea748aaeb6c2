//! # Display Formatting
//!
//! Canonical punctuated forms:
//!
//! | Kind | Mask                 |
//! |------|----------------------|
//! | CPF  | `DDD.DDD.DDD-DD`     |
//! | CNPJ | `DD.DDD.DDD/DDDD-DD` |
//!
//! [`crate::format_cpf`] and [`crate::format_cnpj`] only punctuate a string
//! of exactly the right length. [`format_document`] is looser: it is meant
//! for echoing partially typed input, so it picks the CPF mask for up to 11
//! digits and the CNPJ mask beyond that, filling the mask progressively.
//! Its output is therefore not a validity signal: `format_document("1234")`
//! is `"123.4"`, which [`crate::validate`] rejects as an unknown length.

use crate::cpf::CPF_LENGTH;
use crate::normalize::clean_document;

/// Group sizes and separators of the CPF mask.
pub(crate) const CPF_MASK: Mask = Mask {
    groups: &[3, 3, 3, 2],
    separators: &['.', '.', '-'],
};

/// Group sizes and separators of the CNPJ mask.
pub(crate) const CNPJ_MASK: Mask = Mask {
    groups: &[2, 3, 3, 4, 2],
    separators: &['.', '.', '/', '-'],
};

/// A display mask: consecutive digit groups joined by separators.
#[derive(Debug)]
pub(crate) struct Mask {
    groups: &'static [usize],
    separators: &'static [char],
}

impl Mask {
    /// Lay `digits` into the mask from the left.
    ///
    /// A separator is emitted only once the group after it has at least one
    /// digit. Digits past the mask's capacity stay in the final group, so no
    /// digit is ever dropped. `digits` must be ASCII.
    pub(crate) fn apply(&self, digits: &str) -> String {
        let mut out = String::with_capacity(digits.len() + self.separators.len());
        let mut rest = digits;
        let last = self.groups.len() - 1;

        for (i, &size) in self.groups.iter().enumerate() {
            if rest.is_empty() {
                break;
            }
            if i > 0 {
                out.push(self.separators[i - 1]);
            }
            let take = if i == last {
                rest.len()
            } else {
                size.min(rest.len())
            };
            out.push_str(&rest[..take]);
            rest = &rest[take..];
        }

        out
    }
}

/// Whether `s` is exactly `len` ASCII digits.
pub(crate) fn is_digits_of_len(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// Normalize `raw` and punctuate it for display.
///
/// Up to 11 digits get the CPF mask, anything longer the CNPJ mask. Partial
/// input is masked as far as it goes; empty input stays empty.
pub fn format_document(raw: &str) -> String {
    let digits = clean_document(raw);
    if digits.len() <= CPF_LENGTH {
        CPF_MASK.apply(&digits)
    } else {
        CNPJ_MASK.apply(&digits)
    }
}
