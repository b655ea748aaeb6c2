//! # Fixture Generation
//!
//! Produces identifiers that are valid by construction: random body digits
//! with the two check digits computed by the same routine the checkers use.
//! Meant for test fixtures and seeding development data, never for end-user
//! input flows.
//!
//! Every generator has a `_with` form taking an explicit [`Rng`] so that
//! tests can seed it:
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let cpf = brdoc_core::generate_valid_cpf_with(&mut rng);
//! assert!(brdoc_core::is_valid_document(&cpf));
//! ```

use rand::Rng;

use crate::checksum::{cnpj_check_digits, cpf_check_digits};

/// Branch number of a company's head office.
pub const CNPJ_HEAD_OFFICE_BRANCH: &str = "0001";

const CNPJ_HEAD_OFFICE_DIGITS: [u8; 4] = [0, 0, 0, 1];

fn random_digits<R: Rng + ?Sized, const N: usize>(rng: &mut R) -> [u8; N] {
    let mut digits = [0u8; N];
    for d in digits.iter_mut() {
        *d = rng.gen_range(0..10);
    }
    digits
}

fn render(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

/// Generate an 11-digit CPF from `rng`.
///
/// Bodies of nine identical digits are redrawn: their check digits repeat
/// the same digit and the result would fail the identical-digit rule.
pub fn generate_valid_cpf_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let body: [u8; 9] = loop {
        let candidate: [u8; 9] = random_digits(rng);
        if candidate.windows(2).any(|pair| pair[0] != pair[1]) {
            break candidate;
        }
    };
    let check = cpf_check_digits(&body);

    let mut digits = body.to_vec();
    digits.extend_from_slice(&check);
    let cpf = render(&digits);
    tracing::trace!("generated CPF fixture");
    cpf
}

/// Generate a 14-digit head-office CNPJ from `rng`: 8 random root digits,
/// branch `0001`, then the check digits.
pub fn generate_valid_cnpj_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let root: [u8; 8] = random_digits(rng);
    let mut body = [0u8; 12];
    body[..8].copy_from_slice(&root);
    body[8..].copy_from_slice(&CNPJ_HEAD_OFFICE_DIGITS);
    let check = cnpj_check_digits(&body);

    let mut digits = body.to_vec();
    digits.extend_from_slice(&check);
    let cnpj = render(&digits);
    tracing::trace!("generated CNPJ fixture");
    cnpj
}

/// Generate a CPF using the thread-local RNG.
pub fn generate_valid_cpf() -> String {
    generate_valid_cpf_with(&mut rand::thread_rng())
}

/// Generate a CNPJ using the thread-local RNG.
pub fn generate_valid_cnpj() -> String {
    generate_valid_cnpj_with(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::{validate_cnpj, validate_cpf, DocumentKind};

    #[test]
    fn cpf_shape() {
        let cpf = generate_valid_cpf();
        assert_eq!(cpf.len(), 11);
        assert!(cpf.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn cnpj_shape_and_branch() {
        let cnpj = generate_valid_cnpj();
        assert_eq!(cnpj.len(), 14);
        assert_eq!(&cnpj[8..12], CNPJ_HEAD_OFFICE_BRANCH);
    }

    #[test]
    fn generated_values_validate() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let cpf = generate_valid_cpf_with(&mut rng);
            let r = validate_cpf(&cpf);
            assert!(r.is_valid, "{cpf}: {:?}", r.errors);

            let cnpj = generate_valid_cnpj_with(&mut rng);
            let r = validate_cnpj(&cnpj);
            assert!(r.is_valid, "{cnpj}: {:?}", r.errors);
            assert_eq!(r.kind, DocumentKind::Cnpj);
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let mut a = StdRng::seed_from_u64(2024);
        let mut b = StdRng::seed_from_u64(2024);
        for _ in 0..10 {
            assert_eq!(generate_valid_cpf_with(&mut a), generate_valid_cpf_with(&mut b));
            assert_eq!(
                generate_valid_cnpj_with(&mut a),
                generate_valid_cnpj_with(&mut b)
            );
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(2);
        let xs: Vec<_> = (0..5).map(|_| generate_valid_cpf_with(&mut a)).collect();
        let ys: Vec<_> = (0..5).map(|_| generate_valid_cpf_with(&mut b)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn render_digits() {
        assert_eq!(render(&[0, 1, 9]), "019");
    }
}
