//! Share generation for Shamir's Secret Sharing over Z/pZ.
//!
//! This module implements the threshold logic and polynomial generation
//! required to split a secret into shares.
//!
//! # Security
//! - **Exact**: Uses `PrimeField` arithmetic only.
//! - **Zeroization**: Polynomial coefficients are wiped before returning.
//! - **No Zero Abscissa**: x-coordinates are drawn from `[1, p)`; `f(0)` is the secret.

use alloc::vec::Vec;

use crate::core::field::PrimeField;
use crate::entropy::{distinct_nonzero, EntropySource};
use crate::mpc::{polynomial::Polynomial, share::Share, SharingError};

/// Splits `secret` into `n` shares, requiring `k` shares to reconstruct.
///
/// # Arguments
/// * `field` - The prime field all shares live in.
/// * `k` - The threshold number of shares required for reconstruction.
/// * `n` - The total number of shares to generate.
/// * `secret` - The secret, in `[0, p)`.
/// * `rng` - The caller's randomness source.
///
/// # Returns
/// * `Ok(Vec<Share>)` containing `n` shares with pairwise distinct non-zero identifiers.
/// * `Err(SharingError)` on invalid parameters or entropy failure.
pub fn split_secret<R: EntropySource + ?Sized>(
    field: &PrimeField,
    k: usize,
    n: usize,
    secret: u64,
    rng: &mut R,
) -> Result<Vec<Share>, SharingError> {
    if k < 2 || k > n {
        return Err(SharingError::InvalidConfig);
    }
    if !field.contains(secret) {
        return Err(SharingError::SecretOutOfRange);
    }
    // [1, p) holds p - 1 points.
    let p = field.modulus();
    if u64::try_from(n).map_or(true, |n| n >= p) {
        return Err(SharingError::InsufficientDomain);
    }

    let poly = Polynomial::random(field, secret, k - 1, rng)?;
    let xs = distinct_nonzero(rng, n, p)?;

    let mut shares = Vec::with_capacity(n);
    for x in xs {
        shares.push(Share::new(x, poly.evaluate(field, x))?);
    }
    Ok(shares)
}
