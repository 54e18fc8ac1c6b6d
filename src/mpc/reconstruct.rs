//! Secret reconstruction from shares.
//!
//! This module implements Lagrange interpolation over Z/pZ to reconstruct
//! the original secret from at least a threshold number of shares.
//!
//! # Security
//! - **Exact**: Modular inverses only, no rounding.
//! - **Validation**: Rejects short input, duplicate identifiers, out-of-field
//!   coordinates and share sets that do not agree on one polynomial.

use crate::core::field::PrimeField;
use crate::mpc::{polynomial::interpolate_at, share::Share, Secret, SharingError};

/// Reconstructs the secret from a list of shares.
///
/// Uses Lagrange interpolation at x=0 over every supplied share. When more
/// than `threshold` shares are given, each share beyond the first
/// `threshold` must lie on the polynomial those determine; otherwise two
/// subsets would disagree and the call fails with `InconsistentShares`.
///
/// # Arguments
/// * `field` - The prime field the shares were generated in.
/// * `threshold` - The minimum number of shares (t).
/// * `shares` - A slice of shares in any order.
pub fn reconstruct_secret(
    field: &PrimeField,
    threshold: usize,
    shares: &[Share],
) -> Result<Secret, SharingError> {
    if shares.is_empty() || shares.len() < threshold {
        return Err(SharingError::InsufficientShares);
    }

    // 1. Validation
    for share in shares {
        if !field.contains(share.identifier()) || !field.contains(share.value()) {
            return Err(SharingError::InvalidShare);
        }
    }

    // Duplicate identifiers, O(N^2) since N is the share count.
    for (i, a) in shares.iter().enumerate() {
        if shares[i + 1..].iter().any(|b| b.identifier() == a.identifier()) {
            return Err(SharingError::DuplicateShare);
        }
    }

    // 2. Consistency: t points fix a polynomial of degree < t.
    if shares.len() > threshold {
        let (basis, extra) = shares.split_at(threshold);
        for share in extra {
            if interpolate_at(field, basis, share.identifier())? != share.value() {
                return Err(SharingError::InconsistentShares);
            }
        }
    }

    // 3. Interpolate at zero.
    interpolate_at(field, shares, 0).map_err(SharingError::from)
}
