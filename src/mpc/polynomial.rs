//! Polynomial operations for secret sharing.
//!
//! Shared by `quorum` (evaluation) and `reconstruct` (interpolation).

use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::field::{FieldError, PrimeField};
use crate::entropy::{uniform_below, EntropyError, EntropySource};
use super::share::Share;

/// Coefficients `[a0, a1, ..., a_{t-1}]` of `f(x) = a0 + a1*x + ...`.
///
/// Wiped on drop; never leaves this crate.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct Polynomial {
    coeffs: Vec<u64>,
}

impl Polynomial {
    /// `a0 = intercept`, `a1..a_{degree}` uniform in `[0, p)`.
    pub(crate) fn random<R: EntropySource + ?Sized>(
        field: &PrimeField,
        intercept: u64,
        degree: usize,
        rng: &mut R,
    ) -> Result<Self, EntropyError> {
        let mut coeffs = Vec::with_capacity(degree + 1);
        coeffs.push(intercept);
        for _ in 0..degree {
            coeffs.push(uniform_below(rng, field.modulus())?);
        }
        Ok(Self { coeffs })
    }

    #[cfg(test)]
    pub(crate) fn from_coefficients(coeffs: Vec<u64>) -> Self {
        Self { coeffs }
    }

    /// Evaluates at `x` using Horner's method.
    ///
    /// result = c[k-1]; result = result * x + c[i] for i = k-2 down to 0.
    pub(crate) fn evaluate(&self, field: &PrimeField, x: u64) -> u64 {
        self.coeffs
            .iter()
            .rev()
            .fold(0, |acc, &c| field.add(field.mul(acc, x), c))
    }
}

/// Lagrange interpolation of the polynomial through `points`, evaluated at `x`.
///
/// f(x) = sum_j y_j * prod_{m != j} (x - x_m) / (x_j - x_m)
///
/// At `x = 0` this is `prod_{m != j} x_m / (x_m - x_j)`. One inversion per
/// basis term. Repeated identifiers give a zero denominator and fail with
/// `DivisionByZero`.
pub(crate) fn interpolate_at(field: &PrimeField, points: &[Share], x: u64) -> Result<u64, FieldError> {
    let mut sum = 0u64;
    for (j, pj) in points.iter().enumerate() {
        let xj = pj.identifier();
        let mut numerator = 1u64;
        let mut denominator = 1u64;

        for (m, pm) in points.iter().enumerate() {
            if j == m {
                continue;
            }
            let xm = pm.identifier();
            numerator = field.mul(numerator, field.sub(x, xm));
            denominator = field.mul(denominator, field.sub(xj, xm));
        }

        let basis = field.div(numerator, denominator)?;
        sum = field.add(sum, field.mul(pj.value(), basis));
    }
    Ok(sum)
}
