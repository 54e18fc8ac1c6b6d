//! Prime field arithmetic module.
//!
//! This module implements exact arithmetic over Z/pZ for a prime `p < 2^64`.
//! Elements are plain `u64` values in `[0, p)`; every product is formed in
//! `u128` before reduction, so no operation can overflow or lose precision.
//!
//! # Design Choices
//! - **Runtime Modulus**: The prime is supplied by the caller and validated once in
//!   [`PrimeField::new`]. All later operations trust it.
//! - **Fermat Inversion**: `a^{-1} = a^{p-2} mod p`, computed by square-and-multiply.
//! - **No Floating Point**: Every value is an integer residue; nothing is rounded.
//!
//! # Usage
//! ```
//! use prime_shamir::core::field::PrimeField;
//!
//! let f = PrimeField::new(10_007).unwrap();
//! let q = f.div(1234, 17).unwrap();
//! assert_eq!(f.mul(q, 17), 1234);
//! ```

use core::fmt;

use super::primality::is_prime;

/// Errors raised by field construction and division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// The supplied modulus is not prime.
    NotPrime,
    /// Inversion of an element congruent to zero.
    DivisionByZero,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::NotPrime => write!(f, "Modulus is not prime"),
            FieldError::DivisionByZero => write!(f, "Division by zero in prime field"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FieldError {}

/// The finite field Z/pZ.
///
/// Cheap to copy; holds only the modulus.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrimeField {
    p: u64,
}

impl PrimeField {
    /// Creates the field for modulus `p`.
    ///
    /// # Returns
    /// * `Ok(PrimeField)` if `p` is prime.
    /// * `Err(FieldError::NotPrime)` otherwise (including 0 and 1).
    pub fn new(p: u64) -> Result<Self, FieldError> {
        if !is_prime(p) {
            return Err(FieldError::NotPrime);
        }
        Ok(Self { p })
    }

    /// The prime modulus.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.p
    }

    /// Returns true if `a` is a canonical element (`a < p`).
    #[inline]
    pub fn contains(&self, a: u64) -> bool {
        a < self.p
    }

    /// Reduces an arbitrary `u64` into `[0, p)`.
    #[inline]
    pub fn reduce(&self, a: u64) -> u64 {
        a % self.p
    }

    /// `(a + b) mod p`.
    #[inline]
    pub fn add(&self, a: u64, b: u64) -> u64 {
        ((a as u128 + b as u128) % self.p as u128) as u64
    }

    /// `(a - b) mod p`.
    #[inline]
    pub fn sub(&self, a: u64, b: u64) -> u64 {
        let p = self.p as u128;
        ((a as u128 % p + p - b as u128 % p) % p) as u64
    }

    /// `(a * b) mod p`.
    #[inline]
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        ((a as u128 * b as u128) % self.p as u128) as u64
    }

    /// `a^e mod p` by square-and-multiply.
    pub fn pow(&self, a: u64, mut e: u64) -> u64 {
        let mut base = self.reduce(a);
        let mut acc = 1 % self.p;
        while e > 0 {
            if e & 1 == 1 {
                acc = self.mul(acc, base);
            }
            base = self.mul(base, base);
            e >>= 1;
        }
        acc
    }

    /// Multiplicative inverse via Fermat's little theorem.
    ///
    /// # Failure Modes
    /// - `FieldError::DivisionByZero` when `a ≡ 0 (mod p)`.
    pub fn inverse(&self, a: u64) -> Result<u64, FieldError> {
        let a = self.reduce(a);
        if a == 0 {
            return Err(FieldError::DivisionByZero);
        }
        Ok(self.pow(a, self.p - 2))
    }

    /// `a * b^{-1} mod p`. Fails exactly when `inverse(b)` fails.
    pub fn div(&self, a: u64, b: u64) -> Result<u64, FieldError> {
        Ok(self.mul(a, self.inverse(b)?))
    }
}
