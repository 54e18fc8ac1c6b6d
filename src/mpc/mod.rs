//! Threshold Secret Sharing.
//!
//! This module implements Shamir's (t, n) scheme over a prime field Z/pZ.
//!
//! # Components
//! - `share`: A single point `(x, y)` and the `ShareSet` returned by `split`.
//! - `polynomial`: Transient coefficient vectors and Lagrange interpolation.
//! - `quorum`: Polynomial generation and share evaluation.
//! - `reconstruct`: Lagrange interpolation at zero with consistency checks.
//! - `observer`: Optional callbacks for callers that want operation events.
//!
//! # Security
//! - **Exact Arithmetic**: All interpolation is modular; nothing is rounded.
//! - **Zeroization**: Share values and polynomial coefficients are wiped on drop.
//! - **No Side Effects**: Nothing here logs or retains state between calls.

pub mod observer;
pub mod share;
pub mod quorum;
pub mod reconstruct;
pub(crate) mod polynomial;

use alloc::boxed::Box;
use core::fmt;

use crate::config::SchemeConfig;
use crate::core::field::{FieldError, PrimeField};
use crate::entropy::{EntropyError, EntropySource};
use observer::{Operation, SchemeObserver};
use share::{Share, ShareSet};

/// A secret is an integer in `[0, p)`.
pub type Secret = u64;

/// Errors for secret sharing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharingError {
    /// Threshold, share count or prime rejected (t < 2, t > n, p not prime, n >= p).
    InvalidConfig,
    /// Secret is not below the field prime.
    SecretOutOfRange,
    /// The field has fewer than n distinct non-zero points.
    InsufficientDomain,
    /// Zero denominator during inversion.
    DivisionByZero,
    /// Two shares carry the same x-coordinate.
    DuplicateShare,
    /// Fewer than t shares supplied.
    InsufficientShares,
    /// Supplied shares do not lie on one polynomial of degree < t.
    InconsistentShares,
    /// Share set was generated under a different prime or threshold.
    ConfigMismatch,
    /// Share coordinate is zero or outside the field.
    InvalidShare,
    /// Share text encoding could not be parsed.
    MalformedShare,
    /// Randomness source failed.
    Entropy(EntropyError),
}

impl fmt::Display for SharingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SharingError::InvalidConfig => write!(f, "Invalid scheme configuration"),
            SharingError::SecretOutOfRange => write!(f, "Secret is not below the field prime"),
            SharingError::InsufficientDomain => write!(f, "Field too small for the requested share count"),
            SharingError::DivisionByZero => write!(f, "Division by zero during interpolation"),
            SharingError::DuplicateShare => write!(f, "Duplicate share identifier"),
            SharingError::InsufficientShares => write!(f, "Not enough shares to reconstruct"),
            SharingError::InconsistentShares => write!(f, "Shares are inconsistent"),
            SharingError::ConfigMismatch => write!(f, "Shares were generated under a different configuration"),
            SharingError::InvalidShare => write!(f, "Share coordinate out of range"),
            SharingError::MalformedShare => write!(f, "Malformed share encoding"),
            SharingError::Entropy(e) => write!(f, "Entropy failure: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SharingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SharingError::Entropy(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EntropyError> for SharingError {
    fn from(e: EntropyError) -> Self {
        SharingError::Entropy(e)
    }
}

impl From<FieldError> for SharingError {
    fn from(e: FieldError) -> Self {
        match e {
            FieldError::NotPrime => SharingError::InvalidConfig,
            FieldError::DivisionByZero => SharingError::DivisionByZero,
        }
    }
}

/// A validated (t, n, p) Shamir scheme.
///
/// Holds configuration only. `split` and `combine` keep no state between
/// calls, so one scheme may be shared across threads when its observer is.
pub struct ShamirScheme {
    config: SchemeConfig,
    field: PrimeField,
    observer: Option<Box<dyn SchemeObserver + Send + Sync>>,
}

impl fmt::Debug for ShamirScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShamirScheme")
            .field("config", &self.config)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl ShamirScheme {
    /// Validates `config` and builds the scheme.
    ///
    /// # Returns
    /// * `Err(SharingError::InvalidConfig)` unless `2 <= t <= n`, `p` is prime and `n < p`.
    pub fn new(config: SchemeConfig) -> Result<Self, SharingError> {
        let field = config.validate()?;
        Ok(Self {
            config,
            field,
            observer: None,
        })
    }

    /// Installs an observer notified after each operation.
    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: SchemeObserver + Send + Sync + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// The validated configuration this scheme was built from.
    pub fn config(&self) -> &SchemeConfig {
        &self.config
    }

    /// The field Z/pZ all shares live in.
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Minimum number of shares `combine` accepts (t).
    pub fn threshold(&self) -> usize {
        self.config.threshold
    }

    /// Number of shares each `split` produces (n).
    pub fn share_count(&self) -> usize {
        self.config.share_count
    }

    /// Splits `secret` into `n` shares, any `t` of which reconstruct it.
    pub fn split<R: EntropySource + ?Sized>(
        &self,
        secret: Secret,
        rng: &mut R,
    ) -> Result<ShareSet, SharingError> {
        let result = quorum::split_secret(
            &self.field,
            self.config.threshold,
            self.config.share_count,
            secret,
            rng,
        )
        .map(|shares| ShareSet::new(self.config.threshold, self.field.modulus(), shares));

        match (&result, &self.observer) {
            (Ok(set), Some(obs)) => obs.on_split(set.len(), self.config.threshold),
            (Err(e), Some(obs)) => obs.on_failure(Operation::Split, e),
            _ => {}
        }
        result
    }

    /// Reconstructs the secret from at least `t` shares.
    pub fn combine(&self, shares: &[Share]) -> Result<Secret, SharingError> {
        let result = reconstruct::reconstruct_secret(&self.field, self.config.threshold, shares);

        match (&result, &self.observer) {
            (Ok(_), Some(obs)) => obs.on_combine(shares.len()),
            (Err(e), Some(obs)) => obs.on_failure(Operation::Combine, e),
            _ => {}
        }
        result
    }

    /// Reconstructs from a `ShareSet`, rejecting sets stamped with another configuration.
    pub fn combine_set(&self, set: &ShareSet) -> Result<Secret, SharingError> {
        if set.prime() != self.field.modulus() || set.threshold() != self.config.threshold {
            let e = SharingError::ConfigMismatch;
            if let Some(obs) = &self.observer {
                obs.on_failure(Operation::Combine, &e);
            }
            return Err(e);
        }
        self.combine(set.shares())
    }
}
