//! Adapter from `rand_core` generators to [`EntropySource`].
//!
//! Only `CryptoRng` generators are accepted, so a non-cryptographic PRNG
//! cannot be passed by accident. Seeded CSPRNGs such as ChaCha20 give
//! reproducible shares in tests.

use rand_core::{CryptoRng, RngCore};
use super::{EntropyError, EntropySource};

/// Wraps any `RngCore + CryptoRng`.
pub struct RngSource<R> {
    inner: R,
}

impl<R: RngCore + CryptoRng> RngSource<R> {
    /// Wraps `inner`.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns the wrapped generator, advanced past everything drawn so far.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: RngCore + CryptoRng> EntropySource for RngSource<R> {
    fn name(&self) -> &'static str {
        "RandCore"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.inner
            .try_fill_bytes(dest)
            .map_err(|_| EntropyError::CollectionFailed)
    }
}
