//! Operating-System Entropy Source.
//!
//! Wraps `rand_core::OsRng` (getrandom). This is the source callers should
//! pass in production.

use rand_core::{OsRng, RngCore};
use super::{EntropyError, EntropySource};

/// The platform CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsSource;

impl OsSource {
    pub fn new() -> Self {
        Self
    }
}

impl EntropySource for OsSource {
    fn name(&self) -> &'static str {
        "OsRng"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|_| EntropyError::CollectionFailed)
    }
}
