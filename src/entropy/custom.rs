//! Caller-Provided Entropy Source.
//!
//! Replays bytes injected by the caller, in order. Intended for
//! deterministic tests and for callers that already hold vetted randomness.

use alloc::collections::VecDeque;
use zeroize::Zeroize;
use super::{EntropyError, EntropySource};

/// Source that buffers caller-injected bytes.
pub struct CustomSource {
    buffer: VecDeque<u8>,
}

impl CustomSource {
    /// Creates a new empty CustomSource.
    pub fn new() -> Self {
        Self { buffer: VecDeque::new() }
    }

    /// Appends bytes to the pool.
    pub fn add_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend(bytes.iter().copied());
    }

    /// Bytes still available.
    pub fn remaining(&self) -> usize {
        self.buffer.len()
    }
}

impl Default for CustomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CustomSource {
    fn drop(&mut self) {
        let (a, b) = self.buffer.as_mut_slices();
        a.zeroize();
        b.zeroize();
    }
}

impl EntropySource for CustomSource {
    fn name(&self) -> &'static str {
        "CustomInput"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if self.buffer.len() < dest.len() {
            return Err(EntropyError::Exhausted);
        }
        let n = dest.len();
        for (d, s) in dest.iter_mut().zip(self.buffer.drain(..n)) {
            *d = s;
        }
        Ok(())
    }
}
