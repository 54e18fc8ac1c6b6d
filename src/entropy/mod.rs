//! Randomness sources for share generation.
//!
//! The scheme never owns a global generator. Every call that needs
//! randomness receives an [`EntropySource`] from the caller, so production
//! code can pass the OS CSPRNG and tests can pass a seeded generator.
//!
//! # Components
//! - `os`: the operating-system CSPRNG (`std` only).
//! - `rng`: adapter for any `rand_core` cryptographic generator.
//! - `custom`: buffered caller-supplied bytes.
//!
//! Thread safety is the source's concern: a source shared between threads
//! must be wrapped by the caller. The samplers below hold no state.

#[cfg(feature = "std")]
pub mod os;
pub mod rng;
pub mod custom;

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;
use zeroize::Zeroizing;

/// Error types for entropy collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// Failed to collect sufficient entropy bytes.
    CollectionFailed,
    /// Source is exhausted (e.g., fixed buffer).
    Exhausted,
}

impl fmt::Display for EntropyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntropyError::CollectionFailed => write!(f, "Entropy collection failed"),
            EntropyError::Exhausted => write!(f, "Entropy source exhausted"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EntropyError {}

/// A trait for entropy sources.
pub trait EntropySource {
    /// Returns a unique identifier for the source.
    fn name(&self) -> &'static str;

    /// Fills `dest` with random bytes from the source.
    ///
    /// # Returns
    /// * `Ok(())` on success.
    /// * `Err(EntropyError)` if the source fails.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill(dest)
    }
}

/// Consecutive rejected draws tolerated before a source is declared stuck.
///
/// Each draw is rejected with probability below 1/2, so a healthy source
/// reaches this limit with probability below 2^-64.
pub const MAX_REDRAWS: usize = 64;

/// Draws a uniformly distributed integer from `[0, bound)`.
///
/// Uses rejection sampling on 64-bit draws: values at or above the largest
/// multiple of `bound` are discarded, so there is no modulo bias.
///
/// A `bound` of 0 or 1 yields `Ok(0)` without consuming entropy.
///
/// # Failure Modes
/// - Errors from the source are propagated.
/// - `EntropyError::CollectionFailed` after [`MAX_REDRAWS`] rejected draws in a row.
pub fn uniform_below<R: EntropySource + ?Sized>(rng: &mut R, bound: u64) -> Result<u64, EntropyError> {
    if bound <= 1 {
        return Ok(0);
    }
    // Largest accepted draw; [0, zone] maps evenly onto [0, bound).
    let zone = u64::MAX - (u64::MAX % bound + 1) % bound;
    let mut buf = Zeroizing::new([0u8; 8]);
    for _ in 0..MAX_REDRAWS {
        rng.fill(&mut buf[..])?;
        let v = u64::from_le_bytes(*buf);
        if v <= zone {
            return Ok(v % bound);
        }
    }
    Err(EntropyError::CollectionFailed)
}

/// Draws `count` pairwise distinct values from `[1, p)`.
///
/// When `count` is at most half of the domain, values are drawn and a repeat
/// is redrawn; taken values are tracked in a `BTreeSet` and the output keeps
/// draw order. Denser requests draw the complement instead and shuffle the
/// remaining points, so the cost stays `O(count log count)` either way.
///
/// # Failure Modes
/// - `EntropyError::CollectionFailed` if `count` exceeds `p - 1`, or if
///   [`MAX_REDRAWS`] repeats occur in a row (a stuck source).
/// - Errors from the source are propagated.
pub fn distinct_nonzero<R: EntropySource + ?Sized>(
    rng: &mut R,
    count: usize,
    p: u64,
) -> Result<Vec<u64>, EntropyError> {
    let domain = p.saturating_sub(1);
    let wanted = u64::try_from(count).map_err(|_| EntropyError::CollectionFailed)?;
    if wanted > domain {
        return Err(EntropyError::CollectionFailed);
    }
    if wanted <= domain / 2 {
        return sparse_nonzero(rng, count, domain);
    }

    // `domain < 2 * count` here, so listing the domain fits alongside the output.
    let excluded: BTreeSet<u64> = sparse_nonzero(rng, (domain - wanted) as usize, domain)?
        .into_iter()
        .collect();
    let mut out: Vec<u64> = (1..p).filter(|x| !excluded.contains(x)).collect();
    for i in 0..out.len().saturating_sub(1) {
        let j = i + uniform_below(rng, (out.len() - i) as u64)? as usize;
        out.swap(i, j);
    }
    Ok(out)
}

/// `count` distinct draws from `[1, domain]`, assuming `count <= domain / 2`.
fn sparse_nonzero<R: EntropySource + ?Sized>(
    rng: &mut R,
    count: usize,
    domain: u64,
) -> Result<Vec<u64>, EntropyError> {
    let mut out: Vec<u64> = Vec::with_capacity(count);
    let mut taken = BTreeSet::new();
    let mut repeats = 0;
    while out.len() < count {
        let x = uniform_below(rng, domain)? + 1;
        if taken.insert(x) {
            out.push(x);
            repeats = 0;
        } else {
            repeats += 1;
            if repeats >= MAX_REDRAWS {
                return Err(EntropyError::CollectionFailed);
            }
        }
    }
    Ok(out)
}
