//! Random numeric passwords.

use alloc::string::String;
use zeroize::Zeroizing;

use crate::entropy::{uniform_below, EntropyError, EntropySource};

/// Generates decimal-digit passwords.
pub struct PasswordGenerator;

impl PasswordGenerator {
    /// Draws `length` uniformly distributed digits.
    pub fn generate<R: EntropySource + ?Sized>(
        length: usize,
        rng: &mut R,
    ) -> Result<Zeroizing<String>, EntropyError> {
        let mut password = Zeroizing::new(String::with_capacity(length));
        for _ in 0..length {
            let d = uniform_below(rng, 10)? as u8;
            password.push(char::from(b'0' + d));
        }
        Ok(password)
    }
}

/// Parses a digit string as an integer, or `None` on a non-digit or overflow.
pub(crate) fn parse_digits(digits: &str) -> Option<u64> {
    digits.bytes().try_fold(0u64, |acc, b| {
        if !b.is_ascii_digit() {
            return None;
        }
        acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
    })
}
