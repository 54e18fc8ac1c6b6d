//! Configuration for the sharing scheme and the demo layer.
//!
//! Plain structs populated by the host application and passed to the
//! respective modules. Validation happens when a scheme is built.

use crate::core::field::PrimeField;
use crate::mpc::SharingError;

/// 2^61 - 1, a Mersenne prime. Large enough for 18-digit secrets.
pub const DEFAULT_PRIME: u64 = 2_305_843_009_213_693_951;

/// Parameters of a (t, n) scheme over Z/pZ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchemeConfig {
    /// Minimum number of shares needed to reconstruct (t).
    pub threshold: usize,

    /// Total number of shares produced (n).
    pub share_count: usize,

    /// Field prime (p). Supplied by the caller, never generated.
    pub prime: u64,
}

impl SchemeConfig {
    pub fn new(threshold: usize, share_count: usize, prime: u64) -> Self {
        Self {
            threshold,
            share_count,
            prime,
        }
    }

    /// Checks `2 <= t <= n`, `p` prime and `n < p`.
    ///
    /// # Returns
    /// * `Ok(PrimeField)` for the validated prime.
    /// * `Err(SharingError::InvalidConfig)` otherwise.
    pub fn validate(&self) -> Result<PrimeField, SharingError> {
        if self.threshold < 2 || self.threshold > self.share_count {
            return Err(SharingError::InvalidConfig);
        }
        let field = PrimeField::new(self.prime).map_err(|_| SharingError::InvalidConfig)?;
        // n distinct points must fit in [1, p).
        if u64::try_from(self.share_count).map_or(true, |n| n >= self.prime) {
            return Err(SharingError::InvalidConfig);
        }
        Ok(field)
    }
}

impl Default for SchemeConfig {
    fn default() -> Self {
        Self {
            threshold: 3,
            share_count: 5,
            prime: DEFAULT_PRIME,
        }
    }
}

/// Configuration of the password demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemoConfig {
    /// Number of decimal digits in the generated password.
    pub password_length: usize,

    /// Scheme used to split the password.
    pub scheme: SchemeConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            password_length: 10,
            scheme: SchemeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let field = SchemeConfig::default().validate().unwrap();
        assert_eq!(field.modulus(), DEFAULT_PRIME);
    }

    #[test]
    fn test_rejections() {
        let bad = [
            SchemeConfig::new(4, 3, 10_007),  // t > n
            SchemeConfig::new(1, 3, 10_007),  // t < 2
            SchemeConfig::new(0, 0, 10_007),
            SchemeConfig::new(2, 3, 100_000), // not prime
            SchemeConfig::new(2, 3, 1),
            SchemeConfig::new(2, 7, 7),       // n >= p
        ];
        for cfg in bad {
            assert_eq!(cfg.validate(), Err(SharingError::InvalidConfig), "{:?}", cfg);
        }
        assert!(SchemeConfig::new(2, 6, 7).validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_demo_config_serde() {
        let cfg = DemoConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: DemoConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
