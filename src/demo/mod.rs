//! Password sharing demo.
//!
//! Glue around the scheme: generate a numeric password, split it, pick a
//! random threshold-sized subset of the shares and reconstruct from it.
//! Unlike the core, this layer logs every phase, including the password
//! and share encodings, because showing them is its purpose.

pub mod password;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use zeroize::Zeroizing;

use crate::config::DemoConfig;
use crate::entropy::{uniform_below, EntropyError, EntropySource};
use crate::mpc::{observer::LogObserver, share::Share, Secret, ShamirScheme, SharingError};
pub use password::PasswordGenerator;

/// Errors for the demo flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoError {
    /// Password length of zero.
    InvalidPasswordLength,
    /// Password does not fit below the field prime.
    SecretTooLarge,
    /// Reconstruction returned a different value.
    Mismatch,
    Sharing(SharingError),
    Entropy(EntropyError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoError::InvalidPasswordLength => write!(f, "Password length must be at least 1"),
            DemoError::SecretTooLarge => write!(f, "Password does not fit in the field"),
            DemoError::Mismatch => write!(f, "Reconstructed secret differs from the original"),
            DemoError::Sharing(e) => write!(f, "{}", e),
            DemoError::Entropy(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DemoError::Sharing(e) => Some(e),
            DemoError::Entropy(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SharingError> for DemoError {
    fn from(e: SharingError) -> Self {
        DemoError::Sharing(e)
    }
}

impl From<EntropyError> for DemoError {
    fn from(e: EntropyError) -> Self {
        DemoError::Entropy(e)
    }
}

/// Outcome of one demo run.
#[derive(Debug)]
pub struct DemoReport {
    pub password: Zeroizing<String>,
    pub secret: Secret,
    pub threshold: usize,
    /// Every share, encoded.
    pub shares: Vec<String>,
    /// The subset used for reconstruction, encoded.
    pub selected: Vec<String>,
    pub reconstructed: Secret,
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated password: {}", self.password.as_str())?;
        writeln!(f, "Secret (as integer): {}", self.secret)?;
        writeln!(f, "Shares ({} required):", self.threshold)?;
        for s in &self.shares {
            writeln!(f, "  {}", s)?;
        }
        writeln!(f, "Selected for reconstruction:")?;
        for s in &self.selected {
            writeln!(f, "  {}", s)?;
        }
        write!(f, "Reconstructed secret: {}", self.reconstructed)
    }
}

/// Picks `k` distinct indices from `[0, n)` (partial Fisher-Yates).
fn sample_indices<R: EntropySource + ?Sized>(
    rng: &mut R,
    n: usize,
    k: usize,
) -> Result<Vec<usize>, EntropyError> {
    let mut idx: Vec<usize> = (0..n).collect();
    for i in 0..k.min(n) {
        let j = i + uniform_below(rng, (n - i) as u64)? as usize;
        idx.swap(i, j);
    }
    idx.truncate(k.min(n));
    Ok(idx)
}

/// Runs password generation, split, subset selection and combine.
pub fn run_demo<R: EntropySource + ?Sized>(
    config: &DemoConfig,
    rng: &mut R,
) -> Result<DemoReport, DemoError> {
    if config.password_length == 0 {
        return Err(DemoError::InvalidPasswordLength);
    }
    let scheme = ShamirScheme::new(config.scheme)?.with_observer(LogObserver);

    let password = PasswordGenerator::generate(config.password_length, rng)?;
    log::info!("Generated password: {}", password.as_str());

    let secret = password::parse_digits(&password)
        .filter(|&s| scheme.field().contains(s))
        .ok_or(DemoError::SecretTooLarge)?;
    log::info!("Original secret (as integer): {}", secret);

    // Phase I: generate shares
    let set = scheme.split(secret, rng)?;
    let shares: Vec<String> = set.iter().map(Share::encode).collect();
    log::debug!("Shares: {}", shares.join(", "));

    // Phase II: reconstruct from a random threshold-sized subset
    let indices = sample_indices(rng, scheme.share_count(), scheme.threshold())?;
    let subset = set.subset(&indices)?;
    let selected: Vec<String> = subset.iter().map(Share::encode).collect();
    log::debug!("Selected shares for reconstruction: {}", selected.join(", "));

    let reconstructed = scheme.combine_set(&subset)?;
    log::info!("Reconstructed secret: {}", reconstructed);
    if reconstructed != secret {
        log::error!("Reconstructed secret differs from the original");
        return Err(DemoError::Mismatch);
    }

    Ok(DemoReport {
        password,
        secret,
        threshold: scheme.threshold(),
        shares,
        selected,
        reconstructed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchemeConfig;
    use crate::entropy::custom::CustomSource;
    use crate::entropy::rng::RngSource;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    #[test]
    fn test_run_demo_default() {
        let mut rng = RngSource::new(ChaCha20Rng::seed_from_u64(2024));
        let report = run_demo(&DemoConfig::default(), &mut rng).unwrap();

        assert_eq!(report.password.len(), 10);
        assert!(report.password.bytes().all(|b| b.is_ascii_digit()));
        assert_eq!(report.shares.len(), 5);
        assert_eq!(report.selected.len(), 3);
        assert_eq!(report.reconstructed, report.secret);
        for s in &report.selected {
            assert!(report.shares.contains(s));
        }
        let text = alloc::format!("{}", report);
        assert!(text.contains("Reconstructed secret: "));
    }

    #[test]
    fn test_run_demo_secret_too_large() {
        let cfg = DemoConfig {
            password_length: 3,
            scheme: SchemeConfig::new(2, 3, 101),
        };
        let mut rng = CustomSource::new();
        for _ in 0..3 {
            rng.add_bytes(&9u64.to_le_bytes());
        }
        // "999" is not below 101.
        assert_eq!(run_demo(&cfg, &mut rng).unwrap_err(), DemoError::SecretTooLarge);
    }

    #[test]
    fn test_run_demo_rejects_bad_config() {
        let mut rng = RngSource::new(ChaCha20Rng::seed_from_u64(1));
        let cfg = DemoConfig {
            password_length: 4,
            scheme: SchemeConfig::new(5, 3, 10_007),
        };
        assert_eq!(
            run_demo(&cfg, &mut rng).unwrap_err(),
            DemoError::Sharing(SharingError::InvalidConfig)
        );
        let cfg = DemoConfig {
            password_length: 0,
            ..DemoConfig::default()
        };
        assert_eq!(run_demo(&cfg, &mut rng).unwrap_err(), DemoError::InvalidPasswordLength);
    }

    #[test]
    fn test_sample_indices_distinct() {
        let mut rng = RngSource::new(ChaCha20Rng::seed_from_u64(8));
        for _ in 0..50 {
            let mut idx = sample_indices(&mut rng, 5, 3).unwrap();
            assert_eq!(idx.len(), 3);
            idx.sort_unstable();
            idx.dedup();
            assert_eq!(idx.len(), 3);
            assert!(idx.iter().all(|&i| i < 5));
        }
    }
}
