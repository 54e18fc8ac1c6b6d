//! Operation observers.
//!
//! The scheme itself never logs. Callers that want visibility install a
//! [`SchemeObserver`]; it receives counts and error kinds only, never
//! secrets, coefficients or share values.

use super::SharingError;

/// Which scheme operation an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Split,
    Combine,
}

/// Callbacks invoked after each scheme operation. All methods default to no-ops.
pub trait SchemeObserver {
    /// `share_count` shares were produced with threshold `threshold`.
    fn on_split(&self, _share_count: usize, _threshold: usize) {}

    /// A secret was reconstructed from `share_count` shares.
    fn on_combine(&self, _share_count: usize) {}

    /// An operation failed.
    fn on_failure(&self, _op: Operation, _error: &SharingError) {}
}

/// Forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl SchemeObserver for LogObserver {
    fn on_split(&self, share_count: usize, threshold: usize) {
        log::info!("{} shares successfully generated (threshold {}).", share_count, threshold);
    }

    fn on_combine(&self, share_count: usize) {
        log::info!("Secret successfully reconstructed from {} shares.", share_count);
    }

    fn on_failure(&self, op: Operation, error: &SharingError) {
        log::warn!("{:?} failed: {}", op, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;
    impl SchemeObserver for Silent {}

    #[test]
    fn test_default_methods_are_noops() {
        let s = Silent;
        s.on_split(5, 3);
        s.on_combine(3);
        s.on_failure(Operation::Combine, &SharingError::InsufficientShares);
    }

    #[cfg(feature = "std")]
    mod capture {
        use std::sync::{Mutex, Once};

        /// Records every message at `Info` or above, tagged with its level.
        pub struct CaptureLogger {
            records: Mutex<Vec<(log::Level, String)>>,
        }

        impl log::Log for CaptureLogger {
            fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
                metadata.level() <= log::Level::Info
            }

            fn log(&self, record: &log::Record<'_>) {
                if self.enabled(record.metadata()) {
                    if let Ok(mut records) = self.records.lock() {
                        records.push((record.level(), record.args().to_string()));
                    }
                }
            }

            fn flush(&self) {}
        }

        static LOGGER: CaptureLogger = CaptureLogger {
            records: Mutex::new(Vec::new()),
        };
        static INIT: Once = Once::new();

        pub fn install() -> &'static CaptureLogger {
            INIT.call_once(|| {
                log::set_logger(&LOGGER).unwrap();
                log::set_max_level(log::LevelFilter::Info);
            });
            &LOGGER
        }

        impl CaptureLogger {
            /// Other tests may log concurrently, so callers look for their own message.
            pub fn contains(&self, level: log::Level, message: &str) -> bool {
                self.records
                    .lock()
                    .unwrap()
                    .iter()
                    .any(|(l, m)| *l == level && m == message)
            }
        }
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_log_observer_emits_records() {
        let logger = capture::install();
        let o = LogObserver;
        o.on_split(5, 3);
        o.on_combine(4);
        o.on_failure(Operation::Split, &SharingError::SecretOutOfRange);
        o.on_failure(Operation::Combine, &SharingError::InsufficientShares);

        assert!(logger.contains(log::Level::Info, "5 shares successfully generated (threshold 3)."));
        assert!(logger.contains(log::Level::Info, "Secret successfully reconstructed from 4 shares."));
        assert!(logger.contains(log::Level::Warn, "Split failed: Secret is not below the field prime"));
        assert!(logger.contains(log::Level::Warn, "Combine failed: Not enough shares to reconstruct"));
    }
}
