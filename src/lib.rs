//! (t, n) threshold secret sharing over a prime field.
//!
//! A secret below a caller-supplied prime `p` is split into `n` shares such
//! that any `t` reconstruct it exactly and any `t - 1` reveal nothing.
//!
//! ```
//! use prime_shamir::config::SchemeConfig;
//! use prime_shamir::entropy::os::OsSource;
//! use prime_shamir::mpc::ShamirScheme;
//!
//! let scheme = ShamirScheme::new(SchemeConfig::new(3, 5, 10_007)).unwrap();
//! let shares = scheme.split(1234, &mut OsSource::new()).unwrap();
//! assert_eq!(scheme.combine(&shares.shares()[1..4]).unwrap(), 1234);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod core;
pub mod entropy;
pub mod mpc;
pub mod config;
pub mod demo;

pub use config::{DemoConfig, SchemeConfig};
pub use mpc::share::{Share, ShareSet};
pub use mpc::{Secret, ShamirScheme, SharingError};
