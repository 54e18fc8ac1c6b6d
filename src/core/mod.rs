//! Field arithmetic foundation.
//!
//! - `field`: exact modular arithmetic over Z/pZ.
//! - `primality`: validation of caller-supplied primes.

pub mod field;
pub mod primality;
