//! Primality testing for caller-supplied moduli.
//!
//! Delegates to `num-bigint-dig`, whose Miller-Rabin plus Baillie-PSW test is
//! exact for every input below 2^64.

use num_bigint_dig::prime::probably_prime;
use num_bigint_dig::BigUint;

/// Extra Miller-Rabin rounds on top of the Baillie-PSW check.
const MR_ROUNDS: usize = 20;

/// Returns true if `n` is prime.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    probably_prime(&BigUint::from(n), MR_ROUNDS)
}
