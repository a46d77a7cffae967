//! Trial-division primality and bounded random prime sampling.
//!
//! Both work on machine-word integers only; the cost of [`is_prime`] is
//! `O(sqrt(n))`, fine for the sub-2^31 moduli this crate generates.

use crate::errors::ElGamalError;

use log::{trace, warn};
use rand::Rng;

/// Decides primality of `n` by trial division with odd divisors up to `sqrt(n)`.
///
/// # Example
///
/// ```
/// # use elgamal_crypto::prime::is_prime;
/// assert!(!is_prime(1));
/// assert!(is_prime(2));
/// assert!(!is_prime(4));
/// assert!(is_prime(97));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }

    true
}

/// Draws uniform integers from `[min, max)` until one is prime.
///
/// # Errors
/// * `PreconditionViolation` if the range is empty.
/// * `PrimeSearchExhausted` if no prime was drawn within `max_attempts` draws.
pub fn random_prime<R: Rng + ?Sized>(
    rng: &mut R,
    min: i64,
    max: i64,
    max_attempts: usize,
) -> Result<i64, ElGamalError> {
    if min >= max {
        return Err(ElGamalError::PreconditionViolation(format!(
            "Empty sampling range [{}, {})",
            min, max
        )));
    }

    for attempt in 1..=max_attempts {
        let candidate = rng.random_range(min..max);
        if is_prime(candidate) {
            trace!("prime {} found after {} draws", candidate, attempt);
            return Ok(candidate);
        }
    }

    warn!("no prime in [{}, {}) after {} draws", min, max, max_attempts);

    Err(ElGamalError::PrimeSearchExhausted {
        min,
        max,
        attempts: max_attempts,
    })
}
