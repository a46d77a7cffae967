//! Safe-prime domain parameters `(q, g)`.
//!
//! `q = 2p + 1` with `p` and `q` both prime, and `g` generating the subgroup of
//! `Z*_q` of prime order `p`.

pub mod config;

pub use config::DomainConfig;

use crate::errors::ElGamalError;
use crate::prime::{is_prime, random_prime};
use crate::ring::Ring;

use log::{debug, trace, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDomainParameters")]
pub struct DomainParameters {
    q: i64,
    g: i64,
}

#[derive(Deserialize)]
struct RawDomainParameters {
    q: i64,
    g: i64,
}

impl TryFrom<RawDomainParameters> for DomainParameters {
    type Error = ElGamalError;

    fn try_from(raw: RawDomainParameters) -> Result<Self, Self::Error> {
        Self::try_with(raw.q, raw.g)
    }
}

impl DomainParameters {
    /// Wraps an existing `(q, g)` after checking that `q` is a safe prime and
    /// `g` has order `p = (q - 1) / 2`.
    pub fn try_with(q: i64, g: i64) -> Result<Self, ElGamalError> {
        if !is_prime(q) || !is_prime((q - 1) / 2) {
            return Err(ElGamalError::InvalidParameters(format!(
                "{} is not a safe prime",
                q
            )));
        }

        let ring = Ring::try_with_signed(q)?;
        if !is_subgroup_generator(&ring, (q - 1) / 2, g)? {
            return Err(ElGamalError::InvalidParameters(format!(
                "{} does not generate the order-{} subgroup mod {}",
                g,
                (q - 1) / 2,
                q
            )));
        }

        Ok(Self { q, g })
    }

    /// Builds a fresh domain: samples primes `p` until `2p + 1` is prime, then
    /// picks the smallest generator of the order-`p` subgroup.
    ///
    /// # Errors
    /// * `PrimeSearchExhausted` if a single prime draw runs out of attempts.
    /// * `DomainConstructionFailure` if no safe prime turns up within
    ///   `max_safe_prime_attempts`, or the subgroup has no generator other than
    ///   `q - 1` (only the case for `q = 5`).
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        config: &DomainConfig,
    ) -> Result<Self, ElGamalError> {
        config.validate()?;

        for attempt in 1..=config.max_safe_prime_attempts {
            let p = random_prime(
                rng,
                config.prime_min,
                config.prime_max,
                config.max_prime_attempts,
            )?;
            let q = 2 * p + 1;

            if !is_prime(q) {
                trace!("2 * {} + 1 = {} is composite", p, q);
                continue;
            }

            debug!("safe prime q = {} (p = {}) after {} tries", q, p, attempt);
            let g = find_generator(p, q)?;
            debug!("generator g = {} for q = {}", g, q);

            return Ok(Self { q, g });
        }

        warn!(
            "no safe prime in [{}, {}) after {} tries",
            config.prime_min, config.prime_max, config.max_safe_prime_attempts
        );

        Err(ElGamalError::DomainConstructionFailure(format!(
            "No safe prime with p in [{}, {}) after {} tries",
            config.prime_min, config.prime_max, config.max_safe_prime_attempts
        )))
    }

    /// The safe-prime modulus.
    pub fn q(&self) -> i64 {
        self.q
    }

    /// Generator of the order-`p` subgroup.
    pub fn g(&self) -> i64 {
        self.g
    }

    /// Subgroup order `p = (q - 1) / 2`.
    pub fn p(&self) -> i64 {
        (self.q - 1) / 2
    }

    pub fn ring(&self) -> Result<Ring, ElGamalError> {
        Ring::try_with_signed(self.q)
    }
}

/// Scans `2, 3, ..., q - 1` for the first element of order exactly `p`.
///
/// Candidates of order 1 or 2 are skipped; `i^p = 1 (mod q)` places `i` in the
/// order-`p` subgroup.
pub fn find_generator(p: i64, q: i64) -> Result<i64, ElGamalError> {
    let ring = Ring::try_with_signed(q)?;

    for i in 2..q {
        if is_subgroup_generator(&ring, p, i)? {
            return Ok(i);
        }
    }

    Err(ElGamalError::DomainConstructionFailure(format!(
        "No generator of the order-{} subgroup mod {}",
        p, q
    )))
}

fn is_subgroup_generator(ring: &Ring, p: i64, g: i64) -> Result<bool, ElGamalError> {
    if !ring.contains(g) || g < 2 {
        return Ok(false);
    }

    Ok(ring.mul(g, g) != 1 && ring.pow(g, p)? == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const TEST_SEED: u64 = 42;

    fn small_config() -> DomainConfig {
        DomainConfig::try_with(100, 1_000, 10_000, 1_000).unwrap()
    }

    #[test]
    fn test_find_generator_small_groups() -> Result<(), ElGamalError> {
        // 2^3 = 8 = 1 mod 7
        assert_eq!(find_generator(3, 7)?, 2);
        // 2 has order 10 mod 11, 3 has order 5
        assert_eq!(find_generator(5, 11)?, 3);
        assert_eq!(find_generator(11, 23)?, 2);
        Ok(())
    }

    #[test]
    fn test_find_generator_fails_when_only_order_two_remains() {
        // the order-2 subgroup of Z*_5 is {1, 4}, and 4 = -1 is rejected
        assert!(matches!(
            find_generator(2, 5),
            Err(ElGamalError::DomainConstructionFailure(_))
        ));
    }

    #[test]
    fn test_try_with_validates_invariants() {
        assert!(DomainParameters::try_with(11, 3).is_ok());
        assert!(DomainParameters::try_with(23, 2).is_ok());

        // 2 has order 10 in Z*_11
        assert!(DomainParameters::try_with(11, 2).is_err());
        assert!(DomainParameters::try_with(11, 1).is_err());
        assert!(DomainParameters::try_with(11, 10).is_err());
        assert!(DomainParameters::try_with(11, 11).is_err());
        // (13 - 1) / 2 = 6 is composite
        assert!(DomainParameters::try_with(13, 3).is_err());
        assert!(DomainParameters::try_with(15, 2).is_err());
    }

    #[test]
    fn test_generated_domain_has_prime_order_subgroup() -> Result<(), ElGamalError> {
        let mut rng = StdRng::seed_from_u64(TEST_SEED);

        for _ in 0..20 {
            let domain = DomainParameters::generate(&mut rng, &small_config())?;
            let (q, g, p) = (domain.q(), domain.g(), domain.p());

            assert!(is_prime(q));
            assert!(is_prime(p));
            assert_eq!(q, 2 * p + 1);
            assert!((100..1_000).contains(&p));
            assert_ne!(g, 1);
            assert!((2..q).contains(&g));
            assert_eq!(domain.ring()?.pow(g, p)?, 1);
        }
        Ok(())
    }

    #[test]
    fn test_generated_domain_with_default_config() -> Result<(), ElGamalError> {
        let mut rng = StdRng::seed_from_u64(TEST_SEED);
        let domain = DomainParameters::generate(&mut rng, &DomainConfig::default())?;

        assert!(domain.q() <= i32::MAX as i64);
        assert!(domain.p() >= DomainConfig::default().prime_min);
        assert_eq!(domain.ring()?.pow(domain.g(), domain.p())?, 1);
        Ok(())
    }

    #[test]
    fn test_generation_is_reproducible_with_seed() -> Result<(), ElGamalError> {
        let mut rng_a = StdRng::seed_from_u64(TEST_SEED);
        let a = DomainParameters::generate(&mut rng_a, &small_config())?;
        let mut rng_b = StdRng::seed_from_u64(TEST_SEED);
        let b = DomainParameters::generate(&mut rng_b, &small_config())?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_generation_reports_missing_safe_prime() {
        // p = 7 is the only prime in range and 15 is composite
        let config = DomainConfig::try_with(7, 8, 10, 25).unwrap();
        let result = DomainParameters::generate(&mut StdRng::seed_from_u64(TEST_SEED), &config);
        assert!(matches!(
            result,
            Err(ElGamalError::DomainConstructionFailure(_))
        ));
    }

    #[test]
    fn test_generation_reports_missing_generator() {
        // p = 2 gives q = 5, whose order-2 subgroup has no acceptable generator
        let config = DomainConfig::try_with(2, 3, 10, 10).unwrap();
        let result = DomainParameters::generate(&mut StdRng::seed_from_u64(TEST_SEED), &config);
        assert!(matches!(
            result,
            Err(ElGamalError::DomainConstructionFailure(_))
        ));
    }

    #[test]
    fn test_deserialization_revalidates() {
        let ok: Result<DomainParameters, _> = serde_json::from_str(r#"{"q":23,"g":2}"#);
        assert_eq!(ok.unwrap(), DomainParameters::try_with(23, 2).unwrap());

        let bad: Result<DomainParameters, _> = serde_json::from_str(r#"{"q":11,"g":2}"#);
        assert!(bad.is_err());
    }
}
