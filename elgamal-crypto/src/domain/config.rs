use crate::errors::ElGamalError;

use serde::{Deserialize, Serialize};

/// Search bounds for safe-prime domain generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainConfig {
    /// Lower bound (inclusive) for the subgroup order `p`.
    pub prime_min: i64,
    /// Upper bound (exclusive) for the subgroup order `p`.
    pub prime_max: i64,
    /// Draws allowed for a single random prime.
    pub max_prime_attempts: usize,
    /// Primes `p` tried before giving up on finding a prime `2p + 1`.
    pub max_safe_prime_attempts: usize,
}

impl Default for DomainConfig {
    /// `p` in `[2^31 / 1000, 2^30)`, so `q = 2p + 1` stays below `2^31`.
    fn default() -> Self {
        Self {
            prime_min: i32::MAX as i64 / 1000,
            prime_max: (i32::MAX as i64 - 1) / 2,
            max_prime_attempts: 100_000,
            max_safe_prime_attempts: 10_000,
        }
    }
}

impl DomainConfig {
    /// Largest `prime_max` accepted. Keeps `2p + 1` and its square-root
    /// bound well inside `i64`.
    pub const PRIME_MAX_LIMIT: i64 = i64::MAX / 4;

    pub fn try_with(
        prime_min: i64,
        prime_max: i64,
        max_prime_attempts: usize,
        max_safe_prime_attempts: usize,
    ) -> Result<Self, ElGamalError> {
        let config = Self {
            prime_min,
            prime_max,
            max_prime_attempts,
            max_safe_prime_attempts,
        };
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ElGamalError> {
        if self.prime_min < 2 {
            return Err(ElGamalError::InvalidParameters(format!(
                "prime_min must be >= 2, got {}",
                self.prime_min
            )));
        }

        if self.prime_min >= self.prime_max {
            return Err(ElGamalError::InvalidParameters(format!(
                "prime range [{}, {}) is empty",
                self.prime_min, self.prime_max
            )));
        }

        if self.prime_max > Self::PRIME_MAX_LIMIT {
            return Err(ElGamalError::InvalidParameters(format!(
                "prime_max {} would overflow q = 2p + 1 (limit {})",
                self.prime_max,
                Self::PRIME_MAX_LIMIT
            )));
        }

        if self.max_prime_attempts == 0 || self.max_safe_prime_attempts == 0 {
            return Err(ElGamalError::InvalidParameters(
                "Attempt bounds must be > 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, ElGamalError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;

        Ok(config)
    }
}
