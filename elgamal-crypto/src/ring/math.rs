//! Implementation of ring ops using modular arithmetic.

use crate::errors::ElGamalError;

use super::{extended_gcd, gcd};

use serde::{Deserialize, Serialize};

/// Represents the ring Z_m of integers modulo `modulus`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRing")]
pub struct Ring {
    modulus: u64,
}

#[derive(Deserialize)]
struct RawRing {
    modulus: u64,
}

impl TryFrom<RawRing> for Ring {
    type Error = ElGamalError;

    fn try_from(raw: RawRing) -> Result<Self, Self::Error> {
        Self::try_with(raw.modulus)
    }
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1 and representable as `i64`.
    pub fn try_with(modulus: u64) -> Result<Self, ElGamalError> {
        if modulus <= 1 {
            return Err(ElGamalError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        if modulus > i64::MAX as u64 {
            return Err(ElGamalError::InvalidModulus(format!(
                "Modulus {} does not fit a signed 64-bit accumulator",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Same as [`Ring::try_with`] for callers that hold the modulus as `i64`.
    pub fn try_with_signed(modulus: i64) -> Result<Self, ElGamalError> {
        if modulus <= 1 {
            return Err(ElGamalError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        Self::try_with(modulus as u64)
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use elgamal_crypto::ring::Ring;
    /// let ring = Ring::try_with(13).unwrap();
    /// assert_eq!(ring.modulus(), 13);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// Handles negative values correctly by adding the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use elgamal_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.normalize(15), 5);
    /// assert_eq!(ring.normalize(-3), 7);
    /// assert_eq!(ring.normalize(10), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        let m = self.modulus as i64;

        let rem = value % m;
        if rem < 0 {
            return rem + m;
        }

        rem
    }

    /// Returns `true` if `value` already lies in `[0, modulus)`.
    pub fn contains(&self, value: i64) -> bool {
        value >= 0 && (value as u64) < self.modulus
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally so the product cannot overflow before the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use elgamal_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.mul(7, 5), 5); // 35 mod 10 = 5
    /// assert_eq!(ring.mul(-2, 6), 8); // -12 mod 10 = 8
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        let result = (a_norm as i128 * b_norm as i128) % (self.modulus as i128);

        result as i64
    }

    /// Computes `base^exponent mod modulus` by square-and-multiply.
    ///
    /// # Errors
    ///
    /// Returns `ElGamalError::PreconditionViolation` for a negative exponent.
    ///
    /// # Example
    ///
    /// ```
    /// # use elgamal_crypto::ring::Ring;
    /// let ring = Ring::try_with(1000).unwrap();
    /// assert_eq!(ring.pow(2, 10).unwrap(), 24);
    /// assert_eq!(ring.pow(7, 0).unwrap(), 1);
    /// ```
    pub fn pow(&self, base: i64, exponent: i64) -> Result<i64, ElGamalError> {
        if exponent < 0 {
            return Err(ElGamalError::PreconditionViolation(format!(
                "Negative exponent {} in mod {}",
                exponent, self.modulus
            )));
        }

        let mut res = 1;
        let mut a = self.normalize(base);
        let mut n = exponent;

        while n > 0 {
            if n & 1 == 1 {
                res = self.mul(res, a);
            }
            a = self.mul(a, a);
            n >>= 1;
        }

        Ok(res)
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`.
    /// Uses the Extended Euclidean Algorithm, then confirms `a * a^-1 = 1`.
    ///
    /// # Errors
    ///
    /// Returns `ElGamalError::NoInverse` if the inverse does not exist, including `a = 0`.
    ///
    /// # Example
    ///
    /// ```
    /// # use elgamal_crypto::ring::Ring;
    /// let ring = Ring::try_with(11).unwrap();
    /// assert_eq!(ring.inv(3).unwrap(), 4); // 3 * 4 = 12 = 1 mod 11
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, ElGamalError> {
        let a_norm = self.normalize(a);
        if a_norm == 0 {
            return Err(ElGamalError::NoInverse(format!(
                "Cannot invert 0 in mod {}",
                self.modulus
            )));
        }

        let g = gcd(a_norm, self.modulus as i64);
        if g != 1 {
            return Err(ElGamalError::NoInverse(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a_norm, self.modulus, g
            )));
        }

        let (_, x, _) = extended_gcd(a_norm, self.modulus as i64);

        let inverse = self.normalize(x);
        if self.mul(a_norm, inverse) != 1 {
            return Err(ElGamalError::NoInverse(format!(
                "{} * {} is not 1 mod {}",
                a_norm, inverse, self.modulus
            )));
        }

        Ok(inverse)
    }
}

/// Computes `a^n mod modulus`.
pub fn mod_pow(a: i64, n: i64, modulus: i64) -> Result<i64, ElGamalError> {
    Ring::try_with_signed(modulus)?.pow(a, n)
}

/// Computes the inverse of `a` modulo `modulus`.
pub fn mod_inv(a: i64, modulus: i64) -> Result<i64, ElGamalError> {
    Ring::try_with_signed(modulus)?.inv(a)
}
