use crate::domain::{DomainConfig, DomainParameters};
use crate::errors::ElGamalError;
use crate::prime::is_prime;
use crate::ring::Ring;

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use std::fmt;

/// The shareable half of a key: modulus `q`, generator `g`, and `y = g^x mod q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPublicKey")]
pub struct PublicKey {
    q: i64,
    g: i64,
    y: i64,
}

#[derive(Deserialize)]
struct RawPublicKey {
    q: i64,
    g: i64,
    y: i64,
}

impl TryFrom<RawPublicKey> for PublicKey {
    type Error = ElGamalError;

    fn try_from(raw: RawPublicKey) -> Result<Self, Self::Error> {
        Self::try_with(raw.q, raw.g, raw.y)
    }
}

impl PublicKey {
    /// Checks that `q` is prime and `g`, `y` are non-trivial elements of `Z*_q`.
    ///
    /// Subgroup membership of `g` is not required here; use
    /// [`DomainParameters::try_with`] for the stricter check.
    pub fn try_with(q: i64, g: i64, y: i64) -> Result<Self, ElGamalError> {
        let ring = Ring::try_with_signed(q)?;

        if !is_prime(q) {
            return Err(ElGamalError::InvalidParameters(format!(
                "Modulus {} is not prime",
                q
            )));
        }

        if g < 2 || !ring.contains(g) {
            return Err(ElGamalError::InvalidParameters(format!(
                "Generator {} must lie in [2, {})",
                g, q
            )));
        }

        if y < 1 || !ring.contains(y) {
            return Err(ElGamalError::InvalidParameters(format!(
                "Public value {} must lie in [1, {})",
                y, q
            )));
        }

        Ok(Self { q, g, y })
    }

    pub fn q(&self) -> i64 {
        self.q
    }

    pub fn g(&self) -> i64 {
        self.g
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    pub fn ring(&self) -> Result<Ring, ElGamalError> {
        Ring::try_with_signed(self.q)
    }

    pub fn to_json(&self) -> Result<String, ElGamalError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ElGamalError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.g, self.y)
    }
}

/// A public key together with its secret exponent `x`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawKeyPair")]
pub struct KeyPair {
    public_key: PublicKey,
    secret_key: i64,
}

#[derive(Deserialize)]
struct RawKeyPair {
    public_key: PublicKey,
    secret_key: i64,
}

impl TryFrom<RawKeyPair> for KeyPair {
    type Error = ElGamalError;

    fn try_from(raw: RawKeyPair) -> Result<Self, Self::Error> {
        Self::try_with(raw.public_key, raw.secret_key)
    }
}

impl KeyPair {
    /// Pairs a public key with its secret exponent, checking `x` in `[0, q - 1)`
    /// and `y = g^x mod q`.
    pub fn try_with(public_key: PublicKey, secret_key: i64) -> Result<Self, ElGamalError> {
        if secret_key < 0 || secret_key >= public_key.q - 1 {
            return Err(ElGamalError::PreconditionViolation(format!(
                "Secret exponent must lie in [0, {})",
                public_key.q - 1
            )));
        }

        let ring = public_key.ring()?;
        if ring.pow(public_key.g, secret_key)? != public_key.y {
            return Err(ElGamalError::InvalidParameters(
                "Public value y does not match g^x mod q".to_string(),
            ));
        }

        Ok(Self {
            public_key,
            secret_key,
        })
    }

    /// Generates a fresh domain from `config` and a key pair on top of it.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        config: &DomainConfig,
    ) -> Result<Self, ElGamalError> {
        let domain = DomainParameters::generate(rng, config)?;
        Self::generate_for_domain(rng, &domain)
    }

    /// Samples `x` from `[0, q - 1)` and derives `y = g^x mod q`.
    pub fn generate_for_domain<R: Rng + ?Sized>(
        rng: &mut R,
        domain: &DomainParameters,
    ) -> Result<Self, ElGamalError> {
        let (q, g) = (domain.q(), domain.g());
        let ring = domain.ring()?;

        let x = rng.random_range(0..q - 1);
        let y = ring.pow(g, x)?;
        debug!("key pair generated for q = {}, y = {}", q, y);

        Ok(Self {
            public_key: PublicKey::try_with(q, g, y)?,
            secret_key: x,
        })
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn secret_key(&self) -> i64 {
        self.secret_key
    }

    pub fn to_json(&self) -> Result<String, ElGamalError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ElGamalError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
