use crate::errors::ElGamalError;
use crate::keypair::PublicKey;

use serde::{Deserialize, Serialize};

use std::fmt;

/// An ElGamal ciphertext `(c1, c2)`, both reduced mod `q`.
///
/// Only [`Ciphertext::from_json`] parses one, since the range check needs the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Ciphertext {
    c1: i64,
    c2: i64,
}

#[derive(Deserialize)]
struct RawCiphertext {
    c1: i64,
    c2: i64,
}

impl Ciphertext {
    /// Wraps `(c1, c2)` after checking both lie in `[0, q)` for `public_key`.
    pub fn try_with(c1: i64, c2: i64, public_key: &PublicKey) -> Result<Self, ElGamalError> {
        let ring = public_key.ring()?;

        if !ring.contains(c1) || !ring.contains(c2) {
            return Err(ElGamalError::PreconditionViolation(format!(
                "Ciphertext ({}, {}) outside [0, {})",
                c1,
                c2,
                public_key.q()
            )));
        }

        Ok(Self { c1, c2 })
    }

    pub fn c1(&self) -> i64 {
        self.c1
    }

    pub fn c2(&self) -> i64 {
        self.c2
    }

    pub fn to_json(&self) -> Result<String, ElGamalError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a ciphertext and checks it against `public_key`.
    pub fn from_json(json: &str, public_key: &PublicKey) -> Result<Self, ElGamalError> {
        let raw: RawCiphertext = serde_json::from_str(json)?;
        Self::try_with(raw.c1, raw.c2, public_key)
    }
}

impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.c1, self.c2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_checks() -> Result<(), ElGamalError> {
        let pk = PublicKey::try_with(11, 2, 8)?;

        assert!(Ciphertext::try_with(0, 0, &pk).is_ok());
        assert!(Ciphertext::try_with(10, 10, &pk).is_ok());
        assert!(Ciphertext::try_with(11, 1, &pk).is_err());
        assert!(Ciphertext::try_with(1, -1, &pk).is_err());
        Ok(())
    }

    #[test]
    fn test_json_is_checked_against_key() -> Result<(), ElGamalError> {
        let pk = PublicKey::try_with(11, 2, 8)?;
        let ciphertext = Ciphertext::try_with(4, 1, &pk)?;

        let json = ciphertext.to_json()?;
        assert_eq!(json, r#"{"c1":4,"c2":1}"#);
        assert_eq!(Ciphertext::from_json(&json, &pk)?, ciphertext);

        assert!(matches!(
            Ciphertext::from_json(r#"{"c1":4,"c2":12}"#, &pk),
            Err(ElGamalError::PreconditionViolation(_))
        ));
        assert!(matches!(
            Ciphertext::from_json(r#"{"c1":-3,"c2":1}"#, &pk),
            Err(ElGamalError::PreconditionViolation(_))
        ));
        Ok(())
    }

    #[test]
    fn test_display() -> Result<(), ElGamalError> {
        let pk = PublicKey::try_with(11, 2, 8)?;
        assert_eq!(Ciphertext::try_with(4, 1, &pk)?.to_string(), "(4, 1)");
        assert_eq!(pk.to_string(), "(11, 2, 8)");
        Ok(())
    }
}
