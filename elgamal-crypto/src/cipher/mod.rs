//! ElGamal encryption and decryption of single integers in `[0, q)`.

pub mod ciphertext;

pub use ciphertext::Ciphertext;

use crate::errors::ElGamalError;
use crate::keypair::{KeyPair, PublicKey};

use log::trace;
use rand::Rng;

impl PublicKey {
    /// Encrypts `m` under this key with a fresh ephemeral exponent drawn from `rng`.
    ///
    /// # Errors
    /// `PreconditionViolation` if `m` is outside `[0, q)`.
    pub fn encrypt<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        m: i64,
    ) -> Result<Ciphertext, ElGamalError> {
        self.check_plaintext(m)?;

        let r = rng.random_range(0..self.q() - 1);
        self.encrypt_with_ephemeral(m, r)
    }

    /// Encrypts `m` with a caller-chosen ephemeral exponent `r` in `[0, q - 1)`:
    /// `c1 = g^r`, `c2 = m * y^r` (mod q).
    ///
    /// Reusing `r` across messages leaks their ratio; only use this for
    /// reproducible test vectors.
    pub fn encrypt_with_ephemeral(&self, m: i64, r: i64) -> Result<Ciphertext, ElGamalError> {
        self.check_plaintext(m)?;

        if r < 0 || r >= self.q() - 1 {
            return Err(ElGamalError::PreconditionViolation(format!(
                "Ephemeral exponent {} outside [0, {})",
                r,
                self.q() - 1
            )));
        }

        let ring = self.ring()?;
        let c1 = ring.pow(self.g(), r)?;
        let c2 = ring.mul(m, ring.pow(self.y(), r)?);
        trace!("encrypted under q = {}", self.q());

        Ciphertext::try_with(c1, c2, self)
    }

    fn check_plaintext(&self, m: i64) -> Result<(), ElGamalError> {
        if m < 0 || m >= self.q() {
            return Err(ElGamalError::PreconditionViolation(format!(
                "Plaintext {} outside [0, {})",
                m,
                self.q()
            )));
        }

        Ok(())
    }
}

impl KeyPair {
    /// Recovers `m = c2 * (c1^x)^-1 mod q`.
    ///
    /// # Errors
    /// * `PreconditionViolation` if either component is outside `[0, q)`.
    /// * `NoInverse` if `c1 = 0`, which no honest encryption produces.
    pub fn decrypt(&self, ciphertext: &Ciphertext) -> Result<i64, ElGamalError> {
        let public_key = self.public_key();
        Ciphertext::try_with(ciphertext.c1(), ciphertext.c2(), public_key)?;

        let ring = public_key.ring()?;
        // 0^0 = 1 would let c1 = 0 through for x = 0
        ring.inv(ciphertext.c1())?;

        let shared = ring.pow(ciphertext.c1(), self.secret_key())?;
        let shared_inv = ring.inv(shared)?;

        Ok(ring.mul(ciphertext.c2(), shared_inv))
    }
}
