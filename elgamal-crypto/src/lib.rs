//! # ElGamal Crypto
//!
//! ElGamal over the prime-order subgroup of `Z*_q` for a word-sized safe prime
//! `q = 2p + 1`. Meant for teaching: arithmetic is not constant time and the
//! moduli are far too small to be secure.
//!
//! ```
//! let key_pair = elgamal_crypto::create_key_pair().unwrap();
//! let ciphertext = elgamal_crypto::encrypt(331, key_pair.public_key()).unwrap();
//! assert_eq!(elgamal_crypto::decrypt(&ciphertext, &key_pair).unwrap(), 331);
//! ```

pub mod cipher;
pub mod domain;
pub mod errors;
pub mod keypair;
pub mod prime;
pub mod ring;

pub use cipher::Ciphertext;
pub use domain::{DomainConfig, DomainParameters};
pub use errors::ElGamalError;
pub use keypair::{KeyPair, PublicKey};

use rand::Rng;

/// Generates a key pair over a fresh domain with the default search bounds.
pub fn create_key_pair() -> Result<KeyPair, ElGamalError> {
    create_key_pair_with(&mut rand::rng(), &DomainConfig::default())
}

pub fn create_key_pair_with<R: Rng + ?Sized>(
    rng: &mut R,
    config: &DomainConfig,
) -> Result<KeyPair, ElGamalError> {
    KeyPair::generate(rng, config)
}

/// Encrypts `plaintext` (in `[0, q)`) under `public_key`.
pub fn encrypt(plaintext: i64, public_key: &PublicKey) -> Result<Ciphertext, ElGamalError> {
    encrypt_with(&mut rand::rng(), plaintext, public_key)
}

pub fn encrypt_with<R: Rng + ?Sized>(
    rng: &mut R,
    plaintext: i64,
    public_key: &PublicKey,
) -> Result<Ciphertext, ElGamalError> {
    public_key.encrypt(rng, plaintext)
}

pub fn decrypt(ciphertext: &Ciphertext, key_pair: &KeyPair) -> Result<i64, ElGamalError> {
    key_pair.decrypt(ciphertext)
}
