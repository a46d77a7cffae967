pub mod keys;

pub use keys::{KeyPair, PublicKey};
