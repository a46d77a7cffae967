#[derive(thiserror::Error, Debug)]
pub enum ElGamalError {
    /// Error when creating a ring with an invalid modulus (modulus <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, m) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// A value handed to the engine lies outside the range the math is defined for.
    #[error("PreconditionViolation: {0}")]
    PreconditionViolation(String),

    #[error("No prime found in [{min}, {max}) after {attempts} attempts")]
    PrimeSearchExhausted { min: i64, max: i64, attempts: usize },
    #[error("DomainConstructionFailure: {0}")]
    DomainConstructionFailure(String),

    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
