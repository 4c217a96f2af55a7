//! Error types shared across the core.

use thiserror::Error;

/// Errors that can surface from any layer of the core (entropy, codec, arithmetic).
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("entropy source failed: {0}")]
    Entropy(#[from] std::io::Error),

    #[error("modular inverse does not exist (gcd(a, m) != 1)")]
    NotInvertible,

    #[error("could not parse {0:?} as a non-negative decimal integer")]
    Parse(String),

    #[error("allocation of {requested} bytes exceeded available memory")]
    Alloc { requested: usize },
}

/// Errors from [`crate::key::generate_key`].
#[derive(Error, Debug)]
pub enum KeygenError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("giving up after {0} attempts without a usable (p, q, e) triple")]
    AttemptsExhausted(u32),
}

pub type Result<T> = std::result::Result<T, CoreError>;
