// Error taxonomy for the encoder.

/// Errors signaled by the checked encoding entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The input word is absent (a null pointer or JS `null`/`undefined`).
    /// Empty and all-whitespace words are valid input.
    #[error("input word is absent")]
    InvalidInput,

    /// The scan finished without a primary code. No current rule produces
    /// this, but callers must be prepared for it.
    #[error("could not calculate double metaphone codes")]
    EncodingFailed,
}

/// Result alias used across the encoder crates.
pub type Result<T> = std::result::Result<T, EncodeError>;
