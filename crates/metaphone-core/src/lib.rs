//! Shared types for the Double Metaphone encoder.
//!
//! - [`character`] -- uppercase mapping, vowel test and sentinel padding constants
//! - [`codes`] -- the [`Codes`] result pair and its finalization
//! - [`error`] -- the [`EncodeError`] taxonomy

pub mod character;
pub mod codes;
pub mod error;

pub use codes::{Codes, DEFAULT_MAX_CODE_LENGTH};
pub use error::{EncodeError, Result};
