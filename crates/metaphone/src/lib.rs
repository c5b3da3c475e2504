//! Double Metaphone phonetic encoder.
//!
//! Maps a word (typically a surname) to a primary and an optional secondary
//! phonetic code of at most four symbols, so that differently spelled names
//! that sound alike land in the same bucket.
//!
//! - [`scan`] -- the uppercased, sentinel-padded buffer and its predicates
//! - [`encoder`] -- [`DoubleMetaphone`] and its [`EncoderOptions`]
//!
//! ```
//! use metaphone::double_metaphone;
//!
//! let codes = double_metaphone("Smith");
//! assert_eq!(codes.to_string(), "SM0/XMT");
//! assert!(codes.sounds_like(&double_metaphone("Schmidt")));
//! ```

pub mod encoder;
pub(crate) mod engine;
pub(crate) mod normalizer;
pub mod scan;

pub use encoder::{DoubleMetaphone, EncoderOptions, double_metaphone};
pub use metaphone_core::{Codes, DEFAULT_MAX_CODE_LENGTH, EncodeError, Result};
