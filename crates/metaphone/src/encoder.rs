// DoubleMetaphone: the public encoder.
//
// Wires the normalizer, the rule engine and the finalizer together. The
// encoder itself only holds options; every call builds its own scan buffer
// and code buffers, so one encoder can be shared freely across threads.

use metaphone_core::{Codes, DEFAULT_MAX_CODE_LENGTH, EncodeError, Result};

use crate::engine::{self, CodeBuffers};
use crate::normalizer::normalize;

/// Configuration options for the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderOptions {
    /// Maximum number of symbols kept in each code. The scan stops early once
    /// both codes reach this length, and the finished codes are truncated to
    /// it. A value of 0 is treated as 1.
    pub max_code_length: usize,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            max_code_length: DEFAULT_MAX_CODE_LENGTH,
        }
    }
}

impl EncoderOptions {
    fn effective_max_len(&self) -> usize {
        self.max_code_length.max(1)
    }
}

/// Double Metaphone encoder.
///
/// ```
/// use metaphone::DoubleMetaphone;
///
/// let encoder = DoubleMetaphone::new();
/// let codes = encoder.encode("Schmidt").unwrap();
/// assert_eq!(codes.primary(), "XMT");
/// assert_eq!(codes.secondary(), Some("SMT"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DoubleMetaphone {
    options: EncoderOptions,
}

impl DoubleMetaphone {
    /// Encoder with the default four-symbol codes.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EncoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> EncoderOptions {
        self.options
    }

    pub fn set_max_code_length(&mut self, max_code_length: usize) {
        self.options.max_code_length = max_code_length;
    }

    /// Compute both codes for `word`.
    ///
    /// Returns `None` only if the scan produced no primary code, which the
    /// current rule set never does: empty and all-blank words encode to an
    /// empty primary with no secondary.
    pub fn try_encode(&self, word: &str) -> Option<Codes> {
        let codes = scan(word, self.options.effective_max_len());
        log::debug!("{word:?} -> {codes}");
        Some(codes)
    }

    /// Like [`try_encode`](Self::try_encode), reporting a failed scan as
    /// [`EncodeError::EncodingFailed`].
    pub fn encode(&self, word: &str) -> Result<Codes> {
        self.try_encode(word).ok_or(EncodeError::EncodingFailed)
    }

    /// Encode a word that may be absent. `None` is
    /// [`EncodeError::InvalidInput`].
    pub fn encode_nullable(&self, word: Option<&str>) -> Result<Codes> {
        match word {
            Some(word) => self.encode(word),
            None => Err(EncodeError::InvalidInput),
        }
    }

    /// Whether any reading of `a` matches any reading of `b`.
    pub fn sounds_like(&self, a: &str, b: &str) -> bool {
        match (self.try_encode(a), self.try_encode(b)) {
            (Some(a), Some(b)) => a.sounds_like(&b),
            _ => false,
        }
    }
}

/// Encode `word` with the default options.
pub fn double_metaphone(word: &str) -> Codes {
    scan(word, DEFAULT_MAX_CODE_LENGTH)
}

/// Normalize, run the engine and finalize.
fn scan(word: &str, max_len: usize) -> Codes {
    let mut buffers = CodeBuffers::default();
    let normalized = normalize(word, &mut buffers);
    engine::run(&normalized.buffer, normalized.cursor, &mut buffers, max_len);

    let CodeBuffers { primary, secondary } = buffers;
    Codes::from_buffers(primary, secondary, max_len)
}
