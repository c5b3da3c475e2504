// Input normalization: build the scan buffer and handle the word-initial
// special cases before the main scan starts.

use crate::engine::CodeBuffers;
use crate::scan::ScanBuffer;

/// English silent-letter prefixes; the first letter is skipped ("Knight", "Psalm").
const SILENT_PREFIXES: &[&str] = &["GN", "KN", "PN", "WR", "PS"];

/// Normalized input: the scan buffer and the cursor the engine starts from.
#[derive(Debug)]
pub(crate) struct Normalized {
    pub buffer: ScanBuffer,
    pub cursor: usize,
}

/// Uppercase and pad `word`, then apply the silent-prefix and initial-X rules.
///
/// An initial X is pronounced like Z ("Xavier") and emits `S` to both codes.
pub(crate) fn normalize(word: &str, codes: &mut CodeBuffers) -> Normalized {
    let buffer = ScanBuffer::new(word);
    let mut cursor = 0;

    if buffer.matches_any_string(0, 2, SILENT_PREFIXES) {
        cursor += 1;
    }

    if buffer.char_at(0) == Some('X') {
        codes.both("S");
        cursor += 1;
    }

    Normalized { buffer, cursor }
}
