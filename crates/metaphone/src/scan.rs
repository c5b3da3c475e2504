// Scan buffer and the predicate library queried by the rule engine.
//
// The buffer is the uppercased word followed by `PAD_WIDTH` sentinel spaces.
// All predicates take signed positions: rules routinely look behind the
// cursor (`pos - 2`) near the start of the word, and any position outside the
// stored buffer simply does not match.

use metaphone_core::character::{PAD_CHAR, PAD_WIDTH, is_vowel, upper_chars};

/// Uppercased, sentinel-padded copy of the input word.
///
/// Immutable once built and owned by a single encoding call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanBuffer {
    chars: Vec<char>,
    /// Length of the word before padding, in characters.
    len: usize,
    slavo_germanic: bool,
}

impl ScanBuffer {
    /// Uppercase `word` (locale-insensitive) and append the sentinel pad.
    pub fn new(word: &str) -> Self {
        let mut chars = upper_chars(word);
        let len = chars.len();
        chars.extend(std::iter::repeat_n(PAD_CHAR, PAD_WIDTH));
        let slavo_germanic = detect_slavo_germanic(&chars);
        Self {
            chars,
            len,
            slavo_germanic,
        }
    }

    /// Length of the original word in characters (the pad is not counted).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the original word was empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Character at `pos`, or `None` outside the padded buffer.
    pub fn char_at(&self, pos: isize) -> Option<char> {
        usize::try_from(pos)
            .ok()
            .and_then(|p| self.chars.get(p).copied())
    }

    /// Characters `pos..pos + len`, or `None` unless the whole window lies
    /// inside the padded buffer.
    pub fn window(&self, pos: isize, len: usize) -> Option<&[char]> {
        let start = usize::try_from(pos).ok()?;
        let end = start.checked_add(len)?;
        self.chars.get(start..end)
    }

    /// True iff the character at `pos` is A, E, I, O, U or Y.
    pub fn is_vowel(&self, pos: isize) -> bool {
        self.char_at(pos).is_some_and(is_vowel)
    }

    /// True iff the word contains W, K, CZ or WITZ anywhere.
    ///
    /// Computed once when the buffer is built.
    pub fn is_slavo_germanic(&self) -> bool {
        self.slavo_germanic
    }

    /// True iff the character at `pos` is one of `set`.
    pub fn matches_any_char(&self, pos: isize, set: &[char]) -> bool {
        self.char_at(pos).is_some_and(|c| set.contains(&c))
    }

    /// True iff the `len` characters starting at `pos` spell one of
    /// `candidates`.
    pub fn matches_any_string(&self, pos: isize, len: usize, candidates: &[&str]) -> bool {
        match self.window(pos, len) {
            Some(window) => candidates
                .iter()
                .any(|cand| cand.chars().eq(window.iter().copied())),
            None => false,
        }
    }
}

/// The W, K, CZ, WITZ heuristic over the full buffer.
fn detect_slavo_germanic(chars: &[char]) -> bool {
    const MARKERS: &[&[char]] = &[&['W'], &['K'], &['C', 'Z'], &['W', 'I', 'T', 'Z']];
    MARKERS
        .iter()
        .any(|marker| chars.windows(marker.len()).any(|w| w == *marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_and_pads() {
        let buf = ScanBuffer::new("Raziq");
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.char_at(0), Some('R'));
        assert_eq!(buf.char_at(4), Some('Q'));
        for pos in 5..10 {
            assert_eq!(buf.char_at(pos), Some(PAD_CHAR));
        }
        assert_eq!(buf.char_at(10), None);
    }

    #[test]
    fn empty_word_is_all_pad() {
        let buf = ScanBuffer::new("");
        assert!(buf.is_empty());
        assert_eq!(buf.char_at(0), Some(PAD_CHAR));
        assert!(!buf.is_vowel(0));
    }

    #[test]
    fn negative_positions_never_match() {
        let buf = ScanBuffer::new("ach");
        assert_eq!(buf.char_at(-1), None);
        assert!(!buf.is_vowel(-1));
        assert!(!buf.matches_any_char(-1, &['A', ' ']));
        assert!(!buf.matches_any_string(-2, 3, &["ACH"]));
    }

    #[test]
    fn window_must_fit() {
        let buf = ScanBuffer::new("AB");
        assert_eq!(buf.window(0, 2), Some(&['A', 'B'][..]));
        // 2 chars + 5 pad = 7; a window ending at 8 does not fit.
        assert!(buf.window(3, 4).is_some());
        assert!(buf.window(4, 4).is_none());
        assert!(!buf.matches_any_string(6, 2, &["  "]));
        assert!(buf.matches_any_string(5, 2, &["  "]));
    }

    #[test]
    fn vowel_test() {
        let buf = ScanBuffer::new("Bye");
        assert!(!buf.is_vowel(0));
        assert!(buf.is_vowel(1));
        assert!(buf.is_vowel(2));
        assert!(!buf.is_vowel(3));
    }

    #[test]
    fn char_set_match() {
        let buf = ScanBuffer::new("CHT");
        assert!(buf.matches_any_char(2, &['T', 'S']));
        assert!(!buf.matches_any_char(1, &['T', 'S']));
        // the pad matches an explicit space candidate
        assert!(buf.matches_any_char(3, &['L', ' ']));
    }

    #[test]
    fn string_match() {
        let buf = ScanBuffer::new("Schmidt");
        assert!(buf.matches_any_string(0, 3, &["VAN", "SCH"]));
        assert!(!buf.matches_any_string(1, 3, &["SCH"]));
        assert!(buf.matches_any_string(5, 2, &["DD", "DT"]));
    }

    #[test]
    fn string_match_reaches_into_pad() {
        let buf = ScanBuffer::new("Jose");
        assert!(buf.matches_any_string(0, 5, &["JOSE "]));
    }

    #[test]
    fn slavo_germanic_markers() {
        assert!(ScanBuffer::new("Kowalski").is_slavo_germanic());
        assert!(ScanBuffer::new("Wagner").is_slavo_germanic());
        assert!(ScanBuffer::new("Czerny").is_slavo_germanic());
        assert!(ScanBuffer::new("Horowitz").is_slavo_germanic());
        assert!(!ScanBuffer::new("Raziq").is_slavo_germanic());
        assert!(!ScanBuffer::new("Cezar").is_slavo_germanic());
    }

    #[test]
    fn slavo_germanic_is_case_insensitive() {
        assert!(ScanBuffer::new("czerny").is_slavo_germanic());
    }
}
