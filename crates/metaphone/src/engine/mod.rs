// Dual-code rule engine.
//
// The engine walks the scan buffer once. At each cursor position it picks the
// rule table for the current letter, applies the first rule whose guard holds,
// and advances by the step that rule returns. Two code buffers grow side by
// side: the primary reading and the alternative (secondary) reading.

pub(crate) mod rule;
pub(crate) mod rules;

use crate::scan::ScanBuffer;

/// The two growing code buffers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct CodeBuffers {
    pub primary: String,
    pub secondary: String,
}

impl CodeBuffers {
    /// Append the same symbols to both codes.
    pub fn both(&mut self, code: &str) {
        self.primary.push_str(code);
        self.secondary.push_str(code);
    }

    /// Append different symbols to each code.
    pub fn split(&mut self, primary: &str, secondary: &str) {
        self.primary.push_str(primary);
        self.secondary.push_str(secondary);
    }

    /// Append to the primary code only.
    pub fn primary_only(&mut self, code: &str) {
        self.primary.push_str(code);
    }

    /// Append to the secondary code only.
    pub fn secondary_only(&mut self, code: &str) {
        self.secondary.push_str(code);
    }

    /// Both codes already hold at least `max_len` symbols.
    pub fn is_full(&self, max_len: usize) -> bool {
        self.primary.len() >= max_len && self.secondary.len() >= max_len
    }
}

/// Read-only view of the buffer around the cursor, handed to rule guards and
/// actions. Offsets are relative to the cursor and may be negative.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Context<'a> {
    pub buf: &'a ScanBuffer,
    pub pos: usize,
}

impl Context<'_> {
    fn abs(&self, offset: isize) -> isize {
        self.pos as isize + offset
    }

    /// Character under the cursor.
    pub fn current(&self) -> char {
        self.at(0).unwrap_or(metaphone_core::character::PAD_CHAR)
    }

    /// Character at `offset` from the cursor.
    pub fn at(&self, offset: isize) -> Option<char> {
        self.buf.char_at(self.abs(offset))
    }

    /// Character at `offset` equals `c`.
    pub fn is(&self, offset: isize, c: char) -> bool {
        self.at(offset) == Some(c)
    }

    /// Character at `offset` is one of `set`.
    pub fn any_char(&self, offset: isize, set: &[char]) -> bool {
        self.buf.matches_any_char(self.abs(offset), set)
    }

    /// The `len` characters at `offset` spell one of `candidates`.
    pub fn any(&self, offset: isize, len: usize, candidates: &[&str]) -> bool {
        self.buf.matches_any_string(self.abs(offset), len, candidates)
    }

    /// Character at `offset` is a vowel.
    pub fn vowel(&self, offset: isize) -> bool {
        self.buf.is_vowel(self.abs(offset))
    }

    /// The word itself starts with one of `candidates` (absolute position 0).
    pub fn word_starts(&self, len: usize, candidates: &[&str]) -> bool {
        self.buf.matches_any_string(0, len, candidates)
    }

    /// Cursor is on the first character of the word.
    pub fn is_first(&self) -> bool {
        self.pos == 0
    }

    /// Cursor is on the last character of the word.
    pub fn is_last(&self) -> bool {
        self.pos + 1 == self.buf.len()
    }

    pub fn slavo_germanic(&self) -> bool {
        self.buf.is_slavo_germanic()
    }

    /// Word opens with "VAN ", "VON " or "SCH".
    pub fn germanic_prefix(&self) -> bool {
        self.word_starts(4, &["VAN ", "VON "]) || self.word_starts(3, &["SCH"])
    }

    /// Step past the current letter and, if it is doubled, its twin.
    pub fn doubled(&self, c: char) -> usize {
        if self.is(1, c) { 2 } else { 1 }
    }
}

/// Scan `buf` from `cursor` until the word ends or both codes hold
/// `max_len` symbols.
pub(crate) fn run(buf: &ScanBuffer, mut cursor: usize, codes: &mut CodeBuffers, max_len: usize) {
    while !codes.is_full(max_len) && cursor < buf.len() {
        let ctx = Context { buf, pos: cursor };
        let step = rule::apply_first(rules::for_letter(ctx.current()), &ctx, codes);
        debug_assert!(step >= 1, "rule at {cursor} did not advance");
        cursor += step.max(1);
    }
}
