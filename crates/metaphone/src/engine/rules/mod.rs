// Per-letter rule tables.
//
// Each table is an ordered list of (guard, action) pairs; the first rule
// whose guard holds is applied. Letters with no table fall through to
// `SILENT`, which advances one position.

mod c;
mod finals;
mod g;
mod j;
mod sibilants;
pub(crate) mod simple;
mod t;
mod w;

use super::rule::Rule;
use metaphone_core::character::N_TILDE;

/// Rule table for the letter under the cursor.
pub(crate) fn for_letter(letter: char) -> &'static [Rule] {
    match letter {
        'A' | 'E' | 'I' | 'O' | 'U' | 'Y' => simple::VOWEL,
        'B' => simple::B,
        'C' => c::C,
        'D' => simple::D,
        'F' => simple::F,
        'G' => g::G,
        'H' => simple::H,
        'J' => j::J,
        'K' => simple::K,
        'L' => finals::L,
        'M' => simple::M,
        'N' => simple::N,
        N_TILDE => simple::N_TILDE,
        'P' => simple::P,
        'Q' => simple::Q,
        'R' => finals::R,
        'S' => sibilants::S,
        'T' => t::T,
        'V' => simple::V,
        'W' => w::W,
        'X' => finals::X,
        'Z' => sibilants::Z,
        _ => simple::SILENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Context;
    use crate::scan::ScanBuffer;

    #[test]
    fn every_table_ends_unconditionally() {
        let buf = ScanBuffer::new("Q");
        let ctx = Context { buf: &buf, pos: 0 };
        for c in "ABCDEFGHIJKLMNOPQRSTUVWXYZ\u{00D1}\u{00C7} '-1".chars() {
            let table = for_letter(c);
            let last = table.last();
            assert!(last.is_some_and(|rule| (rule.when)(&ctx)), "{c}");
        }
    }

    #[test]
    fn unknown_characters_are_silent() {
        for c in ['\u{00C7}', '-', '\'', ' ', '7', '\u{00DF}'] {
            assert_eq!(for_letter(c)[0].name, "silent", "{c}");
        }
    }

    #[test]
    fn vowels_share_a_table() {
        assert_eq!(for_letter('A')[0].name, for_letter('Y')[0].name);
        assert_eq!(for_letter('\u{00D1}')[0].name, "n-tilde");
    }
}
