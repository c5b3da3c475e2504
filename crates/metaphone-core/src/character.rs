// Character classification and case mapping for the scan buffer.
//
// The encoder only ever inspects uppercased characters, so every predicate
// here works on the uppercase form. Lowercase input is mapped through
// `simple_upper` first.

// ---------------------------------------------------------------------------
// Phonetic constants
// ---------------------------------------------------------------------------

/// Letters treated as vowels by the rule engine (uppercase): A E I O U Y
const VOWELS: &[char] = &['A', 'E', 'I', 'O', 'U', 'Y'];

/// Sentinel appended after the word so that lookahead never leaves the buffer.
///
/// A space is not a vowel. Rules that care about the end of a word ("JOSE ",
/// "-IER ") match it explicitly.
pub const PAD_CHAR: char = ' ';

/// Number of sentinel characters appended after the word.
///
/// The widest lookahead in the rule catalog reads four positions past the
/// cursor.
pub const PAD_WIDTH: usize = 5;

/// Uppercase letter with tilde (Ñ), the only non-ASCII letter with its own rule.
pub const N_TILDE: char = '\u{00D1}';

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Check whether an uppercase character is a vowel for encoding purposes.
/// Y counts as a vowel.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// Rust's `char::to_uppercase` is locale independent, which is exactly what the
// encoder needs: a Turkish or Lithuanian host locale must not change the codes.
// Some characters expand to several characters when uppercased (ß -> SS).
// Those are kept unchanged so the buffer stays one char per input char and
// word-end positions computed from the input length remain valid.
// ---------------------------------------------------------------------------

/// Convert a character to its simple (one-to-one) uppercase equivalent.
///
/// Characters whose uppercase form is more than one character are returned
/// unchanged.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    match (iter.next(), iter.next()) {
        (Some(upper), None) => upper,
        _ => c,
    }
}

/// Uppercase a whole word character by character with [`simple_upper`].
pub fn upper_chars(word: &str) -> Vec<char> {
    word.chars().map(simple_upper).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowels() {
        for c in ['A', 'E', 'I', 'O', 'U', 'Y'] {
            assert!(is_vowel(c), "{c} should be a vowel");
        }
        assert!(!is_vowel('B'));
        assert!(!is_vowel('W'));
        assert!(!is_vowel('H'));
    }

    #[test]
    fn vowels_are_uppercase_only() {
        // Callers normalize first; lowercase never reaches the predicate.
        assert!(!is_vowel('a'));
        assert!(!is_vowel('y'));
    }

    #[test]
    fn pad_is_not_a_vowel() {
        assert!(!is_vowel(PAD_CHAR));
    }

    #[test]
    fn simple_upper_basic_latin() {
        assert_eq!(simple_upper('a'), 'A');
        assert_eq!(simple_upper('z'), 'Z');
        assert_eq!(simple_upper('A'), 'A');
        assert_eq!(simple_upper('1'), '1');
        assert_eq!(simple_upper(' '), ' ');
    }

    #[test]
    fn simple_upper_extended() {
        assert_eq!(simple_upper('\u{00F1}'), N_TILDE); // ñ -> Ñ
        assert_eq!(simple_upper('\u{00E7}'), '\u{00C7}'); // ç -> Ç
    }

    #[test]
    fn simple_upper_keeps_expanding_chars() {
        // ß uppercases to "SS"; keep one char per input char.
        assert_eq!(simple_upper('\u{00DF}'), '\u{00DF}');
    }

    #[test]
    fn simple_upper_dotless_i_is_locale_free() {
        // Plain ASCII i always maps to I, never to the Turkish dotted capital.
        assert_eq!(simple_upper('i'), 'I');
    }

    #[test]
    fn upper_chars_preserves_length() {
        let word = "stra\u{00DF}e";
        assert_eq!(upper_chars(word).len(), word.chars().count());
        assert_eq!(upper_chars("Xavier"), vec!['X', 'A', 'V', 'I', 'E', 'R']);
    }
}
