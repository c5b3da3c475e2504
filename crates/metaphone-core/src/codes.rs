// Encoding result: primary code plus an optional secondary code.

use std::fmt;

/// Default maximum number of symbols kept in each code.
pub const DEFAULT_MAX_CODE_LENGTH: usize = 4;

/// Symbol used for the "th" (theta) sound, as in "Thatcher" -> `0KR`.
pub const THETA: char = '0';

/// The pair of phonetic codes produced for one word.
///
/// `primary` is the most common reading. `secondary` is present only when an
/// alternative pronunciation (Germanic, Slavic, Romance, ...) yields a
/// different code after truncation; a secondary that equals the primary is
/// reported as absent, never as a duplicate or empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawCodes"))]
pub struct Codes {
    primary: String,
    secondary: Option<String>,
}

/// Wire shape of [`Codes`]; deserialized values pass through [`Codes::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCodes {
    primary: String,
    secondary: Option<String>,
}

#[cfg(feature = "serde")]
impl From<RawCodes> for Codes {
    fn from(raw: RawCodes) -> Self {
        Codes::new(raw.primary, raw.secondary)
    }
}

impl Codes {
    /// Build a result directly from its two parts.
    ///
    /// A `secondary` equal to `primary` is collapsed to `None`.
    pub fn new(primary: impl Into<String>, secondary: Option<String>) -> Self {
        let primary = primary.into();
        let secondary = secondary.filter(|s| *s != primary);
        Self { primary, secondary }
    }

    /// Finalize the two code buffers of a finished scan.
    ///
    /// Both buffers are truncated to `max_len` symbols, then the secondary is
    /// dropped if it matches the truncated primary exactly.
    pub fn from_buffers(mut primary: String, mut secondary: String, max_len: usize) -> Self {
        truncate_chars(&mut primary, max_len);
        truncate_chars(&mut secondary, max_len);
        let secondary = if secondary == primary { None } else { Some(secondary) };
        Self { primary, secondary }
    }

    /// The primary code.
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// The secondary code, if it differs from the primary.
    pub fn secondary(&self) -> Option<&str> {
        self.secondary.as_deref()
    }

    /// The secondary code, or the primary when there is no second reading.
    pub fn alternate(&self) -> &str {
        self.secondary.as_deref().unwrap_or(&self.primary)
    }

    /// Whether the word has two distinct readings.
    pub fn is_ambiguous(&self) -> bool {
        self.secondary.is_some()
    }

    /// Check whether any reading of `self` equals any reading of `other`.
    pub fn sounds_like(&self, other: &Codes) -> bool {
        let ours = [self.primary(), self.alternate()];
        let theirs = [other.primary(), other.alternate()];
        ours.iter().any(|a| theirs.contains(a))
    }

    /// Split into `(primary, secondary)`.
    pub fn into_parts(self) -> (String, Option<String>) {
        (self.primary, self.secondary)
    }
}

impl fmt::Display for Codes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.secondary {
            Some(secondary) => write!(f, "{}/{}", self.primary, secondary),
            None => f.write_str(&self.primary),
        }
    }
}

/// Truncate a string to at most `max` characters.
fn truncate_chars(s: &mut String, max: usize) {
    if let Some((idx, _)) = s.char_indices().nth(max) {
        s.truncate(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_buffers_truncates_both() {
        let codes = Codes::from_buffers("KPR0S".into(), "KPRTS".into(), 4);
        assert_eq!(codes.primary(), "KPR0");
        assert_eq!(codes.secondary(), Some("KPRT"));
    }

    #[test]
    fn from_buffers_keeps_short_codes() {
        let codes = Codes::from_buffers("SF".into(), "SFR".into(), 4);
        assert_eq!(codes.primary(), "SF");
        assert_eq!(codes.secondary(), Some("SFR"));
    }

    #[test]
    fn equal_after_truncation_collapses() {
        // Buffers differ only beyond the cut-off.
        let codes = Codes::from_buffers("ARNLT".into(), "ARNLF".into(), 4);
        assert_eq!(codes.primary(), "ARNL");
        assert_eq!(codes.secondary(), None);
    }

    #[test]
    fn empty_buffers_collapse_to_absent_secondary() {
        let codes = Codes::from_buffers(String::new(), String::new(), 4);
        assert_eq!(codes.primary(), "");
        assert_eq!(codes.secondary(), None);
    }

    #[test]
    fn new_collapses_duplicate() {
        let codes = Codes::new("RSK", Some("RSK".to_string()));
        assert_eq!(codes.secondary(), None);
        assert!(!codes.is_ambiguous());
    }

    #[test]
    fn alternate_falls_back_to_primary() {
        assert_eq!(Codes::new("RSK", None).alternate(), "RSK");
        assert_eq!(Codes::new("XMT", Some("SMT".into())).alternate(), "SMT");
    }

    #[test]
    fn sounds_like_crosses_readings() {
        let schmidt = Codes::new("XMT", Some("SMT".into()));
        let smith = Codes::new("SM0", Some("XMT".into()));
        let jones = Codes::new("JNS", Some("ANS".into()));
        assert!(schmidt.sounds_like(&smith));
        assert!(smith.sounds_like(&schmidt));
        assert!(!schmidt.sounds_like(&jones));
    }

    #[test]
    fn display() {
        assert_eq!(Codes::new("RSK", None).to_string(), "RSK");
        assert_eq!(Codes::new("KPR0", Some("KPRT".into())).to_string(), "KPR0/KPRT");
    }

    #[test]
    fn into_parts() {
        let (p, s) = Codes::new("XMT", Some("SMT".into())).into_parts();
        assert_eq!(p, "XMT");
        assert_eq!(s.as_deref(), Some("SMT"));
    }

    #[test]
    fn truncate_zero() {
        let mut s = String::from("ABC");
        truncate_chars(&mut s, 0);
        assert!(s.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_absent_secondary_as_null() {
        let json = serde_json::to_string(&Codes::new("RSK", None)).unwrap();
        assert_eq!(json, r#"{"primary":"RSK","secondary":null}"#);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_collapses_duplicate_secondary() {
        let codes: Codes =
            serde_json::from_str(r#"{"primary":"RSK","secondary":"RSK"}"#).unwrap();
        assert_eq!(codes.secondary(), None);
        assert!(!codes.is_ambiguous());

        let codes: Codes =
            serde_json::from_str(r#"{"primary":"XMT","secondary":"SMT"}"#).unwrap();
        assert_eq!(codes, Codes::new("XMT", Some("SMT".into())));
    }
}
