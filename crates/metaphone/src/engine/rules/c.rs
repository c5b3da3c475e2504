// C: Germanic "-ach-", "caesar", Italian "chia"/"cci"/"cia", the CH digraph,
// Slavic "cz", double C, "ck/cg/cq" and the soft "ci/ce/cy".

use crate::engine::rule::{Rule, always, apply_first};
use crate::engine::{CodeBuffers, Context};

pub(crate) const C: &[Rule] = &[
    Rule { name: "germanic-ach", when: germanic_ach, then: k_digraph },
    Rule { name: "caesar", when: caesar, then: caesar_action },
    Rule { name: "chianti", when: chianti, then: k_digraph },
    Rule { name: "ch", when: ch, then: ch_action },
    Rule { name: "czerny", when: czerny, then: czerny_action },
    Rule { name: "focaccia", when: focaccia, then: focaccia_action },
    Rule { name: "double-c", when: double_c, then: double_c_action },
    Rule { name: "ck-cg-cq", when: ck_cg_cq, then: k_digraph },
    Rule { name: "italian-ci", when: italian_ci, then: italian_ci_action },
    Rule { name: "soft-c", when: soft_c, then: soft_c_action },
    Rule { name: "hard-c", when: always, then: hard_c },
];

/// Sub-table for the CH digraph.
const CH: &[Rule] = &[
    Rule { name: "michael", when: michael, then: michael_action },
    Rule { name: "greek-initial", when: greek_initial, then: k_digraph },
    Rule { name: "germanic-kh", when: germanic_kh, then: k_digraph },
    Rule { name: "mc", when: mc_prefix, then: k_digraph },
    Rule { name: "ch-medial", when: not_first, then: ch_medial },
    Rule { name: "ch-initial", when: always, then: ch_initial },
];

/// Sub-table for CC (outside "Mc-").
const CC: &[Rule] = &[
    Rule { name: "accident", when: accident, then: accident_action },
    Rule { name: "bacci", when: cc_soft, then: bacci_action },
    Rule { name: "cc-hard", when: always, then: k_digraph },
];

fn k_digraph(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("K");
    2
}

fn not_first(ctx: &Context<'_>) -> bool {
    !ctx.is_first()
}

// -- Top-level guards ---------------------------------------------------------

/// "bacher", "macher", "wachtler" but not "achievement".
fn germanic_ach(ctx: &Context<'_>) -> bool {
    ctx.pos > 1
        && !ctx.vowel(-2)
        && ctx.any(-1, 3, &["ACH"])
        && !ctx.is(2, 'I')
        && (!ctx.is(2, 'E') || ctx.any(-2, 6, &["BACHER", "MACHER"]))
}

fn caesar(ctx: &Context<'_>) -> bool {
    ctx.is_first() && ctx.any(0, 6, &["CAESAR"])
}

fn caesar_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("S");
    2
}

fn chianti(ctx: &Context<'_>) -> bool {
    ctx.any(0, 4, &["CHIA"])
}

fn ch(ctx: &Context<'_>) -> bool {
    ctx.any(0, 2, &["CH"])
}

fn ch_action(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    apply_first(CH, ctx, out)
}

fn czerny(ctx: &Context<'_>) -> bool {
    ctx.any(0, 2, &["CZ"]) && !ctx.any(-2, 4, &["WICZ"])
}

fn czerny_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.split("S", "X");
    2
}

fn focaccia(ctx: &Context<'_>) -> bool {
    ctx.any(1, 3, &["CIA"])
}

fn focaccia_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("X");
    3
}

/// Double C, but not "McClellan".
fn double_c(ctx: &Context<'_>) -> bool {
    ctx.any(0, 2, &["CC"]) && !(ctx.pos == 1 && ctx.buf.char_at(0) == Some('M'))
}

fn double_c_action(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    apply_first(CC, ctx, out)
}

fn ck_cg_cq(ctx: &Context<'_>) -> bool {
    ctx.any(0, 2, &["CK", "CG", "CQ"])
}

fn italian_ci(ctx: &Context<'_>) -> bool {
    ctx.any(0, 3, &["CIO", "CIE", "CIA"])
}

fn italian_ci_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.split("S", "X");
    2
}

fn soft_c(ctx: &Context<'_>) -> bool {
    ctx.any(0, 2, &["CI", "CE", "CY"])
}

fn soft_c_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("S");
    2
}

/// Plain K. "Mac Caffrey" and "Mac Gregor" skip the space and the next initial.
fn hard_c(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("K");
    if ctx.any(1, 2, &[" C", " Q", " G"]) {
        3
    } else if ctx.any_char(1, &['C', 'K', 'Q']) && !ctx.any(1, 2, &["CE", "CI"]) {
        2
    } else {
        1
    }
}

// -- CH -----------------------------------------------------------------------

fn michael(ctx: &Context<'_>) -> bool {
    ctx.pos > 0 && ctx.any(0, 4, &["CHAE"])
}

fn michael_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.split("K", "X");
    2
}

/// Greek roots: "chemistry", "chorus", "character", "charisma" but not "chore".
fn greek_initial(ctx: &Context<'_>) -> bool {
    ctx.is_first()
        && (ctx.any(1, 5, &["HARAC", "HARIS"]) || ctx.any(1, 3, &["HOR", "HYM", "HIA", "HEM"]))
        && !ctx.word_starts(5, &["CHORE"])
}

/// Germanic, Greek or otherwise "ch" for a "kh" sound: "architect" but not
/// "arch"; "orchestra", "orchid"; "wachtler", "wechsler" but not "tichner".
fn germanic_kh(ctx: &Context<'_>) -> bool {
    ctx.germanic_prefix()
        || ctx.any(-2, 6, &["ORCHES", "ARCHIT", "ORCHID"])
        || ctx.any_char(2, &['T', 'S'])
        || ((ctx.any_char(-1, &['A', 'O', 'U', 'E']) || ctx.is_first())
            && ctx.any_char(2, &['L', 'R', 'N', 'M', 'B', 'H', 'F', 'V', 'W', ' ']))
}

/// "McHugh"
fn mc_prefix(ctx: &Context<'_>) -> bool {
    ctx.pos > 0 && ctx.word_starts(2, &["MC"])
}

fn ch_medial(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.split("X", "K");
    2
}

fn ch_initial(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("X");
    2
}

// -- CC -----------------------------------------------------------------------

/// "bellocchio" but not "bacchus"
fn cc_soft(ctx: &Context<'_>) -> bool {
    ctx.any_char(2, &['I', 'E', 'H']) && !ctx.any(2, 2, &["HU"])
}

/// "accident", "accede", "succeed"
fn accident(ctx: &Context<'_>) -> bool {
    cc_soft(ctx)
        && ((ctx.pos == 1 && ctx.is(-1, 'A')) || ctx.any(-1, 5, &["UCCEE", "UCCES"]))
}

fn accident_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("KS");
    3
}

/// "bacci", "bertucci" and other Italian
fn bacci_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("X");
    3
}

#[cfg(test)]
mod tests {
    use crate::double_metaphone;

    fn codes(word: &str) -> (String, Option<String>) {
        double_metaphone(word).into_parts()
    }

    fn pair(primary: &str, secondary: Option<&str>) -> (String, Option<String>) {
        (primary.to_string(), secondary.map(str::to_string))
    }

    #[test]
    fn germanic_ach() {
        assert_eq!(codes("Bacher"), pair("PKR", None));
        assert_eq!(codes("Wachtler"), pair("AKTL", Some("FKTL")));
    }

    #[test]
    fn caesar() {
        assert_eq!(codes("Caesar"), pair("SSR", None));
    }

    #[test]
    fn chianti() {
        assert_eq!(codes("Chianti"), pair("KNT", None));
    }

    #[test]
    fn michael() {
        assert_eq!(codes("Michael"), pair("MKL", Some("MXL")));
    }

    #[test]
    fn greek_ch() {
        assert_eq!(codes("Chemistry"), pair("KMST", None));
        assert_eq!(codes("Chorus"), pair("KRS", None));
        // "chore" is excluded from the Greek rule
        assert_eq!(codes("Chore"), pair("XR", None));
    }

    #[test]
    fn germanic_ch() {
        assert_eq!(codes("Architect"), pair("ARKT", None));
        assert_eq!(codes("Orchestra"), pair("ARKS", None));
        assert_eq!(codes("Orchid"), pair("ARKT", None));
        assert_eq!(codes("Von Bach"), pair("FNPK", None));
        assert_eq!(codes("Charles"), pair("XRLS", None));
    }

    #[test]
    fn mc_prefix() {
        assert_eq!(codes("McHugh"), pair("MK", None));
    }

    #[test]
    fn medial_and_initial_ch() {
        assert_eq!(codes("Richard"), pair("RXRT", Some("RKRT")));
        assert_eq!(codes("Church"), pair("XRX", Some("XRK")));
    }

    #[test]
    fn czerny() {
        assert_eq!(codes("Czerny"), pair("SRN", Some("XRN")));
    }

    #[test]
    fn focaccia() {
        assert_eq!(codes("Focaccia"), pair("FKX", None));
    }

    #[test]
    fn double_c() {
        assert_eq!(codes("Accident"), pair("AKST", None));
        assert_eq!(codes("Succeed"), pair("SKST", None));
        assert_eq!(codes("Bellocchio"), pair("PLX", None));
        assert_eq!(codes("Bacchus"), pair("PKS", None));
        assert_eq!(codes("McClellan"), pair("MKLL", None));
    }

    #[test]
    fn ck_and_soft_c() {
        assert_eq!(codes("Dick"), pair("TK", None));
        assert_eq!(codes("Cicero"), pair("SSR", None));
        assert_eq!(codes("Ciao"), pair("S", Some("X")));
    }

    #[test]
    fn mac_with_space() {
        assert_eq!(codes("Mac Gregor"), pair("MKRK", None));
    }
}
