// G: the GH cluster, GN nasals, Italian "gli", soft initial "ge-/gi-",
// "-ger-/-gy-", Italian "-aggi-/-oggi-" and the hard default.

use crate::engine::rule::{Rule, always, apply_first};
use crate::engine::{CodeBuffers, Context};

pub(crate) const G: &[Rule] = &[
    Rule { name: "gh", when: gh, then: gh_action },
    Rule { name: "gn", when: gn, then: gn_action },
    Rule { name: "tagliaro", when: tagliaro, then: tagliaro_action },
    Rule { name: "initial-soft", when: initial_soft, then: k_or_j },
    Rule { name: "ger-gy", when: ger_gy, then: k_or_j },
    Rule { name: "italian-soft", when: italian_soft, then: italian_soft_action },
    Rule { name: "hard-g", when: always, then: hard_g },
];

const GH: &[Rule] = &[
    Rule { name: "gh-after-consonant", when: after_consonant, then: k_pair },
    Rule { name: "ghislane", when: ghislane, then: ghislane_action },
    Rule { name: "gh-initial", when: first, then: k_pair },
    Rule { name: "parker", when: parker, then: silent_pair },
    Rule { name: "laugh", when: laugh, then: laugh_action },
    Rule { name: "gh-hard", when: gh_hard, then: k_pair },
    Rule { name: "gh-silent", when: always, then: silent_pair },
];

const GN: &[Rule] = &[
    Rule { name: "gn-vowel-initial", when: gn_vowel_initial, then: gn_vowel_initial_action },
    Rule { name: "gn-nasal", when: gn_nasal, then: gn_nasal_action },
    Rule { name: "gn-hard", when: always, then: gn_hard },
];

const ITALIAN: &[Rule] = &[
    Rule { name: "germanic-hard", when: germanic_hard, then: k_pair },
    Rule { name: "french-ier", when: french_ier, then: j_pair },
    Rule { name: "soft", when: always, then: j_or_k },
];

fn first(ctx: &Context<'_>) -> bool {
    ctx.is_first()
}

fn k_pair(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("K");
    2
}

fn j_pair(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("J");
    2
}

fn silent_pair(_: &Context<'_>, _: &mut CodeBuffers) -> usize {
    2
}

fn k_or_j(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.split("K", "J");
    2
}

fn j_or_k(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.split("J", "K");
    2
}

// -- GH -----------------------------------------------------------------------

fn gh(ctx: &Context<'_>) -> bool {
    ctx.is(1, 'H')
}

fn gh_action(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    apply_first(GH, ctx, out)
}

fn after_consonant(ctx: &Context<'_>) -> bool {
    ctx.pos > 0 && !ctx.vowel(-1)
}

/// "ghislane", "ghiradelli"
fn ghislane(ctx: &Context<'_>) -> bool {
    ctx.is_first() && ctx.is(2, 'I')
}

fn ghislane_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("J");
    2
}

/// Parker's rule: "hugh", "bough", "broughton" are silent.
fn parker(ctx: &Context<'_>) -> bool {
    (ctx.pos > 1 && ctx.any_char(-2, &['B', 'H', 'D']))
        || (ctx.pos > 2 && ctx.any_char(-3, &['B', 'H', 'D']))
        || (ctx.pos > 3 && ctx.any_char(-4, &['B', 'H']))
}

/// "laugh", "McLaughlin", "cough", "gough", "rough", "tough"
fn laugh(ctx: &Context<'_>) -> bool {
    ctx.pos > 2 && ctx.is(-1, 'U') && ctx.any_char(-3, &['C', 'G', 'L', 'R', 'T'])
}

fn laugh_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("F");
    2
}

fn gh_hard(ctx: &Context<'_>) -> bool {
    ctx.pos > 0 && !ctx.is(-1, 'I')
}

// -- GN -----------------------------------------------------------------------

fn gn(ctx: &Context<'_>) -> bool {
    ctx.is(1, 'N')
}

fn gn_action(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    apply_first(GN, ctx, out)
}

fn gn_vowel_initial(ctx: &Context<'_>) -> bool {
    ctx.pos == 1 && ctx.buf.is_vowel(0) && !ctx.slavo_germanic()
}

fn gn_vowel_initial_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.split("KN", "N");
    2
}

/// Not "cagney".
fn gn_nasal(ctx: &Context<'_>) -> bool {
    !ctx.any(2, 2, &["EY"]) && !ctx.is(1, 'Y') && !ctx.slavo_germanic()
}

fn gn_nasal_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.split("N", "KN");
    2
}

fn gn_hard(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("KN");
    2
}

// -- Remaining top-level rules ------------------------------------------------

/// "tagliaro"
fn tagliaro(ctx: &Context<'_>) -> bool {
    ctx.any(1, 2, &["LI"]) && !ctx.slavo_germanic()
}

fn tagliaro_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.split("KL", "L");
    2
}

/// "-ges-", "-gep-", "-gel-", "-gie-" at the beginning.
fn initial_soft(ctx: &Context<'_>) -> bool {
    ctx.is_first()
        && (ctx.is(1, 'Y')
            || ctx.any(
                1,
                2,
                &["ES", "EP", "EB", "EL", "EY", "IB", "IL", "IN", "IE", "EI", "ER"],
            ))
}

/// "-ger-", "-gy-", except "danger", "ranger", "manger" and "-rgy", "-ogy".
fn ger_gy(ctx: &Context<'_>) -> bool {
    (ctx.any(1, 2, &["ER"]) || ctx.is(1, 'Y'))
        && !ctx.word_starts(6, &["DANGER", "RANGER", "MANGER"])
        && !ctx.any_char(-1, &['E', 'I'])
        && !ctx.any(-1, 3, &["RGY", "OGY"])
}

/// Italian, e.g. "biaggi"
fn italian_soft(ctx: &Context<'_>) -> bool {
    ctx.any_char(1, &['E', 'I', 'Y']) || ctx.any(-1, 4, &["AGGI", "OGGI"])
}

fn italian_soft_action(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    apply_first(ITALIAN, ctx, out)
}

/// Obviously Germanic.
fn germanic_hard(ctx: &Context<'_>) -> bool {
    ctx.germanic_prefix() || ctx.any(1, 2, &["ET"])
}

/// Always soft before a French "-ier" ending.
fn french_ier(ctx: &Context<'_>) -> bool {
    ctx.any(1, 4, &["IER "])
}

fn hard_g(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("K");
    ctx.doubled('G')
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
    fn gh_after_consonant() {
        assert_eq!(codes("Burgh"), pair("PRK", None));
    }

    #[test]
    fn gh_word_initial() {
        assert_eq!(codes("Ghislane"), pair("JLN", None));
        assert_eq!(codes("Ghana"), pair("KN", None));
    }

    #[test]
    fn gh_silent_after_b_h_d() {
        assert_eq!(codes("Bough"), pair("P", None));
        assert_eq!(codes("Broughton"), pair("PRTN", None));
    }

    #[test]
    fn gh_as_f() {
        assert_eq!(codes("Laugh"), pair("LF", None));
        assert_eq!(codes("Tough"), pair("TF", None));
        assert_eq!(codes("McLaughlin"), pair("MKLF", None));
    }

    #[test]
    fn gh_hard_and_silent() {
        assert_eq!(codes("Magh"), pair("MK", None));
        assert_eq!(codes("Neigh"), pair("N", None));
    }

    #[test]
    fn gn() {
        assert_eq!(codes("Agnes"), pair("AKNS", Some("ANS")));
        assert_eq!(codes("Signed"), pair("SNT", Some("SKNT")));
        assert_eq!(codes("Cagney"), pair("KKN", None));
    }

    #[test]
    fn tagliaro() {
        assert_eq!(codes("Tagliaro"), pair("TKLR", Some("TLR")));
    }

    #[test]
    fn initial_soft() {
        assert_eq!(codes("Gerald"), pair("KRLT", Some("JRLT")));
        assert_eq!(codes("Gibson"), pair("KPSN", Some("JPSN")));
    }

    #[test]
    fn ger_gy() {
        assert_eq!(codes("Auger"), pair("AKR", Some("AJR")));
        assert_eq!(codes("Danger"), pair("TNJR", Some("TNKR")));
    }

    #[test]
    fn italian_and_germanic() {
        assert_eq!(codes("Biaggi"), pair("PJ", Some("PK")));
        assert_eq!(codes("Schlegel").0, "XLKL");
        assert_eq!(codes("Rogier"), pair("RJ", Some("RJR")));
    }

    #[test]
    fn hard_g() {
        assert_eq!(codes("Gregg"), pair("KRK", None));
    }
}
