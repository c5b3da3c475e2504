// S and Z.
//
// S carries most of the Germanic and Dutch handling: "sch-" (Schlesinger's
// rule), "sh" before Germanic endings, and the anglicised "sm-/sn-" forms
// that let "Smith" meet "Schmidt".

use crate::engine::rule::{Rule, always, apply_first};
use crate::engine::{CodeBuffers, Context};

// -- S ------------------------------------------------------------------------

pub(crate) const S: &[Rule] = &[
    Rule { name: "isle", when: isle, then: silent },
    Rule { name: "sugar", when: sugar, then: sugar_action },
    Rule { name: "sh", when: sh, then: sh_action },
    Rule { name: "sio-sia", when: sio_sia, then: sio_sia_action },
    Rule { name: "anglicized", when: anglicized, then: anglicized_action },
    Rule { name: "sc", when: sc, then: sc_action },
    Rule { name: "french-final", when: french_final, then: french_final_action },
    Rule { name: "s", when: always, then: s },
];

/// Sub-table for "sc-".
const SC: &[Rule] = &[
    Rule { name: "sch-er-en", when: sch_er_en, then: sch_er_en_action },
    Rule { name: "sch-dutch", when: sch_dutch, then: sk },
    Rule { name: "sch-initial", when: sch_initial, then: sch_initial_action },
    Rule { name: "sch", when: sch, then: sch_action },
    Rule { name: "sc-soft", when: sc_soft, then: sc_soft_action },
    Rule { name: "sk", when: always, then: sk },
];

fn silent(_: &Context<'_>, _: &mut CodeBuffers) -> usize {
    1
}

/// "island", "isle", "carlisle", "carlysle"
fn isle(ctx: &Context<'_>) -> bool {
    ctx.any(-1, 3, &["ISL", "YSL"])
}

fn sugar(ctx: &Context<'_>) -> bool {
    ctx.is_first() && ctx.any(0, 5, &["SUGAR"])
}

fn sugar_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.split("X", "S");
    1
}

fn sh(ctx: &Context<'_>) -> bool {
    ctx.any(0, 2, &["SH"])
}

fn sh_action(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    if ctx.any(1, 4, &["HEIM", "HOEK", "HOLM", "HOLZ"]) {
        out.both("S");
    } else {
        out.both("X");
    }
    2
}

/// Italian and Armenian.
fn sio_sia(ctx: &Context<'_>) -> bool {
    ctx.any(0, 3, &["SIO", "SIA"]) || ctx.any(0, 4, &["SIAN"])
}

fn sio_sia_action(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    if ctx.slavo_germanic() {
        out.both("S");
    } else {
        out.split("S", "X");
    }
    3
}

/// "smith" matches "schmidt", "snider" matches "schneider"; also Slavic "-sz-".
fn anglicized(ctx: &Context<'_>) -> bool {
    (ctx.is_first() && ctx.any_char(1, &['M', 'N', 'L', 'W'])) || ctx.is(1, 'Z')
}

fn anglicized_action(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.split("S", "X");
    ctx.doubled('Z')
}

fn sc(ctx: &Context<'_>) -> bool {
    ctx.any(0, 2, &["SC"])
}

fn sc_action(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    apply_first(SC, ctx, out)
}

/// "resnais", "artois"
fn french_final(ctx: &Context<'_>) -> bool {
    ctx.is_last() && ctx.any(-2, 2, &["AI", "OI"])
}

fn french_final_action(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.secondary_only("S");
    s_step(ctx)
}

fn s(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("S");
    s_step(ctx)
}

fn s_step(ctx: &Context<'_>) -> usize {
    if ctx.any_char(1, &['S', 'Z']) { 2 } else { 1 }
}

// -- SC -----------------------------------------------------------------------

fn sch(ctx: &Context<'_>) -> bool {
    ctx.is(2, 'H')
}

/// "schermerhorn", "schenker"
fn sch_er_en(ctx: &Context<'_>) -> bool {
    sch(ctx) && ctx.any(3, 2, &["ER", "EN"])
}

fn sch_er_en_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.split("X", "SK");
    3
}

/// Dutch origin: "school", "schooner"
fn sch_dutch(ctx: &Context<'_>) -> bool {
    sch(ctx) && ctx.any(3, 2, &["OO", "UY", "ED", "EM"])
}

fn sch_initial(ctx: &Context<'_>) -> bool {
    sch(ctx) && ctx.is_first() && !ctx.buf.is_vowel(3) && !ctx.is(3, 'W')
}

fn sch_initial_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.split("X", "S");
    3
}

fn sch_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("X");
    3
}

fn sc_soft(ctx: &Context<'_>) -> bool {
    ctx.any_char(2, &['I', 'E', 'Y'])
}

fn sc_soft_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("S");
    3
}

fn sk(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("SK");
    3
}

// -- Z ------------------------------------------------------------------------

pub(crate) const Z: &[Rule] = &[
    Rule { name: "pinyin", when: pinyin, then: pinyin_action },
    Rule { name: "slavic", when: slavic, then: slavic_action },
    Rule { name: "z", when: always, then: z },
];

/// Chinese pinyin, e.g. "zhao"
fn pinyin(ctx: &Context<'_>) -> bool {
    ctx.is(1, 'H')
}

fn pinyin_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("J");
    2
}

fn slavic(ctx: &Context<'_>) -> bool {
    ctx.any(1, 2, &["ZO", "ZI", "ZA"])
        || (ctx.slavo_germanic() && ctx.pos > 0 && !ctx.is(-1, 'T'))
}

fn slavic_action(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.split("S", "TS");
    ctx.doubled('Z')
}

fn z(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("S");
    ctx.doubled('Z')
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
    fn silent_s_in_isle() {
        assert_eq!(codes("Island"), pair("ALNT", None));
        assert_eq!(codes("Carlisle"), pair("KRLL", None));
    }

    #[test]
    fn sugar() {
        assert_eq!(codes("Sugar"), pair("XKR", Some("SKR")));
    }

    #[test]
    fn sh() {
        assert_eq!(codes("Shaw"), pair("X", Some("XF")));
        assert_eq!(codes("Hirsheim"), pair("HRSM", None));
    }

    #[test]
    fn italian_sio() {
        assert_eq!(codes("Sian"), pair("SN", Some("XN")));
        assert_eq!(codes("Asia"), pair("AS", Some("AX")));
        assert_eq!(codes("Mission"), pair("MSN", None));
    }

    #[test]
    fn anglicized_german() {
        assert_eq!(codes("Smith"), pair("SM0", Some("XMT")));
        assert_eq!(codes("Snider"), pair("SNTR", Some("XNTR")));
        assert_eq!(codes("Schmidt"), pair("XMT", Some("SMT")));
        assert_eq!(codes("Schneider"), pair("XNTR", Some("SNTR")));
    }

    #[test]
    fn schlesinger() {
        assert_eq!(codes("School"), pair("SKL", None));
        assert_eq!(codes("Schenker"), pair("XNKR", Some("SKNK")));
        assert_eq!(codes("Fischer"), pair("FXR", Some("FSKR")));
        assert_eq!(codes("Science"), pair("SNS", None));
        assert_eq!(codes("Scott"), pair("SKT", None));
    }

    #[test]
    fn french_final_s() {
        assert_eq!(codes("Artois"), pair("ART", Some("ARTS")));
        assert_eq!(codes("Bass"), pair("PS", None));
    }

    #[test]
    fn z_rules() {
        assert_eq!(codes("Zhao"), pair("J", None));
        assert_eq!(codes("Mazzoni"), pair("MSN", Some("MTSN")));
        assert_eq!(codes("Kaz"), pair("KS", Some("KTS")));
        assert_eq!(codes("Fritz"), pair("FRTS", None));
        assert_eq!(codes("Lopez"), pair("LPS", None));
    }
}
