// Letters with one sound and at most a doubled-letter or digraph exception:
// vowels, B, D, F, H, K, M, N, Ñ, P, Q, V and everything without a rule.

use crate::engine::rule::{Rule, always, at_start};
use crate::engine::{CodeBuffers, Context};

// -- Vowels -----------------------------------------------------------------

/// Vowels only count at the start of the word, where they all map to `A`.
pub(crate) const VOWEL: &[Rule] = &[
    Rule { name: "initial-vowel", when: at_start, then: initial_vowel },
    Rule { name: "vowel", when: always, then: skip },
];

fn initial_vowel(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("A");
    1
}

/// Advance one position without emitting.
pub(crate) fn skip(_: &Context<'_>, _: &mut CodeBuffers) -> usize {
    1
}

// -- B ------------------------------------------------------------------------

/// "-mb" as in "dumb" is consumed by the M rule, so B is always `P` here.
pub(crate) const B: &[Rule] = &[Rule { name: "b", when: always, then: b }];

fn b(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("P");
    ctx.doubled('B')
}

// -- D ------------------------------------------------------------------------

pub(crate) const D: &[Rule] = &[
    Rule { name: "dg-soft", when: dg_soft, then: dg_soft_action },
    Rule { name: "dg-hard", when: dg, then: dg_hard },
    Rule { name: "dt-dd", when: dt_dd, then: dt_dd_action },
    Rule { name: "d", when: always, then: d },
];

fn dg(ctx: &Context<'_>) -> bool {
    ctx.any(0, 2, &["DG"])
}

/// "edge"
fn dg_soft(ctx: &Context<'_>) -> bool {
    dg(ctx) && ctx.any_char(2, &['I', 'E', 'Y'])
}

fn dg_soft_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("J");
    3
}

/// "edgar"
fn dg_hard(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("TK");
    2
}

fn dt_dd(ctx: &Context<'_>) -> bool {
    ctx.any(0, 2, &["DT", "DD"])
}

fn dt_dd_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("T");
    2
}

fn d(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("T");
    1
}

// -- F, K, N, Q, V ------------------------------------------------------------

pub(crate) const F: &[Rule] = &[Rule { name: "f", when: always, then: f }];

fn f(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("F");
    ctx.doubled('F')
}

pub(crate) const K: &[Rule] = &[Rule { name: "k", when: always, then: k }];

fn k(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("K");
    ctx.doubled('K')
}

pub(crate) const N: &[Rule] = &[Rule { name: "n", when: always, then: n }];

fn n(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("N");
    ctx.doubled('N')
}

pub(crate) const N_TILDE: &[Rule] = &[Rule { name: "n-tilde", when: always, then: n_tilde }];

fn n_tilde(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("N");
    1
}

pub(crate) const Q: &[Rule] = &[Rule { name: "q", when: always, then: q }];

fn q(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("K");
    ctx.doubled('Q')
}

pub(crate) const V: &[Rule] = &[Rule { name: "v", when: always, then: v }];

fn v(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("F");
    ctx.doubled('V')
}

// -- H ------------------------------------------------------------------------

/// H is kept only word-initially before a vowel or between two vowels.
pub(crate) const H: &[Rule] = &[
    Rule { name: "h-voiced", when: h_voiced, then: h },
    Rule { name: "h-silent", when: always, then: skip },
];

fn h_voiced(ctx: &Context<'_>) -> bool {
    (ctx.is_first() || ctx.vowel(-1)) && ctx.vowel(1)
}

fn h(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("H");
    2
}

// -- M ------------------------------------------------------------------------

pub(crate) const M: &[Rule] = &[
    Rule { name: "umb-mm", when: umb_or_mm, then: m_pair },
    Rule { name: "m", when: always, then: m },
];

/// "dumb", "thumb", "plumber" and doubled M swallow the following letter.
fn umb_or_mm(ctx: &Context<'_>) -> bool {
    (ctx.any(-1, 3, &["UMB"]) && (ctx.pos + 2 == ctx.buf.len() || ctx.any(2, 2, &["ER"])))
        || ctx.is(1, 'M')
}

fn m_pair(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("M");
    2
}

fn m(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("M");
    1
}

// -- P ------------------------------------------------------------------------

pub(crate) const P: &[Rule] = &[
    Rule { name: "ph", when: ph, then: ph_action },
    Rule { name: "p", when: always, then: p },
];

fn ph(ctx: &Context<'_>) -> bool {
    ctx.is(1, 'H')
}

fn ph_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("F");
    2
}

/// Also covers "campbell" and "raspberry".
fn p(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("P");
    if ctx.any_char(1, &['P', 'B']) { 2 } else { 1 }
}

// -- Anything else ------------------------------------------------------------

pub(crate) const SILENT: &[Rule] = &[Rule { name: "silent", when: always, then: skip }];
