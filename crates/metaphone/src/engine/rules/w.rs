// W: "wr", the initial W/WH, and the Slavic/Germanic endings where W is
// heard as F ("Arnow" vs "Arnoff", "-owski", "-witz").
//
// Unlike other letters, the initial W emits and then keeps going: the tail
// rules below still decide the step and may add the F alternate.

use crate::engine::rule::{Rule, always, apply_first};
use crate::engine::rules::simple::skip;
use crate::engine::{CodeBuffers, Context};

pub(crate) const W: &[Rule] = &[
    Rule { name: "wr", when: wr, then: wr_action },
    Rule { name: "w-initial", when: initial, then: initial_action },
    Rule { name: "w-tail", when: always, then: tail },
];

const TAIL: &[Rule] = &[
    Rule { name: "w-as-f", when: heard_as_f, then: heard_as_f_action },
    Rule { name: "wicz-witz", when: wicz, then: wicz_action },
    Rule { name: "w-silent", when: always, then: skip },
];

fn wr(ctx: &Context<'_>) -> bool {
    ctx.any(0, 2, &["WR"])
}

fn wr_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("R");
    2
}

fn initial(ctx: &Context<'_>) -> bool {
    ctx.is_first() && (ctx.vowel(1) || ctx.any(0, 2, &["WH"]))
}

/// "Wasserman" should match "Vasserman"; "Uomo" should match "Womo".
fn initial_action(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    if ctx.vowel(1) {
        out.split("A", "F");
    } else {
        out.both("A");
    }
    tail(ctx, out)
}

fn tail(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    apply_first(TAIL, ctx, out)
}

fn heard_as_f(ctx: &Context<'_>) -> bool {
    (ctx.is_last() && ctx.vowel(-1))
        || ctx.any(-1, 5, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
        || ctx.word_starts(3, &["SCH"])
}

fn heard_as_f_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.secondary_only("F");
    1
}

/// Polish, e.g. "filipowicz"
fn wicz(ctx: &Context<'_>) -> bool {
    ctx.any(0, 4, &["WICZ", "WITZ"])
}

fn wicz_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.split("TS", "FX");
    4
}
