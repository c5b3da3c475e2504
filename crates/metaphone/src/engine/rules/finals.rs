// L, R and X: letters whose only exceptions depend on how the word ends
// (Spanish "-illo/-illa/-alle", French "-ier" and "-aux").

use crate::engine::rule::{Rule, always};
use crate::engine::{CodeBuffers, Context};

// -- L ------------------------------------------------------------------------

pub(crate) const L: &[Rule] = &[
    Rule { name: "spanish-ll", when: spanish_ll, then: spanish_ll_action },
    Rule { name: "l", when: always, then: l },
];

/// "cabrillo", "gallegos": the doubled L is silent in the alternate reading.
fn spanish_ll(ctx: &Context<'_>) -> bool {
    if !ctx.is(1, 'L') {
        return false;
    }
    let len = ctx.buf.len() as isize;
    let ends_spanish = ctx.buf.matches_any_string(len - 2, 2, &["AS", "OS"])
        || ctx.buf.matches_any_char(len - 1, &['A', 'O']);
    (ctx.pos + 3 == ctx.buf.len() && ctx.any(-1, 4, &["ILLO", "ILLA", "ALLE"]))
        || (ends_spanish && ctx.any(-1, 4, &["ALLE"]))
}

fn spanish_ll_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.primary_only("L");
    2
}

fn l(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("L");
    ctx.doubled('L')
}

// -- R ------------------------------------------------------------------------

pub(crate) const R: &[Rule] = &[
    Rule { name: "french-ier", when: french_ier, then: french_ier_action },
    Rule { name: "r", when: always, then: r },
];

/// "rogier", but not "hochmeier".
fn french_ier(ctx: &Context<'_>) -> bool {
    ctx.is_last()
        && !ctx.slavo_germanic()
        && ctx.any(-2, 2, &["IE"])
        && !ctx.any(-4, 2, &["ME", "MA"])
}

fn french_ier_action(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.secondary_only("R");
    ctx.doubled('R')
}

fn r(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("R");
    ctx.doubled('R')
}

// -- X ------------------------------------------------------------------------

pub(crate) const X: &[Rule] = &[
    Rule { name: "french-silent", when: french_silent, then: x_step },
    Rule { name: "x", when: always, then: x },
];

/// "breaux"
fn french_silent(ctx: &Context<'_>) -> bool {
    ctx.is_last() && (ctx.any(-3, 3, &["IAU", "EAU"]) || ctx.any(-2, 2, &["AU", "OU"]))
}

fn x_step(ctx: &Context<'_>, _: &mut CodeBuffers) -> usize {
    if ctx.any_char(1, &['C', 'X']) { 2 } else { 1 }
}

fn x(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("KS");
    x_step(ctx, out)
}
