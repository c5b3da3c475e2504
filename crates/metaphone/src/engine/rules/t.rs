// T: "-tion", "-tia"/"-tch", the TH digraph and the doubled T/TD.

use crate::engine::rule::{Rule, always};
use crate::engine::{CodeBuffers, Context};
use metaphone_core::codes::THETA;

pub(crate) const T: &[Rule] = &[
    Rule { name: "tion", when: tion, then: tion_action },
    Rule { name: "tia-tch", when: tia_tch, then: tion_action },
    Rule { name: "th-hard", when: th_hard, then: th_hard_action },
    Rule { name: "th", when: th, then: th_action },
    Rule { name: "t", when: always, then: t },
];

fn tion(ctx: &Context<'_>) -> bool {
    ctx.any(0, 4, &["TION"])
}

fn tia_tch(ctx: &Context<'_>) -> bool {
    ctx.any(0, 3, &["TIA", "TCH"])
}

fn tion_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("X");
    3
}

fn th(ctx: &Context<'_>) -> bool {
    ctx.any(0, 2, &["TH"]) || ctx.any(0, 3, &["TTH"])
}

/// "thomas", "thames" or Germanic.
fn th_hard(ctx: &Context<'_>) -> bool {
    th(ctx) && (ctx.any(2, 2, &["OM", "AM"]) || ctx.germanic_prefix())
}

fn th_hard_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("T");
    2
}

fn th_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    let mut theta = [0u8; 4];
    out.split(THETA.encode_utf8(&mut theta), "T");
    2
}

fn t(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("T");
    if ctx.any_char(1, &['T', 'D']) { 2 } else { 1 }
}
