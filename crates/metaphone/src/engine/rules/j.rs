// J: Spanish "jose"/"san jacinto", the initial J of Slavic names, the Spanish
// medial J and its suppression before consonants.

use crate::engine::rule::{Rule, always};
use crate::engine::{CodeBuffers, Context};

pub(crate) const J: &[Rule] = &[
    Rule { name: "spanish-h", when: spanish_h, then: spanish_h_action },
    Rule { name: "jose", when: jose, then: jose_action },
    Rule { name: "j-initial", when: initial, then: initial_action },
    Rule { name: "spanish-medial", when: spanish_medial, then: spanish_medial_action },
    Rule { name: "j-final", when: last, then: final_action },
    Rule { name: "j", when: plain, then: j },
    Rule { name: "j-suppressed", when: always, then: suppressed },
];

fn jose(ctx: &Context<'_>) -> bool {
    ctx.any(0, 4, &["JOSE"])
}

/// "Jose" as a whole word, or anything after "San ".
fn spanish_h(ctx: &Context<'_>) -> bool {
    (jose(ctx) && ctx.is_first() && ctx.is(4, ' ')) || ctx.word_starts(4, &["SAN "])
}

fn spanish_h_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("H");
    1
}

fn jose_action(_: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.split("J", "H");
    1
}

/// "Yankelovich" / "Jankelowicz"
fn initial(ctx: &Context<'_>) -> bool {
    ctx.is_first()
}

fn initial_action(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.split("J", "A");
    ctx.doubled('J')
}

/// "bajador"
fn spanish_medial(ctx: &Context<'_>) -> bool {
    ctx.vowel(-1) && !ctx.slavo_germanic() && ctx.any_char(1, &['A', 'O'])
}

fn spanish_medial_action(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.split("J", "H");
    ctx.doubled('J')
}

fn last(ctx: &Context<'_>) -> bool {
    ctx.is_last()
}

fn final_action(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.primary_only("J");
    ctx.doubled('J')
}

fn plain(ctx: &Context<'_>) -> bool {
    !ctx.any_char(1, &['L', 'T', 'K', 'S', 'N', 'M', 'B', 'Z'])
        && !ctx.any_char(-1, &['S', 'K', 'L'])
}

fn j(ctx: &Context<'_>, out: &mut CodeBuffers) -> usize {
    out.both("J");
    ctx.doubled('J')
}

fn suppressed(ctx: &Context<'_>, _: &mut CodeBuffers) -> usize {
    ctx.doubled('J')
}
