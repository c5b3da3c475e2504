// Ordered (guard, action) rule tables.

use super::{CodeBuffers, Context};

/// Decides whether a rule applies at the cursor.
pub(crate) type Guard = fn(&Context<'_>) -> bool;

/// Emits symbols and returns how far the cursor advances (at least 1).
pub(crate) type Action = fn(&Context<'_>, &mut CodeBuffers) -> usize;

/// One entry of a letter's rule table.
pub(crate) struct Rule {
    pub name: &'static str,
    pub when: Guard,
    pub then: Action,
}

/// Guard for the unconditional last entry of a table.
pub(crate) fn always(_: &Context<'_>) -> bool {
    true
}

/// Guard for rules that only fire on the first letter of the word.
pub(crate) fn at_start(ctx: &Context<'_>) -> bool {
    ctx.is_first()
}

/// Apply the first rule in `rules` whose guard holds and return its step.
///
/// Every table ends with an [`always`] entry; a table that runs dry advances
/// the cursor by one without emitting anything.
pub(crate) fn apply_first(rules: &[Rule], ctx: &Context<'_>, codes: &mut CodeBuffers) -> usize {
    for rule in rules {
        if (rule.when)(ctx) {
            log::trace!("{}@{}: {}", ctx.current(), ctx.pos, rule.name);
            return (rule.then)(ctx, codes);
        }
    }
    1
}
