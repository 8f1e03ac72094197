use crate::{
    case,
    rule::Applied,
    store::{Direction, RuleStore},
};
use std::borrow::Cow;
use tracing::trace;

// Resolves a word in this order: uncountable set, irregular pairs, then the
// rule list. A rule that matches but leaves the word as it was does not stop
// the scan. A word nothing applies to comes back untouched.
pub(crate) fn process_word<'a>(
    store: &RuleStore,
    word: &'a str,
    direction: Direction,
) -> Cow<'a, str> {
    let lc_word = if case::is_lowercase(word) {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(word.to_lowercase())
    };

    if store.is_uncountable(&lc_word) {
        trace!(word, ?direction, "uncountable");
        return Cow::Borrowed(word);
    }

    if let Some(mapped) = store.irregular(direction, &lc_word) {
        trace!(word, mapped, ?direction, "irregular");
        return Cow::Owned(case::restore_case(word, mapped).into_owned());
    }

    for rule in store.rules(direction) {
        match rule.apply(word) {
            Some(Applied::Keep) => {
                trace!(word, pattern = %rule.pattern(), ?direction, "uncountable pattern");
                return Cow::Borrowed(word);
            }
            Some(Applied::Replaced(new)) if new != word => {
                trace!(word, %new, pattern = %rule.pattern(), ?direction, "rule applied");
                return Cow::Owned(new);
            }
            _ => (),
        }
    }

    Cow::Borrowed(word)
}
