//! A single `(pattern, replacement)` rule and the substitution it performs.

use crate::case;
use regex::{Captures, Regex};

/// One entry in a plural or singular rule list.
#[derive(Clone, Debug)]
pub struct Rule {
    pattern: Regex,
    replacement: Replacement,
}

#[derive(Clone, Debug)]
enum Replacement {
    // A template like "$1ies". `$N` refers to capture group N.
    Template(String),
    // Leave the word alone and stop looking at further rules. Used for
    // pattern-based uncountables.
    Keep,
}

#[derive(Debug, PartialEq)]
pub(crate) enum Applied {
    Keep,
    Replaced(String),
}

impl Rule {
    pub(crate) fn new(pattern: Regex, template: String) -> Self {
        Self {
            pattern,
            replacement: Replacement::Template(template),
        }
    }

    pub(crate) fn pass_through(pattern: Regex) -> Self {
        Self {
            pattern,
            replacement: Replacement::Keep,
        }
    }

    /// The compiled pattern for this rule.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// The replacement template, or `None` for a pass-through rule created
    /// by registering an uncountable pattern.
    pub fn replacement(&self) -> Option<&str> {
        match &self.replacement {
            Replacement::Template(t) => Some(t.as_str()),
            Replacement::Keep => None,
        }
    }

    /// Returns `None` if the pattern does not match `word`. Otherwise the
    /// matched part of the word is replaced by the expanded template, recased
    /// to match the casing of the matched text.
    pub(crate) fn apply(&self, word: &str) -> Option<Applied> {
        let caps = self.pattern.captures(word)?;
        let template = match &self.replacement {
            Replacement::Template(t) => t,
            Replacement::Keep => return Some(Applied::Keep),
        };

        let matched = caps.get(0)?;
        let expanded = expand(template, &caps);
        let restored = case::restore_case(matched.as_str(), &expanded);

        let mut new = String::with_capacity(word.len() + restored.len());
        new.push_str(&word[..matched.start()]);
        new.push_str(&restored);
        new.push_str(&word[matched.end()..]);
        Some(Applied::Replaced(new))
    }
}

// We don't use `Captures::expand` because it treats "$1ies" as a reference to
// a group named "1ies". Here a `$` is followed by the longest run of digits
// that names an existing group. Groups that did not participate in the match
// expand to nothing and a `$` that names no group is kept as is.
fn expand(template: &str, caps: &Captures<'_>) -> String {
    let mut expanded = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        expanded.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();

        let group = (1..=digits).rev().find_map(|n| {
            after[..n]
                .parse::<usize>()
                .ok()
                .filter(|&i| i >= 1 && i < caps.len())
                .map(|i| (n, i))
        });

        match group {
            Some((n, i)) => {
                expanded.push_str(caps.get(i).map_or("", |m| m.as_str()));
                rest = &after[n..];
            }
            None => {
                expanded.push('$');
                rest = after;
            }
        }
    }

    expanded.push_str(rest);
    expanded
}
