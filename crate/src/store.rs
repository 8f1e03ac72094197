//! The mutable linguistic state behind a [Pluralizer](crate::Pluralizer).

use crate::{error::Error, pattern::Pattern, rule::Rule};
use indexmap::IndexMap;
use regex::Regex;
use std::collections::{vec_deque, HashMap, HashSet, VecDeque};
use tracing::debug;

/// Which way a word is being inflected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Singular to plural.
    Plural,
    /// Plural to singular.
    Singular,
}

/// Holds the ordered plural and singular rule lists, the irregular pairs,
/// and the set of uncountable words.
///
/// Rules are checked in order and the first one that changes the word
/// wins. New rules go to the front of their list, so the most recently
/// registered rule always has the highest priority.
///
/// Every `add_*` method validates its arguments before changing anything,
/// so a failed call leaves the store as it was.
#[derive(Clone, Debug, Default)]
pub struct RuleStore {
    plural_rules: VecDeque<Rule>,
    singular_rules: VecDeque<Rule>,
    // singular => plural, in first-insertion order
    irregular_plurals: IndexMap<String, String>,
    // plural => singular, always equal to inverting `irregular_plurals` in
    // order
    irregular_singulars: HashMap<String, String>,
    uncountables: HashSet<String>,
}

impl RuleStore {
    /// Creates a store with no rules, irregulars, or uncountables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the front of the plural rule list.
    pub fn add_plural_rule(
        &mut self,
        pattern: impl Into<Pattern>,
        replacement: &str,
    ) -> Result<(), Error> {
        let rule = make_rule(pattern.into(), replacement)?;
        debug!(pattern = %rule.pattern(), replacement, "added plural rule");
        self.plural_rules.push_front(rule);
        Ok(())
    }

    /// Adds a rule to the front of the singular rule list.
    pub fn add_singular_rule(
        &mut self,
        pattern: impl Into<Pattern>,
        replacement: &str,
    ) -> Result<(), Error> {
        let rule = make_rule(pattern.into(), replacement)?;
        debug!(pattern = %rule.pattern(), replacement, "added singular rule");
        self.singular_rules.push_front(rule);
        Ok(())
    }

    /// Records an irregular pair. Both sides are stored lowercase. A later
    /// pair with the same singular replaces the earlier one.
    ///
    /// If two singulars share a plural, the singular that comes later in
    /// first-registration order is what `singular` returns for that plural.
    /// Nothing warns about such collisions.
    pub fn add_irregular(&mut self, singular: &str, plural: &str) -> Result<(), Error> {
        if singular.is_empty() || plural.is_empty() {
            return Err(Error::InvalidRule(
                "irregular pairs need both a singular and a plural".to_string(),
            ));
        }

        let singular = singular.to_lowercase();
        let plural = plural.to_lowercase();
        debug!(%singular, %plural, "added irregular");

        match self
            .irregular_plurals
            .insert(singular.clone(), plural.clone())
        {
            // A new key goes to the end of the order, so it wins.
            None => {
                self.irregular_singulars.insert(plural, singular);
            }
            // An existing key keeps its place, so we have to look at which
            // singular now comes last for both the old and the new plural.
            Some(previous) => {
                self.reindex_irregular_singular(&previous);
                self.reindex_irregular_singular(&plural);
            }
        }

        Ok(())
    }

    fn reindex_irregular_singular(&mut self, plural: &str) {
        let last = self
            .irregular_plurals
            .iter()
            .rev()
            .find(|(_, p)| p.as_str() == plural)
            .map(|(s, _)| s.clone());
        match last {
            Some(singular) => {
                self.irregular_singulars.insert(plural.to_string(), singular);
            }
            None => {
                self.irregular_singulars.remove(plural);
            }
        }
    }

    /// Marks a word, or every word matching a pattern, as uncountable.
    ///
    /// A [Pattern::Literal] is treated as a plain word and is added to the
    /// uncountable set, which is checked before anything else. A
    /// [Pattern::Compiled] is added to the front of both rule lists as a
    /// rule that leaves matching words alone. It takes part in normal rule
    /// ordering, so rules added after it can still override it.
    pub fn add_uncountable(&mut self, word: impl Into<Pattern>) -> Result<(), Error> {
        match word.into() {
            Pattern::Literal(word) => {
                if word.is_empty() {
                    return Err(Error::InvalidRule(
                        "uncountable word is empty".to_string(),
                    ));
                }
                let word = word.to_lowercase();
                debug!(%word, "added uncountable");
                self.uncountables.insert(word);
            }
            pattern @ Pattern::Compiled(_) => {
                let re = pattern.compile()?;
                debug!(pattern = %re, "added uncountable pattern");
                self.plural_rules.push_front(Rule::pass_through(re.clone()));
                self.singular_rules.push_front(Rule::pass_through(re));
            }
        }
        Ok(())
    }

    /// Rules for the given direction, highest priority first.
    pub fn rules(&self, direction: Direction) -> vec_deque::Iter<'_, Rule> {
        match direction {
            Direction::Plural => self.plural_rules.iter(),
            Direction::Singular => self.singular_rules.iter(),
        }
    }

    /// Looks up an irregular form. For [Direction::Plural] the key is a
    /// singular and the result is its plural. For [Direction::Singular] it
    /// is the other way around. The key must already be lowercase.
    pub fn irregular(&self, direction: Direction, key: &str) -> Option<&str> {
        let found = match direction {
            Direction::Plural => self.irregular_plurals.get(key),
            Direction::Singular => self.irregular_singulars.get(key),
        };
        found.map(String::as_str)
    }

    /// Returns true if the lowercase `word` is in the uncountable set. This
    /// does not look at uncountable patterns.
    pub fn is_uncountable(&self, word: &str) -> bool {
        self.uncountables.contains(word)
    }

    /// Iterates over the irregular pairs as `(singular, plural)` in the order
    /// they were first registered.
    pub fn irregulars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.irregular_plurals
            .iter()
            .map(|(s, p)| (s.as_str(), p.as_str()))
    }
}

fn make_rule(pattern: Pattern, replacement: &str) -> Result<Rule, Error> {
    if pattern.is_empty() {
        return Err(Error::InvalidRule("pattern is empty".to_string()));
    }
    if replacement.is_empty() {
        return Err(Error::InvalidRule("replacement is empty".to_string()));
    }
    let re: Regex = pattern.compile()?;
    Ok(Rule::new(re, replacement.to_string()))
}
