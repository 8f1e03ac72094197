//! The [Pluralizer] struct.
//!
//! # Examples
//!
//! ```
//! use en_pluralize::Pluralizer;
//!
//! let mut p = Pluralizer::new();
//! assert_eq!(p.plural("dog").unwrap(), "dogs");
//! assert_eq!(p.singular("Children").unwrap(), "Child");
//! assert_eq!(p.pluralize("mouse", 3, true).unwrap(), "3 mice");
//!
//! p.add_irregular("cow", "kine").unwrap();
//! assert_eq!(p.plural("cow").unwrap(), "kine");
//! ```
use crate::{
    count::IntoCount,
    dataset::Dataset,
    error::Error,
    pattern::Pattern,
    store::{Direction, RuleStore},
    transform,
};
use std::borrow::Cow;
use tracing::debug;

/// Converts English nouns between singular and plural.
///
/// Each `Pluralizer` owns its own rules. [Pluralizer::new] starts with the
/// bundled English data and [Pluralizer::empty] starts with nothing. Rules
/// added later take priority over rules added earlier, including the
/// bundled ones, so you can always override the defaults.
///
/// Lookups take `&self` and a `Pluralizer` is `Sync`, so it can be shared
/// between threads for reading. Adding rules takes `&mut self`.
#[derive(Clone, Debug)]
pub struct Pluralizer {
    store: RuleStore,
}

impl Pluralizer {
    /// Creates a pluralizer loaded with the bundled English data.
    pub fn new() -> Self {
        let mut store = RuleStore::new();
        Dataset::bundled()
            .apply_to(&mut store)
            .expect("Could not load the bundled dataset");
        Self { store }
    }

    /// Creates a pluralizer with no rules at all. Every word passes through
    /// unchanged until rules are added.
    pub fn empty() -> Self {
        Self {
            store: RuleStore::new(),
        }
    }

    /// Creates a pluralizer with only the data in `dataset`.
    pub fn from_dataset(dataset: &Dataset) -> Result<Self, Error> {
        let mut p = Self::empty();
        p.load(dataset)?;
        Ok(p)
    }

    /// Loads `dataset` on top of the existing rules. If any entry is invalid
    /// nothing from the dataset is kept.
    pub fn load(&mut self, dataset: &Dataset) -> Result<(), Error> {
        let mut store = self.store.clone();
        dataset.apply_to(&mut store)?;
        self.store = store;
        debug!("loaded dataset");
        Ok(())
    }

    /// Returns the plural form of `word`, matching its casing. Words that no
    /// rule applies to are returned unchanged without allocating.
    pub fn plural<'a>(&self, word: &'a str) -> Result<Cow<'a, str>, Error> {
        if word.is_empty() {
            return Err(Error::empty_input("pluralize"));
        }
        Ok(transform::process_word(&self.store, word, Direction::Plural))
    }

    /// Returns the singular form of `word`, matching its casing. Words that
    /// no rule applies to are returned unchanged without allocating.
    pub fn singular<'a>(&self, word: &'a str) -> Result<Cow<'a, str>, Error> {
        if word.is_empty() {
            return Err(Error::empty_input("singularize"));
        }
        Ok(transform::process_word(
            &self.store,
            word,
            Direction::Singular,
        ))
    }

    /// Returns the singular form of `word` if `count` is exactly one, and the
    /// plural form otherwise. With `inclusive` the count is prepended, as in
    /// "3 ducks".
    ///
    /// ```
    /// use en_pluralize::{Error, Pluralizer};
    ///
    /// let p = Pluralizer::new();
    /// assert_eq!(p.pluralize("cats", 1, false).unwrap(), "cat");
    /// assert_eq!(p.pluralize("cat", 0, true).unwrap(), "0 cats");
    /// assert_eq!(p.pluralize("cat", "2", true).unwrap(), "2 cats");
    /// assert_eq!(p.pluralize("cat", 1.5, true).unwrap(), "1.5 cats");
    /// assert!(matches!(
    ///     p.pluralize("cat", "lots", false),
    ///     Err(Error::InvalidCount(_)),
    /// ));
    /// ```
    pub fn pluralize<'a, C: IntoCount>(
        &self,
        word: &'a str,
        count: C,
        inclusive: bool,
    ) -> Result<Cow<'a, str>, Error> {
        if word.is_empty() {
            return Err(Error::empty_input("pluralize"));
        }
        let count = count.into_count()?;

        let inflected = if count.is_one() {
            self.singular(word)?
        } else {
            self.plural(word)?
        };

        if inclusive {
            return Ok(Cow::Owned(format!("{} {}", count, inflected)));
        }
        Ok(inflected)
    }

    /// Adds a rule that takes priority over every plural rule added before
    /// it. A string pattern must match the whole word and is
    /// case-insensitive. Use `$1`, `$2`, etc. in `replacement` to refer to
    /// capture groups.
    pub fn add_plural_rule(
        &mut self,
        pattern: impl Into<Pattern>,
        replacement: &str,
    ) -> Result<(), Error> {
        self.store.add_plural_rule(pattern, replacement)
    }

    /// Adds a rule that takes priority over every singular rule added before
    /// it. Patterns and replacements work as in
    /// [add_plural_rule](Self::add_plural_rule).
    pub fn add_singular_rule(
        &mut self,
        pattern: impl Into<Pattern>,
        replacement: &str,
    ) -> Result<(), Error> {
        self.store.add_singular_rule(pattern, replacement)
    }

    /// Adds an irregular pair, used in both directions. This replaces any
    /// earlier pair with the same singular.
    pub fn add_irregular(&mut self, singular: &str, plural: &str) -> Result<(), Error> {
        self.store.add_irregular(singular, plural)
    }

    /// Marks a word as uncountable. A string is a plain word. A compiled
    /// [Regex](regex::Regex) marks every word it matches, taking part in rule
    /// priority like any other rule. See [RuleStore::add_uncountable].
    pub fn add_uncountable(&mut self, word: impl Into<Pattern>) -> Result<(), Error> {
        self.store.add_uncountable(word)
    }

    /// The rules, irregular pairs, and uncountables this pluralizer uses.
    pub fn store(&self) -> &RuleStore {
        &self.store
    }
}

impl Default for Pluralizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Pluralizer;
    use crate::{dataset::Dataset, error::Error};
    use regex::Regex;
    use std::borrow::Cow;

    #[test]
    fn regular_nouns() {
        let p = Pluralizer::new();
        let tests = [
            ("cat", "cats"),
            ("dog", "dogs"),
            ("house", "houses"),
            ("person2", "person2s"),
            ("day", "days"),
            ("city", "cities"),
            ("box", "boxes"),
            ("church", "churches"),
            ("glass", "glasses"),
            ("bus", "buses"),
            ("quiz", "quizzes"),
            ("hero", "heroes"),
            ("photo", "photos"),
            ("wolf", "wolves"),
            ("leaf", "leaves"),
            ("knife", "knives"),
            ("wife", "wives"),
            ("roof", "roofs"),
            ("chief", "chiefs"),
            ("tie", "ties"),
            ("movie", "movies"),
            ("fireman", "firemen"),
            ("human", "humans"),
            ("crisis", "crises"),
            ("axis", "axes"),
            ("cactus", "cacti"),
            ("criterion", "criteria"),
            ("datum", "data"),
            ("matrix", "matrices"),
            ("index", "indices"),
            ("bureau", "bureaux"),
            ("dormouse", "dormice"),
            ("tax", "taxes"),
        ];
        for (singular, plural) in tests {
            assert_eq!(p.plural(singular).unwrap(), plural, "plural({})", singular);
            assert_eq!(
                p.singular(plural).unwrap(),
                singular,
                "singular({})",
                plural,
            );
        }
    }

    #[test]
    fn irregular_nouns() {
        let p = Pluralizer::new();
        for (singular, plural) in p.store().irregulars() {
            assert_eq!(p.plural(singular).unwrap(), plural);
            assert_eq!(p.singular(plural).unwrap(), singular);

            let cap_singular = capitalize(singular);
            let cap_plural = capitalize(plural);
            assert_eq!(p.plural(&cap_singular).unwrap(), cap_plural);
            assert_eq!(p.singular(&cap_plural).unwrap(), cap_singular);

            assert_eq!(
                p.plural(&singular.to_uppercase()).unwrap(),
                plural.to_uppercase(),
            );
        }
        assert_eq!(p.plural("child").unwrap(), "children");
        assert_eq!(p.singular("children").unwrap(), "child");
        assert_eq!(p.plural("person").unwrap(), "people");
        assert_eq!(p.singular("people").unwrap(), "person");
    }

    #[test]
    fn uncountable_nouns() {
        let p = Pluralizer::new();
        for word in [
            "rice",
            "information",
            "sheep",
            "fish",
            "series",
            "species",
            "goldfish",
            "deer",
            "Chinese",
            "chickenpox",
            "Pokémon",
        ] {
            assert_eq!(p.plural(word).unwrap(), word);
            assert_eq!(p.singular(word).unwrap(), word);
        }
    }

    #[test]
    fn preserves_case() {
        let p = Pluralizer::new();
        assert_eq!(p.plural("Cat").unwrap(), "Cats");
        assert_eq!(p.plural("CAT").unwrap(), "CATS");
        assert_eq!(p.singular("Cats").unwrap(), "Cat");
        assert_eq!(p.singular("CATS").unwrap(), "CAT");
        assert_eq!(p.plural("CITY").unwrap(), "CITIES");
        assert_eq!(p.plural("Man").unwrap(), "Men");
        assert_eq!(p.singular("PEOPLE").unwrap(), "PERSON");
        assert_eq!(p.plural("iPod").unwrap(), "ipods");
    }

    #[test]
    fn pass_through_borrows() {
        let p = Pluralizer::new();
        for word in ["rice", "glass"] {
            let ok = match p.singular(word).unwrap() {
                Cow::Borrowed(w) => w == word,
                Cow::Owned(_) => false,
            };
            assert!(ok, "singular({}) returns a Cow::Borrowed", word);
        }
    }

    #[test]
    fn empty_input() {
        let p = Pluralizer::new();
        for result in [p.plural(""), p.singular(""), p.pluralize("", 2, false)] {
            match result {
                Err(e @ Error::EmptyInput { .. }) => {
                    assert!(e.to_string().contains("empty"), "{}", e);
                }
                other => panic!("expected EmptyInput, got {:?}", other),
            }
        }
        // An empty word is reported before a bad count.
        assert!(matches!(
            p.pluralize("", "x", false),
            Err(Error::EmptyInput { .. }),
        ));
    }

    #[test]
    fn pluralize() {
        let p = Pluralizer::new();
        assert_eq!(p.pluralize("cat", 1, false).unwrap(), "cat");
        assert_eq!(p.pluralize("cat", 2, false).unwrap(), "cats");
        assert_eq!(p.pluralize("cat", 0, false).unwrap(), "cats");
        assert_eq!(p.pluralize("cat", -1, false).unwrap(), "cats");
        assert_eq!(p.pluralize("cat", 1, true).unwrap(), "1 cat");
        assert_eq!(p.pluralize("cat", 2, true).unwrap(), "2 cats");
        assert_eq!(p.pluralize("cat", 0, true).unwrap(), "0 cats");
        assert_eq!(p.pluralize("children", 1, true).unwrap(), "1 child");
        assert_eq!(p.pluralize("Person", 1.0, true).unwrap(), "1 Person");
        assert_eq!(p.pluralize("Person", 4u64, true).unwrap(), "4 People");

        match p.pluralize("word", "not a number", false) {
            Err(e @ Error::InvalidCount(_)) => {
                assert!(e.to_string().contains("number"), "{}", e);
            }
            other => panic!("expected InvalidCount, got {:?}", other),
        }
    }

    #[test]
    fn custom_rules() {
        let mut p = Pluralizer::new();
        p.add_plural_rule("custom$", "customs").unwrap();
        p.add_singular_rule(Regex::new("customs$").unwrap(), "custom")
            .unwrap();
        assert_eq!(p.plural("custom").unwrap(), "customs");
        assert_eq!(p.singular("customs").unwrap(), "custom");

        // A custom rule beats a bundled one for the same word.
        assert_eq!(p.plural("hero").unwrap(), "heroes");
        p.add_plural_rule("(.*)o", "$1os").unwrap();
        assert_eq!(p.plural("hero").unwrap(), "heros");

        // Other instances are not affected.
        assert_eq!(Pluralizer::new().plural("hero").unwrap(), "heroes");
    }

    #[test]
    fn custom_irregular() {
        let mut p = Pluralizer::new();
        p.add_irregular("irregular", "irregulars_custom").unwrap();
        assert_eq!(p.plural("irregular").unwrap(), "irregulars_custom");
        assert_eq!(p.singular("irregulars_custom").unwrap(), "irregular");

        p.add_irregular("person", "persons").unwrap();
        assert_eq!(p.plural("person").unwrap(), "persons");
        assert_eq!(p.singular("persons").unwrap(), "person");
        // "people" no longer maps anywhere, so the rules get a turn.
        assert_eq!(p.singular("people").unwrap(), "people");
    }

    #[test]
    fn custom_uncountable() {
        let mut p = Pluralizer::new();
        p.add_uncountable("Kudos").unwrap();
        assert_eq!(p.singular("kudos").unwrap(), "kudos");

        // Literal uncountables win over irregulars.
        p.add_uncountable("child").unwrap();
        assert_eq!(p.plural("child").unwrap(), "child");

        p.add_uncountable(Regex::new("(?i)ware$").unwrap()).unwrap();
        assert_eq!(p.plural("Hardware").unwrap(), "Hardware");
        assert_eq!(p.singular("wares").unwrap(), "ware");
    }

    #[test]
    fn invalid_rules() {
        let mut p = Pluralizer::new();
        let before = p.store().rules(crate::Direction::Plural).count();
        assert!(matches!(p.add_plural_rule("", "x"), Err(Error::InvalidRule(_))));
        assert!(matches!(p.add_plural_rule("x", ""), Err(Error::InvalidRule(_))));
        match p.add_singular_rule("([a-z", "x") {
            Err(Error::InvalidRule(msg)) => assert!(msg.contains("could not compile"), "{}", msg),
            other => panic!("expected InvalidRule, got {:?}", other),
        }
        assert!(matches!(p.add_irregular("", "x"), Err(Error::InvalidRule(_))));
        assert!(matches!(p.add_uncountable(""), Err(Error::InvalidRule(_))));
        assert_eq!(p.store().rules(crate::Direction::Plural).count(), before);
    }

    #[test]
    fn load_is_all_or_nothing() {
        let mut p = Pluralizer::empty();
        let dataset = Dataset::from_toml_str(
            r#"
                [[irregular]]
                singular = "cow"
                plural = "kine"

                [[plural]]
                pattern = "(oops"
                replacement = "x"
            "#,
        )
        .unwrap();
        assert!(matches!(p.load(&dataset), Err(Error::InvalidRule(_))));
        assert_eq!(p.plural("cow").unwrap(), "cow");
    }

    #[test]
    fn from_dataset() {
        let dataset = Dataset::from_toml_str(
            r#"
                [[plural]]
                pattern = "(.+)"
                replacement = "$1z"
            "#,
        )
        .unwrap();
        let p = Pluralizer::from_dataset(&dataset).unwrap();
        assert_eq!(p.plural("Cat").unwrap(), "Catz");
        assert_eq!(p.plural("child").unwrap(), "childz");
        assert_eq!(p.singular("cats").unwrap(), "cats");
    }

    #[test]
    fn empty_pluralizer_passes_through() {
        let p = Pluralizer::empty();
        assert_eq!(p.plural("cat").unwrap(), "cat");
        assert_eq!(p.singular("cats").unwrap(), "cats");
    }

    fn capitalize(word: &str) -> String {
        let mut chars = word.chars();
        match chars.next() {
            Some(c) => c.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
