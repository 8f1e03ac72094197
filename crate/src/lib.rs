// #![deny(missing_docs)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Convert English nouns between singular and plural.
//!
//! Inflection is driven by an ordered list of `(pattern, replacement)`
//! rules in each direction, a table of irregular pairs ("child" and
//! "children"), and a set of uncountable words ("rice"). A word is resolved
//! in this order:
//!
//! 1. If it is uncountable it is returned unchanged.
//! 2. If it is one side of an irregular pair, the other side is returned.
//! 3. Otherwise the rules are tried in order, and the first one that
//!    changes the word wins.
//! 4. If nothing applies the word is returned unchanged.
//!
//! The casing of the input is carried over to the output, so "Child"
//! becomes "Children" and "CAT" becomes "CATS".
//!
//! This is a best-effort rule-and-exception engine, not a dictionary. It
//! does not know whether a word is a noun, and it will happily pluralize a
//! word that is already plural.
//!
//! # Examples
//!
//! The free functions use a shared [Pluralizer] loaded with the bundled
//! English data:
//!
//! ```
//! assert_eq!(en_pluralize::plural("person").unwrap(), "people");
//! assert_eq!(en_pluralize::singular("Wolves").unwrap(), "Wolf");
//! assert_eq!(en_pluralize::pluralize("cat", 1, true).unwrap(), "1 cat");
//! ```
//!
//! To add your own rules, create your own [Pluralizer]. Rules added later
//! always take priority over earlier ones, including the bundled rules:
//!
//! ```
//! use en_pluralize::Pluralizer;
//!
//! let mut p = Pluralizer::new();
//! assert_eq!(p.plural("octopus").unwrap(), "octopuses");
//! p.add_plural_rule("(.*)pus", "$1podes").unwrap();
//! assert_eq!(p.plural("Octopus").unwrap(), "Octopodes");
//! ```
//!
//! # Logging
//!
//! The crate emits [tracing](https://docs.rs/tracing) events: `debug` for
//! every registration and dataset load, `trace` for each word resolved by
//! an uncountable, an irregular, or a rule. Nothing is emitted unless the
//! application installs a subscriber.

mod data;
mod transform;

pub mod case;
pub mod count;
pub mod dataset;
pub mod error;
pub mod pattern;
pub mod pluralizer;
pub mod rule;
pub mod store;

pub use count::{Count, IntoCount};
pub use dataset::Dataset;
pub use error::Error;
pub use pattern::Pattern;
pub use pluralizer::Pluralizer;
pub use rule::Rule;
pub use store::{Direction, RuleStore};

use once_cell::sync::Lazy;
use std::borrow::Cow;

static DEFAULT: Lazy<Pluralizer> = Lazy::new(Pluralizer::new);

/// Returns the shared [Pluralizer] used by the free functions in this crate.
/// It is built on first use from the bundled data and cannot be changed.
pub fn default_pluralizer() -> &'static Pluralizer {
    &DEFAULT
}

/// Returns the plural of `word` using the [default_pluralizer].
pub fn plural(word: &str) -> Result<Cow<'_, str>, Error> {
    DEFAULT.plural(word)
}

/// Returns the singular of `word` using the [default_pluralizer].
pub fn singular(word: &str) -> Result<Cow<'_, str>, Error> {
    DEFAULT.singular(word)
}

/// Picks the singular or plural of `word` for `count` using the
/// [default_pluralizer]. See [Pluralizer::pluralize].
pub fn pluralize<C: IntoCount>(
    word: &str,
    count: C,
    inclusive: bool,
) -> Result<Cow<'_, str>, Error> {
    DEFAULT.pluralize(word, count, inclusive)
}
