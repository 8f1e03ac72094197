//! Linguistic data that can be loaded into a [Pluralizer](crate::Pluralizer).
//!
//! A [Dataset] is plain data: irregular pairs, plural and singular rules,
//! and uncountable words and patterns. The bundled English data is
//! available through [Dataset::bundled], and custom data can be read from
//! TOML:
//!
//! ```
//! use en_pluralize::{Dataset, Pluralizer};
//!
//! let dataset = Dataset::from_toml_str(r#"
//!     uncountable = ["kudos"]
//!
//!     [[irregular]]
//!     singular = "octopus"
//!     plural = "octopodes"
//!
//!     [[plural]]
//!     pattern = "(.*)um"
//!     replacement = "$1a"
//! "#).unwrap();
//!
//! let mut p = Pluralizer::new();
//! p.load(&dataset).unwrap();
//! assert_eq!(p.plural("Octopus").unwrap(), "Octopodes");
//! assert_eq!(p.plural("museum").unwrap(), "musea");
//! assert_eq!(p.plural("kudos").unwrap(), "kudos");
//! ```
//!
//! # Load order
//!
//! Data is always loaded in the same order: irregular pairs, plural rules,
//! singular rules, uncountable words, and then uncountable patterns. Rules
//! are pushed to the front of their list as they are loaded, so later
//! entries in a list override earlier ones, and uncountable patterns
//! override every rule loaded with them.

use crate::{data, error::Error, pattern::Pattern, store::RuleStore};
use serde::Deserialize;
use tracing::debug;

/// A set of irregular pairs, rules, and uncountables.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Dataset {
    pub irregular: Vec<IrregularPair>,
    pub plural: Vec<RuleDef>,
    pub singular: Vec<RuleDef>,
    /// Plain words with the same singular and plural form.
    pub uncountable: Vec<String>,
    /// Patterns for words that are left alone in both directions. These are
    /// anchored and case-insensitive, like rule patterns.
    pub uncountable_patterns: Vec<String>,
}

/// A singular and plural that don't follow the rules.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct IrregularPair {
    pub singular: String,
    pub plural: String,
}

/// A pattern and the replacement template used when it matches.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RuleDef {
    pub pattern: String,
    pub replacement: String,
}

impl Dataset {
    /// The English data that [Pluralizer::new](crate::Pluralizer::new)
    /// loads.
    pub fn bundled() -> Self {
        let rules = |table: &[(&str, &str)]| {
            table
                .iter()
                .map(|(pattern, replacement)| RuleDef {
                    pattern: pattern.to_string(),
                    replacement: replacement.to_string(),
                })
                .collect::<Vec<_>>()
        };

        Self {
            irregular: data::IRREGULARS
                .iter()
                .map(|(singular, plural)| IrregularPair {
                    singular: singular.to_string(),
                    plural: plural.to_string(),
                })
                .collect(),
            plural: rules(data::PLURAL_RULES),
            singular: rules(data::SINGULAR_RULES),
            uncountable: data::UNCOUNTABLES.iter().map(|w| w.to_string()).collect(),
            uncountable_patterns: data::UNCOUNTABLE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }

    /// Parses a dataset from TOML. Every key is optional. Unknown keys are
    /// an error.
    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        Ok(toml::from_str(s)?)
    }

    // Stops at the first bad entry. Callers that need all-or-nothing
    // behavior apply this to a copy of the store.
    pub(crate) fn apply_to(&self, store: &mut RuleStore) -> Result<(), Error> {
        debug!(
            irregular = self.irregular.len(),
            plural = self.plural.len(),
            singular = self.singular.len(),
            uncountable = self.uncountable.len(),
            uncountable_patterns = self.uncountable_patterns.len(),
            "loading dataset",
        );

        for pair in &self.irregular {
            store.add_irregular(&pair.singular, &pair.plural)?;
        }
        for rule in &self.plural {
            store.add_plural_rule(rule.pattern.as_str(), &rule.replacement)?;
        }
        for rule in &self.singular {
            store.add_singular_rule(rule.pattern.as_str(), &rule.replacement)?;
        }
        for word in &self.uncountable {
            store.add_uncountable(word.as_str())?;
        }
        for pattern in &self.uncountable_patterns {
            let re = Pattern::from(pattern.as_str()).compile()?;
            store.add_uncountable(re)?;
        }

        Ok(())
    }
}
