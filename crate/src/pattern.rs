//! Patterns accepted by the rule registration methods.

use crate::error::Error;
use regex::{Regex, RegexBuilder};

/// A rule pattern, given either as a literal pattern string or as an
/// already compiled [Regex].
///
/// Literal strings are compiled so that they must match the *whole* word,
/// case-insensitively. A compiled `Regex` is used exactly as given, with
/// whatever anchoring and flags it was built with.
///
/// Most callers never name this type. The registration methods take
/// `impl Into<Pattern>`, so both of these work:
///
/// ```
/// use en_pluralize::Pluralizer;
/// use regex::Regex;
///
/// let mut p = Pluralizer::new();
/// p.add_plural_rule("(.*)quux", "$1quuxen").unwrap();
/// p.add_plural_rule(Regex::new("(?i)(.*)fnord$").unwrap(), "$1fnordim").unwrap();
/// assert_eq!(p.plural("quux").unwrap(), "quuxen");
/// assert_eq!(p.plural("Fnord").unwrap(), "Fnordim");
/// ```
#[derive(Clone, Debug)]
pub enum Pattern {
    /// A pattern string that is anchored to the whole word and matched
    /// case-insensitively. When passed to
    /// [add_uncountable](crate::Pluralizer::add_uncountable) this is a
    /// plain word rather than a pattern.
    Literal(String),
    /// A compiled regex used as is.
    Compiled(Regex),
}

impl Pattern {
    /// Returns true if the pattern has no source text.
    pub fn is_empty(&self) -> bool {
        match self {
            Pattern::Literal(s) => s.is_empty(),
            Pattern::Compiled(re) => re.as_str().is_empty(),
        }
    }

    pub(crate) fn compile(self) -> Result<Regex, Error> {
        match self {
            Pattern::Literal(s) => {
                if s.is_empty() {
                    return Err(Error::InvalidRule("pattern is empty".to_string()));
                }
                RegexBuilder::new(&format!(r"\A(?:{})\z", s))
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| {
                        Error::InvalidRule(format!("could not compile pattern `{}`: {}", s, e))
                    })
            }
            Pattern::Compiled(re) => {
                if re.as_str().is_empty() {
                    return Err(Error::InvalidRule("pattern is empty".to_string()));
                }
                Ok(re)
            }
        }
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Pattern::Literal(s.to_string())
    }
}

impl From<String> for Pattern {
    fn from(s: String) -> Self {
        Pattern::Literal(s)
    }
}

impl From<&String> for Pattern {
    fn from(s: &String) -> Self {
        Pattern::Literal(s.clone())
    }
}

impl From<Regex> for Pattern {
    fn from(re: Regex) -> Self {
        Pattern::Compiled(re)
    }
}

impl From<&Regex> for Pattern {
    fn from(re: &Regex) -> Self {
        Pattern::Compiled(re.clone())
    }
}
