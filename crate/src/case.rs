//! Case classification and restoration.
//!
//! Inflected words are built from lowercase data (irregular pairs) or from
//! replacement templates, so their casing says nothing about what the
//! caller passed in. [restore_case] copies the casing style of the original
//! word onto the new one, so "Child" becomes "Children" and "CAT" becomes
//! "CATS".

use std::borrow::Cow;

/// The casing style of a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseClass {
    /// The string is unchanged by lowercasing ("dog", "person2").
    Lower,
    /// The string is unchanged by uppercasing ("DOG").
    Upper,
    /// The first character is uppercase and the string is neither all lower
    /// nor all upper ("Dog", "DoG").
    Capitalized,
    /// Anything else, such as "iPhone".
    Mixed,
}

impl CaseClass {
    /// Classifies `word` by comparing it to its own lowercase and uppercase
    /// forms and then looking at its first character.
    pub fn of(word: &str) -> Self {
        if word == word.to_lowercase() {
            CaseClass::Lower
        } else if word == word.to_uppercase() {
            CaseClass::Upper
        } else if word.chars().next().map_or(false, char::is_uppercase) {
            CaseClass::Capitalized
        } else {
            CaseClass::Mixed
        }
    }
}

/// Returns `transformed` recased to match the [CaseClass] of `reference`.
/// Mixed-case references fall back to lowercase.
///
/// If `transformed` is empty the reference is returned unchanged. Whenever
/// `transformed` already has the right casing it is returned without
/// allocating.
///
/// ```
/// use en_pluralize::case::restore_case;
///
/// assert_eq!(restore_case("Child", "children"), "Children");
/// assert_eq!(restore_case("MOUSE", "mice"), "MICE");
/// assert_eq!(restore_case("iPod", "iPods"), "ipods");
/// ```
pub fn restore_case<'a>(reference: &'a str, transformed: &'a str) -> Cow<'a, str> {
    if transformed.is_empty() {
        return Cow::Borrowed(reference);
    }

    match CaseClass::of(reference) {
        CaseClass::Upper => {
            if is_uppercase(transformed) {
                Cow::Borrowed(transformed)
            } else {
                Cow::Owned(transformed.to_uppercase())
            }
        }
        CaseClass::Capitalized => {
            let mut chars = transformed.chars();
            match chars.next() {
                Some(c) if c.is_uppercase() && is_lowercase(chars.as_str()) => {
                    Cow::Borrowed(transformed)
                }
                _ => Cow::Owned(titlecase_word(transformed)),
            }
        }
        CaseClass::Lower | CaseClass::Mixed => {
            if is_lowercase(transformed) {
                Cow::Borrowed(transformed)
            } else {
                Cow::Owned(transformed.to_lowercase())
            }
        }
    }
}

fn titlecase_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

pub(crate) fn is_lowercase(word: &str) -> bool {
    !word.chars().any(char::is_uppercase)
}

fn is_uppercase(word: &str) -> bool {
    !word.chars().any(char::is_lowercase)
}
