#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Pluralise and singularise English words.
//!
//! Words are converted with an ordered list of regex rules for each
//! direction, plus a table of irregular words ("ox" and "oxen") and
//! uncountable words ("rice"). Irregular and uncountable words are checked
//! first. After that the first rule whose pattern matches the word is
//! applied, and a word that no rule matches is returned as it is. Nothing
//! here ever fails on an unknown word.
//!
//! The free functions in this crate use a process-wide [Pluraliser] loaded
//! with the built-in English rules. Rules added with [add_plural_rule] and
//! friends are visible to every later call. If you want your own rule set,
//! or want to keep tests isolated from each other, create a [Pluraliser]
//! and call its methods instead.
//!
//! # Examples
//!
//! ```
//! assert_eq!(pluralise::pluralise("box"), "boxes");
//! assert_eq!(pluralise::pluralise("Ox"), "Oxen");
//! assert_eq!(pluralise::singularise("mice"), "mouse");
//! assert_eq!(pluralise::with_count("cat", 1), "cat");
//! assert_eq!(pluralise::with_count("cat", 0), "cats");
//! assert_eq!(pluralise::with_count_inclusive("cat", 3), "3 cat");
//! ```
//!
//! Case is carried over from the word you pass in, so "Cat" becomes "Cats"
//! and "CAT" becomes "CATS". See [Options] to turn that off for words that
//! are handled by a pattern rule.

mod util;

pub mod engine;
pub mod rules;

pub use engine::{Builder, Options, Pluraliser};
pub use rules::{Error, Rule};

use once_cell::sync::Lazy;

static DEFAULT: Lazy<Pluraliser> = Lazy::new(Pluraliser::new);

/// Returns the process-wide [Pluraliser] used by the free functions.
pub fn default_pluraliser() -> &'static Pluraliser {
    &DEFAULT
}

/// Returns the plural form of `word`.
pub fn pluralise(word: &str) -> String {
    DEFAULT.pluralise(word)
}

/// Returns the singular form of `word`.
pub fn singularise(word: &str) -> String {
    DEFAULT.singularise(word)
}

/// Returns the singular form of `word` when `count` is 1, otherwise the
/// plural form.
pub fn with_count(word: &str, count: i64) -> String {
    DEFAULT.with_count(word, count)
}

/// Returns `count`, a space, and `word` exactly as given.
pub fn with_count_inclusive(word: &str, count: i64) -> String {
    DEFAULT.with_count_inclusive(word, count)
}

/// Returns true if pluralising `word` would leave it unchanged.
pub fn is_plural(word: &str) -> bool {
    DEFAULT.is_plural(word)
}

/// Returns true if singularising `word` would leave it unchanged.
pub fn is_singular(word: &str) -> bool {
    DEFAULT.is_singular(word)
}

/// Appends a pluralisation rule to the process-wide rule set.
///
/// # Panics
///
/// Panics if `pattern` is not a valid regex.
pub fn add_plural_rule(pattern: &str, replacement: &str) {
    DEFAULT.add_plural_rule(pattern, replacement)
}

/// Appends a singularisation rule to the process-wide rule set.
///
/// # Panics
///
/// Panics if `pattern` is not a valid regex.
pub fn add_singular_rule(pattern: &str, replacement: &str) {
    DEFAULT.add_singular_rule(pattern, replacement)
}

/// Appends a pluralisation rule to the process-wide rule set.
///
/// # Errors
///
/// Returns [Error::InvalidPattern] if `pattern` is not a valid regex. The
/// rule set is left unchanged.
pub fn try_add_plural_rule(pattern: &str, replacement: &str) -> Result<(), Error> {
    DEFAULT.try_add_plural_rule(pattern, replacement)
}

/// Appends a singularisation rule to the process-wide rule set.
///
/// # Errors
///
/// Returns [Error::InvalidPattern] if `pattern` is not a valid regex. The
/// rule set is left unchanged.
pub fn try_add_singular_rule(pattern: &str, replacement: &str) -> Result<(), Error> {
    DEFAULT.try_add_singular_rule(pattern, replacement)
}

/// Registers an irregular singular and plural pair with the process-wide
/// rule set.
pub fn add_irregular_rule(singular: &str, plural: &str) {
    DEFAULT.add_irregular_rule(singular, plural)
}

/// Registers a word that is the same in the singular and plural.
pub fn add_uncountable_rule(word: &str) {
    DEFAULT.add_uncountable_rule(word)
}
