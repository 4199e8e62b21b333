//! The [Pluraliser] rule engine.
//!
//! A `Pluraliser` owns two ordered lists of pattern rules (one per
//! direction) and two irregular word maps. Lookups check the irregular maps
//! first and then try each pattern rule in registration order. The first
//! rule that matches wins, so a rule added later never overrides an earlier
//! one for the words they both match.
//!
//! # Examples
//!
//! ```
//! use pluralise::Pluraliser;
//!
//! let pluraliser = Pluraliser::new();
//! assert_eq!(pluraliser.pluralise("box"), "boxes");
//! assert_eq!(pluraliser.singularise("Geese"), "Goose");
//!
//! let empty = Pluraliser::empty();
//! empty.add_plural_rule("$", "z");
//! assert_eq!(empty.pluralise("cat"), "catz");
//! ```
use crate::{
    rules::{self, Error, Rule},
    util,
};
use parking_lot::RwLock;
use std::{collections::HashMap, fmt};
use tracing::{debug, trace};

/// Settings for a [Pluraliser].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Options {
    /// Whether the casing of the input word is applied to the output of a
    /// pattern rule. Irregular and uncountable words always have their case
    /// restored. When this is `false`, "Box" pluralises to "boxes".
    ///
    /// Rules always run on the lowercased word, and restoring case only
    /// knows about lowercase, all caps, and a leading capital. Mixed-case
    /// words lose their inner capitals either way: "iPhone" pluralises to
    /// "iphones" and "McDonald" to "Mcdonalds".
    pub restore_case_after_rules: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            restore_case_after_rules: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Direction {
    Plural,
    Singular,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Plural => f.write_str("plural"),
            Direction::Singular => f.write_str("singular"),
        }
    }
}

#[derive(Debug, Default)]
struct RuleSet {
    plural_rules: Vec<Rule>,
    singular_rules: Vec<Rule>,
    // Keyed by the singular form.
    singular_to_plural: HashMap<String, String>,
    // Keyed by the plural form.
    plural_to_singular: HashMap<String, String>,
}

struct Lookup<'r> {
    replace: &'r HashMap<String, String>,
    keep: &'r HashMap<String, String>,
    rules: &'r [Rule],
}

impl RuleSet {
    fn with_builtins() -> Self {
        let mut set = Self {
            plural_rules: rules::PLURAL_RULES.clone(),
            singular_rules: rules::SINGULAR_RULES.clone(),
            ..Self::default()
        };
        for (singular, plural) in rules::IRREGULARS {
            set.insert_irregular(singular.to_lowercase(), plural.to_lowercase());
        }
        for word in rules::UNCOUNTABLES {
            set.insert_irregular(word.to_string(), word.to_string());
        }
        set
    }

    fn insert_irregular(&mut self, singular: String, plural: String) {
        self.singular_to_plural.insert(singular.clone(), plural.clone());
        self.plural_to_singular.insert(plural, singular);
    }

    fn rules_mut(&mut self, direction: Direction) -> &mut Vec<Rule> {
        match direction {
            Direction::Plural => &mut self.plural_rules,
            Direction::Singular => &mut self.singular_rules,
        }
    }

    fn lookup(&self, direction: Direction) -> Lookup<'_> {
        match direction {
            Direction::Plural => Lookup {
                replace: &self.singular_to_plural,
                keep: &self.plural_to_singular,
                rules: &self.plural_rules,
            },
            Direction::Singular => Lookup {
                replace: &self.plural_to_singular,
                keep: &self.singular_to_plural,
                rules: &self.singular_rules,
            },
        }
    }
}

/// Converts English words between their singular and plural forms.
///
/// All methods take `&self`. Lookups share a read lock and registrations
/// take the write lock, so one instance can be shared between threads.
#[derive(Debug)]
pub struct Pluraliser {
    rules: RwLock<RuleSet>,
    options: Options,
}

impl Default for Pluraliser {
    fn default() -> Self {
        Self::new()
    }
}

impl Pluraliser {
    /// Creates a pluraliser loaded with the built-in English rules and
    /// default [Options].
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a pluraliser with no rules at all. Every word passes through
    /// it unchanged until rules are added.
    pub fn empty() -> Self {
        Self::builder().builtins(false).build()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// Returns the plural form of `word`.
    pub fn pluralise(&self, word: &str) -> String {
        self.resolve(word, Direction::Plural)
    }

    /// Returns the singular form of `word`.
    pub fn singularise(&self, word: &str) -> String {
        self.resolve(word, Direction::Singular)
    }

    /// Returns the singular form of `word` when `count` is exactly 1 and
    /// the plural form for anything else, including 0 and negative counts.
    pub fn with_count(&self, word: &str, count: i64) -> String {
        if count == 1 {
            return self.singularise(word);
        }
        self.pluralise(word)
    }

    /// Returns `count` followed by a space and `word`. The word is not
    /// inflected at all, so `with_count_inclusive("cat", 3)` is `"3 cat"`.
    pub fn with_count_inclusive(&self, word: &str, count: i64) -> String {
        format!("{} {}", count, word)
    }

    /// Returns a boolean indicating whether pluralising `word` would leave
    /// it as it is. Note that a word can be *both* singular and plural, like
    /// "sheep" or any uncountable word.
    pub fn is_plural(&self, word: &str) -> bool {
        self.check(word, Direction::Plural)
    }

    /// Returns a boolean indicating whether singularising `word` would leave
    /// it as it is.
    pub fn is_singular(&self, word: &str) -> bool {
        self.check(word, Direction::Singular)
    }

    /// Appends a pluralisation rule. It is only tried after every rule added
    /// before it has failed to match.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regex. Use
    /// [Pluraliser::try_add_plural_rule] to get an error instead.
    pub fn add_plural_rule(&self, pattern: &str, replacement: &str) {
        if let Err(e) = self.try_add_plural_rule(pattern, replacement) {
            panic!("Could not add plural rule: {}", e);
        }
    }

    /// Appends a singularisation rule.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regex.
    pub fn add_singular_rule(&self, pattern: &str, replacement: &str) {
        if let Err(e) = self.try_add_singular_rule(pattern, replacement) {
            panic!("Could not add singular rule: {}", e);
        }
    }

    /// Like [Pluraliser::add_plural_rule], but returns an error instead of
    /// panicking.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidPattern] if `pattern` is not a valid regex.
    pub fn try_add_plural_rule(&self, pattern: &str, replacement: &str) -> Result<(), Error> {
        self.add_rule(Direction::Plural, pattern, replacement)
    }

    /// Like [Pluraliser::add_singular_rule], but returns an error instead of
    /// panicking.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidPattern] if `pattern` is not a valid regex.
    pub fn try_add_singular_rule(&self, pattern: &str, replacement: &str) -> Result<(), Error> {
        self.add_rule(Direction::Singular, pattern, replacement)
    }

    /// Registers an irregular pair in both directions. Both words are
    /// lowercased, and a later registration for the same key replaces the
    /// earlier one.
    pub fn add_irregular_rule(&self, singular: &str, plural: &str) {
        let singular = singular.to_lowercase();
        let plural = plural.to_lowercase();
        debug!(%singular, %plural, "adding irregular rule");
        self.rules.write().insert_irregular(singular, plural);
    }

    /// Registers a word whose singular and plural forms are the same.
    pub fn add_uncountable_rule(&self, word: &str) {
        self.add_irregular_rule(word, word);
    }

    fn add_rule(&self, direction: Direction, pattern: &str, replacement: &str) -> Result<(), Error> {
        let rule = Rule::new(pattern, replacement)?;
        debug!(%direction, pattern, replacement, "adding rule");
        self.rules.write().rules_mut(direction).push(rule);
        Ok(())
    }

    fn resolve(&self, word: &str, direction: Direction) -> String {
        if word.is_empty() {
            return String::new();
        }

        let token = word.to_lowercase();
        let set = self.rules.read();
        let lookup = set.lookup(direction);

        if lookup.keep.contains_key(&token) {
            trace!(word, %direction, "word is already in the target form");
            return util::restore_case(word, &token);
        }

        if let Some(replacement) = lookup.replace.get(&token) {
            trace!(word, %direction, %replacement, "irregular word");
            return util::restore_case(word, replacement);
        }

        match first_match(lookup.rules, &token) {
            Some((idx, rule)) => {
                let new = rule.apply(&token);
                trace!(
                    word,
                    %direction,
                    rule = idx,
                    pattern = rule.pattern(),
                    result = %new,
                    "matched rule",
                );
                if self.options.restore_case_after_rules {
                    util::restore_case(word, &new)
                } else {
                    new.into_owned()
                }
            }
            None => {
                trace!(word, %direction, "no rule matched");
                word.to_string()
            }
        }
    }

    fn check(&self, word: &str, direction: Direction) -> bool {
        if word.is_empty() {
            return true;
        }

        let token = word.to_lowercase();
        let set = self.rules.read();
        let lookup = set.lookup(direction);

        if lookup.keep.contains_key(&token) {
            return true;
        }
        if lookup.replace.contains_key(&token) {
            return false;
        }

        match first_match(lookup.rules, &token) {
            Some((_, rule)) => rule.apply(&token) == token,
            None => true,
        }
    }
}

fn first_match<'r>(rules: &'r [Rule], token: &str) -> Option<(usize, &'r Rule)> {
    rules.iter().enumerate().find(|(_, rule)| rule.is_match(token))
}

/// Builds a [Pluraliser] with non-default settings.
///
/// ```
/// use pluralise::Pluraliser;
///
/// let pluraliser = Pluraliser::builder()
///     .restore_case_after_rules(false)
///     .build();
/// assert_eq!(pluraliser.pluralise("Box"), "boxes");
/// assert_eq!(pluraliser.pluralise("Ox"), "Oxen");
/// ```
#[derive(Clone, Debug)]
pub struct Builder {
    options: Options,
    builtins: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            options: Options::default(),
            builtins: true,
        }
    }
}

impl Builder {
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn restore_case_after_rules(mut self, restore: bool) -> Self {
        self.options.restore_case_after_rules = restore;
        self
    }

    /// Whether to load the built-in English rules. Defaults to `true`.
    pub fn builtins(mut self, builtins: bool) -> Self {
        self.builtins = builtins;
        self
    }

    pub fn build(self) -> Pluraliser {
        let set = if self.builtins {
            RuleSet::with_builtins()
        } else {
            RuleSet::default()
        };
        Pluraliser {
            rules: RwLock::new(set),
            options: self.options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Options, Pluraliser};
    use crate::{
        rules::{Error, IRREGULARS, UNCOUNTABLES},
        util::capitalize_first,
    };
    use pretty_assertions::assert_eq;
    use std::{sync::Arc, thread};
    use tracing_test::traced_test;

    #[test]
    fn pluralise() {
        let p = Pluraliser::new();
        let tests = [
            ("cat", "cats"),
            ("cats", "cats"),
            ("box", "boxes"),
            ("bus", "buses"),
            ("church", "churches"),
            ("city", "cities"),
            ("money", "monies"),
            ("knife", "knives"),
            ("leaf", "leaves"),
            ("crisis", "crises"),
            ("thesis", "theses"),
            ("datum", "data"),
            ("criterion", "criteria"),
            ("cactus", "cacti"),
            ("alumna", "alumnae"),
            ("hero", "heroes"),
            ("photo", "photos"),
            ("emu", "emus"),
            ("alias", "aliases"),
            ("axis", "axes"),
            ("child", "children"),
            ("person", "people"),
            ("woman", "women"),
            ("mouse", "mice"),
            ("louse", "lice"),
            ("chateau", "chateaus"),
            ("chateaux", "chateaux"),
            ("cherub", "cherubim"),
            ("thou", "you"),
            ("chinese", "chinese"),
            ("café", "café"),
        ];
        for test in tests {
            assert_eq!(p.pluralise(test.0), test.1, "pluralise({})", test.0);
        }
    }

    #[test]
    fn singularise() {
        let p = Pluraliser::new();
        let tests = [
            ("cats", "cat"),
            ("cat", "cat"),
            ("boxes", "box"),
            ("buses", "bus"),
            ("churches", "church"),
            ("cities", "city"),
            ("monies", "mony"),
            ("ceremonies", "ceremony"),
            ("zombies", "zomby"),
            ("pies", "py"),
            ("ties", "ty"),
            ("\u{8}monies", "money"),
            ("\u{8}zombies", "zombie"),
            ("knives", "knife"),
            ("wolves", "wolf"),
            ("crises", "crisis"),
            ("analyses", "analysis"),
            ("data", "datum"),
            ("criteria", "criterion"),
            ("cacti", "cactus"),
            ("alumnae", "alumna"),
            ("heroes", "hero"),
            ("movies", "movie"),
            ("children", "child"),
            ("people", "person"),
            ("women", "woman"),
            ("mice", "mouse"),
            ("matrices", "matrix"),
            ("indices", "index"),
            ("glass", "glass"),
        ];
        for test in tests {
            assert_eq!(p.singularise(test.0), test.1, "singularise({})", test.0);
        }
    }

    #[test]
    fn irregulars() {
        let p = Pluraliser::new();
        let tests = [
            ("ox", "oxen"),
            ("goose", "geese"),
            ("foot", "feet"),
            ("tooth", "teeth"),
            ("genus", "genera"),
            ("schema", "schemata"),
            ("echo", "echoes"),
            ("quiz", "quizzes"),
            ("thief", "thieves"),
            ("die", "dice"),
            ("whiskey", "whiskies"),
            ("me", "us"),
            ("this", "these"),
        ];
        for test in tests {
            assert_eq!(p.pluralise(test.0), test.1, "pluralise({})", test.0);
            assert_eq!(p.singularise(test.1), test.0, "singularise({})", test.1);
            // Already in the target form.
            assert_eq!(p.pluralise(test.1), test.1, "pluralise({})", test.1);
            assert_eq!(p.singularise(test.0), test.0, "singularise({})", test.0);
        }
    }

    #[test]
    fn every_builtin_irregular_round_trips() {
        let p = Pluraliser::new();
        for (singular, plural) in IRREGULARS {
            let singular = singular.to_lowercase();
            // "they" is also uncountable, and that registration comes last.
            if UNCOUNTABLES.contains(&singular.as_str()) || *plural == "they" {
                continue;
            }
            assert_eq!(p.pluralise(&singular), *plural, "pluralise({})", singular);

            // Several singulars share "themselves", and only the last one
            // registered comes back.
            let shared = IRREGULARS.iter().filter(|(_, other)| other == plural).count() > 1;
            if !shared {
                assert_eq!(p.singularise(plural), singular, "singularise({})", plural);
            }

            // A one-letter word like "I" is all caps, not capitalized.
            if singular.chars().count() == 1 {
                continue;
            }
            let (cap_singular, cap_plural) = (capitalize_first(&singular), capitalize_first(plural));
            let (upper_singular, upper_plural) = (singular.to_uppercase(), plural.to_uppercase());
            assert_eq!(p.pluralise(&cap_singular), cap_plural, "pluralise({})", cap_singular);
            assert_eq!(p.pluralise(&upper_singular), upper_plural, "pluralise({})", upper_singular);
            if !shared {
                assert_eq!(p.singularise(&cap_plural), cap_singular, "singularise({})", cap_plural);
                assert_eq!(
                    p.singularise(&upper_plural),
                    upper_singular,
                    "singularise({})",
                    upper_plural,
                );
            }
        }
    }

    #[test]
    fn uncountables() {
        let p = Pluraliser::new();
        for word in UNCOUNTABLES {
            assert_eq!(p.pluralise(word), *word, "pluralise({})", word);
            assert_eq!(p.singularise(word), *word, "singularise({})", word);
            assert!(p.is_plural(word), "is_plural({})", word);
            assert!(p.is_singular(word), "is_singular({})", word);
        }
    }

    #[test]
    fn case_is_restored() {
        let p = Pluraliser::new();
        let tests = [
            ("cat", "cats"),
            ("Cat", "Cats"),
            ("CAT", "CATS"),
            ("Box", "Boxes"),
            ("Ox", "Oxen"),
            ("OX", "OXEN"),
            ("Oxen", "Oxen"),
            ("Rice", "Rice"),
            ("RICE", "RICE"),
            // Inner capitals are not kept.
            ("iPhone", "iphones"),
            ("McDonald", "Mcdonalds"),
        ];
        for test in tests {
            assert_eq!(p.pluralise(test.0), test.1, "pluralise({})", test.0);
        }
        assert_eq!(p.singularise("Geese"), "Goose");
        assert_eq!(p.singularise("MICE"), "MOUSE");
    }

    #[test]
    fn case_is_not_restored_after_rules_when_disabled() {
        let p = Pluraliser::builder()
            .options(Options {
                restore_case_after_rules: false,
            })
            .build();
        assert!(!p.options().restore_case_after_rules);
        assert_eq!(p.pluralise("Box"), "boxes");
        assert_eq!(p.pluralise("CAT"), "cats");
        assert_eq!(p.singularise("Cats"), "cat");
        // Irregular and uncountable hits are still restored.
        assert_eq!(p.pluralise("Ox"), "Oxen");
        assert_eq!(p.pluralise("RICE"), "RICE");
    }

    #[test]
    fn empty_word() {
        let p = Pluraliser::new();
        assert_eq!(p.pluralise(""), "");
        assert_eq!(p.singularise(""), "");
        assert!(p.is_plural(""));
        assert!(p.is_singular(""));
    }

    #[test]
    fn with_count() {
        let p = Pluraliser::new();
        assert_eq!(p.with_count("cat", 1), "cat");
        assert_eq!(p.with_count("cats", 1), "cat");
        assert_eq!(p.with_count("cat", 2), "cats");
        assert_eq!(p.with_count("cat", 0), "cats");
        assert_eq!(p.with_count("cat", -1), "cats");
        assert_eq!(p.with_count("ox", 3), "oxen");
    }

    #[test]
    fn with_count_inclusive() {
        let p = Pluraliser::new();
        assert_eq!(p.with_count_inclusive("cat", 3), "3 cat");
        assert_eq!(p.with_count_inclusive("cat", 1), "1 cat");
        assert_eq!(p.with_count_inclusive("cats", 0), "0 cats");
        assert_eq!(p.with_count_inclusive("ox", -2), "-2 ox");
    }

    #[test]
    fn is_plural_and_is_singular() {
        let p = Pluraliser::new();
        let tests = [
            ("cat", false, true),
            ("cats", true, false),
            ("oxen", true, false),
            ("ox", false, true),
            ("boxes", true, false),
            ("sheep", false, true),
        ];
        for test in tests {
            assert_eq!(p.is_plural(test.0), test.1, "is_plural({})", test.0);
            assert_eq!(p.is_singular(test.0), test.2, "is_singular({})", test.0);
        }
    }

    #[test]
    fn later_rules_do_not_override_earlier_ones() {
        let p = Pluraliser::new();
        p.add_plural_rule("^custom$", "customi");
        // The catch-all rule already matches.
        assert_eq!(p.pluralise("custom"), "customs");
        // Words handled by a specific rule never reach the catch-all.
        assert_eq!(p.pluralise("box"), "boxes");

        let p = Pluraliser::empty();
        p.add_plural_rule("^custom$", "customi");
        p.add_plural_rule("^cust", "nope");
        assert_eq!(p.pluralise("custom"), "customi");
        assert_eq!(p.pluralise("customer"), "nopeomer");
    }

    #[test]
    fn empty_pluraliser_passes_words_through() {
        let p = Pluraliser::empty();
        assert_eq!(p.pluralise("Cat"), "Cat");
        assert_eq!(p.singularise("oxen"), "oxen");
    }

    #[test]
    fn irregulars_beat_rules() {
        let p = Pluraliser::new();
        p.add_irregular_rule("Custom", "CUSTOMZ");
        assert_eq!(p.pluralise("custom"), "customz");
        assert_eq!(p.pluralise("Custom"), "Customz");
        assert_eq!(p.singularise("customz"), "custom");
    }

    #[test]
    fn last_irregular_wins() {
        let p = Pluraliser::empty();
        p.add_irregular_rule("foo", "bar");
        p.add_irregular_rule("foo", "baz");
        assert_eq!(p.pluralise("foo"), "baz");
        assert_eq!(p.singularise("baz"), "foo");
        assert_eq!(p.singularise("bar"), "foo");
    }

    #[test]
    fn uncountable_rule() {
        let p = Pluraliser::new();
        assert_eq!(p.pluralise("sheep"), "sheeps");
        p.add_uncountable_rule("Sheep");
        assert_eq!(p.pluralise("sheep"), "sheep");
        assert_eq!(p.singularise("Sheep"), "Sheep");
    }

    #[test]
    fn singular_rules() {
        let p = Pluraliser::empty();
        p.add_singular_rule("(o)ngs$", "${1}ng");
        p.add_singular_rule("s$", "");
        assert_eq!(p.singularise("songs"), "song");
        assert_eq!(p.singularise("Dogs"), "Dog");
    }

    #[test]
    fn invalid_patterns() {
        let p = Pluraliser::empty();
        let err = p.try_add_plural_rule("(oops", "x").unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
        assert!(p.try_add_singular_rule("[z-a]", "x").is_err());
        // Nothing was registered.
        assert_eq!(p.pluralise("oops"), "oops");
        assert_eq!(p.singularise("z"), "z");
    }

    #[test]
    #[should_panic(expected = "Could not add plural rule")]
    fn invalid_plural_rule_panics() {
        Pluraliser::empty().add_plural_rule("(oops", "x");
    }

    #[test]
    #[should_panic(expected = "Could not add singular rule")]
    fn invalid_singular_rule_panics() {
        Pluraliser::empty().add_singular_rule("[", "x");
    }

    #[test]
    fn shared_between_threads() {
        let p = Arc::new(Pluraliser::new());
        let handles = (0..4)
            .map(|i| {
                let p = Arc::clone(&p);
                thread::spawn(move || {
                    p.add_irregular_rule(&format!("thing{}", i), &format!("thingen{}", i));
                    for _ in 0..100 {
                        assert_eq!(p.pluralise("box"), "boxes");
                    }
                    p.pluralise(&format!("thing{}", i))
                })
            })
            .collect::<Vec<_>>();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("thingen{}", i));
        }
    }

    #[test]
    #[traced_test]
    fn lookups_are_logged() {
        let p = Pluraliser::new();
        p.add_plural_rule("^zzz$", "zzzs");
        assert_eq!(p.pluralise("box"), "boxes");
        assert!(logs_contain("adding rule"));
        assert!(logs_contain("matched rule"));
    }
}
