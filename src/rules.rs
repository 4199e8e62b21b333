//! The [Rule] type and the built-in rule tables.
//!
//! The tables are English linguistic data, not policy. They are registered
//! in the order they appear here: irregular pairs first, then the plural
//! and singular pattern rules, and finally the uncountable words. Because
//! uncountables go in last they win over any irregular pair that shares a
//! key with them (for example "they").
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use thiserror::Error;

/// Errors from registering rules.
#[derive(Debug, Error)]
pub enum Error {
    /// The pattern given for a plural or singular rule is not a valid regex.
    #[error("{pattern:?} is not a valid rule pattern: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

/// A pattern rule: a case-insensitive regex plus the replacement template
/// applied to whatever it matches. The template may refer to capture
/// groups as `${0}` (the whole match), `${1}`, and so on.
#[derive(Clone, Debug)]
pub struct Rule {
    pattern: String,
    regex: Regex,
    replacement: String,
}

impl Rule {
    /// Compiles `pattern` with case-insensitive matching.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, Error> {
        let regex =
            Regex::new(&format!("(?i){}", pattern)).map_err(|source| Error::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
            replacement: replacement.to_string(),
        })
    }

    /// The pattern as it was registered, without the case-insensitive flag.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub(crate) fn is_match(&self, token: &str) -> bool {
        self.regex.is_match(token)
    }

    pub(crate) fn apply<'a>(&self, token: &'a str) -> Cow<'a, str> {
        self.regex.replace_all(token, self.replacement.as_str())
    }
}

pub(crate) static IRREGULARS: &[(&str, &str)] = &[
    // Pronouns.
    ("I", "we"),
    ("me", "us"),
    ("he", "they"),
    ("she", "they"),
    ("myself", "ourselves"),
    ("yourself", "yourselves"),
    ("itself", "themselves"),
    ("herself", "themselves"),
    ("himself", "themselves"),
    ("themself", "themselves"),
    ("is", "are"),
    ("was", "were"),
    ("has", "have"),
    ("this", "these"),
    ("that", "those"),
    // Words ending in a consonant and `o`.
    ("echo", "echoes"),
    ("dingo", "dingoes"),
    ("volcano", "volcanoes"),
    ("tornado", "tornadoes"),
    ("torpedo", "torpedoes"),
    // Ends with `us`.
    ("genus", "genera"),
    ("viscus", "viscera"),
    // Ends with `ma`.
    ("stigma", "stigmata"),
    ("stoma", "stomata"),
    ("dogma", "dogmata"),
    ("lemma", "lemmata"),
    ("schema", "schemata"),
    ("anathema", "anathemata"),
    // Everything else.
    ("ox", "oxen"),
    ("axe", "axes"),
    ("die", "dice"),
    ("yes", "yeses"),
    ("foot", "feet"),
    ("eave", "eaves"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    ("quiz", "quizzes"),
    ("human", "humans"),
    ("proof", "proofs"),
    ("carve", "carves"),
    ("valve", "valves"),
    ("looey", "looies"),
    ("thief", "thieves"),
    ("groove", "grooves"),
    ("pickaxe", "pickaxes"),
    ("whiskey", "whiskies"),
];

static PLURAL_RULE_DATA: &[(&str, &str)] = &[
    (r"^thou$", "you"),
    (r"m[ae]n$", "men"),
    (r"eaux$", "${0}"),
    (r"(child)(?:ren)?$", "${1}ren"),
    (r"(pe)(?:rson|ople)$", "${1}ople"),
    (r"(m|l)(?:ice|ouse)$", "${1}ice"),
    (r"(x|ch|ss|sh|zz)$", "${1}es"),
    (r"([^ch][ieo][ln])ey$", "${1}ies"),
    (r"([^aeiouy]|qu)y$", "${1}ies"),
    (r"(?:(kni|wi|li)fe|(ar|l|ea|eo|oa|hoo)f)$", "${1}${2}ves"),
    (r"sis$", "ses"),
    (
        r"(apheli|hyperbat|periheli|asyndet|noumen|phenomen|criteri|organ|prolegomen|hedr|automat)(?:a|on)$",
        "${1}a",
    ),
    (
        r"(agend|addend|millenni|dat|extrem|bacteri|desiderat|strat|candelabr|errat|ov|symposi|curricul|automat|quor)(?:a|um)$",
        "${1}a",
    ),
    (r"(her|at|gr)o$", "${1}oes"),
    (r"(seraph|cherub)(?:im)?$", "${1}im"),
    (r"(alumn|alg|vertebr)(?:a|ae)$", "${1}ae"),
    (
        r"(alumn|syllab|octop|vir|radi|nucle|fung|cact|stimul|termin|bacill|foc|uter|loc|strat)(?:us|i)$",
        "${1}i",
    ),
    (r"([^l]ias|[aeiou]las|[emjzr]as|[iu]am)$", "${1}"),
    (r"(e[mn]u)s?$", "${1}s"),
    (r"(alias|[^aou]us|tlas|gas|ris)$", "${1}es"),
    (r"(ax|test)is$", "${1}es"),
    (r"([^aeiou]ese)$", "${1}"),
    // Leave words ending in anything outside ASCII alone.
    (r"[^\x00-\x7F]$", "${0}"),
    // Catch-all. This must stay last.
    (r"s?$", "s"),
];

static SINGULAR_RULE_DATA: &[(&str, &str)] = &[
    (r"men$", "man"),
    (r"(eau)x?$", "${1}"),
    (r"(child)ren$", "${1}"),
    (r"(pe)(rson|ople)$", "${1}rson"),
    (r"(matr|append)ices$", "${1}ix"),
    (r"(cod|mur|sil|vert|ind)ices$", "${1}ex"),
    (r"(alumn|alg|vertebr)ae$", "${1}a"),
    (
        r"(apheli|hyperbat|periheli|asyndet|noumen|phenomen|criteri|organ|prolegomen|hedr|automat)a$",
        "${1}on",
    ),
    (
        r"(agend|addend|millenni|dat|extrem|bacteri|desiderat|strat|candelabr|errat|ov|symposi|curricul|quor)a$",
        "${1}um",
    ),
    (
        r"(alumn|syllab|octop|vir|radi|nucle|fung|cact|stimul|termin|bacill|foc|uter|loc|strat)(?:us|i)$",
        "${1}us",
    ),
    (r"(test)(?:is|es)$", "${1}is"),
    (r"(movie|twelve|abuse|e[mn]u)s$", "${1}"),
    (
        r"(analy|ba|diagno|parenthe|progno|synop|the|empha|cri)(?:sis|ses)$",
        "${1}sis",
    ),
    (
        r"(x|ch|ss|sh|zz|tto|go|cho|alias|[^aou]us|tlas|gas|(?:her|at|gr)o|ris)(?:es)?$",
        "${1}",
    ),
    (r"(seraph|cherub)im$", "${1}"),
    (r"(m|l)ice$", "${1}ouse"),
    // These two start with a literal backspace and so never match an
    // ordinary word. Words like "monies" fall through to `ies$`.
    (r"\x08(mon|smil)ies$", "${1}ey"),
    (
        r"\x08([pl]|zomb|(?:neck|cross)?t|coll|faer|food|gen|goon|group|lass|talk|goal|cut)ies$",
        "${1}ie",
    ),
    (r"ies$", "y"),
    (r"(ar|(?:wo|[ae])l|[eo][ao])ves$", "${1}f"),
    (
        r"(wi|kni|(?:after|half|high|low|mid|non|night|[^\w]|^)li)ves$",
        "${1}fe",
    ),
    (r"(ss)$", "${1}"),
    (r"s$", ""),
];

pub(crate) static UNCOUNTABLES: &[&str] = &[
    "adulthood",
    "advice",
    "agenda",
    "aid",
    "alcohol",
    "ammo",
    "anime",
    "athletics",
    "audio",
    "bison",
    "blood",
    "bream",
    "buffalo",
    "butter",
    "carp",
    "cash",
    "chassis",
    "chess",
    "clothing",
    "cod",
    "commerce",
    "cooperation",
    "corps",
    "debris",
    "diabetes",
    "digestion",
    "elk",
    "energy",
    "equipment",
    "excretion",
    "expertise",
    "flounder",
    "fun",
    "gallows",
    "garbage",
    "graffiti",
    "headquarters",
    "health",
    "herpes",
    "highjinks",
    "homework",
    "housework",
    "information",
    "jeans",
    "justice",
    "kudos",
    "labour",
    "literature",
    "machinery",
    "mackerel",
    "mail",
    "media",
    "mews",
    "moose",
    "music",
    "manga",
    "news",
    "pike",
    "plankton",
    "pliers",
    "pollution",
    "premises",
    "rain",
    "research",
    "rice",
    "salmon",
    "scissors",
    "series",
    "sewage",
    "shambles",
    "shrimp",
    "species",
    "staff",
    "swine",
    "tennis",
    "they",
    "them",
    "traffic",
    "transporation",
    "trout",
    "tuna",
    "wealth",
    "welfare",
    "whiting",
    "wildebeest",
    "wildlife",
    "you",
];

pub(crate) static PLURAL_RULES: Lazy<Vec<Rule>> =
    Lazy::new(|| compile(PLURAL_RULE_DATA, "plural"));

pub(crate) static SINGULAR_RULES: Lazy<Vec<Rule>> =
    Lazy::new(|| compile(SINGULAR_RULE_DATA, "singular"));

fn compile(data: &[(&str, &str)], which: &str) -> Vec<Rule> {
    data.iter()
        .map(|(pattern, replacement)| {
            Rule::new(pattern, replacement)
                .unwrap_or_else(|e| panic!("Could not parse built-in {} rule: {}", which, e))
        })
        .collect()
}
