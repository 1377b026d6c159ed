//! Prefix–suffix co-occurrence predicates.
//!
//! Indonesian forbids some confix pairings (`be-…-i`, `me-…-an`, …) while
//! explicitly allowing others that look alike (`be-…-lah`, `di-…-i`, …).

use once_cell::sync::Lazy;
use regex::RegexSet;

/// Disallowed confixes, in the order they are reported.
const DISALLOWED: [(&str, &str); 6] = [
    ("be-…-i", r"^be[a-z\-]+i$"),
    ("di-…-an", r"^di[a-z\-]+an$"),
    ("ke-…-i|kan", r"^ke[a-z\-]+(i|kan)$"),
    ("me-…-an", r"^me[a-z\-]+an$"),
    ("se-…-i|kan", r"^se[a-z\-]+(i|kan)$"),
    ("te-…-an", r"^te[a-z\-]+an$"),
];

const PRECEDENCE: [&str; 2] = [r"^be[a-z\-]+(lah|an)$", r"^(di|[mpt]e)[a-z\-]+i$"];

static DISALLOWED_SET: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new(DISALLOWED.iter().map(|(_, pattern)| pattern))
        .expect("built-in disallowed-combination patterns failed to compile – this is a bug")
});

static PRECEDENCE_SET: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new(PRECEDENCE)
        .expect("built-in rule-precedence patterns failed to compile – this is a bug")
});

/// Name of the first disallowed prefix+suffix pairing `word` exhibits.
pub fn disallowed_combination(word: &str) -> Option<&'static str> {
    DISALLOWED_SET
        .matches(word)
        .iter()
        .next()
        .map(|index| DISALLOWED[index].0)
}

pub fn is_disallowed_prefix_suffixes(word: &str) -> bool {
    DISALLOWED_SET.is_match(word)
}

/// Pairings that are legal even though they resemble a disallowed one.
///
/// Exposed for callers; the stemming pipeline does not consult it.
pub fn is_rule_precedence(word: &str) -> bool {
    PRECEDENCE_SET.is_match(word)
}
