//! Suffix removal: inflectional particles and possessive pronouns,
//! derivational `-kan`/`-an`/`-i`, and the "people" suffixes `-man`/`-wan`/`-wati`.
//!
//! Every remover returns a leading slice of its input, never a new string.

use std::borrow::Cow;

use tracing::{Level, enabled, trace};

use crate::{dictionary::Lexicon, guard::disallowed_combination};

/// Particles, outermost inflection layer.
const PARTICLES: [&str; 4] = ["lah", "kah", "tah", "pun"];

/// Possessive pronouns, innermost inflection layer.
const POSSESSIVE_PRONOUNS: [&str; 3] = ["ku", "mu", "nya"];

const DERIVATION_KAN: &str = "kan";
const DERIVATION_SUFFIXES: [&str; 2] = ["an", "i"];

const PEOPLE_SUFFIXES: [&str; 2] = ["man", "wan"];
const PEOPLE_FEMININE: &str = "wati";

fn strip_any<'w>(word: &'w str, suffixes: &[&str]) -> Option<&'w str> {
    suffixes.iter().find_map(|suffix| word.strip_suffix(suffix))
}

/// Strip a particle and/or a possessive pronoun.
///
/// The pronoun sits inside the particle (`buku-mu-kah`), so it is only looked
/// for again after a particle came off. Not gated on the dictionary.
pub fn remove_inflection_suffixes(word: &str) -> &str {
    if let Some(rest) = strip_any(word, &PARTICLES) {
        return strip_any(rest, &POSSESSIVE_PRONOUNS).unwrap_or(rest);
    }
    strip_any(word, &POSSESSIVE_PRONOUNS).unwrap_or(word)
}

/// Strip `-kan`, or else `-an`/`-i`, but only when the result is a root.
///
/// Both attempts start from `word`; a miss returns `word` unchanged.
pub fn remove_derivation_suffixes<'w, L>(word: &'w str, lexicon: &L) -> &'w str
where
    L: Lexicon + ?Sized,
{
    let mut candidate = None;

    if let Some(base) = word.strip_suffix(DERIVATION_KAN) {
        if lexicon.contains(base) {
            return base;
        }
        candidate = Some(base);
    }

    if let Some(base) = strip_any(word, &DERIVATION_SUFFIXES) {
        if lexicon.contains(base) {
            return base;
        }
        candidate = Some(base);
    }

    roll_back(word, candidate)
}

/// Strip `-man`/`-wan`, or else `-wati`, when the result is a root.
pub fn remove_derivation_people<'w, L>(word: &'w str, lexicon: &L) -> &'w str
where
    L: Lexicon + ?Sized,
{
    let mut candidate = None;

    if let Some(base) = strip_any(word, &PEOPLE_SUFFIXES) {
        if lexicon.contains(base) {
            return base;
        }
        candidate = Some(base);
    }

    if let Some(base) = word.strip_suffix(PEOPLE_FEMININE) {
        if lexicon.contains(base) {
            return base;
        }
        candidate = Some(base);
    }

    roll_back(word, candidate)
}

// A rejected candidate never survives; the guard only decides how the
// rollback is reported, so it is skipped unless tracing is on.
fn roll_back<'w>(word: &'w str, candidate: Option<&str>) -> &'w str {
    if enabled!(Level::TRACE) {
        if let Some(combination) = candidate.and_then(disallowed_combination) {
            trace!(word, combination, "suffix strip vetoed by prefix-suffix combination");
        }
    }
    word
}

/// Apply a slice-returning remover to a `Cow`, keeping borrowed input
/// borrowed and truncating owned input in place.
pub(crate) fn shrink<'w>(text: Cow<'w, str>, remove: impl FnOnce(&str) -> &str) -> Cow<'w, str> {
    match text {
        Cow::Borrowed(s) => {
            let kept = remove(s).len();
            Cow::Borrowed(&s[..kept])
        }
        Cow::Owned(mut s) => {
            let kept = remove(&s).len();
            s.truncate(kept);
            Cow::Owned(s)
        }
    }
}
