//! Derivational prefix removal.
//!
//! Nasal prefixes assimilate to the root's first consonant (`me-` + `sapu`
//! surfaces as `menyapu`), which loses information. Each allomorph therefore
//! lists every plausible restoration and the first one the dictionary
//! confirms, bare or after dropping a derivational suffix, wins.
//!
//! The rule table lives in [`rules`]; this module compiles it once and runs
//! the single dispatch loop over it.

pub mod rules;

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::{
    dictionary::Lexicon,
    suffix::{remove_derivation_suffixes, shrink},
};

/// When a family or rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Regex matched against the whole word.
    Pattern(&'static str),
    /// `CeC…` where both `C` are the same non-vowel, followed by a vowel and
    /// at least one more character ("lelaki", "teterbang").
    Reduplicated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strip {
    Prefix(&'static str),
    /// Drop this many leading characters.
    Leading(usize),
}

/// One candidate reconstruction: remove the surface prefix, then put back
/// `prepend` as the root's initial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Restoration {
    pub strip: Strip,
    pub prepend: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixRule {
    pub trigger: Trigger,
    pub restorations: &'static [Restoration],
    pub nested: Option<&'static PrefixRule>,
    /// Stop the whole prefix pass and keep the word as is.
    pub halts: bool,
}

/// How a family interacts with the suffix-stripped form handed down from
/// earlier families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Carry {
    Ignore,
    /// Remember the suffix-stripped form of the last restoration tried.
    Record,
    /// Run on the remembered form when there is one.
    Consume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixFamily {
    pub name: &'static str,
    pub trigger: Trigger,
    pub carry: Carry,
    pub rules: &'static [PrefixRule],
}

impl Restoration {
    /// `None` when `word` does not carry the prefix.
    pub fn apply<'w>(&self, word: &'w str) -> Option<Cow<'w, str>> {
        let rest = match self.strip {
            Strip::Prefix(prefix) => word.strip_prefix(prefix)?,
            Strip::Leading(count) => {
                let skip: usize = word.chars().take(count).map(char::len_utf8).sum();
                &word[skip..]
            }
        };
        if self.prepend.is_empty() {
            return Some(Cow::Borrowed(rest));
        }
        let mut restored = String::with_capacity(self.prepend.len() + rest.len());
        restored.push_str(self.prepend);
        restored.push_str(rest);
        Some(Cow::Owned(restored))
    }
}

#[inline]
fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

fn is_reduplicated(word: &str) -> bool {
    let mut chars = word.chars();
    let (Some(first), Some('e'), Some(again), Some(vowel), Some(next)) = (
        chars.next(),
        chars.next(),
        chars.next(),
        chars.next(),
        chars.next(),
    ) else {
        return false;
    };
    !is_vowel(first) && again == first && is_vowel(vowel) && !next.is_whitespace()
}

enum Matcher {
    Pattern(Regex),
    Reduplicated,
}

impl Matcher {
    fn compile(trigger: Trigger) -> Self {
        match trigger {
            Trigger::Pattern(pattern) => Matcher::Pattern(
                Regex::new(pattern)
                    .expect("built-in prefix pattern failed to compile – this is a bug"),
            ),
            Trigger::Reduplicated => Matcher::Reduplicated,
        }
    }

    #[inline]
    fn matches(&self, word: &str) -> bool {
        match self {
            Matcher::Pattern(regex) => regex.is_match(word),
            Matcher::Reduplicated => is_reduplicated(word),
        }
    }
}

struct CompiledRule {
    rule: &'static PrefixRule,
    matcher: Matcher,
    nested: Option<Box<CompiledRule>>,
}

impl CompiledRule {
    fn compile(rule: &'static PrefixRule) -> Self {
        Self {
            rule,
            matcher: Matcher::compile(rule.trigger),
            nested: rule.nested.map(|nested| Box::new(Self::compile(nested))),
        }
    }
}

struct CompiledFamily {
    family: &'static PrefixFamily,
    matcher: Matcher,
    rules: Vec<CompiledRule>,
}

static FAMILIES: Lazy<Vec<CompiledFamily>> = Lazy::new(|| {
    rules::PREFIX_FAMILIES
        .iter()
        .map(|family| CompiledFamily {
            family,
            matcher: Matcher::compile(family.trigger),
            rules: family.rules.iter().map(CompiledRule::compile).collect(),
        })
        .collect()
});

enum Attempt<'s> {
    Root(Cow<'s, str>),
    Halt,
    /// Nothing validated; carries the suffix-stripped form of the last
    /// restoration tried, if any was.
    Miss(Option<Cow<'s, str>>),
}

impl Attempt<'_> {
    fn detach(self) -> Attempt<'static> {
        match self {
            Attempt::Root(root) => Attempt::Root(Cow::Owned(root.into_owned())),
            Attempt::Halt => Attempt::Halt,
            Attempt::Miss(last) => Attempt::Miss(last.map(|s| Cow::Owned(s.into_owned()))),
        }
    }
}

impl CompiledFamily {
    fn attempt<'s, L>(&self, input: &'s str, lexicon: &L) -> Attempt<'s>
    where
        L: Lexicon + ?Sized,
    {
        if !self.matcher.matches(input) {
            return Attempt::Miss(None);
        }
        let Some(first) = self.rules.iter().find(|rule| rule.matcher.matches(input)) else {
            return Attempt::Miss(None);
        };

        let mut last = None;
        let mut current = Some(first);
        while let Some(compiled) = current {
            if compiled.rule.halts {
                trace!(family = self.family.name, word = input, "prefix pass halted");
                return Attempt::Halt;
            }
            for restoration in compiled.rule.restorations {
                let Some(candidate) = restoration.apply(input) else {
                    continue;
                };
                if lexicon.contains(&candidate) {
                    trace!(
                        family = self.family.name,
                        word = input,
                        root = %candidate,
                        "prefix restored"
                    );
                    return Attempt::Root(candidate);
                }
                let stripped = shrink(candidate, |w| remove_derivation_suffixes(w, lexicon));
                if lexicon.contains(&stripped) {
                    trace!(
                        family = self.family.name,
                        word = input,
                        root = %stripped,
                        "prefix restored after suffix"
                    );
                    return Attempt::Root(stripped);
                }
                last = Some(stripped);
            }
            current = compiled
                .nested
                .as_deref()
                .filter(|nested| nested.matcher.matches(input));
        }
        Attempt::Miss(last)
    }
}

/// Remove a derivational prefix, returning `word` itself when no restoration
/// reaches a root.
pub fn remove_derivation_prefixes<'w, L>(word: &'w str, lexicon: &L) -> Cow<'w, str>
where
    L: Lexicon + ?Sized,
{
    remove_with_family(word, lexicon).0
}

/// Like [`remove_derivation_prefixes`], also naming the family that found
/// the root.
pub fn remove_with_family<'w, L>(
    word: &'w str,
    lexicon: &L,
) -> (Cow<'w, str>, Option<&'static str>)
where
    L: Lexicon + ?Sized,
{
    let mut carried: Option<Cow<'w, str>> = None;

    for compiled in FAMILIES.iter() {
        let family = compiled.family;
        let attempt = match (&carried, family.carry) {
            (Some(Cow::Borrowed(input)), Carry::Consume) => compiled.attempt(*input, lexicon),
            (Some(Cow::Owned(input)), Carry::Consume) => compiled.attempt(input, lexicon).detach(),
            _ => compiled.attempt(word, lexicon),
        };
        match attempt {
            Attempt::Root(root) => return (root, Some(family.name)),
            Attempt::Halt => break,
            Attempt::Miss(Some(stripped)) if family.carry == Carry::Record => {
                carried = Some(stripped);
            }
            Attempt::Miss(_) => {}
        }
    }
    (Cow::Borrowed(word), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_family_contract, dictionary::RootDictionary, testing::family_contract::FamilyCase,
    };

    #[test]
    fn every_built_in_pattern_compiles() {
        assert_eq!(FAMILIES.len(), rules::PREFIX_FAMILIES.len());
    }

    #[test]
    fn restoration_replaces_one_leading_prefix() {
        let r = Restoration { strip: Strip::Prefix("mem"), prepend: "p" };
        assert_eq!(r.apply("memukul").as_deref(), Some("pukul"));
        assert_eq!(r.apply("makan"), None);

        let r = Restoration { strip: Strip::Prefix("ber"), prepend: "" };
        assert!(matches!(r.apply("berlari"), Some(Cow::Borrowed("lari"))));
    }

    #[test]
    fn leading_strip_counts_characters() {
        let r = Restoration { strip: Strip::Leading(2), prepend: "" };
        assert_eq!(r.apply("lelaki").as_deref(), Some("laki"));
        assert_eq!(r.apply("ñeñak").as_deref(), Some("ñak"));
        assert_eq!(r.apply("a").as_deref(), Some(""));
    }

    #[test]
    fn reduplication_shape() {
        assert!(is_reduplicated("lelaki"));
        assert!(is_reduplicated("teterbang"));
        assert!(!is_reduplicated("lela"));
        assert!(!is_reduplicated("tet"));
        assert!(!is_reduplicated("me"));
        assert!(!is_reduplicated("aeaia"));
        assert!(!is_reduplicated("penuh"));
    }

    #[test]
    fn nested_exception_runs_after_the_plain_strip() {
        // Both "berikan" → "beri" and "member" → "ikan" validate; the plain
        // `mem-` strip comes first.
        let dict = RootDictionary::from_words(["beri", "ikan"]);
        assert_eq!(remove_derivation_prefixes("memberikan", &dict), "beri");
        let dict = RootDictionary::from_words(["daya"]);
        assert_eq!(remove_derivation_prefixes("memberdayakan", &dict), "daya");
    }

    #[test]
    fn pe_family_runs_on_the_carried_form() {
        let dict = RootDictionary::from_words(["langgan"]);
        let (stem, family) = remove_with_family("berpelanggan", &dict);
        assert_eq!(stem, "langgan");
        assert_eq!(family, Some("pe"));

        let dict = RootDictionary::from_words(["baru"]);
        assert_eq!(remove_derivation_prefixes("memperbarui", &dict), "baru");
    }

    #[test]
    fn di_ke_se_does_not_hand_down_to_pe() {
        let dict = RootDictionary::from_words(["baik"]);
        assert_eq!(remove_derivation_prefixes("diperbaiki", &dict), "diperbaiki");
    }

    #[test]
    fn double_r_halts_the_pass() {
        let dict = RootDictionary::from_words(["rencana", "encana"]);
        let out = remove_derivation_prefixes("terrencana", &dict);
        assert!(matches!(out, Cow::Borrowed("terrencana")));
    }

    #[test]
    fn reduplicated_miss_falls_through_to_the_nasal_rules() {
        let dict = RootDictionary::from_words(["pukul"]);
        let (stem, family) = remove_with_family("memukul", &dict);
        assert_eq!(stem, "pukul");
        assert_eq!(family, Some("me"));
    }

    #[test]
    fn miss_returns_the_input_slice() {
        let dict = RootDictionary::new();
        let input = "mempermainkan";
        let out = remove_derivation_prefixes(input, &dict);
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn di_ke_se_contract() {
        assert_family_contract!(FamilyCase {
            family: "di-ke-se",
            roots: &["buang", "sakit", "suap", "untung", "sama", "bagai", "mulai"],
            hits: &[
                ("dibuang", "buang"),
                ("kesakitan", "sakit"),
                ("sesuap", "suap"),
                ("keberuntungan", "untung"),
                ("kebersamaan", "sama"),
                ("sebagai", "bagai"),
                ("dimulai", "mulai"),
            ],
            misses: &["di", "ke", "dia", "sekolah"],
        });
    }

    #[test]
    fn reduplicated_contract() {
        assert_family_contract!(FamilyCase {
            family: "reduplicated",
            roots: &["laki", "terbang", "tua", "minum"],
            hits: &[
                ("lelaki", "laki"),
                ("teterbang", "terbang"),
                ("tetua", "tua"),
                // `me-` + `m`-initial root has the same shape
                ("meminum", "minum"),
            ],
            misses: &["lelah", "bebas"],
        });
    }

    #[test]
    fn be_contract() {
        assert_family_contract!(FamilyCase {
            family: "be",
            roots: &["adu", "rambut", "suara", "daerah", "ajar", "kerja", "ternak", "iman", "tahan"],
            hits: &[
                ("beradu", "adu"),
                ("berambut", "rambut"),
                ("bersuara", "suara"),
                ("berdaerah", "daerah"),
                ("belajar", "ajar"),
                ("bekerja", "kerja"),
                ("beternak", "ternak"),
                ("bertahan", "tahan"),
            ],
            misses: &["be", "bela", "beras", "berimanlah"],
        });
    }

    #[test]
    fn te_contract() {
        assert_family_contract!(FamilyCase {
            family: "te",
            roots: &["asing", "raup", "gerak", "puruk", "percaya", "abai"],
            hits: &[
                ("terasing", "asing"),
                ("teraup", "raup"),
                ("tergerak", "gerak"),
                ("terpuruk", "puruk"),
                ("terpercaya", "percaya"),
                ("terabaikan", "abai"),
            ],
            misses: &["te", "terrasing", "tebu"],
        });
    }

    #[test]
    fn me_contract() {
        assert_family_contract!(FamilyCase {
            family: "me",
            roots: &[
                "lipat", "warna", "bangun", "fitnah", "pakai", "pukul", "cinta", "nuklir",
                "tangkap", "gila", "udara", "kupas", "nganga", "bom", "suara", "nyala",
            ],
            hits: &[
                ("melipat", "lipat"),
                ("mewarnai", "warna"),
                ("membangun", "bangun"),
                ("memfitnah", "fitnah"),
                ("memakai", "pakai"),
                ("memukul", "pukul"),
                ("mencintai", "cinta"),
                ("menuklir", "nuklir"),
                ("menangkap", "tangkap"),
                ("menggila", "gila"),
                ("mengudara", "udara"),
                ("mengupas", "kupas"),
                ("menganga", "nganga"),
                ("mengebom", "bom"),
                ("menyuarakan", "suara"),
                ("menyala", "nyala"),
            ],
            misses: &["me", "meja", "merah"],
        });
    }

    #[test]
    fn pe_contract() {
        assert_family_contract!(FamilyCase {
            family: "pe",
            roots: &[
                "warna", "adil", "rumah", "muka", "makmur", "bangun", "pukul", "cinta", "nasihat",
                "tangkap", "hajar", "kupas", "bom", "kaji", "suara", "nyanyi", "labuh", "ajar",
                "kerja", "tarung",
            ],
            hits: &[
                ("pewarna", "warna"),
                ("peradilan", "adil"),
                ("perumahan", "rumah"),
                ("permuka", "muka"),
                ("persemakmuran", "makmur"),
                ("pembangun", "bangun"),
                ("pemukul", "pukul"),
                ("pencinta", "cinta"),
                ("penasihat", "nasihat"),
                ("penangkap", "tangkap"),
                ("penghajar", "hajar"),
                ("pengupas", "kupas"),
                ("pengebom", "bom"),
                ("pengkajian", "kaji"),
                ("penyuara", "suara"),
                ("penyanyi", "nyanyi"),
                ("pelabuhan", "labuh"),
                ("pelajar", "ajar"),
                ("pekerja", "kerja"),
                ("petarung", "tarung"),
            ],
            misses: &["pe", "pena", "peta"],
        });
    }
}
