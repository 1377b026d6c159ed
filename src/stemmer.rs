use std::{
    borrow::Cow,
    sync::{Arc, PoisonError, RwLock},
};

use tracing::{debug, trace};

use crate::{
    dictionary::{Lexicon, RootDictionary},
    prefix::remove_derivation_prefixes,
    suffix::{
        remove_derivation_people, remove_derivation_suffixes, remove_inflection_suffixes, shrink,
    },
};

/// Stem an already lower-cased word against `lexicon`.
///
/// Each step short-circuits on a dictionary hit:
/// 1. the word itself,
/// 2. derivational prefix removal alone,
/// 3. inflection then derivation suffix removal,
/// 4. prefix removal on the suffix-stripped form, followed by the people
///    suffixes. This last result is returned whether or not it is a root.
///
/// A word no rule can reduce comes back unchanged.
pub fn stem_normalized<'w, L>(word: &'w str, lexicon: &L) -> Cow<'w, str>
where
    L: Lexicon + ?Sized,
{
    if lexicon.contains(word) {
        trace!(word, "already a root");
        return Cow::Borrowed(word);
    }

    let prefixed = remove_derivation_prefixes(word, lexicon);
    if lexicon.contains(&prefixed) {
        trace!(word, stem = %prefixed, "stemmed by prefix pass");
        return prefixed;
    }

    let suffixed = remove_derivation_suffixes(remove_inflection_suffixes(word), lexicon);
    if lexicon.contains(suffixed) {
        trace!(word, stem = suffixed, "stemmed by suffix pass");
        return Cow::Borrowed(suffixed);
    }

    let stem = shrink(remove_derivation_prefixes(suffixed, lexicon), |w| {
        remove_derivation_people(w, lexicon)
    });
    trace!(word, stem = %stem, "stemmed by second prefix pass");
    stem
}

/// Lower-case `word` one character at a time, borrowing when it already is.
///
/// Uses the single-character mapping, so the result never has more
/// characters than the input.
pub fn normalize(word: &str) -> Cow<'_, str> {
    if word.is_ascii() {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            return Cow::Owned(word.to_ascii_lowercase());
        }
        return Cow::Borrowed(word);
    }
    if word.chars().all(|c| lower(c) == c) {
        return Cow::Borrowed(word);
    }
    Cow::Owned(word.chars().map(lower).collect())
}

// 'İ' is the only character whose full lowercase mapping is longer than one
// char; its first char is the simple mapping.
#[inline]
fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Shared stemmer over a swappable dictionary snapshot.
///
/// Every call reads one snapshot; [`Stemmer::reinitialize`] swaps in a new
/// one, so a concurrent call sees either the old dictionary or the new one.
#[derive(Debug)]
pub struct Stemmer {
    dictionary: RwLock<Arc<RootDictionary>>,
}

impl Stemmer {
    pub fn new(dictionary: RootDictionary) -> Self {
        Self::builder().dictionary(dictionary).build()
    }

    pub fn builder() -> StemmerBuilder {
        StemmerBuilder::default()
    }

    pub fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        let dictionary = self.dictionary();
        match normalize(word) {
            Cow::Borrowed(word) => stem_normalized(word, &*dictionary),
            Cow::Owned(word) => Cow::Owned(stem_normalized(&word, &*dictionary).into_owned()),
        }
    }

    /// Stem each word independently, keeping input order.
    pub fn stem_all<I, S>(&self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dictionary = self.dictionary();
        words
            .into_iter()
            .map(|word| {
                let normalized = normalize(word.as_ref());
                stem_normalized(&normalized, &*dictionary).into_owned()
            })
            .collect()
    }

    pub fn is_root_word(&self, word: &str) -> bool {
        self.dictionary().contains(&normalize(word))
    }

    /// Replace the dictionary. Calls already in flight finish on the old one.
    pub fn reinitialize(&self, dictionary: RootDictionary) {
        debug!(words = dictionary.len(), "reinitializing root dictionary");
        let dictionary = Arc::new(dictionary);
        *self
            .dictionary
            .write()
            .unwrap_or_else(PoisonError::into_inner) = dictionary;
    }

    pub fn reinitialize_from_words<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reinitialize(RootDictionary::from_words(words));
    }

    /// Current dictionary snapshot.
    pub fn dictionary(&self) -> Arc<RootDictionary> {
        self.dictionary
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[derive(Debug, Default)]
pub struct StemmerBuilder {
    dictionary: Option<RootDictionary>,
}

impl StemmerBuilder {
    pub fn dictionary(mut self, dictionary: RootDictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.dictionary = Some(RootDictionary::from_words(words));
        self
    }

    /// Without a dictionary every word comes back unchanged.
    pub fn build(self) -> Stemmer {
        let dictionary = self.dictionary.unwrap_or_default();
        debug!(words = dictionary.len(), "built stemmer");
        Stemmer {
            dictionary: RwLock::new(Arc::new(dictionary)),
        }
    }
}
