//! Root-word dictionary used as the membership oracle for every rule.
//!
//! The engine never inspects a dictionary beyond [`Lexicon::contains`], so any
//! exact-match set can stand in: the owned [`RootDictionary`], a plain
//! `HashSet<String>`, or a compile-time `phf::Set<&'static str>`.

use std::{
    collections::HashSet,
    fs::File,
    hash::BuildHasher,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::debug;

/// Small embedded word list, one root per token.
const SAMPLE_WORDS: &str = include_str!("../data/sample_roots.txt");

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary{}: {}", path_suffix(.path), .source)]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },

    #[error("dictionary source `{0}` contains no words")]
    Empty(String),
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" `{}`", p.display()))
        .unwrap_or_default()
}

impl From<io::Error> for DictionaryError {
    fn from(source: io::Error) -> Self {
        DictionaryError::Io { path: None, source }
    }
}

/// Exact-match membership test over normalized words.
pub trait Lexicon {
    fn contains(&self, word: &str) -> bool;
}

/// Immutable set of root words.
///
/// Tokens are stored verbatim; lower-casing input is the caller's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootDictionary {
    words: HashSet<Box<str>>,
}

impl RootDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an iterator of tokens. Empty tokens are skipped and
    /// duplicates collapse.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<Box<str>> = words
            .into_iter()
            .filter(|w| !w.as_ref().is_empty())
            .map(|w| Box::<str>::from(w.as_ref()))
            .collect();
        Self { words }
    }

    /// Split a delimited blob (whitespace or commas) into tokens.
    pub fn parse(text: &str) -> Self {
        Self::from_words(tokens(text))
    }

    /// A few hundred common roots, enough to exercise every affix rule.
    ///
    /// Not a lexicon: real text needs a full root list loaded with
    /// [`RootDictionary::from_path`] or [`RootDictionary::from_reader`].
    pub fn sample() -> Self {
        Self::parse(SAMPLE_WORDS)
    }

    /// Read a word list line by line. An input without a single token is
    /// treated as a configuration mistake.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        let mut words: HashSet<Box<str>> = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            words.extend(tokens(&line).map(Box::<str>::from));
        }
        if words.is_empty() {
            return Err(DictionaryError::Empty("reader".to_string()));
        }
        debug!(words = words.len(), "loaded root dictionary from reader");
        Ok(Self { words })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let with_path = |source| DictionaryError::Io {
            path: Some(path.to_path_buf()),
            source,
        };
        let file = File::open(path).map_err(with_path)?;
        match Self::from_reader(BufReader::new(file)) {
            Ok(dictionary) => {
                debug!(path = %path.display(), words = dictionary.len(), "loaded root dictionary");
                Ok(dictionary)
            }
            Err(DictionaryError::Io { source, .. }) => Err(with_path(source)),
            Err(DictionaryError::Empty(_)) => {
                Err(DictionaryError::Empty(path.display().to_string()))
            }
        }
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate the stored words in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(AsRef::as_ref)
    }
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
}

impl<S: AsRef<str>> FromIterator<S> for RootDictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

impl Lexicon for RootDictionary {
    #[inline]
    fn contains(&self, word: &str) -> bool {
        RootDictionary::contains(self, word)
    }
}

impl<S: BuildHasher> Lexicon for HashSet<String, S> {
    #[inline]
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl Lexicon for phf::Set<&'static str> {
    #[inline]
    fn contains(&self, word: &str) -> bool {
        phf::Set::contains(self, word)
    }
}
