pub mod dictionary;
pub mod guard;
pub mod prefix;
pub mod stemmer;
pub mod suffix;

#[cfg(test)]
mod testing;

pub use dictionary::{DictionaryError, Lexicon, RootDictionary};
pub use guard::{is_disallowed_prefix_suffixes, is_rule_precedence};
pub use stemmer::{Stemmer, StemmerBuilder, normalize, stem_normalized};
