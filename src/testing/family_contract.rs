use std::{borrow::Cow, ptr};

use crate::{
    dictionary::RootDictionary,
    prefix::{remove_derivation_prefixes, remove_with_family},
};

/// Fixture for one prefix family.
pub struct FamilyCase {
    /// Family name as listed in the rule table.
    pub family: &'static str,
    /// Dictionary the hits and misses run against.
    pub roots: &'static [&'static str],
    /// Words this family must reduce, with the expected root.
    pub hits: &'static [(&'static str, &'static str)],
    /// Words no family may reduce under `roots`.
    pub misses: &'static [&'static str],
}

/// Assert that a prefix family satisfies the shared contracts:
///
/// 1. `hits_are_attributed` → each hit reaches its root through `family`
/// 2. `misses_return_base` → a miss hands back the input slice itself
/// 3. `empty_dictionary_returns_base` → nothing is invented without roots
/// 4. `never_lengthens` → output is never longer than the input
/// 5. `no_panic_on_odd_input` → empty, short and mixed-script words
#[macro_export]
macro_rules! assert_family_contract {
    ($case:expr) => {{
        let case = $case;
        $crate::testing::family_contract::hits_are_attributed(&case);
        $crate::testing::family_contract::misses_return_base(&case);
        $crate::testing::family_contract::empty_dictionary_returns_base(&case);
        $crate::testing::family_contract::never_lengthens(&case);
        $crate::testing::family_contract::no_panic_on_odd_input(&case);
    }};
}

fn dictionary(case: &FamilyCase) -> RootDictionary {
    RootDictionary::from_words(case.roots.iter().copied())
}

fn assert_base(input: &str, out: &Cow<'_, str>, family: &str) {
    match out {
        Cow::Borrowed(s) => assert!(
            ptr::eq(*s, input),
            "{family}: miss on `{input}` returned a different slice"
        ),
        Cow::Owned(s) => panic!("{family}: miss on `{input}` allocated `{s}`"),
    }
}

pub fn hits_are_attributed(case: &FamilyCase) {
    let dict = dictionary(case);
    for &(input, expected) in case.hits {
        let (stem, family) = remove_with_family(input, &dict);
        assert_eq!(stem, expected, "{}: wrong root for `{input}`", case.family);
        assert_eq!(
            family,
            Some(case.family),
            "`{input}` was claimed by another family"
        );
    }
}

pub fn misses_return_base(case: &FamilyCase) {
    let dict = dictionary(case);
    for &input in case.misses {
        let out = remove_derivation_prefixes(input, &dict);
        assert_base(input, &out, case.family);
    }
}

pub fn empty_dictionary_returns_base(case: &FamilyCase) {
    let dict = RootDictionary::new();
    for input in case.hits.iter().map(|(input, _)| *input).chain(case.misses.iter().copied()) {
        let out = remove_derivation_prefixes(input, &dict);
        assert_base(input, &out, case.family);
    }
}

pub fn never_lengthens(case: &FamilyCase) {
    let dict = dictionary(case);
    for input in case.hits.iter().map(|(input, _)| *input).chain(case.misses.iter().copied()) {
        let out = remove_derivation_prefixes(input, &dict);
        assert!(
            out.chars().count() <= input.chars().count(),
            "{}: `{input}` grew into `{out}`",
            case.family
        );
    }
}

pub fn no_panic_on_odd_input(case: &FamilyCase) {
    let dict = dictionary(case);
    for input in ["", "a", "me", "pe", "ñeñ", "mem日本", "pengʻ", "di\u{301}", "lelé"] {
        let _ = remove_derivation_prefixes(input, &dict);
    }
}
