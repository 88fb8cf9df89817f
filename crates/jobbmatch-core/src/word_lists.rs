//! Curated word lists for term extraction and recommendations.
//!
//! Stop-words (Swedish function words plus the English ones that turn up in
//! mixed-language postings) and language alias groups.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Function words dropped by the keyword extractor.
///
/// Only words of three or more characters matter here; shorter tokens are
/// removed by the length filter before this set is consulted.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Swedish
        "och", "att", "det", "som", "för", "med", "den", "har", "till", "inte", "ett", "var",
        "han", "hon", "men", "ska", "kan", "vid", "från", "eller", "sig", "efter", "vara",
        "också", "där", "när", "dig", "din", "ditt", "dina", "vår", "vårt", "våra", "oss",
        "hos", "utan", "över", "under", "genom", "mot", "samt", "alla", "även", "mer",
        "mycket", "bara", "här", "vill", "blir", "bli", "hade", "sin", "sitt", "sina", "vad",
        "detta", "dessa", "denna", "vilken", "vilket", "vilka", "eftersom", "sedan", "både",
        "inom", "kommer", "finns", "får", "andra", "annat", "hur", "era", "man", "någon",
        "något", "några", "min", "mitt", "mina", "dem", "deras",
        // English
        "the", "and", "for", "with", "you", "are", "our", "your", "will", "this", "that",
        "from", "have", "has", "who", "not", "but", "all", "can", "was", "were",
    ]
    .into_iter()
    .collect()
});

/// Language alias groups recognized in job requirements.
///
/// The first entry of each group is the canonical (Swedish) name. A candidate
/// who lists any alias in a group is treated as speaking that language.
pub const LANGUAGE_GROUPS: &[&[&str]] = &[
    &["svenska", "swedish"],
    &["engelska", "english"],
    &["tyska", "german", "deutsch"],
    &["franska", "french"],
    &["spanska", "spanish"],
    &["finska", "finnish"],
    &["norska", "norwegian"],
    &["danska", "danish"],
    &["arabiska", "arabic"],
];

/// Returns `true` if `word` is a stop-word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Returns the alias group a language name belongs to, if any.
pub fn language_group(name: &str) -> Option<&'static [&'static str]> {
    LANGUAGE_GROUPS
        .iter()
        .copied()
        .find(|group| group.contains(&name))
}
