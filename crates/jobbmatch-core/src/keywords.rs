//! Keyword extraction.
//!
//! Turns free text into a [`TermSet`]: lowercase, non-letters blanked out,
//! whitespace split, short tokens and stop-words dropped, duplicates removed
//! while keeping first-seen order. There is no stemming; the matcher's
//! substring and synonym strategies absorb most morphological variation.

use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};

use crate::word_lists::is_stop_word;

/// Minimum token length, in characters.
pub const MIN_TERM_CHARS: usize = 3;

/// Anything that is neither a letter (any script) nor whitespace.
static NON_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\s]").expect("valid regex"));

/// Ordered, de-duplicated set of normalized terms.
///
/// Iteration follows insertion order. Once built it is only read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TermSet {
    terms: Vec<String>,
    index: HashSet<String>,
}

impl JsonSchema for TermSet {
    fn schema_name() -> Cow<'static, str> {
        "TermSet".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        <Vec<String>>::json_schema(generator)
    }
}

impl TermSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a term unless it is already present. Returns `true` if inserted.
    pub(crate) fn insert(&mut self, term: String) -> bool {
        if self.index.contains(&term) {
            return false;
        }
        self.index.insert(term.clone());
        self.terms.push(term);
        true
    }

    /// Append every term of `other` not already present.
    pub(crate) fn extend_from(&mut self, other: Self) {
        for term in other.terms {
            self.insert(term);
        }
    }

    /// Returns `true` if `term` is in the set.
    pub fn contains(&self, term: &str) -> bool {
        self.index.contains(term)
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if the set has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate terms in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Borrow the terms as a slice, in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }
}

impl From<Vec<String>> for TermSet {
    fn from(terms: Vec<String>) -> Self {
        let mut set = Self::new();
        for term in terms {
            set.insert(term);
        }
        set
    }
}

impl From<TermSet> for Vec<String> {
    fn from(set: TermSet) -> Self {
        set.terms
    }
}

impl<'a> IntoIterator for &'a TermSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// Extract a [`TermSet`] from one or more text fragments.
///
/// Fragments are processed in order, so the first fragment's terms come
/// first in the result.
pub fn extract_terms<'a, I>(texts: I) -> TermSet
where
    I: IntoIterator<Item = &'a str>,
{
    let mut set = TermSet::new();
    for text in texts {
        for token in tokenize(text) {
            set.insert(token);
        }
    }
    set
}

/// Lowercase and trim a literal value (a skill label, a language name).
///
/// Unlike [`extract_terms`] this keeps punctuation and short values, so
/// `"C#"` stays `"c#"`. Returns `None` for blank input.
pub fn normalize_literal(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let blanked = NON_LETTER.replace_all(&lowered, " ");
    blanked
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TERM_CHARS)
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        let terms = extract_terms(["Erfaren React-utvecklare, med TypeScript!"]);
        assert_eq!(
            terms.as_slice(),
            ["erfaren", "react", "utvecklare", "typescript"]
        );
    }

    #[test]
    fn keeps_swedish_letters() {
        let terms = extract_terms(["Kök och städ, gärna körkort"]);
        assert!(terms.contains("kök"));
        assert!(terms.contains("städ"));
        assert!(terms.contains("gärna"));
        assert!(terms.contains("körkort"));
        assert!(!terms.contains("och"));
    }

    #[test]
    fn drops_short_tokens_and_digits() {
        let terms = extract_terms(["Go 2 år C# AI sql"]);
        assert_eq!(terms.as_slice(), ["sql"]);
    }

    #[test]
    fn deduplicates_in_first_seen_order() {
        let terms = extract_terms(["java python", "Python java rust"]);
        assert_eq!(terms.as_slice(), ["java", "python", "rust"]);
    }

    #[test]
    fn empty_input_gives_empty_set() {
        assert!(extract_terms([""]).is_empty());
        assert!(extract_terms(["   ", "!!"]).is_empty());
        assert!(extract_terms(std::iter::empty::<&str>()).is_empty());
    }

    #[test]
    fn normalize_literal_keeps_symbols() {
        assert_eq!(normalize_literal("  C# ").as_deref(), Some("c#"));
        assert_eq!(normalize_literal("   "), None);
    }

    #[test]
    fn serializes_as_plain_list() {
        let terms = extract_terms(["rust tokio"]);
        let json = serde_json::to_string(&terms).unwrap();
        assert_eq!(json, r#"["rust","tokio"]"#);
        let back: TermSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, terms);
    }
}
