//! Term matching strategies.
//!
//! A requirement term is tried against each strategy in order; the first one
//! that accepts it classifies the term as matched.

use crate::keywords::{MIN_TERM_CHARS, TermSet};
use crate::synonyms::SynonymTable;

/// One way of deciding that a candidate covers a requirement term.
pub trait TermMatcher: Send + Sync {
    /// Short identifier, used in logs.
    fn name(&self) -> &'static str;

    /// Returns `true` if `candidate` covers `term`.
    fn matches(&self, term: &str, candidate: &TermSet) -> bool;
}

/// The term appears verbatim among the candidate terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher;

impl TermMatcher for ExactMatcher {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn matches(&self, term: &str, candidate: &TermSet) -> bool {
        candidate.contains(term)
    }
}

/// The term contains a candidate term, or a candidate term contains it.
///
/// Catches compounds and partial forms ("react" in "reactutvecklare").
/// Short unrelated terms that share a substring also match; that false
/// positive rate is accepted in exchange for recall on Swedish compounds.
/// Candidate terms shorter than [`MIN_TERM_CHARS`] (literal skills such as
/// "R" or "Go") only take part in exact and synonym matching.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl TermMatcher for SubstringMatcher {
    fn name(&self) -> &'static str {
        "substring"
    }

    fn matches(&self, term: &str, candidate: &TermSet) -> bool {
        candidate
            .iter()
            .filter(|c| c.chars().count() >= MIN_TERM_CHARS)
            .any(|c| term.contains(c) || c.contains(term))
    }
}

/// A synonym of the term appears among the candidate terms.
#[derive(Debug, Clone, Copy)]
pub struct SynonymMatcher<'a> {
    table: &'a SynonymTable,
}

impl<'a> SynonymMatcher<'a> {
    /// Match through `table`.
    pub const fn new(table: &'a SynonymTable) -> Self {
        Self { table }
    }
}

impl TermMatcher for SynonymMatcher<'_> {
    fn name(&self) -> &'static str {
        "synonym"
    }

    fn matches(&self, term: &str, candidate: &TermSet) -> bool {
        self.table
            .expand(term)
            .iter()
            .any(|related| candidate.contains(related))
    }
}
