//! Candidate-to-job matching.
//!
//! Both sides are reduced to term sets: the candidate's skills, experience,
//! education and languages on one side, the posting's text fields on the
//! other. Every requirement term is classified exactly once as matched or
//! missing by an ordered list of [`TermMatcher`] strategies, and the score is
//! the matched share of the requirement set.
//!
//! ```
//! use jobbmatch_core::matching::analyze_match;
//! use jobbmatch_core::profile::{CandidateProfile, JobPosting};
//!
//! let candidate = CandidateProfile {
//!     skills: vec!["JavaScript".into(), "React".into()],
//!     ..Default::default()
//! };
//! let job = JobPosting {
//!     description: "javascript utvecklare react erfarenhet".into(),
//!     ..Default::default()
//! };
//! let result = analyze_match(&candidate, &job).unwrap();
//! assert!(result.score > 0);
//! ```

pub mod strategies;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::keywords::{TermSet, extract_terms, normalize_literal};
use crate::profile::{CandidateProfile, JobPosting};
use crate::recommendations::{RecommendationContext, generate_recommendations};
use crate::synonyms::SynonymTable;

pub use strategies::{ExactMatcher, SubstringMatcher, SynonymMatcher, TermMatcher};

/// Maximum number of matched or missing terms kept in a [`MatchResult`].
pub const DISPLAY_TERMS: usize = 10;

/// Four fixed quality tiers derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Assessment {
    /// Score 80 and above.
    Excellent,
    /// Score 60–79.
    Good,
    /// Score 40–59.
    Partial,
    /// Score below 40.
    Weak,
}

impl Assessment {
    /// Band a 0–100 score.
    pub const fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Partial,
            _ => Self::Weak,
        }
    }

    /// Returns the tier as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Partial => "partial",
            Self::Weak => "weak",
        }
    }
}

impl std::fmt::Display for Assessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of matching one candidate against one posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MatchResult {
    /// Matched share of the requirement terms, 0–100.
    pub score: u8,
    /// Quality tier of `score`.
    pub assessment: Assessment,
    /// Matched terms in classification order (at most [`DISPLAY_TERMS`]).
    pub matched_terms: Vec<String>,
    /// Missing terms in classification order (at most [`DISPLAY_TERMS`]).
    pub missing_terms: Vec<String>,
    /// Number of matched terms before the display cap.
    pub matched_total: usize,
    /// Number of missing terms before the display cap.
    pub missing_total: usize,
    /// Size of the requirement term set.
    pub requirement_total: usize,
    /// Ordered advice.
    pub recommendations: Vec<String>,
}

/// A scored posting from [`find_best_matches`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RankedMatch {
    /// Position of the posting in the input slice.
    pub index: usize,
    /// Its match result.
    pub result: MatchResult,
}

/// Requirement terms split into matched and missing, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Terms some strategy accepted, with the strategy's name.
    pub matched: Vec<(String, &'static str)>,
    /// Terms no strategy accepted.
    pub missing: Vec<String>,
}

/// Matching engine: a synonym table plus an ordered strategy list.
pub struct MatchEngine<'a> {
    synonyms: &'a SynonymTable,
    strategies: Vec<Box<dyn TermMatcher + 'a>>,
}

impl std::fmt::Debug for MatchEngine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.strategies.iter().map(|s| s.name()).collect();
        f.debug_struct("MatchEngine")
            .field("synonyms", &self.synonyms.len())
            .field("strategies", &names)
            .finish()
    }
}

impl MatchEngine<'static> {
    /// Engine over the built-in synonym table.
    pub fn builtin() -> Self {
        Self::new(SynonymTable::builtin())
    }
}

impl<'a> MatchEngine<'a> {
    /// Engine with the default strategies: exact, substring, synonym.
    pub fn new(synonyms: &'a SynonymTable) -> Self {
        Self {
            synonyms,
            strategies: vec![
                Box::new(ExactMatcher),
                Box::new(SubstringMatcher),
                Box::new(SynonymMatcher::new(synonyms)),
            ],
        }
    }

    /// Append a strategy, tried after the existing ones.
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl TermMatcher + 'a) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Names of the strategies, in evaluation order.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Classify every requirement term against the candidate terms.
    pub fn classify(&self, requirements: &TermSet, candidate: &TermSet) -> Classification {
        let mut out = Classification::default();
        for term in requirements {
            match self.strategies.iter().find(|s| s.matches(term, candidate)) {
                Some(strategy) => out.matched.push((term.clone(), strategy.name())),
                None => out.missing.push(term.clone()),
            }
        }
        out
    }

    /// Score one candidate against one posting.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidArgument`] if the candidate fails
    /// [`CandidateProfile::validate`].
    #[tracing::instrument(skip_all, fields(headline = %job.headline))]
    pub fn analyze(
        &self,
        candidate: &CandidateProfile,
        job: &JobPosting,
    ) -> EngineResult<MatchResult> {
        candidate.validate()?;

        let candidate_terms = candidate_terms(candidate);
        let requirement_terms = requirement_terms(job);
        let classification = self.classify(&requirement_terms, &candidate_terms);

        let requirement_total = requirement_terms.len();
        let matched_total = classification.matched.len();
        let missing_total = classification.missing.len();
        let score = percentage(matched_total, requirement_total);

        let ctx = RecommendationContext {
            score,
            missing_terms: &classification.missing,
            requirement_terms: &requirement_terms,
            candidate,
            job,
        };
        let recommendations = generate_recommendations(&ctx)
            .into_iter()
            .map(|r| r.message)
            .collect();

        tracing::debug!(
            candidate_terms = candidate_terms.len(),
            requirement_total,
            matched_total,
            score,
            "match analyzed"
        );

        Ok(MatchResult {
            score,
            assessment: Assessment::from_score(score),
            matched_terms: classification
                .matched
                .into_iter()
                .take(DISPLAY_TERMS)
                .map(|(term, _)| term)
                .collect(),
            missing_terms: classification
                .missing
                .into_iter()
                .take(DISPLAY_TERMS)
                .collect(),
            matched_total,
            missing_total,
            requirement_total,
            recommendations,
        })
    }

    /// Score every posting and return the best `limit`, highest first.
    ///
    /// Ties keep input order.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidArgument`] if `limit` is zero or the candidate
    /// is invalid.
    #[tracing::instrument(skip(self, candidate, jobs), fields(jobs = jobs.len()))]
    pub fn find_best_matches(
        &self,
        candidate: &CandidateProfile,
        jobs: &[JobPosting],
        limit: usize,
    ) -> EngineResult<Vec<RankedMatch>> {
        if limit == 0 {
            return Err(EngineError::invalid("limit", "must be at least 1"));
        }

        let mut ranked = jobs
            .iter()
            .enumerate()
            .map(|(index, job)| {
                self.analyze(candidate, job)
                    .map(|result| RankedMatch { index, result })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        // sort_by is stable: equal scores keep input order
        ranked.sort_by(|a, b| b.result.score.cmp(&a.result.score));
        ranked.truncate(limit);

        tracing::info!(returned = ranked.len(), "best matches ranked");
        Ok(ranked)
    }
}

/// Score `candidate` against `job` with the built-in synonym table.
///
/// # Errors
///
/// See [`MatchEngine::analyze`].
pub fn analyze_match(candidate: &CandidateProfile, job: &JobPosting) -> EngineResult<MatchResult> {
    MatchEngine::builtin().analyze(candidate, job)
}

/// Rank `jobs` for `candidate` with the built-in synonym table.
///
/// # Errors
///
/// See [`MatchEngine::find_best_matches`].
pub fn find_best_matches(
    candidate: &CandidateProfile,
    jobs: &[JobPosting],
    limit: usize,
) -> EngineResult<Vec<RankedMatch>> {
    MatchEngine::builtin().find_best_matches(candidate, jobs, limit)
}

/// Union of literal skills, experience terms, education terms and languages.
pub fn candidate_terms(candidate: &CandidateProfile) -> TermSet {
    let mut terms = TermSet::new();
    for skill in &candidate.skills {
        if let Some(skill) = normalize_literal(skill) {
            terms.insert(skill);
        }
    }
    for exp in &candidate.experiences {
        terms.extend_from(extract_terms([exp.title.as_str(), exp.description.as_str()]));
    }
    for edu in &candidate.education {
        terms.extend_from(extract_terms([edu.degree.as_str(), edu.field.as_str()]));
    }
    for language in &candidate.languages {
        if let Some(language) = normalize_literal(language) {
            terms.insert(language);
        }
    }
    terms
}

/// The posting's flattened requirement terms.
pub fn requirement_terms(job: &JobPosting) -> TermSet {
    extract_terms(job.text_fields())
}

/// `round(100 × part / total)` clamped to 0–100, or 0 when `total` is 0.
pub(crate) fn percentage(part: usize, total: usize) -> u8 {
    let ratio = part as f64 / total.max(1) as f64;
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}
