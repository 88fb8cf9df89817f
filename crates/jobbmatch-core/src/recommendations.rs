//! Rule-based advice derived from a match score and its gaps.
//!
//! Rules are an ordered list of `(predicate, message)` pairs evaluated in
//! sequence; each rule contributes at most one message. Output order is the
//! rule order, with no reordering or de-duplication across rules.

use std::sync::LazyLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::keywords::{TermSet, normalize_literal};
use crate::matching::Assessment;
use crate::profile::{CandidateProfile, JobPosting};
use crate::word_lists::LANGUAGE_GROUPS;

/// How many missing terms the gap message names.
const MISSING_TERMS_NAMED: usize = 3;

/// Fewer experience entries than this triggers the experience caution.
const MIN_EXPERIENCE_ENTRIES: usize = 2;

/// Everything a rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationContext<'a> {
    /// Match score, 0–100.
    pub score: u8,
    /// Missing requirement terms, in classification order.
    pub missing_terms: &'a [String],
    /// Full requirement term set of the posting.
    pub requirement_terms: &'a TermSet,
    /// The candidate being advised.
    pub candidate: &'a CandidateProfile,
    /// The posting being matched against.
    pub job: &'a JobPosting,
}

/// A produced piece of advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Recommendation {
    /// Identifier of the rule that produced it.
    pub rule: String,
    /// Human-readable advice.
    pub message: String,
}

type Predicate = Box<dyn Fn(&RecommendationContext<'_>) -> bool + Send + Sync>;
type Message = Box<dyn Fn(&RecommendationContext<'_>) -> String + Send + Sync>;

/// A single `(predicate, message)` rule.
pub struct RecommendationRule {
    id: String,
    when: Predicate,
    message: Message,
}

impl RecommendationRule {
    fn new<P, M>(id: impl Into<String>, when: P, message: M) -> Self
    where
        P: Fn(&RecommendationContext<'_>) -> bool + Send + Sync + 'static,
        M: Fn(&RecommendationContext<'_>) -> String + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            when: Box::new(when),
            message: Box::new(message),
        }
    }

    /// Rule identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Evaluate the rule, returning its advice if the predicate holds.
    pub fn evaluate(&self, ctx: &RecommendationContext<'_>) -> Option<Recommendation> {
        (self.when)(ctx).then(|| Recommendation {
            rule: self.id.clone(),
            message: (self.message)(ctx),
        })
    }
}

impl std::fmt::Debug for RecommendationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommendationRule")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

static RULES: LazyLock<Vec<RecommendationRule>> = LazyLock::new(build_rules);

fn build_rules() -> Vec<RecommendationRule> {
    let mut rules = vec![
        RecommendationRule::new(
            "score-excellent",
            |ctx| Assessment::from_score(ctx.score) == Assessment::Excellent,
            |_| {
                "Excellent match: your profile covers nearly everything the posting asks for."
                    .to_string()
            },
        ),
        RecommendationRule::new(
            "score-good",
            |ctx| Assessment::from_score(ctx.score) == Assessment::Good,
            |_| {
                "Good match: highlight the matching skills in your application.".to_string()
            },
        ),
        RecommendationRule::new(
            "score-partial",
            |ctx| Assessment::from_score(ctx.score) == Assessment::Partial,
            |_| {
                "Partial match: strengthen the gaps below before applying.".to_string()
            },
        ),
        RecommendationRule::new(
            "score-weak",
            |ctx| Assessment::from_score(ctx.score) == Assessment::Weak,
            |_| {
                "Weak match: the posting asks for skills your profile does not show yet."
                    .to_string()
            },
        ),
        RecommendationRule::new(
            "missing-terms",
            |ctx| !ctx.missing_terms.is_empty(),
            |ctx| {
                let named: Vec<&str> = ctx
                    .missing_terms
                    .iter()
                    .take(MISSING_TERMS_NAMED)
                    .map(String::as_str)
                    .collect();
                format!(
                    "Add these keywords to your profile if you have the experience: {}.",
                    named.join(", ")
                )
            },
        ),
        RecommendationRule::new(
            "experience",
            |ctx| {
                ctx.job.experience_required
                    && ctx.candidate.experiences.len() < MIN_EXPERIENCE_ENTRIES
            },
            |_| {
                "The posting requires experience: describe relevant jobs, internships or projects."
                    .to_string()
            },
        ),
    ];

    for group in LANGUAGE_GROUPS.iter().copied() {
        rules.push(RecommendationRule::new(
            format!("language-{}", group[0]),
            move |ctx| {
                requested_alias(group, ctx.requirement_terms).is_some()
                    && !speaks_any(ctx.candidate, group)
            },
            move |ctx| {
                let asked = requested_alias(group, ctx.requirement_terms).unwrap_or(group[0]);
                format!("The posting asks for {asked}: add it to your languages if you speak it.")
            },
        ));
    }

    rules
}

/// First alias of `group` that appears among the requirement terms.
fn requested_alias(group: &'static [&'static str], terms: &TermSet) -> Option<&'static str> {
    group.iter().copied().find(|alias| terms.contains(alias))
}

fn speaks_any(candidate: &CandidateProfile, group: &[&str]) -> bool {
    candidate
        .languages
        .iter()
        .filter_map(|l| normalize_literal(l))
        .any(|l| group.contains(&l.as_str()))
}

/// The ordered rule list.
pub fn rules() -> &'static [RecommendationRule] {
    &RULES
}

/// Evaluate every rule in order and collect the advice.
#[tracing::instrument(skip_all, fields(score = ctx.score))]
pub fn generate_recommendations(ctx: &RecommendationContext<'_>) -> Vec<Recommendation> {
    let recs: Vec<Recommendation> = rules().iter().filter_map(|r| r.evaluate(ctx)).collect();
    tracing::debug!(count = recs.len(), "recommendations generated");
    recs
}
