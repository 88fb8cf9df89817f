//! Core library for jobbmatch.
//!
//! Matches a job seeker's profile against job postings, suggests related
//! occupations and career steps, and checks résumés for applicant tracking
//! system (ATS) compatibility. Every engine operation is synchronous and
//! works on immutable inputs; the built-in tables are process-wide statics.
//!
//! # Modules
//!
//! - [`keywords`] - Term extraction and normalization
//! - [`synonyms`] - Synonym expansion
//! - [`matching`] - Candidate-to-posting scoring and ranking
//! - [`recommendations`] - Rule-based advice for a match
//! - [`occupations`] - Occupation relations and career paths
//! - [`ats`] - Résumé compatibility checks
//! - [`readability`] - Reading-ease scoring
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use jobbmatch_core::{CandidateProfile, JobPosting, analyze_match};
//!
//! let candidate = CandidateProfile {
//!     skills: vec!["JavaScript".into(), "React".into(), "TypeScript".into()],
//!     ..Default::default()
//! };
//! let job = JobPosting {
//!     description: "javascript utvecklare react erfarenhet".into(),
//!     ..Default::default()
//! };
//!
//! let result = analyze_match(&candidate, &job).unwrap();
//! assert!(result.matched_terms.contains(&"react".to_string()));
//! assert!(result.score > 0);
//! ```
#![deny(unsafe_code)]

pub mod ats;
pub mod config;
pub mod error;
pub mod keywords;
pub mod matching;
pub mod occupations;
pub mod profile;
pub mod readability;
pub mod recommendations;
pub mod synonyms;
pub mod word_lists;

pub use ats::{CompatibilityReport, FormattingFlags, ResumeDocument, check_compatibility};
pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{ConfigError, ConfigResult, EngineError, EngineResult};
pub use keywords::{TermSet, extract_terms};
pub use matching::{
    Assessment, MatchEngine, MatchResult, RankedMatch, analyze_match, find_best_matches,
};
pub use occupations::{
    OccupationGraph, OccupationSuggestion, RelationKind, calculate_match, find_career_path,
    find_related,
};
pub use profile::{CandidateProfile, Education, Experience, JobPosting};
pub use readability::{Readability, ReadabilityLevel, check_readability};
pub use synonyms::SynonymTable;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
