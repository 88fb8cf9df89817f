//! Input shapes supplied by the calling application.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A job seeker's profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CandidateProfile {
    /// Skill labels, taken literally ("React", "B-körkort").
    pub skills: Vec<String>,
    /// Work history.
    pub experiences: Vec<Experience>,
    /// Completed education.
    pub education: Vec<Education>,
    /// Spoken languages.
    pub languages: Vec<String>,
}

/// One position in a candidate's work history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Experience {
    /// Job title.
    pub title: String,
    /// Free-text description of the work.
    pub description: String,
    /// Years spent in the position. Must be finite and non-negative.
    pub years: f64,
}

/// One education entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Education {
    /// Degree or qualification name.
    pub degree: String,
    /// Field of study.
    pub field: String,
}

/// A job posting, the source of the requirement terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct JobPosting {
    /// Posting headline.
    pub headline: String,
    /// Full description text.
    pub description: String,
    /// Required skill labels.
    pub required_skills: Vec<String>,
    /// Occupation label, if the posting has one.
    pub occupation: Option<String>,
    /// Whether the posting asks for prior experience.
    pub experience_required: bool,
}

impl CandidateProfile {
    /// Reject values outside the documented input domain.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidArgument`] if any experience has negative or
    /// non-finite `years`.
    pub fn validate(&self) -> EngineResult<()> {
        for (i, exp) in self.experiences.iter().enumerate() {
            if !exp.years.is_finite() || exp.years < 0.0 {
                return Err(EngineError::invalid(
                    "years",
                    format!(
                        "experience #{} ({:?}) has {} years; expected a non-negative number",
                        i + 1,
                        exp.title,
                        exp.years
                    ),
                ));
            }
        }
        Ok(())
    }
}

impl JobPosting {
    /// Free-text fields in the order they feed the extractor.
    pub fn text_fields(&self) -> impl Iterator<Item = &str> {
        [self.headline.as_str(), self.description.as_str()]
            .into_iter()
            .chain(self.required_skills.iter().map(String::as_str))
            .chain(self.occupation.as_deref())
    }
}
