//! Résumé compatibility checks for applicant tracking systems (ATS).
//!
//! A résumé is run through a fixed, ordered table of checks. Each check has
//! a fixed importance and a tip shown when it fails. The report also carries
//! a scanability score (see [`scanability`]) and the readability of the
//! résumé's free text.
//!
//! ```
//! use jobbmatch_core::ats::{FormattingFlags, ResumeDocument, check_compatibility};
//!
//! let flags = FormattingFlags {
//!     has_image: true,
//!     uses_standard_font: true,
//!     has_table_layout: false,
//! };
//! let report = check_compatibility(&ResumeDocument::default(), &flags).unwrap();
//! let no_images = report.check("no_images").unwrap();
//! assert!(!no_images.passed);
//! assert!(report.check("standard_font").unwrap().passed);
//! ```

pub mod scanability;

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::matching::percentage;
use crate::profile::CandidateProfile;
use crate::readability::{Readability, check_readability};

pub use scanability::scanability_score;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

/// A phone number needs at least this many digits to count.
const MIN_PHONE_DIGITS: usize = 6;

/// Contact details on a résumé.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ContactInfo {
    /// Full name.
    pub name: String,
    /// E-mail address.
    pub email: Option<String>,
    /// Phone number, any formatting.
    pub phone: Option<String>,
}

impl ContactInfo {
    /// Whether a usable e-mail address or phone number is present.
    pub fn is_reachable(&self) -> bool {
        let email_ok = self
            .email
            .as_deref()
            .is_some_and(|e| EMAIL.is_match(e.trim()));
        let phone_ok = self.phone.as_deref().is_some_and(|p| {
            p.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
        });
        email_ok || phone_ok
    }
}

/// A résumé: contact details, an optional summary, and the profile content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ResumeDocument {
    /// Contact details.
    pub contact: ContactInfo,
    /// Free-text summary at the top of the résumé.
    pub summary: Option<String>,
    /// Skills, experience, education and languages.
    #[serde(flatten)]
    pub profile: CandidateProfile,
}

impl ResumeDocument {
    /// Non-blank summary text, if any.
    pub fn summary_text(&self) -> Option<&str> {
        self.summary
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// The text readability is scored on: the summary followed by every
    /// experience description.
    pub fn readable_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(self.profile.experiences.len() + 1);
        parts.extend(self.summary_text());
        parts.extend(
            self.profile
                .experiences
                .iter()
                .map(|e| e.description.trim())
                .filter(|d| !d.is_empty()),
        );
        parts.join("\n")
    }
}

/// Layout facts about the rendered résumé file, supplied by the caller.
///
/// The default describes a plain document: no images, a standard font and
/// no table layout. Fields left out when deserializing take those values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FormattingFlags {
    /// The document embeds images or graphics.
    pub has_image: bool,
    /// The document uses a common, machine-readable font.
    pub uses_standard_font: bool,
    /// The document lays content out in tables or columns.
    pub has_table_layout: bool,
}

impl Default for FormattingFlags {
    fn default() -> Self {
        Self {
            has_image: false,
            uses_standard_font: true,
            has_table_layout: false,
        }
    }
}

/// How much a failed check hurts parsing by an ATS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    /// Likely to break parsing or filtering.
    High,
    /// Noticeably weakens the résumé.
    Medium,
    /// Nice to have.
    Low,
}

impl Importance {
    /// Returns the importance as a static string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Importance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AtsCheck {
    /// Check identifier, e.g. `contact_info`.
    pub name: String,
    /// Whether the résumé passed.
    pub passed: bool,
    /// Importance of the check.
    pub importance: Importance,
    /// Advice, present only when the check failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

/// Full compatibility report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CompatibilityReport {
    /// Every check, in table order.
    pub checks: Vec<AtsCheck>,
    /// Share of passed checks, 0–100.
    pub score: u8,
    /// How easy the résumé is to skim, 0–100.
    pub scanability_score: u8,
    /// Readability of the summary and experience descriptions.
    pub readability: Readability,
}

impl CompatibilityReport {
    /// Look up a check by name.
    pub fn check(&self, name: &str) -> Option<&AtsCheck> {
        self.checks.iter().find(|c| c.name == name)
    }

    /// Failed checks of the given importance.
    pub fn failed(&self, importance: Importance) -> impl Iterator<Item = &AtsCheck> {
        self.checks
            .iter()
            .filter(move |c| !c.passed && c.importance == importance)
    }
}

type CheckFn = fn(&ResumeDocument, &FormattingFlags) -> bool;

/// `(name, importance, passes, tip)`
const CHECKS: &[(&str, Importance, CheckFn, &str)] = &[
    (
        "contact_info",
        Importance::High,
        has_contact,
        "Add an e-mail address or phone number so recruiters can reach you.",
    ),
    (
        "summary",
        Importance::Medium,
        has_summary,
        "Add a short summary at the top describing who you are and what you seek.",
    ),
    (
        "work_experience",
        Importance::High,
        has_experience,
        "List your work experience, including internships and projects.",
    ),
    (
        "education",
        Importance::Medium,
        has_education,
        "Add your education, even if it is unfinished.",
    ),
    (
        "skills",
        Importance::High,
        has_skills,
        "Add a skills section with the keywords employers search for.",
    ),
    (
        "no_images",
        Importance::High,
        no_images,
        "Remove images and graphics; ATS parsers cannot read them.",
    ),
    (
        "standard_font",
        Importance::Medium,
        standard_font,
        "Use a standard font such as Arial, Calibri or Times New Roman.",
    ),
    (
        "no_table_layout",
        Importance::High,
        no_table_layout,
        "Avoid tables and columns; use a single-column layout.",
    ),
    (
        "languages",
        Importance::Low,
        has_languages,
        "List the languages you speak.",
    ),
    (
        "quantified_results",
        Importance::Low,
        has_quantified_results,
        "Quantify results with numbers, e.g. \"cut delivery time by 20%\".",
    ),
];

fn has_contact(r: &ResumeDocument, _: &FormattingFlags) -> bool {
    r.contact.is_reachable()
}

fn has_summary(r: &ResumeDocument, _: &FormattingFlags) -> bool {
    r.summary_text().is_some()
}

fn has_experience(r: &ResumeDocument, _: &FormattingFlags) -> bool {
    !r.profile.experiences.is_empty()
}

fn has_education(r: &ResumeDocument, _: &FormattingFlags) -> bool {
    !r.profile.education.is_empty()
}

fn has_skills(r: &ResumeDocument, _: &FormattingFlags) -> bool {
    !r.profile.skills.is_empty()
}

const fn no_images(_: &ResumeDocument, f: &FormattingFlags) -> bool {
    !f.has_image
}

const fn standard_font(_: &ResumeDocument, f: &FormattingFlags) -> bool {
    f.uses_standard_font
}

const fn no_table_layout(_: &ResumeDocument, f: &FormattingFlags) -> bool {
    !f.has_table_layout
}

fn has_languages(r: &ResumeDocument, _: &FormattingFlags) -> bool {
    !r.profile.languages.is_empty()
}

/// Some experience description mentions a number.
fn has_quantified_results(r: &ResumeDocument, _: &FormattingFlags) -> bool {
    r.profile
        .experiences
        .iter()
        .any(|e| e.description.chars().any(|c| c.is_ascii_digit()))
}

/// Names of every check, in evaluation order.
pub fn check_names() -> impl Iterator<Item = &'static str> {
    CHECKS.iter().map(|(name, ..)| *name)
}

/// Run every check against a résumé and its formatting flags.
///
/// # Errors
///
/// [`EngineError::InvalidArgument`](crate::EngineError::InvalidArgument) if
/// the résumé's profile fails [`CandidateProfile::validate`].
#[tracing::instrument(skip_all, fields(experiences = resume.profile.experiences.len()))]
pub fn check_compatibility(
    resume: &ResumeDocument,
    flags: &FormattingFlags,
) -> EngineResult<CompatibilityReport> {
    resume.profile.validate()?;

    let checks: Vec<AtsCheck> = CHECKS
        .iter()
        .map(|(name, importance, passes, tip)| {
            let passed = passes(resume, flags);
            AtsCheck {
                name: (*name).to_string(),
                passed,
                importance: *importance,
                tip: (!passed).then(|| (*tip).to_string()),
            }
        })
        .collect();

    let passed = checks.iter().filter(|c| c.passed).count();
    let score = percentage(passed, checks.len());
    tracing::debug!(passed, total = checks.len(), score, "ats checks evaluated");

    Ok(CompatibilityReport {
        checks,
        score,
        scanability_score: scanability_score(resume),
        readability: check_readability(&resume.readable_text()),
    })
}
