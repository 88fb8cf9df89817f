//! How easy a résumé is to skim.
//!
//! Starts at 100 and deducts for walls of text, too few or too many skills,
//! and a missing, thin or bloated summary. The result is clamped to 0–100.

use super::ResumeDocument;

const START: i32 = 100;

/// Average description length (characters) above which a penalty applies.
const LONG_DESCRIPTION: usize = 300;
const VERY_LONG_DESCRIPTION: usize = 500;

const MIN_SKILLS: usize = 5;
const MAX_SKILLS: usize = 20;

const SHORT_SUMMARY: usize = 50;
const LONG_SUMMARY: usize = 600;

/// Score how skimmable a résumé is.
pub fn scanability_score(resume: &ResumeDocument) -> u8 {
    let mut score = START;

    let experiences = &resume.profile.experiences;
    if !experiences.is_empty() {
        let total: usize = experiences
            .iter()
            .map(|e| e.description.chars().count())
            .sum();
        let average = total / experiences.len();
        if average > VERY_LONG_DESCRIPTION {
            score -= 20;
        } else if average > LONG_DESCRIPTION {
            score -= 10;
        }
    }

    let skills = resume.profile.skills.len();
    if skills < MIN_SKILLS {
        score -= 10;
    }
    if skills > MAX_SKILLS {
        score -= 10;
    }

    match resume.summary_text().map(|s| s.chars().count()) {
        None => score -= 15,
        Some(len) if len < SHORT_SUMMARY => score -= 15,
        Some(len) if len > LONG_SUMMARY => score -= 10,
        Some(_) => {}
    }

    tracing::trace!(score, "scanability computed");
    u8::try_from(score.clamp(0, 100)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{CandidateProfile, Experience};

    fn resume(skills: usize, summary: Option<usize>, descriptions: &[usize]) -> ResumeDocument {
        ResumeDocument {
            summary: summary.map(|n| "a".repeat(n)),
            profile: CandidateProfile {
                skills: (0..skills).map(|i| format!("skill{i}")).collect(),
                experiences: descriptions
                    .iter()
                    .map(|n| Experience {
                        description: "b".repeat(*n),
                        ..Default::default()
                    })
                    .collect(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn tidy_resume_scores_full() {
        assert_eq!(scanability_score(&resume(8, Some(200), &[150, 250])), 100);
    }

    #[test]
    fn long_descriptions_escalate_not_stack() {
        assert_eq!(scanability_score(&resume(8, Some(200), &[301])), 90);
        assert_eq!(scanability_score(&resume(8, Some(200), &[501])), 80);
        assert_eq!(scanability_score(&resume(8, Some(200), &[300])), 100);
        assert_eq!(scanability_score(&resume(8, Some(200), &[400, 700])), 80);
    }

    #[test]
    fn skill_count_bounds() {
        assert_eq!(scanability_score(&resume(4, Some(200), &[])), 90);
        assert_eq!(scanability_score(&resume(5, Some(200), &[])), 100);
        assert_eq!(scanability_score(&resume(20, Some(200), &[])), 100);
        assert_eq!(scanability_score(&resume(21, Some(200), &[])), 90);
    }

    #[test]
    fn summary_penalties() {
        assert_eq!(scanability_score(&resume(8, None, &[])), 85);
        assert_eq!(scanability_score(&resume(8, Some(49), &[])), 85);
        assert_eq!(scanability_score(&resume(8, Some(50), &[])), 100);
        assert_eq!(scanability_score(&resume(8, Some(601), &[])), 90);
    }

    #[test]
    fn worst_case_stays_in_range() {
        let score = scanability_score(&resume(0, None, &[900]));
        assert_eq!(score, 55);
        assert!(score <= 100);
    }
}
