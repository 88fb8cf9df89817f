//! Match command: score one profile against one posting.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use jobbmatch_core::matching::{MatchEngine, MatchResult};
use jobbmatch_core::{Assessment, CandidateProfile, Config, JobPosting};

use super::read_json;

/// Arguments for the `match` subcommand.
#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Candidate profile (JSON).
    #[arg(long, short = 'p', value_name = "FILE")]
    pub profile: Utf8PathBuf,

    /// Job posting (JSON).
    #[arg(long, short = 'j', value_name = "FILE")]
    pub job: Utf8PathBuf,

    /// Fail unless the score reaches this value (0-100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,
}

/// Score a candidate profile against a job posting.
#[instrument(name = "cmd_match", skip_all, fields(profile = %args.profile, job = %args.job))]
pub fn cmd_match(
    args: MatchArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(min_score = ?args.min_score, "executing match command");

    let candidate: CandidateProfile = read_json(&args.profile, max_input_bytes)?;
    let job: JobPosting = read_json(&args.job, max_input_bytes)?;

    let synonyms = config.synonym_table();
    let result = MatchEngine::new(&synonyms).analyze(&candidate, &job)?;
    let min_score = args.min_score.or(config.min_match_score);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&job, &result);
    }

    if let Some(min) = min_score
        && result.score < min
    {
        bail!(
            "{} scores {} against {} (min: {min}). Close the gaps listed above.",
            args.profile,
            result.score,
            args.job,
        );
    }
    if let Some(min) = min_score
        && !global_json
    {
        println!("{} score {} (min: {min})", "PASS:".green(), result.score);
    }

    Ok(())
}

fn colored_assessment(assessment: Assessment) -> String {
    match assessment {
        Assessment::Excellent => assessment.green().bold().to_string(),
        Assessment::Good => assessment.green().to_string(),
        Assessment::Partial => assessment.yellow().to_string(),
        Assessment::Weak => assessment.red().to_string(),
    }
}

pub(crate) fn print_result(job: &JobPosting, result: &MatchResult) {
    let title = if job.headline.is_empty() {
        "job posting"
    } else {
        job.headline.as_str()
    };
    println!(
        "{} {}/100 ({})",
        title.bold(),
        result.score,
        colored_assessment(result.assessment)
    );
    println!(
        "{}: {} of {} requirement terms",
        "Matched".dimmed(),
        result.matched_total,
        result.requirement_total
    );
    if !result.matched_terms.is_empty() {
        println!("  {}", result.matched_terms.join(", ").green());
    }
    if !result.missing_terms.is_empty() {
        println!("{}: {}", "Missing".dimmed(), result.missing_total);
        println!("  {}", result.missing_terms.join(", ").yellow());
    }
    if !result.recommendations.is_empty() {
        println!();
        for rec in &result.recommendations {
            println!("  - {rec}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, name: &str, json: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::try_from(dir.path().join(name)).unwrap();
        std::fs::write(&path, json).unwrap();
        path
    }

    fn args(min_score: Option<u8>) -> (tempfile::TempDir, MatchArgs) {
        let tmp = tempfile::TempDir::new().unwrap();
        let profile = write(&tmp, "p.json", r#"{"skills": ["JavaScript", "React"]}"#);
        let job = write(
            &tmp,
            "j.json",
            r#"{"description": "javascript utvecklare react erfarenhet"}"#,
        );
        (
            tmp,
            MatchArgs {
                profile,
                job,
                min_score,
            },
        )
    }

    #[test]
    fn match_prints_text_and_json() {
        let (_tmp, a) = args(None);
        assert!(cmd_match(a, false, &Config::default(), None).is_ok());
        let (_tmp, a) = args(None);
        assert!(cmd_match(a, true, &Config::default(), None).is_ok());
    }

    #[test]
    fn gate_fails_below_min_score() {
        let (_tmp, a) = args(Some(90));
        let err = cmd_match(a, false, &Config::default(), None).unwrap_err();
        assert!(err.to_string().contains("min: 90"));
    }

    #[test]
    fn config_gate_applies_when_flag_absent() {
        let config = Config {
            min_match_score: Some(95),
            ..Default::default()
        };
        let (_tmp, a) = args(None);
        assert!(cmd_match(a, true, &config, None).is_err());
    }

    #[test]
    fn negative_years_are_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let profile = write(
            &tmp,
            "p.json",
            r#"{"experiences": [{"title": "Kock", "years": -1.0}]}"#,
        );
        let job = write(&tmp, "j.json", r#"{"headline": "Kock"}"#);
        let a = MatchArgs {
            profile,
            job,
            min_score: None,
        };
        let err = cmd_match(a, false, &Config::default(), None).unwrap_err();
        assert!(err.to_string().contains("years"));
    }
}
