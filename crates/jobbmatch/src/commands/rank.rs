//! Rank command: order several postings for one profile.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use jobbmatch_core::matching::MatchEngine;
use jobbmatch_core::{CandidateProfile, Config, JobPosting};

use super::read_json;

/// Arguments for the `rank` subcommand.
#[derive(Args, Debug)]
pub struct RankArgs {
    /// Candidate profile (JSON).
    #[arg(long, short = 'p', value_name = "FILE")]
    pub profile: Utf8PathBuf,

    /// Job postings (JSON array).
    #[arg(long, short = 'j', value_name = "FILE")]
    pub jobs: Utf8PathBuf,

    /// Number of postings to return [default: config `rank_limit`, else 5].
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

/// Rank postings by match score, best first.
#[instrument(name = "cmd_rank", skip_all, fields(profile = %args.profile, jobs = %args.jobs))]
pub fn cmd_rank(
    args: RankArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let limit = args.limit.unwrap_or_else(|| config.rank_limit());
    debug!(limit, "executing rank command");

    let candidate: CandidateProfile = read_json(&args.profile, max_input_bytes)?;
    let jobs: Vec<JobPosting> = read_json(&args.jobs, max_input_bytes)?;

    let synonyms = config.synonym_table();
    let ranked = MatchEngine::new(&synonyms)
        .find_best_matches(&candidate, &jobs, limit)
        .with_context(|| format!("failed to rank {}", args.jobs))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("{}", "no postings to rank".yellow());
        return Ok(());
    }
    for (pos, entry) in ranked.iter().enumerate() {
        let job = &jobs[entry.index];
        let title = if job.headline.is_empty() {
            format!("posting #{}", entry.index + 1)
        } else {
            job.headline.clone()
        };
        println!(
            "{:>2}. {:>3}  {}  {}",
            pos + 1,
            entry.result.score,
            title.bold(),
            entry.result.assessment.dimmed(),
        );
    }

    Ok(())
}
