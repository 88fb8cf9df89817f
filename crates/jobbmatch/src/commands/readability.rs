//! Readability command: reading-ease score of a plain text file.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use jobbmatch_core::readability;

use super::read_input_file;

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// Text file to score.
    pub file: Utf8PathBuf,

    /// Minimum acceptable reading-ease score.
    #[arg(long)]
    pub min_score: Option<f64>,
}

/// Score the readability of a text file.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(min_score = ?args.min_score, "executing readability command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let report = readability::check_readability(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.is_no_text() {
        println!("{} {} has no text to score", "note:".yellow(), args.file);
    } else {
        println!("{:.1} ({})", report.score, report.level);
    }

    if let Some(min) = args.min_score
        && report.score < min
    {
        bail!(
            "{} scores {:.1} (min: {min:.0}). Shorten sentences and prefer short words.",
            args.file,
            report.score,
        );
    }
    Ok(())
}
