//! Compare command: relation strength between two occupations.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::instrument;

use jobbmatch_core::occupations;

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First occupation.
    pub first: String,
    /// Second occupation.
    pub second: String,
}

#[derive(Serialize)]
struct CompareOutput<'a> {
    first: &'a str,
    second: &'a str,
    strength: f64,
}

/// Print how strongly two occupations are related (0.0 when unrelated).
#[instrument(name = "cmd_compare", skip_all, fields(first = %args.first, second = %args.second))]
pub fn cmd_compare(args: CompareArgs, global_json: bool) -> anyhow::Result<()> {
    let strength = occupations::calculate_match(&args.first, &args.second);

    if global_json {
        let out = CompareOutput {
            first: &args.first,
            second: &args.second,
            strength,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if strength > 0.0 {
        println!(
            "{} ↔ {}: {:.2}",
            args.first.bold(),
            args.second.bold(),
            strength.green()
        );
    } else {
        println!(
            "{} ↔ {}: {}",
            args.first.bold(),
            args.second.bold(),
            "unrelated".dimmed()
        );
    }
    Ok(())
}
