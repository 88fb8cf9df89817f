//! Path command: the likeliest career progression from an occupation.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use jobbmatch_core::occupations;

/// Arguments for the `path` subcommand.
#[derive(Args, Debug)]
pub struct PathArgs {
    /// Starting occupation.
    pub occupation: String,
}

#[derive(Serialize)]
struct PathOutput<'a> {
    from: &'a str,
    path: Vec<String>,
}

/// Print the career path starting at an occupation.
#[instrument(name = "cmd_path", skip_all, fields(occupation = %args.occupation))]
pub fn cmd_path(args: PathArgs, global_json: bool) -> anyhow::Result<()> {
    let path = occupations::find_career_path(&args.occupation);
    debug!(steps = path.len(), "career path computed");

    if global_json {
        let out = PathOutput {
            from: &args.occupation,
            path,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if path.is_empty() {
        println!("{} unknown occupation {:?}", "note:".yellow(), args.occupation);
    } else if path.len() == 1 {
        println!("{} (no further progression known)", path[0].bold());
    } else {
        let arrow = format!(" {} ", "→".dimmed());
        println!("{}", path.join(&arrow));
    }
    Ok(())
}
