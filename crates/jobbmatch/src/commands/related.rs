//! Related command: occupations connected to a given one.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use jobbmatch_core::occupations::{self, RelationKind};

use super::print_suggestions;

/// Arguments for the `related` subcommand.
#[derive(Args, Debug)]
pub struct RelatedArgs {
    /// Occupation name, any case (e.g. "Utvecklare").
    pub occupation: String,

    /// Only show relations of this kind.
    #[arg(long, value_enum)]
    pub kind: Option<RelationKind>,

    /// Show at most this many suggestions (at least 1).
    #[arg(
        long,
        short = 'n',
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub limit: Option<usize>,
}

/// List related occupations, strongest first.
#[instrument(name = "cmd_related", skip_all, fields(occupation = %args.occupation))]
pub fn cmd_related(args: RelatedArgs, global_json: bool) -> anyhow::Result<()> {
    let mut suggestions = occupations::find_related(&args.occupation);
    if let Some(kind) = args.kind {
        suggestions.retain(|s| s.kind == kind);
    }
    if let Some(limit) = args.limit {
        suggestions.truncate(limit);
    }
    debug!(count = suggestions.len(), "related occupations found");

    if global_json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
    } else if suggestions.is_empty() {
        println!(
            "{} no known relations for {:?}",
            "note:".yellow(),
            args.occupation
        );
    } else {
        print_suggestions(&suggestions);
    }
    Ok(())
}
