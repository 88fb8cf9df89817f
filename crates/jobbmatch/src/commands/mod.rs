//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use owo_colors::OwoColorize;
use serde::de::DeserializeOwned;

use jobbmatch_core::occupations::OccupationSuggestion;

pub mod ats;
pub mod compare;
pub mod info;
pub mod match_cmd;
pub mod path;
pub mod rank;
pub mod readability;
pub mod related;
#[cfg(feature = "mcp")]
pub mod serve;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read and parse a JSON input document (profile, posting, résumé).
pub fn read_json<T: DeserializeOwned>(
    path: &Utf8Path,
    max_bytes: Option<usize>,
) -> anyhow::Result<T> {
    let content = read_input_file(path, max_bytes)?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {path} as JSON"))
}

/// Print occupation suggestions as an aligned list.
pub(crate) fn print_suggestions(suggestions: &[OccupationSuggestion]) {
    let width = suggestions
        .iter()
        .map(|s| s.occupation.chars().count())
        .max()
        .unwrap_or(0);
    for s in suggestions {
        let pad = width - s.occupation.chars().count();
        println!(
            "  {}{}  {:<11} {:.2}  {}",
            s.occupation.bold(),
            " ".repeat(pad),
            s.kind.as_str(),
            s.strength,
            s.description.dimmed(),
        );
    }
}
