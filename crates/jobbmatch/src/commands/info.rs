//! Info command implementation

use clap::Args;
use jobbmatch_core::config::{Config, ConfigSources};
use jobbmatch_core::occupations::OccupationGraph;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    rank_limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_match_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_ats_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    disable_input_limit: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    extra_synonyms: Vec<String>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        let mut extra_synonyms: Vec<String> = config
            .synonyms
            .as_ref()
            .map(|s| s.keys().cloned().collect())
            .unwrap_or_default();
        extra_synonyms.sort();
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            rank_limit: config.rank_limit(),
            min_match_score: config.min_match_score,
            min_ats_score: config.min_ats_score,
            max_input_bytes: config.max_input_bytes,
            disable_input_limit: config.disable_input_limit,
            extra_synonyms,
        }
    }
}

#[derive(Serialize)]
struct TableInfo {
    synonym_entries: usize,
    occupation_relations: usize,
}

impl TableInfo {
    fn new(config: &Config) -> Self {
        Self {
            synonym_entries: config.synonym_table().len(),
            occupation_relations: OccupationGraph::builtin().relations().len(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
    tables: TableInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
        tables: TableInfo::new(config),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    println!(
        "{} {}",
        full_info.package.name.bold(),
        full_info.package.version.green()
    );
    if !full_info.package.description.is_empty() {
        println!("{}", full_info.package.description);
    }
    if !full_info.package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), full_info.package.license);
    }
    if !full_info.package.repository.is_empty() {
        println!(
            "{}: {}",
            "Repository".dimmed(),
            full_info.package.repository.cyan()
        );
    }

    println!();
    println!("{}", "Configuration".bold().underline());
    if let Some(ref path) = full_info.config.config_file {
        println!("{}: {}", "Config file".dimmed(), path.cyan());
    } else {
        println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
    }
    println!("{}: {}", "Log level".dimmed(), full_info.config.log_level);
    if let Some(ref dir) = full_info.config.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }
    println!("{}: {}", "Rank limit".dimmed(), full_info.config.rank_limit);
    if !full_info.config.extra_synonyms.is_empty() {
        println!(
            "{}: {}",
            "Extra synonyms".dimmed(),
            full_info.config.extra_synonyms.join(", ")
        );
    }

    println!();
    println!("{}", "Quality Gates".bold().underline());
    print_opt("Min match score", full_info.config.min_match_score);
    print_opt("Min ATS score", full_info.config.min_ats_score);

    println!();
    println!("{}", "Tables".bold().underline());
    println!(
        "{}: {}",
        "Synonym entries".dimmed(),
        full_info.tables.synonym_entries
    );
    println!(
        "{}: {}",
        "Occupation relations".dimmed(),
        full_info.tables.occupation_relations
    );

    Ok(())
}

/// Print an optional value or "(not set)".
fn print_opt<T: std::fmt::Display>(label: &str, value: Option<T>) {
    match value {
        Some(v) => println!("{}: {}", label.dimmed(), v),
        None => println!("{}: {}", label.dimmed(), "(not set)".dimmed()),
    }
}
