//! ATS command: résumé compatibility checks.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use jobbmatch_core::Config;
use jobbmatch_core::ats::{
    self, CompatibilityReport, FormattingFlags, Importance, ResumeDocument,
};

use super::read_json;

/// Arguments for the `ats` subcommand.
#[derive(Args, Debug)]
pub struct AtsArgs {
    /// Résumé (JSON).
    pub resume: Utf8PathBuf,

    /// The rendered résumé contains images or graphics.
    #[arg(long)]
    pub has_image: bool,

    /// The rendered résumé uses a non-standard font.
    #[arg(long)]
    pub nonstandard_font: bool,

    /// The rendered résumé uses tables or columns for layout.
    #[arg(long)]
    pub table_layout: bool,

    /// Fail unless the compatibility score reaches this value (0-100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,
}

impl AtsArgs {
    const fn flags(&self) -> FormattingFlags {
        FormattingFlags {
            has_image: self.has_image,
            uses_standard_font: !self.nonstandard_font,
            has_table_layout: self.table_layout,
        }
    }
}

/// Check a résumé for ATS compatibility.
#[instrument(name = "cmd_ats", skip_all, fields(resume = %args.resume))]
pub fn cmd_ats(
    args: AtsArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let flags = args.flags();
    debug!(?flags, "executing ats command");

    let resume: ResumeDocument = read_json(&args.resume, max_input_bytes)?;
    let report = ats::check_compatibility(&resume, &flags)
        .with_context(|| format!("failed to check {}", args.resume))?;
    let min_score = args.min_score.or(config.min_ats_score);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if let Some(min) = min_score {
        if report.score < min {
            bail!(
                "{} passes {}% of ATS checks (min: {min}%). Fix the failed checks above.",
                args.resume,
                report.score,
            );
        }
        if !global_json {
            println!("{} {}% (min: {min}%)", "PASS:".green(), report.score);
        }
    }
    Ok(())
}

fn print_report(report: &CompatibilityReport) {
    for check in &report.checks {
        let mark = if check.passed {
            "✓".green().to_string()
        } else {
            match check.importance {
                Importance::High => "✗".red().to_string(),
                Importance::Medium => "✗".yellow().to_string(),
                Importance::Low => "✗".dimmed().to_string(),
            }
        };
        println!("  {mark} {:<20} {}", check.name, check.importance.dimmed());
        if let Some(ref tip) = check.tip {
            println!("      {}", tip.dimmed());
        }
    }
    println!();
    println!("{}: {}%", "Compatibility".bold(), report.score);
    println!("{}: {}/100", "Scanability".bold(), report.scanability_score);
    if report.readability.is_no_text() {
        println!("{}: {}", "Readability".bold(), "no text".dimmed());
    } else {
        println!(
            "{}: {:.1} ({})",
            "Readability".bold(),
            report.readability.score,
            report.readability.level
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume_args(min_score: Option<u8>, has_image: bool) -> (tempfile::TempDir, AtsArgs) {
        let tmp = tempfile::TempDir::new().unwrap();
        let resume = Utf8PathBuf::try_from(tmp.path().join("cv.json")).unwrap();
        std::fs::write(
            &resume,
            r#"{
                "contact": {"name": "Anna", "email": "anna@example.se"},
                "summary": "Kock med tio års erfarenhet från restaurangkök.",
                "skills": ["Matlagning"],
                "experiences": [{"title": "Kock", "description": "Ansvarade för 40 kuvert.", "years": 4}]
            }"#,
        )
        .unwrap();
        (
            tmp,
            AtsArgs {
                resume,
                has_image,
                nonstandard_font: false,
                table_layout: false,
                min_score,
            },
        )
    }

    #[test]
    fn flags_map_to_formatting() {
        let (_tmp, a) = resume_args(None, true);
        let flags = a.flags();
        assert!(flags.has_image);
        assert!(flags.uses_standard_font);
        assert!(!flags.has_table_layout);
    }

    #[test]
    fn ats_reports_in_both_formats() {
        let (_tmp, a) = resume_args(None, false);
        assert!(cmd_ats(a, false, &Config::default(), None).is_ok());
        let (_tmp, a) = resume_args(None, true);
        assert!(cmd_ats(a, true, &Config::default(), None).is_ok());
    }

    #[test]
    fn gate_fails_when_checks_fail() {
        // education and languages are missing: 8 of 10
        let (_tmp, a) = resume_args(Some(80), false);
        assert!(cmd_ats(a, false, &Config::default(), None).is_ok());
        let (_tmp, a) = resume_args(Some(81), false);
        assert!(cmd_ats(a, false, &Config::default(), None).is_err());
    }
}
