//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Input documents written to a temp dir.
struct Fixtures {
    dir: TempDir,
}

impl Fixtures {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let fx = Self { dir };
        fx.write(
            "profile.json",
            r#"{
                "skills": ["JavaScript", "React", "TypeScript"],
                "experiences": [
                    {"title": "Utvecklare", "description": "Byggde webbappar i React.", "years": 2.5}
                ],
                "languages": ["Svenska"]
            }"#,
        );
        fx.write(
            "job.json",
            r#"{
                "headline": "Frontendutvecklare",
                "description": "javascript utvecklare react erfarenhet"
            }"#,
        );
        fx.write(
            "jobs.json",
            r#"[
                {"headline": "Kock", "description": "matlagning kök restaurang"},
                {"headline": "React-utvecklare", "required_skills": ["React", "JavaScript"]},
                {"headline": "Fullstack", "description": "react javascript postgresql kubernetes"}
            ]"#,
        );
        fx.write(
            "resume.json",
            r#"{
                "contact": {"name": "Anna Svensson", "email": "anna@example.se"},
                "summary": "Frontendutvecklare med fokus på tillgängliga och snabba webbappar.",
                "skills": ["JavaScript", "React", "TypeScript", "CSS", "Git"],
                "experiences": [
                    {"title": "Utvecklare", "description": "Minskade laddtiden med 40% för kundportalen.", "years": 3}
                ],
                "education": [{"degree": "Kandidatexamen", "field": "Datavetenskap"}],
                "languages": ["Svenska", "Engelska"]
            }"#,
        );
        fx.write("cv.txt", "Jag gillar kod. Jag bygger appar.");
        fx
    }

    fn write(&self, name: &str, contents: &str) {
        fs::write(self.dir.path().join(name), contents).unwrap();
    }

    fn path(&self, name: &str) -> String {
        self.dir.path().join(name).to_str().unwrap().to_string()
    }

    fn root(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }
}

fn stdout_json(assert: &assert_cmd::assert::Assert) -> serde_json::Value {
    serde_json::from_slice(&assert.get_output().stdout).expect("stdout should be valid JSON")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn help_lists_every_command() {
    let assert = cmd().arg("--help").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for name in [
        "match",
        "rank",
        "related",
        "path",
        "compare",
        "ats",
        "readability",
        "info",
    ] {
        assert!(stdout.contains(name), "help should list {name}");
    }
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let assert = cmd().args(["info", "--json"]).assert().success();
    let json = stdout_json(&assert);

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["tables"]["occupation_relations"].as_u64().unwrap() > 0);
    assert!(json["tables"]["synonym_entries"].as_u64().unwrap() > 0);
}

// =============================================================================
// Match & Rank
// =============================================================================

#[test]
fn match_json_reports_matched_and_missing() {
    let fx = Fixtures::new();
    let assert = cmd()
        .args(["match", "--json", "-p", &fx.path("profile.json")])
        .args(["-j", &fx.path("job.json")])
        .assert()
        .success();
    let json = stdout_json(&assert);

    let matched: Vec<&str> = json["matched_terms"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert!(matched.contains(&"javascript"));
    assert!(matched.contains(&"react"));
    assert!(json["score"].as_u64().unwrap() > 0);
    assert_eq!(
        json["matched_total"].as_u64().unwrap() + json["missing_total"].as_u64().unwrap(),
        json["requirement_total"].as_u64().unwrap()
    );
}

#[test]
fn match_text_shows_score_and_assessment() {
    let fx = Fixtures::new();
    cmd()
        .args(["--color", "never", "match", "-p", &fx.path("profile.json")])
        .args(["-j", &fx.path("job.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Frontendutvecklare"))
        .stdout(predicate::str::contains("/100"));
}

#[test]
fn match_min_score_gate_fails() {
    let fx = Fixtures::new();
    cmd()
        .args(["match", "-p", &fx.path("profile.json")])
        .args(["-j", &fx.path("job.json"), "--min-score", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("min: 100"));
}

#[test]
fn match_min_score_out_of_range_is_rejected() {
    let fx = Fixtures::new();
    cmd()
        .args(["match", "-p", &fx.path("profile.json")])
        .args(["-j", &fx.path("job.json"), "--min-score", "101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn match_missing_file_fails() {
    let fx = Fixtures::new();
    cmd()
        .args(["match", "-p", &fx.path("nope.json")])
        .args(["-j", &fx.path("job.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.json"));
}

#[test]
fn match_rejects_negative_years() {
    let fx = Fixtures::new();
    fx.write(
        "bad.json",
        r#"{"experiences": [{"title": "Kock", "years": -3}]}"#,
    );
    cmd()
        .args(["match", "-p", &fx.path("bad.json")])
        .args(["-j", &fx.path("job.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("years"));
}

#[test]
fn rank_orders_best_first_and_limits() {
    let fx = Fixtures::new();
    let assert = cmd()
        .args(["rank", "--json", "-p", &fx.path("profile.json")])
        .args(["-j", &fx.path("jobs.json"), "-n", "2"])
        .assert()
        .success();
    let json = stdout_json(&assert);
    let entries = json.as_array().unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["index"], 1);
    assert!(entries[0]["result"]["score"].as_u64() >= entries[1]["result"]["score"].as_u64());
}

#[test]
fn rank_zero_limit_fails() {
    let fx = Fixtures::new();
    cmd()
        .args(["rank", "-p", &fx.path("profile.json")])
        .args(["-j", &fx.path("jobs.json"), "-n", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("limit"));
}

#[test]
fn rank_limit_from_config() {
    let fx = Fixtures::new();
    fx.write(".jobbmatch.toml", "rank_limit = 1\n");
    let assert = cmd()
        .args(["-C", fx.root().to_str().unwrap(), "rank", "--json"])
        .args(["-p", "profile.json", "-j", "jobs.json"])
        .assert()
        .success();
    assert_eq!(stdout_json(&assert).as_array().unwrap().len(), 1);
}

#[test]
fn input_limit_from_config_is_enforced() {
    let fx = Fixtures::new();
    fx.write(".jobbmatch.toml", "max_input_bytes = 16\n");
    cmd()
        .args(["-C", fx.root().to_str().unwrap(), "match"])
        .args(["-p", "profile.json", "-j", "job.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Occupations
// =============================================================================

#[test]
fn related_json_is_sorted_by_strength() {
    let assert = cmd()
        .args(["related", "utvecklare", "--json"])
        .assert()
        .success();
    let json = stdout_json(&assert);
    let strengths: Vec<f64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["strength"].as_f64().unwrap())
        .collect();

    assert!(!strengths.is_empty());
    assert!(strengths.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn related_kind_filter_keeps_only_that_kind() {
    let assert = cmd()
        .args(["related", "Undersköterska", "--kind", "similar", "--json"])
        .assert()
        .success();
    let json = stdout_json(&assert);
    let suggestions = json.as_array().unwrap();

    assert!(!suggestions.is_empty());
    assert!(suggestions.iter().all(|s| s["kind"] == "similar"));
}

#[test]
fn related_zero_limit_is_rejected() {
    cmd()
        .args(["related", "Utvecklare", "-n", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn related_unknown_occupation_is_empty() {
    let assert = cmd()
        .args(["related", "Astronaut", "--json"])
        .assert()
        .success();
    assert_eq!(stdout_json(&assert), serde_json::json!([]));
}

#[test]
fn path_is_bounded() {
    let assert = cmd()
        .args(["path", "Utvecklare", "--json"])
        .assert()
        .success();
    let json = stdout_json(&assert);
    let path = json["path"].as_array().unwrap();

    assert!(path.len() <= 6);
    assert_eq!(path[0], "Utvecklare");
}

#[test]
fn path_text_joins_steps() {
    cmd()
        .args(["--color", "never", "path", "Kock"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kock → Souschef → Köksmästare"));
}

#[test]
fn compare_is_symmetric() {
    let forward = cmd()
        .args(["compare", "Utvecklare", "Systemutvecklare", "--json"])
        .assert()
        .success();
    let backward = cmd()
        .args(["compare", "Systemutvecklare", "Utvecklare", "--json"])
        .assert()
        .success();

    let a = stdout_json(&forward)["strength"].as_f64().unwrap();
    let b = stdout_json(&backward)["strength"].as_f64().unwrap();
    assert!(a > 0.0);
    assert!((a - b).abs() < f64::EPSILON);
}

#[test]
fn compare_unrelated_is_zero() {
    let assert = cmd()
        .args(["compare", "Kock", "Rektor", "--json"])
        .assert()
        .success();
    assert_eq!(stdout_json(&assert)["strength"], 0.0);
}

// =============================================================================
// ATS & Readability
// =============================================================================

#[test]
fn ats_image_flag_fails_no_images_check() {
    let fx = Fixtures::new();
    let assert = cmd()
        .args(["ats", &fx.path("resume.json"), "--has-image", "--json"])
        .assert()
        .success();
    let json = stdout_json(&assert);
    let checks = json["checks"].as_array().unwrap();
    let find = |name: &str| checks.iter().find(|c| c["name"] == name).unwrap().clone();

    assert_eq!(find("no_images")["passed"], false);
    assert_eq!(find("no_images")["importance"], "high");
    assert_eq!(find("standard_font")["passed"], true);
    assert_eq!(json["score"], 90);
}

#[test]
fn ats_clean_resume_passes_gate() {
    let fx = Fixtures::new();
    cmd()
        .args(["--color", "never", "ats", &fx.path("resume.json")])
        .args(["--min-score", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS:"));
}

#[test]
fn ats_gate_from_config() {
    let fx = Fixtures::new();
    fx.write(".jobbmatch.toml", "min_ats_score = 100\n");
    cmd()
        .args(["-C", fx.root().to_str().unwrap(), "ats", "resume.json"])
        .arg("--table-layout")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ATS checks"));
}

#[test]
fn ats_rejects_negative_years() {
    let fx = Fixtures::new();
    fx.write(
        "bad_resume.json",
        r#"{"contact": {"email": "a@b.se"}, "experiences": [{"title": "Kock", "years": -1}]}"#,
    );
    cmd()
        .args(["ats", &fx.path("bad_resume.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("years"));
}

#[test]
fn readability_prints_score() {
    let fx = Fixtures::new();
    let assert = cmd()
        .args(["readability", &fx.path("cv.txt"), "--json"])
        .assert()
        .success();
    let json = stdout_json(&assert);
    assert_eq!(json["sentences"], 2);
    assert_eq!(json["words"], 6);
}

#[test]
fn readability_empty_file_is_no_text() {
    let fx = Fixtures::new();
    fx.write("empty.txt", "");
    let assert = cmd()
        .args(["readability", &fx.path("empty.txt"), "--json"])
        .assert()
        .success();
    assert_eq!(stdout_json(&assert)["level"], "no-text");
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn verbose_flags_accepted() {
    cmd().args(["-v", "info"]).assert().success();
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_choices_accepted() {
    for choice in ["auto", "always", "never"] {
        cmd().args(["--color", choice, "info"]).assert().success();
    }
}

#[test]
fn log_dir_env_writes_jsonl() {
    let tmp = TempDir::new().unwrap();
    let log_dir = tmp.path().join("logs");
    cmd()
        .env("JOBBMATCH_LOG_DIR", &log_dir)
        .args(["related", "Kock"])
        .assert()
        .success();
    assert!(log_dir.is_dir());
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}
