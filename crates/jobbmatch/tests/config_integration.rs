//! Configuration integration tests.
//!
//! Discovery, format parsing and precedence, checked end to end through
//! `info --json`, plus config values that change command behavior.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run `info --json` from a directory and parse the config section.
fn config_json(dir: &Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: Value = serde_json::from_slice(&output.stdout).expect("invalid JSON output");
    json["config"].clone()
}

// =============================================================================
// Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let config = config_json(tmp.path());

    assert_eq!(config["log_level"], "info");
    assert_eq!(config["rank_limit"], 5);
    assert!(config["config_file"].is_null());
    assert!(config["min_match_score"].is_null());
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("ansokningar").join("2026");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(tmp.path().join(".jobbmatch.toml"), "rank_limit = 3\n").unwrap();

    let config = config_json(&sub_dir);

    assert_eq!(config["rank_limit"], 3);
    let reported = config["config_file"].as_str().unwrap();
    assert!(reported.ends_with(".jobbmatch.toml"), "{reported}");
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".jobbmatch.toml"), "min_match_score = 40\n").unwrap();
    fs::write(tmp.path().join("jobbmatch.toml"), "min_match_score = 60\n").unwrap();

    let config = config_json(tmp.path());

    assert_eq!(config["min_match_score"], 60);
}

#[test]
fn closer_config_takes_precedence() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("project");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(tmp.path().join(".jobbmatch.toml"), "rank_limit = 9\n").unwrap();
    fs::write(sub_dir.join(".jobbmatch.toml"), "rank_limit = 2\n").unwrap();

    assert_eq!(config_json(&sub_dir)["rank_limit"], 2);
}

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();
    let parent = tmp.path().join("parent");
    let repo = parent.join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(parent.join(".jobbmatch.toml"), r#"log_level = "error""#).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();

    let config = config_json(&src);

    assert_eq!(config["log_level"], "info");
    assert!(config["config_file"].is_null());
}

#[test]
fn config_next_to_git_is_found() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(repo.join(".jobbmatch.toml"), r#"log_level = "debug""#).unwrap();

    assert_eq!(config_json(&src)["log_level"], "debug");
}

// =============================================================================
// Formats & Precedence
// =============================================================================

#[test]
fn parses_every_format() {
    for (name, contents) in [
        (".jobbmatch.toml", "min_ats_score = 70\n"),
        (".jobbmatch.yaml", "min_ats_score: 70\n"),
        (".jobbmatch.yml", "min_ats_score: 70\n"),
        (".jobbmatch.json", r#"{"min_ats_score": 70}"#),
    ] {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(name), contents).unwrap();
        assert_eq!(config_json(tmp.path())["min_ats_score"], 70, "{name}");
    }
}

#[test]
fn later_extension_overrides_earlier_in_same_directory() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".jobbmatch.toml"), "rank_limit = 4\n").unwrap();
    fs::write(tmp.path().join(".jobbmatch.yaml"), "rank_limit: 7\n").unwrap();

    assert_eq!(config_json(tmp.path())["rank_limit"], 7);
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".jobbmatch.toml"), "rank_limit = 4\n").unwrap();
    let explicit = tmp.path().join("override.toml");
    fs::write(&explicit, "rank_limit = 8\n").unwrap();

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap()])
        .args(["--config", explicit.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["rank_limit"], 8);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with("override.toml"), "{reported}");
}

#[test]
fn env_var_overrides_files() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".jobbmatch.toml"), "rank_limit = 4\n").unwrap();

    let output = cmd()
        .env("JOBBMATCH_RANK_LIMIT", "6")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["rank_limit"], 6);
}

#[test]
fn extra_synonyms_are_reported_and_used() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".jobbmatch.toml"),
        "[synonyms]\nbarista = [\"kaffe\"]\n",
    )
    .unwrap();
    fs::write(tmp.path().join("p.json"), r#"{"skills": ["Kaffe"]}"#).unwrap();
    fs::write(tmp.path().join("j.json"), r#"{"required_skills": ["Barista"]}"#).unwrap();

    assert_eq!(config_json(tmp.path())["extra_synonyms"][0], "barista");

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap()])
        .args(["match", "--json", "-p", "p.json", "-j", "j.json"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["score"], 100);
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".jobbmatch.toml"), "this is not valid toml [[[").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn invalid_json_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".jobbmatch.json"), "{not valid json}").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure();
}

#[test]
fn zero_rank_limit_is_rejected() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".jobbmatch.toml"), "rank_limit = 0\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rank_limit"));
}

#[test]
fn unknown_config_field_is_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".jobbmatch.toml"),
        "rank_limit = 3\nunknown_field = \"ignored\"\n",
    )
    .unwrap();

    assert_eq!(config_json(tmp.path())["rank_limit"], 3);
}
