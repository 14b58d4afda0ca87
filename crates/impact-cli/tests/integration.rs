#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn impact(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("impact-radius").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("IMPACT_RADIUS_LOG", dir.path().join("trace.log"))
        .env_remove("IMPACT_RADIUS_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn assess_json(dir: &TempDir, task: &str) -> serde_json::Value {
    let out = impact(dir).arg(task).assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).unwrap()
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

#[test]
fn json_is_the_default_output() {
    let dir = TempDir::new().unwrap();
    let v = assess_json(&dir, "Fix a typo in README");

    assert_eq!(v["task_description"], "Fix a typo in README");
    assert_eq!(v["scores"]["risk_score"], 2);
    assert_eq!(v["scores"]["complexity_score"], 1);
    assert_eq!(v["scores"]["impact_score"], 1);
    assert_eq!(v["scores"]["impact_radius"], 15);
    assert_eq!(v["agent_strategy"]["strategy"], "low-risk");
    assert_eq!(v["agent_strategy"]["min_agents"], 0);
    assert_eq!(v["reasoning"]["risk_level"], "LOW");
    assert_eq!(v["reasoning"]["impact_level"], "NARROW");
    assert!(v["version"].is_string());
    assert!(v["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn json_output_is_one_line() {
    let dir = TempDir::new().unwrap();
    impact(&dir)
        .args(["--json", "Add a settings page"])
        .assert()
        .success()
        .stdout(predicate::function(|s: &str| s.trim_end().lines().count() == 1));
}

#[test]
fn multipliers_and_thresholds_are_reported() {
    let dir = TempDir::new().unwrap();
    let v = assess_json(&dir, "ponder the weather");
    assert_eq!(v["multipliers"]["risk_multiplier"], 5);
    assert_eq!(v["multipliers"]["complexity_multiplier"], 3);
    assert_eq!(v["multipliers"]["scope_multiplier"], 2);
    assert_eq!(v["agent_strategy"]["thresholds"]["very_high_risk"], 70);
    assert_eq!(v["agent_strategy"]["thresholds"]["high_risk"], 50);
    assert_eq!(v["agent_strategy"]["thresholds"]["medium_risk"], 30);
}

#[test]
fn unmatched_task_defaults_to_medium_risk() {
    let dir = TempDir::new().unwrap();
    let v = assess_json(&dir, "ponder the weather");
    assert_eq!(v["scores"]["impact_radius"], 35);
    assert_eq!(v["agent_strategy"]["strategy"], "medium-risk");
    assert_eq!(v["agent_strategy"]["min_agents"], 4);
}

#[test]
fn security_fix_needs_many_agents() {
    let dir = TempDir::new().unwrap();
    let v = assess_json(&dir, "Fix security vulnerability in auth module");
    assert_eq!(v["scores"]["risk_score"], 10);
    let agents = v["agent_strategy"]["min_agents"].as_u64().unwrap();
    assert!(agents == 6 || agents == 8);
}

#[test]
fn global_refactor_is_very_high_risk() {
    let dir = TempDir::new().unwrap();
    let v = assess_json(&dir, "Refactor global architecture and migrate database schema");
    assert_eq!(v["scores"]["complexity_score"], 7);
    assert_eq!(v["scores"]["impact_score"], 10);
    assert_eq!(v["agent_strategy"]["strategy"], "very-high-risk");
    assert_eq!(v["agent_strategy"]["min_agents"], 8);
    let factors = v["reasoning"]["complexity_factors"].as_array().unwrap();
    assert!(factors
        .iter()
        .any(|f| f.as_str().unwrap().starts_with("multiple complex operations")));
}

#[test]
fn repeated_runs_match_except_timestamp() {
    let dir = TempDir::new().unwrap();
    let task = "Upgrade the shared API client";
    let mut a = assess_json(&dir, task);
    let mut b = assess_json(&dir, task);
    a.as_object_mut().unwrap().remove("timestamp");
    b.as_object_mut().unwrap().remove("timestamp");
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

#[test]
fn reads_task_from_stdin() {
    let dir = TempDir::new().unwrap();
    let out = impact(&dir)
        .write_stdin("Fix a typo in README\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["task_description"], "Fix a typo in README");
    assert_eq!(v["scores"]["impact_radius"], 15);
}

#[test]
fn non_utf8_stdin_is_still_scored() {
    let dir = TempDir::new().unwrap();
    let out = impact(&dir)
        .write_stdin(b"Fix a typo \xff\xfe in README\n".to_vec())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["scores"]["risk_score"], 2);
    assert!(v["task_description"].as_str().unwrap().contains('\u{FFFD}'));
}

#[test]
fn empty_argument_exits_one() {
    let dir = TempDir::new().unwrap();
    impact(&dir)
        .arg("")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("task description is empty"));
}

#[test]
fn empty_stdin_exits_one() {
    let dir = TempDir::new().unwrap();
    impact(&dir).write_stdin("   \n").assert().code(1);
}

#[test]
fn unknown_flag_exits_two() {
    let dir = TempDir::new().unwrap();
    impact(&dir)
        .args(["--bogus", "Fix a typo"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn help_and_version_succeed() {
    let dir = TempDir::new().unwrap();
    impact(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--pretty"));
    impact(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("impact-radius"));
}

// ---------------------------------------------------------------------------
// Pretty output / flags
// ---------------------------------------------------------------------------

#[test]
fn pretty_prints_a_report() {
    let dir = TempDir::new().unwrap();
    impact(&dir)
        .args(["--pretty", "Fix a typo in README"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Impact Radius Assessment"))
        .stdout(predicate::str::contains("Strategy:      low-risk (minimum 0 agents)"))
        .stdout(predicate::str::contains("Scope factors:"));
}

#[test]
fn json_and_pretty_conflict() {
    let dir = TempDir::new().unwrap();
    impact(&dir)
        .args(["--json", "--pretty", "Fix a typo"])
        .assert()
        .code(2);
}

#[test]
fn performance_goes_to_stderr() {
    let dir = TempDir::new().unwrap();
    impact(&dir)
        .args(["--performance", "Fix a typo in README"])
        .assert()
        .success()
        .stderr(predicate::str::contains("assessment completed in"))
        .stdout(predicate::str::contains("assessment completed").not());
}

// ---------------------------------------------------------------------------
// Trace file / config
// ---------------------------------------------------------------------------

#[test]
fn trace_file_gets_summary_line() {
    let dir = TempDir::new().unwrap();
    impact(&dir).arg("Fix a typo in README").assert().success();
    let content = std::fs::read_to_string(dir.path().join("trace.log")).unwrap();
    assert!(content.contains("[INFO] assessed task: risk=2 complexity=1 scope=1 radius=15"));
    assert!(!content.contains("[DEBUG]"));
}

#[test]
fn debug_adds_dimension_traces() {
    let dir = TempDir::new().unwrap();
    impact(&dir)
        .args(["--debug", "Fix a typo in README"])
        .assert()
        .success();
    let content = std::fs::read_to_string(dir.path().join("trace.log")).unwrap();
    assert!(content.contains("[DEBUG] complexity: score=1 tier=trivial"));
    for line in content.lines() {
        assert!(line.starts_with('['), "malformed line: {line}");
    }
}

#[test]
fn trace_file_appends_across_runs() {
    let dir = TempDir::new().unwrap();
    impact(&dir).arg("Fix a typo in README").assert().success();
    impact(&dir).arg("ponder the weather").assert().success();
    let content = std::fs::read_to_string(dir.path().join("trace.log")).unwrap();
    assert_eq!(content.matches("[INFO] assessed task").count(), 2);
}

#[test]
fn unwritable_trace_file_does_not_fail() {
    let dir = TempDir::new().unwrap();
    impact(&dir)
        .env("IMPACT_RADIUS_LOG", dir.path())
        .arg("Fix a typo in README")
        .assert()
        .success();
}

#[test]
fn quiet_stderr_by_default() {
    let dir = TempDir::new().unwrap();
    impact(&dir)
        .arg("Fix a typo in README")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn rust_log_directives_are_honored() {
    let dir = TempDir::new().unwrap();
    impact(&dir)
        .env("RUST_LOG", "debug")
        .arg("Fix a typo in README")
        .assert()
        .success()
        .stderr(predicate::str::contains("assessment complete"));
}

#[test]
fn config_warnings_reach_the_trace_file() {
    let dir = TempDir::new().unwrap();
    let cfg = dir.path().join("impact.yaml");
    std::fs::write(&cfg, "version: 7\n").unwrap();

    impact(&dir)
        .args(["--config", cfg.to_str().unwrap(), "Fix a typo in README"])
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown config version 7"));
    let content = std::fs::read_to_string(dir.path().join("trace.log")).unwrap();
    assert!(content.contains("[WARN] config: unknown config version 7"));
}

#[test]
fn config_can_disable_trace_and_default_to_pretty() {
    let dir = TempDir::new().unwrap();
    let cfg = dir.path().join("impact.yaml");
    std::fs::write(&cfg, "log:\n  enabled: false\noutput:\n  pretty: true\n").unwrap();

    impact(&dir)
        .args(["--config", cfg.to_str().unwrap(), "Fix a typo in README"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Impact Radius Assessment"));
    assert!(!dir.path().join("trace.log").exists());

    // --json still overrides the configured default
    impact(&dir)
        .args(["--config", cfg.to_str().unwrap(), "--json", "Fix a typo in README"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn missing_config_file_exits_one() {
    let dir = TempDir::new().unwrap();
    impact(&dir)
        .args(["--config", "does-not-exist.yaml", "Fix a typo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn user_config_is_picked_up_from_home() {
    let dir = TempDir::new().unwrap();
    let cfg_dir = dir.path().join(".config/impact-radius");
    std::fs::create_dir_all(&cfg_dir).unwrap();
    std::fs::write(cfg_dir.join("config.yaml"), "output:\n  pretty: true\n").unwrap();

    impact(&dir)
        .arg("Fix a typo in README")
        .assert()
        .success()
        .stdout(predicate::str::contains("Impact Radius Assessment"));
}
