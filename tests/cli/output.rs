//! Tests for log output in runner and terminal mode.

use crate::support::*;

#[test]
fn test_runner_reports_exports_and_lists() {
    let t = Test::new();
    let output = t.run_inputs(&[("secrets", SECRETS_JSON), ("exclude", "MY_SECRET_2")]);
    assert_success(&output);
    assert_stdout_contains(&output, "::debug::Using exclude list: github_token, MY_SECRET_2");
    assert_stdout_contains(&output, "Exported secret MY_SECRET_1");
    assert_stdout_excludes(&output, "Exported secret MY_SECRET_2");
    assert_stdout_excludes(&output, "VALUE_1");
}

#[test]
fn test_tracelog_explains_skips() {
    let t = Test::new();
    let output = t.run_inputs(&[
        ("secrets", SECRETS_JSON),
        ("include", "MY_SECRET_.+"),
        ("exclude", "MY_SECRET_2"),
        ("tracelog", "true"),
    ]);
    assert_success(&output);
    assert_stdout_contains(&output, "excluding my_low_secret_1 as not in include list");
    assert_stdout_contains(&output, "::debug::excluding MY_SECRET_2 as in exclude list");
    assert_stdout_contains(&output, "removing prefix from MY_SECRET_1");
}

#[test]
fn test_no_tracelog_by_default() {
    let t = Test::new();
    let output = t.run_inputs(&[("secrets", SECRETS_JSON), ("include", "MY_SECRET_1")]);
    assert_success(&output);
    assert_stdout_excludes(&output, "excluding");
}

#[test]
fn test_terminal_hides_debug_unless_verbose() {
    let t = Test::new();
    let output = t.run_args(&["--secrets", SECRETS_JSON]);
    assert_success(&output);
    assert_stdout_contains(&output, "✓ Exported secret MY_SECRET_1");
    assert_stdout_excludes(&output, "Using exclude list");

    let t = Test::new();
    let output = t.run_args(&["--verbose", "--secrets", SECRETS_JSON]);
    assert_success(&output);
    assert_stdout_contains(&output, "Using exclude list: github_token");
}

#[test]
fn test_dry_run_exports_nothing() {
    let t = Test::new();
    let output = t.run_args(&["--dry-run", "--secrets", SECRETS_JSON, "--exclude", "MY_SECRET_2"]);
    assert_success(&output);
    assert!(t.exported().is_empty());
    assert_stdout_contains(&output, "MY_SECRET_1 -> MY_SECRET_1");
    assert_stdout_contains(&output, "- MY_SECRET_2 (in exclude list)");
    assert_stdout_contains(&output, "2 to export, 1 skipped (dry run)");
}

#[test]
fn test_dry_run_json() {
    let t = Test::new();
    let output = t.run_args(&[
        "--dry-run",
        "--json",
        "--secrets",
        SECRETS_JSON,
        "--convert",
        "lower",
    ]);
    assert_success(&output);
    assert!(t.exported().is_empty());

    let plan: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(plan[0]["key"], "MY_SECRET_1");
    assert_eq!(plan[0]["export_as"], "my_secret_1");
    assert_eq!(plan.as_array().unwrap().len(), 3);
}

#[test]
fn test_log_env_var_accepted() {
    let t = Test::new();
    let output = t
        .cmd()
        .env("SECRETS_TO_ENV_LOG", "trace")
        .args(["--secrets", SECRETS_JSON])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "pipeline finished");
}

#[test]
fn test_dry_run_reports_overwrite() {
    let t = Test::new();
    let output = t
        .cmd()
        .env("MY_SECRET_1", "OLD")
        .args(["--dry-run", "--secrets", SECRETS_JSON, "--override", "true"])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.exported().is_empty());
    assert_stdout_contains(&output, "⚠ Will re-write \"MY_SECRET_1\" environment variable.");
    assert_stdout_contains(&output, "MY_SECRET_1 -> MY_SECRET_1 (overwrites existing value)");
    assert_stdout_excludes(&output, "Exported secret");
}

#[test]
fn test_dry_run_reports_skipped_overwrite() {
    let t = Test::new();
    let output = t
        .cmd()
        .env("MY_SECRET_1", "OLD")
        .args(["--dry-run", "--secrets", SECRETS_JSON])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "Skip overwriting secret MY_SECRET_1");
    assert_stdout_contains(&output, "- MY_SECRET_1 (already set, override disabled)");
}

#[test]
fn test_dry_run_json_flags_overwrite() {
    let t = Test::new();
    let output = t
        .cmd()
        .env("MY_SECRET_1", "OLD")
        .args(["--dry-run", "--json", "--secrets", SECRETS_JSON, "--override", "true"])
        .output()
        .unwrap();
    assert_success(&output);

    let plan: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(plan[0]["key"], "MY_SECRET_1");
    assert_eq!(plan[0]["overwrites"], true);
    assert!(plan[1].get("overwrites").is_none());
}
