//! Tests for run failures and CLI flags.

use crate::support::*;

#[test]
fn test_missing_secrets_fails() {
    let t = Test::new();
    let output = t.run_inputs(&[("prefix", "X_")]);
    assert_failure(&output);
    assert_stdout_contains(&output, "::error::Input required and not supplied: secrets");
    assert!(t.exported().is_empty());
}

#[test]
fn test_invalid_json_fails_with_hint() {
    let t = Test::new();
    let output = t.run_inputs(&[("secrets", "{oops")]);
    assert_failure(&output);
    assert_stdout_contains(&output, "::error::Cannot parse JSON secrets.%0A");
    assert_stdout_contains(&output, "toJSON(secrets)");
    assert!(t.exported().is_empty());
}

#[test]
fn test_unknown_conversion_exports_nothing() {
    let t = Test::new();
    let output = t.run_inputs(&[("secrets", SECRETS_JSON), ("convert", "bogus")]);
    assert_failure(&output);
    assert_stdout_contains(
        &output,
        "::error::Unknown convert value \"bogus\". Available: lower, upper",
    );
    assert!(t.exported().is_empty());
}

#[test]
fn test_invalid_pattern_fails() {
    let t = Test::new();
    let output = t.run_inputs(&[("secrets", SECRETS_JSON), ("include", "MY_SECRET_(")]);
    assert_failure(&output);
    assert_stdout_contains(&output, "::error::invalid pattern \"MY_SECRET_(\"");
    assert!(t.exported().is_empty());
}

#[test]
fn test_terminal_failure_goes_to_stderr() {
    let t = Test::new();
    let output = t.run_args(&["--secrets", "[1,2]"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "✗ Cannot parse JSON secrets.");
}

#[test]
fn test_help() {
    let t = Test::new();
    let output = t.run_args(&["--help"]);
    assert_success(&output);
    assert_stdout_contains(&output, "secrets-to-env");
    assert_stdout_contains(&output, "--removeprefix");
}

#[test]
fn test_help_hides_secret_values() {
    let t = Test::new();
    let output = t
        .cmd()
        .env("INPUT_SECRETS", r#"{"API_KEY":"super-secret-value"}"#)
        .arg("--help")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_excludes(&output, "super-secret-value");
}

#[test]
fn test_version_flag() {
    let t = Test::new();
    let output = t.run_args(&["--version"]);
    assert_success(&output);
    assert_stdout_contains(&output, "secrets-to-env");
}

#[test]
fn test_unknown_flag_fails() {
    let t = Test::new();
    let output = t.run_args(&["--no-such-flag"]);
    assert_failure(&output);
}

#[test]
fn test_key_with_equals_sign_fails_cleanly() {
    let t = Test::new();
    let output = t.run_inputs(&[("secrets", r#"{"A=B":"v"}"#)]);
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
    assert_stdout_contains(&output, "::error::unable to export A=B: name contains '='");
    assert!(t.exported().is_empty());
}

#[test]
fn test_prefix_removal_leaving_empty_name_fails_cleanly() {
    let t = Test::new();
    let output = t.run_inputs(&[("secrets", r#"{"MY_":"v","OK":"1"}"#), ("prefix", "MY_")]);
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
    assert_stdout_contains(&output, "::error::unable to export : name is empty");
    assert!(t.exported().is_empty());
}
