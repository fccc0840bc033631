//! Tests for the list command.

use crate::support::*;

#[test]
fn test_list_passes_tool_output_through() {
    let t = Test::with_secret("dev-gke-app-secrets", &["{}\n", "{}\n"]);

    let output = t.list("dev", &[]);
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("NAME"));
    assert!(out.contains("2     enabled"));
    assert!(out.contains("1     enabled"));
    assert_eq!(
        t.calls(),
        ["--project proj secrets versions list dev-gke-app-secrets"]
    );
}

#[test]
fn test_list_custom_secret() {
    let t = Test::with_secret("test-gke-cron-secrets", &["{}\n"]);

    let output = t.list("test", &["--secret", "cron"]);
    assert_success(&output);
    assert_stdout_contains(&output, "1     enabled");
}

#[test]
fn test_list_missing_secret_fails() {
    let t = Test::new();

    let output = t.list("dev", &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "NOT_FOUND");
    assert_stderr_contains(&output, "secret not found");
}
