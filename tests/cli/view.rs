//! Tests for the view command.

use crate::support::*;

#[test]
fn test_view_latest_default_secret() {
    let t = Test::with_secret("dev-gke-app-secrets", &["{\"a\": 1}\n", "{\"a\": 2}\n"]);

    let output = t.view("dev", &[]);
    assert_success(&output);
    assert_eq!(stdout(&output), "{\"a\": 2}\n");
    assert_eq!(
        t.calls(),
        ["--project proj secrets versions access latest --secret dev-gke-app-secrets --format=get(payload.data)"]
    );
}

#[test]
fn test_view_specific_version_and_secret() {
    let t = Test::with_secret("prod-gke-worker-secrets", &["{\"v\": 1}\n", "{\"v\": 2}\n"]);

    let output = t.view("prod", &["-s", "worker", "-v", "1"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "{\"v\": 1}\n");
}

#[test]
fn test_view_adds_missing_trailing_newline() {
    let t = Test::with_secret("qa-gke-app-secrets", &["{\"k\": \"v\"}"]);

    let output = t.view("qa", &[]);
    assert_success(&output);
    assert_eq!(stdout(&output), "{\"k\": \"v\"}\n");
}

#[test]
fn test_view_decodes_url_safe_payload() {
    // Base64 of this text contains both `+` and `/`, which the fake tool
    // rewrites to `-` and `_`.
    let t = Test::with_secret("dev-gke-app-secrets", &["{\"x\": \"???>>>\"}\n"]);

    let output = t.view("dev", &[]);
    assert_success(&output);
    assert_eq!(stdout(&output), "{\"x\": \"???>>>\"}\n");
}

#[test]
fn test_view_missing_secret_fails() {
    let t = Test::new();

    let output = t.view("stage", &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "secret not found");
    assert_stderr_contains(&output, "proj/stage-gke-app-secrets:latest");
}

#[test]
fn test_view_missing_version_fails() {
    let t = Test::with_secret("dev-gke-app-secrets", &["{}\n"]);

    let output = t.view("dev", &["-v", "9"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "proj/dev-gke-app-secrets:9");
}
