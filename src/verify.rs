//! Assertion helpers shared by the endpoint scenarios.
//!
//! Two reusable checks: `verify_response` (status + `result` field) and
//! `verify_result_field` (`result` field only). Both attach the
//! expected/actual values and the raw body to the test output before
//! asserting — libtest captures the lines and replays them on failure, so
//! a failing scenario always carries its diagnostics. Assertion panics are
//! the native "test failed" signal; nothing is caught or suppressed.

use reqwest::Response;
use serde::Deserialize;

/// JSON envelope returned by `/endpoint`. Only `result` is asserted on;
/// unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct Envelope {
    result: Option<String>,
}

/// Extract the `result` field from a response body.
///
/// Returns `None` when the body is not JSON or carries no `result` field.
pub fn result_field(body: &str) -> Option<String> {
    serde_json::from_str::<Envelope>(body)
        .ok()
        .and_then(|e| e.result)
}

/// Attach a labeled diagnostic line to the test output.
fn attach(label: &str, value: &str) {
    eprintln!("  {label}: {value}");
}

/// Assert HTTP status equality and `result` field equality.
///
/// Consumes the response; the body can only be read once.
pub async fn verify_response(resp: Response, expected_status: u16, expected_result: &str) {
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    let actual_result = result_field(&body);

    attach("expected status", &expected_status.to_string());
    attach("actual status", &status.to_string());
    attach("expected result", expected_result);
    attach(
        "actual result",
        actual_result.as_deref().unwrap_or("<missing>"),
    );
    attach("response body", &body);

    assert_eq!(
        status, expected_status,
        "unexpected HTTP status (body: {body})"
    );
    assert_eq!(
        actual_result.as_deref(),
        Some(expected_result),
        "unexpected 'result' field (body: {body})"
    );
}

/// Assert `result` field equality only, ignoring the HTTP status.
pub async fn verify_result_field(resp: Response, expected: &str) {
    let body = resp.text().await.unwrap_or_default();
    let actual = result_field(&body);

    attach("expected result", expected);
    attach("actual result", actual.as_deref().unwrap_or("<missing>"));
    attach("response body", &body);

    assert_eq!(
        actual.as_deref(),
        Some(expected),
        "unexpected 'result' field (body: {body})"
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
