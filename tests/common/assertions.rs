//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;
use colorflip::api::TranslateResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert an error response with the given status whose message contains `needle`
pub fn assert_error(response: &TestResponse, expected: StatusCode, needle: &str) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(json["status"].as_u64(), Some(expected.as_u16() as u64));
    let message = json["error"].as_str().unwrap_or_default();
    assert!(
        message.contains(needle),
        "Expected error containing {needle:?}, got {message:?}"
    );
}

/// Assert a successful translation and return the parsed body
pub fn assert_translated(response: &TestResponse) -> TranslateResponse {
    assert_ok(response);
    let body: TranslateResponse = response.json();

    // All three views are row-aligned
    assert_eq!(body.text.lines().count(), body.outputs.len());
    assert_eq!(body.csv.lines().count(), body.outputs.len() + 1);
    assert_eq!(
        body.csv.lines().next(),
        Some("r_src,g_src,b_src,r_dst,g_dst,b_dst")
    );

    body
}
