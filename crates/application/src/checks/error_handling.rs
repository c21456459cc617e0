//! Unknown-route error handling check.

use foliocheck_domain::{ApiResponse, CheckResult};

/// Body submitted on the POST leg of the check.
#[must_use]
pub fn invalid_post_payload() -> serde_json::Value {
    serde_json::json!({"test": "data"})
}

/// Evaluates one leg (GET or POST) of the 404 check.
///
/// Passes iff the status is 404 and the JSON body has an `error` field whose
/// lowercase form contains "not found". The containment check is plain ASCII
/// lowercasing, so "Not Found" and "Route not found" both match.
#[must_use]
pub fn evaluate_not_found(response: &ApiResponse) -> CheckResult {
    if response.status != 404 {
        return CheckResult::fail(format!(
            "expected status 404, got: {}",
            response.status
        ));
    }

    let Some(body) = response.body_as_json() else {
        return CheckResult::fail("error response body is not valid JSON");
    };

    let error_ok = body
        .get("error")
        .and_then(|v| v.as_str())
        .is_some_and(|e| e.to_lowercase().contains("not found"));

    if error_ok {
        CheckResult::pass("unknown route rejected with a not-found error body")
    } else {
        CheckResult::fail(format!("invalid error response format: {body}"))
    }
}
