//! Health endpoint check.

use foliocheck_domain::{ApiResponse, CheckResult};

/// Substring the health message must contain.
const EXPECTED_MESSAGE: &str = "Portfolio API is running";

/// Evaluates the GET /api/health response.
///
/// Passes iff the status is 200 and the JSON body carries `status == "ok"`
/// and a `message` containing the expected phrase.
#[must_use]
pub fn evaluate(response: &ApiResponse) -> CheckResult {
    if response.status != 200 {
        return CheckResult::fail(format!("unexpected status code: {}", response.status));
    }

    let Some(body) = response.body_as_json() else {
        return CheckResult::fail("response body is not valid JSON");
    };

    let (Some(status), Some(message)) = (body.get("status"), body.get("message")) else {
        return CheckResult::fail(format!("missing required fields (status, message): {body}"));
    };

    let status_ok = status.as_str() == Some("ok");
    let message_ok = message
        .as_str()
        .is_some_and(|m| m.contains(EXPECTED_MESSAGE));

    if status_ok && message_ok {
        CheckResult::pass("health endpoint responding with expected status and message")
    } else {
        CheckResult::fail(format!("unexpected response content: {body}"))
    }
}
