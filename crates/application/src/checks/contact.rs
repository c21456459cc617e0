//! Contact info endpoint check.

use foliocheck_domain::{ApiResponse, CheckResult};

const REQUIRED_FIELDS: [&str; 3] = ["email", "linkedin", "github"];

/// Evaluates the GET /api/contact response.
///
/// Passes iff the status is 200 and the JSON body carries string `email`,
/// `linkedin`, and `github` fields in plausible shapes: the email contains
/// an `@`, the profile links start with `https://`.
#[must_use]
pub fn evaluate(response: &ApiResponse) -> CheckResult {
    if response.status != 200 {
        return CheckResult::fail(format!("unexpected status code: {}", response.status));
    }

    let Some(body) = response.body_as_json() else {
        return CheckResult::fail("response body is not valid JSON");
    };

    let missing: Vec<&str> = REQUIRED_FIELDS
        .into_iter()
        .filter(|field| body.get(field).is_none())
        .collect();
    if !missing.is_empty() {
        return CheckResult::fail(format!("missing required fields: {missing:?}"));
    }

    let email_ok = body
        .get("email")
        .and_then(|v| v.as_str())
        .is_some_and(|email| email.contains('@'));
    let linkedin_ok = body
        .get("linkedin")
        .and_then(|v| v.as_str())
        .is_some_and(|link| link.starts_with("https://"));
    let github_ok = body
        .get("github")
        .and_then(|v| v.as_str())
        .is_some_and(|link| link.starts_with("https://"));

    if email_ok && linkedin_ok && github_ok {
        CheckResult::pass("contact endpoint returning well-formed contact information")
    } else {
        CheckResult::fail(format!("invalid data format in contact fields: {body}"))
    }
}
