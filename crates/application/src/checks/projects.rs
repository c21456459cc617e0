//! Projects listing endpoint check.

use foliocheck_domain::{ApiResponse, CheckResult};

const REQUIRED_FIELDS: [&str; 4] = ["id", "title", "description", "tech"];

/// Evaluates the GET /api/projects response.
///
/// Passes iff the status is 200, the body is a non-empty JSON array, and the
/// first project carries string `id`, `title`, `description` plus an array
/// `tech`. The remaining elements are assumed to share the first one's shape,
/// as the endpoint serves a static list.
#[must_use]
pub fn evaluate(response: &ApiResponse) -> CheckResult {
    if response.status != 200 {
        return CheckResult::fail(format!("unexpected status code: {}", response.status));
    }

    let Some(body) = response.body_as_json() else {
        return CheckResult::fail("response body is not valid JSON");
    };

    let Some(projects) = body.as_array() else {
        return CheckResult::fail(format!("expected an array of projects, got: {body}"));
    };
    let Some(first) = projects.first() else {
        return CheckResult::fail("expected a non-empty array of projects, got an empty one");
    };

    let missing: Vec<&str> = REQUIRED_FIELDS
        .into_iter()
        .filter(|field| first.get(field).is_none())
        .collect();
    if !missing.is_empty() {
        return CheckResult::fail(format!("missing required fields in project: {missing:?}"));
    }

    let types_ok = first.get("id").is_some_and(serde_json::Value::is_string)
        && first.get("title").is_some_and(serde_json::Value::is_string)
        && first
            .get("description")
            .is_some_and(serde_json::Value::is_string)
        && first.get("tech").is_some_and(serde_json::Value::is_array);

    if types_ok {
        CheckResult::pass(format!(
            "projects endpoint returning {} well-formed project(s)",
            projects.len()
        ))
    } else {
        CheckResult::fail(format!("invalid data types in project fields: {first}"))
    }
}
