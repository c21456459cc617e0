//! Contact form submission check.

use foliocheck_domain::{ApiResponse, CheckResult};

/// The fixed form payload the runner submits.
#[must_use]
pub fn payload() -> serde_json::Value {
    serde_json::json!({
        "name": "John Doe",
        "email": "john.doe@example.com",
        "subject": "Test Contact Form",
        "message": "This is a test message from the API checking suite."
    })
}

/// Evaluates the POST /api/contact-form response.
///
/// Passes iff the status is 200 and the JSON body carries a `message` plus a
/// `received` object deep-equal to the submitted payload. Key order is
/// irrelevant; any missing, extra, or changed field fails.
#[must_use]
pub fn evaluate(response: &ApiResponse, sent: &serde_json::Value) -> CheckResult {
    if response.status != 200 {
        return CheckResult::fail(format!("unexpected status code: {}", response.status));
    }

    let Some(body) = response.body_as_json() else {
        return CheckResult::fail("response body is not valid JSON");
    };

    let (Some(_), Some(received)) = (body.get("message"), body.get("received")) else {
        return CheckResult::fail(format!(
            "missing required response fields (message, received): {body}"
        ));
    };

    if received.is_object() && received == sent {
        CheckResult::pass("contact form endpoint accepting POST data and echoing it back")
    } else {
        CheckResult::fail(format!("received data does not match sent data: {received}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foliocheck_domain::ApiResponse;
    use std::collections::HashMap;
    use std::time::Duration;

    fn json_response(status: u16, body: &str) -> ApiResponse {
        ApiResponse::new(
            status,
            HashMap::new(),
            body.as_bytes().to_vec(),
            Duration::from_millis(10),
        )
    }

    fn echo_body(received: &serde_json::Value) -> String {
        serde_json::json!({"message": "received", "received": received}).to_string()
    }

    #[test]
    fn test_passes_on_exact_echo() {
        let sent = payload();
        let response = json_response(200, &echo_body(&sent));
        assert!(evaluate(&response, &sent).passed);
    }

    #[test]
    fn test_key_order_is_irrelevant() {
        let sent = payload();
        let body = r#"{"message": "received", "received": {
            "message": "This is a test message from the API checking suite.",
            "subject": "Test Contact Form",
            "email": "john.doe@example.com",
            "name": "John Doe"
        }}"#;
        assert!(evaluate(&json_response(200, body), &sent).passed);
    }

    #[test]
    fn test_fails_on_missing_subject_in_echo() {
        let sent = payload();
        let mut received = sent.clone();
        received
            .as_object_mut()
            .and_then(|o| o.remove("subject"))
            .unwrap();
        let response = json_response(200, &echo_body(&received));
        let result = evaluate(&response, &sent);
        assert!(!result.passed);
        assert!(result.details.contains("does not match"));
    }

    #[test]
    fn test_fails_on_extra_field_in_echo() {
        let sent = payload();
        let mut received = sent.clone();
        received
            .as_object_mut()
            .map(|o| o.insert("spam".to_string(), serde_json::json!(true)))
            .unwrap();
        assert!(!evaluate(&json_response(200, &echo_body(&received)), &sent).passed);
    }

    #[test]
    fn test_fails_on_missing_received_field() {
        let sent = payload();
        let response = json_response(200, r#"{"message": "received"}"#);
        let result = evaluate(&response, &sent);
        assert!(!result.passed);
        assert!(result.details.contains("missing required response fields"));
    }

    #[test]
    fn test_fails_on_non_object_received() {
        let sent = payload();
        let response = json_response(200, r#"{"message": "received", "received": "ok"}"#);
        assert!(!evaluate(&response, &sent).passed);
    }

    #[test]
    fn test_fails_on_non_200() {
        let sent = payload();
        let response = json_response(500, &echo_body(&sent));
        assert!(!evaluate(&response, &sent).passed);
    }
}
