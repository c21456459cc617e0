//! Captured HTTP response.
//!
//! `ApiResponse` holds everything a check evaluator needs from a completed
//! HTTP call: status, headers, body text, and timing.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// HTTP response as captured by the client adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers as a map.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Response body as text.
    pub body: String,
    /// Time from request start to body received.
    #[serde(with = "duration_millis")]
    pub duration: Duration,
    /// Content-Type header value (extracted for convenience).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl ApiResponse {
    /// Creates a response from raw body bytes.
    ///
    /// Non-UTF-8 bodies are captured lossily; the checks only ever compare
    /// JSON text, so replacement characters simply fail the JSON parse.
    #[must_use]
    pub fn new(
        status: u16,
        headers: HashMap<String, String>,
        body: Vec<u8>,
        duration: Duration,
    ) -> Self {
        let content_type = headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("content-type"))
            .map(|(_, v)| v.clone());
        let body = String::from_utf8_lossy(&body).into_owned();

        Self {
            status,
            headers,
            body,
            duration,
            content_type,
        }
    }

    /// Attempts to parse the body as JSON.
    #[must_use]
    pub fn body_as_json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// Returns a human-readable duration string (e.g., "124 ms").
    #[must_use]
    pub fn duration_display(&self) -> String {
        let millis = self.duration.as_millis();
        if millis < 1000 {
            format!("{millis} ms")
        } else {
            format!("{:.2} s", self.duration.as_secs_f64())
        }
    }
}

impl Default for ApiResponse {
    fn default() -> Self {
        Self {
            status: 0,
            headers: HashMap::new(),
            body: String::new(),
            duration: Duration::ZERO,
            content_type: None,
        }
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    #[allow(clippy::cast_possible_truncation)]
    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_extracts_content_type() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        let response = ApiResponse::new(
            200,
            headers,
            br#"{"status":"ok"}"#.to_vec(),
            Duration::from_millis(40),
        );

        assert_eq!(response.status, 200);
        assert_eq!(
            response.content_type.as_deref(),
            Some("application/json")
        );
    }

    #[test]
    fn test_content_type_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("content-TYPE".to_string(), "text/html".to_string());
        let response = ApiResponse::new(200, headers, vec![], Duration::ZERO);

        assert_eq!(response.content_type.as_deref(), Some("text/html"));
    }

    #[test]
    fn test_body_as_json() {
        let response = ApiResponse::new(
            200,
            HashMap::new(),
            br#"{"ok":true}"#.to_vec(),
            Duration::ZERO,
        );
        assert_eq!(
            response.body_as_json(),
            Some(serde_json::json!({"ok": true}))
        );

        let response = ApiResponse::new(200, HashMap::new(), b"not json".to_vec(), Duration::ZERO);
        assert_eq!(response.body_as_json(), None);
    }

    #[test]
    fn test_duration_display() {
        let response = ApiResponse {
            duration: Duration::from_millis(150),
            ..Default::default()
        };
        assert_eq!(response.duration_display(), "150 ms");

        let response = ApiResponse {
            duration: Duration::from_millis(1500),
            ..Default::default()
        };
        assert_eq!(response.duration_display(), "1.50 s");
    }
}
