//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library
//! and maps transport errors onto the port's error taxonomy.

use std::collections::HashMap;
use std::future::Future;
use std::time::{Duration, Instant};

use foliocheck_application::{HttpClient, HttpClientError};
use foliocheck_domain::ApiResponse;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Url};

/// Per-request timeout. A call that takes longer is a failed check.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Redirect limit before giving up.
const MAX_REDIRECTS: u32 = 10;

/// HTTP client implementation using reqwest.
///
/// Every request carries the default `Content-Type: application/json` header
/// and the checker's user agent.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client with the checker's default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent("Foliocheck/0.1.0")
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS as usize))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates an adapter around a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn execute(request: reqwest::RequestBuilder) -> Result<ApiResponse, HttpClientError> {
        let start = Instant::now();

        let response = request
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(Self::map_error)?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
            .collect();

        let body = response
            .bytes()
            .await
            .map_err(|e| HttpClientError::Other(format!("failed to read body: {e}")))?
            .to_vec();

        let duration = start.elapsed();
        tracing::debug!(status, elapsed_ms = duration.as_millis() as u64, "request completed");

        Ok(ApiResponse::new(status, headers, body, duration))
    }

    /// Maps reqwest errors to the port's `HttpClientError`.
    fn map_error(error: reqwest::Error) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout {
                timeout_ms: REQUEST_TIMEOUT.as_millis() as u64,
            };
        }

        if error.is_connect() {
            let message = error.to_string();
            let host = error
                .url()
                .and_then(|u| u.host_str().map(ToString::to_string))
                .unwrap_or_else(|| "unknown".to_string());
            if message.to_lowercase().contains("dns") || message.to_lowercase().contains("resolve")
            {
                return HttpClientError::DnsError { host, message };
            }
            if message.to_lowercase().contains("refused") {
                return HttpClientError::ConnectionRefused {
                    host,
                    port: error
                        .url()
                        .and_then(reqwest::Url::port_or_known_default)
                        .unwrap_or(80),
                };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::TooManyRedirects { max: MAX_REDIRECTS };
        }

        HttpClientError::Other(error.to_string())
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &str) -> impl Future<Output = Result<ApiResponse, HttpClientError>> + Send {
        let parsed = Url::parse(url).map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {url}")));
        let client = self.client.clone();
        async move { Self::execute(client.get(parsed?)).await }
    }

    fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> impl Future<Output = Result<ApiResponse, HttpClientError>> + Send {
        let parsed = Url::parse(url).map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {url}")));
        let client = self.client.clone();
        let body = body.clone();
        async move { Self::execute(client.post(parsed?).json(&body)).await }
    }
}
