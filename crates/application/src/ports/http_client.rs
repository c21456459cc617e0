//! HTTP Client port

use std::future::Future;

use foliocheck_domain::ApiResponse;
use thiserror::Error;

/// Port for executing the HTTP calls the checks need.
///
/// This trait abstracts the HTTP client implementation, allowing the runner
/// to be exercised against a scripted client in tests.
pub trait HttpClient: Send + Sync {
    /// Executes a GET request against the given URL.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure (timeout, DNS, connection) or
    /// if the URL is unusable. Non-2xx status codes are not errors; the
    /// response is returned as-is for the evaluator to judge.
    fn get(&self, url: &str) -> impl Future<Output = Result<ApiResponse, HttpClientError>> + Send;

    /// Executes a POST request with a JSON body against the given URL.
    ///
    /// # Errors
    ///
    /// Same contract as [`HttpClient::get`].
    fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> impl Future<Output = Result<ApiResponse, HttpClientError>> + Send;
}

/// Transport-level errors surfaced by an [`HttpClient`] adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpClientError {
    /// The URL could not be parsed or used.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete within the timeout.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// Host name resolution failed.
    #[error("DNS resolution failed for {host}: {message}")]
    DnsError {
        /// Host that could not be resolved.
        host: String,
        /// Underlying resolver message.
        message: String,
    },

    /// The server actively refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// The connection failed for another reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The redirect limit was exceeded.
    #[error("too many redirects (max {max})")]
    TooManyRedirects {
        /// Configured redirect limit.
        max: u32,
    },

    /// Any other client error.
    #[error("{0}")]
    Other(String),
}
