//! Check runner.
//!
//! Drives the five checks in fixed order against a base URL, capturing
//! transport failures as per-check failure details rather than aborting the
//! run.

use foliocheck_domain::{CheckKind, CheckResult, RunSummary};
use url::Url;

use crate::checks;
use crate::ports::{HttpClient, HttpClientError, Reporter};

/// Orchestrates a full check run.
///
/// Owns the HTTP client and the resolved base URL, both fixed for the
/// runner's lifetime. Checks execute sequentially; a failure in one never
/// skips the ones after it.
pub struct CheckRunner<C> {
    client: C,
    base_url: Url,
}

impl<C: HttpClient> CheckRunner<C> {
    /// Creates a runner for the given client and base URL.
    pub const fn new(client: C, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// The base URL this runner targets.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/api/{path}",
            self.base_url.as_str().trim_end_matches('/')
        )
    }

    /// Runs all five checks in order and builds the summary.
    ///
    /// Progress is announced through the reporter as each check starts and
    /// finishes, and once more with the final summary.
    pub async fn run_all<R: Reporter>(&self, reporter: &mut R) -> RunSummary {
        tracing::info!(base_url = %self.base_url, "starting check run");

        let mut results = Vec::with_capacity(CheckKind::ALL.len());
        for kind in CheckKind::ALL {
            reporter.check_started(kind);
            let result = match self.run_check(kind, reporter).await {
                Ok(result) => result,
                Err(e) => {
                    tracing::debug!(check = %kind, error = %e, "transport failure");
                    CheckResult::fail(format!("request failed: {e}"))
                }
            };
            reporter.check_completed(kind, &result);
            results.push((kind, result));
        }

        let summary = RunSummary::new(results);
        reporter.run_completed(&summary);
        summary
    }

    async fn run_check<R: Reporter>(
        &self,
        kind: CheckKind,
        reporter: &mut R,
    ) -> Result<CheckResult, HttpClientError> {
        match kind {
            CheckKind::Health => {
                let response = self.client.get(&self.endpoint("health")).await?;
                reporter.request_completed(kind, &response);
                Ok(checks::health::evaluate(&response))
            }
            CheckKind::Contact => {
                let response = self.client.get(&self.endpoint("contact")).await?;
                reporter.request_completed(kind, &response);
                Ok(checks::contact::evaluate(&response))
            }
            CheckKind::Projects => {
                let response = self.client.get(&self.endpoint("projects")).await?;
                reporter.request_completed(kind, &response);
                Ok(checks::projects::evaluate(&response))
            }
            CheckKind::ContactForm => {
                let payload = checks::contact_form::payload();
                let response = self
                    .client
                    .post_json(&self.endpoint("contact-form"), &payload)
                    .await?;
                reporter.request_completed(kind, &response);
                Ok(checks::contact_form::evaluate(&response, &payload))
            }
            CheckKind::ErrorHandling => self.check_error_handling(reporter).await,
        }
    }

    /// GET an unknown route, and only if that leg passes, POST to another.
    async fn check_error_handling<R: Reporter>(
        &self,
        reporter: &mut R,
    ) -> Result<CheckResult, HttpClientError> {
        let get_response = self.client.get(&self.endpoint("nonexistent")).await?;
        reporter.request_completed(CheckKind::ErrorHandling, &get_response);
        let get_result = checks::error_handling::evaluate_not_found(&get_response);
        if !get_result.passed {
            return Ok(CheckResult::fail(format!(
                "GET /api/nonexistent: {}",
                get_result.details
            )));
        }

        let post_response = self
            .client
            .post_json(
                &self.endpoint("invalid-post"),
                &checks::error_handling::invalid_post_payload(),
            )
            .await?;
        reporter.request_completed(CheckKind::ErrorHandling, &post_response);
        let post_result = checks::error_handling::evaluate_not_found(&post_response);
        if post_result.passed {
            Ok(CheckResult::pass(
                "unknown GET and POST routes both rejected with not-found errors",
            ))
        } else {
            Ok(CheckResult::fail(format!(
                "POST /api/invalid-post: {}",
                post_result.details
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foliocheck_domain::ApiResponse;

    struct NeverClient;

    impl HttpClient for NeverClient {
        fn get(
            &self,
            _url: &str,
        ) -> impl std::future::Future<Output = Result<ApiResponse, HttpClientError>> + Send
        {
            async { Err(HttpClientError::Other("unused".to_string())) }
        }

        fn post_json(
            &self,
            _url: &str,
            _body: &serde_json::Value,
        ) -> impl std::future::Future<Output = Result<ApiResponse, HttpClientError>> + Send
        {
            async { Err(HttpClientError::Other("unused".to_string())) }
        }
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let runner = CheckRunner::new(
            NeverClient,
            Url::parse("https://portfolio.example.com").unwrap(),
        );
        assert_eq!(
            runner.endpoint("health"),
            "https://portfolio.example.com/api/health"
        );
        assert_eq!(
            runner.endpoint("contact-form"),
            "https://portfolio.example.com/api/contact-form"
        );
    }
}
