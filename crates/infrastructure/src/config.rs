//! Runtime settings.
//!
//! The checker takes exactly one piece of configuration: the base URL of the
//! server under test, resolved once at startup and fixed for the process
//! lifetime.

use thiserror::Error;
use url::Url;

/// Environment variable supplying the base URL.
pub const BASE_URL_ENV: &str = "NEXT_PUBLIC_BASE_URL";

/// Fallback base URL when the environment variable is absent.
pub const DEFAULT_BASE_URL: &str = "https://creative-coder-15.preview.emergentagent.com";

/// Errors raised while resolving settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// The configured base URL is not a valid URL.
    #[error("invalid base URL in {BASE_URL_ENV}: {0}")]
    InvalidBaseUrl(String),
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Root address of the server under test.
    pub base_url: Url,
}

impl Settings {
    /// Resolves settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured value cannot be parsed as a URL.
    pub fn from_env() -> Result<Self, SettingsError> {
        let raw = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::from_base_url(&raw)
    }

    /// Builds settings from an explicit base URL string.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be parsed as a URL.
    pub fn from_base_url(raw: &str) -> Result<Self, SettingsError> {
        let base_url =
            Url::parse(raw).map_err(|e| SettingsError::InvalidBaseUrl(format!("{e}: {raw}")))?;
        Ok(Self { base_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base_url() {
        let settings = Settings::from_base_url("https://portfolio.example.com").unwrap();
        assert_eq!(settings.base_url.host_str(), Some("portfolio.example.com"));
    }

    #[test]
    fn test_invalid_base_url_is_an_error() {
        let result = Settings::from_base_url("not a url");
        assert!(matches!(result, Err(SettingsError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_default_base_url_parses() {
        assert!(Settings::from_base_url(DEFAULT_BASE_URL).is_ok());
    }
}
