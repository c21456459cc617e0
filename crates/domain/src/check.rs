//! Check identities.
//!
//! The suite is a closed, ordered set of five checks. The order here is the
//! execution order; it never changes between runs.

use serde::{Deserialize, Serialize};

/// One of the five checks the runner performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// GET /api/health liveness probe.
    Health,
    /// GET /api/contact static contact info.
    Contact,
    /// GET /api/projects listing.
    Projects,
    /// POST /api/contact-form submission echo.
    ContactForm,
    /// 404 behavior for unknown routes.
    ErrorHandling,
}

impl CheckKind {
    /// All checks in execution order.
    pub const ALL: [Self; 5] = [
        Self::Health,
        Self::Contact,
        Self::Projects,
        Self::ContactForm,
        Self::ErrorHandling,
    ];

    /// Stable snake_case name used as the results key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Contact => "contact",
            Self::Projects => "projects",
            Self::ContactForm => "contact_form",
            Self::ErrorHandling => "error_handling",
        }
    }

    /// Human-readable title for progress output.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Health => "Health Endpoint",
            Self::Contact => "Contact Endpoint",
            Self::Projects => "Projects Endpoint",
            Self::ContactForm => "Contact Form Endpoint",
            Self::ErrorHandling => "Error Handling",
        }
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_order() {
        assert_eq!(
            CheckKind::ALL,
            [
                CheckKind::Health,
                CheckKind::Contact,
                CheckKind::Projects,
                CheckKind::ContactForm,
                CheckKind::ErrorHandling,
            ]
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(CheckKind::Health.as_str(), "health");
        assert_eq!(CheckKind::ContactForm.as_str(), "contact_form");
        assert_eq!(CheckKind::ErrorHandling.to_string(), "error_handling");
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for kind in CheckKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }
}
