//! Check results and the run summary.

use serde::{Deserialize, Serialize};

use crate::check::CheckKind;

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Whether every assertion for the check held.
    pub passed: bool,
    /// Human-readable detail: what passed, or what went wrong.
    pub details: String,
}

impl CheckResult {
    /// Create a passed result.
    #[must_use]
    pub fn pass(details: impl Into<String>) -> Self {
        Self {
            passed: true,
            details: details.into(),
        }
    }

    /// Create a failed result.
    #[must_use]
    pub fn fail(details: impl Into<String>) -> Self {
        Self {
            passed: false,
            details: details.into(),
        }
    }
}

/// Aggregate outcome of a full run.
///
/// Built once after every check has executed; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// True iff every check passed.
    pub success: bool,
    /// Number of checks that passed.
    pub passed: usize,
    /// Total number of checks run.
    pub total: usize,
    /// Per-check results in execution order.
    pub results: Vec<(CheckKind, CheckResult)>,
}

impl RunSummary {
    /// Builds a summary from per-check results, computing the counts.
    #[must_use]
    pub fn new(results: Vec<(CheckKind, CheckResult)>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|(_, r)| r.passed).count();

        Self {
            success: passed == total,
            passed,
            total,
            results,
        }
    }

    /// Looks up the result for a specific check.
    #[must_use]
    pub fn result(&self, kind: CheckKind) -> Option<&CheckResult> {
        self.results
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, r)| r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_summary_counts() {
        let summary = RunSummary::new(vec![
            (CheckKind::Health, CheckResult::pass("ok")),
            (CheckKind::Contact, CheckResult::fail("bad status")),
        ]);

        assert_eq!(summary.total, 2);
        assert_eq!(summary.passed, 1);
        assert!(!summary.success);
    }

    #[test]
    fn test_summary_success_requires_all() {
        let all_pass = RunSummary::new(
            CheckKind::ALL
                .into_iter()
                .map(|k| (k, CheckResult::pass("ok")))
                .collect(),
        );
        assert!(all_pass.success);
        assert_eq!(all_pass.passed, 5);
        assert_eq!(all_pass.total, 5);
    }

    #[test]
    fn test_result_lookup() {
        let summary = RunSummary::new(vec![
            (CheckKind::Health, CheckResult::pass("ok")),
            (CheckKind::Projects, CheckResult::fail("empty")),
        ]);

        assert_eq!(
            summary.result(CheckKind::Projects),
            Some(&CheckResult::fail("empty"))
        );
        assert_eq!(summary.result(CheckKind::Contact), None);
    }
}
