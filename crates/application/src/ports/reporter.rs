//! Reporter port

use foliocheck_domain::{ApiResponse, CheckKind, CheckResult, RunSummary};

/// Port for run progress and summary output.
///
/// The runner announces each check as it starts, each response it receives,
/// each final result, and the full summary once everything has run. The
/// binary supplies a console implementation; tests use a recording one.
pub trait Reporter {
    /// Called before a check's first request is issued.
    fn check_started(&mut self, kind: CheckKind);

    /// Called for each HTTP response a check receives. Not called when the
    /// request itself fails at the transport level.
    fn request_completed(&mut self, kind: CheckKind, response: &ApiResponse);

    /// Called once a check's result is final.
    fn check_completed(&mut self, kind: CheckKind, result: &CheckResult);

    /// Called after all checks have run.
    fn run_completed(&mut self, summary: &RunSummary);
}
