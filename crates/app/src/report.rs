//! Console reporter.
//!
//! Prints per-check progress lines and the final summary table to standard
//! output. This is the only place in the workspace that writes the report.

use foliocheck_application::Reporter;
use foliocheck_domain::{ApiResponse, CheckKind, CheckResult, RunSummary};

const SEPARATOR: &str = "============================================================";

/// Reporter that writes progress and the summary to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Creates a console reporter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn check_started(&mut self, kind: CheckKind) {
        println!("\n=== Testing {} ===", kind.title());
    }

    fn request_completed(&mut self, _kind: CheckKind, response: &ApiResponse) {
        match &response.content_type {
            Some(content_type) => println!(
                "Status Code: {} ({}, {content_type})",
                response.status,
                response.duration_display()
            ),
            None => println!(
                "Status Code: {} ({})",
                response.status,
                response.duration_display()
            ),
        }
    }

    fn check_completed(&mut self, kind: CheckKind, result: &CheckResult) {
        if result.passed {
            println!("{} check PASSED", kind.title());
        } else {
            println!("{} check FAILED: {}", kind.title(), result.details);
        }
    }

    fn run_completed(&mut self, summary: &RunSummary) {
        println!("\n{SEPARATOR}");
        println!("CHECK SUMMARY");
        println!("{SEPARATOR}");

        for (kind, result) in &summary.results {
            let status = if result.passed { "PASSED" } else { "FAILED" };
            println!("{}: {status}", kind.as_str().to_uppercase());
            println!("  Details: {}", result.details);
        }

        println!();
        println!(
            "Overall result: {}/{} checks passed",
            summary.passed, summary.total
        );
        if summary.success {
            println!("All API checks PASSED");
        } else {
            println!("Some API checks FAILED");
        }
    }
}
