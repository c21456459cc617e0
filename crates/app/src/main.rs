//! Foliocheck - portfolio API integration checker binary.
//!
//! Resolves the target base URL, runs the five checks sequentially, prints
//! the report, and exits 0 iff every check passed.

mod report;

use std::process::ExitCode;

use foliocheck_application::CheckRunner;
use foliocheck_infrastructure::{ReqwestHttpClient, Settings};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::report::ConsoleReporter;

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr; the report owns stdout.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let client = match ReqwestHttpClient::new() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("failed to create HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Starting portfolio API checks");
    println!("Base URL: {}", settings.base_url);

    let runner = CheckRunner::new(client, settings.base_url);
    let mut reporter = ConsoleReporter::new();
    let summary = runner.run_all(&mut reporter).await;

    if summary.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
