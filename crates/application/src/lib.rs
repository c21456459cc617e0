//! Foliocheck Application - check evaluators and orchestration
//!
//! The application layer is pure with respect to I/O: every HTTP call goes
//! through the [`ports::HttpClient`] port and every line of progress output
//! through the [`ports::Reporter`] port. Adapters live in the infrastructure
//! and app crates.

pub mod checks;
pub mod ports;
pub mod runner;

pub use ports::{HttpClient, HttpClientError, Reporter};
pub use runner::CheckRunner;
