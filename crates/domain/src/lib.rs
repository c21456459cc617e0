//! Foliocheck Domain - Core types for the portfolio API checker
//!
//! This crate defines the domain model shared by the runner and its adapters.
//! All types here are pure Rust with no I/O dependencies.

pub mod check;
pub mod response;
pub mod result;

pub use check::CheckKind;
pub use response::ApiResponse;
pub use result::{CheckResult, RunSummary};
