//! Check evaluators.
//!
//! One module per check. Each evaluator is a pure function from a captured
//! [`ApiResponse`](foliocheck_domain::ApiResponse) to a
//! [`CheckResult`](foliocheck_domain::CheckResult); issuing the requests is
//! the runner's job. Every evaluator treats a non-JSON body or a missing
//! field as a failure detail, never a panic.

pub mod contact;
pub mod contact_form;
pub mod error_handling;
pub mod health;
pub mod projects;
