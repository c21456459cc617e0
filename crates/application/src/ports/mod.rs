//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure or app layer.

mod http_client;
mod reporter;

pub use http_client::{HttpClient, HttpClientError};
pub use reporter::Reporter;
