//! Foliocheck Infrastructure - adapters for the application ports
//!
//! Contains the reqwest-based implementation of the `HttpClient` port and
//! environment-based settings resolution.

pub mod adapters;
pub mod config;

pub use adapters::ReqwestHttpClient;
pub use config::{Settings, SettingsError};
