//! Utility modules for the service
//!
//! - **error**: the crate-wide error type and its HTTP mapping
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;
