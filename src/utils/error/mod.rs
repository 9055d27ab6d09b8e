//! Error handling utilities
//!
//! This module provides the service-wide error type and its HTTP rendering.

pub mod error;

pub use error::*;
