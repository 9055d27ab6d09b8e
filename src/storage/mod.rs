//! Storage layer for the service
//!
//! This module provides data persistence for user records.

/// Database storage module
pub mod database;

pub use database::{Database, DatabaseBackendType, DatabaseStats};
