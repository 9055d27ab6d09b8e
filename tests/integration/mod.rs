//! Integration tests for userbench-rs
//!
//! These tests exercise real components against in-memory SQLite without mocking.

pub mod api_tests;
pub mod bulk_load_tests;
pub mod database_tests;
