//! Configuration data models
//!
//! This module defines all configuration structures used throughout the service.

#![allow(missing_docs)]

pub mod bulk_load;
pub mod logging;
pub mod server;
pub mod storage;
pub mod tuning;

pub use bulk_load::*;
pub use logging::*;
pub use server::*;
pub use storage::*;
pub use tuning::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

pub fn default_database_url() -> String {
    "sqlite://data/userbench.db?mode=rwc".to_string()
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_acquire_timeout() -> u64 {
    30
}

pub fn default_total_records() -> u64 {
    10_000_000
}

pub fn default_batch_size() -> u64 {
    5000
}

pub fn default_worker_count() -> usize {
    200
}

pub fn default_max_batch_size() -> u64 {
    10_000
}

pub fn default_max_worker_count() -> usize {
    1000
}

pub fn default_max_total_records() -> u64 {
    100_000_000
}

pub fn default_shutdown_grace_secs() -> u64 {
    60
}

pub fn default_ram_hold_secs() -> u64 {
    30
}

pub fn default_arena_capacity_mb() -> usize {
    1024
}

pub fn default_cpu_max_seconds() -> u64 {
    60
}

pub fn default_cpu_seconds() -> u64 {
    30
}

pub fn default_log_level() -> String {
    "info".to_string()
}
