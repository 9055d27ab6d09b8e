//! # userbench-rs
//!
//! User records over HTTP with a concurrent bulk loader, backed by SeaORM.
//!
//! ## Features
//!
//! - **User CRUD**: create, list, fetch, rename and delete users
//! - **Bulk loader**: splits a row count into contiguous identifier ranges and
//!   inserts them concurrently, one transaction per batch
//! - **Stress endpoints**: hold memory in a bounded arena or saturate every core
//!   for a fixed duration
//! - **SQLite and PostgreSQL** through SeaORM feature flags
//!
//! ## Running a bulk load directly
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use userbench_rs::config::DatabaseConfig;
//! use userbench_rs::core::bulk_load::{BulkLoadRequest, BulkLoader};
//! use userbench_rs::storage::Database;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let database = Database::new(&DatabaseConfig::default()).await?;
//!     database.migrate().await?;
//!
//!     let loader = BulkLoader::new(Arc::new(database));
//!     let summary = loader.run(BulkLoadRequest::new(100_000, 5000, 16)).await;
//!     println!("inserted {} rows ({})", summary.processed_records, summary.id_range);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
mod monitoring;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use crate::core::bulk_load::{BulkLoadRequest, BulkLoader, JobSummary};
pub use crate::core::models::User;
pub use server::server::HttpServer;
pub use crate::storage::Database;
pub use utils::error::{Result, ServiceError};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information captured by the build script
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp in seconds since the epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
