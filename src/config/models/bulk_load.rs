//! Bulk loader configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Defaults and upper bounds for bulk-insert jobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkLoadConfig {
    /// Rows created when the request does not specify a count
    #[serde(default = "default_total_records")]
    pub total_records: u64,
    /// Rows per insert statement when the request does not specify one
    #[serde(default = "default_batch_size")]
    pub default_batch_size: u64,
    /// Concurrent workers when the request does not specify a count
    #[serde(default = "default_worker_count")]
    pub default_worker_count: usize,
    /// Largest accepted batch size
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: u64,
    /// Largest accepted worker count
    #[serde(default = "default_max_worker_count")]
    pub max_worker_count: usize,
    /// Largest accepted row count
    #[serde(default = "default_max_total_records")]
    pub max_total_records: u64,
    /// Seconds to wait for in-flight batches at pool shutdown
    #[serde(default = "default_shutdown_grace_secs")]
    pub shutdown_grace_secs: u64,
}

impl Default for BulkLoadConfig {
    fn default() -> Self {
        Self {
            total_records: default_total_records(),
            default_batch_size: default_batch_size(),
            default_worker_count: default_worker_count(),
            max_batch_size: default_max_batch_size(),
            max_worker_count: default_max_worker_count(),
            max_total_records: default_max_total_records(),
            shutdown_grace_secs: default_shutdown_grace_secs(),
        }
    }
}

impl BulkLoadConfig {
    /// Pool shutdown grace period
    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }

    /// Validate bulk loader configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.default_batch_size == 0 || self.default_batch_size > self.max_batch_size {
            return Err(format!(
                "default_batch_size must be in 1..={}",
                self.max_batch_size
            ));
        }
        if self.default_worker_count == 0 || self.default_worker_count > self.max_worker_count {
            return Err(format!(
                "default_worker_count must be in 1..={}",
                self.max_worker_count
            ));
        }
        if self.total_records == 0 || self.total_records > self.max_total_records {
            return Err(format!(
                "total_records must be in 1..={}",
                self.max_total_records
            ));
        }
        Ok(())
    }
}
