//! Types for bulk-insert jobs

use crate::core::models::User;
use crate::utils::error::ServiceError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Parameters of one bulk-insert job; all values are expected to be positive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkLoadRequest {
    /// Rows to create
    pub total_records: u64,
    /// Rows per insert statement
    pub batch_size: u64,
    /// Concurrent workers
    pub worker_count: usize,
}

impl BulkLoadRequest {
    pub fn new(total_records: u64, batch_size: u64, worker_count: usize) -> Self {
        Self {
            total_records,
            batch_size,
            worker_count,
        }
    }
}

/// One contiguous slice of the job, inserted by a single statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchJob {
    /// 1-based position of the batch within the job
    pub sequence: u64,
    /// Offset of the first row within the job
    pub start_index: u64,
    /// Rows in this batch
    pub size: u64,
    /// Identifier of the first row
    pub starting_id: i64,
}

impl BatchJob {
    /// Identifier of the last row
    pub fn ending_id(&self) -> i64 {
        self.starting_id + self.size as i64 - 1
    }

    pub fn id_range(&self) -> RangeInclusive<i64> {
        self.starting_id..=self.ending_id()
    }

    /// Synthetic rows covering this batch's identifier range
    pub fn rows(&self) -> Vec<User> {
        self.id_range().map(User::synthetic).collect()
    }
}

/// Result of executing one batch
#[derive(Debug)]
pub struct BatchOutcome {
    pub job: BatchJob,
    pub result: Result<u64, ServiceError>,
}

/// Counters shared by the workers of one job
#[derive(Debug)]
pub struct BulkProgress {
    total_batches: u64,
    completed_batches: AtomicU64,
    processed_records: AtomicU64,
}

impl BulkProgress {
    pub fn new(total_batches: u64) -> Self {
        Self {
            total_batches,
            completed_batches: AtomicU64::new(0),
            processed_records: AtomicU64::new(0),
        }
    }

    /// Record a committed batch and return how many batches have completed so far
    pub fn record_batch(&self, rows: u64) -> u64 {
        self.processed_records.fetch_add(rows, Ordering::Relaxed);
        self.completed_batches.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn total_batches(&self) -> u64 {
        self.total_batches
    }

    pub fn processed_records(&self) -> u64 {
        self.processed_records.load(Ordering::Relaxed)
    }
}

/// Outcome of a bulk-insert job as returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    /// True when every batch committed
    pub success: bool,
    pub total_records: u64,
    /// Rows actually committed
    pub processed_records: u64,
    pub batch_size: u64,
    pub thread_pool_size: usize,
    pub total_duration_ms: u64,
    pub records_per_second: f64,
    pub starting_id: i64,
    /// Highest identifier written by a committed batch; `starting_id - 1` when none committed
    pub ending_id: i64,
    pub id_range: String,
    /// One message per failed batch
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl JobSummary {
    pub(super) fn new(
        request: &BulkLoadRequest,
        starting_id: i64,
        processed_records: u64,
        highest_committed_id: Option<i64>,
        elapsed: Duration,
        errors: Vec<String>,
    ) -> Self {
        let total_duration_ms = elapsed.as_millis() as u64;
        let ending_id = highest_committed_id.unwrap_or(starting_id - 1);

        Self {
            success: errors.is_empty(),
            total_records: request.total_records,
            processed_records,
            batch_size: request.batch_size,
            thread_pool_size: request.worker_count,
            total_duration_ms,
            records_per_second: records_per_second(processed_records, total_duration_ms),
            starting_id,
            ending_id,
            id_range: format!("{}-{}", starting_id, ending_id),
            errors,
        }
    }

    /// Summary of a job that was refused before any batch was planned
    pub(super) fn rejected(
        request: &BulkLoadRequest,
        max_id: i64,
        elapsed: Duration,
        error: String,
    ) -> Self {
        let starting_id = max_id.saturating_add(1);
        let total_duration_ms = elapsed.as_millis() as u64;

        Self {
            success: false,
            total_records: request.total_records,
            processed_records: 0,
            batch_size: request.batch_size,
            thread_pool_size: request.worker_count,
            total_duration_ms,
            records_per_second: 0.0,
            starting_id,
            ending_id: max_id,
            id_range: format!("{}-{}", starting_id, max_id),
            errors: vec![error],
        }
    }
}

/// Throughput over the elapsed milliseconds; sub-millisecond jobs count as 1 ms
pub(super) fn records_per_second(processed: u64, duration_ms: u64) -> f64 {
    processed as f64 * 1000.0 / duration_ms.max(1) as f64
}
