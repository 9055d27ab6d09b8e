//! Concurrent bulk loader for synthetic user rows
//!
//! A job reads the current maximum identifier once, splits the requested row count
//! into contiguous identifier ranges and inserts every range as one multi-row
//! statement on a bounded pool of workers. Batch failures are collected, never
//! propagated, so the caller always receives a [`JobSummary`].

mod loader;
mod planner;
mod pool;
mod store;
mod types;


pub use loader::BulkLoader;
pub use planner::{BatchPlan, batch_count};
pub use pool::WorkerPool;
pub use store::BulkStore;
#[cfg(test)]
pub use store::MockBulkStore;
pub use types::{BatchJob, BatchOutcome, BulkLoadRequest, BulkProgress, JobSummary};
