//! Bulk-insert job execution

use super::planner::BatchPlan;
use super::pool::WorkerPool;
use super::store::BulkStore;
use super::types::{BatchJob, BatchOutcome, BulkLoadRequest, BulkProgress, JobSummary};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Default time given to in-flight batches when the pool shuts down
pub const DEFAULT_SHUTDOWN_GRACE: Duration = Duration::from_secs(60);

/// Fans a job out over a worker pool and aggregates the per-batch results
pub struct BulkLoader<S: BulkStore> {
    store: Arc<S>,
    shutdown_grace: Duration,
}

impl<S: BulkStore> BulkLoader<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            shutdown_grace: DEFAULT_SHUTDOWN_GRACE,
        }
    }

    pub fn with_shutdown_grace(mut self, grace: Duration) -> Self {
        self.shutdown_grace = grace;
        self
    }

    /// Run one job to completion.
    ///
    /// Never fails: batch errors end up in [`JobSummary::errors`] and the remaining
    /// batches still run.
    pub async fn run(&self, request: BulkLoadRequest) -> JobSummary {
        info!(
            "Starting bulk insert of {} users with batchSize={}, threadPoolSize={}",
            request.total_records, request.batch_size, request.worker_count
        );
        let started = Instant::now();

        let max_id = self.current_max_id().await;
        let starting_id = match identifier_block(max_id, request.total_records) {
            Ok(starting_id) => starting_id,
            Err(message) => {
                error!("Bulk insert rejected: {}", message);
                return JobSummary::rejected(&request, max_id, started.elapsed(), message);
            }
        };
        info!("Starting ID generation from: {}", starting_id);

        let plan = BatchPlan::new(request.total_records, request.batch_size, starting_id);
        let progress = Arc::new(BulkProgress::new(plan.batch_count()));
        let mut pool = WorkerPool::new(request.worker_count);

        for job in plan {
            pool.submit(execute_batch(
                Arc::clone(&self.store),
                job,
                Arc::clone(&progress),
            ));
        }

        let mut highest_committed_id: Option<i64> = None;
        let mut errors = Vec::new();

        while let Some(joined) = pool.join_next().await {
            match joined {
                Ok(BatchOutcome { job, result: Ok(_) }) => {
                    highest_committed_id = highest_committed_id.max(Some(job.ending_id()));
                }
                Ok(BatchOutcome {
                    job,
                    result: Err(e),
                }) => {
                    errors.push(format!(
                        "Batch {} (ID: {}-{}): {}",
                        job.sequence,
                        job.starting_id,
                        job.ending_id(),
                        e
                    ));
                }
                Err(e) => {
                    errors.push(format!("Batch task did not complete: {}", e));
                }
            }
        }
        let elapsed = started.elapsed();

        pool.shutdown(self.shutdown_grace).await;

        // Every batch has been joined, so the shared counter is final
        let processed_records = progress.processed_records();
        if processed_records > 0 {
            if let Err(e) = self.store.reconcile_identifier_sequence().await {
                warn!("Could not re-align identifier sequence: {}", e);
            }
        }

        let summary = JobSummary::new(
            &request,
            starting_id,
            processed_records,
            highest_committed_id,
            elapsed,
            errors,
        );

        info!(
            "Bulk insert completed! Processed {}/{} records (ID: {}) in {} ms - {:.2} records/second",
            summary.processed_records,
            summary.total_records,
            summary.id_range,
            summary.total_duration_ms,
            summary.records_per_second
        );
        if !summary.success {
            warn!("{} batches failed", summary.errors.len());
        }

        summary
    }

    /// Highest stored identifier; lookup failures start the job from 0
    async fn current_max_id(&self) -> i64 {
        match self.store.max_identifier().await {
            Ok(max_id) => {
                info!("Current max ID in database: {}", max_id);
                max_id
            }
            Err(e) => {
                warn!(
                    "Could not get max ID from database, starting from 0: {}",
                    e
                );
                0
            }
        }
    }
}

/// Insert one batch and report its outcome
async fn execute_batch<S: BulkStore>(
    store: Arc<S>,
    job: BatchJob,
    progress: Arc<BulkProgress>,
) -> BatchOutcome {
    let started = Instant::now();
    let result = store.insert_users(job.rows()).await;
    let elapsed = started.elapsed();

    match &result {
        Ok(rows) => {
            let completed = progress.record_batch(*rows);
            info!(
                "Batch {}/{} completed - {} records (ID: {}-{}) in {} ms",
                completed,
                progress.total_batches(),
                rows,
                job.starting_id,
                job.ending_id(),
                elapsed.as_millis()
            );
        }
        Err(e) => {
            error!("Error in batch {}: {}", job.sequence, e);
        }
    }

    BatchOutcome { job, result }
}

/// First identifier of a job placed directly above `max_id`, provided the whole
/// block of `total_records` identifiers fits in an `i64`
fn identifier_block(max_id: i64, total_records: u64) -> Result<i64, String> {
    let starting_id = max_id.checked_add(1);
    let last_id = i64::try_from(total_records)
        .ok()
        .and_then(|total| max_id.checked_add(total));

    match (starting_id, last_id) {
        (Some(starting_id), Some(_)) => Ok(starting_id),
        _ => Err(format!(
            "Identifier range overflows: {} records cannot be placed above ID {}",
            total_records, max_id
        )),
    }
}
