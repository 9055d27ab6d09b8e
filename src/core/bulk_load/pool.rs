//! Fixed-size worker pool over tokio tasks

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};
use tracing::warn;

/// Runs submitted futures with at most `size` of them executing at once
///
/// Every submitted future is spawned immediately but waits for a permit before its
/// body runs, so work queued behind busy workers holds no connections or row buffers.
pub struct WorkerPool<T> {
    tasks: JoinSet<T>,
    permits: Arc<Semaphore>,
}

impl<T: Send + 'static> WorkerPool<T> {
    pub fn new(size: usize) -> Self {
        Self {
            tasks: JoinSet::new(),
            permits: Arc::new(Semaphore::new(size.max(1))),
        }
    }

    /// Queue a task for execution
    pub fn submit<F>(&mut self, task: F)
    where
        F: Future<Output = T> + Send + 'static,
    {
        let permits = Arc::clone(&self.permits);
        self.tasks.spawn(async move {
            // The semaphore is never closed
            let _permit = permits.acquire_owned().await.ok();
            task.await
        });
    }

    /// Wait for the next task to finish, in completion order
    pub async fn join_next(&mut self) -> Option<Result<T, JoinError>> {
        self.tasks.join_next().await
    }

    /// Wait up to `grace` for remaining tasks, then abort whatever is still running.
    ///
    /// Returns the number of aborted tasks.
    pub async fn shutdown(mut self, grace: Duration) -> usize {
        if self.tasks.is_empty() {
            return 0;
        }

        let tasks = &mut self.tasks;
        let drained = tokio::time::timeout(grace, async move {
            while tasks.join_next().await.is_some() {}
        })
        .await;

        if drained.is_ok() {
            return 0;
        }

        let remaining = self.tasks.len();
        warn!(
            "Worker pool did not drain within {:?}, aborting {} tasks",
            grace, remaining
        );
        self.tasks.shutdown().await;
        remaining
    }
}
