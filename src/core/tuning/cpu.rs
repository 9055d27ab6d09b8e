//! CPU stress spinner

use crate::utils::error::{Result, ServiceError};
use std::hint::black_box;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Saturates every logical core for a fixed duration.
///
/// Spinners run on dedicated OS threads, never on the async runtime, and
/// exit on their own once the deadline passes.
#[derive(Debug, Clone, Default)]
pub struct CpuStressor {
    active: Arc<AtomicUsize>,
}

impl CpuStressor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn one spinner per logical core and return the number started
    pub fn start(&self, duration: Duration) -> Result<usize> {
        self.start_with_threads(duration, num_cpus::get())
    }

    pub fn start_with_threads(&self, duration: Duration, threads: usize) -> Result<usize> {
        let deadline = Instant::now() + duration;
        let threads = threads.max(1);

        for index in 0..threads {
            let active = Arc::clone(&self.active);
            active.fetch_add(1, Ordering::SeqCst);

            let spawned = thread::Builder::new()
                .name(format!("cpu-stress-{}", index))
                .spawn(move || {
                    spin_until(deadline);
                    active.fetch_sub(1, Ordering::SeqCst);
                    debug!("CPU stress thread {} finished", index);
                });

            if let Err(e) = spawned {
                self.active.fetch_sub(1, Ordering::SeqCst);
                return Err(ServiceError::resource(format!(
                    "Failed to spawn CPU stress thread: {}",
                    e
                )));
            }
        }

        info!(
            "Started CPU stress for {}s on {} cores",
            duration.as_secs(),
            threads
        );
        Ok(threads)
    }

    /// Spinner threads still running
    pub fn active_workers(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

fn spin_until(deadline: Instant) {
    while Instant::now() < deadline {
        black_box(rand::random::<f64>().sqrt());
    }
}
