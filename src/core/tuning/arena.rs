//! Bounded memory arena for the RAM stress endpoint

use crate::utils::error::{Result, ServiceError};
use parking_lot::Mutex;
use tracing::{debug, info};

/// Size of one arena chunk
pub const CHUNK_SIZE: usize = 1024 * 1024;

/// Byte written into every chunk so the pages become resident
const FILL_BYTE: u8 = 0xA5;

/// Owned collection of 1 MiB chunks with a fixed capacity.
///
/// Allocations are all-or-nothing: a request that does not fit the remaining
/// capacity is rejected before anything is allocated.
#[derive(Debug)]
pub struct MemoryArena {
    capacity_chunks: usize,
    chunks: Mutex<Vec<Box<[u8]>>>,
}

impl MemoryArena {
    /// Create an empty arena that can hold up to `capacity_mb` MiB
    pub fn new(capacity_mb: usize) -> Self {
        Self {
            capacity_chunks: capacity_mb,
            chunks: Mutex::new(Vec::new()),
        }
    }

    pub fn capacity_mb(&self) -> usize {
        self.capacity_chunks
    }

    /// MiB currently held
    pub fn held_mb(&self) -> usize {
        self.chunks.lock().len()
    }

    pub fn remaining_mb(&self) -> usize {
        self.capacity_chunks.saturating_sub(self.held_mb())
    }

    /// Allocate `size_mb` chunks and keep them until [`clear`](Self::clear).
    ///
    /// The chunks are built outside the lock and appended in one step; the
    /// capacity check is repeated on append so concurrent callers cannot
    /// overshoot.
    pub fn allocate(&self, size_mb: usize) -> Result<usize> {
        if size_mb == 0 {
            return Err(ServiceError::bad_request("sizeMB must be greater than 0"));
        }
        self.check_fits(size_mb)?;

        let fresh: Vec<Box<[u8]>> = (0..size_mb)
            .map(|_| vec![FILL_BYTE; CHUNK_SIZE].into_boxed_slice())
            .collect();

        let mut chunks = self.chunks.lock();
        if chunks.len() + size_mb > self.capacity_chunks {
            return Err(ServiceError::bad_request(format!(
                "Arena capacity exceeded: {} MB held, {} MB capacity",
                chunks.len(),
                self.capacity_chunks
            )));
        }
        chunks.extend(fresh);
        debug!("Arena now holds {} MB", chunks.len());
        Ok(chunks.len())
    }

    /// Drop every held chunk and return how many MiB were released
    pub fn clear(&self) -> usize {
        let released = std::mem::take(&mut *self.chunks.lock());
        let count = released.len();
        drop(released);
        info!("Released {} MB from memory arena", count);
        count
    }

    fn check_fits(&self, size_mb: usize) -> Result<()> {
        let remaining = self.remaining_mb();
        if size_mb > remaining {
            return Err(ServiceError::bad_request(format!(
                "Requested {} MB exceeds remaining arena capacity of {} MB",
                size_mb, remaining
            )));
        }
        Ok(())
    }
}
