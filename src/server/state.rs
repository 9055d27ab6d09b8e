//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::tuning::{CpuStressor, MemoryArena};
use crate::storage::Database;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Every field is cheap to clone; actix clones the state once per worker.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Database connection pool
    pub database: Arc<Database>,
    /// Memory held by the RAM stress endpoint
    pub arena: Arc<MemoryArena>,
    /// CPU stress spinner
    pub cpu: CpuStressor,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, database: Database) -> Self {
        let arena = MemoryArena::new(config.tuning.arena_capacity_mb);
        Self {
            config: Arc::new(config),
            database: Arc::new(database),
            arena: Arc::new(arena),
            cpu: CpuStressor::new(),
        }
    }
}
