//! Test fixtures and data factories

use userbench_rs::config::Config;
use userbench_rs::core::models::{CreateUserRequest, UpdateUserRequest};

use super::database::test_db_config;

/// Factory for user payloads
pub struct UserFactory;

impl UserFactory {
    /// Create payload with a database-assigned identifier
    pub fn named(name: &str) -> CreateUserRequest {
        CreateUserRequest {
            id: None,
            name: name.to_string(),
        }
    }

    /// Create payload with an explicit identifier
    pub fn with_id(id: i64, name: &str) -> CreateUserRequest {
        CreateUserRequest {
            id: Some(id),
            name: name.to_string(),
        }
    }

    pub fn rename(name: &str) -> UpdateUserRequest {
        UpdateUserRequest {
            name: name.to_string(),
        }
    }
}

/// Service configuration backed by in-memory SQLite with short stress timings
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.storage.database = test_db_config();
    config.tuning.ram_hold_secs = 0;
    config.tuning.arena_capacity_mb = 8;
    config.tuning.cpu_max_seconds = 5;
    config.tuning.cpu_default_seconds = 1;
    config.bulk_load.total_records = 50;
    config.bulk_load.default_batch_size = 10;
    config.bulk_load.default_worker_count = 4;
    config.bulk_load.shutdown_grace_secs = 5;
    config
}
