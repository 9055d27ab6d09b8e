//! Configuration loading utilities
//!
//! This module layers environment variables over file or default configuration.

use super::Config;
use crate::utils::error::{Result, ServiceError};
use std::env;
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load configuration from `path`, falling back to defaults when the file cannot be read.
    ///
    /// The error that caused the fallback is returned alongside the configuration so the
    /// caller can report it once logging is up.
    pub async fn load_or_default<P: AsRef<Path>>(path: P) -> (Self, Option<ServiceError>) {
        match Self::from_file(path).await {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_overrides(mut self) -> Result<Self> {
        debug!("Applying environment variable overrides");

        if let Ok(host) = env::var("USERBENCH_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("USERBENCH_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| ServiceError::Config(format!("Invalid port: {}", e)))?;
        }
        if let Ok(workers) = env::var("USERBENCH_WORKERS") {
            self.server.workers = Some(
                workers
                    .parse()
                    .map_err(|e| ServiceError::Config(format!("Invalid workers count: {}", e)))?,
            );
        }

        if let Ok(db_url) = env::var("DATABASE_URL") {
            self.storage.database.url = db_url;
        }
        if let Ok(max_conn) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.storage.database.max_connections = max_conn
                .parse()
                .map_err(|e| ServiceError::Config(format!("Invalid max connections: {}", e)))?;
        }

        if let Ok(level) = env::var("USERBENCH_LOG_LEVEL") {
            self.logging.level = level;
        }

        self.validate()?;
        Ok(self)
    }
}
