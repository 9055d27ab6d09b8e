//! Configuration management for the service
//!
//! This module handles loading, validation, and management of all service configuration.

pub mod loader;
pub mod models;

pub use models::*;

use crate::utils::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Bulk loader defaults and limits
    #[serde(default)]
    pub bulk_load: BulkLoadConfig,
    /// System tuning endpoints
    #[serde(default)]
    pub tuning: TuningConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ServiceError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ServiceError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }

    /// Get bulk loader configuration
    pub fn bulk_load(&self) -> &BulkLoadConfig {
        &self.bulk_load
    }

    /// Get system tuning configuration
    pub fn tuning(&self) -> &TuningConfig {
        &self.tuning
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| ServiceError::Config(format!("Server config error: {}", e)))?;

        self.server
            .cors
            .validate()
            .map_err(|e| ServiceError::Config(format!("CORS config error: {}", e)))?;

        self.storage
            .database
            .validate()
            .map_err(|e| ServiceError::Config(format!("Database config error: {}", e)))?;

        self.bulk_load
            .validate()
            .map_err(|e| ServiceError::Config(format!("Bulk load config error: {}", e)))?;

        self.tuning
            .validate()
            .map_err(|e| ServiceError::Config(format!("Tuning config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| ServiceError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ServiceError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ServiceError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
