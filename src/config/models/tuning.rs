//! System tuning endpoint configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Limits for the memory and CPU stress endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuningConfig {
    /// Seconds a RAM allocation request is held open before responding
    #[serde(default = "default_ram_hold_secs")]
    pub ram_hold_secs: u64,
    /// Upper bound for memory held by the stress arena, in MiB
    #[serde(default = "default_arena_capacity_mb")]
    pub arena_capacity_mb: usize,
    /// Longest accepted CPU stress duration
    #[serde(default = "default_cpu_max_seconds")]
    pub cpu_max_seconds: u64,
    /// CPU stress duration when the request does not specify one
    #[serde(default = "default_cpu_seconds")]
    pub cpu_default_seconds: u64,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            ram_hold_secs: default_ram_hold_secs(),
            arena_capacity_mb: default_arena_capacity_mb(),
            cpu_max_seconds: default_cpu_max_seconds(),
            cpu_default_seconds: default_cpu_seconds(),
        }
    }
}

impl TuningConfig {
    pub fn ram_hold(&self) -> Duration {
        Duration::from_secs(self.ram_hold_secs)
    }

    /// Validate tuning configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.arena_capacity_mb == 0 {
            return Err("arena_capacity_mb must be greater than 0".to_string());
        }
        if self.cpu_max_seconds == 0 {
            return Err("cpu_max_seconds must be greater than 0".to_string());
        }
        if self.cpu_default_seconds == 0 || self.cpu_default_seconds > self.cpu_max_seconds {
            return Err(format!(
                "cpu_default_seconds must be in 1..={}",
                self.cpu_max_seconds
            ));
        }
        Ok(())
    }
}
