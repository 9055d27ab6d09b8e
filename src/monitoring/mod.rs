//! Host resource probes
//!
//! Memory readings come from `sysinfo` when the `metrics` feature is enabled;
//! without it every probe reports `None`.

mod system;

pub use system::{available_memory_bytes, process_memory_bytes};
