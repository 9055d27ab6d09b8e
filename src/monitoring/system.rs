//! Memory probes using the sysinfo crate

#[cfg(feature = "metrics")]
use once_cell::sync::Lazy;
#[cfg(feature = "metrics")]
use sysinfo::{ProcessesToUpdate, System};

#[cfg(feature = "metrics")]
static SYSTEM: Lazy<parking_lot::Mutex<System>> =
    Lazy::new(|| parking_lot::Mutex::new(System::new()));

/// Memory the host can still allocate, in bytes
#[cfg(feature = "metrics")]
pub fn available_memory_bytes() -> Option<u64> {
    let mut sys = SYSTEM.lock();
    sys.refresh_memory();
    Some(sys.available_memory())
}

#[cfg(not(feature = "metrics"))]
pub fn available_memory_bytes() -> Option<u64> {
    None
}

/// Resident set size of the current process, in bytes
#[cfg(feature = "metrics")]
pub fn process_memory_bytes() -> Option<u64> {
    let pid = sysinfo::get_current_pid().ok()?;
    let mut sys = SYSTEM.lock();
    sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
    sys.process(pid).map(|process| process.memory())
}

#[cfg(not(feature = "metrics"))]
pub fn process_memory_bytes() -> Option<u64> {
    None
}
