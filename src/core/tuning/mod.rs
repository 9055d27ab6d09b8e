//! Host stress primitives used by the system tuning endpoints

mod arena;
mod cpu;

pub use arena::{CHUNK_SIZE, MemoryArena};
pub use cpu::CpuStressor;

/// Bytes per mebibyte
pub const MIB: u64 = 1024 * 1024;

/// Convert a byte count to whole mebibytes
pub fn bytes_to_mib(bytes: u64) -> u64 {
    bytes / MIB
}
