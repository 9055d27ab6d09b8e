// Module declarations
mod bulk_ops;
mod connection;
mod types;
mod user_ops;

// Re-export public types
pub use types::{DatabaseBackendType, DatabaseStats, SeaOrmDatabase};
