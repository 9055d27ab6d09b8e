//! Storage seam used by the bulk loader

use crate::core::models::User;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Storage operations a bulk-insert job depends on
///
/// Implementations must make `insert_users` atomic: either every row of the call is
/// committed or none is.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BulkStore: Send + Sync + 'static {
    /// Highest identifier currently stored, 0 for an empty table
    async fn max_identifier(&self) -> Result<i64>;

    /// Insert rows with their preassigned identifiers in one transaction on one pooled
    /// connection, returning the number of rows written
    async fn insert_users(&self, users: Vec<User>) -> Result<u64>;

    /// Bring store-side identifier generation in line with the rows written by a job
    async fn reconcile_identifier_sequence(&self) -> Result<()> {
        Ok(())
    }
}
