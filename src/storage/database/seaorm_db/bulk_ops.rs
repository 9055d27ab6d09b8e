use crate::core::bulk_load::BulkStore;
use crate::core::models::User;
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, user};
use super::types::{DatabaseBackendType, SeaOrmDatabase};

impl SeaOrmDatabase {
    /// Highest identifier in the users table, 0 when the table is empty
    pub async fn max_user_id(&self) -> Result<i64> {
        let max_id: Option<Option<i64>> = entities::User::find()
            .select_only()
            .column_as(user::Column::Id.max(), "max_id")
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(max_id.flatten().unwrap_or(0))
    }

    /// Insert all rows in a single statement inside one transaction
    pub async fn insert_users_in_transaction(&self, users: Vec<User>) -> Result<u64> {
        if users.is_empty() {
            return Ok(0);
        }

        let txn = self.db.begin().await.map_err(ServiceError::Database)?;

        let models = users.iter().map(user::Model::from_domain_user);
        let inserted = entities::User::insert_many(models)
            .exec_without_returning(&txn)
            .await
            .map_err(ServiceError::Database)?;

        txn.commit().await.map_err(ServiceError::Database)?;
        Ok(inserted)
    }

    /// Move the PostgreSQL id sequence past rows inserted with explicit identifiers
    pub async fn sync_user_id_sequence(&self) -> Result<()> {
        if self.backend_type != DatabaseBackendType::PostgreSQL {
            return Ok(());
        }

        debug!("Re-aligning users.id sequence");
        self.db
            .execute_unprepared(
                "SELECT setval(pg_get_serial_sequence('users', 'id'), \
                 COALESCE((SELECT MAX(id) FROM users), 0) + 1, false)",
            )
            .await
            .map_err(ServiceError::Database)?;
        Ok(())
    }
}

#[async_trait]
impl BulkStore for SeaOrmDatabase {
    async fn max_identifier(&self) -> Result<i64> {
        self.max_user_id().await
    }

    async fn insert_users(&self, users: Vec<User>) -> Result<u64> {
        self.insert_users_in_transaction(users).await
    }

    async fn reconcile_identifier_sequence(&self) -> Result<()> {
        self.sync_user_id_sequence().await
    }
}
