use crate::core::models::{CreateUserRequest, User};
use crate::utils::error::{Result, ServiceError};
use sea_orm::*;
use tracing::{debug, info};

use super::super::entities::{self, user};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Create a new user, letting the database assign the identifier unless one is given
    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<User> {
        debug!("Creating user: {}", request.name);

        let active_model = user::ActiveModel {
            id: request.id.map(Set).unwrap_or(NotSet),
            name: Set(request.name.clone()),
        };

        let model = active_model.insert(&self.db).await.map_err(|e| {
            if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
                ServiceError::Conflict(format!(
                    "User with id {} already exists",
                    request.id.unwrap_or_default()
                ))
            } else {
                ServiceError::Database(e)
            }
        })?;

        Ok(model.into())
    }

    /// List users ordered by identifier, optionally paginated
    pub async fn list_users(&self, offset: Option<u64>, limit: Option<u64>) -> Result<Vec<User>> {
        debug!("Listing users with offset: {:?}, limit: {:?}", offset, limit);

        let mut query = entities::User::find().order_by_asc(user::Column::Id);

        if let Some(offset) = offset {
            query = query.offset(offset);
        }
        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let models = query.all(&self.db).await.map_err(ServiceError::Database)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    /// Find user by ID
    pub async fn find_user(&self, user_id: i64) -> Result<Option<User>> {
        debug!("Finding user by ID: {}", user_id);

        let user_model = entities::User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(user_model.map(|model| model.to_domain_user()))
    }

    /// Rename an existing user
    pub async fn update_user_name(&self, user_id: i64, name: &str) -> Result<User> {
        debug!("Updating name for user: {}", user_id);

        let mut active_model: user::ActiveModel = entities::User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(ServiceError::Database)?
            .ok_or_else(|| ServiceError::NotFound(format!("User {} not found", user_id)))?
            .into();

        active_model.name = Set(name.to_string());

        let model = active_model
            .update(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(model.into())
    }

    /// Delete a user; returns whether a row was removed
    pub async fn delete_user(&self, user_id: i64) -> Result<bool> {
        debug!("Deleting user: {}", user_id);

        let result = entities::User::delete_by_id(user_id)
            .exec(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(result.rows_affected > 0)
    }

    /// Count all users
    pub async fn count_users(&self) -> Result<u64> {
        entities::User::find()
            .count(&self.db)
            .await
            .map_err(ServiceError::Database)
    }

    /// Delete every user; returns the number of removed rows
    pub async fn clear_users(&self) -> Result<u64> {
        let result = entities::User::delete_many()
            .exec(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        info!("Cleared {} users from database", result.rows_affected);
        Ok(result.rows_affected)
    }
}
