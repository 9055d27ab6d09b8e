//! User CRUD and bulk-insert endpoints

use crate::config::BulkLoadConfig;
use crate::core::bulk_load::{BulkLoadRequest, BulkLoader};
use crate::core::models::{CreateUserRequest, UpdateUserRequest, validate_name};
use crate::server::state::AppState;
use crate::utils::error::{Result, ServiceError};
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// Configure user routes
///
/// Fixed segments are registered before `/{id}` so they are not parsed as identifiers.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::post().to(create_user))
            .route("", web::get().to(list_users))
            .route("/clear", web::delete().to(clear_users))
            .route("/bulk-insert", web::post().to(bulk_insert))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::put().to(update_user))
            .route("/{id}", web::delete().to(delete_user)),
    );
}

/// Optional pagination for `GET /users`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListUsersQuery {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

/// Query parameters of `POST /users/bulk-insert`; absent values use the configured defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkInsertQuery {
    pub batch_size: Option<i64>,
    #[serde(alias = "workerCount")]
    pub thread_pool_size: Option<i64>,
    pub total_records: Option<i64>,
}

impl BulkInsertQuery {
    /// Fill defaults and enforce the configured bounds
    pub fn resolve(&self, config: &BulkLoadConfig) -> Result<BulkLoadRequest> {
        let batch_size = bounded(
            "batchSize",
            self.batch_size,
            config.default_batch_size,
            config.max_batch_size,
        )?;
        let worker_count = bounded(
            "threadPoolSize",
            self.thread_pool_size,
            config.default_worker_count as u64,
            config.max_worker_count as u64,
        )?;
        let total_records = bounded(
            "totalRecords",
            self.total_records,
            config.total_records,
            config.max_total_records,
        )?;

        Ok(BulkLoadRequest::new(
            total_records,
            batch_size,
            worker_count as usize,
        ))
    }
}

fn bounded(name: &str, value: Option<i64>, default: u64, max: u64) -> Result<u64> {
    let Some(value) = value else {
        return Ok(default);
    };
    if value <= 0 {
        return Err(ServiceError::validation(format!(
            "{} must be greater than 0",
            name
        )));
    }
    let value = value as u64;
    if value > max {
        return Err(ServiceError::validation(format!(
            "{} must not exceed {}",
            name, max
        )));
    }
    Ok(value)
}

/// Response of `DELETE /users/clear`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearUsersResponse {
    pub success: bool,
    pub deleted_count: u64,
    pub message: String,
}

async fn create_user(
    state: web::Data<AppState>,
    request: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    validate_name(&request.name).map_err(ServiceError::validation)?;
    if let Some(id) = request.id {
        if id <= 0 {
            return Err(ServiceError::validation("id must be greater than 0").into());
        }
    }

    let user = state.database.create_user(&request).await?;
    info!("Created user {}", user.id);
    Ok(HttpResponse::Created().json(user))
}

async fn list_users(
    state: web::Data<AppState>,
    query: web::Query<ListUsersQuery>,
) -> ActixResult<HttpResponse> {
    let users = state.database.list_users(query.offset, query.limit).await?;
    debug!("Listed {} users", users.len());
    Ok(HttpResponse::Ok().json(users))
}

async fn get_user(state: web::Data<AppState>, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    match state.database.find_user(id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Err(ServiceError::not_found(format!("User {} not found", id)).into()),
    }
}

async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    request: web::Json<UpdateUserRequest>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    validate_name(&request.name).map_err(ServiceError::validation)?;

    let user = state.database.update_user_name(id, &request.name).await?;
    Ok(HttpResponse::Ok().json(user))
}

async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    if state.database.delete_user(id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(ServiceError::not_found(format!("User {} not found", id)).into())
    }
}

async fn clear_users(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let deleted_count = state.database.clear_users().await?;
    Ok(HttpResponse::Ok().json(ClearUsersResponse {
        success: true,
        deleted_count,
        message: "All users cleared".to_string(),
    }))
}

/// Run a bulk-insert job and return its summary.
///
/// The job runs on its own task so a client disconnect does not cancel it
/// halfway through.
async fn bulk_insert(
    state: web::Data<AppState>,
    query: web::Query<BulkInsertQuery>,
) -> ActixResult<HttpResponse> {
    let bulk_config = &state.config.bulk_load;
    let request = query.resolve(bulk_config)?;

    let loader = BulkLoader::new(state.database.clone())
        .with_shutdown_grace(bulk_config.shutdown_grace());

    let summary = tokio::spawn(async move { loader.run(request).await })
        .await
        .map_err(|e| {
            error!("Bulk insert task failed: {}", e);
            ServiceError::internal(format!("Bulk insert task failed: {}", e))
        })?;

    Ok(HttpResponse::Ok().json(summary))
}
