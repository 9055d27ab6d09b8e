//! Health check and version endpoints

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::storage::DatabaseStats;
use actix_web::{HttpResponse, web};
use std::borrow::Cow;
use tracing::{debug, warn};

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/version", web::get().to(version_info));
}

/// Health check endpoint
///
/// Reports `healthy` when the database answers a trivial query and
/// `degraded` with HTTP 503 otherwise.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    let (database, stats) = match state.database.health_check().await {
        Ok(()) => (true, state.database.stats().await.ok()),
        Err(e) => {
            warn!("Database health check failed: {}", e);
            (false, None)
        }
    };

    let status = HealthStatus {
        status: Cow::Borrowed(if database { "healthy" } else { "degraded" }),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        database,
        users: stats,
    };

    if database {
        HttpResponse::Ok().json(ApiResponse::success(status))
    } else {
        HttpResponse::ServiceUnavailable().json(ApiResponse::failure(
            status,
            "Database unavailable".to_string(),
        ))
    }
}

/// Version and build information
async fn version_info() -> HttpResponse {
    debug!("Version info requested");

    let version_info = VersionInfo {
        name: Cow::Borrowed(env!("CARGO_PKG_NAME")),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        build_time: Cow::Borrowed(env!("BUILD_TIME")),
        git_hash: Cow::Borrowed(env!("GIT_HASH")),
        rust_version: Cow::Borrowed(env!("RUST_VERSION")),
        features: enabled_features(),
    };

    HttpResponse::Ok().json(ApiResponse::success(version_info))
}

fn enabled_features() -> Vec<&'static str> {
    let mut features = Vec::new();
    if cfg!(feature = "sqlite") {
        features.push("sqlite");
    }
    if cfg!(feature = "postgres") {
        features.push("postgres");
    }
    if cfg!(feature = "metrics") {
        features.push("metrics");
    }
    features
}

/// Health status response
#[derive(Debug, Clone, serde::Serialize)]
pub struct HealthStatus {
    pub status: Cow<'static, str>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: Cow<'static, str>,
    /// Whether the database answered
    pub database: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<DatabaseStats>,
}

/// Build information emitted by the build script
#[derive(Debug, Clone, serde::Serialize)]
pub struct VersionInfo {
    pub name: Cow<'static, str>,
    pub version: Cow<'static, str>,
    pub build_time: Cow<'static, str>,
    pub git_hash: Cow<'static, str>,
    pub rust_version: Cow<'static, str>,
    pub features: Vec<&'static str>,
}
