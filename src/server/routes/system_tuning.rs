//! Memory and CPU stress endpoints for exercising the host under load

use crate::core::tuning::bytes_to_mib;
use crate::monitoring::{available_memory_bytes, process_memory_bytes};
use crate::server::state::AppState;
use crate::utils::error::ServiceError;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Configure system tuning routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/system-tuning")
            .route("/ram", web::post().to(allocate_ram))
            .route("/ram", web::get().to(arena_usage))
            .route("/ram", web::delete().to(release_ram))
            .route("/cpu", web::post().to(stress_cpu)),
    );
}

#[derive(Debug, Clone, Deserialize)]
pub struct RamQuery {
    #[serde(rename = "sizeMB")]
    pub size_mb: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CpuQuery {
    pub seconds: Option<i64>,
}

/// Process memory around an allocation, in MiB; `None` when the probe is unavailable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RamResponse {
    #[serde(rename = "memoryBeforeMB")]
    pub memory_before_mb: Option<u64>,
    #[serde(rename = "memoryAfterMB")]
    pub memory_after_mb: Option<u64>,
    #[serde(rename = "heldMB")]
    pub held_mb: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaUsage {
    #[serde(rename = "heldMB")]
    pub held_mb: usize,
    #[serde(rename = "capacityMB")]
    pub capacity_mb: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseResponse {
    #[serde(rename = "releasedMB")]
    pub released_mb: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuResponse {
    pub message: String,
}

/// Allocate `sizeMB` MiB into the arena, hold the request open, then report memory use
async fn allocate_ram(
    state: web::Data<AppState>,
    query: web::Query<RamQuery>,
) -> ActixResult<HttpResponse> {
    let size_mb = query.size_mb;
    if size_mb <= 0 {
        return Err(ServiceError::bad_request("sizeMB must be greater than 0").into());
    }
    let size_mb = size_mb as usize;

    let remaining = state.arena.remaining_mb();
    let limit = match available_memory_bytes() {
        Some(bytes) => remaining.min(bytes_to_mib(bytes) as usize),
        None => remaining,
    };
    if size_mb > limit {
        return Err(ServiceError::bad_request(format!(
            "Cannot allocate {} MB; at most {} MB is available",
            size_mb, limit
        ))
        .into());
    }

    let memory_before_mb = process_memory_bytes().map(bytes_to_mib);

    let arena = state.arena.clone();
    let held_mb = web::block(move || arena.allocate(size_mb))
        .await
        .map_err(|e| ServiceError::internal(format!("Allocation task failed: {}", e)))??;
    info!("Allocated {} MB, arena holds {} MB", size_mb, held_mb);

    let hold = state.config.tuning.ram_hold();
    if !hold.is_zero() {
        tokio::time::sleep(hold).await;
    }

    let memory_after_mb = process_memory_bytes().map(bytes_to_mib);

    Ok(HttpResponse::Ok().json(RamResponse {
        memory_before_mb,
        memory_after_mb,
        held_mb,
    }))
}

async fn arena_usage(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ArenaUsage {
        held_mb: state.arena.held_mb(),
        capacity_mb: state.arena.capacity_mb(),
    })
}

async fn release_ram(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let arena = state.arena.clone();
    let released_mb = web::block(move || arena.clear())
        .await
        .map_err(|e| ServiceError::internal(format!("Release task failed: {}", e)))?;

    Ok(HttpResponse::Ok().json(ReleaseResponse { released_mb }))
}

/// Start spinning every core for `seconds` and return immediately
async fn stress_cpu(
    state: web::Data<AppState>,
    query: web::Query<CpuQuery>,
) -> ActixResult<HttpResponse> {
    let tuning = &state.config.tuning;
    let seconds = query.seconds.unwrap_or(tuning.cpu_default_seconds as i64);
    if seconds < 1 || seconds as u64 > tuning.cpu_max_seconds {
        return Err(ServiceError::bad_request(format!(
            "seconds must be between 1 and {}",
            tuning.cpu_max_seconds
        ))
        .into());
    }

    if state.cpu.active_workers() > 0 {
        warn!(
            "Starting CPU stress while {} spinners are still running",
            state.cpu.active_workers()
        );
    }

    let cores = state.cpu.start(Duration::from_secs(seconds as u64))?;

    Ok(HttpResponse::Ok().json(CpuResponse {
        message: format!("Started CPU stress for {}s on {} cores", seconds, cores),
    }))
}
