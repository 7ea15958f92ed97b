use axum::extract::State;
use serde::Serialize;

use crate::core::AppState;
use shared::error::{ApiResponse, AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    status: &'static str,
    version: &'static str,
    environment: String,
    database: &'static str,
    /// Round trip of the ping in milliseconds
    latency_ms: u64,
}

pub async fn health(State(state): State<AppState>) -> AppResult<ApiResponse<HealthStatus>> {
    let started = std::time::Instant::now();
    if let Err(e) = state.db.health_check().await {
        tracing::warn!(error = %e, "Health check failed");
        return Err(
            AppError::unavailable("Database unreachable").with_detail("database", "unreachable")
        );
    }

    Ok(ApiResponse::success(HealthStatus {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        database: "connected",
        latency_ms: started.elapsed().as_millis() as u64,
    }))
}
