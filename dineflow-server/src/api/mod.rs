//! API routes
//!
//! - [`health`] - liveness and database ping
//! - [`orders`] - order lifecycle
//! - [`dishes`] - dish catalog
//! - [`employees`] - active employees
//! - [`raw_materials`] - raw material inventory
//! - [`analytics`] - reporting endpoints
//!
//! Every response uses the [`ApiResponse`] envelope. Unmatched paths fall
//! through to a `route_not_found` envelope.

pub mod analytics;
pub mod dishes;
pub mod employees;
pub mod health;
pub mod orders;
pub mod raw_materials;

#[cfg(test)]
pub(crate) mod testing;

use axum::Router;
use http::{StatusCode, Uri};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::AppState;
use crate::error::ServiceError;
use shared::error::{ApiResponse, AppError};

/// Handler result: envelope on success, `ServiceError` otherwise
pub type ApiResult<T> = Result<ApiResponse<T>, ServiceError>;

/// `201 Created` with an envelope
pub type Created<T> = (StatusCode, ApiResponse<T>);

pub fn created<T>(message: &str, data: T) -> Created<T> {
    (
        StatusCode::CREATED,
        ApiResponse::success_with_message(message, data),
    )
}

/// All routes, no middleware, no state
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(orders::router())
        .merge(dishes::router())
        .merge(employees::router())
        .merge(raw_materials::router())
        .merge(analytics::router())
        .fallback(route_not_found)
}

/// Routes with middleware and state applied
pub fn build_app(state: AppState) -> Router {
    build_router()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn route_not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route matched");
    AppError::route_not_found(uri.path())
}
