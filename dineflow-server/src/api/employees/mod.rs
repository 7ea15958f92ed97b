//! Employee API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::AppState;

/// Employee router
pub fn router() -> Router<AppState> {
    Router::new().nest("/api/employees", routes())
}

fn routes() -> Router<AppState> {
    Router::new().route("/", get(handler::list))
}
