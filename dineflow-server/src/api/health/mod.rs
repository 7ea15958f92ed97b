//! Health check route
//!
//! | Path | Method | Notes |
//! |------|--------|-------|
//! | /api/health | GET | `SELECT 1` against the pool; 503 when it fails |

mod handler;

use axum::{Router, routing::get};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/health", get(handler::health))
}
