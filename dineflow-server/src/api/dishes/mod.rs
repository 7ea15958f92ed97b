//! Dish API Module
//!
//! | Path | Method | Notes |
//! |------|--------|-------|
//! | /api/dishes | GET | available dishes by category, name |
//! | /api/dishes | POST | create dish |
//! | /api/dishes/{id} | GET | one dish, available or not |

mod handler;

use axum::{Router, routing::get};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/dishes", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id))
}
