//! Order API Module
//!
//! | Path | Method | Notes |
//! |------|--------|-------|
//! | /api/orders | POST | open an order |
//! | /api/orders?status= | GET | orders in a status, default open |
//! | /api/orders/{id} | GET | order, items and line-item total |
//! | /api/orders/{id}/bill | GET | subtotal, tax and total |
//! | /api/orders/{id}/items | POST | add an item at the current dish price |
//! | /api/orders/{id}/items/{item_id} | DELETE | remove an item from an open order |
//! | /api/orders/{id}/status | PUT | status transition |
//! | /api/orders/{id}/checkout | POST | pay a non-empty open order |

mod handler;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::core::AppState;

/// Order router
pub fn router() -> Router<AppState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/bill", get(handler::bill))
        .route("/{id}/items", post(handler::add_item))
        .route("/{id}/items/{item_id}", delete(handler::remove_item))
        .route("/{id}/status", put(handler::update_status))
        .route("/{id}/checkout", post(handler::checkout))
}
