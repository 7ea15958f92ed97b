//! Analytics API Module
//!
//! Read-only reports over paid orders, recipes, inventory and payments.

mod handler;

use axum::{Router, routing::get};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/analytics", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/sales", get(handler::sales))
        .route("/order-summary", get(handler::order_summary))
        .route("/employee-performance", get(handler::employee_performance))
        .route("/profit-margin", get(handler::profit_margin))
        .route("/top-dishes", get(handler::top_dishes))
        .route("/inventory-status", get(handler::inventory_status))
        .route("/payments", get(handler::payments))
}
