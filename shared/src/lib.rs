//! Shared types for DineFlow
//!
//! Domain models, the order status graph, bill computation and the unified
//! error / response envelope used by the server crate.

pub mod billing;
pub mod error;
pub mod models;
pub mod order;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use billing::{Bill, BillCalculator};
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use order::{OrderError, OrderStatus, StoreError};
