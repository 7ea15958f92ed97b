//! DineFlow Server - restaurant point-of-sale backend
//!
//! # Module layout
//!
//! ```text
//! dineflow-server/src/
//! ├── core/      # configuration, state, server lifecycle
//! ├── db/        # PostgreSQL pool, order store, catalog and analytics queries
//! ├── orders/    # order service and storage traits
//! ├── api/       # HTTP routes and handlers
//! ├── error.rs   # service-layer error bridge
//! └── utils/     # logging, request extractors
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod error;
pub mod orders;
pub mod utils;

// Re-export public types
pub use crate::core::{AppState, Config, Server};
pub use orders::OrderService;
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
