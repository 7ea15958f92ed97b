//! Order domain
//!
//! - [`OrderStatus`]: lifecycle states and the one-way transition graph
//! - [`OrderError`]: domain failures of order operations
//! - [`StoreError`]: storage failures, classified by constraint kind

pub mod error;
pub mod status;

// Re-exports
pub use error::{ConstraintKind, ErrorKind, OrderError, OrderResult, StoreError};
pub use status::OrderStatus;
