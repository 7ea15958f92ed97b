//! Data models
//!
//! Shared between the server crate and API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (PostgreSQL BIGSERIAL). Money is `Decimal`, serialized
//! as a string so no precision is lost on the wire.

pub mod analytics;
pub mod dish;
pub mod employee;
pub mod order;
pub mod raw_material;

// Re-exports
pub use analytics::*;
pub use dish::*;
pub use employee::*;
pub use order::*;
pub use raw_material::*;
