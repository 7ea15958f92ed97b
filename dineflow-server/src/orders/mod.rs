//! Order lifecycle
//!
//! - **service**: [`OrderService`] runs the order operations
//! - **store**: storage traits the service depends on
//!
//! ```text
//! CreateOrder ─► AddItem* / RemoveItem* ─► SetStatus(paid | cancelled) or Checkout
//!                        │
//!                 GetOrder / Bill (any time)
//! ```
//!
//! Unit prices are captured from the dish catalog when a line is added.
//! Totals are always recomputed from the lines.

pub mod service;
pub mod store;

#[cfg(test)]
mod memory;
#[cfg(test)]
mod tests;

pub use service::{Checkout, OrderService};
pub use store::{DishLookup, NewOrder, NewOrderItem, OrderHeader, OrderStore, OrderTx, StoreResult};
