//! Storage seams of the order service
//!
//! Every mutating order operation runs inside one [`OrderTx`]: the order
//! row is locked first, then checked, then written. Dish lookups run on the
//! same transaction, so one operation never holds more than one connection.
//! Dropping a transaction without calling [`OrderTx::commit`] discards its
//! writes.

use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::models::{
    DishSnapshot, Order, OrderItem, OrderItemDetail, OrderSummary, OrderType,
};
use shared::order::{OrderStatus, StoreError};

pub type StoreResult<T> = Result<T, StoreError>;

/// Fields of an order to insert
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub table_number: String,
    pub order_type: OrderType,
    pub served_by: Option<i64>,
}

/// Fields of a line item to insert, unit price already captured
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub order_id: i64,
    pub dish_id: i64,
    pub quantity: i32,
    pub unit_price_at_time: Decimal,
    pub special_instructions: Option<String>,
}

/// Order header plus the serving employee's display name
#[derive(Debug, Clone)]
pub struct OrderHeader {
    pub order: Order,
    pub server_name: Option<String>,
}

/// Order persistence
#[async_trait]
pub trait OrderStore: Send + Sync {
    type Tx: OrderTx;

    /// Start a transaction
    async fn begin(&self) -> StoreResult<Self::Tx>;

    async fn insert_order(&self, order: NewOrder) -> StoreResult<Order>;

    async fn find_order(&self, order_id: i64) -> StoreResult<Option<OrderHeader>>;

    /// Items of an order in insertion order, dish name and description joined
    async fn list_items(&self, order_id: i64) -> StoreResult<Vec<OrderItemDetail>>;

    /// Orders in a status, newest first
    async fn list_orders(&self, status: OrderStatus) -> StoreResult<Vec<OrderSummary>>;
}

/// One atomic unit of order writes
#[async_trait]
pub trait OrderTx: DishLookup {
    /// Load the order and hold it against concurrent writers until commit
    async fn lock_order(&mut self, order_id: i64) -> StoreResult<Option<Order>>;

    async fn items(&mut self, order_id: i64) -> StoreResult<Vec<OrderItem>>;

    async fn insert_item(&mut self, item: NewOrderItem) -> StoreResult<OrderItem>;

    /// Returns false when no item with that id belongs to the order
    async fn delete_item(&mut self, order_id: i64, item_id: i64) -> StoreResult<bool>;

    /// Set status and touch `updated_at`; `calculated_total` is kept when `None`
    async fn update_status(
        &mut self,
        order_id: i64,
        status: OrderStatus,
        calculated_total: Option<Decimal>,
    ) -> StoreResult<Order>;

    async fn commit(self) -> StoreResult<()>;
}

/// Read-only dish catalog
#[async_trait]
pub trait DishLookup: Send {
    /// The dish when it exists and is available for ordering
    async fn find_available_dish(&mut self, dish_id: i64) -> StoreResult<Option<DishSnapshot>>;
}
