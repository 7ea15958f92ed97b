//! Order Model
//!
//! API shapes of an order, its line items and the payloads that create or
//! change them. Status values and the transition graph live in
//! [`crate::order::OrderStatus`].

use crate::order::OrderStatus;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the order is served
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderType {
    #[default]
    #[serde(rename = "dine-in")]
    DineIn,
    #[serde(rename = "takeaway")]
    Takeaway,
    #[serde(rename = "delivery")]
    Delivery,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DineIn => "dine-in",
            Self::Takeaway => "takeaway",
            Self::Delivery => "delivery",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an order type string outside dine-in / takeaway / delivery
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid order type: {0}")]
pub struct ParseOrderTypeError(pub String);

impl FromStr for OrderType {
    type Err = ParseOrderTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dine-in" => Ok(Self::DineIn),
            "takeaway" => Ok(Self::Takeaway),
            "delivery" => Ok(Self::Delivery),
            other => Err(ParseOrderTypeError(other.to_string())),
        }
    }
}

/// Order header (customer_orders row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i64,
    pub table_number: String,
    pub order_type: OrderType,
    /// Serving employee reference
    pub served_by: Option<i64>,
    pub status: OrderStatus,
    /// Persisted running total, written at checkout
    pub calculated_total: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Whether the order still accepts item changes
    pub fn is_open(&self) -> bool {
        self.status.accepts_items()
    }
}

/// Order line item (order_items row)
///
/// `unit_price_at_time` is captured from the dish when the line is added and
/// never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub order_item_id: i64,
    pub order_id: i64,
    pub dish_id: i64,
    pub quantity: i32,
    pub unit_price_at_time: Decimal,
    pub special_instructions: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl OrderItem {
    /// quantity x captured unit price
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price_at_time
    }
}

/// Line item with dish display fields joined at read time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItemDetail {
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub item: OrderItem,
    pub dish_name: String,
    pub description: Option<String>,
}

/// Full order: header, server name, items in insertion order, line-item total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub server_name: Option<String>,
    pub items: Vec<OrderItemDetail>,
    /// Σ quantity × unit_price_at_time, authoritative over `calculated_total`
    pub total_amount: Decimal,
}

/// Row of the order list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    #[serde(flatten)]
    pub order: Order,
    pub server_name: Option<String>,
    pub item_count: i64,
    /// Σ quantity × unit_price_at_time over the order's items
    pub calculated_amount: Decimal,
}

/// Create order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderCreate {
    #[serde(default)]
    pub table_number: String,
    /// Defaults to dine-in
    pub order_type: Option<String>,
    pub served_by: Option<i64>,
}

/// Add item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreate {
    pub dish_id: i64,
    pub quantity: i32,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

/// Status update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: String,
}
