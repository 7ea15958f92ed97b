//! Unified error codes for DineFlow
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Dish / catalog errors
//! - 9xxx: System errors
//!
//! Every code also carries a stable snake_case key (see [`ErrorCode::key`]),
//! which is what the HTTP envelope exposes in its `error` field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 values on the wire so clients can switch on them
/// without string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,
    /// No route matches the request path
    RouteNotFound = 9,
    /// Unique constraint violated in storage
    DuplicateEntry = 10,
    /// Foreign key constraint violated in storage
    ReferenceNotFound = 11,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order is paid or cancelled and can no longer be modified
    OrderClosed = 4003,
    /// Order item not found
    OrderItemNotFound = 4006,
    /// Order has no items
    OrderEmpty = 4007,
    /// Status value is not one of open / paid / cancelled
    InvalidOrderStatus = 4008,
    /// Status transition is not allowed from the current status
    InvalidStatusTransition = 4009,
    /// Order type is not one of dine-in / takeaway / delivery
    InvalidOrderType = 4010,
    /// Quantity must be a positive integer
    InvalidQuantity = 4011,

    // ==================== 6xxx: Dish ====================
    /// Dish not found or not available for ordering
    DishNotFound = 6001,
    /// Dish has invalid price
    DishInvalidPrice = 6002,

    // ==================== 9xxx: System ====================
    DatabaseError = 9002,
    ServiceUnavailable = 9006,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Stable machine-readable key
    pub const fn key(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "validation_failed",
            ErrorCode::InvalidRequest => "invalid_request",
            ErrorCode::RequiredField => "required_field",
            ErrorCode::ValueOutOfRange => "value_out_of_range",
            ErrorCode::RouteNotFound => "route_not_found",
            ErrorCode::DuplicateEntry => "duplicate_entry",
            ErrorCode::ReferenceNotFound => "reference_not_found",

            ErrorCode::OrderNotFound => "order_not_found",
            ErrorCode::OrderClosed => "order_closed",
            ErrorCode::OrderItemNotFound => "order_item_not_found",
            ErrorCode::OrderEmpty => "order_empty",
            ErrorCode::InvalidOrderStatus => "invalid_order_status",
            ErrorCode::InvalidStatusTransition => "invalid_status_transition",
            ErrorCode::InvalidOrderType => "invalid_order_type",
            ErrorCode::InvalidQuantity => "invalid_quantity",

            ErrorCode::DishNotFound => "dish_not_found",
            ErrorCode::DishInvalidPrice => "dish_invalid_price",

            ErrorCode::DatabaseError => "database_error",
            ErrorCode::ServiceUnavailable => "service_unavailable",
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",
            ErrorCode::RouteNotFound => "Route not found",
            ErrorCode::DuplicateEntry => "This record already exists",
            ErrorCode::ReferenceNotFound => "The referenced record does not exist",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderClosed => "Cannot modify a closed order",
            ErrorCode::OrderItemNotFound => "Order item not found",
            ErrorCode::OrderEmpty => "Order has no items",
            ErrorCode::InvalidOrderStatus => "Invalid status. Must be: open, paid, or cancelled",
            ErrorCode::InvalidStatusTransition => "Status transition is not allowed",
            ErrorCode::InvalidOrderType => {
                "Invalid order type. Must be: dine-in, takeaway, or delivery"
            }
            ErrorCode::InvalidQuantity => "Quantity must be at least 1",

            // Dish
            ErrorCode::DishNotFound => "Dish not found or unavailable",
            ErrorCode::DishInvalidPrice => "Dish price must be between 0 and 99999999.99",

            // System
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ServiceUnavailable => "Service unavailable",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),
            9 => Ok(ErrorCode::RouteNotFound),
            10 => Ok(ErrorCode::DuplicateEntry),
            11 => Ok(ErrorCode::ReferenceNotFound),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4003 => Ok(ErrorCode::OrderClosed),
            4006 => Ok(ErrorCode::OrderItemNotFound),
            4007 => Ok(ErrorCode::OrderEmpty),
            4008 => Ok(ErrorCode::InvalidOrderStatus),
            4009 => Ok(ErrorCode::InvalidStatusTransition),
            4010 => Ok(ErrorCode::InvalidOrderType),
            4011 => Ok(ErrorCode::InvalidQuantity),

            // Dish
            6001 => Ok(ErrorCode::DishNotFound),
            6002 => Ok(ErrorCode::DishInvalidPrice),

            // System
            9002 => Ok(ErrorCode::DatabaseError),
            9006 => Ok(ErrorCode::ServiceUnavailable),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
