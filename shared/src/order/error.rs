//! Order and storage errors

use super::OrderStatus;
use crate::error::{AppError, ErrorCode};
use std::fmt;
use thiserror::Error;

/// Kind of integrity constraint the database rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// SQLSTATE 23505
    Unique,
    /// SQLSTATE 23503
    ForeignKey,
    /// SQLSTATE 23514
    Check,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unique => "unique",
            Self::ForeignKey => "foreign key",
            Self::Check => "check",
        })
    }
}

/// Storage-layer failure
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("{kind} constraint violated: {message}")]
    Constraint {
        kind: ConstraintKind,
        constraint: Option<String>,
        message: String,
    },

    #[error("Database error: {0}")]
    Database(String),
}

impl StoreError {
    /// Classify a driver error by its SQLSTATE
    pub fn from_sqlstate(code: Option<&str>, constraint: Option<&str>, message: &str) -> Self {
        let kind = match code {
            Some("23505") => ConstraintKind::Unique,
            Some("23503") => ConstraintKind::ForeignKey,
            Some("23514") => ConstraintKind::Check,
            _ => return StoreError::Database(message.to_string()),
        };
        StoreError::Constraint {
            kind,
            constraint: constraint.map(str::to_string),
            message: message.to_string(),
        }
    }

    pub fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            StoreError::Constraint { kind, .. } => Some(*kind),
            StoreError::Database(_) => None,
        }
    }
}

#[cfg(feature = "db")]
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) => {
                StoreError::from_sqlstate(db.code().as_deref(), db.constraint(), db.message())
            }
            _ => StoreError::Database(err.to_string()),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Constraint {
                kind,
                constraint,
                message,
            } => {
                tracing::warn!(%kind, ?constraint, %message, "Constraint violation");
                let code = match kind {
                    ConstraintKind::Unique => ErrorCode::DuplicateEntry,
                    ConstraintKind::ForeignKey => ErrorCode::ReferenceNotFound,
                    ConstraintKind::Check => ErrorCode::ValidationFailed,
                };
                let app = AppError::new(code);
                match constraint {
                    Some(name) => app.with_detail("constraint", name),
                    None => app,
                }
            }
            StoreError::Database(message) => {
                tracing::error!(error = %message, "Storage error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

/// Coarse classification of order failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidState,
    InvalidArgument,
    Persistence,
}

/// Failure of an order operation
#[derive(Debug, Clone, Error)]
pub enum OrderError {
    // NotFound
    #[error("Order not found")]
    OrderNotFound(i64),

    #[error("Order item not found")]
    ItemNotFound { order_id: i64, item_id: i64 },

    #[error("Dish not found or unavailable")]
    DishUnavailable(i64),

    // InvalidState
    #[error("Cannot modify a closed order")]
    OrderClosed { order_id: i64, status: OrderStatus },

    #[error("Order has no items")]
    EmptyOrder(i64),

    #[error("Cannot change order status from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    // InvalidArgument
    #[error("Invalid status. Must be: open, paid, or cancelled")]
    InvalidStatus(String),

    #[error("Invalid order type. Must be: dine-in, takeaway, or delivery")]
    InvalidOrderType(String),

    #[error("Quantity must be at least 1")]
    InvalidQuantity(i32),

    #[error("table_number is required")]
    MissingTableNumber,

    // Persistence
    #[error(transparent)]
    Persistence(#[from] StoreError),
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OrderNotFound(_) | Self::ItemNotFound { .. } | Self::DishUnavailable(_) => {
                ErrorKind::NotFound
            }
            Self::OrderClosed { .. } | Self::EmptyOrder(_) | Self::InvalidTransition { .. } => {
                ErrorKind::InvalidState
            }
            Self::InvalidStatus(_)
            | Self::InvalidOrderType(_)
            | Self::InvalidQuantity(_)
            | Self::MissingTableNumber => ErrorKind::InvalidArgument,
            Self::Persistence(_) => ErrorKind::Persistence,
        }
    }

    /// Error code rendered to clients (persistence errors map through [`StoreError`])
    pub fn code(&self) -> Option<ErrorCode> {
        let code = match self {
            Self::OrderNotFound(_) => ErrorCode::OrderNotFound,
            Self::ItemNotFound { .. } => ErrorCode::OrderItemNotFound,
            Self::DishUnavailable(_) => ErrorCode::DishNotFound,
            Self::OrderClosed { .. } => ErrorCode::OrderClosed,
            Self::EmptyOrder(_) => ErrorCode::OrderEmpty,
            Self::InvalidTransition { .. } => ErrorCode::InvalidStatusTransition,
            Self::InvalidStatus(_) => ErrorCode::InvalidOrderStatus,
            Self::InvalidOrderType(_) => ErrorCode::InvalidOrderType,
            Self::InvalidQuantity(_) => ErrorCode::InvalidQuantity,
            Self::MissingTableNumber => ErrorCode::RequiredField,
            Self::Persistence(_) => return None,
        };
        Some(code)
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        let message = err.to_string();
        match err {
            OrderError::Persistence(store) => store.into(),
            OrderError::OrderNotFound(id) => {
                AppError::with_message(ErrorCode::OrderNotFound, message).with_detail("order_id", id)
            }
            OrderError::EmptyOrder(id) => {
                AppError::with_message(ErrorCode::OrderEmpty, message).with_detail("order_id", id)
            }
            OrderError::ItemNotFound { order_id, item_id } => {
                AppError::with_message(ErrorCode::OrderItemNotFound, message)
                    .with_detail("order_id", order_id)
                    .with_detail("item_id", item_id)
            }
            OrderError::DishUnavailable(dish_id) => {
                AppError::with_message(ErrorCode::DishNotFound, message)
                    .with_detail("dish_id", dish_id)
            }
            OrderError::OrderClosed { order_id, status } => {
                AppError::with_message(ErrorCode::OrderClosed, message)
                    .with_detail("order_id", order_id)
                    .with_detail("status", status.as_str())
            }
            OrderError::InvalidTransition { from, to } => {
                AppError::with_message(ErrorCode::InvalidStatusTransition, message)
                    .with_detail("from", from.as_str())
                    .with_detail("to", to.as_str())
            }
            OrderError::InvalidStatus(value) => {
                AppError::with_message(ErrorCode::InvalidOrderStatus, message)
                    .with_detail("status", value)
            }
            OrderError::InvalidOrderType(value) => {
                AppError::with_message(ErrorCode::InvalidOrderType, message)
                    .with_detail("order_type", value)
            }
            OrderError::InvalidQuantity(quantity) => {
                AppError::with_message(ErrorCode::InvalidQuantity, message)
                    .with_detail("quantity", quantity)
            }
            OrderError::MissingTableNumber => AppError::required("table_number"),
        }
    }
}

/// Result type for order operations
pub type OrderResult<T> = Result<T, OrderError>;
