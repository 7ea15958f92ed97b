//! Dish Model

use crate::billing::round_money;
use crate::error::{AppError, AppResult, ErrorCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Dish entity (menu item)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Dish {
    pub dish_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub sale_price: Decimal,
    pub is_available: bool,
    /// Preparation time in minutes
    pub prep_time: Option<i32>,
}

/// Largest price a `NUMERIC(10, 2)` column holds
// 9_999_999_999 = (2 << 32) | 0x540B_E3FF, scale 2
pub const MAX_SALE_PRICE: Decimal = Decimal::from_parts(0x540B_E3FF, 2, 0, false, 2);

/// Create dish payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishCreate {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub sale_price: Decimal,
    pub is_available: Option<bool>,
    pub prep_time: Option<i32>,
}

impl DishCreate {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::required("name"));
        }
        if self.sale_price.is_sign_negative() || round_money(self.sale_price) > MAX_SALE_PRICE {
            return Err(AppError::new(ErrorCode::DishInvalidPrice)
                .with_detail("sale_price", self.sale_price.to_string()));
        }
        if matches!(self.prep_time, Some(minutes) if minutes < 0) {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                "prep_time must not be negative",
            ));
        }
        Ok(())
    }
}

/// What an order needs from the catalog when a line is added
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DishSnapshot {
    pub dish_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub sale_price: Decimal,
}
