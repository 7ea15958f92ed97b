//! Raw Material Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw material (inventory) entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RawMaterial {
    pub raw_material_id: i64,
    pub name: String,
    pub unit_of_measurement: String,
    pub current_stock: Decimal,
    /// Stock level at or below which the material is reported LOW
    pub alert_threshold: Decimal,
    pub cost_per_unit: Decimal,
    pub supplier: Option<String>,
}

/// Stock level bucket used by the inventory report
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StockLevel {
    Low,
    Medium,
    High,
}

impl StockLevel {
    /// LOW at or below the threshold, MEDIUM up to 1.5x the threshold, HIGH above.
    pub fn classify(current_stock: Decimal, alert_threshold: Decimal) -> Self {
        if current_stock <= alert_threshold {
            Self::Low
        } else if current_stock <= alert_threshold * Decimal::new(15, 1) {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}
