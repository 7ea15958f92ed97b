//! Analytics report rows
//!
//! Read-only aggregates over orders, items, recipes, stock and payments.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sales aggregation window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalesPeriod {
    /// Last 30 days with paid orders
    #[default]
    Daily,
    /// Last 12 weeks with paid orders
    Weekly,
}

impl SalesPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            _ => None,
        }
    }

    /// Number of buckets returned
    pub fn bucket_limit(&self) -> i64 {
        match self {
            Self::Daily => 30,
            Self::Weekly => 12,
        }
    }
}

/// Revenue of paid orders in one day or week
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SalesBucket {
    /// Day, or Monday of the week
    pub period_start: NaiveDate,
    pub order_count: i64,
    pub total_revenue: Decimal,
    pub avg_order_value: Decimal,
}

/// Sales report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesReport {
    pub period: SalesPeriod,
    pub buckets: Vec<SalesBucket>,
}

/// Count and amount of orders in one status
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderStatusSummary {
    pub status: String,
    pub order_count: i64,
    pub total_amount: Decimal,
    pub avg_order_value: Decimal,
}

/// Paid sales per employee
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EmployeePerformance {
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub orders_served: i64,
    pub total_sales: Decimal,
    pub avg_order_value: Decimal,
}

/// Recipe cost and margin of one dish
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DishProfitMargin {
    pub dish_id: i64,
    pub dish_name: String,
    pub sale_price: Decimal,
    /// Σ recipe quantity × raw material cost per unit
    pub cost_price: Decimal,
    pub profit_per_unit: Decimal,
    pub profit_margin_percent: Decimal,
}

/// Best-selling dish row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct TopDish {
    pub dish_id: i64,
    pub dish_name: String,
    pub category: Option<String>,
    pub times_ordered: i64,
    pub total_quantity: i64,
    pub total_revenue: Decimal,
}

/// Stock level of one raw material
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryStatus {
    pub raw_material_id: i64,
    pub name: String,
    pub current_stock: Decimal,
    pub alert_threshold: Decimal,
    pub cost_per_unit: Decimal,
    pub unit_of_measurement: String,
    pub stock_status: super::StockLevel,
}

/// Payment with order table and processor name joined
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PaymentRecord {
    pub payment_id: i64,
    pub order_id: i64,
    pub payment_method: String,
    pub amount: Decimal,
    pub tip_amount: Decimal,
    pub tax_amount: Decimal,
    pub discount_amount: Decimal,
    pub final_amount: Decimal,
    pub status: String,
    pub payment_date: DateTime<Utc>,
    pub transaction_id: Option<String>,
    pub table_number: Option<String>,
    pub processed_by_name: Option<String>,
}
