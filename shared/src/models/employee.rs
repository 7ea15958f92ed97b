//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employee entity (read-only catalog)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub is_active: bool,
}

impl Employee {
    /// "First Last", the way server names are displayed on orders
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
