use std::sync::Arc;

use shared::billing::BillCalculator;

use super::{Config, Result};
use crate::db::Database;
use crate::db::order::PgOrderStore;
use crate::orders::OrderService;

/// Order service wired to PostgreSQL
pub type PgOrderService = OrderService<PgOrderStore>;

/// Shared handler state
///
/// Owns the connection pool; cloning shares it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Database,
    pub orders: Arc<PgOrderService>,
}

impl AppState {
    /// Connect to PostgreSQL, apply migrations and build the services
    pub async fn new(config: &Config) -> Result<Self> {
        let db = Database::connect(config).await?;
        Ok(Self::from_database(config.clone(), db))
    }

    pub fn from_database(config: Config, db: Database) -> Self {
        let bill = BillCalculator::from_percent(config.tax_rate_percent);
        let orders = OrderService::new(PgOrderStore::new(db.pool.clone()), bill);
        Self {
            config: Arc::new(config),
            db,
            orders: Arc::new(orders),
        }
    }

    pub fn pool(&self) -> &sqlx::PgPool {
        &self.db.pool
    }
}
