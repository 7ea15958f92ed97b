//! Database Module
//!
//! Owns the PostgreSQL connection pool and migrations. Query modules are
//! free functions over `&PgPool`; the order store implements the storage
//! traits from [`crate::orders`].

pub mod analytics;
pub mod dish;
pub mod employee;
pub mod order;
pub mod raw_material;

use std::str::FromStr;

use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::core::{Config, Result, ServerError};

/// Database service - owns the PostgreSQL connection pool
#[derive(Clone)]
pub struct Database {
    pub pool: PgPool,
}

impl Database {
    /// Connect, verify the connection and apply migrations
    pub async fn connect(config: &Config) -> Result<Self> {
        let pool = Self::pool_options(config)
            .connect_with(connect_options(config)?)
            .await?;

        let db = Self { pool };
        db.health_check().await?;
        tracing::info!(
            max_connections = config.db_max_connections,
            acquire_timeout_ms = config.db_acquire_timeout_ms,
            "Database connection established"
        );

        sqlx::migrate!("./migrations").run(&db.pool).await?;
        tracing::info!("Database migrations applied");

        Ok(db)
    }

    /// Pool that connects on first use (no I/O at construction)
    pub fn connect_lazy(config: &Config) -> Result<Self> {
        let pool = Self::pool_options(config).connect_lazy_with(connect_options(config)?);
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool_options(config: &Config) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(config.acquire_timeout())
            .idle_timeout(config.idle_timeout())
    }

    /// `SELECT 1` round trip
    pub async fn health_check(&self) -> std::result::Result<(), sqlx::Error> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
    }

    /// Wait for checked-out connections to return, then close the pool
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}

/// DATABASE_URL when set, otherwise the DB_* parts
fn connect_options(config: &Config) -> Result<PgConnectOptions> {
    match &config.database_url {
        Some(url) => PgConnectOptions::from_str(url)
            .map_err(|e| ServerError::Config(format!("Invalid DATABASE_URL: {e}"))),
        None => {
            let options = PgConnectOptions::new()
                .host(&config.db_host)
                .port(config.db_port)
                .username(&config.db_user)
                .database(&config.db_name);
            Ok(if config.db_password.is_empty() {
                options
            } else {
                options.password(&config.db_password)
            })
        }
    }
}
