use rust_decimal::Decimal;
use std::str::FromStr;
use std::time::Duration;

use super::error::{Result, ServerError};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATABASE_URL | (built from DB_*) | PostgreSQL URL |
/// | DB_HOST | localhost | |
/// | DB_PORT | 5432 | |
/// | DB_USER | postgres | |
/// | DB_PASSWORD | (empty) | |
/// | DB_NAME | restaurant_management | |
/// | DB_MAX_CONNECTIONS | 20 | pool size |
/// | DB_ACQUIRE_TIMEOUT_MS | 5000 | pool acquire timeout |
/// | DB_IDLE_TIMEOUT_MS | 30000 | idle connection timeout |
/// | HTTP_PORT | 5050 | HTTP listen port |
/// | TAX_RATE_PERCENT | 10 | bill tax rate |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_FORMAT | text | text / json |
///
/// Invalid numeric values fall back to their defaults. An unparseable or
/// negative tax rate is rejected.
#[derive(Debug, Clone)]
pub struct Config {
    /// Full connection URL; takes precedence over the DB_* parts
    pub database_url: Option<String>,
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout_ms: u64,
    pub db_idle_timeout_ms: u64,
    pub http_port: u16,
    /// Tax rate in percent (10 = 10%)
    pub tax_rate_percent: Decimal,
    /// development | staging | production
    pub environment: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.into());

        let tax_rate_percent = match lookup("TAX_RATE_PERCENT") {
            Some(raw) => {
                let rate = Decimal::from_str(raw.trim()).map_err(|e| {
                    ServerError::Config(format!("TAX_RATE_PERCENT={raw} is not a number: {e}"))
                })?;
                if rate.is_sign_negative() {
                    return Err(ServerError::Config(format!(
                        "TAX_RATE_PERCENT must not be negative, got {raw}"
                    )));
                }
                rate
            }
            None => shared::billing::DEFAULT_TAX_RATE_PERCENT,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").filter(|s| !s.is_empty()),
            db_host: var("DB_HOST", "localhost"),
            db_port: parse_var(&lookup, "DB_PORT").unwrap_or(5432),
            db_user: var("DB_USER", "postgres"),
            db_password: var("DB_PASSWORD", ""),
            db_name: var("DB_NAME", "restaurant_management"),
            db_max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS").unwrap_or(20),
            db_acquire_timeout_ms: parse_var(&lookup, "DB_ACQUIRE_TIMEOUT_MS").unwrap_or(5000),
            db_idle_timeout_ms: parse_var(&lookup, "DB_IDLE_TIMEOUT_MS").unwrap_or(30000),
            http_port: parse_var(&lookup, "HTTP_PORT").unwrap_or(5050),
            tax_rate_percent,
            environment: var("ENVIRONMENT", "development"),
            log_format,
        })
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_millis(self.db_acquire_timeout_ms)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_millis(self.db_idle_timeout_ms)
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    lookup(name).and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert!(config.database_url.is_none());
        assert_eq!(config.db_host, "localhost");
        assert_eq!(config.db_port, 5432);
        assert_eq!(config.db_user, "postgres");
        assert_eq!(config.db_password, "");
        assert_eq!(config.db_name, "restaurant_management");
        assert_eq!(config.db_max_connections, 20);
        assert_eq!(config.acquire_timeout(), Duration::from_millis(5000));
        assert_eq!(config.idle_timeout(), Duration::from_millis(30000));
        assert_eq!(config.http_port, 5050);
        assert_eq!(config.tax_rate_percent, Decimal::from(10));
        assert_eq!(config.environment, "development");
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://pos@db/pos"),
            ("DB_MAX_CONNECTIONS", "5"),
            ("HTTP_PORT", "8080"),
            ("TAX_RATE_PERCENT", "8.25"),
            ("ENVIRONMENT", "production"),
            ("LOG_FORMAT", "json"),
        ])
        .unwrap();
        assert_eq!(config.database_url.as_deref(), Some("postgres://pos@db/pos"));
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.tax_rate_percent, Decimal::new(825, 2));
        assert_eq!(config.environment, "production");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = config_from(&[("HTTP_PORT", "not-a-port"), ("DB_PORT", "-1")]).unwrap();
        assert_eq!(config.http_port, 5050);
        assert_eq!(config.db_port, 5432);
    }

    #[test]
    fn test_invalid_tax_rate_is_rejected() {
        assert!(matches!(
            config_from(&[("TAX_RATE_PERCENT", "ten")]),
            Err(ServerError::Config(_))
        ));
        assert!(matches!(
            config_from(&[("TAX_RATE_PERCENT", "-5")]),
            Err(ServerError::Config(_))
        ));
    }
}
