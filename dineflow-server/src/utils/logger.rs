//! Logging Infrastructure
//!
//! `RUST_LOG` overrides the default filter.

use tracing_subscriber::EnvFilter;

use crate::core::LogFormat;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "dineflow_server=info,tower_http=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into())
}

/// Initialize the global subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger(format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false);

    let result = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().with_current_span(false).try_init(),
    };
    if result.is_err() {
        tracing::debug!("Logger already initialized");
    }
}
