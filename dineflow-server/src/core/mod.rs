//! Core module - configuration, state and server lifecycle
//!
//! - [`Config`] - server configuration
//! - [`AppState`] - shared handler state
//! - [`Server`] - HTTP server
//! - [`ServerError`] - startup errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::{Config, LogFormat};
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::AppState;
