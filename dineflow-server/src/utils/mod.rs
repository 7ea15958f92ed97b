//! Utilities
//!
//! - [`logger`] - tracing subscriber setup
//! - [`extract`] - request extractors with envelope-shaped rejections

pub mod extract;
pub mod logger;

pub use extract::{AppJson, AppPath, AppQuery};
