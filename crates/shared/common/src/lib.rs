//! Common utilities for bootstrapping application configuration.
//!
//! This crate provides:
//! - Error handling for settings resolution
//! - The settings loader binding constants and environment overrides
//! - Tracing subscriber setup

pub mod error;
pub mod logging;
pub mod settings;

pub use error::{ConfigError, ConfigResult};
pub use settings::{ConfigSource, EnvSource, MapSource, Settings};
