//! Domain layer - Configuration constants and the shared configuration shape.
//!
//! This crate contains pure declarations with no infrastructure dependencies.
//! Binding constants and environment into an [`AppConfig`] is left to the
//! `common` crate.

pub mod app_config;
pub mod constants;

pub use app_config::AppConfig;
pub use constants::*;
