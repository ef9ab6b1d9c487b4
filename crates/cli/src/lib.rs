//! Command-line front end for inspecting application configuration.
//!
//! ```bash
//! # Print settings resolved from the environment
//! app-config show --pretty
//!
//! # Print the compile-time defaults
//! app-config defaults
//! ```

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
