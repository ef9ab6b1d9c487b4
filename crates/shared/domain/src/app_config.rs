//! Application-wide configuration shape.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Configuration value consumed by the rest of the application.
///
/// Both fields are required:
///
/// ```compile_fail
/// let _ = domain::AppConfig { production: false };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AppConfig {
    /// True when running in a production deployment
    pub production: bool,
    /// Resolved base URL for API calls
    pub api_url: String,
}

impl AppConfig {
    pub fn new(production: bool, api_url: impl Into<String>) -> Self {
        Self {
            production,
            api_url: api_url.into(),
        }
    }
}

impl fmt::Display for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "production={} api_url={}", self.production, self.api_url)
    }
}
