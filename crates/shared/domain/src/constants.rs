//! Application-wide constants.
//!
//! Fixed API connection defaults and the names of the environment variables
//! that bootstrap code may read to override them.

use std::time::Duration;

use serde::Serialize;

// =============================================================================
// API Connection
// =============================================================================

/// Default API base URL. Empty means "unset, supplied at build or deploy time".
pub const DEFAULT_BASE_URL: &str = "";

/// Default request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default value of the production flag
pub const DEFAULT_PRODUCTION: bool = false;

/// Base URL baked in at build time through `APP_API_BASE_URL`, if any.
const BUILD_BASE_URL: &str = match option_env!("APP_API_BASE_URL") {
    Some(url) => url,
    None => DEFAULT_BASE_URL,
};

/// Fixed API connection settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    /// URL prefix for API calls
    pub base_url: &'static str,
    /// Request timeout in milliseconds
    pub timeout: u64,
}

impl ApiConfig {
    /// Timeout as a [`Duration`].
    pub const fn timeout_duration(&self) -> Duration {
        Duration::from_millis(self.timeout)
    }

    /// Whether a base URL was provided.
    pub const fn has_base_url(&self) -> bool {
        !self.base_url.is_empty()
    }
}

/// The process-wide API connection defaults.
///
/// Read-only for the life of the process:
///
/// ```compile_fail
/// domain::API_CONFIG.timeout = 1;
/// ```
pub static API_CONFIG: ApiConfig = ApiConfig {
    base_url: BUILD_BASE_URL,
    timeout: DEFAULT_TIMEOUT_MS,
};

// =============================================================================
// Runtime Overrides
// =============================================================================

/// Environment variable overriding the resolved API URL
pub const ENV_API_URL: &str = "APP_API_URL";

/// Environment variable overriding the production flag
pub const ENV_PRODUCTION: &str = "APP_PRODUCTION";

/// Environment variable overriding the request timeout (milliseconds)
pub const ENV_TIMEOUT_MS: &str = "APP_TIMEOUT_MS";

/// All runtime override variables
pub const OVERRIDE_KEYS: &[&str] = &[ENV_API_URL, ENV_PRODUCTION, ENV_TIMEOUT_MS];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_default() {
        assert_eq!(API_CONFIG.timeout, 30_000);
    }

    #[test]
    fn test_base_url_default() {
        let expected = option_env!("APP_API_BASE_URL").unwrap_or("");
        assert_eq!(API_CONFIG.base_url, expected);
        assert_eq!(DEFAULT_BASE_URL, "");
    }

    #[test]
    fn test_repeated_reads_are_stable() {
        let first = API_CONFIG.timeout;
        let second = API_CONFIG.timeout;
        assert_eq!(first, 30_000);
        assert_eq!(second, 30_000);
    }

    #[test]
    fn test_copy_does_not_touch_original() {
        let mut local = API_CONFIG;
        local.timeout = 5;
        local.base_url = "http://localhost";

        assert_eq!(API_CONFIG.timeout, DEFAULT_TIMEOUT_MS);
        assert_ne!(local, API_CONFIG);
    }

    #[test]
    fn test_timeout_duration() {
        assert_eq!(API_CONFIG.timeout_duration(), Duration::from_secs(30));
    }

    #[test]
    fn test_has_base_url() {
        let unset = ApiConfig {
            base_url: "",
            timeout: 1,
        };
        let set = ApiConfig {
            base_url: "https://api.example.com",
            timeout: 1,
        };

        assert!(!unset.has_base_url());
        assert!(set.has_base_url());
    }

    #[test]
    fn test_serializes_camel_case() {
        let config = ApiConfig {
            base_url: "https://api.example.com",
            timeout: 30_000,
        };
        let json = serde_json::to_value(config).unwrap();

        assert_eq!(json["baseUrl"], "https://api.example.com");
        assert_eq!(json["timeout"], 30_000);
        assert_eq!(json.as_object().unwrap().len(), 2);
    }
}
