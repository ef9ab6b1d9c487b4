//! Runtime settings resolved from the compile-time constants and environment
//! overrides.

use std::collections::HashMap;
use std::env::{self, VarError};
use std::fmt::Debug;
use std::path::Path;
use std::time::Duration;

use domain::{
    AppConfig, API_CONFIG, DEFAULT_PRODUCTION, ENV_API_URL, ENV_PRODUCTION, ENV_TIMEOUT_MS,
};
use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::error::{ConfigError, ConfigResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Key/value lookup the settings are resolved from.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ConfigSource {
    /// Raw value for `key`, `Ok(None)` when unset
    fn get(&self, key: &str) -> ConfigResult<Option<String>>;
}

/// Reads process environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn get(&self, key: &str) -> ConfigResult<Option<String>> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(raw)) => Err(ConfigError::invalid_value(
                key,
                raw.to_string_lossy(),
                "valid UTF-8",
            )),
        }
    }
}

/// In-memory source, mostly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ConfigSource for MapSource {
    fn get(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(flatten)]
    pub app: AppConfig,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Settings {
    /// Settings built from [`API_CONFIG`] alone.
    pub fn defaults() -> Self {
        Self {
            app: AppConfig::new(DEFAULT_PRODUCTION, API_CONFIG.base_url),
            timeout_ms: API_CONFIG.timeout,
        }
    }

    /// Resolve settings from `source`, falling back to the defaults per field.
    pub fn from_source(source: &dyn ConfigSource) -> ConfigResult<Self> {
        let api_url = resolve_text(source, ENV_API_URL, API_CONFIG.base_url)?;
        let production = resolve(
            source,
            ENV_PRODUCTION,
            DEFAULT_PRODUCTION,
            "a boolean (true/false, 1/0, yes/no, on/off)",
            parse_bool,
        )?;
        let timeout_ms = resolve(
            source,
            ENV_TIMEOUT_MS,
            API_CONFIG.timeout,
            "milliseconds as u64",
            |raw| raw.parse().ok(),
        )?;

        let settings = Self {
            app: AppConfig::new(production, api_url),
            timeout_ms,
        };
        tracing::info!(config = %settings.app, timeout_ms, "Settings resolved");
        Ok(settings)
    }

    /// Load `.env` if present, then resolve from process environment.
    pub fn from_env() -> ConfigResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_source(&EnvSource)
    }

    /// Load the given dotenv file, then resolve from process environment.
    ///
    /// Unlike [`Settings::from_env`], a missing file is an error.
    pub fn from_env_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        dotenvy::from_path(path)
            .map_err(|e| ConfigError::env_file(format!("{}: {}", path.display(), e)))?;
        Self::from_source(&EnvSource)
    }

    /// The resolved application configuration.
    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::defaults()
    }
}

fn resolve<T, F>(
    source: &dyn ConfigSource,
    key: &'static str,
    default: T,
    expected: &'static str,
    parse: F,
) -> ConfigResult<T>
where
    T: Debug,
    F: FnOnce(&str) -> Option<T>,
{
    match source.get(key)? {
        Some(raw) => {
            let value =
                parse(raw.trim()).ok_or_else(|| ConfigError::invalid_value(key, &raw, expected))?;
            tracing::debug!(key, ?value, origin = "env", "Setting resolved");
            Ok(value)
        }
        None => {
            tracing::debug!(key, value = ?default, origin = "default", "Setting resolved");
            Ok(default)
        }
    }
}

/// Like [`resolve`] for free-form text: any string is accepted.
fn resolve_text(
    source: &dyn ConfigSource,
    key: &'static str,
    default: &str,
) -> ConfigResult<String> {
    match source.get(key)? {
        Some(raw) => {
            let value = raw.trim().to_string();
            tracing::debug!(key, value = %value, origin = "env", "Setting resolved");
            Ok(value)
        }
        None => {
            tracing::debug!(key, value = %default, origin = "default", "Setting resolved");
            Ok(default.to_string())
        }
    }
}

/// Parse a boolean flag, case-insensitively.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

// =============================================================================
// Process-wide Settings
// =============================================================================

static SETTINGS: OnceCell<Settings> = OnceCell::new();

/// Install the process-wide settings. Only the first call succeeds.
pub fn init(settings: Settings) -> ConfigResult<&'static Settings> {
    let mut installed = false;
    let current = SETTINGS.get_or_init(|| {
        installed = true;
        settings
    });

    if installed {
        Ok(current)
    } else {
        tracing::warn!("Ignoring repeated settings initialization");
        Err(ConfigError::AlreadyInitialized)
    }
}

/// The process-wide settings, if [`init`] has run.
pub fn get() -> Option<&'static Settings> {
    SETTINGS.get()
}
