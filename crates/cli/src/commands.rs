//! Command implementations.

use std::path::Path;

use common::{ConfigResult, Settings};
use domain::API_CONFIG;
use serde::Serialize;

/// Resolve settings, reading `env_file` when given and `.env` otherwise.
pub fn load(env_file: Option<&Path>) -> ConfigResult<Settings> {
    match env_file {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading env file");
            Settings::from_env_file(path)
        }
        None => Settings::from_env(),
    }
}

/// Render resolved settings as JSON.
pub fn show(settings: &Settings, pretty: bool) -> ConfigResult<String> {
    render(settings, pretty)
}

/// Render the compile-time API defaults as JSON.
pub fn defaults(pretty: bool) -> ConfigResult<String> {
    render(&API_CONFIG, pretty)
}

fn render<T: Serialize + ?Sized>(value: &T, pretty: bool) -> ConfigResult<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}
