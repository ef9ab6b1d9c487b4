//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive: `debug` when verbose, else `RUST_LOG`, else `info`.
pub fn filter_directive(verbose: bool, rust_log: Option<String>) -> String {
    if verbose {
        "debug".to_string()
    } else {
        rust_log.unwrap_or_else(|| "info".to_string())
    }
}

/// Initialize the global tracing subscriber.
///
/// # Panics
/// Panics if a global subscriber was already installed.
pub fn init_tracing(verbose: bool) {
    let filter = filter_directive(verbose, std::env::var("RUST_LOG").ok());

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new(filter))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_wins() {
        assert_eq!(filter_directive(true, Some("warn".into())), "debug");
    }

    #[test]
    fn test_rust_log_used() {
        assert_eq!(filter_directive(false, Some("common=trace".into())), "common=trace");
    }

    #[test]
    fn test_default_info() {
        assert_eq!(filter_directive(false, None), "info");
    }
}
