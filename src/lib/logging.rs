//! Tracing setup for the client. Events go to the browser console on wasm and
//! to stderr on the host. Call sites must not log passwords, verification
//! codes or request bodies.

use crate::app_lib::config::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. A second call is a no-op.
pub fn init(directives: &str) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter_from(directives))
        .with_ansi(false)
        .without_time()
        .with_target(true);

    #[cfg(target_arch = "wasm32")]
    let result = builder
        .with_writer(tracing_web::MakeWebConsoleWriter::new())
        .try_init();
    #[cfg(not(target_arch = "wasm32"))]
    let result = builder.with_writer(std::io::stderr).try_init();

    if result.is_ok() {
        tracing::debug!(filter = directives, "logging initialized");
    }
}

/// Builds the filter, falling back to the default when the directives do not parse.
fn filter_from(directives: &str) -> EnvFilter {
    EnvFilter::try_new(normalize_directives(directives))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn normalize_directives(directives: &str) -> &str {
    let trimmed = directives.trim();
    if trimmed.is_empty() {
        DEFAULT_LOG_FILTER
    } else {
        trimmed
    }
}
