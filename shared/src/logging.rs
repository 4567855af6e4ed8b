//! Shared logging utilities for consistent tracing across the workspace

use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Crates whose events pass the level filter
const TRACED_CRATES: &[&str] = &["pairing", "shared"];

/// Build the `EnvFilter` directive string for a base level
pub fn filter_directives(log_level: &str) -> String {
    TRACED_CRATES
        .iter()
        .map(|name| format!("{name}={log_level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the stdout tracing subscriber with the given base level
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_tracing(log_level: Option<&str>) {
    use tracing_subscriber::{fmt, EnvFilter};

    let base_level = log_level.unwrap_or("info");
    let env_filter = EnvFilter::new(filter_directives(base_level));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for group-aware info logging
#[macro_export]
macro_rules! group_info {
    ($group:expr, $($arg:tt)*) => {
        tracing::info!(
            group = %$group,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for group-aware warning logging
#[macro_export]
macro_rules! group_warn {
    ($group:expr, $($arg:tt)*) => {
        tracing::warn!(
            group = %$group,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for group-aware error logging
#[macro_export]
macro_rules! group_error {
    ($group:expr, $($arg:tt)*) => {
        tracing::error!(
            group = %$group,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for group-aware debug logging
#[macro_export]
macro_rules! group_debug {
    ($group:expr, $($arg:tt)*) => {
        tracing::debug!(
            group = %$group,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(details: &str) {
    info!(timestamp = format_timestamp(), "🚀 Starting {}", details);
}

/// Contextual logging helper for error conditions
pub fn log_error(context: &str, error: &dyn std::fmt::Display) {
    error!(
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives() {
        assert_eq!(filter_directives("debug"), "pairing=debug,shared=debug");
    }

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing(Some("warn"));
        init_tracing(None);
    }
}
