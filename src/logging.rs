//! Logging setup.
//!
//! `RUST_LOG` takes precedence over the configured level so a single run can
//! be traced without editing configuration.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

fn build_filter(log_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global tracing subscriber.
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init_logging(config: &LoggingConfig) {
    let filter = build_filter(&config.level);
    let subscriber = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_target(true)
                .with_file(true)
                .with_line_number(true);
            let _ = subscriber.with(fmt_layer).try_init();
        }
        LogFormat::Pretty => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_ansi(true)
                .with_target(false);
            let _ = subscriber.with(fmt_layer).try_init();
        }
    }

    tracing::debug!(
        log_level = %config.level,
        log_format = ?config.format,
        "Logging initialized"
    );
}
