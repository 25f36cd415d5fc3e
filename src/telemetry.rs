//! Tracing subscriber setup.
//!
//! Call [`init`] once at startup. Later calls, or calls after another
//! subscriber was installed, are no-ops.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::TelemetryConfig;

static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Builds the filter: `RUST_LOG` when set and valid, else the configured level.
fn env_filter(config: &TelemetryConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber.
///
/// Returns true if this call installed it.
pub fn init(config: &TelemetryConfig) -> bool {
    let mut installed_now = false;
    INSTALLED.get_or_init(|| {
        let filter = env_filter(config);
        let result = if config.json {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_current_span(false))
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(true))
                .try_init()
        };
        installed_now = result.is_ok();
        installed_now
    });

    if installed_now {
        tracing::debug!(log_level = %config.log_level, json = config.json, "Telemetry initialized");
    }
    installed_now
}
