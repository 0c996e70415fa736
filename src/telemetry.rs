//! Logging setup
//!
//! Installs a `tracing-subscriber` registry writing to stderr, so report output
//! on stdout stays machine-readable.
//!
//! Filter priority: `RUST_LOG` env var > `level` argument.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

pub fn init_telemetry_with_level(level: &str, json: bool) {
    let default_filter = format!("warn,coverage_judge={}", level);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
            .ok();
    }
}

pub fn init_telemetry(config: &LoggingConfig) {
    init_telemetry_with_level(&config.level, config.json);
}
