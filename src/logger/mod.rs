//! Logging setup on top of `tracing-subscriber`.
//!
//! The portal logs to the console only; fetch failures, dropped rows, and
//! stale-response drops all flow through this channel.

mod config;

pub use config::{LogFormat, LoggerConfig};

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global logger from configuration.
///
/// Errors if a global subscriber is already installed.
pub fn init_logger(config: &LoggerConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let use_ansi = config.colored && std::io::stdout().is_terminal();

    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Full => registry
            .with(fmt::layer().with_ansi(use_ansi).with_target(true))
            .try_init()?,
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_ansi(use_ansi).with_target(true))
            .try_init()?,
        LogFormat::Json => registry.with(fmt::layer().json()).try_init()?,
    }

    Ok(())
}
