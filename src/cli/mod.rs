//! Command-line interface for the admin portal.
//!
//! - `parser` - clap argument definitions
//! - `executor` - command dispatch against the portal state
//! - `render` - plain-text tables and pagination footers

pub mod executor;
pub mod parser;
pub mod render;

pub use executor::execute_command;
pub use parser::{CampaignCommands, Cli, Commands};

use crate::config::Settings;
use crate::logger::LoggerConfig;

/// Logger configuration with the `--verbose`/`--quiet` flags applied.
pub fn logger_config(cli: &Cli, settings: &Settings) -> LoggerConfig {
    let mut config = settings.logger.clone();
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if cli.quiet {
        config.level = "error".to_string();
    }
    config
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn verbose_overrides_configured_level() {
        let cli = Cli::try_parse_from(["portal-rs", "-v", "orders"]).unwrap();
        let config = logger_config(&cli, &Settings::default());
        assert_eq!(config.level, "debug");
    }

    #[test]
    fn quiet_overrides_configured_level() {
        let cli = Cli::try_parse_from(["portal-rs", "-q", "orders"]).unwrap();
        let config = logger_config(&cli, &Settings::default());
        assert_eq!(config.level, "error");
    }
}
