use serde::{Deserialize, Serialize};

/// Output format for console log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Default human-readable format
    #[default]
    Full,
    /// Compact single-line format
    Compact,
    /// Structured JSON, for log shippers
    Json,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

/// Logger configuration, loaded as the `[logger]` settings section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Level filter, an `EnvFilter` directive string ("info",
    /// "portal_rs=debug", ...)
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,

    /// ANSI colors (only applied when stdout is a terminal)
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
            colored: true,
        }
    }
}
