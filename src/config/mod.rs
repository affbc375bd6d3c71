//! Configuration management for the admin portal.
//!
//! Layered loading with support for:
//! - TOML configuration files (`default.toml`, `{environment}.toml`,
//!   `local.toml`)
//! - `PORTAL_*` environment variable overrides
//! - Multiple environments (development, test, staging, production)

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{ApplicationConfig, BackendConfig, Settings};
