//! Layered configuration loading.
//!
//! Sources, lowest to highest priority:
//! 1. `default.toml` (optional; compiled-in defaults apply when absent)
//! 2. `{environment}.toml`
//! 3. `local.toml`
//! 4. `PORTAL_*` environment variables (`__` separates nested keys)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

const CONFIG_DIR_ENV: &str = "PORTAL_CONFIG_DIR";
const CONFIG_FILE_ENV: &str = "PORTAL_CONFIG_FILE";
const DEFAULT_CONFIG_DIR: &str = "config";
const ENV_PREFIX: &str = "PORTAL";
const ENV_SEPARATOR: &str = "__";

/// Loads `Settings` from layered files plus environment overrides.
#[derive(Debug)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    config_file: Option<PathBuf>,
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Build a loader from `PORTAL_CONFIG_DIR` / `PORTAL_CONFIG_FILE` /
    /// `PORTAL_APP_ENV`. The two path variables are mutually exclusive.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));

        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_file.is_some() && std::env::var(CONFIG_DIR_ENV).is_ok() {
            return Err(ConfigError::Env(
                "PORTAL_CONFIG_DIR and PORTAL_CONFIG_FILE cannot both be set. \
                 Use PORTAL_CONFIG_DIR for layered configuration or \
                 PORTAL_CONFIG_FILE for a single configuration file."
                    .to_string(),
            ));
        }

        Ok(Self {
            config_dir,
            config_file,
            environment: AppEnvironment::from_env(),
        })
    }

    /// Loader rooted at an explicit directory, bypassing the env variables.
    pub fn from_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            config_file: None,
            environment: AppEnvironment::from_env(),
        }
    }

    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Load, deserialize, and validate settings from all sources.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::Parse(format!("Failed to deserialize configuration: {e}"))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = if let Some(ref config_file) = self.config_file {
            if !config_file.exists() {
                return Err(ConfigError::FileNotFound {
                    path: config_file.display().to_string(),
                });
            }
            Self::add_file_source(builder, config_file, true)
        } else {
            self.build_layered_config(builder)
        };

        // Environment variables always win: PORTAL_BACKEND__ORDERS_BASE_URL
        // maps to backend.orders_base_url.
        let builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR),
        );

        builder.build().map_err(ConfigError::from)
    }

    fn build_layered_config(
        &self,
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> config::ConfigBuilder<config::builder::DefaultState> {
        // Every layer is optional; compiled-in defaults make an empty
        // directory a valid configuration.
        let builder = Self::add_file_source(builder, &self.config_dir.join("default.toml"), false);
        let builder = Self::add_file_source(
            builder,
            &self
                .config_dir
                .join(format!("{}.toml", self.environment.as_str())),
            false,
        );
        Self::add_file_source(builder, &self.config_dir.join("local.toml"), false)
    }

    fn add_file_source(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        path: &Path,
        required: bool,
    ) -> config::ConfigBuilder<config::builder::DefaultState> {
        builder.add_source(
            File::new(path.to_str().unwrap_or_default(), FileFormat::Toml).required(required),
        )
    }
}
