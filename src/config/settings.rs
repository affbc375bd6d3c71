//! Configuration settings for the admin portal.
//!
//! Every section is optional in the TOML sources; defaults point at the
//! local development instances of the three backend services.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::LoggerConfig;

fn default_app_name() -> String {
    "portal-rs".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_orders_base_url() -> String {
    "http://localhost:8080/api/admin/v1".to_string()
}

fn default_payments_base_url() -> String {
    "http://localhost:8081/api/admin/v1".to_string()
}

fn default_campaigns_base_url() -> String {
    "http://localhost:8082/api/admin/v1".to_string()
}

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    #[serde(default = "default_app_name")]
    pub name: String,

    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

/// Base URLs of the backend admin APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_orders_base_url")]
    pub orders_base_url: String,

    #[serde(default = "default_payments_base_url")]
    pub payments_base_url: String,

    #[serde(default = "default_campaigns_base_url")]
    pub campaigns_base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            orders_base_url: default_orders_base_url(),
            payments_base_url: default_payments_base_url(),
            campaigns_base_url: default_campaigns_base_url(),
        }
    }
}

/// Root settings structure loaded by `ConfigLoader`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub application: ApplicationConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub logger: LoggerConfig,
}

impl Settings {
    /// Sanity checks that cannot be expressed in the type system.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, url) in [
            ("backend.orders_base_url", &self.backend.orders_base_url),
            ("backend.payments_base_url", &self.backend.payments_base_url),
            (
                "backend.campaigns_base_url",
                &self.backend.campaigns_base_url,
            ),
        ] {
            if url.is_empty() {
                return Err(ConfigError::invalid(key, "must not be empty"));
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::invalid(key, "must be an http(s) URL"));
            }
            if url.ends_with('/') {
                return Err(ConfigError::invalid(
                    key,
                    "must not end with a trailing slash",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_services() {
        let settings = Settings::default();
        assert_eq!(
            settings.backend.orders_base_url,
            "http://localhost:8080/api/admin/v1"
        );
        assert_eq!(
            settings.backend.payments_base_url,
            "http://localhost:8081/api/admin/v1"
        );
        assert_eq!(
            settings.backend.campaigns_base_url,
            "http://localhost:8082/api/admin/v1"
        );
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn trailing_slash_is_rejected() {
        let mut settings = Settings::default();
        settings.backend.orders_base_url = "http://localhost:8080/".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn non_http_url_is_rejected() {
        let mut settings = Settings::default();
        settings.backend.campaigns_base_url = "localhost:8082".to_string();
        assert!(settings.validate().is_err());
    }
}
