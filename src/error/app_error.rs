use thiserror::Error;

/// Application-wide error type covering every failure the portal can surface.
///
/// The taxonomy is deliberately small: transport-level failures (network or
/// non-2xx responses from a backend service), missing resources, client-side
/// validation failures, and configuration problems. Malformed list payloads
/// are NOT errors; the normalizer defaults them instead.
#[derive(Error, Debug)]
pub enum AppError {
    /// Network failure or non-2xx response from a backend service.
    #[error("Request to {service} service failed: {message}")]
    Transport {
        service: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Resource does not exist (definite HTTP 404, not a failed request).
    #[error("Resource not found: {entity}")]
    NotFound { entity: String },

    /// Validation error with field-specific details.
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Configuration error with key information.
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures.
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn transport(
        service: impl Into<String>,
        message: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        AppError::Transport {
            service: service.into(),
            message: message.into(),
            source,
        }
    }

    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Single human-readable message suitable for display in a view.
    ///
    /// Views show one line per failure; structured context stays in the logs.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Transport { service, .. } => {
                format!("Failed to fetch data from the {service} service")
            }
            AppError::NotFound { entity } => format!("{entity} not found"),
            AppError::Validation { field, reason } => format!("{field}: {reason}"),
            AppError::Configuration { key, .. } => format!("Configuration problem: {key}"),
            AppError::Internal { .. } => "Something went wrong".to_string(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let (field, reason) = errors
            .field_errors()
            .into_iter()
            .next()
            .map(|(field, kinds)| {
                let reason = kinds
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "invalid value".to_string());
                (field.to_string(), reason)
            })
            .unwrap_or_else(|| ("request".to_string(), "invalid value".to_string()));
        AppError::Validation { field, reason }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_user_message_names_the_service() {
        let err = AppError::transport("orders", "connection refused", None);
        assert_eq!(
            err.user_message(),
            "Failed to fetch data from the orders service"
        );
    }

    #[test]
    fn validation_user_message_contains_field_and_reason() {
        let err = AppError::validation("name", "must not be empty");
        assert_eq!(err.user_message(), "name: must not be empty");
    }

    #[test]
    fn anyhow_converts_to_internal() {
        let err: AppError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
