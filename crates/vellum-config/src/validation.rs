//! Configuration validation module.
//!
//! Validates configuration values at load time, collecting every problem
//! instead of stopping at the first one.

use crate::{AppConfig, ServerConfig};
use thiserror::Error;
use url::Url;
use vellum_core::telemetry::TelemetryConfig;

/// Configuration validation error variants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Port number is invalid (must be 1-65535).
    #[error("Invalid port for {name}: {value} (must be 1-65535)")]
    InvalidPort { name: String, value: u16 },

    /// Timeout value must be positive.
    #[error("Timeout '{name}' must be positive, got {value}")]
    NonPositiveTimeout { name: String, value: u64 },

    /// CORS origin is neither `*` nor a valid URL.
    #[error("Invalid CORS origin: '{origin}'")]
    InvalidCorsOrigin { origin: String },

    /// A required string value is empty.
    #[error("Configuration value '{name}' cannot be empty")]
    Empty { name: String },
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_server(&config.server, &mut errors);
        Self::validate_observability(&config.observability, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(config: &ServerConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.port == 0 {
            errors.push(ConfigValidationError::InvalidPort {
                name: "server.port".to_string(),
                value: config.port,
            });
        }

        if config.request_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "server.request_timeout_secs".to_string(),
                value: 0,
            });
        }

        if config.cors_enabled {
            for origin in config.cors_origins.iter().filter(|o| o.as_str() != "*") {
                if Url::parse(origin).is_err() {
                    errors.push(ConfigValidationError::InvalidCorsOrigin {
                        origin: origin.clone(),
                    });
                }
            }
        }
    }

    fn validate_observability(config: &TelemetryConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.service_name.trim().is_empty() {
            errors.push(ConfigValidationError::Empty {
                name: "observability.service_name".to_string(),
            });
        }
    }
}
