//! Model registry validation.
//!
//! A model without a table name passes: that failure is reported by the first
//! query against it, not at load time.

use crate::config::ModelRegistry;
use crate::error::ConfigError;

pub fn validate(registry: &ModelRegistry) -> Result<(), ConfigError> {
    for (name, cfg) in registry.configs() {
        if name.trim().is_empty() {
            return Err(ConfigError::InvalidModel {
                model: name.to_string(),
                message: "model name must not be empty".into(),
            });
        }
        if cfg.primary_key.trim().is_empty() {
            return Err(ConfigError::InvalidModel {
                model: name.to_string(),
                message: "primary_key must not be empty".into(),
            });
        }
        if cfg.protected.iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::InvalidModel {
                model: name.to_string(),
                message: "protected column names must not be empty".into(),
            });
        }
        if cfg.timestamp_columns.iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::InvalidModel {
                model: name.to_string(),
                message: "timestamp column names must not be empty".into(),
            });
        }
    }
    Ok(())
}
