//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: WatchConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::WatchConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("source.path must not be empty")]
    EmptySourcePath,

    #[error("timeouts.{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("timeouts.connect_secs ({connect}) exceeds timeouts.request_secs ({request})")]
    ConnectExceedsRequest { connect: u64, request: u64 },

    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}

/// Check a configuration for semantic errors.
pub fn validate_config(config: &WatchConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.source.path.as_os_str().is_empty() {
        errors.push(ValidationError::EmptySourcePath);
    }

    let timeouts = &config.timeouts;
    if timeouts.connect_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("connect_secs"));
    }
    if timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("request_secs"));
    }
    if timeouts.connect_secs > timeouts.request_secs {
        errors.push(ValidationError::ConnectExceedsRequest {
            connect: timeouts.connect_secs,
            request: timeouts.request_secs,
        });
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&WatchConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = WatchConfig::default();
        config.source.path = PathBuf::new();
        config.timeouts.connect_secs = 0;
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptySourcePath,
                ValidationError::ZeroTimeout("connect_secs"),
                ValidationError::UnknownLogLevel("loud".into()),
            ]
        );
    }

    #[test]
    fn test_connect_longer_than_request() {
        let mut config = WatchConfig::default();
        config.timeouts.connect_secs = 60;
        config.timeouts.request_secs = 5;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::ConnectExceedsRequest { connect: 60, request: 5 }]
        );
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let mut config = WatchConfig::default();
        config.observability.log_level = "DEBUG".into();
        assert!(validate_config(&config).is_ok());
    }
}
