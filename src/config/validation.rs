//! Semantic configuration checks, separate from deserialization.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ShowcaseConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a valid socket address")]
    BindAddress(String),

    #[error("cors.allowed_origin '{0}' must be '*' or an http(s) origin")]
    Origin(String),

    #[error("streaming.{0} must be at least 1")]
    StreamCount(&'static str),

    #[error("observability.metrics_address '{0}' is not a valid socket address")]
    MetricsAddress(String),
}

/// Check a deserialized configuration for semantic problems.
///
/// All problems are collected rather than stopping at the first.
pub fn validate_config(config: &ShowcaseConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let origin = &config.cors.allowed_origin;
    let origin_ok = origin == "*"
        || ((origin.starts_with("http://") || origin.starts_with("https://"))
            && !origin.chars().any(char::is_whitespace));
    if !origin_ok {
        errors.push(ValidationError::Origin(origin.clone()));
    }

    if config.streaming.line_count == 0 {
        errors.push(ValidationError::StreamCount("line_count"));
    }
    if config.streaming.event_count == 0 {
        errors.push(ValidationError::StreamCount("event_count"));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
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

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ShowcaseConfig::default()).is_ok());
    }

    #[test]
    fn bad_bind_address_is_rejected() {
        let mut config = ShowcaseConfig::default();
        config.listener.bind_address = "not-an-address".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::BindAddress(_)));
    }

    #[test]
    fn wildcard_origin_is_accepted() {
        let mut config = ShowcaseConfig::default();
        config.cors.allowed_origin = "*".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn non_http_origin_is_rejected() {
        let mut config = ShowcaseConfig::default();
        config.cors.allowed_origin = "ftp://example.com".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::Origin(_)));
    }

    #[test]
    fn zero_stream_counts_are_collected_together() {
        let mut config = ShowcaseConfig::default();
        config.streaming.line_count = 0;
        config.streaming.event_count = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn metrics_address_only_checked_when_enabled() {
        let mut config = ShowcaseConfig::default();
        config.observability.metrics_address = "bogus".to_string();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::MetricsAddress(_)));
    }
}
