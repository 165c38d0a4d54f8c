//! Configuration loading from disk and environment.

use std::env;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ShowcaseConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_ENV: &str = "SHOWCASE_CONFIG";

/// Environment variable overriding the listener port.
pub const PORT_ENV: &str = "SHOWCASE_PORT";

/// Environment variable overriding the allowed browser origin.
pub const ORIGIN_ENV: &str = "SHOWCASE_ALLOWED_ORIGIN";

/// Environment variable overriding the dev-mode flag.
pub const DEV_MODE_ENV: &str = "SHOWCASE_DEV_MODE";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Environment override {var}='{value}' is not usable")]
    Override { var: &'static str, value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration: optional TOML file, then environment overrides,
/// then semantic validation.
pub fn load() -> Result<ShowcaseConfig, ConfigError> {
    let mut config = match env::var(CONFIG_PATH_ENV) {
        Ok(path) => from_file(Path::new(&path))?,
        Err(_) => ShowcaseConfig::default(),
    };

    apply_overrides(&mut config, |var| env::var(var).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and parse a configuration file without applying overrides.
pub fn from_file(path: &Path) -> Result<ShowcaseConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Apply environment-style overrides through an injected lookup, so the
/// override logic is testable without touching process state.
pub fn apply_overrides<F>(config: &mut ShowcaseConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup(PORT_ENV) {
        let port: u16 = port.parse().map_err(|_| ConfigError::Override {
            var: PORT_ENV,
            value: port.clone(),
        })?;
        config.listener.set_port(port);
    }

    if let Some(origin) = lookup(ORIGIN_ENV) {
        config.cors.allowed_origin = origin;
    }

    if let Some(dev_mode) = lookup(DEV_MODE_ENV) {
        config.dev_mode = match dev_mode.to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => {
                return Err(ConfigError::Override {
                    var: DEV_MODE_ENV,
                    value: dev_mode,
                })
            }
        };
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn no_overrides_leaves_defaults_alone() {
        let mut config = ShowcaseConfig::default();
        apply_overrides(&mut config, |_| None).expect("no overrides");
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
    }

    #[test]
    fn port_and_origin_overrides_apply() {
        let mut config = ShowcaseConfig::default();
        let lookup = lookup_from(&[
            (PORT_ENV, "4123"),
            (ORIGIN_ENV, "https://frontend.example.org"),
            (DEV_MODE_ENV, "true"),
        ]);

        apply_overrides(&mut config, lookup).expect("overrides");

        assert_eq!(config.listener.bind_address, "0.0.0.0:4123");
        assert_eq!(config.cors.allowed_origin, "https://frontend.example.org");
        assert!(config.dev_mode);
    }

    #[test]
    fn unparseable_port_is_an_error() {
        let mut config = ShowcaseConfig::default();
        let result = apply_overrides(&mut config, lookup_from(&[(PORT_ENV, "eighty")]));
        assert!(matches!(result, Err(ConfigError::Override { .. })));
    }

    #[test]
    fn unparseable_dev_mode_is_an_error() {
        let mut config = ShowcaseConfig::default();
        let result = apply_overrides(&mut config, lookup_from(&[(DEV_MODE_ENV, "maybe")]));
        assert!(matches!(result, Err(ConfigError::Override { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = from_file(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
