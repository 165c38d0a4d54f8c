//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! showcase service. All types derive Serde traits for deserialization
//! from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the showcase service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Cross-origin settings for the browser demo client.
    pub cors: CorsConfig,

    /// Cadence of the streaming and SSE showcases.
    pub streaming: StreamingConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Echoed by the health endpoint; loosens nothing else.
    pub dev_mode: bool,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl ListenerConfig {
    /// Replace the port part of the bind address, keeping the host.
    pub fn set_port(&mut self, port: u16) {
        let host = self
            .bind_address
            .rsplit_once(':')
            .map(|(host, _)| host)
            .unwrap_or("0.0.0.0");
        self.bind_address = format!("{host}:{port}");
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Cross-origin settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Browser origin allowed to call the API, or "*" for any.
    pub allowed_origin: String,

    /// How long browsers may cache a preflight answer, in seconds.
    pub max_age_secs: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "http://localhost:5173".to_string(),
            max_age_secs: 3600,
        }
    }
}

/// Cadence of the streaming showcases.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StreamingConfig {
    /// Number of plain-text lines emitted by the chunked demo.
    pub line_count: u32,

    /// Pause between consecutive lines, in milliseconds.
    pub line_interval_ms: u64,

    /// Number of numbered events emitted by the SSE demo.
    pub event_count: u32,

    /// Pause between consecutive events, in milliseconds.
    pub event_interval_ms: u64,
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            line_count: 5,
            line_interval_ms: 350,
            event_count: 6,
            event_interval_ms: 500,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time until response headers) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus scrape endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_demo_cadence() {
        let config = ShowcaseConfig::default();
        assert_eq!(config.streaming.line_count, 5);
        assert_eq!(config.streaming.line_interval_ms, 350);
        assert_eq!(config.streaming.event_count, 6);
        assert_eq!(config.streaming.event_interval_ms, 500);
        assert!(!config.dev_mode);
    }

    #[test]
    fn set_port_keeps_the_host() {
        let mut listener = ListenerConfig {
            bind_address: "127.0.0.1:3000".to_string(),
        };
        listener.set_port(4000);
        assert_eq!(listener.bind_address, "127.0.0.1:4000");
    }

    #[test]
    fn minimal_toml_fills_in_defaults() {
        let config: ShowcaseConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:8088"

            [cors]
            allowed_origin = "https://demo.example.org"
            "#,
        )
        .expect("minimal config should parse");

        assert_eq!(config.listener.bind_address, "127.0.0.1:8088");
        assert_eq!(config.cors.allowed_origin, "https://demo.example.org");
        assert_eq!(config.streaming.event_count, 6);
        assert_eq!(config.timeouts.request_secs, 30);
    }
}
