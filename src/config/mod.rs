//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (port, origin, dev mode)
//!     → validation.rs (semantic checks)
//!     → ShowcaseConfig (validated, immutable)
//!     → shared via Arc to all subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults so the service runs with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::ShowcaseConfig;
pub use schema::{CorsConfig, ListenerConfig, ObservabilityConfig, StreamingConfig, TimeoutConfig};
