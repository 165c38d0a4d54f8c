//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Validate → Init logging/metrics → Bind → Serve
//!
//! Shutdown:
//!     SIGTERM/SIGINT → broadcast → serve loop drains and exits
//! ```

pub mod shutdown;

pub use shutdown::{wait_for_signal, Shutdown};
