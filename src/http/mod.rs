//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → context.rs (annotator pre-phase: id + start time)
//!     → showcase handler
//!     → context.rs (annotator post-phase: headers + metrics)
//!     → Send to client
//! ```

pub mod context;
pub mod server;

pub use context::{RequestContext, X_ELAPSED_MS, X_REQUEST_ID};
pub use server::HttpServer;
