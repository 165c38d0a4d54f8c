//! Web framework feature showcase.
//!
//! A small backend whose endpoints each demonstrate one framework
//! feature: routing, middleware, request-scoped context, validation,
//! chunked streaming, Server-Sent Events, CORS and centralized error
//! handling. Every handler is a thin pass-through to framework
//! primitives with presentation text layered on top.

// Core subsystems
pub mod config;
pub mod handlers;
pub mod http;

// Feature building blocks
pub mod emitters;
pub mod error;
pub mod validation;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ShowcaseConfig;
pub use error::{ShowcaseError, ShowcaseResult};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
