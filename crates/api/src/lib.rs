//! # CityNext API
//!
//! HTTP application layer - routes, handlers and the entry point wiring.
//!
//! This crate contains:
//! - Axum routes and handlers for booking appointments
//! - Application context (dependency injection)
//! - Logging setup for the `citynext` binary
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod context;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod utils;

// Re-export for convenience
pub use context::*;
pub use error::ApiError;
pub use routes::create_router;
