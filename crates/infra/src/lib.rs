//! # CityNext Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - SQLite persistence (pooled via r2d2) and an in-memory repository
//! - The HTTP client and the Nager.Date holiday integration
//! - Configuration loading (files + environment overrides)
//!
//! ## Architecture
//! - Implements traits defined in `citynext-core`
//! - Contains all "impure" code (network and disk I/O)

pub mod config;
pub mod database;
pub mod errors;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use database::*;
pub use errors::InfraError;
pub use http::*;
pub use integrations::nager::NagerHolidayClient;
