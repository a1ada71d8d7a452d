//! # CityNext Domain
//!
//! Business domain types for the CityNext appointment service.
//!
//! This crate contains:
//! - Calendar dates, holidays and appointments
//! - Validation outcomes and rejection reasons
//! - Domain error types and Result definitions
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other CityNext crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
