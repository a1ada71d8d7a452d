//! Error types used throughout the application

use thiserror::Error;

use crate::types::Rejection;

/// Failure talking to the remote holiday source.
///
/// Timeouts, transport failures, non-success statuses and malformed payloads
/// all surface as this single type; the variant keeps the underlying cause
/// for logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    #[error("holiday request timed out: {0}")]
    Timeout(String),

    #[error("holiday source unreachable: {0}")]
    Connect(String),

    #[error("holiday source returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("failed to decode holiday payload: {0}")]
    Decode(String),

    #[error("holiday request failed: {0}")]
    Request(String),
}

/// Main error type for CityNext
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CityNextError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Holiday lookup failed: {0}")]
    HolidayLookup(#[from] RemoteError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Booking rejected: {0}")]
    Rejected(Rejection),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CityNextError {
    /// Stable label suitable for logging and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Database(_) => "database",
            Self::Config(_) => "config",
            Self::HolidayLookup(_) => "holiday_lookup",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Rejected(_) => "rejected",
            Self::Internal(_) => "internal",
        }
    }
}

impl From<Rejection> for CityNextError {
    fn from(value: Rejection) -> Self {
        Self::Rejected(value)
    }
}

/// Result type alias for CityNext operations
pub type Result<T> = std::result::Result<T, CityNextError>;
