//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Holiday source
pub const DEFAULT_COUNTRY_CODE: &str = "GB";
pub const DEFAULT_NAGER_API_BASE_URL: &str = "https://date.nager.at/api/v3";
pub const HOLIDAY_FETCH_TIMEOUT_SECS: u64 = 10;

// Server
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 9119;

// Database
pub const DEFAULT_DB_PATH: &str = "citynext.db";
pub const DEFAULT_DB_POOL_SIZE: u32 = 4;

// Appointment input limits
pub const MAX_NAME_LENGTH: usize = 50;

/// Wire format for calendar dates (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";
