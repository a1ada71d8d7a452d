//! Application configuration structures
//!
//! Loading (files, environment overrides) lives in `citynext-infra`; this
//! module only defines the shape and the defaults.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COUNTRY_CODE, DEFAULT_DB_PATH, DEFAULT_DB_POOL_SIZE, DEFAULT_NAGER_API_BASE_URL,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, HOLIDAY_FETCH_TIMEOUT_SECS,
};
use crate::impl_domain_label_conversions;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub holidays: HolidayApiConfig,
    pub log_level: LogLevel,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_SERVER_HOST.to_string(), port: DEFAULT_SERVER_PORT }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding a listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// SQLite settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
    pub pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: DEFAULT_DB_PATH.to_string(), pool_size: DEFAULT_DB_POOL_SIZE }
    }
}

/// Remote holiday source settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HolidayApiConfig {
    pub base_url: String,
    pub country_code: String,
    pub timeout_secs: u64,
}

impl Default for HolidayApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_NAGER_API_BASE_URL.to_string(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            timeout_secs: HOLIDAY_FETCH_TIMEOUT_SECS,
        }
    }
}

/// Minimum log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl_domain_label_conversions!(LogLevel {
    Debug => "debug",
    Info => "info",
    Warn => "warn",
    Error => "error",
});

impl LogLevel {
    /// Parse a level, falling back to `Info` for anything unrecognised.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}
