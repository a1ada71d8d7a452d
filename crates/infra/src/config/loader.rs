//! Configuration loader
//!
//! Builds the application [`Config`] from an optional file plus environment
//! overrides.
//!
//! ## Loading Strategy
//! 1. If `CITYNEXT_CONFIG` is set, load that file (it must exist)
//! 2. Otherwise probe the standard locations; use defaults if nothing is found
//! 3. Apply environment variable overrides on top
//!
//! ## Environment Variables
//! - `SERVER_HOST`, `SERVER_PORT`: HTTP listener
//! - `DB_PATH`, `DB_POOL_SIZE`: SQLite file and pool size
//! - `LOG_LEVEL`: `debug|info|warn|error` (unknown values fall back to `info`)
//! - `NAGER_API_BASE_URL`: holiday source base URL
//! - `HOLIDAY_COUNTRY_CODE`: ISO country code, default `GB`
//! - `HOLIDAY_TIMEOUT_SECS`: holiday fetch deadline in seconds
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.{toml,json}` and `./citynext.{toml,json}`
//! 2. The same names in the parent and grandparent directories
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use citynext_domain::{CityNextError, Config, LogLevel, Result};
use url::Url;

/// Names of the environment variables the loader reads.
pub mod env {
    pub const CONFIG_PATH: &str = "CITYNEXT_CONFIG";
    pub const SERVER_HOST: &str = "SERVER_HOST";
    pub const SERVER_PORT: &str = "SERVER_PORT";
    pub const DB_PATH: &str = "DB_PATH";
    pub const DB_POOL_SIZE: &str = "DB_POOL_SIZE";
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    pub const NAGER_API_BASE_URL: &str = "NAGER_API_BASE_URL";
    pub const HOLIDAY_COUNTRY_CODE: &str = "HOLIDAY_COUNTRY_CODE";
    pub const HOLIDAY_TIMEOUT_SECS: &str = "HOLIDAY_TIMEOUT_SECS";
}

const CONFIG_FILE_NAMES: [&str; 4] =
    ["config.toml", "config.json", "citynext.toml", "citynext.json"];

/// Load configuration: file (explicit or probed) or defaults, then
/// environment overrides.
///
/// # Errors
/// Returns `CityNextError::Config` if:
/// - `CITYNEXT_CONFIG` names a missing or unparsable file
/// - A probed file is unparsable
/// - An override has an invalid value
pub fn load() -> Result<Config> {
    let base = match std::env::var(env::CONFIG_PATH) {
        Ok(path) => load_from_file(Some(PathBuf::from(path)))?,
        Err(_) => match probe_config_paths() {
            Some(path) => load_from_file(Some(path))?,
            None => {
                tracing::debug!("No config file found, using defaults");
                Config::default()
            }
        },
    };

    apply_env_overrides(base)
}

/// Load configuration from defaults plus environment overrides only.
pub fn load_from_env() -> Result<Config> {
    apply_env_overrides(Config::default())
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Missing fields take their defaults.
///
/// # Errors
/// Returns `CityNextError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(CityNextError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            CityNextError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| CityNextError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| CityNextError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| CityNextError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(CityNextError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Apply environment overrides on top of `config`.
///
/// # Errors
/// Returns `CityNextError::Config` for unparsable numbers, an invalid
/// holiday base URL, or a zero holiday timeout (from any source).
pub fn apply_env_overrides(mut config: Config) -> Result<Config> {
    if let Some(host) = env_string(env::SERVER_HOST) {
        config.server.host = host;
    }
    if let Some(port) = env_parse::<u16>(env::SERVER_PORT)? {
        config.server.port = port;
    }
    if let Some(path) = env_string(env::DB_PATH) {
        config.database.path = path;
    }
    if let Some(pool_size) = env_parse::<u32>(env::DB_POOL_SIZE)? {
        config.database.pool_size = pool_size;
    }
    if let Some(level) = env_string(env::LOG_LEVEL) {
        config.log_level = LogLevel::parse_lenient(&level);
    }
    if let Some(base_url) = env_string(env::NAGER_API_BASE_URL) {
        Url::parse(&base_url).map_err(|e| {
            CityNextError::Config(format!("Invalid {}: {}", env::NAGER_API_BASE_URL, e))
        })?;
        config.holidays.base_url = base_url;
    }
    if let Some(country_code) = env_string(env::HOLIDAY_COUNTRY_CODE) {
        config.holidays.country_code = country_code.to_ascii_uppercase();
    }
    if let Some(timeout_secs) = env_parse::<u64>(env::HOLIDAY_TIMEOUT_SECS)? {
        config.holidays.timeout_secs = timeout_secs;
    }
    if config.holidays.timeout_secs == 0 {
        return Err(CityNextError::Config(format!(
            "{} must be at least 1 second",
            env::HOLIDAY_TIMEOUT_SECS
        )));
    }

    Ok(config)
}

/// Non-empty, trimmed value of an environment variable.
fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    env_string(key)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| CityNextError::Config(format!("Invalid {key} '{raw}': {e}")))
        })
        .transpose()
}
