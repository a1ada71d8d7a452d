//! Nager.Date client implementing the holiday lookup port

use std::time::Duration;

use async_trait::async_trait;
use citynext_core::HolidayLookup;
use citynext_domain::{CityNextError, Holiday, HolidayApiConfig, RemoteError, Result};
use tracing::{debug, info};
use url::Url;

use super::types::NagerHoliday;
use crate::http::HttpClient;

/// Fetches one year of public holidays per call. No retries and no caching;
/// the date validator owns the cache.
#[derive(Debug, Clone)]
pub struct NagerHolidayClient {
    base_url: String,
    http_client: HttpClient,
}

impl NagerHolidayClient {
    /// Create a client for `base_url` with the given request timeout.
    ///
    /// A trailing slash on `base_url` is ignored.
    ///
    /// # Errors
    /// Returns `CityNextError::Config` if `base_url` is not an absolute URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Self::with_http_client(base_url, http_client)
    }

    /// Build from the `[holidays]` configuration section.
    ///
    /// # Errors
    /// Returns `CityNextError::Config` for a zero timeout or an invalid base URL.
    pub fn from_config(config: &HolidayApiConfig) -> Result<Self> {
        if config.timeout_secs == 0 {
            return Err(CityNextError::Config(
                "holiday API timeout must be at least 1 second".into(),
            ));
        }
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    /// Use a pre-configured HTTP client.
    pub fn with_http_client(base_url: &str, http_client: HttpClient) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|err| {
            CityNextError::Config(format!("invalid holiday API base URL '{base_url}': {err}"))
        })?;

        Ok(Self { base_url, http_client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/PublicHolidays/{year}/{countryCode}`
    pub fn holidays_url(&self, year: i32, country_code: &str) -> String {
        format!("{}/PublicHolidays/{}/{}", self.base_url, year, country_code)
    }
}

#[async_trait]
impl HolidayLookup for NagerHolidayClient {
    async fn fetch_holidays(
        &self,
        year: i32,
        country_code: &str,
    ) -> std::result::Result<Vec<Holiday>, RemoteError> {
        let url = self.holidays_url(year, country_code);
        debug!(year, country_code, %url, "fetching public holidays");

        let payload: Vec<NagerHoliday> = self.http_client.get_json(&url).await?;
        let holidays = payload
            .into_iter()
            .map(Holiday::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        info!(year, country_code, count = holidays.len(), "fetched public holidays");
        Ok(holidays)
    }
}
