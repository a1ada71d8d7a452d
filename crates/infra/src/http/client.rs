use std::time::Duration;

use citynext_domain::constants::HOLIDAY_FETCH_TIMEOUT_SECS;
use citynext_domain::{CityNextError, RemoteError};
use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::errors::conversions::IntoRemoteError;
use crate::errors::InfraError;

const USER_AGENT: &str = concat!("citynext/", env!("CARGO_PKG_VERSION"));

/// HTTP client with a per-request deadline.
///
/// Requests are attempted exactly once. Callers decide what a failure means;
/// the holiday lookup surfaces it rather than retrying.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: ReqwestClient,
    timeout: Duration,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, CityNextError> {
        Self::builder().build()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET `url` and decode a JSON body.
    ///
    /// Non-2xx statuses become [`RemoteError::Status`] and bodies that do not
    /// decode into `T` become [`RemoteError::Decode`].
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, RemoteError> {
        let url = Url::parse(url)
            .map_err(|err| RemoteError::Request(format!("invalid URL {url}: {err}")))?;
        debug!(%url, "sending HTTP request");

        let response = self.client.get(url.clone()).send().await.map_err(|err| {
            debug!(%url, error = %err, "HTTP request failed");
            err.into_remote()
        })?;

        let status = response.status();
        debug!(%url, %status, "received HTTP response");

        if !status.is_success() {
            return Err(RemoteError::Status { status: status.as_u16(), url: url.to_string() });
        }

        let body = response.bytes().await.map_err(IntoRemoteError::into_remote)?;
        serde_json::from_slice(&body).map_err(|err| RemoteError::Decode(err.to_string()))
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self { timeout: Duration::from_secs(HOLIDAY_FETCH_TIMEOUT_SECS) }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<HttpClient, CityNextError> {
        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .no_proxy()
            .build()
            .map_err(|err| {
                let infra: InfraError = err.into();
                CityNextError::from(infra)
            })?;

        Ok(HttpClient { client, timeout: self.timeout })
    }
}
