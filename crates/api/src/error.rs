//! HTTP error responses
//!
//! Every failure leaves the API as a problem-style JSON body
//! `{ "title", "status", "detail" }`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use citynext_domain::CityNextError;
use serde_json::json;
use tracing::{debug, error, warn};

pub const INVALID_INPUT_DETAIL: &str = "Invalid input data";

/// Error returned by handlers
#[derive(Debug)]
pub enum ApiError {
    /// Failure raised by the booking workflow or storage
    Domain(CityNextError),
    /// Request body that is not valid JSON or does not match the schema
    MalformedBody(String),
}

impl From<CityNextError> for ApiError {
    fn from(value: CityNextError) -> Self {
        Self::Domain(value)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::MalformedBody(value.body_text())
    }
}

impl ApiError {
    /// Status code and client-facing detail.
    pub fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            Self::MalformedBody(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, INVALID_INPUT_DETAIL.to_string())
            }
            Self::Domain(err) => match err {
                CityNextError::Rejected(rejection) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, rejection.user_message().to_string())
                }
                CityNextError::InvalidInput(_) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, INVALID_INPUT_DETAIL.to_string())
                }
                CityNextError::NotFound(what) => (StatusCode::NOT_FOUND, what.clone()),
                other => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Internal server error: {other}"),
                ),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();

        match &self {
            Self::MalformedBody(reason) => warn!(%reason, "rejected malformed request body"),
            // already logged with year and country where the fetch failed
            Self::Domain(err @ CityNextError::HolidayLookup(_)) => {
                debug!(error = %err, label = err.label(), "request failed");
            }
            Self::Domain(err) if status.is_server_error() => {
                error!(error = %err, label = err.label(), "request failed");
            }
            Self::Domain(err) => warn!(error = %err, label = err.label(), "request rejected"),
        }

        let body = Json(json!({
            "title": status.canonical_reason().unwrap_or("Error"),
            "status": status.as_u16(),
            "detail": detail,
        }));

        (status, body).into_response()
    }
}
