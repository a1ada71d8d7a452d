//! Conversions from external infrastructure errors into domain errors.

use citynext_domain::{CityNextError, Rejection, RemoteError};
use reqwest::Error as HttpError;
use rusqlite::Error as SqlError;
use thiserror::Error;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct InfraError(pub CityNextError);

impl From<InfraError> for CityNextError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<CityNextError> for InfraError {
    fn from(value: CityNextError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoCityNextError {
    fn into_citynext(self) -> CityNextError;
}

/// Classify a transport failure for the holiday lookup port.
pub(crate) trait IntoRemoteError {
    fn into_remote(self) -> RemoteError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → CityNextError */
/* -------------------------------------------------------------------------- */

/// `SQLITE_CONSTRAINT_UNIQUE`
const UNIQUE_VIOLATION: i32 = 2067;

impl IntoCityNextError for SqlError {
    fn into_citynext(self) -> CityNextError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        CityNextError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        CityNextError::Database("database is locked".into())
                    }
                    // visit_date is the only unique column
                    (ErrorCode::ConstraintViolation, UNIQUE_VIOLATION) => {
                        CityNextError::Rejected(Rejection::DuplicateDate)
                    }
                    _ => CityNextError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => CityNextError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                CityNextError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, name, ty) => {
                CityNextError::Database(format!("invalid column type for {name}: {ty}"))
            }
            RE::InvalidPath(path) => CityNextError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => CityNextError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_citynext())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → CityNextError */
/* -------------------------------------------------------------------------- */

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(CityNextError::Database(format!("connection pool error: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → RemoteError */
/* -------------------------------------------------------------------------- */

impl IntoRemoteError for HttpError {
    fn into_remote(self) -> RemoteError {
        if self.is_timeout() {
            return RemoteError::Timeout(self.to_string());
        }

        if self.is_connect() {
            return RemoteError::Connect(self.to_string());
        }

        if self.is_decode() {
            return RemoteError::Decode(self.to_string());
        }

        if let Some(status) = self.status() {
            let url = self.url().map(ToString::to_string).unwrap_or_default();
            return RemoteError::Status { status: status.as_u16(), url };
        }

        RemoteError::Request(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(CityNextError::HolidayLookup(value.into_remote()))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
