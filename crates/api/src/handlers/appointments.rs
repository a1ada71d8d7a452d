//! Appointment endpoints

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use citynext_domain::{Appointment, CalendarDate, CityNextError, NewAppointment};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::AppContext;

/// `createdAt` wire format (UTC, second precision)
const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Body of `POST /appointments`
///
/// Names default to empty so a missing name is reported by the booking
/// workflow as invalid input rather than as a schema error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub visit_date: CalendarDate,
}

impl From<CreateAppointmentRequest> for NewAppointment {
    fn from(request: CreateAppointmentRequest) -> Self {
        NewAppointment::new(request.first_name, request.last_name, request.visit_date)
    }
}

/// Appointment as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub visit_date: CalendarDate,
    pub created_at: String,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id,
            first_name: appointment.first_name,
            last_name: appointment.last_name,
            visit_date: appointment.visit_date,
            created_at: appointment.created_at.format(CREATED_AT_FORMAT).to_string(),
        }
    }
}

/// `POST /appointments`
pub async fn create_appointment(
    State(ctx): State<Arc<AppContext>>,
    payload: Result<Json<CreateAppointmentRequest>, JsonRejection>,
) -> Result<Json<AppointmentResponse>, ApiError> {
    let Json(request) = payload?;
    info!(visit_date = %request.visit_date, "received appointment creation request");

    let appointment = ctx.booking.create_appointment(request.into()).await?;
    Ok(Json(appointment.into()))
}

/// `GET /appointments/{date}`
pub async fn get_appointment(
    State(ctx): State<Arc<AppContext>>,
    Path(date): Path<String>,
) -> Result<Json<AppointmentResponse>, ApiError> {
    let date = CalendarDate::parse(&date)?;

    match ctx.booking.find_by_date(date).await? {
        Some(appointment) => Ok(Json(appointment.into())),
        None => Err(CityNextError::NotFound(format!("No appointment on {date}")).into()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn created_at_is_second_precision_utc() {
        let created_at = Utc.with_ymd_and_hms(2025, 6, 2, 9, 30, 5).unwrap();
        let appointment = NewAppointment::new(
            "Ada",
            "Lovelace",
            CalendarDate::parse("2025-06-09").unwrap(),
        )
        .into_appointment(3, created_at);

        let json = serde_json::to_value(AppointmentResponse::from(appointment)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "firstName": "Ada",
                "lastName": "Lovelace",
                "visitDate": "2025-06-09",
                "createdAt": "2025-06-02T09:30:05Z"
            })
        );
    }

    #[test]
    fn request_without_names_still_decodes() {
        let request: CreateAppointmentRequest =
            serde_json::from_str(r#"{ "visitDate": "2025-06-09" }"#).unwrap();
        assert!(request.first_name.is_empty());
        assert!(request.last_name.is_empty());
    }

    #[test]
    fn request_with_bad_date_is_rejected() {
        let result = serde_json::from_str::<CreateAppointmentRequest>(
            r#"{ "firstName": "A", "lastName": "B", "visitDate": "09/06/2025" }"#,
        );
        assert!(result.is_err());
    }
}
