//! Appointment records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::date::CalendarDate;

/// A booked appointment. At most one exists per visit date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub visit_date: CalendarDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Appointment data before it has been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub first_name: String,
    pub last_name: String,
    pub visit_date: CalendarDate,
}

impl NewAppointment {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        visit_date: CalendarDate,
    ) -> Self {
        Self { first_name: first_name.into(), last_name: last_name.into(), visit_date }
    }

    /// Attach storage-assigned fields.
    pub fn into_appointment(self, id: i64, now: DateTime<Utc>) -> Appointment {
        Appointment {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            visit_date: self.visit_date,
            created_at: now,
            updated_at: now,
        }
    }
}
