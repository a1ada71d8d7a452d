//! Appointment repository implementation using SQLite
//!
//! One appointment per visit date is enforced by the `UNIQUE` constraint on
//! `appointments.visit_date`; a violating insert surfaces as
//! `Rejected(DuplicateDate)`.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use citynext_core::AppointmentRepository;
use citynext_domain::{
    Appointment, CalendarDate, CityNextError, NewAppointment, Result as DomainResult,
};
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, Row};
use tokio::task;
use tracing::debug;

use super::manager::{map_sql_error, DbManager};

/// SQLite-backed implementation of `AppointmentRepository`
pub struct SqliteAppointmentRepository {
    db: Arc<DbManager>,
}

impl SqliteAppointmentRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AppointmentRepository for SqliteAppointmentRepository {
    async fn create(&self, appointment: NewAppointment) -> DomainResult<Appointment> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Appointment> {
            let conn = db.get_connection()?;
            let now = Utc::now().trunc_subsecs(0);

            conn.execute(
                "INSERT INTO appointments (first_name, last_name, visit_date, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?4)",
                params![
                    appointment.first_name,
                    appointment.last_name,
                    appointment.visit_date.to_string(),
                    now.timestamp(),
                ],
            )
            .map_err(map_sql_error)?;

            let id = conn.last_insert_rowid();
            debug!(id, visit_date = %appointment.visit_date, "inserted appointment row");
            Ok(appointment.into_appointment(id, now))
        })
        .await
        .map_err(map_join_error)?
    }

    async fn get_by_date(&self, date: CalendarDate) -> DomainResult<Option<Appointment>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Option<Appointment>> {
            let conn = db.get_connection()?;

            conn.query_row(
                "SELECT id, first_name, last_name, visit_date, created_at, updated_at
                 FROM appointments WHERE visit_date = ?1",
                params![date.to_string()],
                map_appointment_row,
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn exists_for_date(&self, date: CalendarDate) -> DomainResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<bool> {
            let conn = db.get_connection()?;

            conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM appointments WHERE visit_date = ?1)",
                params![date.to_string()],
                |row| row.get::<_, bool>(0),
            )
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }
}

fn map_appointment_row(row: &Row<'_>) -> rusqlite::Result<Appointment> {
    let visit_date: String = row.get(3)?;
    let visit_date = CalendarDate::parse(&visit_date)
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(err)))?;

    Ok(Appointment {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        visit_date,
        created_at: timestamp_column(row, 4)?,
        updated_at: timestamp_column(row, 5)?,
    })
}

fn timestamp_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let secs: i64 = row.get(idx)?;
    DateTime::from_timestamp(secs, 0).ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, secs))
}

fn map_join_error(err: task::JoinError) -> CityNextError {
    CityNextError::Internal(format!("Task join error: {err}"))
}
