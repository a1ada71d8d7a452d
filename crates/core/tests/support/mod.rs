//! Shared test helpers for `citynext-core` integration tests.
//!
//! Lightweight mocks for the core ports so the validator and booking tests
//! can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use citynext_core::{AppointmentRepository, DateValidation, HolidayLookup};
use citynext_domain::{
    Appointment, CalendarDate, CityNextError, Holiday, NewAppointment, Rejection, RemoteError,
    Result as DomainResult, ValidationOutcome,
};
use parking_lot::Mutex;
use tokio::sync::Notify;

pub fn date(s: &str) -> CalendarDate {
    CalendarDate::parse(s).expect("test date should parse")
}

pub fn holiday(s: &str, name: &str) -> Holiday {
    Holiday::new(date(s), name, "GB")
}

/// Scripted `HolidayLookup` that counts every fetch.
///
/// Years without a scripted response return an empty holiday list.
#[derive(Default)]
pub struct MockHolidayLookup {
    responses: Mutex<HashMap<i32, Result<Vec<Holiday>, RemoteError>>>,
    calls: Mutex<Vec<(i32, String)>>,
    fetch_count: AtomicUsize,
    delay: Option<Duration>,
    gates: Mutex<HashMap<i32, Arc<Notify>>>,
    fetch_started: Notify,
}

impl MockHolidayLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_holidays(self, year: i32, holidays: Vec<Holiday>) -> Self {
        self.responses.lock().insert(year, Ok(holidays));
        self
    }

    pub fn with_failure(self, year: i32, error: RemoteError) -> Self {
        self.responses.lock().insert(year, Err(error));
        self
    }

    /// Hold every fetch for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Hold fetches for `year` until the returned gate is notified.
    pub fn gate_year(&self, year: i32) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates.lock().insert(year, Arc::clone(&gate));
        gate
    }

    /// Resolve once a fetch has started (immediately if one already has).
    pub async fn fetch_started(&self) {
        self.fetch_started.notified().await;
    }

    /// Replace the scripted response for `year` after construction.
    pub fn respond(&self, year: i32, response: Result<Vec<Holiday>, RemoteError>) {
        self.responses.lock().insert(year, response);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<(i32, String)> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl HolidayLookup for MockHolidayLookup {
    async fn fetch_holidays(
        &self,
        year: i32,
        country_code: &str,
    ) -> Result<Vec<Holiday>, RemoteError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().push((year, country_code.to_string()));
        self.fetch_started.notify_one();

        let gate = self.gates.lock().get(&year).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let response = self.responses.lock().get(&year).cloned();
        response.unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// `DateValidation` stub returning a fixed outcome.
pub struct StubDateValidation {
    outcome: ValidationOutcome,
    validate_calls: AtomicUsize,
}

impl StubDateValidation {
    pub fn returning(outcome: ValidationOutcome) -> Self {
        Self { outcome, validate_calls: AtomicUsize::new(0) }
    }

    pub fn validate_calls(&self) -> usize {
        self.validate_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DateValidation for StubDateValidation {
    async fn is_holiday(&self, _date: CalendarDate) -> Result<bool, RemoteError> {
        match &self.outcome {
            ValidationOutcome::Holiday => Ok(true),
            ValidationOutcome::LookupFailed(err) => Err(err.clone()),
            _ => Ok(false),
        }
    }

    async fn validate(&self, _date: CalendarDate) -> ValidationOutcome {
        self.validate_calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// In-memory `AppointmentRepository` with call counters.
#[derive(Default)]
pub struct MockAppointmentRepository {
    appointments: Mutex<HashMap<CalendarDate, Appointment>>,
    next_id: AtomicUsize,
    create_calls: AtomicUsize,
    exists_calls: AtomicUsize,
    fail_with_database_error: bool,
    /// Report "free" from `exists_for_date` even when booked, to simulate a
    /// concurrent booking slipping past the existence check.
    stale_exists: bool,
}

impl MockAppointmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail_with_database_error: true, ..Self::default() }
    }

    pub fn with_stale_exists() -> Self {
        Self { stale_exists: true, ..Self::default() }
    }

    pub fn seeded(appointment: Appointment) -> Self {
        let repo = Self::default();
        repo.appointments.lock().insert(appointment.visit_date, appointment);
        repo
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn exists_calls(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.appointments.lock().len()
    }
}

#[async_trait]
impl AppointmentRepository for MockAppointmentRepository {
    async fn create(&self, appointment: NewAppointment) -> DomainResult<Appointment> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_with_database_error {
            return Err(CityNextError::Database("disk I/O error".into()));
        }

        let mut appointments = self.appointments.lock();
        if appointments.contains_key(&appointment.visit_date) {
            return Err(CityNextError::Rejected(Rejection::DuplicateDate));
        }

        let id = i64::try_from(self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
            .expect("id fits in i64");
        let stored = appointment.into_appointment(id, Utc::now());
        appointments.insert(stored.visit_date, stored.clone());
        Ok(stored)
    }

    async fn get_by_date(&self, date: CalendarDate) -> DomainResult<Option<Appointment>> {
        if self.fail_with_database_error {
            return Err(CityNextError::Database("disk I/O error".into()));
        }
        Ok(self.appointments.lock().get(&date).cloned())
    }

    async fn exists_for_date(&self, date: CalendarDate) -> DomainResult<bool> {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_with_database_error {
            return Err(CityNextError::Database("disk I/O error".into()));
        }
        if self.stale_exists {
            return Ok(false);
        }
        Ok(self.appointments.lock().contains_key(&date))
    }
}

/// Convenience: wrap a mock in `Arc` and keep a typed handle for assertions.
pub fn shared<T>(value: T) -> Arc<T> {
    Arc::new(value)
}
