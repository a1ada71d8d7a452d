//! Port interfaces for appointment persistence

use async_trait::async_trait;
use citynext_domain::{Appointment, CalendarDate, NewAppointment, Result};

/// Trait for persisting appointments
///
/// Implementations enforce one appointment per visit date: `create` fails
/// with `CityNextError::Rejected(Rejection::DuplicateDate)` when the date is
/// already taken.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Persist a new appointment and return it with storage-assigned fields
    async fn create(&self, appointment: NewAppointment) -> Result<Appointment>;

    /// Get the appointment booked on `date`, if any
    async fn get_by_date(&self, date: CalendarDate) -> Result<Option<Appointment>>;

    /// Check whether `date` is already booked
    async fn exists_for_date(&self, date: CalendarDate) -> Result<bool>;
}
