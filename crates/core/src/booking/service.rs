//! Booking service - core business logic

use std::sync::Arc;

use citynext_domain::constants::MAX_NAME_LENGTH;
use citynext_domain::{
    Appointment, CalendarDate, CityNextError, NewAppointment, Rejection, Result,
    ValidationOutcome,
};
use tracing::{debug, error, info, warn};

use super::ports::AppointmentRepository;
use crate::holidays::ports::DateValidation;

/// Books single-slot appointments on valid business days
pub struct BookingService {
    repository: Arc<dyn AppointmentRepository>,
    validator: Arc<dyn DateValidation>,
}

impl BookingService {
    /// Create a new booking service
    pub fn new(
        repository: Arc<dyn AppointmentRepository>,
        validator: Arc<dyn DateValidation>,
    ) -> Self {
        Self { repository, validator }
    }

    /// Validate and persist a new appointment.
    ///
    /// Order: names, date rule chain, date uniqueness, persistence. Domain
    /// rejections come back as `CityNextError::Rejected`; a failed holiday
    /// lookup comes back as `CityNextError::HolidayLookup`.
    pub async fn create_appointment(&self, request: NewAppointment) -> Result<Appointment> {
        let visit_date = request.visit_date;
        info!(visit_date = %visit_date, "creating appointment");

        let request = normalize_names(request)?;

        let rejection = match self.validator.validate(visit_date).await {
            ValidationOutcome::LookupFailed(err) => {
                debug!(visit_date = %visit_date, error = %err, "booking aborted by lookup failure");
                return Err(CityNextError::HolidayLookup(err));
            }
            outcome => outcome.rejection(),
        };

        if let Some(rejection) = rejection {
            warn!(visit_date = %visit_date, reason = rejection.label(), "date validation failed");
            return Err(CityNextError::Rejected(rejection));
        }

        let exists = self.repository.exists_for_date(visit_date).await.map_err(|err| {
            error!(visit_date = %visit_date, error = %err, "failed to check existing appointment");
            err
        })?;

        if exists {
            warn!(visit_date = %visit_date, "duplicate appointment attempt");
            return Err(CityNextError::Rejected(Rejection::DuplicateDate));
        }

        let appointment = self.repository.create(request).await.map_err(|err| {
            match &err {
                CityNextError::Rejected(_) => {
                    warn!(visit_date = %visit_date, "appointment date taken concurrently");
                }
                other => {
                    error!(visit_date = %visit_date, error = %other, "failed to create appointment");
                }
            }
            err
        })?;

        info!(id = appointment.id, visit_date = %appointment.visit_date, "appointment created");
        Ok(appointment)
    }

    /// Look up the appointment booked on `date`.
    pub async fn find_by_date(&self, date: CalendarDate) -> Result<Option<Appointment>> {
        self.repository.get_by_date(date).await
    }
}

fn normalize_names(mut request: NewAppointment) -> Result<NewAppointment> {
    request.first_name = request.first_name.trim().to_string();
    request.last_name = request.last_name.trim().to_string();

    if request.first_name.is_empty() || request.last_name.is_empty() {
        warn!("invalid input: missing first or last name");
        return Err(CityNextError::InvalidInput("first and last name are required".into()));
    }

    let too_long = |name: &str| name.chars().count() > MAX_NAME_LENGTH;
    if too_long(&request.first_name) || too_long(&request.last_name) {
        warn!(max = MAX_NAME_LENGTH, "invalid input: name too long");
        return Err(CityNextError::InvalidInput(format!(
            "names must be at most {MAX_NAME_LENGTH} characters"
        )));
    }

    Ok(request)
}
