//! Appointment date validation
//!
//! [`DateValidator`] owns the process-wide [`HolidayYearCache`] and runs the
//! ordered rule chain for candidate appointment dates:
//!
//! 1. **Past**: strictly before today (UTC) is rejected; today is accepted
//! 2. **Weekend**: Saturday and Sunday are rejected
//! 3. **Holiday**: public holidays of the configured country are rejected
//!
//! The chain short-circuits at the first failing rule, so the local checks
//! never trigger a holiday fetch.
//!
//! # Holiday lookup
//!
//! `is_holiday` is cache-first. On a miss for the date's year the read lock
//! is released, the year is fetched with no lock held, and the exclusive
//! lock is taken only to insert the complete year. Concurrent misses on the
//! same year may each fetch; population is idempotent so the duplicate work
//! is harmless. A failed fetch is propagated and leaves the year absent.

use std::sync::Arc;

use async_trait::async_trait;
use citynext_domain::{CalendarDate, RemoteError, ValidationOutcome};
use tracing::{debug, error, info, warn};

use super::cache::HolidayYearCache;
use super::ports::{DateValidation, HolidayLookup};
use crate::clock::{Clock, SystemClock};

/// Cache-backed implementation of [`DateValidation`]
pub struct DateValidator {
    lookup: Arc<dyn HolidayLookup>,
    cache: Arc<HolidayYearCache>,
    clock: Arc<dyn Clock>,
    country_code: String,
}

impl DateValidator {
    /// Create a validator using the system clock.
    pub fn new(
        lookup: Arc<dyn HolidayLookup>,
        cache: Arc<HolidayYearCache>,
        country_code: impl Into<String>,
    ) -> Self {
        Self { lookup, cache, clock: Arc::new(SystemClock), country_code: country_code.into() }
    }

    /// Replace the clock used to determine "today".
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// The cache this validator populates.
    pub fn cache(&self) -> &Arc<HolidayYearCache> {
        &self.cache
    }

    async fn fetch_and_populate(&self, date: CalendarDate) -> Result<bool, RemoteError> {
        let year = date.year();
        debug!(date = %date, year, "holiday cache miss, fetching year");

        let holidays = match self.lookup.fetch_holidays(year, &self.country_code).await {
            Ok(holidays) => holidays,
            Err(err) => {
                error!(year, country_code = %self.country_code, error = %err, "failed to fetch holidays");
                return Err(err);
            }
        };

        let fetched_hit = holidays.iter().any(|holiday| holiday.date == date);
        let cached_count =
            self.cache.populate(year, holidays.iter().map(|holiday| holiday.date)).await;

        // A concurrent caller may have populated the year first; answer from
        // whatever set is now stored.
        let is_holiday = self.cache.lookup(date).await.unwrap_or(fetched_hit);

        info!(
            year,
            holidays_count = holidays.len(),
            cached_count,
            date = %date,
            is_holiday,
            "updated holiday cache"
        );

        Ok(is_holiday)
    }
}

#[async_trait]
impl DateValidation for DateValidator {
    async fn is_holiday(&self, date: CalendarDate) -> Result<bool, RemoteError> {
        if let Some(is_holiday) = self.cache.lookup(date).await {
            debug!(date = %date, is_holiday, "holiday cache hit");
            return Ok(is_holiday);
        }

        self.fetch_and_populate(date).await
    }

    async fn validate(&self, date: CalendarDate) -> ValidationOutcome {
        debug!(date = %date, "validating appointment date");

        let today = self.clock.today();
        if date.at_utc_midnight() < today.at_utc_midnight() {
            warn!(date = %date, today = %today, "attempted to book appointment in the past");
            return ValidationOutcome::PastDate;
        }

        if date.is_weekend() {
            warn!(date = %date, weekday = %date.weekday(), "attempted to book appointment on weekend");
            return ValidationOutcome::Weekend;
        }

        match self.is_holiday(date).await {
            Ok(true) => {
                warn!(date = %date, "attempted to book appointment on public holiday");
                ValidationOutcome::Holiday
            }
            Ok(false) => {
                debug!(date = %date, "date validation passed");
                ValidationOutcome::Valid
            }
            Err(err) => {
                debug!(date = %date, error = %err, "holiday check failed");
                ValidationOutcome::LookupFailed(err)
            }
        }
    }
}
