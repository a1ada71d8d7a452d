//! Port interfaces for holiday lookup and date validation
//!
//! These traits define the boundaries between the date rule chain and
//! infrastructure implementations (live HTTP client, cached validator,
//! test stubs).

use async_trait::async_trait;
use citynext_domain::{CalendarDate, Holiday, RemoteError, ValidationOutcome};

/// Fetches the public holidays of one year from a remote source.
///
/// Implementations perform a live fetch on every call: one outbound request,
/// bounded by a timeout, no retry and no caching. Timeouts, non-success
/// statuses and malformed payloads all fail with [`RemoteError`].
#[async_trait]
pub trait HolidayLookup: Send + Sync {
    async fn fetch_holidays(
        &self,
        year: i32,
        country_code: &str,
    ) -> Result<Vec<Holiday>, RemoteError>;
}

/// Capability consumed by the booking workflow.
///
/// Any implementation (cached, live, fully stubbed) must honour the same
/// rule order: past, then weekend, then holiday.
#[async_trait]
pub trait DateValidation: Send + Sync {
    /// Whether `date` is a public holiday.
    async fn is_holiday(&self, date: CalendarDate) -> Result<bool, RemoteError>;

    /// Run the full rule chain for a candidate appointment date.
    async fn validate(&self, date: CalendarDate) -> ValidationOutcome;
}
