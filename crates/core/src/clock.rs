//! Time abstraction for testability
//!
//! The date rule chain compares candidates against "today". Reading today
//! through a [`Clock`] keeps the rules deterministic under test.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use citynext_core::clock::{Clock, MockClock};
//!
//! let clock = MockClock::at(Utc.with_ymd_and_hms(2025, 6, 2, 15, 30, 0).unwrap());
//! assert_eq!(clock.today().to_string(), "2025-06-02");
//!
//! clock.advance_days(1);
//! assert_eq!(clock.today().to_string(), "2025-06-03");
//! ```

use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Duration, Utc};
use citynext_domain::CalendarDate;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// Current wall-clock instant in UTC.
    fn now(&self) -> DateTime<Utc>;

    /// Current UTC calendar day (the instant truncated to UTC midnight).
    fn today(&self) -> CalendarDate {
        CalendarDate::from_utc_datetime(&self.now())
    }
}

/// Real system clock. Use this in production code.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock for tests.
#[derive(Debug)]
pub struct MockClock {
    now: RwLock<DateTime<Utc>>,
}

impl MockClock {
    /// Clock frozen at `instant` until moved.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self { now: RwLock::new(instant) }
    }

    /// Clock frozen at midnight UTC on `date`.
    pub fn on(date: CalendarDate) -> Self {
        Self::at(date.at_utc_midnight())
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        *self.now.write().unwrap_or_else(PoisonError::into_inner) = instant;
    }

    pub fn advance_days(&self, days: i64) {
        let mut now = self.now.write().unwrap_or_else(PoisonError::into_inner);
        *now += Duration::days(days);
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().unwrap_or_else(PoisonError::into_inner)
    }
}
