//! # CityNext Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits)
//! - The per-year holiday cache and the appointment date rule chain
//! - The booking workflow
//!
//! ## Architecture Principles
//! - Only depends on `citynext-domain`
//! - No database or HTTP code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod booking;
pub mod clock;
pub mod holidays;

// Re-export specific items to avoid ambiguity
pub use booking::ports::AppointmentRepository;
pub use booking::BookingService;
pub use clock::{Clock, SystemClock};
pub use holidays::ports::{DateValidation, HolidayLookup};
pub use holidays::{CacheStats, DateValidator, HolidayYearCache};
