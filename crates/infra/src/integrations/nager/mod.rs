//! Nager.Date public holiday integration
//!
//! Implements the core `HolidayLookup` port against
//! `GET {base}/PublicHolidays/{year}/{countryCode}`.

pub mod client;
pub mod types;

pub use client::NagerHolidayClient;
pub use types::NagerHoliday;
