//! Public holiday lookup, caching and appointment date validation

pub mod cache;
pub mod ports;
pub mod validator;

pub use cache::{CacheStats, HolidayYearCache};
pub use validator::DateValidator;
