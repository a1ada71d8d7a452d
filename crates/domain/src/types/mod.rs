//! Domain types and models

pub mod appointment;
pub mod date;
pub mod holiday;
pub mod validation;

pub use appointment::{Appointment, NewAppointment};
pub use date::CalendarDate;
pub use holiday::Holiday;
pub use validation::{Rejection, ValidationOutcome};
