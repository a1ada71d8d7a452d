//! Appointment booking workflow

pub mod ports;
pub mod service;

pub use service::BookingService;
