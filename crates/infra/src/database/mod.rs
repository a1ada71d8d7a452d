//! Database implementations

pub mod appointment_repository;
pub mod manager;
pub mod memory_repository;

pub use appointment_repository::SqliteAppointmentRepository;
pub use manager::{DbManager, SqliteConnection};
pub use memory_repository::InMemoryAppointmentRepository;
