//! Request handlers

pub mod appointments;
pub mod health;
