//! External service integrations

pub mod nager;
