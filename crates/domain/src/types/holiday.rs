//! Public holiday records
//!
//! Holidays are fetched per year from the remote source and only live long
//! enough to populate the in-memory holiday cache. They are never persisted.

use serde::{Deserialize, Serialize};

use super::date::CalendarDate;

/// A public holiday as published by the remote holiday source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub date: CalendarDate,
    pub local_name: String,
    pub name: String,
    pub country_code: String,
    #[serde(default)]
    pub fixed: bool,
    #[serde(default)]
    pub global: bool,
    /// Subdivision codes when the holiday is regional (`None` = nationwide)
    #[serde(default)]
    pub counties: Option<Vec<String>>,
    #[serde(default)]
    pub launch_year: Option<i32>,
    #[serde(default)]
    pub types: Vec<String>,
}

impl Holiday {
    /// Minimal holiday with just a date and display name.
    pub fn new(date: CalendarDate, name: impl Into<String>, country_code: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            date,
            local_name: name.clone(),
            name,
            country_code: country_code.into(),
            fixed: false,
            global: true,
            counties: None,
            launch_year: None,
            types: vec!["Public".to_string()],
        }
    }
}
