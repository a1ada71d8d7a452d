//! Nager.Date wire types

use citynext_domain::{CalendarDate, Holiday, RemoteError};
use serde::{Deserialize, Serialize};

/// One entry of the `PublicHolidays` response array.
///
/// Dates stay as raw strings here so a malformed entry is reported as a
/// decode failure of the whole response rather than a serde error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NagerHoliday {
    pub date: String,
    #[serde(default)]
    pub local_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub fixed: bool,
    #[serde(default)]
    pub global: bool,
    #[serde(default)]
    pub counties: Option<Vec<String>>,
    #[serde(default)]
    pub launch_year: Option<i32>,
    #[serde(default)]
    pub types: Vec<String>,
}

impl TryFrom<NagerHoliday> for Holiday {
    type Error = RemoteError;

    fn try_from(dto: NagerHoliday) -> Result<Self, Self::Error> {
        let date = CalendarDate::parse(&dto.date).map_err(|_| {
            RemoteError::Decode(format!("holiday '{}' has malformed date '{}'", dto.name, dto.date))
        })?;

        Ok(Holiday {
            date,
            local_name: dto.local_name,
            name: dto.name,
            country_code: dto.country_code,
            fixed: dto.fixed,
            global: dto.global,
            counties: dto.counties,
            launch_year: dto.launch_year,
            types: dto.types,
        })
    }
}
