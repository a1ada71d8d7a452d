//! Per-year public holiday cache
//!
//! Maps a year to the set of holiday dates observed for that year.
//!
//! # Invariants
//!
//! - **Complete years only**: a year key is inserted once, with the full
//!   result of a successful fetch. A present key is authoritative for every
//!   date in that year, even when its set is empty.
//! - **No failure entries**: failed fetches never touch the cache, so the
//!   next call for that year fetches again.
//! - **Process lifetime**: entries are never evicted or expired.
//!
//! Reads take the shared lock; population takes the exclusive lock only for
//! the insert. Callers must not hold either across network I/O.

use std::collections::{HashMap, HashSet};

use citynext_domain::CalendarDate;
use tokio::sync::RwLock;

/// In-memory holiday cache keyed by year
#[derive(Debug, Default)]
pub struct HolidayYearCache {
    years: RwLock<HashMap<i32, HashSet<CalendarDate>>>,
}

impl HolidayYearCache {
    /// Create an empty cache. One instance is created at startup and shared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer from memory.
    ///
    /// Returns:
    /// - `Some(true)` if the date's year is cached and the date is a holiday
    /// - `Some(false)` if the year is cached and the date is not a holiday
    /// - `None` if the year has not been populated yet
    pub async fn lookup(&self, date: CalendarDate) -> Option<bool> {
        let years = self.years.read().await;
        years.get(&date.year()).map(|holidays| holidays.contains(&date))
    }

    /// Store the complete holiday set for `year`.
    ///
    /// The first population of a year wins; a racing caller that fetched the
    /// same year concurrently leaves the stored set untouched. Returns the
    /// number of distinct dates held for the year afterwards.
    pub async fn populate<I>(&self, year: i32, dates: I) -> usize
    where
        I: IntoIterator<Item = CalendarDate>,
    {
        let fetched: HashSet<CalendarDate> = dates.into_iter().collect();

        let mut years = self.years.write().await;
        let stored = years.entry(year).or_insert(fetched);
        stored.len()
    }

    pub async fn contains_year(&self, year: i32) -> bool {
        self.years.read().await.contains_key(&year)
    }

    /// Cached years in ascending order.
    pub async fn cached_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.years.read().await.keys().copied().collect();
        years.sort_unstable();
        years
    }

    /// Holiday dates cached for `year`, sorted, or `None` if absent.
    pub async fn holidays_for(&self, year: i32) -> Option<Vec<CalendarDate>> {
        let years = self.years.read().await;
        years.get(&year).map(|set| {
            let mut dates: Vec<CalendarDate> = set.iter().copied().collect();
            dates.sort_unstable();
            dates
        })
    }

    /// Get cache statistics
    pub async fn stats(&self) -> CacheStats {
        let years = self.years.read().await;
        CacheStats {
            cached_years: years.len(),
            cached_holidays: years.values().map(HashSet::len).sum(),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Number of populated years
    pub cached_years: usize,

    /// Total holiday dates across all years
    pub cached_holidays: usize,
}
