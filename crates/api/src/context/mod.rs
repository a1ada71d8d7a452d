//! Application context - dependency injection container

use std::sync::Arc;

use citynext_core::{
    AppointmentRepository, BookingService, Clock, DateValidator, HolidayLookup, HolidayYearCache,
    SystemClock,
};
use citynext_domain::{Config, Result};
use citynext_infra::{DbManager, NagerHolidayClient, SqliteAppointmentRepository};
use tracing::info;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    /// Process-wide holiday cache shared by every validator
    pub holiday_cache: Arc<HolidayYearCache>,
    pub validator: Arc<DateValidator>,
    pub booking: Arc<BookingService>,
}

impl AppContext {
    /// Build the production graph: SQLite storage, Nager.Date lookup, system
    /// clock. Runs migrations before returning.
    pub fn with_config(config: Config) -> Result<Self> {
        let db = Arc::new(DbManager::from_config(&config.database)?);
        db.run_migrations()?;

        let lookup = Arc::new(NagerHolidayClient::from_config(&config.holidays)?);

        info!(
            db_path = %config.database.path,
            holiday_api = %config.holidays.base_url,
            country_code = %config.holidays.country_code,
            "application context initialised"
        );

        let repository = Arc::new(SqliteAppointmentRepository::new(Arc::clone(&db)));
        Ok(Self::with_components(config, db, repository, lookup, Arc::new(SystemClock)))
    }

    /// Wire the services from already-constructed adapters.
    pub fn with_components(
        config: Config,
        db: Arc<DbManager>,
        repository: Arc<dyn AppointmentRepository>,
        lookup: Arc<dyn HolidayLookup>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let holiday_cache = Arc::new(HolidayYearCache::new());
        let validator = Arc::new(
            DateValidator::new(
                lookup,
                Arc::clone(&holiday_cache),
                config.holidays.country_code.clone(),
            )
            .with_clock(clock),
        );
        let booking = Arc::new(BookingService::new(repository, validator.clone()));

        Self { config, db, holiday_cache, validator, booking }
    }
}
