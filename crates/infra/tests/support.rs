#![allow(dead_code)]

use std::sync::Arc;

use citynext_domain::{CalendarDate, Holiday};
use citynext_infra::database::DbManager;
use tempfile::TempDir;

/// Temporary database wrapper that keeps the underlying file alive for the
/// duration of a test run.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    _temp_dir: TempDir,
}

impl TestDatabase {
    /// Create a new migrated temporary database.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let db_path = temp_dir.path().join("test.db");

        let manager = DbManager::new(&db_path, 4).expect("db manager should be created");
        manager.run_migrations().expect("migrations should run");

        Self { manager: Arc::new(manager), _temp_dir: temp_dir }
    }
}

impl Default for TestDatabase {
    fn default() -> Self {
        Self::new()
    }
}

pub fn date(s: &str) -> CalendarDate {
    CalendarDate::parse(s).expect("test date should parse")
}

/// JSON body in the shape the holiday source returns.
pub fn holidays_json(holidays: &[(&str, &str)]) -> String {
    let entries: Vec<Holiday> =
        holidays.iter().map(|(day, name)| Holiday::new(date(day), *name, "GB")).collect();
    serde_json::to_string(&entries).expect("holidays serialize")
}
