#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use citynext_api::{create_router, AppContext};
use citynext_core::clock::MockClock;
use citynext_core::HolidayLookup;
use citynext_domain::{CalendarDate, Config, Holiday, RemoteError};
use citynext_infra::database::{DbManager, SqliteAppointmentRepository};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

/// Monday; tests book relative to this date.
pub const TODAY: &str = "2025-06-02";

pub fn date(s: &str) -> CalendarDate {
    CalendarDate::parse(s).expect("test date should parse")
}

/// Holiday source returning a fixed list for every year.
#[derive(Default)]
pub struct FixedHolidays {
    holidays: Vec<Holiday>,
    fail: AtomicBool,
    fetches: AtomicUsize,
}

impl FixedHolidays {
    pub fn new(days: &[&str]) -> Self {
        Self {
            holidays: days.iter().map(|d| Holiday::new(date(d), "Bank Holiday", "GB")).collect(),
            ..Self::default()
        }
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HolidayLookup for FixedHolidays {
    async fn fetch_holidays(
        &self,
        year: i32,
        _country_code: &str,
    ) -> Result<Vec<Holiday>, RemoteError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(RemoteError::Connect("connection refused".into()));
        }
        Ok(self.holidays.iter().filter(|h| h.date.year() == year).cloned().collect())
    }
}

/// Router over a fresh SQLite database, a scripted holiday source and a
/// clock pinned to [`TODAY`].
pub struct TestApp {
    pub router: Router,
    pub ctx: Arc<AppContext>,
    pub holidays: Arc<FixedHolidays>,
    _temp_dir: TempDir,
}

impl TestApp {
    pub fn new(holidays: FixedHolidays) -> Self {
        let temp_dir = TempDir::new().expect("failed to create temporary database directory");
        let db = Arc::new(
            DbManager::new(temp_dir.path().join("citynext.db"), 4)
                .expect("failed to initialise database"),
        );
        db.run_migrations().expect("failed to run schema migrations");

        let holidays = Arc::new(holidays);
        let repository = Arc::new(SqliteAppointmentRepository::new(Arc::clone(&db)));
        let ctx = Arc::new(AppContext::with_components(
            Config::default(),
            db,
            repository,
            holidays.clone(),
            Arc::new(MockClock::on(date(TODAY))),
        ));

        Self { router: create_router(Arc::clone(&ctx)), ctx, holidays, _temp_dir: temp_dir }
    }

    pub async fn post_json(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds");
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).expect("request builds");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.expect("router responds");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body reads");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response is JSON")
        };
        (status, json)
    }
}

pub fn booking(first: &str, last: &str, visit_date: &str) -> String {
    serde_json::json!({ "firstName": first, "lastName": last, "visitDate": visit_date }).to_string()
}
