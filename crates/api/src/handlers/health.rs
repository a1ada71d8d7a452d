//! Liveness and dependency health

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tokio::task;
use tracing::error;

use crate::AppContext;

/// `GET /health`
///
/// 200 when the database answers, 503 otherwise.
pub async fn health(State(ctx): State<Arc<AppContext>>) -> (StatusCode, Json<Value>) {
    let db = Arc::clone(&ctx.db);
    let database_ok = match task::spawn_blocking(move || db.health_check()).await {
        Ok(Ok(())) => true,
        Ok(Err(err)) => {
            error!(error = %err, "database health check failed");
            false
        }
        Err(err) => {
            error!(error = %err, "database health check task failed");
            false
        }
    };

    let cache = ctx.holiday_cache.stats().await;
    let (status, label, database) = if database_ok {
        (StatusCode::OK, "ok", "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
    };

    (
        status,
        Json(json!({
            "status": label,
            "database": database,
            "holidayCache": {
                "years": cache.cached_years,
                "holidays": cache.cached_holidays,
            },
        })),
    )
}
