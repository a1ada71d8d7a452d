//! HTTP routes (Axum)

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{appointments, health};
use crate::AppContext;

/// Build the API router
pub fn create_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/appointments", post(appointments::create_appointment))
        .route("/appointments/{date}", get(appointments::get_appointment))
        .with_state(ctx)
}
