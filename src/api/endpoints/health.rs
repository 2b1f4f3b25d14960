//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub templates_available: bool,
    pub version: &'static str,
}

/// `GET /api/health` — liveness plus whether the templates dir is usable.
pub async fn check(State(ctx): State<ApiContext>) -> Result<Json<HealthResponse>, ApiError> {
    let templates_available = ctx.store.list().is_ok();

    Ok(Json(HealthResponse {
        status: "ok",
        templates_available,
        version: crate::config::APP_VERSION,
    }))
}
