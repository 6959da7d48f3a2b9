use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub cached_pages: usize,
    pub last_refreshed_at: Option<DateTime<Utc>>,
}

#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    responses(
        (status = 200, description = "Health check successful", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let snapshot = state.cache.snapshot();
    debug!(cached_pages = snapshot.pages.len(), "Health check");
    Json(HealthResponse {
        status: "OK".to_string(),
        cached_pages: snapshot.pages.len(),
        last_refreshed_at: snapshot.refreshed_at,
    })
}
