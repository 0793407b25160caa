//! Liveness and readiness probes

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, AppState};

/// Body returned by both probes
#[derive(Serialize, ToSchema)]
pub struct ProbeResponse {
    /// `alive` or `ready`
    pub status: String,
    /// Version of the running server
    pub version: String,
}

impl ProbeResponse {
    fn with_status(status: &str) -> Self {
        Self {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Liveness probe: the process is up and serving requests
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Process is up", body = ProbeResponse)
    )
)]
pub async fn liveness_probe() -> Json<ProbeResponse> {
    Json(ProbeResponse::with_status("alive"))
}

/// Readiness probe: succeeds only if a round trip to the book store does
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Book store reachable", body = ProbeResponse),
        (status = 500, description = "Book store unreachable", body = crate::error::ErrorResponse)
    )
)]
pub async fn readiness_probe(State(state): State<AppState>) -> AppResult<Json<ProbeResponse>> {
    state.services.ping_store().await?;
    Ok(Json(ProbeResponse::with_status("ready")))
}
