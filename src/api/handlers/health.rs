//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::HealthResponse;
use crate::domain::RequestContext;
use crate::state::AppState;

/// Reports whether the store is reachable.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: store reachable
/// - **503 Service Unavailable**: store check failed
pub async fn health_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> (StatusCode, Json<HealthResponse>) {
    let (status_code, status, store) = match state.url_service.ping(&ctx).await {
        Ok(()) => (StatusCode::OK, "healthy", "ok".to_string()),
        Err(e) => {
            tracing::warn!(request_id = ctx.request_id(), error = %e, "Health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable".to_string())
        }
    };

    (
        status_code,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            store,
        }),
    )
}
