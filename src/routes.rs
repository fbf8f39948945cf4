//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/url`, `/url/{id}`, `/list` - URL management and redirects
//! - `GET /health`               - Store health check
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` assigned (UUID) and echoed on the response
//! - **Tracing** - Structured request/response logging including the request id
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{request_id, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Routes with request id and tracing middleware, without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::url_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(request_id::propagate_layer())
        .layer(tracing::layer())
        .layer(request_id::set_layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/list/` resolves to `/list`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
