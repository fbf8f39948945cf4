//! API route configuration.

use crate::api::handlers::{
    delete_url_handler, list_urls_handler, redirect_handler, save_url_handler, update_url_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// URL management and redirect routes.
///
/// # Endpoints
///
/// - `POST   /url`       - Store a URL under a given or generated alias
/// - `PUT    /url`       - Update a URL and optionally its alias
/// - `GET    /url/{id}`  - Redirect to the stored URL
/// - `DELETE /url/{id}`  - Remove a link
/// - `GET    /list`      - List all links, oldest first
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_url_handler).put(update_url_handler))
        .route("/url/{id}", get(redirect_handler).delete(delete_url_handler))
        .route("/list", get(list_urls_handler))
}
