//! Handlers for the URL endpoints (create, list, redirect, update, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::api::dto::url::{CreateUrlRequest, UpdateUrlRequest, UrlResponse};
use crate::domain::RequestContext;
use crate::error::AppError;
use crate::state::AppState;

/// Stores a URL under a caller-chosen or generated alias.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "alias": "my-link"   // optional, generated when absent or empty
/// }
/// ```
///
/// # Errors
///
/// Returns 409 Conflict with `{"error": "alias already taken"}` when the
/// requested alias exists, 400 for a malformed body or an empty URL, 500 on
/// store failures.
pub async fn save_url_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
    payload: Result<Json<CreateUrlRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let alias = payload.requested_alias();
    state
        .url_service
        .save(&ctx, payload.original_url, alias)
        .await?;

    Ok(StatusCode::CREATED)
}

/// Lists all stored links, oldest first.
///
/// # Endpoint
///
/// `GET /list`
pub async fn list_urls_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<Json<Vec<UrlResponse>>, AppError> {
    let links = state.url_service.list(&ctx).await?;

    Ok(Json(links.into_iter().map(UrlResponse::from).collect()))
}

/// Redirects to the original URL of link `id`.
///
/// # Endpoint
///
/// `GET /url/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the id does not exist.
pub async fn redirect_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<Response, AppError> {
    let link = state.url_service.get(&ctx, id).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, link.original_url)]).into_response())
}

/// Replaces a link's URL and, optionally, its alias.
///
/// # Endpoint
///
/// `PUT /url`
///
/// # Request Body
///
/// ```json
/// {
///   "id": 1,
///   "new_url": "https://new-destination.com",
///   "alias": "new-alias"   // optional, unchanged when absent or empty
/// }
/// ```
pub async fn update_url_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
    payload: Result<Json<UpdateUrlRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let alias = payload.requested_alias();
    state
        .url_service
        .update(&ctx, payload.id, payload.new_url, alias)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Removes a link. Unknown ids also return 204.
///
/// # Endpoint
///
/// `DELETE /url/{id}`
pub async fn delete_url_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<StatusCode, AppError> {
    state.url_service.delete(&ctx, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
