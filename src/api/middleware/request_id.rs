//! Request id assignment, propagation and extraction.
//!
//! Every request gets an `x-request-id` (generated as a UUID when the client
//! did not send one). Handlers receive it as a [`RequestContext`] and hand it
//! to the service explicitly.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tower_http::request_id::{
    MakeRequestUuid, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};

use crate::domain::RequestContext;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Assigns a UUID request id when the header is missing.
pub fn set_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

/// Copies the request id onto the response.
pub fn propagate_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}

impl<S: Send + Sync> FromRequestParts<S> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request_id = parts
            .extensions
            .get::<RequestId>()
            .map(RequestId::header_value)
            .or_else(|| parts.headers.get(REQUEST_ID_HEADER))
            .and_then(|v| v.to_str().ok());

        Ok(match request_id {
            Some(id) => RequestContext::new(id),
            None => RequestContext::background(),
        })
    }
}
