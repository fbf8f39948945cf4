//! DTOs for the URL endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortLink;

/// Request body for `POST /url`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUrlRequest {
    /// Destination URL, passed through as-is.
    #[serde(alias = "originalUrl")]
    #[validate(length(min = 1, message = "original_url is required"))]
    pub original_url: String,

    /// Caller-chosen alias. Absent or empty means "generate one".
    #[serde(default)]
    pub alias: Option<String>,
}

impl CreateUrlRequest {
    /// Alias to request from the service, with `""` treated as absent.
    pub fn requested_alias(&self) -> Option<String> {
        non_empty(self.alias.as_deref())
    }
}

/// Request body for `PUT /url`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUrlRequest {
    pub id: i64,

    #[serde(alias = "newUrl")]
    #[validate(length(min = 1, message = "new_url is required"))]
    pub new_url: String,

    /// Replacement alias. Absent or empty leaves the stored alias unchanged.
    #[serde(default)]
    pub alias: Option<String>,
}

impl UpdateUrlRequest {
    pub fn requested_alias(&self) -> Option<String> {
        non_empty(self.alias.as_deref())
    }
}

fn non_empty(alias: Option<&str>) -> Option<String> {
    alias.filter(|a| !a.is_empty()).map(str::to_owned)
}

/// A stored link as returned by `GET /list`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UrlResponse {
    pub id: i64,
    pub original_url: String,
    pub alias: String,
}

impl From<ShortLink> for UrlResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            id: link.id,
            original_url: link.original_url,
            alias: link.alias,
        }
    }
}
