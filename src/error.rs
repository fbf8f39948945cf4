//! Application error taxonomy and its HTTP mapping.
//!
//! Services and repositories return [`AppError`]; the transport layer turns it
//! into a status code and a `{"error": "..."}` body via [`IntoResponse`].

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

/// JSON error body returned by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The requested identifier does not exist.
    #[error("not found")]
    NotFound,

    /// The alias collides with an existing record.
    #[error("alias already taken")]
    AliasTaken,

    /// Reserved for alias validation; nothing raises it yet.
    #[error("invalid alias")]
    InvalidAlias,

    /// Malformed request input rejected before reaching the service.
    #[error("{message}")]
    Validation { message: String },

    /// Any other persistence failure.
    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Status code the transport layer reports for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::AliasTaken => StatusCode::CONFLICT,
            AppError::InvalidAlias | AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .keys()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        AppError::validation(format!("invalid fields: {fields}"))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct UrlInput {
        #[validate(length(min = 1))]
        original_url: String,
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::AliasTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(AppError::InvalidAlias.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::validation("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Store(sqlx::Error::PoolTimedOut).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_alias_taken_message() {
        assert_eq!(AppError::AliasTaken.to_string(), "alias already taken");
    }

    #[test]
    fn test_validation_errors_name_fields() {
        let input = UrlInput {
            original_url: String::new(),
        };
        let err: AppError = input.validate().unwrap_err().into();

        assert!(matches!(err, AppError::Validation { .. }));
        assert!(err.to_string().contains("original_url"));
    }

    #[tokio::test]
    async fn test_json_rejection_is_bad_request() {
        use crate::api::dto::url::CreateUrlRequest;
        use axum::body::Body;
        use axum::extract::FromRequest;
        use axum::http::{Request, header};

        let request = Request::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"alias":"x"}"#))
            .unwrap();
        let rejection = Json::<CreateUrlRequest>::from_request(request, &())
            .await
            .err()
            .unwrap();
        let err: AppError = rejection.into();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("original_url"));
    }
}
