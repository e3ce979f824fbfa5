use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use notesync_common::NoteSyncError;
use tracing::error;

use crate::types::ErrorResponse;

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Error surfaced to API callers
///
/// Only caller mistakes carry their own message. Everything else is reported
/// with a generic message and logged server-side.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Request body too large (limit {0} bytes)")]
    PayloadTooLarge(usize),

    #[error(transparent)]
    Internal(NoteSyncError),
}

impl From<NoteSyncError> for ApiError {
    fn from(err: NoteSyncError) -> Self {
        match err {
            NoteSyncError::InvalidInput(msg) => Self::BadRequest(msg),
            other => Self::Internal(other),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            Self::Internal(e) => {
                error!(kind = e.kind(), "Request failed: {}", e);
                INTERNAL_MESSAGE.to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse { error: message })
    }
}

/// Map JSON body extraction failures onto the API error envelope
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let api_error = match err {
        JsonPayloadError::Overflow { limit } => ApiError::PayloadTooLarge(limit),
        JsonPayloadError::OverflowKnownLength { limit, .. } => ApiError::PayloadTooLarge(limit),
        JsonPayloadError::ContentType => {
            ApiError::BadRequest("Request body must be JSON.".to_string())
        }
        other => ApiError::BadRequest(format!("Invalid JSON body: {}", other)),
    };
    api_error.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_of(err: ApiError) -> (StatusCode, ErrorResponse) {
        let response = err.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_invalid_input_keeps_message() {
        let err = ApiError::from(NoteSyncError::invalid_input("text required"));
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "text required");
    }

    #[actix_web::test]
    async fn test_internal_detail_is_hidden() {
        let err = ApiError::from(NoteSyncError::internal("db password is hunter2"));
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Internal server error");
    }

    #[actix_web::test]
    async fn test_upstream_errors_are_internal_if_they_escape() {
        let err = ApiError::from(NoteSyncError::upstream("401 from Groq"));
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.error.contains("Groq"));
    }
}
