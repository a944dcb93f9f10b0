//! HTTP mapping for search errors.
//!
//! Every failure is rendered as `{"success": false, "message": "..."}`:
//! - `BadRequest` → 400
//! - `ServiceUnavailable` → 503
//! - `Internal` → 500

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::SearchError;

#[derive(Debug)]
pub enum ApiError {
    /// Malformed body or invalid criteria (400).
    BadRequest(String),
    /// A collaborator did not answer (503).
    ServiceUnavailable(String),
    /// Unexpected server error (500).
    Internal(String),
}

impl From<SearchError> for ApiError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidCriteria { .. } => ApiError::BadRequest(e.to_string()),
            SearchError::UpstreamUnavailable(_) => ApiError::ServiceUnavailable(
                "Server error: Unable to fetch properties. Please try again later.".to_string(),
            ),
            SearchError::InvalidListing { .. } => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong.".to_string(),
                )
            }
        };
        let body = Json(json!({ "success": false, "message": message }));
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_errors_map_to_statuses() {
        let cases = [
            (
                SearchError::invalid_criteria("bedrooms", "nope"),
                StatusCode::BAD_REQUEST,
            ),
            (
                SearchError::UpstreamUnavailable("down".to_string()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                SearchError::InvalidListing {
                    id: "x".to_string(),
                    reason: "negative price".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), status);
        }
    }

    #[test]
    fn bad_request_keeps_the_field_name() {
        match ApiError::from(SearchError::invalid_criteria("halls", "expected a number")) {
            ApiError::BadRequest(msg) => assert!(msg.contains("halls")),
            other => panic!("unexpected {other:?}"),
        }
    }
}
