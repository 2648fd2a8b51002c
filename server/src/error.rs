//! HTTP error mapping
//!
//! Pipeline failures surface to the caller as a generic `{"error": ...}`
//! body with a kind-appropriate status. The full error detail is logged
//! server-side and never serialized into the response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use semsearch_core::SearchError;
use serde_json::json;

/// Error returned from HTTP handlers
#[derive(Debug)]
pub struct ApiError(pub SearchError);

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            SearchError::BadRequest(_) => (StatusCode::BAD_REQUEST, "invalid request"),
            SearchError::Embedding(_) => (StatusCode::INTERNAL_SERVER_ERROR, "embedding failed"),
            SearchError::DimensionMismatch { .. }
            | SearchError::Lookup(_)
            | SearchError::OutOfRange { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "index lookup failed")
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal error"),
        };

        tracing::error!(error = %self.0, "search request failed");

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_maps_to_400() {
        let response = ApiError(SearchError::bad_request("empty")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_lookup_failures_map_to_500() {
        let response = ApiError(SearchError::OutOfRange { row: 7, len: 3 }).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ApiError(SearchError::DimensionMismatch {
            expected: 4,
            actual: 2,
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
