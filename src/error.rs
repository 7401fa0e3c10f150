use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for page endpoints
///
/// This error type provides consistent error handling across all endpoints,
/// mapping each failure to an HTTP status code and a JSON error body.
/// Unmatched routes never reach it; the router's default 404 handles those.
#[derive(Debug)]
pub enum ApiError {
    /// No page module is registered under the requested view name.
    /// Fatal to the mount attempt; nothing is rendered.
    UnresolvedPage(String),
    /// A handler asked for a path the route table does not carry
    UnregisteredRoute(String),
    /// Render instruction serialization error
    JsonError(serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::UnresolvedPage(name) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("No page module registered for view '{}'", name),
            ),
            ApiError::UnregisteredRoute(path) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("No route table entry for path '{}'", path),
            ),
            ApiError::JsonError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialize render instruction: {}", err),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::JsonError(err)
    }
}
