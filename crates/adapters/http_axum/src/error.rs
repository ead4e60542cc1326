//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use rescuehub_app::reporting::describe;
use rescuehub_domain::error::{RescueError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`RescueError`] to an HTTP response with appropriate status code.
pub struct ApiError(RescueError);

impl From<RescueError> for ApiError {
    fn from(err: RescueError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

/// Status code and client-safe message for an error.
pub(crate) fn classify(err: &RescueError) -> (StatusCode, String) {
    match err {
        RescueError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        RescueError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
        RescueError::Storage(err) => {
            tracing::error!(error = %describe(&**err), "storage error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = classify(&self.0);
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
