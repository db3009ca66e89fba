use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;

/// Reasons a date input could not be turned into an instant.
///
/// These never leave the resolver as errors: they are folded into the
/// `Invalid Date` payload, which is still served with `200 OK`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// No accepted grammar matched the input, or it named a non-existent calendar date.
    #[error("unrecognized date input: {0:?}")]
    Unrecognized(String),
    /// The input parsed but lies outside the representable range of instants.
    #[error("instant out of range: {0}")]
    OutOfRange(String),
    /// The instant could not be written out as an HTTP date.
    #[error("failed to render instant: {0}")]
    Render(String),
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request that never reached the date resolver.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Requested resource not found.
    #[error("not found: {0}")]
    NotFound(String),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let payload = Json(ErrorBody {
            message: self.to_string(),
        });

        (status, payload).into_response()
    }
}
