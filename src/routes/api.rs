use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    routing::get,
};

use crate::{
    dto::{greeting::GreetingResponse, timestamp::TimestampResponse},
    error::AppError,
    services::{classify::classify, date_service},
    state::SharedState,
};

/// Timestamp conversion endpoints under `/api`.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api", get(current_timestamp))
        .route("/api/", get(current_timestamp_trailing_slash))
        .route("/api/hello", get(hello))
        .route("/api/{date}", get(convert_timestamp))
}

#[utoipa::path(
    get,
    path = "/api",
    tag = "timestamp",
    responses((status = 200, description = "Current time", body = TimestampResponse))
)]
/// Return the current time as epoch milliseconds and an HTTP date.
pub async fn current_timestamp(State(state): State<SharedState>) -> Json<TimestampResponse> {
    let outcome = date_service::resolve(classify(None), state.clock());
    Json(outcome.into())
}

#[utoipa::path(
    get,
    path = "/api/",
    tag = "timestamp",
    responses((status = 200, description = "Current time", body = TimestampResponse))
)]
/// Same as `/api`, reached with an empty date segment.
pub async fn current_timestamp_trailing_slash(
    state: State<SharedState>,
) -> Json<TimestampResponse> {
    current_timestamp(state).await
}

#[utoipa::path(
    get,
    path = "/api/{date}",
    tag = "timestamp",
    params(("date" = String, Path, description = "Epoch milliseconds, an ISO 8601 date or an RFC 2822 date")),
    responses(
        (status = 200, description = "Resolved instant, or `{\"error\": \"Invalid Date\"}` when the input is not a date", body = TimestampResponse),
        (status = 400, description = "Path segment is not valid percent-encoded UTF-8")
    )
)]
/// Convert a date string or epoch milliseconds into both canonical forms.
///
/// Unparseable input is still answered with `200 OK`.
pub async fn convert_timestamp(
    State(state): State<SharedState>,
    date: Result<Path<String>, PathRejection>,
) -> Result<Json<TimestampResponse>, AppError> {
    let Path(date) = date.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let outcome = date_service::resolve(classify(Some(&date)), state.clock());
    Ok(Json(outcome.into()))
}

#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "timestamp",
    responses((status = 200, description = "Fixed greeting", body = GreetingResponse))
)]
/// Return a fixed greeting.
pub async fn hello() -> Json<GreetingResponse> {
    Json(GreetingResponse::hello())
}
