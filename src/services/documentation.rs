use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the timestamp API.
#[openapi(
    info(
        title = "Timestamp API",
        description = "Converts dates and epoch milliseconds into canonical forms. \
            Unparseable dates are reported in the body with `200 OK`; check for the `error` key \
            instead of the status code."
    ),
    paths(
        crate::routes::health::healthcheck,
        crate::routes::api::current_timestamp,
        crate::routes::api::current_timestamp_trailing_slash,
        crate::routes::api::convert_timestamp,
        crate::routes::api::hello,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::greeting::GreetingResponse,
            crate::dto::timestamp::TimestampResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "timestamp", description = "Date to timestamp conversion"),
    )
)]
pub struct ApiDoc;
