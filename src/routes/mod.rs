use std::path::Path;

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Uri, header},
};
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer};

use crate::{error::AppError, state::SharedState};

pub mod api;
pub mod docs;
pub mod health;

/// Hardening headers added to every response unless a handler already set them.
const SECURITY_HEADERS: [(HeaderName, &str); 11] = [
    (
        header::CONTENT_SECURITY_POLICY,
        "default-src 'self';base-uri 'self';font-src 'self' https: data:;form-action 'self';\
         frame-ancestors 'self';img-src 'self' data:;object-src 'none';script-src 'self';\
         script-src-attr 'none';style-src 'self' https: 'unsafe-inline'",
    ),
    (
        HeaderName::from_static("cross-origin-opener-policy"),
        "same-origin",
    ),
    (HeaderName::from_static("origin-agent-cluster"), "?1"),
    (header::REFERRER_POLICY, "no-referrer"),
    (
        header::STRICT_TRANSPORT_SECURITY,
        "max-age=31536000; includeSubDomains",
    ),
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (header::X_DNS_PREFETCH_CONTROL, "off"),
    (HeaderName::from_static("x-download-options"), "noopen"),
    (header::X_FRAME_OPTIONS, "SAMEORIGIN"),
    (
        HeaderName::from_static("x-permitted-cross-domain-policies"),
        "none",
    ),
    (header::X_XSS_PROTECTION, "0"),
];

/// Compose all route trees, wiring in shared state and documentation routes.
///
/// Requests that match no route are served from `static_dir` when one is
/// given, and answered with a JSON 404 otherwise.
pub fn router(state: SharedState, static_dir: Option<&Path>) -> Router<()> {
    let api_router = health::router().merge(api::router());

    let docs_router = docs::router();

    let router = api_router.merge(docs_router);
    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router.fallback(not_found),
    };

    with_security_headers(router.with_state(state))
}

fn with_security_headers(router: Router<()>) -> Router<()> {
    SECURITY_HEADERS
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(
                name,
                HeaderValue::from_static(value),
            ))
        })
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_owned())
}
