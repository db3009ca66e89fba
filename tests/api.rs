use std::{fs, path::Path, sync::Arc};

use serde_json::{Value, json};
use time::{OffsetDateTime, macros::datetime};
use timestamp_api::{
    routes,
    state::{AppState, Clock, SharedState},
};
use tokio::net::TcpListener;

struct FixedClock(OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

async fn spawn_app(state: SharedState, static_dir: Option<&Path>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = routes::router(state, static_dir);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn get_json(base: &str, path: &str) -> (u16, Value) {
    let response = reqwest::get(format!("{base}{path}")).await.unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

fn christmas() -> Value {
    json!({"unix": 1451001600000_i64, "utc": "Fri, 25 Dec 2015 00:00:00 GMT"})
}

#[tokio::test]
async fn iso_date_is_converted() {
    let base = spawn_app(AppState::new(), None).await;
    assert_eq!(get_json(&base, "/api/2015-12-25").await, (200, christmas()));
}

#[tokio::test]
async fn unix_milliseconds_are_converted() {
    let base = spawn_app(AppState::new(), None).await;
    assert_eq!(get_json(&base, "/api/1451001600000").await, (200, christmas()));
}

#[tokio::test]
async fn percent_encoded_http_date_is_converted() {
    let base = spawn_app(AppState::new(), None).await;
    assert_eq!(
        get_json(&base, "/api/Fri,%2025%20Dec%202015%2000:00:00%20GMT").await,
        (200, christmas())
    );
}

#[tokio::test]
async fn invalid_date_is_reported_with_ok_status() {
    let base = spawn_app(AppState::new(), None).await;
    assert_eq!(
        get_json(&base, "/api/this-is-not-a-date").await,
        (200, json!({"error": "Invalid Date"}))
    );
    assert_eq!(
        get_json(&base, "/api/-1").await,
        (200, json!({"error": "Invalid Date"}))
    );
    assert_eq!(
        get_json(&base, "/api/99999999999999999999").await,
        (200, json!({"error": "Invalid Date"}))
    );
}

#[tokio::test]
async fn missing_date_uses_the_clock() {
    let clock = FixedClock(datetime!(2015-12-25 00:00:00 UTC));
    let base = spawn_app(AppState::with_clock(Arc::new(clock)), None).await;
    assert_eq!(get_json(&base, "/api/").await, (200, christmas()));
    assert_eq!(get_json(&base, "/api").await, (200, christmas()));
}

#[tokio::test]
async fn missing_date_tracks_wall_clock() {
    let base = spawn_app(AppState::new(), None).await;
    let before = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    let (status, body) = get_json(&base, "/api/").await;
    let after = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;

    assert_eq!(status, 200);
    let unix = i128::from(body["unix"].as_i64().unwrap());
    assert!(before <= unix && unix <= after);

    let reparsed = get_json(&base, &format!("/api/{}", body["utc"].as_str().unwrap())).await;
    assert_eq!(reparsed.1["unix"].as_i64().unwrap() / 1000, body["unix"].as_i64().unwrap() / 1000);
}

#[tokio::test]
async fn hello_route_wins_over_date() {
    let base = spawn_app(AppState::new(), None).await;
    assert_eq!(
        get_json(&base, "/api/hello").await,
        (200, json!({"greeting": "hello API"}))
    );
}

#[tokio::test]
async fn healthcheck_reports_ok() {
    let base = spawn_app(AppState::new(), None).await;
    assert_eq!(
        get_json(&base, "/healthcheck").await,
        (200, json!({"status": "ok"}))
    );
}

#[tokio::test]
async fn openapi_document_is_served() {
    let base = spawn_app(AppState::new(), None).await;
    let (status, doc) = get_json(&base, "/api-doc/openapi.json").await;
    assert_eq!(status, 200);
    assert!(doc["paths"]["/api/{date}"].is_object());
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let base = spawn_app(AppState::new(), None).await;
    assert_eq!(
        get_json(&base, "/nowhere").await,
        (404, json!({"message": "not found: /nowhere"}))
    );
}

#[tokio::test]
async fn static_dir_serves_landing_page() {
    let dir = std::env::temp_dir().join(format!("timestamp-api-static-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("index.html"), "<h1>Timestamp API</h1>").unwrap();

    let base = spawn_app(AppState::new(), Some(&dir)).await;
    let response = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "<h1>Timestamp API</h1>");

    assert_eq!(get_json(&base, "/api/2015-12-25").await, (200, christmas()));

    fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn undecodable_path_is_bad_request() {
    let base = spawn_app(AppState::new(), None).await;
    let (status, body) = get_json(&base, "/api/%FF").await;
    assert_eq!(status, 400);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("bad request:")
    );
}

#[tokio::test]
async fn security_headers_are_set_on_every_response() {
    let base = spawn_app(AppState::new(), None).await;
    for path in ["/api/2015-12-25", "/api/this-is-not-a-date", "/nowhere"] {
        let response = reqwest::get(format!("{base}{path}")).await.unwrap();
        let headers = response.headers();
        assert_eq!(headers["x-content-type-options"], "nosniff", "{path}");
        assert_eq!(headers["x-frame-options"], "SAMEORIGIN", "{path}");
        assert_eq!(headers["referrer-policy"], "no-referrer", "{path}");
    }
}

#[tokio::test]
async fn pre_1900_rfc2822_date_is_converted() {
    let base = spawn_app(AppState::new(), None).await;
    assert_eq!(
        get_json(&base, "/api/Sat,%2001%20Jan%201800%2000:00:00%20+0000").await,
        (
            200,
            json!({"unix": -5364662400000_i64, "utc": "Wed, 01 Jan 1800 00:00:00 GMT"})
        )
    );
}
