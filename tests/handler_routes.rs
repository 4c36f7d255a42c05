mod common;

use axum::ServiceExt;
use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue, StatusCode, header};
use axum_test::TestServer;
use serde_json::json;
use shorturl::routes::app_router;
use shorturl::state::AppState;
use sqlx::PgPool;

fn app_server(state: AppState) -> TestServer {
    let app = ServiceExt::<Request>::into_make_service(app_router(state));

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_shorten_with_trailing_slash(pool: PgPool) {
    let server = app_server(common::create_test_state(pool.clone()));

    let response = server
        .post("/api/shorturl/")
        .json(&json!({ "url": "https://www.example.com" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "original_url": "https://www.example.com",
        "short_url": 1
    }));

    let again = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://www.example.com" }))
        .await;

    again.assert_json(&json!({
        "original_url": "https://www.example.com",
        "short_url": 1
    }));
    assert_eq!(common::count_urls(&pool).await, 1);
}

#[sqlx::test]
async fn test_redirect_with_trailing_slash(pool: PgPool) {
    common::create_test_link(&pool, 7, "https://www.example.com/seven").await;
    let server = app_server(common::create_test_state(pool));

    let response = server.get("/api/shorturl/7/").await;

    response.assert_status(StatusCode::FOUND);
    response.assert_header(header::LOCATION, "https://www.example.com/seven");
}

#[sqlx::test]
async fn test_cors_allows_any_origin(pool: PgPool) {
    let server = app_server(common::create_test_state(pool));

    let response = server
        .post("/api/shorturl")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static("https://somewhere.example.org"),
        )
        .json(&json!({ "url": "https://www.example.com" }))
        .await;

    response.assert_status_ok();
    response.assert_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
}

#[sqlx::test]
async fn test_cors_preflight(pool: PgPool) {
    let server = app_server(common::create_test_state(pool));

    let response = server
        .method(axum::http::Method::OPTIONS, "/api/shorturl")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static("https://somewhere.example.org"),
        )
        .add_header(
            HeaderName::from_static("access-control-request-method"),
            HeaderValue::from_static("POST"),
        )
        .await;

    response.assert_status_ok();
    response.assert_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
}

#[sqlx::test]
async fn test_index_page(pool: PgPool) {
    let server = app_server(common::create_test_state(pool));

    let response = server.get("/").await;

    response.assert_status_ok();
    response.assert_text_contains("/api/shorturl");
}

#[sqlx::test]
async fn test_public_assets(pool: PgPool) {
    let server = app_server(common::create_test_state(pool));

    let response = server.get("/public/style.css").await;

    response.assert_status_ok();
    assert!(response.content_type().starts_with("text/css"));
}

#[sqlx::test]
async fn test_health_through_router(pool: PgPool) {
    let server = app_server(common::create_test_state(pool));

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["status"], "healthy");
}
