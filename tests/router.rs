//! Router-level tests that never reach a live database: extraction failures,
//! operational routes, the OpenAPI document, and the 500-on-db-failure path.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use rollcall::{app, AppState};
use sqlx::mysql::MySqlPoolOptions;
use std::time::Duration;
use tower::ServiceExt;

/// A pool that never connects. Routes that don't touch the database work;
/// routes that do fail fast with a pool timeout.
fn dead_state() -> AppState {
    let pool = MySqlPoolOptions::new()
        .acquire_timeout(Duration::from_millis(200))
        .connect_lazy("mysql://127.0.0.1:1/none")
        .expect("lazy pool");
    AppState { pool }
}

async fn body_json(body: Body) -> serde_json::Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_responds_ok() {
    let app = app(dead_state());
    let resp = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn version_reports_package_name() {
    let app = app(dead_state());
    let resp = app
        .oneshot(Request::get("/version").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["name"], "rollcall");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = app(dead_state());
    let resp = app
        .oneshot(
            Request::get("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    assert!(json["paths"]["/student"].is_object());
    assert!(json["paths"]["/agents"].is_object());
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = app(dead_state());
    let resp = app
        .oneshot(Request::get("/teachers").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_student_without_json_content_type_is_rejected() {
    let app = app(dead_state());
    let resp = app
        .oneshot(
            Request::post("/student")
                .body(Body::from("NAME=Chiranjeevi"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn post_student_missing_field_is_rejected_before_db() {
    let app = app(dead_state());
    let resp = app
        .oneshot(
            Request::post("/student")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"NAME":"Chiranjeevi","TITLE":"Gorantla","CLASS":"V","SECTION":"C"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn delete_student_with_non_numeric_id_is_400() {
    let app = app(dead_state());
    let resp = app
        .oneshot(
            Request::delete("/student/forty-seven")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn agents_without_city_is_400() {
    let app = app(dead_state());
    let resp = app
        .oneshot(Request::get("/agents").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn company_without_name_is_400() {
    let app = app(dead_state());
    let resp = app
        .oneshot(Request::get("/company").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn database_failure_yields_500_error_body_not_a_hang() {
    let app = app(dead_state());
    let resp = app
        .oneshot(Request::get("/student").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["error"]["code"], "database_error");
}
