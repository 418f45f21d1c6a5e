use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use spoon_server::api::build_app;
use spoon_server::{Config, MemoryStore, SeedOutcome, ServerState, seed_menu};

fn app_with(store: Arc<MemoryStore>, config: Config) -> Router {
    build_app(ServerState::new(config, store))
}

fn app(store: Arc<MemoryStore>) -> Router {
    app_with(
        store,
        Config {
            frontend_dir: PathBuf::from("does-not-exist"),
            ..Config::default()
        },
    )
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    post_raw(uri, body.to_string())
}

fn post_raw(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn ada() -> Value {
    json!({ "name": "Ada", "date": "2024-12-25", "time": "19:00", "guests": 4 })
}

#[tokio::test]
async fn test_menu_lists_every_seeded_item() {
    let store = Arc::new(MemoryStore::new());
    assert_eq!(seed_menu(&*store).await, SeedOutcome::Seeded(14));
    let app = app(store);

    let (status, body) = send(&app, get("/api/menu")).await;
    assert_eq!(status, StatusCode::OK);

    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 14);
    for item in items {
        for field in [
            "_id",
            "name",
            "price",
            "description",
            "image",
            "category",
            "spicy",
            "available",
        ] {
            assert!(item.get(field).is_some(), "missing {field} in {item}");
        }
    }
    assert_eq!(items[0]["name"], "Suya Platter");
    assert_eq!(items[0]["price"], 4500);
}

#[tokio::test]
async fn test_create_reservation_then_list() {
    let store = Arc::new(MemoryStore::new());
    let app = app(store);

    let (status, created) = send(&app, post_json("/api/reservations", ada())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Ada");
    assert_eq!(created["date"], "2024-12-25");
    assert_eq!(created["time"], "19:00");
    assert_eq!(created["guests"], 4);
    let id = created["_id"].as_str().unwrap();
    assert_eq!(id.len(), 24);

    let (status, list) = send(&app, get("/api/reservations")).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["_id"], id);
    assert_eq!(list[0]["name"], "Ada");
    assert_eq!(list[0]["date"], "2024-12-25");
    assert_eq!(list[0]["time"], "19:00");
    assert_eq!(list[0]["guests"], 4);
}

#[tokio::test]
async fn test_trailing_slash_paths_are_served() {
    let store = Arc::new(MemoryStore::new());
    seed_menu(&*store).await;
    let app = app(store);

    let (status, menu) = send(&app, get("/api/menu/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(menu.as_array().unwrap().len(), 14);

    let (status, created) = send(&app, post_json("/api/reservations/", ada())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Ada");

    let (status, list) = send(&app, get("/api/reservations/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_reservation_missing_required_fields_is_rejected() {
    let store = Arc::new(MemoryStore::new());
    let app = app(store);

    let (status, body) = send(
        &app,
        post_json("/api/reservations", json!({ "email": "a@b.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body["error"].as_str().unwrap().is_empty());
    assert_eq!(body["code"], 2001);

    let (_, list) = send(&app, get("/api/reservations")).await;
    assert!(
        list.as_array()
            .unwrap()
            .iter()
            .all(|r| r["email"] != "a@b.com")
    );
}

#[tokio::test]
async fn test_reservation_accepts_form_strings() {
    let app = app(Arc::new(MemoryStore::new()));

    let (status, created) = send(
        &app,
        post_json(
            "/api/reservations",
            json!({
                "name": "Chidi",
                "email": "chidi@example.com",
                "phone": "",
                "date": "2025-01-04",
                "time": "20:30",
                "guests": "6",
                "message": "Birthday"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["guests"], 6);
    assert_eq!(created["email"], "chidi@example.com");
    assert_eq!(created["message"], "Birthday");
    assert!(created.get("phone").is_none());
}

#[tokio::test]
async fn test_reservation_invalid_guests() {
    let app = app(Arc::new(MemoryStore::new()));

    let mut body = ada();
    body["guests"] = json!("a few");
    let (status, error) = send(&app, post_json("/api/reservations", body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], 2002);
}

#[tokio::test]
async fn test_malformed_json_is_a_json_400() {
    let app = app(Arc::new(MemoryStore::new()));

    let (status, body) = send(&app, post_raw("/api/reservations", "{\"name\": ")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = send(
        &app,
        post_json("/api/reservations", json!({ "name": 42, "guests": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_store_failure_is_opaque_500() {
    let store = Arc::new(MemoryStore::new());
    let app = app(store.clone());
    store.set_offline(true);

    let (status, body) = send(&app, get("/api/menu")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Database error");
    assert_eq!(body["code"], 9002);

    let (status, _) = send(&app, post_json("/api/reservations", ada())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    store.set_offline(false);
    let (_, list) = send(&app, get("/api/reservations")).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_unknown_api_route_is_json_404() {
    let app = app(Arc::new(MemoryStore::new()));

    let (status, body) = send(&app, get("/api/specials")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3);
    assert_eq!(body["error"], "Route /api/specials not found");
}

#[tokio::test]
async fn test_health_reports_store_status() {
    let store = Arc::new(MemoryStore::new());
    let app = app(store.clone());

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "spoon-server");
    assert_eq!(body["db"], true);

    store.set_offline(true);
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["db"], false);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = app(Arc::new(MemoryStore::new()));

    let response = app.oneshot(get("/api/menu")).await.unwrap();
    let id = response.headers().get("x-request-id").unwrap();
    assert_eq!(id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let app = app(Arc::new(MemoryStore::new()));

    let mut body = ada();
    body["message"] = json!("x".repeat(70 * 1024));
    let (status, _) = send(&app, post_json("/api/reservations", body)).await;
    assert!(status.is_client_error());

    let (_, list) = send(&app, get("/api/reservations")).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let app = app_with(
        Arc::new(MemoryStore::new()),
        Config {
            frontend_dir: PathBuf::from("does-not-exist"),
            cors_origins: vec!["https://silverspoon.ng".into()],
            ..Config::default()
        },
    );

    let request = Request::builder()
        .uri("/api/menu")
        .header(header::ORIGIN, "https://silverspoon.ng")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://silverspoon.ng"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");

    let request = Request::builder()
        .uri("/api/menu")
        .header(header::ORIGIN, "https://elsewhere.example")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}
