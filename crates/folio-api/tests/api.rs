//! End-to-end handler tests over an in-memory SQLite store.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
};
use folio_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

async fn app() -> Router {
  let store = SqliteStore::open_in_memory().await.expect("store");
  Router::new().nest("/api", folio_api::api_router(Arc::new(store)))
}

fn post(path: &str, body: Value) -> Request<Body> {
  Request::builder()
    .method("POST")
    .uri(path)
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from(body.to_string()))
    .unwrap()
}

fn get(path: &str) -> Request<Body> {
  Request::builder().uri(path).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
  let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
  let response = app().await.oneshot(get("/api/health")).await.unwrap();
  assert_eq!(response.status(), StatusCode::OK);

  let body = body_json(response).await;
  assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn portfolio_round_trips_an_upsert() {
  let app = app().await;

  let response = app
    .clone()
    .oneshot(post(
      "/api/projects",
      json!({ "id": "proj-1", "title": "Enterprise Ops", "description": "d" }),
    ))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::OK);

  let response = app.oneshot(get("/api/portfolio")).await.unwrap();
  assert_eq!(response.status(), StatusCode::OK);

  let body = body_json(response).await;
  assert_eq!(body["projects"][0]["id"], "proj-1");
  assert_eq!(body["projects"][0]["title"], "Enterprise Ops");
}

#[tokio::test]
async fn upsert_rejects_empty_id() {
  let response = app()
    .await
    .oneshot(post("/api/projects", json!({ "id": "", "title": "nameless" })))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_removes_from_aggregate() {
  let app = app().await;

  app
    .clone()
    .oneshot(post(
      "/api/courses",
      json!({ "id": "c-1", "title": "B2B Mastery", "description": "d" }),
    ))
    .await
    .unwrap();

  let response = app
    .clone()
    .oneshot(
      Request::builder()
        .method("DELETE")
        .uri("/api/courses/c-1")
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::OK);

  let body = body_json(app.oneshot(get("/api/portfolio")).await.unwrap()).await;
  assert_eq!(body["courses"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn mark_message_read_then_aggregate_shows_status() {
  let app = app().await;

  app
    .clone()
    .oneshot(post(
      "/api/messages",
      json!({
        "id": "m-1",
        "name": "Visitor",
        "email": "v@example.com",
        "message": "hello",
        "date": "2025-10-01",
        "status": "new"
      }),
    ))
    .await
    .unwrap();

  let response = app
    .clone()
    .oneshot(
      Request::builder()
        .method("PATCH")
        .uri("/api/messages/m-1/read")
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::OK);

  let body = body_json(app.oneshot(get("/api/portfolio")).await.unwrap()).await;
  assert_eq!(body["messages"][0]["status"], "read");
}

#[tokio::test]
async fn mark_read_missing_message_is_404() {
  let response = app()
    .await
    .oneshot(
      Request::builder()
        .method("PATCH")
        .uri("/api/messages/ghost/read")
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn booking_marks_the_referenced_slot_booked() {
  let app = app().await;

  app
    .clone()
    .oneshot(post(
      "/api/slots",
      json!({
        "id": "slot-1",
        "sessionId": "portfolio-audit",
        "dateTime": "2026-09-01T10:00:00Z",
        "status": "available"
      }),
    ))
    .await
    .unwrap();

  let response = app
    .clone()
    .oneshot(post(
      "/api/bookings",
      json!({
        "id": "book-1",
        "slotId": "slot-1",
        "sessionId": "portfolio-audit",
        "userName": "Visitor",
        "userEmail": "v@example.com",
        "timestamp": "2026-08-30T12:00:00Z"
      }),
    ))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::OK);

  let body = body_json(app.oneshot(get("/api/portfolio")).await.unwrap()).await;
  assert_eq!(body["bookings"][0]["id"], "book-1");
  // The slot is taken out of circulation.
  assert_eq!(body["slots"][0]["status"], "booked");
}

#[tokio::test]
async fn booking_for_an_unknown_slot_still_stores() {
  let app = app().await;

  let response = app
    .clone()
    .oneshot(post(
      "/api/bookings",
      json!({
        "id": "book-2",
        "slotId": "ghost",
        "sessionId": "portfolio-audit",
        "userName": "Visitor",
        "userEmail": "v@example.com",
        "timestamp": "2026-08-30T12:00:00Z"
      }),
    ))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::OK);

  let body = body_json(app.oneshot(get("/api/portfolio")).await.unwrap()).await;
  assert_eq!(body["bookings"][0]["id"], "book-2");
}

#[tokio::test]
async fn about_upsert_replaces_singleton() {
  let app = app().await;

  app
    .clone()
    .oneshot(post(
      "/api/about",
      json!({ "title": "v1", "summary": "s", "philosophy": "p" }),
    ))
    .await
    .unwrap();
  app
    .clone()
    .oneshot(post(
      "/api/about",
      json!({ "title": "v2", "summary": "s", "philosophy": "p" }),
    ))
    .await
    .unwrap();

  let body = body_json(app.oneshot(get("/api/portfolio")).await.unwrap()).await;
  assert_eq!(body["about"]["title"], "v2");
}
