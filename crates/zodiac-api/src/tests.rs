//! Router tests against a JSON store in a temporary directory.

use std::sync::Arc;

use axum::{
  body::Body,
  http::{Request, StatusCode, header},
  response::Response,
};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt as _;
use zodiac_core::PersonListService;
use zodiac_store_json::JsonFileStore;

use crate::{PersonView, api_router};

struct Harness {
  _dir:    TempDir,
  service: Arc<PersonListService<JsonFileStore>>,
}

async fn harness() -> Harness {
  let dir = TempDir::new().unwrap();
  let store = JsonFileStore::new(dir.path().join("Storage").join("storage.json"));
  let service = PersonListService::open(store).await.unwrap();
  Harness { _dir: dir, service: Arc::new(service) }
}

async fn send(h: &Harness, method: &str, uri: &str, body: Option<Value>) -> Response {
  let builder = Request::builder().method(method).uri(uri);
  let req = match body {
    Some(v) => builder
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(v.to_string()))
      .unwrap(),
    None => builder.body(Body::empty()).unwrap(),
  };
  api_router(h.service.clone()).oneshot(req).await.unwrap()
}

async fn json_body(resp: Response) -> Value {
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

async fn views(resp: Response) -> Vec<PersonView> {
  serde_json::from_value(json_body(resp).await).unwrap()
}

fn grace() -> Value {
  json!({
    "FirstName": "Grace",
    "LastName":  "Hopper",
    "BirthDate": "09-12-1906",
    "Email":     "grace@example.com",
  })
}

// ── People ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_returns_the_seed() {
  let h = harness().await;
  let resp = send(&h, "GET", "/people", None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(views(resp).await.len(), 50);
}

#[tokio::test]
async fn get_renders_derived_fields() {
  let h = harness().await;
  let resp = send(&h, "GET", "/people/0", None).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let body = json_body(resp).await;
  assert_eq!(body["FirstName"], "Aa");
  assert_eq!(body["BirthDate"], "01-01-1900");
  assert_eq!(body["IsAdult"], true);
  assert_eq!(body["ChineseSign"], "Rat 🐀");
  assert_eq!(body["WesternSign"], "Capricorn ♑");
}

#[tokio::test]
async fn out_of_range_indices_return_404() {
  let h = harness().await;
  for uri in ["/people/50", "/people/-1"] {
    let resp = send(&h, "GET", uri, None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    let body = json_body(resp).await;
    assert!(body["error"].as_str().unwrap().contains("out of range"), "{body}");
  }
}

#[tokio::test]
async fn unrepresentable_indices_return_404_json() {
  let h = harness().await;
  let huge = "/people/99999999999999999999";
  let cases = [
    ("GET", "/people/-99999999999999999999", None),
    ("GET", huge, None),
    ("PUT", huge, Some(grace())),
    ("DELETE", huge, None),
  ];
  for (method, uri, body) in cases {
    let resp = send(&h, method, uri, body).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{method} {uri}");
    let body = json_body(resp).await;
    assert!(body["error"].as_str().unwrap().contains("out of range"), "{body}");
  }
  assert_eq!(h.service.len().await, 50);
}

#[tokio::test]
async fn post_appends_and_get_returns_it() {
  let h = harness().await;
  let resp = send(&h, "POST", "/people", Some(grace())).await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  assert_eq!(json_body(resp).await["len"], 51);

  let body = json_body(send(&h, "GET", "/people/50", None).await).await;
  assert_eq!(body["Email"], "grace@example.com");
  assert_eq!(body["ChineseSign"], "Horse 🐎");
}

#[tokio::test]
async fn post_with_bad_date_returns_400() {
  let h = harness().await;
  let mut body = grace();
  body["BirthDate"] = json!("1906-12-09");
  let resp = send(&h, "POST", "/people", Some(body)).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(h.service.len().await, 50);
}

#[tokio::test]
async fn put_replaces_and_delete_removes() {
  let h = harness().await;
  let resp = send(&h, "PUT", "/people/2", Some(grace())).await;
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);

  let resp = send(&h, "DELETE", "/people/2", None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(json_body(resp).await["FirstName"], "Grace");
  assert_eq!(h.service.len().await, 49);

  let resp = send(&h, "DELETE", "/people/49", None).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ── Sort / filter ────────────────────────────────────────────────────────────

#[tokio::test]
async fn sort_toggles_between_calls() {
  let h = harness().await;
  let first = views(send(&h, "POST", "/sort/birth_date", None).await).await;
  assert_eq!(first[0].email, "MyMail0@gmail.com");

  let second = views(send(&h, "POST", "/sort/birth_date", None).await).await;
  assert_eq!(second[0].email, "MyMail49@gmail.com");
}

#[tokio::test]
async fn unknown_field_returns_400() {
  let h = harness().await;
  let resp = send(&h, "POST", "/sort/shoe_size", None).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let resp = send(&h, "DELETE", "/filters/shoe_size", None).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn apply_and_remove_filter() {
  let h = harness().await;
  let resp = send(&h, "PUT", "/filters/email", Some(json!({ "value": "mymail1" }))).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(views(resp).await.len(), 11);

  let current = views(send(&h, "GET", "/filters", None).await).await;
  assert_eq!(current.len(), 11);

  let all = views(send(&h, "DELETE", "/filters/email", None).await).await;
  assert_eq!(all.len(), 50);
}
