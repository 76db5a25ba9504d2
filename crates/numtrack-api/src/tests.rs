//! End-to-end tests driving the full router with `oneshot`.

use axum::{
  body::Body,
  http::{Request, StatusCode, header},
  response::Response,
};
use std::{io, path::Path};

use numtrack_core::{
  record::{NewRecord, PhoneRecord},
  store::RecordStore,
};
use numtrack_store_sqlite::SqliteStore;
use numtrack_tracker::{Tracker, geocode::GeocoderClient};
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::{
  AppState, app,
  error::{INTERNAL_FAILURE, STORE_FAILURE},
};

struct Harness {
  state:   AppState<SqliteStore>,
  // Owns the backup directory for the life of the test.
  _backup: tempfile::TempDir,
}

async fn harness() -> Harness {
  let store = SqliteStore::open_in_memory().await.unwrap();
  let backup = tempfile::tempdir().unwrap();
  let tracker = Tracker::new(store, GeocoderClient::Disabled);
  Harness {
    state:   AppState::new(tracker, backup.path().join("backups")),
    _backup: backup,
  }
}

impl Harness {
  async fn send(&self, req: Request<Body>) -> Response {
    app(self.state.clone()).oneshot(req).await.unwrap()
  }

  async fn get(&self, uri: &str) -> Response {
    self
      .send(Request::get(uri).body(Body::empty()).unwrap())
      .await
  }

  async fn post_json(&self, uri: &str, body: Value) -> Response {
    self
      .send(
        Request::post(uri)
          .header(header::CONTENT_TYPE, "application/json")
          .body(Body::from(body.to_string()))
          .unwrap(),
      )
      .await
  }

  async fn track(&self, number: &str, notes: &str) {
    let resp = self
      .post_json("/api/track", json!({ "phone_number": number, "notes": notes }))
      .await;
    assert_eq!(resp.status(), StatusCode::OK);
  }
}

async fn body_bytes(resp: Response) -> Vec<u8> {
  axum::body::to_bytes(resp.into_body(), usize::MAX)
    .await
    .unwrap()
    .to_vec()
}

async fn body_json(resp: Response) -> Value {
  serde_json::from_slice(&body_bytes(resp).await).unwrap()
}

// ── Health and lookups ──────────────────────────────────────────────────────

#[tokio::test]
async fn health_reports_healthy() {
  let h = harness().await;
  let resp = h.get("/api/health").await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body = body_json(resp).await;
  assert_eq!(body["status"], "healthy");
  assert!(body["version"].is_string());
}

#[tokio::test]
async fn validate_reports_validity() {
  let h = harness().await;

  let body = body_json(
    h.post_json("/api/validate", json!({ "phone_number": "+2348012345678" }))
      .await,
  )
  .await;
  assert_eq!(body, json!({ "phone_number": "+2348012345678", "is_valid": true }));

  let body = body_json(
    h.post_json("/api/validate", json!({ "phone_number": "+12345678" })).await,
  )
  .await;
  assert_eq!(body["is_valid"], false);
}

#[tokio::test]
async fn missing_number_is_bad_request() {
  let h = harness().await;
  for uri in ["/api/validate", "/api/info", "/api/track", "/api/owner-info"] {
    let resp = h.post_json(uri, json!({})).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
    assert_eq!(body_json(resp).await["error"], "Phone number is required");
  }
}

#[tokio::test]
async fn malformed_json_uses_error_envelope() {
  let h = harness().await;
  let resp = h
    .send(
      Request::post("/api/validate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap(),
    )
    .await;
  assert!(resp.status().is_client_error());
  assert!(body_json(resp).await["error"].is_string());
}

#[tokio::test]
async fn info_flattens_parsed_metadata() {
  let h = harness().await;
  let body = body_json(
    h.post_json("/api/info", json!({ "phone_number": "+442071838750" })).await,
  )
  .await;
  assert_eq!(body["phone_number"], "+442071838750");
  assert_eq!(body["is_valid"], true);
  assert_eq!(body["region"], "GB");
  assert_eq!(body["phone_type"], "Landline");
  assert_eq!(body["location"], "London");
}

#[tokio::test]
async fn info_on_garbage_reports_error() {
  let h = harness().await;
  let resp = h.post_json("/api/info", json!({ "phone_number": "abc#" })).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body = body_json(resp).await;
  assert_eq!(body["phone_number"], "abc#");
  assert_eq!(body["is_valid"], false);
  assert!(body["error"].is_string());
}

#[tokio::test]
async fn owner_info_is_marked_synthetic() {
  let h = harness().await;
  let resp = h
    .post_json("/api/owner-info", json!({ "phone_number": "+2348012345678" }))
    .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body = body_json(resp).await;
  assert_eq!(body["provenance"], "synthetic");
  assert!(body["disclaimer"].is_string());

  let resp = h
    .post_json("/api/owner-info", json!({ "phone_number": "###" }))
    .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn location_info_without_geocoder_has_no_detail() {
  let h = harness().await;
  let body = body_json(
    h.post_json("/api/location-info", json!({ "phone_number": "+442071838750" }))
      .await,
  )
  .await;
  assert_eq!(body["basic_location"], "London");
  assert!(body["detailed_location"].is_null());
}

#[tokio::test]
async fn enhanced_info_merges_sections() {
  let h = harness().await;
  let body = body_json(
    h.post_json("/api/enhanced-info", json!({ "phone_number": "+2348012345678" }))
      .await,
  )
  .await;
  assert_eq!(body["is_valid"], true);
  assert_eq!(body["owner_info"]["provenance"], "synthetic");
  assert_eq!(body["location_info"]["region"], "NG");
  assert!(body["analysis_timestamp"].is_string());
}

// ── Records ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn track_invalid_number_is_rejected() {
  let h = harness().await;
  let resp = h
    .post_json("/api/track", json!({ "phone_number": "+12345678" }))
    .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(body_json(resp).await["success"], false);

  let page = body_json(h.get("/api/numbers").await).await;
  assert_eq!(page["total"], 0);
}

#[tokio::test]
async fn numbers_are_paginated_newest_first() {
  let h = harness().await;
  h.track("+2348012345678", "one").await;
  h.track("+447911123456", "two").await;
  h.track("+442071838750", "three").await;

  let page = body_json(h.get("/api/numbers?page=1&per_page=2").await).await;
  assert_eq!(page["total"], 3);
  assert_eq!(page["pages"], 2);
  assert_eq!(page["numbers"].as_array().unwrap().len(), 2);
  assert_eq!(page["numbers"][0]["phone_number"], "+442071838750");

  let page = body_json(h.get("/api/numbers?page=2&per_page=2").await).await;
  assert_eq!(page["numbers"][0]["phone_number"], "+2348012345678");

  let page = body_json(h.get("/api/numbers?page=0").await).await;
  assert_eq!(page["page"], 1);
  assert_eq!(page["per_page"], 50);
}

#[tokio::test]
async fn numbers_filter_by_search() {
  let h = harness().await;
  h.track("+2348012345678", "lagos").await;
  h.track("+447911123456", "london").await;

  let page = body_json(h.get("/api/numbers?search=LAGOS").await).await;
  assert_eq!(page["total"], 1);
  assert_eq!(page["numbers"][0]["notes"], "lagos");
}

#[tokio::test]
async fn non_numeric_page_is_bad_request() {
  let h = harness().await;
  let resp = h.get("/api/numbers?page=first").await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert!(body_json(resp).await["error"].is_string());
}

#[tokio::test]
async fn get_and_delete_single_record() {
  let h = harness().await;
  h.track("+2348012345678", "").await;

  let resp = h.get("/api/numbers/+2348012345678").await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(body_json(resp).await["region"], "NG");

  let delete = || {
    Request::delete("/api/numbers/+2348012345678")
      .body(Body::empty())
      .unwrap()
  };
  let resp = h.send(delete()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(body_json(resp).await["success"], true);

  let resp = h.send(delete()).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);

  let resp = h.get("/api/numbers/+2348012345678").await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  assert!(body_json(resp).await["error"].is_string());
}

#[tokio::test]
async fn search_requires_query() {
  let h = harness().await;
  h.track("+2348012345678", "office").await;

  let resp = h.get("/api/search").await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(body_json(resp).await["error"], "Search query is required");

  let body = body_json(h.get("/api/search?q=OFF").await).await;
  assert_eq!(body["count"], 1);
}

#[tokio::test]
async fn clear_empties_the_store() {
  let h = harness().await;
  h.track("+2348012345678", "").await;
  h.track("+447911123456", "").await;

  let resp = h.post_json("/api/clear", json!({})).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let stats = body_json(h.get("/api/stats").await).await;
  assert_eq!(stats["total_numbers"], 0);
}

#[tokio::test]
async fn stats_summarise_records() {
  let h = harness().await;
  h.track("+2348012345678", "").await;
  h.track("+442071838750", "").await;

  let stats = body_json(h.get("/api/stats").await).await;
  assert_eq!(stats["total_numbers"], 2);
  assert_eq!(stats["valid_numbers"], 2);
  assert_eq!(stats["invalid_numbers"], 0);
  assert_eq!(stats["recent_activity"], 2);
  assert_eq!(stats["phone_type_distribution"]["Mobile"], 1);
  assert_eq!(stats["carrier_distribution"]["Unknown"], 1);
}

// ── Transfer ────────────────────────────────────────────────────────────────

fn multipart(filename: &str, content: &str) -> Request<Body> {
  let boundary = "numtrack-test-boundary";
  let body = format!(
    "--{boundary}\r\n\
     Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
     Content-Type: text/csv\r\n\r\n\
     {content}\r\n\
     --{boundary}--\r\n"
  );
  Request::post("/api/import/csv")
    .header(
      header::CONTENT_TYPE,
      format!("multipart/form-data; boundary={boundary}"),
    )
    .body(Body::from(body))
    .unwrap()
}

#[tokio::test]
async fn csv_export_is_an_attachment_that_imports_back() {
  let source = harness().await;
  source.track("+2348012345678", "first").await;
  source.track("+447911123456", "second").await;

  let resp = source.get("/api/export/csv").await;
  assert_eq!(resp.status(), StatusCode::OK);
  let disposition = resp.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_owned();
  assert!(disposition.starts_with("attachment; filename=\"numtrack_"));
  assert!(disposition.ends_with(".csv\""));
  let csv = String::from_utf8(body_bytes(resp).await).unwrap();

  let target = harness().await;
  let resp = target.send(multipart("export.csv", &csv)).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let report = body_json(resp).await;
  assert_eq!(report, json!({ "imported": 2, "errors": [], "total": 2 }));

  let page = body_json(target.get("/api/numbers").await).await;
  let mut numbers: Vec<_> = page["numbers"]
    .as_array()
    .unwrap()
    .iter()
    .map(|r| r["phone_number"].as_str().unwrap().to_owned())
    .collect();
  numbers.sort();
  assert_eq!(numbers, ["+2348012345678", "+447911123456"]);
}

#[tokio::test]
async fn import_rejects_non_csv_upload() {
  let h = harness().await;
  let resp = h.send(multipart("numbers.txt", "Phone Number\n+2348012345678")).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(
    body_json(resp).await["error"],
    "Invalid file format. Please upload a CSV file."
  );
}

#[tokio::test]
async fn import_reports_invalid_rows() {
  let h = harness().await;
  let resp = h
    .send(multipart("numbers.csv", "Phone Number\n+2348012345678\n+12345678"))
    .await;
  let report = body_json(resp).await;
  assert_eq!(report["imported"], 1);
  assert_eq!(report["errors"], json!(["Invalid number: +12345678"]));
  assert_eq!(report["total"], 2);
}

#[tokio::test]
async fn json_export_has_envelope() {
  let h = harness().await;
  h.track("+2348012345678", "").await;

  let resp = h.get("/api/export/json").await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
  let body = body_json(resp).await;
  assert_eq!(body["total_records"], 1);
  assert_eq!(body["data"][0]["phone_number"], "+2348012345678");
  assert!(body["export_date"].is_string());
}

#[tokio::test]
async fn backup_returns_sqlite_snapshot() {
  let h = harness().await;
  h.track("+2348012345678", "").await;

  let resp = h.post_json("/api/backup", json!({})).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/x-sqlite3");
  let bytes = body_bytes(resp).await;
  assert!(bytes.starts_with(b"SQLite format 3\0"));

  let written = std::fs::read_dir(h.state.backup_dir.as_path()).unwrap().count();
  assert_eq!(written, 1);
}

// ── Server faults ───────────────────────────────────────────────────────────

/// A store whose every call fails, or panics when `panics` is set.
struct BrokenStore {
  panics: bool,
}

impl BrokenStore {
  fn fail<T>(&self) -> Result<T, io::Error> {
    if self.panics {
      panic!("store invariant violated");
    }
    Err(io::Error::other("database disk image is malformed"))
  }
}

impl RecordStore for BrokenStore {
  type Error = io::Error;

  async fn upsert(&self, _: NewRecord) -> Result<PhoneRecord, io::Error> { self.fail() }

  async fn delete(&self, _: &str) -> Result<bool, io::Error> { self.fail() }

  async fn clear(&self) -> Result<u64, io::Error> { self.fail() }

  async fn get(&self, _: &str) -> Result<Option<PhoneRecord>, io::Error> { self.fail() }

  async fn list_all(&self) -> Result<Vec<PhoneRecord>, io::Error> { self.fail() }

  async fn search(&self, _: &str) -> Result<Vec<PhoneRecord>, io::Error> { self.fail() }

  async fn count(&self) -> Result<u64, io::Error> { self.fail() }

  async fn backup_to(&self, _: &Path) -> Result<(), io::Error> { self.fail() }
}

async fn send_broken(panics: bool, req: Request<Body>) -> Response {
  let backup = tempfile::tempdir().unwrap();
  let tracker = Tracker::new(BrokenStore { panics }, GeocoderClient::Disabled);
  let state = AppState::new(tracker, backup.path().join("backups"));
  app(state).oneshot(req).await.unwrap()
}

#[tokio::test]
async fn store_failure_is_a_500_without_the_underlying_message() {
  for uri in ["/api/numbers", "/api/stats", "/api/numbers/+2348012345678"] {
    let resp = send_broken(false, Request::get(uri).body(Body::empty()).unwrap()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
    let body = body_json(resp).await;
    assert_eq!(body["error"], STORE_FAILURE);
    assert!(!body["error"].as_str().unwrap().contains("malformed"));
  }
}

#[tokio::test]
async fn track_over_a_failing_store_reports_failure() {
  let req = Request::post("/api/track")
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from(json!({ "phone_number": "+2348012345678" }).to_string()))
    .unwrap();
  let resp = send_broken(false, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(body_json(resp).await["success"], false);
}

#[tokio::test]
async fn handler_panic_becomes_a_500_envelope() {
  let resp = send_broken(true, Request::get("/api/numbers").body(Body::empty()).unwrap()).await;
  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  assert_eq!(body_json(resp).await["error"], INTERNAL_FAILURE);
}
