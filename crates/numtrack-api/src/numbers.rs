//! Handlers that read or change tracked records.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/track` | Body `{phone_number, notes?}`; 400 when not tracked |
//! | `GET`    | `/numbers` | `?page`, `?per_page`, `?search` |
//! | `GET`    | `/numbers/{phone_number}` | 404 if absent |
//! | `DELETE` | `/numbers/{phone_number}` | 404 if absent |
//! | `GET`    | `/search` | `?q` required |
//! | `POST`   | `/clear` | Removes every record |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use numtrack_core::{record::PhoneRecord, store::RecordStore};
use numtrack_tracker::geocode::Geocoder;
use serde::{Deserialize, Serialize};

use crate::{
  AppState,
  error::ApiError,
  extract::{ApiJson, ApiQuery},
  pagination::paginate,
};

/// `{success, message}` reply for state-changing calls.
#[derive(Debug, Serialize)]
pub struct Outcome {
  pub success: bool,
  pub message: String,
}

impl Outcome {
  fn ok(message: &str) -> Json<Self> {
    Json(Self { success: true, message: message.into() })
  }

  fn failed(status: StatusCode, message: &str) -> (StatusCode, Json<Self>) {
    (status, Json(Self { success: false, message: message.into() }))
  }
}

// ─── Track ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TrackBody {
  pub phone_number: Option<String>,
  #[serde(default)]
  pub notes:        String,
}

/// `POST /track`
pub async fn track<S, G>(
  State(state): State<AppState<S, G>>,
  ApiJson(body): ApiJson<TrackBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore + 'static,
  G: Geocoder + 'static,
{
  let phone_number = body
    .phone_number
    .filter(|n| !n.trim().is_empty())
    .ok_or_else(|| ApiError::BadRequest("Phone number is required".into()))?;

  Ok(if state.tracker.track(&phone_number, &body.notes).await {
    Outcome::ok("Phone number tracked successfully").into_response()
  } else {
    Outcome::failed(StatusCode::BAD_REQUEST, "Failed to track phone number").into_response()
  })
}

// ─── List ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  pub page:     Option<i64>,
  pub per_page: Option<i64>,
  /// When non-empty, list only records matching this substring.
  pub search:   Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NumberPage {
  pub numbers:  Vec<PhoneRecord>,
  pub total:    usize,
  pub page:     usize,
  pub per_page: usize,
  pub pages:    usize,
}

/// `GET /numbers[?page=..][&per_page=..][&search=..]`
pub async fn list<S, G>(
  State(state): State<AppState<S, G>>,
  ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<NumberPage>, ApiError>
where
  S: RecordStore + 'static,
  G: Geocoder + 'static,
{
  let records = match params.search.as_deref().filter(|q| !q.is_empty()) {
    Some(q) => state.tracker.search(q).await,
    None => state.tracker.list_all().await,
  }
  .map_err(ApiError::store)?;

  let total = records.len();
  let page = paginate(total, params.page, params.per_page);
  let numbers = records
    .into_iter()
    .skip(page.offset)
    .take(page.per_page)
    .collect();

  Ok(Json(NumberPage {
    numbers,
    total,
    page: page.page,
    per_page: page.per_page,
    pages: page.pages,
  }))
}

// ─── Single record ───────────────────────────────────────────────────────────

/// `GET /numbers/{phone_number}`
pub async fn get_one<S, G>(
  State(state): State<AppState<S, G>>,
  Path(phone_number): Path<String>,
) -> Result<Json<PhoneRecord>, ApiError>
where
  S: RecordStore + 'static,
  G: Geocoder + 'static,
{
  state
    .tracker
    .get(&phone_number)
    .await
    .map_err(ApiError::store)?
    .map(Json)
    .ok_or_else(|| ApiError::NotFound(format!("{phone_number} is not tracked")))
}

/// `DELETE /numbers/{phone_number}`
pub async fn delete_one<S, G>(
  State(state): State<AppState<S, G>>,
  Path(phone_number): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore + 'static,
  G: Geocoder + 'static,
{
  let removed = state
    .tracker
    .delete(&phone_number)
    .await
    .map_err(ApiError::store)?;

  Ok(if removed {
    Outcome::ok("Phone number deleted successfully").into_response()
  } else {
    Outcome::failed(StatusCode::NOT_FOUND, "Phone number not found").into_response()
  })
}

// ─── Search ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchParams {
  pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResults {
  pub results: Vec<PhoneRecord>,
  pub count:   usize,
}

/// `GET /search?q=..`
pub async fn search<S, G>(
  State(state): State<AppState<S, G>>,
  ApiQuery(params): ApiQuery<SearchParams>,
) -> Result<Json<SearchResults>, ApiError>
where
  S: RecordStore + 'static,
  G: Geocoder + 'static,
{
  let q = params
    .q
    .filter(|q| !q.trim().is_empty())
    .ok_or_else(|| ApiError::BadRequest("Search query is required".into()))?;

  let results = state.tracker.search(&q).await.map_err(ApiError::store)?;
  Ok(Json(SearchResults { count: results.len(), results }))
}

// ─── Clear ───────────────────────────────────────────────────────────────────

/// `POST /clear`
pub async fn clear<S, G>(
  State(state): State<AppState<S, G>>,
) -> Result<Json<Outcome>, ApiError>
where
  S: RecordStore + 'static,
  G: Geocoder + 'static,
{
  state.tracker.clear().await.map_err(ApiError::store)?;
  Ok(Outcome::ok("All data cleared successfully"))
}
