//! Read-only number lookups. None of these touch the store.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/validate` | `{phone_number, is_valid}` |
//! | `POST` | `/info` | Parsed metadata, or `{phone_number, is_valid: false, error}` |
//! | `POST` | `/enhanced-info` | Metadata + synthetic owner + location |
//! | `POST` | `/owner-info` | Synthetic owner profile; 400 if unparseable |
//! | `POST` | `/location-info` | Place description + geocoder hit; 400 if unparseable |

use axum::{Json, extract::State};
use numtrack_core::{
  enrichment::{EnhancedInfo, EnrichmentResult, LocationInfo},
  number::NumberInfo,
  store::RecordStore,
};
use numtrack_tracker::geocode::Geocoder;
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError, extract::ApiJson};

/// Body shared by every lookup endpoint.
#[derive(Debug, Deserialize)]
pub struct NumberBody {
  pub phone_number: Option<String>,
}

impl NumberBody {
  /// The submitted number, or 400 when it is missing or blank.
  pub fn required(self) -> Result<String, ApiError> {
    self
      .phone_number
      .filter(|n| !n.trim().is_empty())
      .ok_or_else(|| ApiError::BadRequest("Phone number is required".into()))
  }
}

#[derive(Debug, Serialize)]
pub struct Validity {
  pub phone_number: String,
  pub is_valid:     bool,
}

/// `POST /validate`
pub async fn validate<S, G>(
  State(state): State<AppState<S, G>>,
  ApiJson(body): ApiJson<NumberBody>,
) -> Result<Json<Validity>, ApiError>
where
  S: RecordStore + 'static,
  G: Geocoder + 'static,
{
  let phone_number = body.required()?;
  let is_valid = state.tracker.validate(&phone_number);
  Ok(Json(Validity { phone_number, is_valid }))
}

/// `POST /info`
pub async fn info<S, G>(
  State(state): State<AppState<S, G>>,
  ApiJson(body): ApiJson<NumberBody>,
) -> Result<Json<NumberInfo>, ApiError>
where
  S: RecordStore + 'static,
  G: Geocoder + 'static,
{
  let phone_number = body.required()?;
  let info = match state.tracker.info(&phone_number) {
    Ok(parsed) => NumberInfo::Parsed(parsed),
    Err(e) => NumberInfo::unparseable(&phone_number, e),
  };
  Ok(Json(info))
}

/// `POST /enhanced-info`
pub async fn enhanced<S, G>(
  State(state): State<AppState<S, G>>,
  ApiJson(body): ApiJson<NumberBody>,
) -> Result<Json<EnhancedInfo>, ApiError>
where
  S: RecordStore + 'static,
  G: Geocoder + 'static,
{
  let phone_number = body.required()?;
  Ok(Json(state.tracker.enhanced_lookup(&phone_number).await))
}

/// `POST /owner-info`
pub async fn owner<S, G>(
  State(state): State<AppState<S, G>>,
  ApiJson(body): ApiJson<NumberBody>,
) -> Result<Json<EnrichmentResult>, ApiError>
where
  S: RecordStore + 'static,
  G: Geocoder + 'static,
{
  let phone_number = body.required()?;
  state
    .tracker
    .owner_lookup(&phone_number)
    .map(Json)
    .map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// `POST /location-info`
pub async fn location<S, G>(
  State(state): State<AppState<S, G>>,
  ApiJson(body): ApiJson<NumberBody>,
) -> Result<Json<LocationInfo>, ApiError>
where
  S: RecordStore + 'static,
  G: Geocoder + 'static,
{
  let phone_number = body.required()?;
  state
    .tracker
    .location_lookup(&phone_number)
    .await
    .map(Json)
    .map_err(|e| ApiError::BadRequest(e.to_string()))
}
