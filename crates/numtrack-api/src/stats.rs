//! `GET /health` and `GET /stats`.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use numtrack_core::store::RecordStore;
use numtrack_tracker::{geocode::Geocoder, stats::Statistics};
use serde::Serialize;

use crate::{AppState, error::ApiError};

#[derive(Debug, Serialize)]
pub struct Health {
  pub status:    &'static str,
  pub timestamp: DateTime<Utc>,
  pub version:   &'static str,
}

/// `GET /health`: liveness only; does not touch the store.
pub async fn health() -> Json<Health> {
  Json(Health {
    status:    "healthy",
    timestamp: Utc::now(),
    version:   env!("CARGO_PKG_VERSION"),
  })
}

/// `GET /stats`
pub async fn stats<S, G>(
  State(state): State<AppState<S, G>>,
) -> Result<Json<Statistics>, ApiError>
where
  S: RecordStore + 'static,
  G: Geocoder + 'static,
{
  let stats = state
    .tracker
    .statistics(Utc::now())
    .await
    .map_err(ApiError::store)?;
  Ok(Json(stats))
}
