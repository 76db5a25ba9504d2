//! Bulk movement of records in and out of the store.

use axum::{
  Json,
  extract::{Multipart, State, multipart::MultipartRejection},
  http::header,
  response::{IntoResponse, Response},
};
use chrono::Utc;
use numtrack_core::store::RecordStore;
use numtrack_tracker::{ImportReport, export, geocode::Geocoder};

use crate::{AppState, error::ApiError};

/// Name of the multipart field carrying the uploaded CSV.
const UPLOAD_FIELD: &str = "file";

fn attachment(content_type: &str, filename: &str, body: Vec<u8>) -> Response {
  (
    [
      (header::CONTENT_TYPE, content_type.to_owned()),
      (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{filename}\"")),
    ],
    body,
  )
    .into_response()
}

/// `GET /export/csv`
pub async fn export_csv<S, G>(State(state): State<AppState<S, G>>) -> Result<Response, ApiError>
where
  S: RecordStore + 'static,
  G: Geocoder + 'static,
{
  let records = state.tracker.list_all().await.map_err(ApiError::store)?;
  let csv = export::to_csv(&records)?;
  Ok(attachment(
    "text/csv; charset=utf-8",
    &export::export_filename("csv", Utc::now()),
    csv.into_bytes(),
  ))
}

/// `GET /export/json`
pub async fn export_json<S, G>(State(state): State<AppState<S, G>>) -> Result<Response, ApiError>
where
  S: RecordStore + 'static,
  G: Geocoder + 'static,
{
  let now = Utc::now();
  let records = state.tracker.list_all().await.map_err(ApiError::store)?;
  let document = export::to_json(&records, now)?;
  let body = serde_json::to_vec_pretty(&document)
    .map_err(|e| ApiError::Internal(e.to_string()))?;
  Ok(attachment("application/json", &export::export_filename("json", now), body))
}

/// `POST /import/csv`: multipart upload with the CSV in field `file`.
pub async fn import_csv<S, G>(
  State(state): State<AppState<S, G>>,
  multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ImportReport>, ApiError>
where
  S: RecordStore + 'static,
  G: Geocoder + 'static,
{
  let mut multipart = multipart?;

  while let Some(field) = multipart.next_field().await? {
    if field.name() != Some(UPLOAD_FIELD) {
      continue;
    }

    let filename = field.file_name().unwrap_or_default().to_owned();
    if filename.is_empty() {
      return Err(ApiError::BadRequest("No file selected".into()));
    }
    if !filename.to_ascii_lowercase().ends_with(".csv") {
      return Err(ApiError::BadRequest(
        "Invalid file format. Please upload a CSV file.".into(),
      ));
    }

    let text = field.text().await?;
    return Ok(Json(state.tracker.import_csv(&text).await));
  }

  Err(ApiError::BadRequest("No file provided".into()))
}

/// `POST /backup`: snapshot the store into the backup directory and return
/// the snapshot.
pub async fn backup<S, G>(State(state): State<AppState<S, G>>) -> Result<Response, ApiError>
where
  S: RecordStore + 'static,
  G: Geocoder + 'static,
{
  tokio::fs::create_dir_all(state.backup_dir.as_path()).await?;

  let filename = export::backup_filename(Utc::now());
  let dest = state.backup_dir.join(&filename);
  state.tracker.backup_to(&dest).await.map_err(ApiError::store)?;

  let bytes = tokio::fs::read(&dest).await?;
  Ok(attachment("application/x-sqlite3", &filename, bytes))
}
