//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure leaves the façade as `{"error": "<message>"}` with a
//! non-2xx status, including rejected request bodies and query strings.

use axum::{
  Json,
  extract::{
    multipart::MultipartError,
    rejection::{JsonRejection, QueryRejection},
  },
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Client-facing messages for server faults. The detail is only logged.
pub const STORE_FAILURE: &str = "storage error";
pub const INTERNAL_FAILURE: &str = "internal server error";

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("internal error: {0}")]
  Internal(String),
}

impl ApiError {
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Store(Box::new(e))
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, STORE_FAILURE.to_owned())
      }
      ApiError::Internal(m) => {
        tracing::error!(error = %m, "internal failure");
        (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_FAILURE.to_owned())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}

// ─── Conversions ─────────────────────────────────────────────────────────────

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self { Self::BadRequest(rejection.body_text()) }
}

impl From<QueryRejection> for ApiError {
  fn from(rejection: QueryRejection) -> Self { Self::BadRequest(rejection.body_text()) }
}

impl From<MultipartError> for ApiError {
  fn from(e: MultipartError) -> Self { Self::BadRequest(e.body_text()) }
}

impl From<axum::extract::multipart::MultipartRejection> for ApiError {
  fn from(rejection: axum::extract::multipart::MultipartRejection) -> Self {
    Self::BadRequest(rejection.body_text())
  }
}

impl From<numtrack_tracker::Error> for ApiError {
  fn from(e: numtrack_tracker::Error) -> Self { Self::Internal(e.to_string()) }
}

impl From<std::io::Error> for ApiError {
  fn from(e: std::io::Error) -> Self { Self::Internal(e.to_string()) }
}
