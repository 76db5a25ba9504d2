//! Error types for `numtrack-tracker`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("csv error: {0}")]
  Csv(#[from] csv::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("i/o error: {0}")]
  Io(#[from] std::io::Error),

  #[error("export is not valid utf-8: {0}")]
  Utf8(#[from] std::string::FromUtf8Error),
}

/// Failure talking to the geocoding service.
///
/// Never surfaced to API callers; the tracker logs it and omits the
/// detailed location.
#[derive(Debug, Error)]
pub enum GeocodeError {
  #[error("geocoder request failed: {0}")]
  Http(#[from] reqwest::Error),

  #[error("geocoder returned an unreadable coordinate: {0:?}")]
  Coordinate(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
