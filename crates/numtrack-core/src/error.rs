//! Error types for `numtrack-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown phone type label: {0:?}")]
  UnknownPhoneType(String),

  #[error("invalid timestamp {value:?}: {reason}")]
  InvalidTimestamp { value: String, reason: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
