//! Error type for `numtrack-store-sqlite`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] numtrack_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  /// `VACUUM INTO` needs a UTF-8 path that does not exist yet.
  #[error("invalid backup destination: {0}")]
  BackupDestination(PathBuf),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
