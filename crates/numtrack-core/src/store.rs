//! The `RecordStore` trait.
//!
//! Implemented by storage backends (e.g. `numtrack-store-sqlite`). The
//! tracker service and the HTTP façade depend on this abstraction, not on
//! any concrete backend.

use std::{future::Future, path::Path};

use crate::record::{NewRecord, PhoneRecord};

/// Abstraction over the single-table phone record store.
///
/// All methods return `Send` futures so the trait can be used from axum
/// handlers on a multi-threaded tokio runtime.
pub trait RecordStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Insert `record`, or overwrite every derived field, the notes and
  /// `last_tracked` of the existing row with the same number. `date_added`
  /// is only assigned on first insert. Returns the stored row.
  fn upsert(
    &self,
    record: NewRecord,
  ) -> impl Future<Output = Result<PhoneRecord, Self::Error>> + Send + '_;

  /// Remove one record. Returns `true` iff a row was removed.
  fn delete<'a>(
    &'a self,
    phone_number: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// Remove every record. Returns the number of rows removed.
  fn clear(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  fn get<'a>(
    &'a self,
    phone_number: &'a str,
  ) -> impl Future<Output = Result<Option<PhoneRecord>, Self::Error>> + Send + 'a;

  /// All records, most recently added first.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<PhoneRecord>, Self::Error>> + Send + '_;

  /// Records where `query` is a substring of the number, carrier, region or
  /// notes, ignoring ASCII case only. Same ordering as [`Self::list_all`].
  fn search<'a>(
    &'a self,
    query: &'a str,
  ) -> impl Future<Output = Result<Vec<PhoneRecord>, Self::Error>> + Send + 'a;

  fn count(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  // ── Maintenance ───────────────────────────────────────────────────────

  /// Write a consistent snapshot of the whole store to `dest`, which must
  /// not already exist.
  fn backup_to<'a>(
    &'a self,
    dest: &'a Path,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
