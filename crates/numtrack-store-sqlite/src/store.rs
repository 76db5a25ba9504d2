//! [`SqliteStore`], the SQLite implementation of [`RecordStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use tracing::debug;

use numtrack_core::{
  record::{NewRecord, PhoneRecord},
  store::RecordStore,
};

use crate::{
  encode::{RawRecord, encode_dt, encode_phone_type, encode_timezones, like_pattern},
  schema::{NEWEST_FIRST, RECORD_COLUMNS, SCHEMA},
  Error, Result,
};

/// Insert, or overwrite everything but identity and `date_added`.
const UPSERT: &str = "
INSERT INTO phone_records (
  phone_number, carrier, region, timezones, is_valid,
  phone_type, date_added, last_tracked, notes
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7, ?8)
ON CONFLICT (phone_number) DO UPDATE SET
  carrier      = excluded.carrier,
  region       = excluded.region,
  timezones    = excluded.timezones,
  is_valid     = excluded.is_valid,
  phone_type   = excluded.phone_type,
  last_tracked = excluded.last_tracked,
  notes        = excluded.notes";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A numtrack record store backed by a single SQLite file.
///
/// Cheap to clone: the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    debug!(path = %path.as_ref().display(), "opening record store");
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn select_many(
    &self,
    filter: &'static str,
    pattern: Option<String>,
  ) -> Result<Vec<PhoneRecord>> {
    let raws: Vec<RawRecord> = self
      .conn
      .call(move |conn| {
        let sql =
          format!("SELECT {RECORD_COLUMNS} FROM phone_records {filter} {NEWEST_FIRST}");
        let mut stmt = conn.prepare(&sql)?;
        let rows = match pattern {
          Some(p) => stmt
            .query_map(rusqlite::params![p], RawRecord::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?,
          None => stmt
            .query_map([], RawRecord::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?,
        };
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRecord::into_record).collect()
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  type Error = Error;

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn upsert(&self, record: NewRecord) -> Result<PhoneRecord> {
    let tracked_at_str = encode_dt(Utc::now());
    let timezones_str  = encode_timezones(&record.timezones)?;
    let phone_type_str = encode_phone_type(record.phone_type);
    let NewRecord { phone_number, carrier, region, is_valid, notes, .. } = record;

    let raw: RawRecord = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          UPSERT,
          rusqlite::params![
            phone_number,
            carrier,
            region,
            timezones_str,
            is_valid,
            phone_type_str,
            tracked_at_str,
            notes,
          ],
        )?;
        let raw = tx.query_row(
          &format!("SELECT {RECORD_COLUMNS} FROM phone_records WHERE phone_number = ?1"),
          rusqlite::params![phone_number],
          RawRecord::from_row,
        )?;
        tx.commit()?;
        Ok(raw)
      })
      .await?;

    debug!(phone_number = %raw.phone_number, "upserted record");
    raw.into_record()
  }

  async fn delete(&self, phone_number: &str) -> Result<bool> {
    let number = phone_number.to_owned();

    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM phone_records WHERE phone_number = ?1",
          rusqlite::params![number],
        )?)
      })
      .await?;

    debug!(phone_number, removed, "deleted record");
    Ok(removed > 0)
  }

  async fn clear(&self) -> Result<u64> {
    let removed = self
      .conn
      .call(|conn| Ok(conn.execute("DELETE FROM phone_records", [])?))
      .await?;

    debug!(removed, "cleared record store");
    Ok(removed as u64)
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn get(&self, phone_number: &str) -> Result<Option<PhoneRecord>> {
    let number = phone_number.to_owned();

    let raw: Option<RawRecord> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {RECORD_COLUMNS} FROM phone_records WHERE phone_number = ?1"),
            rusqlite::params![number],
            RawRecord::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawRecord::into_record).transpose()
  }

  async fn list_all(&self) -> Result<Vec<PhoneRecord>> {
    self.select_many("", None).await
  }

  async fn search(&self, query: &str) -> Result<Vec<PhoneRecord>> {
    // LIKE is case-insensitive for ASCII in SQLite.
    self
      .select_many(
        "WHERE phone_number LIKE ?1 ESCAPE '\\'
            OR carrier      LIKE ?1 ESCAPE '\\'
            OR region       LIKE ?1 ESCAPE '\\'
            OR notes        LIKE ?1 ESCAPE '\\'",
        Some(like_pattern(query)),
      )
      .await
  }

  async fn count(&self) -> Result<u64> {
    let n: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM phone_records", [], |r| r.get(0))?)
      })
      .await?;
    Ok(n as u64)
  }

  // ── Maintenance ───────────────────────────────────────────────────────────

  async fn backup_to(&self, dest: &Path) -> Result<()> {
    let dest_str = dest
      .to_str()
      .ok_or_else(|| Error::BackupDestination(dest.to_path_buf()))?
      .to_owned();

    self
      .conn
      .call(move |conn| {
        conn.execute("VACUUM INTO ?1", rusqlite::params![dest_str])?;
        Ok(())
      })
      .await?;

    debug!(dest = %dest.display(), "wrote store snapshot");
    Ok(())
  }
}
