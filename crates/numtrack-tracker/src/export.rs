//! CSV and JSON renderings of the store, and the reverse path for CSV
//! imports.
//!
//! The CSV layout is shared by both directions: an export can be fed back to
//! [`parse_import`] unchanged. Only the number (column 0) and the notes
//! (column 7) are read back; everything else is re-derived on import.

use chrono::{DateTime, Utc};
use serde::Serialize;

use numtrack_core::{record::PhoneRecord, timestamp};

use crate::Result;

pub const CSV_HEADER: [&str; 8] = [
  "Phone Number",
  "Carrier",
  "Region",
  "Timezone",
  "Phone Type",
  "Date Added",
  "Last Tracked",
  "Notes",
];

const NUMBER_COLUMN: usize = 0;
const NOTES_COLUMN: usize = 7;

/// Separator between timezones within the single `Timezone` cell.
const TIMEZONE_SEPARATOR: &str = ";";

// ─── Export ──────────────────────────────────────────────────────────────────

pub fn to_csv(records: &[PhoneRecord]) -> Result<String> {
  let mut writer = csv::Writer::from_writer(Vec::new());
  writer.write_record(CSV_HEADER)?;

  for r in records {
    let timezones = r.timezones.join(TIMEZONE_SEPARATOR);
    let date_added = timestamp::format(r.date_added);
    let last_tracked = timestamp::format(r.last_tracked);
    writer.write_record([
      r.phone_number.as_str(),
      r.carrier.as_deref().unwrap_or_default(),
      r.region.as_deref().unwrap_or_default(),
      timezones.as_str(),
      r.phone_type.label(),
      date_added.as_str(),
      last_tracked.as_str(),
      r.notes.as_str(),
    ])?;
  }

  let bytes = writer.into_inner().map_err(|e| e.into_error())?;
  Ok(String::from_utf8(bytes)?)
}

#[derive(Serialize)]
struct JsonExport<'a> {
  export_date:   String,
  total_records: usize,
  data:          &'a [PhoneRecord],
}

/// `{export_date, total_records, data}`.
pub fn to_json(records: &[PhoneRecord], now: DateTime<Utc>) -> Result<serde_json::Value> {
  Ok(serde_json::to_value(JsonExport {
    export_date:   timestamp::format(now),
    total_records: records.len(),
    data:          records,
  })?)
}

/// `numtrack_<YYYYMMDD_HHMMSS>.<ext>`
pub fn export_filename(ext: &str, now: DateTime<Utc>) -> String {
  format!("numtrack_{}.{ext}", now.format("%Y%m%d_%H%M%S"))
}

/// Millisecond resolution keeps back-to-back backups from colliding.
pub fn backup_filename(now: DateTime<Utc>) -> String {
  format!("numtrack_backup_{}.db", now.format("%Y%m%d_%H%M%S_%3f"))
}

// ─── Import ──────────────────────────────────────────────────────────────────

/// One data row of an uploaded CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportRow {
  Entry { phone_number: String, notes: String },
  /// `row` counts data rows from 1, excluding the header.
  Malformed { row: usize, reason: String },
}

/// Read the rows of an uploaded CSV. The first line is always treated as a
/// header. Rows with an empty number cell are skipped.
pub fn parse_import(text: &str) -> Vec<ImportRow> {
  let mut reader = csv::ReaderBuilder::new()
    .has_headers(true)
    .flexible(true)
    .from_reader(text.as_bytes());

  reader
    .records()
    .enumerate()
    .filter_map(|(i, row)| match row {
      Ok(row) => {
        let phone_number = row.get(NUMBER_COLUMN).unwrap_or_default().trim();
        (!phone_number.is_empty()).then(|| ImportRow::Entry {
          phone_number: phone_number.to_owned(),
          notes:        row.get(NOTES_COLUMN).unwrap_or_default().to_owned(),
        })
      }
      Err(e) => Some(ImportRow::Malformed { row: i + 1, reason: e.to_string() }),
    })
    .collect()
}
