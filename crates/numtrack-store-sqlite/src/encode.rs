//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are fixed-width RFC 3339 strings (see
//! [`numtrack_core::timestamp`]). Timezone lists are compact JSON arrays.
//! Phone types are stored by their display label.

use chrono::{DateTime, Utc};
use numtrack_core::{
  record::{PhoneRecord, PhoneType},
  timestamp,
};

use crate::Result;

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { timestamp::format(dt) }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> { Ok(timestamp::parse(s)?) }

// ─── Timezones ───────────────────────────────────────────────────────────────

pub fn encode_timezones(zones: &[String]) -> Result<String> {
  Ok(serde_json::to_string(zones)?)
}

pub fn decode_timezones(s: &str) -> Result<Vec<String>> {
  Ok(serde_json::from_str(s)?)
}

// ─── PhoneType ───────────────────────────────────────────────────────────────

pub fn encode_phone_type(kind: PhoneType) -> &'static str { kind.label() }

pub fn decode_phone_type(s: &str) -> Result<PhoneType> {
  Ok(PhoneType::from_label(s)?)
}

// ─── Search patterns ─────────────────────────────────────────────────────────

/// Wrap `query` for `LIKE … ESCAPE '\'`, so `%` and `_` match literally.
pub fn like_pattern(query: &str) -> String {
  let mut pattern = String::with_capacity(query.len() + 2);
  pattern.push('%');
  for c in query.chars() {
    if matches!(c, '%' | '_' | '\\') {
      pattern.push('\\');
    }
    pattern.push(c);
  }
  pattern.push('%');
  pattern
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw values read directly from a `phone_records` row.
pub struct RawRecord {
  pub phone_number: String,
  pub carrier:      Option<String>,
  pub region:       Option<String>,
  pub timezones:    String,
  pub is_valid:     bool,
  pub phone_type:   String,
  pub date_added:   String,
  pub last_tracked: String,
  pub notes:        String,
}

impl RawRecord {
  /// Read a row selected with [`RECORD_COLUMNS`](crate::schema::RECORD_COLUMNS).
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      phone_number: row.get(0)?,
      carrier:      row.get(1)?,
      region:       row.get(2)?,
      timezones:    row.get(3)?,
      is_valid:     row.get(4)?,
      phone_type:   row.get(5)?,
      date_added:   row.get(6)?,
      last_tracked: row.get(7)?,
      notes:        row.get(8)?,
    })
  }

  pub fn into_record(self) -> Result<PhoneRecord> {
    Ok(PhoneRecord {
      phone_number: self.phone_number,
      carrier:      self.carrier,
      region:       self.region,
      timezones:    decode_timezones(&self.timezones)?,
      is_valid:     self.is_valid,
      phone_type:   decode_phone_type(&self.phone_type)?,
      date_added:   decode_dt(&self.date_added)?,
      last_tracked: decode_dt(&self.last_tracked)?,
      notes:        self.notes,
    })
  }
}
