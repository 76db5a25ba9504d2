//! Fixed-width UTC timestamp text.
//!
//! Every timestamp is rendered as RFC 3339 with exactly six fractional digits
//! and a `Z` suffix, so the lexical order of stored strings matches their
//! chronological order.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::{Error, Result};

pub fn format(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn parse(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::InvalidTimestamp {
      value:  s.to_owned(),
      reason: e.to_string(),
    })
}
