//! Aggregate figures over the whole store.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use numtrack_core::record::PhoneRecord;

/// Width of the `recent_activity` window, ending at `now`.
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Label used for records without a carrier.
const UNKNOWN_CARRIER: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
  pub total_numbers:           u64,
  pub valid_numbers:           u64,
  pub invalid_numbers:         u64,
  pub carrier_distribution:    BTreeMap<String, u64>,
  pub phone_type_distribution: BTreeMap<String, u64>,
  /// Records first added within the last [`RECENT_WINDOW_DAYS`] days.
  pub recent_activity:         u64,
  pub last_updated:            DateTime<Utc>,
}

impl Statistics {
  pub fn compute(records: &[PhoneRecord], now: DateTime<Utc>) -> Self {
    let since = now - Duration::days(RECENT_WINDOW_DAYS);

    let mut stats = Self {
      total_numbers:           records.len() as u64,
      valid_numbers:           0,
      invalid_numbers:         0,
      carrier_distribution:    BTreeMap::new(),
      phone_type_distribution: BTreeMap::new(),
      recent_activity:         0,
      last_updated:            now,
    };

    for r in records {
      if r.is_valid {
        stats.valid_numbers += 1;
      } else {
        stats.invalid_numbers += 1;
      }

      let carrier = r.carrier.as_deref().unwrap_or(UNKNOWN_CARRIER);
      *stats.carrier_distribution.entry(carrier.to_owned()).or_default() += 1;
      *stats
        .phone_type_distribution
        .entry(r.phone_type.label().to_owned())
        .or_default() += 1;

      if r.date_added >= since {
        stats.recent_activity += 1;
      }
    }

    stats
  }
}
