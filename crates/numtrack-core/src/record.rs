//! Phone records: the rows of the tracker's single table.
//!
//! A record is keyed by its canonical E.164 number. Records are only ever
//! created or overwritten by tracking a number, and only removed by deleting
//! it or clearing the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{Error, Result, number::ParsedNumber};

// ─── Phone type ──────────────────────────────────────────────────────────────

/// The numbering-plan category of a number.
///
/// Rendered (and stored) with the human-readable labels users see, e.g.
/// `"Fixed Line or Mobile"`.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
  Serialize,
  Deserialize,
  Display,
  EnumIter,
  EnumString,
  IntoStaticStr,
)]
pub enum PhoneType {
  Mobile,
  Landline,
  #[serde(rename = "Fixed Line or Mobile")]
  #[strum(serialize = "Fixed Line or Mobile")]
  FixedLineOrMobile,
  #[serde(rename = "Toll Free")]
  #[strum(serialize = "Toll Free")]
  TollFree,
  #[serde(rename = "Premium Rate")]
  #[strum(serialize = "Premium Rate")]
  PremiumRate,
  #[serde(rename = "Shared Cost")]
  #[strum(serialize = "Shared Cost")]
  SharedCost,
  #[serde(rename = "VoIP")]
  #[strum(serialize = "VoIP")]
  Voip,
  #[serde(rename = "Personal Number")]
  #[strum(serialize = "Personal Number")]
  PersonalNumber,
  Pager,
  #[serde(rename = "UAN")]
  #[strum(serialize = "UAN")]
  Uan,
  #[default]
  Unknown,
}

impl PhoneType {
  pub fn label(self) -> &'static str { self.into() }

  pub fn from_label(s: &str) -> Result<Self> {
    s.parse().map_err(|_| Error::UnknownPhoneType(s.to_owned()))
  }

  /// Whether numbers of this type can be attributed to a mobile carrier.
  pub fn is_mobile_capable(self) -> bool {
    matches!(self, Self::Mobile | Self::FixedLineOrMobile | Self::Pager)
  }
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// A persisted phone record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneRecord {
  /// Canonical `+<cc><nsn>` form; unique across the store.
  pub phone_number: String,
  pub carrier:      Option<String>,
  pub region:       Option<String>,
  pub timezones:    Vec<String>,
  pub is_valid:     bool,
  pub phone_type:   PhoneType,
  /// Set once, when the number is first tracked.
  pub date_added:   DateTime<Utc>,
  /// Refreshed on every upsert.
  pub last_tracked: DateTime<Utc>,
  pub notes:        String,
}

/// Input to [`RecordStore::upsert`](crate::store::RecordStore::upsert).
///
/// Timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecord {
  pub phone_number: String,
  pub carrier:      Option<String>,
  pub region:       Option<String>,
  pub timezones:    Vec<String>,
  pub is_valid:     bool,
  pub phone_type:   PhoneType,
  pub notes:        String,
}

impl NewRecord {
  /// Build a record from freshly-derived numbering-plan metadata.
  pub fn from_parsed(parsed: &ParsedNumber, notes: impl Into<String>) -> Self {
    Self {
      phone_number: parsed.e164.clone(),
      carrier:      parsed.carrier.clone().filter(|c| !c.is_empty()),
      region:       parsed.region.clone(),
      timezones:    parsed.timezones.clone(),
      is_valid:     parsed.is_valid,
      phone_type:   parsed.phone_type,
      notes:        notes.into(),
    }
  }
}
