//! Enrichment and location types attached to a number at lookup time.
//!
//! None of these are persisted. Owner data is synthetic placeholder output
//! and always carries [`Provenance::Synthetic`]; location data comes from an
//! external geocoder and may be absent.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::number::NumberInfo;

/// Shown alongside every synthetic owner profile.
pub const SYNTHETIC_DISCLAIMER: &str =
  "Randomly generated placeholder data. Not verified identity information.";

// ─── Provenance ──────────────────────────────────────────────────────────────

/// Where an enrichment value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
  /// Generated locally at random; describes no real person.
  Synthetic,
}

// ─── Owner ───────────────────────────────────────────────────────────────────

/// A placeholder owner profile for a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentResult {
  pub phone_number:     String,
  pub name:             String,
  pub email:            String,
  /// Platform name → profile URL.
  pub social_profiles:  BTreeMap<String, String>,
  /// In `[0.10, 0.90]`, two decimal places.
  pub risk_score:       f64,
  /// In `[0.05, 0.60]`, two decimal places.
  pub spam_probability: f64,
  pub provenance:       Provenance,
  pub disclaimer:       String,
  pub lookup_timestamp: DateTime<Utc>,
}

impl EnrichmentResult {
  pub fn is_synthetic(&self) -> bool {
    self.provenance == Provenance::Synthetic
  }
}

// ─── Location ────────────────────────────────────────────────────────────────

/// A geocoder hit for a free-text place description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
  pub latitude:  f64,
  pub longitude: f64,
  pub address:   String,
  pub city:      Option<String>,
  pub state:     Option<String>,
  pub country:   Option<String>,
  pub postcode:  Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
  pub phone_number:      String,
  /// The numbering-plan description the geocoder was queried with.
  pub basic_location:    String,
  pub region:            Option<String>,
  /// `None` when the geocoder is disabled, found nothing, or failed.
  pub detailed_location: Option<GeoLocation>,
  pub timestamp:         DateTime<Utc>,
}

// ─── Combined view ───────────────────────────────────────────────────────────

/// Numbering-plan metadata, synthetic owner data and location data for one
/// input, assembled in a single pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedInfo {
  #[serde(flatten)]
  pub info:               NumberInfo,
  pub owner_info:         Option<EnrichmentResult>,
  pub location_info:      Option<LocationInfo>,
  pub analysis_timestamp: DateTime<Utc>,
}
