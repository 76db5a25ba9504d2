//! [`Tracker`], the service every outer surface talks to.
//!
//! Combines the numbering-plan adapter, a [`RecordStore`], a [`Geocoder`] and
//! the [`MockEnricher`]. Lookups never touch the store; only [`Tracker::track`]
//! and the import path write to it.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use numtrack_core::{
  enrichment::{EnhancedInfo, EnrichmentResult, GeoLocation, LocationInfo},
  number::{NumberInfo, ParsedNumber},
  record::{NewRecord, PhoneRecord},
  store::RecordStore,
};

use crate::{
  enrich::MockEnricher,
  export::{self, ImportRow},
  geocode::{Geocoder, GeocoderClient},
  stats::Statistics,
};

/// Outcome of a bulk CSV import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
  pub imported: usize,
  /// One human-readable line per rejected row.
  pub errors:   Vec<String>,
  /// `imported + errors.len()`.
  pub total:    usize,
}

pub struct Tracker<S, G = GeocoderClient> {
  store:          S,
  geocoder:       G,
  enricher:       MockEnricher,
  default_region: Option<String>,
}

impl<S: RecordStore, G: Geocoder> Tracker<S, G> {
  pub fn new(store: S, geocoder: G) -> Self {
    Self {
      store,
      geocoder,
      enricher: MockEnricher::default(),
      default_region: None,
    }
  }

  /// Region assumed for input written without a `+<country code>` prefix.
  pub fn with_default_region(mut self, region: Option<String>) -> Self {
    self.default_region = region;
    self
  }

  pub fn with_enricher(mut self, enricher: MockEnricher) -> Self {
    self.enricher = enricher;
    self
  }

  pub fn store(&self) -> &S { &self.store }

  /// The store key for `raw`: its E.164 form when it parses, otherwise the
  /// trimmed input as given.
  fn key_for(&self, raw: &str) -> String {
    self
      .info(raw)
      .map(|p| p.e164)
      .unwrap_or_else(|_| raw.trim().to_owned())
  }

  // ── Numbering plan ────────────────────────────────────────────────────────

  /// `true` iff `raw` parses and is valid for its region. Never fails.
  pub fn validate(&self, raw: &str) -> bool {
    numtrack_numbering::validate(raw, self.default_region.as_deref())
  }

  pub fn info(&self, raw: &str) -> numtrack_numbering::Result<ParsedNumber> {
    numtrack_numbering::parse_and_validate(raw, self.default_region.as_deref())
  }

  // ── Tracking ──────────────────────────────────────────────────────────────

  /// Derive metadata for `raw` and upsert it. Returns `false`, leaving the
  /// store untouched, when the number is not valid; also `false` when the
  /// store write fails.
  pub async fn track(&self, raw: &str, notes: &str) -> bool {
    let parsed = match self.info(raw) {
      Ok(parsed) if parsed.is_valid => parsed,
      Ok(parsed) => {
        debug!(phone_number = %parsed.e164, "not tracking invalid number");
        return false;
      }
      Err(e) => {
        debug!(input = raw, error = %e, "not tracking unparseable input");
        return false;
      }
    };

    match self.store.upsert(NewRecord::from_parsed(&parsed, notes)).await {
      Ok(record) => {
        info!(phone_number = %record.phone_number, "tracked number");
        true
      }
      Err(e) => {
        error!(phone_number = %parsed.e164, error = %e, "failed to store tracked number");
        false
      }
    }
  }

  // ── Lookups ───────────────────────────────────────────────────────────────

  /// A synthetic owner profile for `raw`.
  pub fn owner_lookup(&self, raw: &str) -> numtrack_numbering::Result<EnrichmentResult> {
    let parsed = self.info(raw)?;
    Ok(self.enricher.generate(&parsed.e164, parsed.region.as_deref(), Utc::now()))
  }

  /// The numbering-plan place description for `raw`, geocoded when possible.
  pub async fn location_lookup(&self, raw: &str) -> numtrack_numbering::Result<LocationInfo> {
    let parsed = self.info(raw)?;
    Ok(self.locate(&parsed, Utc::now()).await)
  }

  /// Metadata, synthetic owner and location in one answer. Unparseable input
  /// yields the parse error and no owner or location.
  pub async fn enhanced_lookup(&self, raw: &str) -> EnhancedInfo {
    let now = Utc::now();
    match self.info(raw) {
      Ok(parsed) => {
        let owner = self.enricher.generate(&parsed.e164, parsed.region.as_deref(), now);
        let location = self.locate(&parsed, now).await;
        EnhancedInfo {
          info:               NumberInfo::Parsed(parsed),
          owner_info:         Some(owner),
          location_info:      Some(location),
          analysis_timestamp: now,
        }
      }
      Err(e) => EnhancedInfo {
        info:               NumberInfo::unparseable(raw, e),
        owner_info:         None,
        location_info:      None,
        analysis_timestamp: now,
      },
    }
  }

  async fn locate(&self, parsed: &ParsedNumber, now: DateTime<Utc>) -> LocationInfo {
    LocationInfo {
      phone_number:      parsed.e164.clone(),
      basic_location:    parsed.location.clone(),
      region:            parsed.region.clone(),
      detailed_location: self.geocode(&parsed.location).await,
      timestamp:         now,
    }
  }

  async fn geocode(&self, place: &str) -> Option<GeoLocation> {
    if place.is_empty() {
      return None;
    }
    match self.geocoder.geocode(place).await {
      Ok(hit) => hit,
      Err(e) => {
        warn!(place, error = %e, "geocoding failed; omitting detailed location");
        None
      }
    }
  }

  // ── Store pass-through ────────────────────────────────────────────────────

  pub async fn get(&self, raw: &str) -> Result<Option<PhoneRecord>, S::Error> {
    self.store.get(&self.key_for(raw)).await
  }

  pub async fn list_all(&self) -> Result<Vec<PhoneRecord>, S::Error> {
    self.store.list_all().await
  }

  pub async fn search(&self, query: &str) -> Result<Vec<PhoneRecord>, S::Error> {
    self.store.search(query).await
  }

  pub async fn delete(&self, raw: &str) -> Result<bool, S::Error> {
    self.store.delete(&self.key_for(raw)).await
  }

  pub async fn clear(&self) -> Result<u64, S::Error> {
    let removed = self.store.clear().await?;
    info!(removed, "cleared all records");
    Ok(removed)
  }

  pub async fn count(&self) -> Result<u64, S::Error> { self.store.count().await }

  pub async fn backup_to(&self, dest: &Path) -> Result<(), S::Error> {
    self.store.backup_to(dest).await?;
    info!(dest = %dest.display(), "wrote backup");
    Ok(())
  }

  // ── Aggregates ────────────────────────────────────────────────────────────

  pub async fn statistics(&self, now: DateTime<Utc>) -> Result<Statistics, S::Error> {
    let records = self.store.list_all().await?;
    Ok(Statistics::compute(&records, now))
  }

  /// Track every number in an uploaded CSV (see [`export::parse_import`]).
  /// Rows are processed in order; a bad row never stops the import.
  pub async fn import_csv(&self, text: &str) -> ImportReport {
    let mut imported = 0;
    let mut errors = Vec::new();

    for row in export::parse_import(text) {
      match row {
        ImportRow::Entry { phone_number, notes } => {
          if !self.validate(&phone_number) {
            errors.push(format!("Invalid number: {phone_number}"));
          } else if self.track(&phone_number, &notes).await {
            imported += 1;
          } else {
            errors.push(format!("Failed to track: {phone_number}"));
          }
        }
        ImportRow::Malformed { row, reason } => {
          errors.push(format!("Malformed row {row}: {reason}"));
        }
      }
    }

    info!(imported, rejected = errors.len(), "csv import finished");
    ImportReport { imported, total: imported + errors.len(), errors }
  }
}
