//! Runtime configuration.
//!
//! Layered, lowest precedence first: built-in defaults, the TOML file,
//! `NUMTRACK_*` environment variables (nested keys joined with `__`, e.g.
//! `NUMTRACK_GEOCODER__ENABLED=false`), then command-line flags.

use std::{path::PathBuf, time::Duration};

use numtrack_tracker::{
  GeocodeError,
  geocode::{GeocoderClient, NominatimConfig, NominatimGeocoder},
};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub host:           String,
  pub port:           u16,
  /// SQLite file; a leading `~/` is expanded.
  pub store_path:     PathBuf,
  pub backup_dir:     PathBuf,
  /// ISO 3166 alpha-2 region for numbers written without `+<cc>`. Empty
  /// disables the fallback.
  pub default_region: String,
  pub geocoder:       GeocoderConfig,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:           "127.0.0.1".into(),
      port:           5000,
      store_path:     PathBuf::from("phone_numbers.db"),
      backup_dir:     PathBuf::from("backups"),
      default_region: "NG".into(),
      geocoder:       GeocoderConfig::default(),
    }
  }
}

impl ServerConfig {
  pub fn default_region(&self) -> Option<String> {
    let region = self.default_region.trim();
    (!region.is_empty()).then(|| region.to_owned())
  }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeocoderConfig {
  pub enabled:      bool,
  pub base_url:     String,
  pub user_agent:   String,
  pub timeout_secs: u64,
}

impl Default for GeocoderConfig {
  fn default() -> Self {
    Self {
      enabled:      true,
      base_url:     "https://nominatim.openstreetmap.org".into(),
      user_agent:   concat!("numtrack/", env!("CARGO_PKG_VERSION")).into(),
      timeout_secs: 5,
    }
  }
}

impl GeocoderConfig {
  pub fn build(&self) -> Result<GeocoderClient, GeocodeError> {
    if !self.enabled {
      return Ok(GeocoderClient::Disabled);
    }
    let inner = NominatimGeocoder::new(NominatimConfig {
      base_url:   self.base_url.clone(),
      user_agent: self.user_agent.clone(),
      timeout:    Duration::from_secs(self.timeout_secs),
    })?;
    Ok(GeocoderClient::Nominatim(inner))
  }
}
