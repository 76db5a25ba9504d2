//! Forward geocoding of place descriptions.
//!
//! The tracker only ever asks one question: "where is `London`?". The
//! [`Geocoder`] trait is that question; [`NominatimGeocoder`] answers it over
//! HTTP with a single bounded attempt.

use std::{future::Future, time::Duration};

use reqwest::Client;
use serde::Deserialize;

use numtrack_core::enrichment::GeoLocation;

use crate::error::GeocodeError;

pub trait Geocoder: Send + Sync {
  /// Resolve a free-text place description. `Ok(None)` means the service
  /// answered but found nothing.
  fn geocode<'a>(
    &'a self,
    query: &'a str,
  ) -> impl Future<Output = Result<Option<GeoLocation>, GeocodeError>> + Send + 'a;
}

// ─── Nominatim ───────────────────────────────────────────────────────────────

/// Settings for [`NominatimGeocoder`].
#[derive(Debug, Clone)]
pub struct NominatimConfig {
  pub base_url:   String,
  pub user_agent: String,
  pub timeout:    Duration,
}

/// Client for an OpenStreetMap Nominatim search endpoint.
///
/// Cheap to clone: the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct NominatimGeocoder {
  client:   Client,
  base_url: String,
}

impl NominatimGeocoder {
  pub fn new(config: NominatimConfig) -> Result<Self, GeocodeError> {
    let client = Client::builder()
      .timeout(config.timeout)
      .user_agent(config.user_agent)
      .build()?;
    Ok(Self {
      client,
      base_url: config.base_url.trim_end_matches('/').to_owned(),
    })
  }
}

#[derive(Deserialize)]
struct Place {
  lat:          String,
  lon:          String,
  display_name: String,
  #[serde(default)]
  address:      PlaceAddress,
}

#[derive(Default, Deserialize)]
struct PlaceAddress {
  city:     Option<String>,
  town:     Option<String>,
  village:  Option<String>,
  state:    Option<String>,
  country:  Option<String>,
  postcode: Option<String>,
}

fn coordinate(s: &str) -> Result<f64, GeocodeError> {
  s.parse().map_err(|_| GeocodeError::Coordinate(s.to_owned()))
}

impl Place {
  fn into_location(self) -> Result<GeoLocation, GeocodeError> {
    let PlaceAddress { city, town, village, state, country, postcode } = self.address;
    Ok(GeoLocation {
      latitude: coordinate(&self.lat)?,
      longitude: coordinate(&self.lon)?,
      address: self.display_name,
      city: city.or(town).or(village),
      state,
      country,
      postcode,
    })
  }
}

impl Geocoder for NominatimGeocoder {
  async fn geocode(&self, query: &str) -> Result<Option<GeoLocation>, GeocodeError> {
    let places: Vec<Place> = self
      .client
      .get(format!("{}/search", self.base_url))
      .query(&[
        ("q", query),
        ("format", "jsonv2"),
        ("addressdetails", "1"),
        ("limit", "1"),
      ])
      .send()
      .await?
      .error_for_status()?
      .json()
      .await?;

    places.into_iter().next().map(Place::into_location).transpose()
  }
}

// ─── Runtime selection ───────────────────────────────────────────────────────

/// The geocoder chosen by configuration.
#[derive(Clone)]
pub enum GeocoderClient {
  Nominatim(NominatimGeocoder),
  /// Every lookup finds nothing.
  Disabled,
}

impl Geocoder for GeocoderClient {
  async fn geocode(&self, query: &str) -> Result<Option<GeoLocation>, GeocodeError> {
    match self {
      Self::Nominatim(inner) => inner.geocode(query).await,
      Self::Disabled => Ok(None),
    }
  }
}
