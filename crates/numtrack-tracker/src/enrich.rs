//! Synthetic owner profiles.
//!
//! [`MockEnricher`] fabricates a plausible-looking owner for a number from
//! small fixed pools. Nothing here identifies a real person: every result is
//! tagged [`Provenance::Synthetic`] and carries [`SYNTHETIC_DISCLAIMER`].

use std::{
  collections::BTreeMap,
  sync::{Mutex, PoisonError},
};

use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use numtrack_core::enrichment::{EnrichmentResult, Provenance, SYNTHETIC_DISCLAIMER};

const US_NAMES: &[&str] = &["John Smith", "Sarah Johnson", "Michael Brown", "Emily Davis"];
const NG_NAMES: &[&str] =
  &["Adebayo Okafor", "Fatima Abubakar", "Chukwuemeka Nwosu", "Aisha Bello"];
const GB_NAMES: &[&str] =
  &["James Wilson", "Emma Thompson", "Oliver Jones", "Sophia Williams"];
const IN_NAMES: &[&str] = &["Rajesh Kumar", "Priya Sharma", "Amit Patel", "Ananya Reddy"];
const CA_NAMES: &[&str] = &["David Martin", "Lisa Anderson", "Ryan Taylor", "Jessica Thomas"];

const EMAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "outlook.com", "hotmail.com"];

const PLATFORMS: &[&str] = &["linkedin", "twitter", "facebook", "instagram"];

fn names_for(region: Option<&str>) -> &'static [&'static str] {
  match region {
    Some("NG") => NG_NAMES,
    Some("GB") => GB_NAMES,
    Some("IN") => IN_NAMES,
    Some("CA") => CA_NAMES,
    _ => US_NAMES,
  }
}

fn two_places(x: f64) -> f64 { (x * 100.0).round() / 100.0 }

/// Generator of synthetic owner profiles.
///
/// Holds its own RNG so tests can inject a seeded one.
pub struct MockEnricher {
  rng: Mutex<StdRng>,
}

impl MockEnricher {
  pub fn from_entropy() -> Self { Self::with_rng(StdRng::from_entropy()) }

  pub fn with_rng(rng: StdRng) -> Self { Self { rng: Mutex::new(rng) } }

  /// Fabricate a profile for `phone_number`, drawing names from the pool for
  /// `region` (US names when the region has no pool of its own).
  pub fn generate(
    &self,
    phone_number: &str,
    region: Option<&str>,
    now: DateTime<Utc>,
  ) -> EnrichmentResult {
    let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

    let names = names_for(region);
    let name = names[rng.gen_range(0..names.len())].to_owned();

    let digits: Vec<char> = phone_number.chars().filter(char::is_ascii_digit).collect();
    let user = if digits.len() >= 4 {
      digits[digits.len() - 4..].iter().collect::<String>()
    } else {
      rng.gen_range(1000..=9999).to_string()
    };
    let domain = EMAIL_DOMAINS[rng.gen_range(0..EMAIL_DOMAINS.len())];
    let email = format!("user{user}@{domain}");

    let count = rng.gen_range(1..=3);
    let chosen: Vec<&str> = PLATFORMS.choose_multiple(&mut *rng, count).copied().collect();
    let social_profiles: BTreeMap<String, String> = chosen
      .into_iter()
      .map(|platform| {
        let id: u32 = rng.gen_range(10_000..=99_999);
        (platform.to_owned(), format!("https://{platform}.com/user{id}"))
      })
      .collect();

    let risk_score = two_places(rng.gen_range(0.10..=0.90));
    let spam_probability = two_places(rng.gen_range(0.05..=0.60));

    EnrichmentResult {
      phone_number: phone_number.to_owned(),
      name,
      email,
      social_profiles,
      risk_score,
      spam_probability,
      provenance: Provenance::Synthetic,
      disclaimer: SYNTHETIC_DISCLAIMER.to_owned(),
      lookup_timestamp: now,
    }
  }
}

impl Default for MockEnricher {
  fn default() -> Self { Self::from_entropy() }
}
