//! IANA timezone identifiers for number ranges.
//!
//! Geographic ranges in multi-zone countries resolve to a single zone by
//! prefix; everything else falls back to the full zone list of the region.

use crate::{UNKNOWN_TIMEZONE, prefix::longest_match};

const US_ZONES: &[&str] = &[
  "America/New_York",
  "America/Chicago",
  "America/Denver",
  "America/Los_Angeles",
  "America/Anchorage",
  "Pacific/Honolulu",
];

const CA_ZONES: &[&str] = &[
  "America/Halifax",
  "America/Toronto",
  "America/Winnipeg",
  "America/Edmonton",
  "America/Vancouver",
  "America/St_Johns",
];

const AU_ZONES: &[&str] = &[
  "Australia/Sydney",
  "Australia/Brisbane",
  "Australia/Adelaide",
  "Australia/Perth",
];

const BR_ZONES: &[&str] = &[
  "America/Sao_Paulo",
  "America/Manaus",
  "America/Noronha",
];

const RU_ZONES: &[&str] = &[
  "Europe/Moscow",
  "Asia/Yekaterinburg",
  "Asia/Novosibirsk",
  "Asia/Vladivostok",
];

const MX_ZONES: &[&str] = &["America/Mexico_City", "America/Tijuana"];

/// Single-zone geographic ranges inside multi-zone countries.
const RANGES: &[(&str, &str)] = &[
  // NANP area codes
  ("1202", "America/New_York"),
  ("1212", "America/New_York"),
  ("1305", "America/New_York"),
  ("1404", "America/New_York"),
  ("1617", "America/New_York"),
  ("1646", "America/New_York"),
  ("1718", "America/New_York"),
  ("1917", "America/New_York"),
  ("1312", "America/Chicago"),
  ("1713", "America/Chicago"),
  ("1773", "America/Chicago"),
  ("1214", "America/Chicago"),
  ("1303", "America/Denver"),
  ("1602", "America/Phoenix"),
  ("1206", "America/Los_Angeles"),
  ("1213", "America/Los_Angeles"),
  ("1310", "America/Los_Angeles"),
  ("1415", "America/Los_Angeles"),
  ("1702", "America/Los_Angeles"),
  ("1907", "America/Anchorage"),
  ("1808", "Pacific/Honolulu"),
  ("1416", "America/Toronto"),
  ("1514", "America/Toronto"),
  ("1613", "America/Toronto"),
  ("1647", "America/Toronto"),
  ("1403", "America/Edmonton"),
  ("1780", "America/Edmonton"),
  ("1204", "America/Winnipeg"),
  ("1604", "America/Vancouver"),
  ("1902", "America/Halifax"),
  ("1709", "America/St_Johns"),
  // Australia
  ("612", "Australia/Sydney"),
  ("613", "Australia/Sydney"),
  ("617", "Australia/Brisbane"),
  ("618", "Australia/Adelaide"),
  // Brazil
  ("5511", "America/Sao_Paulo"),
  ("5521", "America/Sao_Paulo"),
  ("5592", "America/Manaus"),
  // Russia
  ("7495", "Europe/Moscow"),
  ("7499", "Europe/Moscow"),
  ("7812", "Europe/Moscow"),
  ("7343", "Asia/Yekaterinburg"),
  ("7383", "Asia/Novosibirsk"),
  ("7423", "Asia/Vladivostok"),
];

fn region_zones(region: &str) -> Option<&'static [&'static str]> {
  let zones: &'static [&'static str] = match region {
    "US" => US_ZONES,
    "CA" => CA_ZONES,
    "AU" => AU_ZONES,
    "BR" => BR_ZONES,
    "RU" => RU_ZONES,
    "MX" => MX_ZONES,
    "NG" => &["Africa/Lagos"],
    "GH" => &["Africa/Accra"],
    "KE" => &["Africa/Nairobi"],
    "ZA" => &["Africa/Johannesburg"],
    "EG" => &["Africa/Cairo"],
    "MA" => &["Africa/Casablanca"],
    "ET" => &["Africa/Addis_Ababa"],
    "CM" => &["Africa/Douala"],
    "SN" => &["Africa/Dakar"],
    "GB" => &["Europe/London"],
    "IE" => &["Europe/Dublin"],
    "FR" => &["Europe/Paris"],
    "DE" => &["Europe/Berlin"],
    "CH" => &["Europe/Zurich"],
    "IT" => &["Europe/Rome"],
    "ES" => &["Europe/Madrid"],
    "PT" => &["Europe/Lisbon"],
    "NL" => &["Europe/Amsterdam"],
    "BE" => &["Europe/Brussels"],
    "SE" => &["Europe/Stockholm"],
    "NO" => &["Europe/Oslo"],
    "DK" => &["Europe/Copenhagen"],
    "FI" => &["Europe/Helsinki"],
    "PL" => &["Europe/Warsaw"],
    "AT" => &["Europe/Vienna"],
    "GR" => &["Europe/Athens"],
    "TR" => &["Europe/Istanbul"],
    "UA" => &["Europe/Kiev"],
    "IN" => &["Asia/Calcutta"],
    "PK" => &["Asia/Karachi"],
    "BD" => &["Asia/Dhaka"],
    "CN" => &["Asia/Shanghai"],
    "HK" => &["Asia/Hong_Kong"],
    "JP" => &["Asia/Tokyo"],
    "KR" => &["Asia/Seoul"],
    "SG" => &["Asia/Singapore"],
    "MY" => &["Asia/Kuching"],
    "PH" => &["Asia/Manila"],
    "TH" => &["Asia/Bangkok"],
    "VN" => &["Asia/Saigon"],
    "AE" => &["Asia/Dubai"],
    "SA" => &["Asia/Riyadh"],
    "IL" => &["Asia/Jerusalem"],
    "NZ" => &["Pacific/Auckland"],
    "AR" => &["America/Buenos_Aires"],
    "CL" => &["America/Santiago"],
    "CO" => &["America/Bogota"],
    "PE" => &["America/Lima"],
    _ => return None,
  };
  Some(zones)
}

/// Timezones for a number; never empty.
pub(crate) fn zones_for(digits: &str, region: Option<&str>) -> Vec<String> {
  if let Some(zone) = longest_match(RANGES, digits) {
    return vec![zone.to_owned()];
  }
  region
    .and_then(region_zones)
    .map(|zones| zones.iter().map(|z| (*z).to_owned()).collect())
    .unwrap_or_else(|| vec![UNKNOWN_TIMEZONE.to_owned()])
}
