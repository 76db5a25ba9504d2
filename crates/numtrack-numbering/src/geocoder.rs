//! English place descriptions for numbers.
//!
//! Geographic (fixed-line) ranges resolve to a city where one is known;
//! everything else, including all mobile ranges, describes the country.

use numtrack_core::record::PhoneType;

use crate::prefix::longest_match;

const CITIES: &[(&str, &str)] = &[
  // NANP
  ("1202", "Washington D.C."),
  ("1212", "New York, NY"),
  ("1213", "Los Angeles, CA"),
  ("1305", "Miami, FL"),
  ("1310", "Los Angeles, CA"),
  ("1312", "Chicago, IL"),
  ("1404", "Atlanta, GA"),
  ("1415", "San Francisco, CA"),
  ("1416", "Toronto, ON"),
  ("1514", "Montreal, QC"),
  ("1604", "Vancouver, BC"),
  ("1617", "Boston, MA"),
  ("1646", "New York, NY"),
  ("1702", "Las Vegas, NV"),
  ("1713", "Houston, TX"),
  ("1718", "New York, NY"),
  // United Kingdom
  ("44113", "Leeds"),
  ("44117", "Bristol"),
  ("44121", "Birmingham"),
  ("44131", "Edinburgh"),
  ("44141", "Glasgow"),
  ("44151", "Liverpool"),
  ("44161", "Manchester"),
  ("4420", "London"),
  ("4429", "Cardiff"),
  // Nigeria
  ("2341", "Lagos"),
  ("2342", "Ibadan"),
  ("2349", "Abuja"),
  ("23484", "Port Harcourt"),
  ("23462", "Kaduna"),
  ("23464", "Kano"),
  // Europe
  ("331", "Paris"),
  ("3491", "Madrid"),
  ("3493", "Barcelona"),
  ("3906", "Rome"),
  ("3902", "Milan"),
  ("4930", "Berlin"),
  ("4940", "Hamburg"),
  ("4989", "Munich"),
  ("4969", "Frankfurt am Main"),
  ("4143", "Zurich"),
  ("4144", "Zurich"),
  ("4122", "Geneva"),
  ("3120", "Amsterdam"),
  // Asia
  ("813", "Tokyo"),
  ("816", "Osaka"),
  ("9111", "Delhi"),
  ("9122", "Mumbai"),
  ("9180", "Bangalore"),
  ("9133", "Kolkata"),
  ("8610", "Beijing"),
  ("8621", "Shanghai"),
  // Oceania
  ("612", "Sydney"),
  ("613", "Melbourne"),
  // Africa
  ("25420", "Nairobi"),
  ("23330", "Accra"),
  ("2711", "Johannesburg"),
  ("2721", "Cape Town"),
];

fn country_name(region: &str) -> Option<&'static str> {
  let name = match region {
    "AE" => "United Arab Emirates",
    "AR" => "Argentina",
    "AT" => "Austria",
    "AU" => "Australia",
    "BD" => "Bangladesh",
    "BE" => "Belgium",
    "BR" => "Brazil",
    "CA" => "Canada",
    "CH" => "Switzerland",
    "CL" => "Chile",
    "CM" => "Cameroon",
    "CN" => "China",
    "CO" => "Colombia",
    "DE" => "Germany",
    "DK" => "Denmark",
    "EG" => "Egypt",
    "ES" => "Spain",
    "ET" => "Ethiopia",
    "FI" => "Finland",
    "FR" => "France",
    "GB" => "United Kingdom",
    "GH" => "Ghana",
    "GR" => "Greece",
    "HK" => "Hong Kong",
    "IE" => "Ireland",
    "IL" => "Israel",
    "IN" => "India",
    "IT" => "Italy",
    "JP" => "Japan",
    "KE" => "Kenya",
    "KR" => "South Korea",
    "MA" => "Morocco",
    "MX" => "Mexico",
    "MY" => "Malaysia",
    "NG" => "Nigeria",
    "NL" => "Netherlands",
    "NO" => "Norway",
    "NZ" => "New Zealand",
    "PE" => "Peru",
    "PH" => "Philippines",
    "PK" => "Pakistan",
    "PL" => "Poland",
    "PT" => "Portugal",
    "RU" => "Russia",
    "SA" => "Saudi Arabia",
    "SE" => "Sweden",
    "SG" => "Singapore",
    "SN" => "Senegal",
    "TH" => "Thailand",
    "TR" => "Turkey",
    "UA" => "Ukraine",
    "US" => "United States",
    "VN" => "Vietnam",
    "ZA" => "South Africa",
    _ => return None,
  };
  Some(name)
}

/// Place description for a number, or an empty string if nothing is known.
pub(crate) fn description_for(
  digits: &str,
  region: Option<&str>,
  phone_type: PhoneType,
) -> String {
  let geographic = matches!(
    phone_type,
    PhoneType::Landline | PhoneType::FixedLineOrMobile
  );
  if geographic && let Some(city) = longest_match(CITIES, digits) {
    return city.to_owned();
  }
  region
    .and_then(country_name)
    .map(str::to_owned)
    .unwrap_or_default()
}
