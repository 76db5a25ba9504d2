//! Bridge to the `phonenumber` crate.

use numtrack_core::{number::ParsedNumber, record::PhoneType};
use phonenumber::{Mode, PhoneNumber, Type, country, metadata::DATABASE};

use crate::{Error, Result, carrier, geocoder, timezone};

/// ITU-T E.164 bounds on the national significant number.
const MIN_NSN_LEN: usize = 2;
const MAX_NSN_LEN: usize = 17;
/// ITU-T E.164 bound on country code plus national significant number.
const MAX_E164_DIGITS: usize = 15;

// ─── Input screening ─────────────────────────────────────────────────────────

/// Digits, letters (vanity numbers, extension markers), whitespace and the
/// punctuation people write numbers with.
fn is_allowed(c: char) -> bool {
  c.is_ascii_alphanumeric()
    || c.is_whitespace()
    || matches!(c, '+' | '-' | '.' | '(' | ')' | '/')
}

fn parse_region(region: &str) -> Result<country::Id> {
  region
    .trim()
    .to_ascii_uppercase()
    .parse()
    .map_err(|_| Error::UnknownRegion(region.to_owned()))
}

// ─── Classification ──────────────────────────────────────────────────────────

fn classify(kind: Type) -> PhoneType {
  match kind {
    Type::Mobile => PhoneType::Mobile,
    Type::FixedLine => PhoneType::Landline,
    Type::FixedLineOrMobile => PhoneType::FixedLineOrMobile,
    Type::TollFree => PhoneType::TollFree,
    Type::PremiumRate => PhoneType::PremiumRate,
    Type::SharedCost => PhoneType::SharedCost,
    Type::Voip => PhoneType::Voip,
    Type::PersonalNumber => PhoneType::PersonalNumber,
    Type::Pager => PhoneType::Pager,
    Type::Uan => PhoneType::Uan,
    _ => PhoneType::Unknown,
  }
}

/// `country::Id` variant names are the ISO 3166 alpha-2 codes.
fn region_code(id: country::Id) -> String { format!("{id:?}") }

// ─── Parser ──────────────────────────────────────────────────────────────────

pub(crate) fn parse_and_describe(
  raw: &str,
  default_region: Option<&str>,
) -> Result<ParsedNumber> {
  let input = raw.trim();
  if input.is_empty() {
    return Err(Error::Empty);
  }
  if let Some(bad) = input.chars().find(|c| !is_allowed(*c)) {
    return Err(Error::InvalidCharacter(bad));
  }

  let region = default_region.map(parse_region).transpose()?;
  let number =
    phonenumber::parse(region, input).map_err(|e| Error::Unparseable {
      input:  input.to_owned(),
      reason: e.to_string(),
    })?;

  Ok(describe(&number))
}

fn describe(number: &PhoneNumber) -> ParsedNumber {
  let e164 = number.format().mode(Mode::E164).to_string();
  let country_code = number.country().code();

  let digits = e164.trim_start_matches('+');
  let national_number = digits
    .strip_prefix(country_code.to_string().as_str())
    .unwrap_or(digits)
    .to_owned();

  let is_valid = phonenumber::is_valid(number);
  let is_possible = (MIN_NSN_LEN..=MAX_NSN_LEN).contains(&national_number.len())
    && digits.len() <= MAX_E164_DIGITS;

  let region = number.country().id().map(region_code);
  let phone_type = classify(number.number_type(&DATABASE));

  let carrier = if is_valid {
    carrier::name_for(digits, phone_type).map(str::to_owned)
  } else {
    None
  };
  let timezones = timezone::zones_for(digits, region.as_deref());
  let location = geocoder::description_for(digits, region.as_deref(), phone_type);

  ParsedNumber {
    international: number.format().mode(Mode::International).to_string(),
    national: number.format().mode(Mode::National).to_string(),
    e164,
    is_valid,
    is_possible,
    country_code,
    national_number,
    region,
    carrier,
    timezones,
    phone_type,
    location,
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
