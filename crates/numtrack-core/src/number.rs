//! Numbering-plan metadata derived for a single phone number.

use serde::{Deserialize, Serialize};

use crate::record::PhoneType;

/// Everything the numbering-plan adapter derives from one input string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedNumber {
  /// Canonical `+<cc><nsn>` form; the store key.
  #[serde(rename = "phone_number")]
  pub e164:            String,
  #[serde(rename = "international_format")]
  pub international:   String,
  #[serde(rename = "national_format")]
  pub national:        String,
  pub is_valid:        bool,
  pub is_possible:     bool,
  pub country_code:    u16,
  /// National significant number, digits only (leading zeros preserved).
  pub national_number: String,
  pub region:          Option<String>,
  pub carrier:         Option<String>,
  pub timezones:       Vec<String>,
  pub phone_type:      PhoneType,
  /// Human-readable place description, e.g. `"London"` or `"Nigeria"`.
  pub location:        String,
}

/// The `/info` view of an input: either parsed metadata or the reason it
/// could not be parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberInfo {
  Parsed(ParsedNumber),
  Unparseable {
    phone_number: String,
    is_valid:     bool,
    error:        String,
  },
}

impl NumberInfo {
  pub fn unparseable(input: &str, error: impl ToString) -> Self {
    Self::Unparseable {
      phone_number: input.to_owned(),
      is_valid:     false,
      error:        error.to_string(),
    }
  }

  pub fn is_valid(&self) -> bool {
    match self {
      Self::Parsed(p) => p.is_valid,
      Self::Unparseable { .. } => false,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unparseable_serialises_flat() {
    let info = NumberInfo::unparseable("abc", "not a number");
    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["phone_number"], "abc");
    assert_eq!(json["is_valid"], false);
    assert_eq!(json["error"], "not a number");
    assert!(!info.is_valid());
  }
}
