//! Original-network carrier names for mobile number ranges.
//!
//! Ranges are allocation-time assignments; ported numbers keep the name of
//! the network that was originally allocated the range. Countries that do
//! not publish per-range allocations (the NANP in particular) have no
//! entries.

use numtrack_core::record::PhoneType;

use crate::prefix::longest_match;

const CARRIERS: &[(&str, &str)] = &[
  // Nigeria
  ("234701", "Airtel"),
  ("234702", "Smile"),
  ("234703", "MTN"),
  ("234704", "MTN"),
  ("234705", "Glo"),
  ("234706", "MTN"),
  ("234707", "Zoom Mobile"),
  ("234708", "Airtel"),
  ("234709", "Multilinks"),
  ("234801", "MTN"),
  ("234802", "Airtel"),
  ("234803", "MTN"),
  ("234804", "Ntel"),
  ("234805", "Glo"),
  ("234806", "MTN"),
  ("234807", "Glo"),
  ("234808", "Airtel"),
  ("234809", "9mobile"),
  ("234810", "MTN"),
  ("234811", "Glo"),
  ("234812", "Airtel"),
  ("234813", "MTN"),
  ("234814", "MTN"),
  ("234815", "Glo"),
  ("234816", "MTN"),
  ("234817", "9mobile"),
  ("234818", "9mobile"),
  ("234901", "Airtel"),
  ("234902", "Airtel"),
  ("234903", "MTN"),
  ("234904", "Airtel"),
  ("234905", "Glo"),
  ("234906", "MTN"),
  ("234907", "Airtel"),
  ("234908", "9mobile"),
  ("234909", "9mobile"),
  ("234912", "Airtel"),
  ("234913", "MTN"),
  ("234915", "Glo"),
  ("234916", "MTN"),
  // Ghana
  ("23320", "Vodafone"),
  ("23324", "MTN"),
  ("23326", "AirtelTigo"),
  ("23327", "AirtelTigo"),
  ("23350", "Vodafone"),
  ("23354", "MTN"),
  ("23355", "MTN"),
  ("23356", "AirtelTigo"),
  ("23357", "AirtelTigo"),
  ("23359", "MTN"),
  // Kenya
  ("25470", "Safaricom"),
  ("25471", "Safaricom"),
  ("25472", "Safaricom"),
  ("25473", "Airtel"),
  ("25474", "Safaricom"),
  ("25475", "Airtel"),
  ("25477", "Telkom"),
  ("25478", "Airtel"),
  ("25479", "Safaricom"),
  // South Africa
  ("2772", "Vodacom"),
  ("2773", "MTN"),
  ("2774", "Cell C"),
  ("2776", "Vodacom"),
  ("2778", "MTN"),
  ("2779", "Vodacom"),
  ("2782", "Vodacom"),
  ("2783", "MTN"),
  ("2784", "Cell C"),
  // United Kingdom
  ("44740", "O2"),
  ("44741", "Vodafone"),
  ("44742", "EE"),
  ("44745", "Three"),
  ("44747", "Three"),
  ("44748", "EE"),
  ("44750", "EE"),
  ("44751", "O2"),
  ("44752", "EE"),
  ("44754", "Vodafone"),
  ("44756", "O2"),
  ("44770", "O2"),
  ("44771", "O2"),
  ("44772", "Vodafone"),
  ("44773", "O2"),
  ("44774", "Vodafone"),
  ("44775", "Vodafone"),
  ("44776", "Vodafone"),
  ("44777", "Vodafone"),
  ("44778", "Vodafone"),
  ("44779", "EE"),
  ("44780", "O2"),
  ("44782", "Three"),
  ("44783", "Three"),
  ("44784", "Vodafone"),
  ("44785", "O2"),
  ("44786", "O2"),
  ("44787", "Vodafone"),
  ("44788", "Vodafone"),
  ("44789", "EE"),
  ("44790", "EE"),
  ("44791", "Vodafone"),
  ("44792", "Vodafone"),
  ("44793", "EE"),
  ("44794", "EE"),
  ("44795", "Three"),
  ("44796", "EE"),
  ("44797", "EE"),
  ("44798", "EE"),
  ("44799", "EE"),
  // Germany
  ("49151", "Telekom"),
  ("49152", "Vodafone"),
  ("49155", "Telefónica"),
  ("49157", "Telefónica"),
  ("49159", "Telefónica"),
  ("49160", "Telekom"),
  ("49162", "Vodafone"),
  ("49163", "Telefónica"),
  ("49170", "Telekom"),
  ("49171", "Telekom"),
  ("49172", "Vodafone"),
  ("49173", "Vodafone"),
  ("49174", "Vodafone"),
  ("49175", "Telekom"),
  ("49176", "Telefónica"),
  ("49177", "Telefónica"),
  ("49178", "Telefónica"),
  ("49179", "Telefónica"),
  // Switzerland
  ("4176", "Sunrise"),
  ("4177", "Swisscom"),
  ("4178", "Salt"),
  ("4179", "Swisscom"),
  // India
  ("9170", "Airtel"),
  ("9173", "Airtel"),
  ("9181", "Reliance Jio"),
  ("9188", "Vodafone Idea"),
  ("9190", "Airtel"),
  ("9193", "Reliance Jio"),
  ("9194", "BSNL"),
  ("9196", "Vodafone Idea"),
  ("9197", "Vodafone Idea"),
  ("9198", "Airtel"),
  ("9199", "Airtel"),
  // Japan
  ("8170", "NTT Docomo"),
  ("8180", "KDDI"),
  ("8190", "SoftBank"),
];

/// Carrier name for a number, reported only for mobile-capable types.
pub(crate) fn name_for(digits: &str, phone_type: PhoneType) -> Option<&'static str> {
  if !phone_type.is_mobile_capable() {
    return None;
  }
  longest_match(CARRIERS, digits)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn nigerian_mobile_range() {
    assert_eq!(name_for("2348031234567", PhoneType::Mobile), Some("MTN"));
    assert_eq!(name_for("2348051234567", PhoneType::Mobile), Some("Glo"));
  }

  #[test]
  fn landlines_have_no_carrier() {
    assert_eq!(name_for("2348031234567", PhoneType::Landline), None);
  }

  #[test]
  fn unknown_ranges_have_no_carrier() {
    assert_eq!(name_for("12125551234", PhoneType::FixedLineOrMobile), None);
  }
}
