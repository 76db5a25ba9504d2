//! Numbering-plan adapter for numtrack.
//!
//! Turns free-form input into a [`ParsedNumber`]: validity under the
//! numbering rules of the inferred (or default) region, canonical formats,
//! number type, carrier, timezones and a place description. Pure and
//! synchronous; no I/O.
//!
//! Parsing and validity come from the `phonenumber` crate. Carrier, timezone
//! and place descriptions come from compact prefix tables embedded here.
//!
//! ```no_run
//! let parsed = numtrack_numbering::parse_and_validate("+2348012345678", None).unwrap();
//! assert!(parsed.is_valid);
//! ```

mod carrier;
pub mod error;
mod geocoder;
mod parse;
mod prefix;
mod timezone;

pub use error::{Error, Result};
use numtrack_core::number::ParsedNumber;

/// Timezone reported when nothing more specific is known.
pub const UNKNOWN_TIMEZONE: &str = "Etc/Unknown";

/// Parse `raw` and derive its numbering-plan metadata.
///
/// `default_region` (an ISO 3166 alpha-2 code) is used for input written
/// without a leading `+<country code>`.
pub fn parse_and_validate(
  raw: &str,
  default_region: Option<&str>,
) -> Result<ParsedNumber> {
  parse::parse_and_describe(raw, default_region)
}

/// `true` iff `raw` parses and is a valid number for its region.
pub fn validate(raw: &str, default_region: Option<&str>) -> bool {
  parse_and_validate(raw, default_region).is_ok_and(|p| p.is_valid)
}
