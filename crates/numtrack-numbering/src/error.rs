//! Error types for the numbering-plan adapter.

use thiserror::Error;

/// Raised only when the input cannot be read as a phone number at all.
///
/// A number that parses but breaks its region's numbering rules is *not* an
/// error; it comes back with `is_valid == false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("phone number is empty")]
  Empty,

  #[error("invalid character {0:?} in phone number")]
  InvalidCharacter(char),

  #[error("unknown region code: {0:?}")]
  UnknownRegion(String),

  #[error("cannot parse {input:?}: {reason}")]
  Unparseable { input: String, reason: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
