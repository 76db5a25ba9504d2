//! Longest-prefix lookup over the embedded metadata tables.
//!
//! Table keys are digit strings matched against `<country code><national
//! significant number>`, e.g. `"234803"` for Nigerian numbers starting 803.

pub(crate) fn longest_match<T: Copy>(
  table: &[(&'static str, T)],
  digits: &str,
) -> Option<T> {
  table
    .iter()
    .filter(|(prefix, _)| digits.starts_with(prefix))
    .max_by_key(|(prefix, _)| prefix.len())
    .map(|&(_, value)| value)
}
