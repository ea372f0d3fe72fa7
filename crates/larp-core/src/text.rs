//! Field-level checks shared by the importers.

use crate::{Error, Result};

/// Run number used when a row leaves the run column empty.
pub const DEFAULT_RUN: u32 = 1;

/// `true` when `text` carries no usable data (empty or whitespace only).
pub fn is_blank(text: &str) -> bool { text.trim().is_empty() }

/// Parse a run column. Blank means [`DEFAULT_RUN`]; anything else must be a
/// positive integer.
pub fn parse_run(raw: &str) -> Result<u32> {
  if is_blank(raw) {
    return Ok(DEFAULT_RUN);
  }
  match raw.trim().parse::<u32>() {
    Ok(run) if run > 0 => Ok(run),
    _ => Err(Error::InvalidRun(raw.to_owned())),
  }
}

/// Parse an integer measurement, coercing blank or malformed input to 0.
pub fn parse_measurement(raw: &str) -> i32 { raw.trim().parse().unwrap_or(0) }
