//! Splits an upload into rows and routes each to its importer.
//!
//! The first line is a header and is skipped unread. Remaining lines are
//! comma-separated with `|` as the quote character. Every data row produces
//! exactly one status line, in file order. Rows are committed one at a time;
//! a failing row leaves earlier rows in place.

use std::str::FromStr;

use csv::ReaderBuilder;
use larp_core::store::LarpStore;

use crate::{
  Result,
  character::import_character_row,
  row::{FileType, Row},
  uniform::import_uniform_row,
};

/// Decode `data` as UTF-8 and import it. See [`process_str`].
pub async fn process<S: LarpStore>(
  store: &S,
  event_name: &str,
  data: &[u8],
  file_type: &str,
) -> Result<Vec<String>> {
  let text = std::str::from_utf8(data)?;
  Ok(process_str(store, event_name, text, file_type).await)
}

/// Import already-decoded CSV text, returning one status line per data row.
///
/// An unrecognised `file_type` yields `"File type {tag} not recognised"` for
/// every row without touching the store.
pub async fn process_str<S: LarpStore>(
  store: &S,
  event_name: &str,
  text: &str,
  file_type: &str,
) -> Vec<String> {
  let body = text.split_once('\n').map_or("", |(_, rest)| rest);
  let mut reader = ReaderBuilder::new()
    .has_headers(false)
    .flexible(true)
    .quote(b'|')
    .from_reader(body.as_bytes());

  let parsed = FileType::from_str(file_type);
  let mut report = Vec::new();

  for (index, record) in reader.records().enumerate() {
    let n = index + 1;
    let record = match record {
      Ok(record) => record,
      Err(e) => {
        tracing::warn!(row = n, error = %e, "malformed row");
        report.push(format!("Row {n} NOT PROCESSED: {e}"));
        continue;
      }
    };

    let Ok(kind) = &parsed else {
      report.push(format!("File type {file_type} not recognised"));
      continue;
    };

    let row = Row::parse(*kind, &record);
    let outcome = match &row {
      Row::Character(row) => import_character_row(store, event_name, row).await,
      Row::Uniform(row) => import_uniform_row(store, event_name, row).await,
    };
    let status = match outcome {
      Ok(status) => status,
      Err(e) => {
        tracing::warn!(row = n, error = %e, "row not processed");
        row.not_processed()
      }
    };
    tracing::debug!(row = n, %status);
    report.push(status);
  }

  tracing::info!(rows = report.len(), file_type, "import finished");
  report
}
