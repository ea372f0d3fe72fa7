//! Error types for the importer.
//!
//! Only failures that prevent reading the upload at all are errors. Anything
//! wrong with an individual row is reported in that row's status line.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("upload is not valid UTF-8: {0}")]
  Utf8(#[from] std::str::Utf8Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
