//! Error type for `larp-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// A column held a value outside the range of its Rust type.
  #[error("decode error: {0}")]
  Decode(String),

  /// `save_*` was called for a row that does not exist.
  #[error("{kind} not found: {id}")]
  NotFound { kind: &'static str, id: uuid::Uuid },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
