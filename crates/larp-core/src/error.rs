//! Error types for `larp-core`.

use thiserror::Error;
use uuid::Uuid;

use crate::store::EntityKind;

#[derive(Debug, Error)]
pub enum Error {
  #[error("{kind} not found: {id}")]
  NotFound { kind: EntityKind, id: Uuid },

  #[error("unknown accommodation: {0:?}")]
  UnknownAccommodation(String),

  #[error("unknown bus stop: {0:?}")]
  UnknownBusStop(String),

  #[error("run must be a positive integer, got {0:?}")]
  InvalidRun(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a backend error. Used as `.map_err(Error::store)`.
  pub fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
