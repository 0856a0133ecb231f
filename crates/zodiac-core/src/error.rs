//! Error types for `zodiac-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("index {index} is out of range for a list of {len} people")]
  IndexOutOfRange { index: usize, len: usize },

  #[error("unknown person field: {0:?}")]
  UnknownField(String),

  #[error("invalid birth date {0:?}, expected DD-MM-YYYY")]
  InvalidDate(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a backend error from a [`crate::store::PersonStore`].
  pub fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
