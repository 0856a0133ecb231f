//! The `PersonStore` trait.
//!
//! Implemented by persistence backends (e.g. `zodiac-store-json`). The
//! [`PersonListService`](crate::PersonListService) depends on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::Person;

/// Durable storage for the whole, ordered person list.
///
/// There are no partial writes: `save` always replaces everything previously
/// stored, and `load` always returns the complete list.
pub trait PersonStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read and decode the stored list. Fails if nothing is stored yet or the
  /// stored data cannot be decoded.
  fn load(&self) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  /// Replace the stored list with `people`, preserving their order.
  fn save<'a>(
    &'a self,
    people: &'a [Person],
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
