//! Field identifiers and the per-field toggle map.

use std::{
  ops::{Index, IndexMut},
  str::FromStr,
};

use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};

use crate::{Error, Result};

/// A sortable and filterable attribute of a [`Person`](crate::Person).
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum PersonField {
  FirstName,
  LastName,
  BirthDate,
  Email,
  Adult,
  BirthDay,
  ChineseSign,
  WesternSign,
}

impl PersonField {
  /// Parse a snake_case field name (e.g. `"birth_date"`).
  pub fn from_name(name: &str) -> Result<Self> {
    Self::from_str(name).map_err(|_| Error::UnknownField(name.to_owned()))
  }

  fn slot(self) -> usize { self as usize }
}

// ─── FieldMap ────────────────────────────────────────────────────────────────

/// Exactly one `T` per [`PersonField`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMap<T>([T; PersonField::COUNT]);

impl<T: Default> Default for FieldMap<T> {
  fn default() -> Self { Self(std::array::from_fn(|_| T::default())) }
}

impl<T> FieldMap<T> {
  /// Iterate over every field and its slot, in declaration order.
  pub fn iter(&self) -> impl Iterator<Item = (PersonField, &T)> {
    PersonField::iter().map(move |field| (field, &self[field]))
  }
}

impl<T> Index<PersonField> for FieldMap<T> {
  type Output = T;

  fn index(&self, field: PersonField) -> &T { &self.0[field.slot()] }
}

impl<T> IndexMut<PersonField> for FieldMap<T> {
  fn index_mut(&mut self, field: PersonField) -> &mut T {
    &mut self.0[field.slot()]
  }
}
