//! Sort and filter toggles over a person list.
//!
//! Both toggle sets hold one slot per [`PersonField`]. Sorting reorders the
//! list in place; filtering only ever produces a new view.

use std::cmp::Ordering;

use chrono::NaiveDate;
use rayon::prelude::*;

use crate::{FieldMap, Person, PersonField};

// ─── Sort ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
  Ascending,
  Descending,
}

/// Per-field sort direction flags. A fresh field has never been sorted, so
/// its first toggle yields [`Direction::Ascending`].
#[derive(Debug, Clone, Default)]
pub struct SortState(FieldMap<bool>);

impl SortState {
  /// Flip the direction for `field` and return the new direction.
  pub fn toggle(&mut self, field: PersonField) -> Direction {
    let ascending = &mut self.0[field];
    *ascending = !*ascending;
    if *ascending { Direction::Ascending } else { Direction::Descending }
  }
}

/// Compare two people by the natural ordering of `field`.
///
/// `today` is only consulted for the adult and birthday fields.
pub fn compare(
  field: PersonField,
  a: &Person,
  b: &Person,
  today: NaiveDate,
) -> Ordering {
  match field {
    PersonField::FirstName => a.first_name.cmp(&b.first_name),
    PersonField::LastName => a.last_name.cmp(&b.last_name),
    PersonField::BirthDate => a.birth_date.cmp(&b.birth_date),
    PersonField::Email => a.email.cmp(&b.email),
    PersonField::Adult => a.is_adult_on(today).cmp(&b.is_adult_on(today)),
    PersonField::BirthDay => {
      a.is_born_today_on(today).cmp(&b.is_born_today_on(today))
    }
    PersonField::ChineseSign => {
      a.chinese_sign().name().cmp(b.chinese_sign().name())
    }
    PersonField::WesternSign => {
      a.western_sign().name().cmp(b.western_sign().name())
    }
  }
}

/// Stable in-place sort. Equal keys keep their relative order in either
/// direction.
pub fn sort_people(
  people: &mut [Person],
  field: PersonField,
  direction: Direction,
  today: NaiveDate,
) {
  match direction {
    Direction::Ascending => people.sort_by(|a, b| compare(field, a, b, today)),
    Direction::Descending => people.sort_by(|a, b| compare(field, b, a, today)),
  }
}

// ─── Filter ──────────────────────────────────────────────────────────────────

/// Per-field filter targets. `Some(value)` enables the filter for that field.
#[derive(Debug, Clone, Default)]
pub struct FilterState(FieldMap<Option<String>>);

impl FilterState {
  pub fn enable(&mut self, field: PersonField, value: impl Into<String>) {
    self.0[field] = Some(value.into());
  }

  pub fn disable(&mut self, field: PersonField) { self.0[field] = None; }

  pub fn target(&self, field: PersonField) -> Option<&str> {
    self.0[field].as_deref()
  }

  /// Fields with an enabled filter, with their targets.
  pub fn enabled(&self) -> impl Iterator<Item = (PersonField, &str)> {
    self
      .0
      .iter()
      .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
  }

  /// `true` iff `person` satisfies every enabled filter.
  pub fn accepts(&self, person: &Person, today: NaiveDate) -> bool {
    self
      .enabled()
      .all(|(field, target)| matches(field, person, target, today))
  }

  /// The people accepted by every enabled filter, in list order.
  pub fn view(&self, people: &[Person], today: NaiveDate) -> Vec<Person> {
    people
      .par_iter()
      .filter(|p| self.accepts(p, today))
      .cloned()
      .collect()
  }
}

/// Evaluate the predicate for a single field against `target`.
pub fn matches(
  field: PersonField,
  person: &Person,
  target: &str,
  today: NaiveDate,
) -> bool {
  match field {
    PersonField::FirstName => contains_ignore_case(&person.first_name, target),
    PersonField::LastName => contains_ignore_case(&person.last_name, target),
    PersonField::Email => contains_ignore_case(&person.email, target),
    PersonField::BirthDate => person.birth_date_string() == target,
    PersonField::Adult => bool_text_eq(person.is_adult_on(today), target),
    PersonField::BirthDay => bool_text_eq(person.is_born_today_on(today), target),
    PersonField::ChineseSign => person.chinese_sign().to_string() == target,
    PersonField::WesternSign => person.western_sign().to_string() == target,
  }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
  haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn bool_text_eq(value: bool, target: &str) -> bool {
  target.eq_ignore_ascii_case(if value { "true" } else { "false" })
}
