//! The person record and its derived calendar attributes.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  sign::{ChineseSign, WesternSign},
};

/// On-disk and on-wire format of [`Person::birth_date`].
pub const BIRTH_DATE_FORMAT: &str = "%d-%m-%Y";

/// Age at which a person counts as an adult.
pub const ADULT_AGE: i32 = 18;

/// One entry in the person list.
///
/// Only the four identity fields are stored; everything else is computed from
/// the birth date on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Person {
  pub first_name: String,
  pub last_name:  String,
  #[serde(with = "birth_date_format")]
  pub birth_date: NaiveDate,
  pub email:      String,
}

impl Person {
  pub fn new(
    first_name: impl Into<String>,
    last_name: impl Into<String>,
    birth_date: NaiveDate,
    email: impl Into<String>,
  ) -> Self {
    Self {
      first_name: first_name.into(),
      last_name: last_name.into(),
      birth_date,
      email: email.into(),
    }
  }

  /// Parse a `DD-MM-YYYY` birth date.
  pub fn parse_birth_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), BIRTH_DATE_FORMAT)
      .map_err(|_| Error::InvalidDate(value.to_owned()))
  }

  /// The birth date formatted as `DD-MM-YYYY`.
  pub fn birth_date_string(&self) -> String {
    self.birth_date.format(BIRTH_DATE_FORMAT).to_string()
  }

  /// Completed years of age on `today`.
  pub fn age_on(&self, today: NaiveDate) -> i32 {
    let born = self.birth_date;
    let mut age = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
      age -= 1;
    }
    age
  }

  pub fn is_adult_on(&self, today: NaiveDate) -> bool {
    self.age_on(today) >= ADULT_AGE
  }

  pub fn is_born_today_on(&self, today: NaiveDate) -> bool {
    self.birth_date.month() == today.month() && self.birth_date.day() == today.day()
  }

  pub fn is_adult(&self) -> bool { self.is_adult_on(local_today()) }

  pub fn is_born_today(&self) -> bool { self.is_born_today_on(local_today()) }

  pub fn chinese_sign(&self) -> ChineseSign {
    ChineseSign::for_date(self.birth_date)
  }

  pub fn western_sign(&self) -> WesternSign {
    WesternSign::for_date(self.birth_date)
  }
}

/// The current date in the local time zone.
pub fn local_today() -> NaiveDate { Local::now().date_naive() }

mod birth_date_format {
  use chrono::NaiveDate;
  use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

  use super::BIRTH_DATE_FORMAT;

  pub fn serialize<S: Serializer>(
    date: &NaiveDate,
    serializer: S,
  ) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(BIRTH_DATE_FORMAT))
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
  ) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(&raw, BIRTH_DATE_FORMAT).map_err(|e| {
      D::Error::custom(format!("invalid birth date {raw:?}: {e}"))
    })
  }
}
