//! Wire shapes for people: [`PersonView`] going out, [`PersonBody`] coming in.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use zodiac_core::{Person, person::local_today};

/// A person as rendered by the API, including the derived attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonView {
  pub first_name:    String,
  pub last_name:     String,
  /// `DD-MM-YYYY`.
  pub birth_date:    String,
  pub email:         String,
  pub is_adult:      bool,
  pub is_born_today: bool,
  /// `"{name} {symbol}"`, e.g. `"Rat 🐀"`.
  pub chinese_sign:  String,
  /// `"{name} {symbol}"`, e.g. `"Aries ♈"`.
  pub western_sign:  String,
}

impl PersonView {
  pub fn new(person: &Person, today: NaiveDate) -> Self {
    Self {
      first_name:    person.first_name.clone(),
      last_name:     person.last_name.clone(),
      birth_date:    person.birth_date_string(),
      email:         person.email.clone(),
      is_adult:      person.is_adult_on(today),
      is_born_today: person.is_born_today_on(today),
      chinese_sign:  person.chinese_sign().to_string(),
      western_sign:  person.western_sign().to_string(),
    }
  }

  /// Render a whole list against a single reference date.
  pub fn list(people: &[Person]) -> Vec<Self> {
    let today = local_today();
    people.iter().map(|p| Self::new(p, today)).collect()
  }
}

impl From<&Person> for PersonView {
  fn from(person: &Person) -> Self { Self::new(person, local_today()) }
}

/// JSON body accepted by `POST /people` and `PUT /people/{index}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonBody {
  pub first_name: String,
  pub last_name:  String,
  /// `DD-MM-YYYY`.
  pub birth_date: String,
  pub email:      String,
}

impl TryFrom<PersonBody> for Person {
  type Error = zodiac_core::Error;

  fn try_from(b: PersonBody) -> Result<Self, Self::Error> {
    let birth_date = Person::parse_birth_date(&b.birth_date)?;
    Ok(Person::new(b.first_name, b.last_name, birth_date, b.email))
  }
}
