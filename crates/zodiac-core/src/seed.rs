//! Deterministic placeholder data used when no stored list can be loaded.

use chrono::NaiveDate;

use crate::Person;

/// Number of records in the synthetic list.
pub const SEED_LEN: usize = 50;

/// Build the synthetic person list.
///
/// Record `i` is named after the `i % 26`-th letter pair counted from either
/// end of the alphabet, has email `MyMail{i}@gmail.com`, and is born on day
/// `i % 28 + 1` of month `i % 12 + 1` in year `1900 + i`.
pub fn synthetic_people() -> Vec<Person> {
  (0..SEED_LEN).map(synthetic_person).collect()
}

fn synthetic_person(i: usize) -> Person {
  let offset = (i % 26) as u8;
  let first = [(b'A' + offset) as char, (b'a' + offset) as char];
  let last = [(b'Z' - offset) as char, (b'z' - offset) as char];

  let day = (i % 28 + 1) as u32;
  let month = (i % 12 + 1) as u32;
  let year = 1900 + i as i32;
  let birth_date = NaiveDate::from_ymd_opt(year, month, day)
    .expect("day 1..=28 exists in every month");

  Person::new(
    String::from_iter(first),
    String::from_iter(last),
    birth_date,
    format!("MyMail{i}@gmail.com"),
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn seed_has_fifty_patterned_records() {
    let people = synthetic_people();
    assert_eq!(people.len(), SEED_LEN);

    let first = &people[0];
    assert_eq!(first.first_name, "Aa");
    assert_eq!(first.last_name, "Zz");
    assert_eq!(first.email, "MyMail0@gmail.com");
    assert_eq!(first.birth_date_string(), "01-01-1900");

    let p27 = &people[27];
    assert_eq!(p27.first_name, "Bb");
    assert_eq!(p27.last_name, "Yy");
    assert_eq!(p27.birth_date_string(), "28-04-1927");

    let last = &people[49];
    assert_eq!(last.first_name, "Xx");
    assert_eq!(last.last_name, "Cc");
    assert_eq!(last.email, "MyMail49@gmail.com");
    assert_eq!(last.birth_date_string(), "22-02-1949");
  }

  #[test]
  fn seed_is_deterministic() {
    assert_eq!(synthetic_people(), synthetic_people());
  }

  #[test]
  fn every_birth_date_follows_the_pattern() {
    for (i, person) in synthetic_people().iter().enumerate() {
      let expected = format!("{:02}-{:02}-{}", i % 28 + 1, i % 12 + 1, 1900 + i);
      assert_eq!(person.birth_date_string(), expected, "record {i}");
    }
  }
}
