//! Chinese and western zodiac signs derived from a birth date.

use std::fmt;

use chrono::{Datelike, NaiveDate};

// ─── Chinese ─────────────────────────────────────────────────────────────────

/// The twelve animals of the Chinese zodiac, keyed by calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChineseSign {
  Rat,
  Ox,
  Tiger,
  Rabbit,
  Dragon,
  Snake,
  Horse,
  Goat,
  Monkey,
  Rooster,
  Dog,
  Pig,
}

impl ChineseSign {
  const CYCLE: [Self; 12] = [
    Self::Rat,
    Self::Ox,
    Self::Tiger,
    Self::Rabbit,
    Self::Dragon,
    Self::Snake,
    Self::Horse,
    Self::Goat,
    Self::Monkey,
    Self::Rooster,
    Self::Dog,
    Self::Pig,
  ];

  /// 1900 is a year of the Rat.
  pub fn for_year(year: i32) -> Self {
    Self::CYCLE[(year - 1900).rem_euclid(12) as usize]
  }

  pub fn for_date(date: NaiveDate) -> Self { Self::for_year(date.year()) }

  pub fn name(self) -> &'static str {
    match self {
      Self::Rat => "Rat",
      Self::Ox => "Ox",
      Self::Tiger => "Tiger",
      Self::Rabbit => "Rabbit",
      Self::Dragon => "Dragon",
      Self::Snake => "Snake",
      Self::Horse => "Horse",
      Self::Goat => "Goat",
      Self::Monkey => "Monkey",
      Self::Rooster => "Rooster",
      Self::Dog => "Dog",
      Self::Pig => "Pig",
    }
  }

  pub fn symbol(self) -> &'static str {
    match self {
      Self::Rat => "🐀",
      Self::Ox => "🐂",
      Self::Tiger => "🐅",
      Self::Rabbit => "🐇",
      Self::Dragon => "🐉",
      Self::Snake => "🐍",
      Self::Horse => "🐎",
      Self::Goat => "🐐",
      Self::Monkey => "🐒",
      Self::Rooster => "🐓",
      Self::Dog => "🐕",
      Self::Pig => "🐖",
    }
  }
}

/// Renders as `"{name} {symbol}"`, the form matched by sign filters.
impl fmt::Display for ChineseSign {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.name(), self.symbol())
  }
}

// ─── Western ─────────────────────────────────────────────────────────────────

/// The twelve western (tropical) zodiac signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WesternSign {
  Aries,
  Taurus,
  Gemini,
  Cancer,
  Leo,
  Virgo,
  Libra,
  Scorpio,
  Sagittarius,
  Capricorn,
  Aquarius,
  Pisces,
}

impl WesternSign {
  /// The sign that begins in each month (January first) and its first day.
  const STARTS: [(u32, Self); 12] = [
    (20, Self::Aquarius),
    (19, Self::Pisces),
    (21, Self::Aries),
    (20, Self::Taurus),
    (21, Self::Gemini),
    (21, Self::Cancer),
    (23, Self::Leo),
    (23, Self::Virgo),
    (23, Self::Libra),
    (23, Self::Scorpio),
    (22, Self::Sagittarius),
    (22, Self::Capricorn),
  ];

  pub fn for_date(date: NaiveDate) -> Self {
    let month = date.month0() as usize;
    let (first_day, sign) = Self::STARTS[month];
    if date.day() >= first_day {
      sign
    } else {
      Self::STARTS[(month + 11) % 12].1
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      Self::Aries => "Aries",
      Self::Taurus => "Taurus",
      Self::Gemini => "Gemini",
      Self::Cancer => "Cancer",
      Self::Leo => "Leo",
      Self::Virgo => "Virgo",
      Self::Libra => "Libra",
      Self::Scorpio => "Scorpio",
      Self::Sagittarius => "Sagittarius",
      Self::Capricorn => "Capricorn",
      Self::Aquarius => "Aquarius",
      Self::Pisces => "Pisces",
    }
  }

  pub fn symbol(self) -> &'static str {
    match self {
      Self::Aries => "♈",
      Self::Taurus => "♉",
      Self::Gemini => "♊",
      Self::Cancer => "♋",
      Self::Leo => "♌",
      Self::Virgo => "♍",
      Self::Libra => "♎",
      Self::Scorpio => "♏",
      Self::Sagittarius => "♐",
      Self::Capricorn => "♑",
      Self::Aquarius => "♒",
      Self::Pisces => "♓",
    }
  }
}

/// Renders as `"{name} {symbol}"`, the form matched by sign filters.
impl fmt::Display for WesternSign {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.name(), self.symbol())
  }
}
