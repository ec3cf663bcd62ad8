use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, DAY_NAMES, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use crate::prelude::*;
use serde::Serialize;
use std::str::FromStr;

/// A calendar-valid birth date in the range `1000-01-01..=9999-12-31`.
///
/// The only ways to obtain one are [`BirthDate::new`] and parsing the strict
/// `YYYY-MM-DD` string form, so a value in hand is always a real Gregorian
/// date. Displays and serializes back to the `YYYY-MM-DD` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct BirthDate {
    year: u16,
    month: u8,
    day: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0} (expected YYYY-MM-DD)")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

/// Day of the week, Monday first. Converts to/from the `0..=6` index used
/// by the calendar grid (`Monday = 0`, `Sunday = 6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days in grid order, Monday first.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Returns the grid index (`Monday = 0`, ..., `Sunday = 6`)
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the weekday for a grid index, or `None` if out of range
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::ALL.len() {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Returns the English name of the day
    pub const fn name(self) -> &'static str {
        DAY_NAMES[self as usize]
    }
}

impl From<Weekday> for u8 {
    fn from(day: Weekday) -> Self {
        day as Self
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl BirthDate {
    /// Creates a date from numeric components, validating each in turn.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `InvalidMonth`, or `InvalidDay` for
    /// the first component that is out of range for its year/month context.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::InvalidYear(year));
        }
        if !(1..=MAX_MONTH).contains(&month) {
            return Err(DateError::InvalidMonth(month));
        }
        if !(MIN_DAY..=days_in_month(year, month)).contains(&day) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year component
    #[inline]
    pub const fn year(self) -> u16 {
        self.year
    }

    /// Returns the month component (1-12)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day component (1-31)
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Age reached in `year`: plain year subtraction, with no month/day
    /// adjustment. Negative for birth years after `year`.
    pub const fn age_in_year(self, year: i32) -> i32 {
        year - self.year as i32
    }

    /// Weekday this month/day falls on when it occurs in `year`.
    ///
    /// The birth year is ignored: this answers "what weekday is this
    /// person's birthday in year Y", not "what weekday were they born".
    pub fn day_of_week_in_year(self, year: i32) -> Weekday {
        let native = native_weekday(year, self.month, self.day);
        // Shift the conventional Sunday=0 result to Monday=0
        let index = (native + 6) % 7;
        Weekday::ALL[index as usize]
    }
}

/// True iff `s` is a strict `YYYY-MM-DD` string denoting an existing
/// Gregorian calendar date with year in `1000..=9999`.
pub fn is_valid_date_format(s: &str) -> bool {
    s.parse::<BirthDate>().is_ok()
}

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Month offsets for Sakamoto's day-of-week method
const SAKAMOTO_OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// Weekday of `year-month-day` with the conventional Sunday=0 mapping
fn native_weekday(year: i32, month: u8, day: u8) -> i32 {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    let y = if month < 3 { year - 1 } else { year };
    (y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        + SAKAMOTO_OFFSETS[(month - 1) as usize]
        + i32::from(day))
    .rem_euclid(7)
}

impl FromStr for BirthDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DateError::EmptyInput);
        }

        // Strict shape: exactly 4 digits, '-', 2 digits, '-', 2 digits.
        // No trimming here: a date with stray whitespace is malformed.
        let bytes = s.as_bytes();
        let separator = DATE_SEPARATOR as u8;
        let well_formed = bytes.len() == 10
            && bytes[4] == separator
            && bytes[7] == separator
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !well_formed {
            return Err(DateError::InvalidFormat(s.to_owned()));
        }

        let year = parse_u16(&s[0..4])?;
        let month = parse_u8(&s[5..7])?;
        let day = parse_u8(&s[8..10])?;

        Self::new(year, month, day)
    }
}

/// Helper to parse u16 with better error messages
fn parse_u16(s: &str) -> Result<u16, DateError> {
    s.parse::<u16>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with better error messages
fn parse_u8(s: &str) -> Result<u8, DateError> {
    s.parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for BirthDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for BirthDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
