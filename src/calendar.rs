use crate::consts::COLOR_PALETTE;
use crate::date::{BirthDate, Weekday};
use crate::person::Person;
use serde::Serialize;

/// A person enriched with everything the weekly grid needs: age in the
/// target year, the weekday their birthday falls on that year, and a
/// display color from the fixed palette.
///
/// Derived data only; recomputed in full whenever the person list or the
/// target year changes, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedPerson {
    name: String,
    birthday: BirthDate,
    age: i32,
    day_of_week: Weekday,
    color: &'static str,
}

impl ProcessedPerson {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn birthday(&self) -> BirthDate {
        self.birthday
    }

    /// Age in the target year (year subtraction, may be negative)
    pub const fn age(&self) -> i32 {
        self.age
    }

    /// Weekday the birthday falls on in the target year
    pub const fn day_of_week(&self) -> Weekday {
        self.day_of_week
    }

    /// Hex color code from the palette
    pub const fn color(&self) -> &'static str {
        self.color
    }
}

/// The per-weekday grouping consumed by the presentation layer. Always
/// holds exactly seven buckets, Monday through Sunday, each possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct CalendarData {
    days: [Vec<ProcessedPerson>; 7],
}

impl CalendarData {
    /// An empty calendar: seven buckets, no people
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bucket for a weekday
    pub fn day(&self, day: Weekday) -> &[ProcessedPerson] {
        &self.days[day.index()]
    }

    /// Iterates buckets in grid order, Monday first
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[ProcessedPerson])> {
        Weekday::ALL.iter().map(|day| (*day, self.day(*day)))
    }

    /// Total number of people across all buckets
    pub fn total_people(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }
}

/// Enriches each person with age, weekday, and a provisional color taken
/// from the person's position in the input list. The provisional color is
/// overwritten per bucket by [`assign_colors_within_days`].
pub fn process_persons(people: &[Person], year: i32) -> Vec<ProcessedPerson> {
    people
        .iter()
        .enumerate()
        .map(|(position, person)| ProcessedPerson {
            name: person.name().to_owned(),
            birthday: person.birthday(),
            age: person.birthday().age_in_year(year),
            day_of_week: person.birthday().day_of_week_in_year(year),
            color: COLOR_PALETTE[position % COLOR_PALETTE.len()],
        })
        .collect()
}

/// Returns a copy sorted by ascending age. The sort is stable: equal ages
/// keep their input order. The input is left untouched.
pub fn sort_people_by_age(people: &[ProcessedPerson]) -> Vec<ProcessedPerson> {
    let mut sorted = people.to_vec();
    sorted.sort_by_key(ProcessedPerson::age);
    sorted
}

/// Returns a copy where every bucket restarts the palette cycle at index 0,
/// so colors depend only on position within the bucket, not on global
/// position. The input is left untouched.
pub fn assign_colors_within_days(calendar: &CalendarData) -> CalendarData {
    let days = calendar.days.clone().map(|bucket| {
        bucket
            .into_iter()
            .enumerate()
            .map(|(position, person)| ProcessedPerson {
                color: COLOR_PALETTE[position % COLOR_PALETTE.len()],
                ..person
            })
            .collect()
    });
    CalendarData { days }
}

/// The single entry point for the presentation layer: turns a validated
/// person list and a target year into the weekly grid structure.
///
/// Deterministic and side-effect-free: people are enriched, distributed
/// into their weekday buckets preserving input order, sorted youngest
/// first within each bucket, and recolored cyclically per bucket. Always
/// returns all seven buckets; date math on validated people cannot fail.
pub fn organize_into_calendar_data(people: &[Person], year: i32) -> CalendarData {
    let processed = process_persons(people, year);

    let mut days: [Vec<ProcessedPerson>; 7] = Default::default();
    for person in processed {
        days[person.day_of_week.index()].push(person);
    }
    for bucket in &mut days {
        *bucket = sort_people_by_age(bucket);
    }

    assign_colors_within_days(&CalendarData { days })
}
