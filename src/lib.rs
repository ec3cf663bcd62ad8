//! Turns a JSON list of birthdays into a 7-day weekly grid.
//!
//! The pipeline has three stages: strict validation of untrusted JSON into
//! [`Person`] records, leap-year-correct date math ([`BirthDate`],
//! [`Weekday`]), and the organizer that groups people per weekday, sorts
//! them youngest first, and colors them cyclically from a fixed palette
//! ([`organize_into_calendar_data`]). Everything is a pure computation over
//! its inputs; the grid is recomputed in full on every change.
//!
//! ```
//! use birthday_week::{Weekday, organize_into_calendar_data, parse_persons_json};
//!
//! let people = parse_persons_json(
//!     r#"[{"name": "Alice", "birthday": "1990-01-01"},
//!         {"name": "Bob", "birthday": "1985-01-02"}]"#,
//! )
//! .unwrap();
//!
//! let calendar = organize_into_calendar_data(&people, 2024);
//! // January 1st 2024 was a Monday
//! assert_eq!(calendar.day(Weekday::Monday)[0].name(), "Alice");
//! assert_eq!(calendar.day(Weekday::Monday)[0].age(), 34);
//! assert_eq!(calendar.day(Weekday::Tuesday)[0].name(), "Bob");
//! ```

mod calendar;
mod consts;
mod date;
mod layout;
mod person;
mod prelude;
mod state;

pub use calendar::{
    CalendarData, ProcessedPerson, assign_colors_within_days, organize_into_calendar_data,
    process_persons, sort_people_by_age,
};
pub use consts::*;
pub use date::{
    BirthDate, DateError, Weekday, days_in_month, is_leap_year, is_valid_date_format,
};
pub use layout::{
    SquareSizeOptions, calculate_square_size, calculate_square_size_with, format_date_of_birth,
    get_initials,
};
pub use person::{ParseError, Person, ValidateError, parse_persons_json, validate_person};
pub use state::{AppEvent, AppState, available_years};
