use crate::calendar::{CalendarData, organize_into_calendar_data};
use crate::consts::FIRST_SELECTABLE_YEAR;
use crate::person::{Person, parse_persons_json};

/// An input event from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The JSON text field changed
    JsonChanged(String),
    /// A different target year was selected
    YearChanged(i32),
}

/// The full application state as one immutable record: the validated
/// people, the selected year, the raw JSON text, the last validation
/// error, and the derived calendar.
///
/// State only changes through [`AppState::apply`], which returns a new
/// record and recomputes the calendar in full. A failed parse keeps the
/// previously valid people so the grid does not go blank mid-edit; the
/// error message is surfaced alongside instead.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    people: Vec<Person>,
    selected_year: i32,
    json_input: String,
    json_error: Option<String>,
    calendar: CalendarData,
}

impl AppState {
    /// Fresh state: no people, empty input, an empty 7-day calendar
    pub fn new(selected_year: i32) -> Self {
        Self {
            people: Vec::new(),
            selected_year,
            json_input: String::new(),
            json_error: None,
            calendar: CalendarData::new(),
        }
    }

    /// Pure transition function: applies one event and returns the next
    /// state, leaving `self` untouched.
    pub fn apply(&self, event: AppEvent) -> Self {
        let mut next = self.clone();
        match event {
            AppEvent::JsonChanged(json) => {
                next.json_input = json;
                if next.json_input.trim().is_empty() {
                    // Cleared input empties the grid without raising an error
                    next.people.clear();
                    next.json_error = None;
                } else {
                    match parse_persons_json(&next.json_input) {
                        Ok(people) => {
                            next.people = people;
                            next.json_error = None;
                        }
                        Err(err) => next.json_error = Some(err.to_string()),
                    }
                }
            }
            AppEvent::YearChanged(year) => next.selected_year = year,
        }
        next.calendar = organize_into_calendar_data(&next.people, next.selected_year);
        next
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub const fn selected_year(&self) -> i32 {
        self.selected_year
    }

    pub fn json_input(&self) -> &str {
        &self.json_input
    }

    pub fn json_error(&self) -> Option<&str> {
        self.json_error.as_deref()
    }

    pub const fn calendar(&self) -> &CalendarData {
        &self.calendar
    }
}

/// Years offered by the year selector, newest first, down to 2000
pub fn available_years(current_year: i32) -> Vec<i32> {
    (FIRST_SELECTABLE_YEAR..=current_year).rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::Weekday;

    const SAMPLE: &str = r#"[
        {"name": "Tyrion Lannister", "birthday": "1978-12-02"},
        {"name": "Cersei Lannister", "birthday": "1975-11-30"},
        {"name": "Daenerys Targaryen", "birthday": "1991-11-24"}
    ]"#;

    #[test]
    fn test_new_state_is_empty() {
        let state = AppState::new(2024);
        assert!(state.people().is_empty());
        assert_eq!(state.selected_year(), 2024);
        assert_eq!(state.json_input(), "");
        assert_eq!(state.json_error(), None);
        assert!(state.calendar().is_empty());
    }

    #[test]
    fn test_valid_json_populates_people_and_calendar() {
        let state = AppState::new(2024).apply(AppEvent::JsonChanged(SAMPLE.to_owned()));

        assert_eq!(state.people().len(), 3);
        assert_eq!(state.json_error(), None);
        assert_eq!(state.calendar().total_people(), 3);
    }

    #[test]
    fn test_invalid_json_keeps_previous_people() {
        let valid = AppState::new(2024).apply(AppEvent::JsonChanged(SAMPLE.to_owned()));
        let broken = valid.apply(AppEvent::JsonChanged("not json".to_owned()));

        // Previously valid people survive; the error is surfaced
        assert_eq!(broken.people().len(), 3);
        assert_eq!(broken.calendar().total_people(), 3);
        assert!(broken.json_error().is_some_and(|e| e.contains("Invalid JSON")));
        assert_eq!(broken.json_input(), "not json");
    }

    #[test]
    fn test_clearing_input_empties_grid_without_error() {
        let valid = AppState::new(2024).apply(AppEvent::JsonChanged(SAMPLE.to_owned()));
        let cleared = valid.apply(AppEvent::JsonChanged("   ".to_owned()));

        assert!(cleared.people().is_empty());
        assert_eq!(cleared.json_error(), None);
        assert!(cleared.calendar().is_empty());
    }

    #[test]
    fn test_fixing_input_clears_error() {
        let broken = AppState::new(2024).apply(AppEvent::JsonChanged("[".to_owned()));
        assert!(broken.json_error().is_some());

        let fixed = broken.apply(AppEvent::JsonChanged(SAMPLE.to_owned()));
        assert_eq!(fixed.json_error(), None);
        assert_eq!(fixed.people().len(), 3);
    }

    #[test]
    fn test_year_change_recomputes_calendar() {
        let state = AppState::new(2024)
            .apply(AppEvent::JsonChanged(
                r#"[{"name": "Leap Baby", "birthday": "2000-02-29"}]"#.to_owned(),
            ));
        assert_eq!(state.calendar().day(Weekday::Thursday).len(), 1);

        let moved = state.apply(AppEvent::YearChanged(2000));
        // Feb 29 fell on a Tuesday in 2000, and the age changes with the year
        assert!(moved.calendar().day(Weekday::Thursday).is_empty());
        let tuesday = moved.calendar().day(Weekday::Tuesday);
        assert_eq!(tuesday.len(), 1);
        assert_eq!(tuesday[0].age(), 0);
    }

    #[test]
    fn test_apply_does_not_mutate_previous_state() {
        let initial = AppState::new(2024);
        let _next = initial.apply(AppEvent::JsonChanged(SAMPLE.to_owned()));

        assert!(initial.people().is_empty());
        assert_eq!(initial.json_input(), "");
    }

    #[test]
    fn test_available_years_descend_to_2000() {
        let years = available_years(2024);
        assert_eq!(years.len(), 25);
        assert_eq!(years.first(), Some(&2024));
        assert_eq!(years.last(), Some(&2000));
        assert!(available_years(1999).is_empty());
    }
}
