use crate::date::{BirthDate, DateError};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// A validated birthday entry: a non-empty (post-trim) name and a
/// calendar-valid birth date.
///
/// Constructed only through validation, so every `Person` in hand satisfies
/// both invariants and the calendar organizer can never fail on one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    name: String,
    birthday: BirthDate,
}

/// Error for a single candidate record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidateError {
    /// Candidate is not a JSON object.
    #[error("Person must be a JSON object")]
    NotAnObject,

    /// A required field is absent.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A field is present but not a string.
    #[error("Field '{0}' must be a string")]
    NotAString(&'static str),

    /// Name trims to the empty string.
    #[error("Field 'name' cannot be empty")]
    EmptyName,

    /// Birthday string is malformed or not a real calendar date.
    #[error("Field 'birthday' has invalid value \"{value}\": {source}")]
    InvalidBirthday {
        value: String,
        #[source]
        source: DateError,
    },
}

/// Error for a whole input batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input text is empty or whitespace-only.
    #[error("Input cannot be empty")]
    EmptyInput,

    /// Input text is not syntactically valid JSON.
    #[error("Invalid JSON format: {0}")]
    InvalidJson(String),

    /// Parsed JSON is not an array.
    #[error("Input must contain an array of people")]
    NotAnArray,

    /// Parsed array has no elements.
    #[error("Person list cannot be empty")]
    EmptyList,

    /// An element failed validation; `index` is its position in the array.
    #[error("Person at index {index}: {source}")]
    InvalidPerson {
        index: usize,
        #[source]
        source: ValidateError,
    },

    /// Two or more entries share a name, compared case-insensitively after
    /// trimming. Carries the lowercase name(s), comma-separated.
    #[error("Duplicate names found: {0}")]
    DuplicateNames(String),
}

impl Person {
    /// Builds a `Person` from raw string fields, trimming the name.
    /// The birthday string is parsed strictly as `YYYY-MM-DD`.
    ///
    /// # Errors
    /// Returns `ValidateError::EmptyName` or `ValidateError::InvalidBirthday`.
    pub fn new(name: &str, birthday: &str) -> Result<Self, ValidateError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidateError::EmptyName);
        }
        let birthday = birthday
            .parse::<BirthDate>()
            .map_err(|source| ValidateError::InvalidBirthday {
                value: birthday.to_owned(),
                source,
            })?;
        Ok(Self {
            name: trimmed.to_owned(),
            birthday,
        })
    }

    /// Returns the trimmed name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the birth date
    pub const fn birthday(&self) -> BirthDate {
        self.birthday
    }
}

/// Validates one untyped JSON value as a person record.
///
/// Checks run in a fixed order and the first failure wins: object shape,
/// presence of `name` then `birthday`, string type of `name` then
/// `birthday`, non-empty trimmed name, then the date format itself.
///
/// # Errors
/// Returns the `ValidateError` for the first check that fails.
pub fn validate_person(value: &Value) -> Result<Person, ValidateError> {
    let Some(object) = value.as_object() else {
        return Err(ValidateError::NotAnObject);
    };

    let name = object
        .get("name")
        .ok_or(ValidateError::MissingField("name"))?;
    let birthday = object
        .get("birthday")
        .ok_or(ValidateError::MissingField("birthday"))?;

    let name = name.as_str().ok_or(ValidateError::NotAString("name"))?;
    let birthday = birthday
        .as_str()
        .ok_or(ValidateError::NotAString("birthday"))?;

    Person::new(name, birthday)
}

/// Parses raw JSON text into a validated person list.
///
/// The expected shape is an array of objects with string fields `name` and
/// `birthday`. Structural failures short-circuit; element validation stops
/// at the first failing element and reports its index. No partial list is
/// ever returned.
///
/// # Errors
/// See [`ParseError`] for the failure taxonomy.
pub fn parse_persons_json(text: &str) -> Result<Vec<Person>, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let value: Value =
        serde_json::from_str(text).map_err(|err| ParseError::InvalidJson(err.to_string()))?;

    let Value::Array(items) = value else {
        return Err(ParseError::NotAnArray);
    };
    if items.is_empty() {
        return Err(ParseError::EmptyList);
    }

    let mut people = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let person =
            validate_person(item).map_err(|source| ParseError::InvalidPerson { index, source })?;
        people.push(person);
    }

    let duplicates = duplicate_names(&people);
    if !duplicates.is_empty() {
        return Err(ParseError::DuplicateNames(duplicates.join(", ")));
    }

    Ok(people)
}

/// Lowercase names that appear more than once, in first-seen order
fn duplicate_names(people: &[Person]) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for person in people {
        *counts.entry(person.name().to_lowercase()).or_insert(0) += 1;
    }

    let mut duplicates = Vec::new();
    for person in people {
        let lower = person.name().to_lowercase();
        if counts.get(&lower).is_some_and(|&count| count > 1) && !duplicates.contains(&lower) {
            duplicates.push(lower);
        }
    }
    duplicates
}
