use crate::consts::{MAX_SQUARE_SIZE, MIN_SQUARE_SIZE, MONTH_NAMES, SQUARE_GAP};
use crate::date::BirthDate;

/// Knobs for [`calculate_square_size_with`]. `Default` gives the standard
/// grid: 4px gap, squares clamped to 20-80px.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareSizeOptions {
    pub gap: u32,
    pub min_size: u32,
    pub max_size: u32,
}

impl Default for SquareSizeOptions {
    fn default() -> Self {
        Self {
            gap: SQUARE_GAP,
            min_size: MIN_SQUARE_SIZE,
            max_size: MAX_SQUARE_SIZE,
        }
    }
}

/// Square size in pixels for `count` people in a day column of
/// `container_width` pixels, with the default gap and clamps.
pub fn calculate_square_size(container_width: u32, count: usize) -> u32 {
    calculate_square_size_with(container_width, count, SquareSizeOptions::default())
}

/// Like [`calculate_square_size`] with explicit options.
///
/// People are laid out on a near-square grid of `ceil(sqrt(count))`
/// columns; the raw size is the gap-adjusted width divided by the column
/// count, clamped to `min_size..=max_size`. Zero people gives `min_size`.
pub fn calculate_square_size_with(
    container_width: u32,
    count: usize,
    options: SquareSizeOptions,
) -> u32 {
    if count == 0 {
        return options.min_size;
    }

    let cols = columns_for(count);
    // Signed math: narrow containers can leave less room than the gaps need
    let available = i64::from(container_width) - i64::from(cols - 1) * i64::from(options.gap);
    let raw = available.div_euclid(i64::from(cols));

    raw.clamp(i64::from(options.min_size), i64::from(options.max_size)) as u32
}

/// Columns of the near-square grid: `ceil(sqrt(count))`
fn columns_for(count: usize) -> u32 {
    (count as f64).sqrt().ceil() as u32
}

/// Initials shown inside a person square: `"?"` for a blank name, the
/// first two characters of a single-word name, otherwise the first
/// character of each of the first two words. Always uppercased.
pub fn get_initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let Some(first) = words.next() else {
        return "?".to_owned();
    };

    match words.next() {
        Some(second) => {
            let mut initials = String::new();
            initials.extend(first.chars().take(1));
            initials.extend(second.chars().take(1));
            initials.to_uppercase()
        }
        None => first.chars().take(2).collect::<String>().to_uppercase(),
    }
}

/// Human-readable date of birth for the square tooltip, e.g. `June 15, 1990`
pub fn format_date_of_birth(birthday: BirthDate) -> String {
    format!(
        "{} {}, {}",
        MONTH_NAMES[birthday.month() as usize],
        birthday.day(),
        birthday.year()
    )
}
