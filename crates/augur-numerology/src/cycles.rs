//! Pinnacles and challenges: the four life-stage cycles.

use serde::{Deserialize, Serialize};

use crate::profile::BirthDate;
use crate::reduce::reduce;
use crate::themes::{PLACEHOLDER, ThemeTable};

/// Age at which the first cycle ends, before subtracting the Life Path.
const FIRST_CYCLE_BASE: u32 = 36;
/// Length of the second and third cycles in years.
const CYCLE_YEARS: u32 = 9;

/// One pinnacle or challenge with the ages it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeCycle {
    /// The cycle number.
    pub number: u32,
    /// Theme title.
    pub theme: String,
    /// Theme description.
    pub description: String,
    /// Human-readable age range such as "Birth to 33".
    pub age_range: String,
}

impl LifeCycle {
    fn new(number: u32, table: ThemeTable, age_range: String) -> Self {
        let theme = table.lookup(number);
        Self {
            number,
            theme: theme.theme.to_string(),
            description: theme.description.to_string(),
            age_range,
        }
    }

    fn unknown() -> Self {
        Self {
            number: 0,
            theme: PLACEHOLDER.theme.to_string(),
            description: PLACEHOLDER.description.to_string(),
            age_range: "Unknown".to_string(),
        }
    }
}

/// Age ranges of the four cycles for a Life Path number.
///
/// The first cycle ends at `36 - life_path`, the next two last nine years
/// each, and the fourth is open-ended.
pub fn age_ranges(life_path: u32) -> [String; 4] {
    let end = FIRST_CYCLE_BASE.saturating_sub(life_path);
    [
        format!("Birth to {end}"),
        format!("{} to {}", end + 1, end + CYCLE_YEARS),
        format!("{} to {}", end + CYCLE_YEARS + 1, end + 2 * CYCLE_YEARS),
        format!("{} onwards", end + 2 * CYCLE_YEARS + 1),
    ]
}

/// The reduced month, day and year a cycle calculation starts from.
fn reduced_parts(date: BirthDate) -> (u32, u32, u32) {
    (reduce(date.month), reduce(date.day), reduce(date.year))
}

fn build(numbers: [u32; 4], table: ThemeTable, life_path: u32) -> [LifeCycle; 4] {
    let ranges = age_ranges(life_path);
    std::array::from_fn(|i| LifeCycle::new(numbers[i], table, ranges[i].clone()))
}

/// The four pinnacles. Without a birth date every cycle is unknown.
pub fn pinnacles(birth: Option<BirthDate>, life_path: u32) -> [LifeCycle; 4] {
    let Some(date) = birth.filter(|_| life_path != 0) else {
        return std::array::from_fn(|_| LifeCycle::unknown());
    };
    let (month, day, year) = reduced_parts(date);
    let first = reduce(month + day);
    let second = reduce(day + year);
    let third = reduce(first + second);
    let fourth = reduce(month + year);
    build([first, second, third, fourth], ThemeTable::Pinnacle, life_path)
}

/// The four challenges. Without a birth date every cycle is unknown.
pub fn challenges(birth: Option<BirthDate>, life_path: u32) -> [LifeCycle; 4] {
    let Some(date) = birth.filter(|_| life_path != 0) else {
        return std::array::from_fn(|_| LifeCycle::unknown());
    };
    let (month, day, year) = reduced_parts(date);
    let first = reduce(month.abs_diff(day));
    let second = reduce(day.abs_diff(year));
    let third = reduce(first.abs_diff(second));
    let fourth = reduce(month.abs_diff(year));
    build([first, second, third, fourth], ThemeTable::Challenge, life_path)
}
