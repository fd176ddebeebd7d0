//! Date-driven numbers: universal day/month/year and the sun sign.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::blueprint::CosmicNumber;
use crate::reduce::{digit_sum, reduce_plain};

fn year_digits(date: NaiveDate) -> u32 {
    digit_sum(date.year().unsigned_abs())
}

/// The universal day number: digits of day, month and year, reduced to one digit.
///
/// Masters are not kept, so the result is always 1 to 9.
pub fn universal_day(date: NaiveDate) -> CosmicNumber {
    let total = digit_sum(date.day()) + digit_sum(date.month()) + year_digits(date);
    CosmicNumber::core(reduce_plain(total))
}

/// The universal month number: digits of month and year, reduced to one digit.
pub fn universal_month(date: NaiveDate) -> CosmicNumber {
    CosmicNumber::core(reduce_plain(digit_sum(date.month()) + year_digits(date)))
}

/// The universal year number: digits of the year, reduced to one digit.
pub fn universal_year(date: NaiveDate) -> CosmicNumber {
    CosmicNumber::core(reduce_plain(year_digits(date)))
}

/// Western sun sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum ZodiacSign {
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

/// First (month, day) of each sign in calendar order. Dates before
/// January 20 belong to Capricorn.
const SIGN_STARTS: [(u32, u32, ZodiacSign); 12] = [
    (1, 20, ZodiacSign::Aquarius),
    (2, 19, ZodiacSign::Pisces),
    (3, 21, ZodiacSign::Aries),
    (4, 20, ZodiacSign::Taurus),
    (5, 21, ZodiacSign::Gemini),
    (6, 21, ZodiacSign::Cancer),
    (7, 23, ZodiacSign::Leo),
    (8, 23, ZodiacSign::Virgo),
    (9, 23, ZodiacSign::Libra),
    (10, 23, ZodiacSign::Scorpio),
    (11, 22, ZodiacSign::Sagittarius),
    (12, 22, ZodiacSign::Capricorn),
];

impl ZodiacSign {
    /// The sign for a calendar date.
    pub fn for_date(date: NaiveDate) -> Self {
        let key = (date.month(), date.day());
        SIGN_STARTS
            .iter()
            .rev()
            .find(|(month, day, _)| (*month, *day) <= key)
            .map_or(Self::Capricorn, |(_, _, sign)| *sign)
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// The sun sign for a `YYYY-MM-DD` birth date, or `None` if it is not a real date.
pub fn zodiac_sign(birth_date: &str) -> Option<ZodiacSign> {
    NaiveDate::parse_from_str(birth_date.trim(), "%Y-%m-%d")
        .ok()
        .map(ZodiacSign::for_date)
}
