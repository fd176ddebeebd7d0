//! Pythagorean numerology.
//!
//! Computes a [`CosmicBlueprint`] from a [`UserProfile`]: name numbers from
//! the letter cipher, Life Path from the birth date, pinnacles, challenges,
//! and karmic debts. Also provides the universal day/month/year numbers and
//! the zodiac sign for a birth date.
//!
//! Nothing here fails. Missing or malformed input yields number 0 with the
//! "Incomplete Data" theme, so a blueprint is always complete.

pub mod blueprint;
pub mod calendar;
pub mod cipher;
pub mod cycles;
pub mod profile;
pub mod reduce;
pub mod themes;

pub use blueprint::{CosmicBlueprint, CosmicNumber, KARMIC_DEBT_NUMBERS, generate_blueprint};
pub use calendar::{ZodiacSign, universal_day, universal_month, universal_year, zodiac_sign};
pub use cipher::{NameFilter, letter_value, name_number};
pub use cycles::LifeCycle;
pub use profile::{BirthDate, UserProfile};
pub use reduce::{Reduced, digit_sum, is_master, reduce, reduce_plain};
pub use themes::{Theme, ThemeTable};
