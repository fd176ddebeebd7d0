//! Seed derivation.
//!
//! A daily draw is keyed by `"{identity}|{YYYY-MM-DD}"`, so the same user
//! gets the same card all day without the draw being stored anywhere.

use chrono::{NaiveDate, Utc};
use tracing::debug;

/// Hash a string to a signed 32-bit seed.
///
/// Folds each UTF-16 code unit as `hash * 31 + unit` with 32-bit wraparound.
/// The empty string hashes to 0.
pub fn hash_str(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
}

/// Derive the seed for an identity on a calendar date.
pub fn derive_seed(identity: &str, date: NaiveDate) -> i32 {
    let key = format!("{identity}|{}", date.format("%Y-%m-%d"));
    let seed = hash_str(&key);
    debug!(identity, %date, seed, "derived seed");
    seed
}

/// A seed from the current wall-clock time (UTC milliseconds, truncated to 32 bits).
///
/// Used for one-off spreads that are not meant to repeat.
pub fn seed_from_clock() -> i32 {
    // Truncation keeps the low 32 bits, i.e. the millisecond count mod 2^32.
    Utc::now().timestamp_millis() as i32
}
