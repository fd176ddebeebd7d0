//! Deterministic draws and rune casting.
//!
//! A daily or spread draw derives a seed ([`seed`]), builds a private
//! [`SeededRng`], and shuffles or indexes a deck ([`draw`]). Rune casts
//! ([`cast`]) scatter runes on a canvas and group them into clusters; they
//! use an injected `rand` RNG and are not replayable from a seed.

pub mod cast;
pub mod config;
pub mod draw;
pub mod drawn;
pub mod prng;
pub mod seed;
pub mod shuffle;

pub use cast::{CastSummary, RuneCaster, cast_runes};
pub use config::{CastConfig, DrawConfig};
pub use draw::{Dealer, daily_card, deal_spread, draw_daily, prepare_deck, summarize_spread};
pub use drawn::{DrawnItem, Orientation, Proximity, RunePlacement};
pub use prng::SeededRng;
pub use seed::{derive_seed, hash_str, seed_from_clock};
