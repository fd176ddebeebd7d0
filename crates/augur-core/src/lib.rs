//! Core types for Augur: divination items, static decks, and spreads.
//!
//! Every table in this crate is immutable `'static` data. Draw and cast
//! operations live in `augur-draw`; numerology lives in `augur-numerology`.

/// Static reference decks and lookup by identifier.
pub mod deck;
/// Error types used throughout the crate.
pub mod error;
/// Divination item types: tarot cards, runes, angel cards.
pub mod item;
/// The catalogue of reading spreads.
pub mod spread;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export item types.
pub use item::{AngelCard, Arcana, DeckKind, DivinationItem, Element, Rune, TarotCard};
/// Re-export spread types.
pub use spread::SpreadKind;
