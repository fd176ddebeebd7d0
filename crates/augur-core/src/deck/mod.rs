//! Static reference decks.
//!
//! Tables are defined once as `'static` slices and never mutated. Draws work
//! on [`DivinationItem`] views built from them with [`items`].

mod angels;
mod runes;
mod tarot;

pub use angels::ANGEL_CARDS;
pub use runes::ELDER_FUTHARK;
pub use tarot::TAROT_DECK;

use crate::error::{CoreError, CoreResult};
use crate::item::{DeckKind, DivinationItem};

/// The items of one deck in canonical order.
pub fn items(kind: DeckKind) -> Vec<DivinationItem> {
    match kind {
        DeckKind::Tarot => TAROT_DECK.iter().map(DivinationItem::Tarot).collect(),
        DeckKind::Runes => ELDER_FUTHARK.iter().map(DivinationItem::Rune).collect(),
        DeckKind::AngelCards => ANGEL_CARDS.iter().map(DivinationItem::Angel).collect(),
    }
}

/// Number of items in a deck.
pub fn len(kind: DeckKind) -> usize {
    match kind {
        DeckKind::Tarot => TAROT_DECK.len(),
        DeckKind::Runes => ELDER_FUTHARK.len(),
        DeckKind::AngelCards => ANGEL_CARDS.len(),
    }
}

/// Look up an item in any deck by its stable identifier (case-insensitive).
pub fn find(id: &str) -> CoreResult<DivinationItem> {
    let id = id.trim();
    TAROT_DECK
        .iter()
        .find(|c| c.id.eq_ignore_ascii_case(id))
        .map(DivinationItem::Tarot)
        .or_else(|| {
            ELDER_FUTHARK
                .iter()
                .find(|r| r.id.eq_ignore_ascii_case(id))
                .map(DivinationItem::Rune)
        })
        .or_else(|| {
            ANGEL_CARDS
                .iter()
                .find(|a| a.id.eq_ignore_ascii_case(id))
                .map(DivinationItem::Angel)
        })
        .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))
}
