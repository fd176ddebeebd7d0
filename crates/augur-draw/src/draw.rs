//! Seeded draws: the daily card, spread deals, and prepared decks.
//!
//! Each operation builds its own [`SeededRng`] from the seed it is given, so
//! two draws never share generator state.

use augur_core::deck;
use augur_core::{DeckKind, DivinationItem, SpreadKind};
use chrono::NaiveDate;
use tracing::debug;

use crate::config::DrawConfig;
use crate::drawn::{DrawnItem, Orientation};
use crate::prng::SeededRng;
use crate::seed::derive_seed;
use crate::shuffle::shuffle;

/// Performs seeded draws with a given configuration.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    config: DrawConfig,
}

impl Dealer {
    /// Create a dealer with a custom configuration.
    pub fn new(config: DrawConfig) -> Self {
        Self { config }
    }

    /// The dealer's configuration.
    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    /// Roll an orientation for every orientation-capable item, in order.
    ///
    /// Items that cannot be reversed get no orientation and consume no
    /// generator output.
    pub fn orient(&self, items: Vec<DivinationItem>, rng: &mut SeededRng) -> Vec<DrawnItem> {
        items
            .into_iter()
            .map(|item| self.orient_one(item, rng))
            .collect()
    }

    fn orient_one(&self, item: DivinationItem, rng: &mut SeededRng) -> DrawnItem {
        let drawn = DrawnItem::new(item);
        if !item.is_orientable() {
            return drawn;
        }
        let orientation = if rng.next_float() < self.config.reversal_chance {
            Orientation::Reversed
        } else {
            Orientation::Upright
        };
        drawn.with_orientation(orientation)
    }

    /// Draw one item by index from the unshuffled deck, then roll its orientation.
    ///
    /// Returns `None` only for an empty deck.
    pub fn draw_daily(&self, deck: &[DivinationItem], seed: i32) -> Option<DrawnItem> {
        let mut rng = SeededRng::new(seed);
        let index = rng.next_index(deck.len());
        let item = *deck.get(index)?;
        let drawn = self.orient_one(item, &mut rng);
        debug!(seed, index, item = item.id(), reversed = drawn.is_reversed(), "daily draw");
        Some(drawn)
    }

    /// Shuffle the whole deck, keep the first `count` items, and orient them.
    ///
    /// `count` is clamped to the deck size.
    pub fn deal(&self, deck: &[DivinationItem], count: usize, seed: i32) -> Vec<DrawnItem> {
        let mut rng = SeededRng::new(seed);
        let mut shuffled = deck.to_vec();
        shuffle(&mut shuffled, &mut rng);
        shuffled.truncate(count);
        let drawn = self.orient(shuffled, &mut rng);
        debug!(seed, requested = count, dealt = drawn.len(), "dealt spread");
        drawn
    }

    /// Shuffle the whole deck and orient every item, for pick-from-the-fan readings.
    pub fn prepare_deck(&self, deck: &[DivinationItem], seed: i32) -> Vec<DrawnItem> {
        self.deal(deck, deck.len(), seed)
    }

    /// Deal a spread from the deck it belongs to.
    pub fn deal_spread(&self, spread: SpreadKind, seed: i32) -> Vec<DrawnItem> {
        let items = deck::items(spread.deck());
        self.deal(&items, spread.card_count(), seed)
    }
}

/// Draw the daily item from `deck` with the default configuration.
pub fn draw_daily(deck: &[DivinationItem], seed: i32) -> Option<DrawnItem> {
    Dealer::default().draw_daily(deck, seed)
}

/// Deal `count` items from `deck` with the default configuration.
pub fn deal_spread(deck: &[DivinationItem], count: usize, seed: i32) -> Vec<DrawnItem> {
    Dealer::default().deal(deck, count, seed)
}

/// Shuffle and orient a whole deck with the default configuration.
pub fn prepare_deck(kind: DeckKind, seed: i32) -> Vec<DrawnItem> {
    Dealer::default().prepare_deck(&deck::items(kind), seed)
}

/// The daily tarot card for an identity on a date.
///
/// Same identity and date always give the same card and orientation.
/// `None` only if the tarot deck were empty.
pub fn daily_card(identity: &str, date: NaiveDate) -> Option<DrawnItem> {
    draw_daily(&deck::items(DeckKind::Tarot), derive_seed(identity, date))
}

/// A plain-text summary of a spread, one line per position.
///
/// Lines look like `- Past: The Fool (Upright)`; items beyond the spread's
/// named positions are labelled by their 1-based index.
pub fn summarize_spread(spread: SpreadKind, drawn: &[DrawnItem]) -> String {
    drawn
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let position = spread
                .position(i)
                .map_or_else(|| format!("#{}", i + 1), str::to_string);
            format!("- {position}: {}", d.label())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use augur_core::deck::TAROT_DECK;
    use proptest::prelude::*;

    fn tarot() -> Vec<DivinationItem> {
        deck::items(DeckKind::Tarot)
    }

    #[test]
    fn daily_draw_is_index_based() {
        // Seed 0: first float ~0.2361 -> index floor(0.2361 * 78) = 18 (The Moon),
        // second float ~0.2786 < 0.3 -> reversed.
        let drawn = draw_daily(&tarot(), 0).unwrap();
        assert_eq!(drawn.item.id(), "the-moon");
        assert_eq!(drawn.orientation, Some(Orientation::Reversed));
    }

    #[test]
    fn daily_draw_repeats_for_same_seed() {
        let deck = tarot();
        for seed in [-5, 0, 1, 42, 994_899_510, i32::MAX] {
            assert_eq!(draw_daily(&deck, seed), draw_daily(&deck, seed));
        }
    }

    #[test]
    fn daily_card_matches_draw_daily() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let by_identity = daily_card("user1", date).unwrap();
        let by_seed = draw_daily(&tarot(), derive_seed("user1", date)).unwrap();
        assert_eq!(by_identity, by_seed);
        // Seed 994899510: first float ~0.9559 -> index 74, second ~0.7946 -> upright.
        assert_eq!(by_identity.item.id(), TAROT_DECK[74].id);
        assert_eq!(by_identity.orientation, Some(Orientation::Upright));
    }

    #[test]
    fn empty_deck_draws_nothing() {
        assert!(draw_daily(&[], 1).is_none());
        assert!(deal_spread(&[], 3, 1).is_empty());
    }

    #[test]
    fn angel_cards_have_no_orientation() {
        let angels = deck::items(DeckKind::AngelCards);
        let drawn = deal_spread(&angels, 5, 9);
        assert_eq!(drawn.len(), 5);
        assert!(drawn.iter().all(|d| d.orientation.is_none()));
    }

    #[test]
    fn dealt_runes_are_not_oriented() {
        let drawn = Dealer::default().deal_spread(SpreadKind::ThreeRuneNorn, 11);
        assert_eq!(drawn.len(), 3);
        assert!(drawn.iter().all(|d| d.orientation.is_none() && d.placement.is_none()));
    }

    #[test]
    fn deal_clamps_count() {
        let deck = tarot();
        assert_eq!(deal_spread(&deck, 500, 3).len(), 78);
        assert!(deal_spread(&deck, 0, 3).is_empty());
    }

    #[test]
    fn spread_prefix_matches_prepared_deck_order() {
        let deck = tarot();
        let spread = deal_spread(&deck, 10, 77);
        let prepared = prepare_deck(DeckKind::Tarot, 77);
        let spread_ids: Vec<_> = spread.iter().map(|d| d.item.id()).collect();
        let prepared_ids: Vec<_> = prepared.iter().take(10).map(|d| d.item.id()).collect();
        assert_eq!(spread_ids, prepared_ids);
        // Same shuffle, and orientation rolls start at the same generator state.
        assert_eq!(spread, prepared[..10].to_vec());
    }

    #[test]
    fn reversal_rate_near_thirty_percent() {
        let deck = tarot();
        let mut reversed = 0usize;
        let mut total = 0usize;
        for seed in 0..400 {
            for d in deal_spread(&deck, 78, seed * 7919) {
                total += 1;
                if d.is_reversed() {
                    reversed += 1;
                }
            }
        }
        let rate = reversed as f64 / total as f64;
        assert!((rate - 0.3).abs() < 0.02, "reversal rate {rate}");
    }

    #[test]
    fn configured_reversal_chance() {
        let deck = tarot();
        let never = Dealer::new(DrawConfig::default().with_reversal_chance(0.0));
        assert!(never.deal(&deck, 78, 1).iter().all(|d| !d.is_reversed()));
        let always = Dealer::new(DrawConfig::default().with_reversal_chance(1.0));
        assert!(always.deal(&deck, 78, 1).iter().all(DrawnItem::is_reversed));
    }

    #[test]
    fn celtic_cross_has_eleven_distinct_cards() {
        let drawn = Dealer::default().deal_spread(SpreadKind::CelticCross, 2024);
        assert_eq!(drawn.len(), 11);
        let ids: HashSet<_> = drawn.iter().map(|d| d.item.id()).collect();
        assert_eq!(ids.len(), 11);
    }

    #[test]
    fn summary_lines_use_positions() {
        let drawn = Dealer::default().deal_spread(SpreadKind::ThreeCard, 5);
        let summary = summarize_spread(SpreadKind::ThreeCard, &drawn);
        let lines: Vec<_> = summary.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("- Past: "));
        assert!(lines[2].starts_with("- Future: "));
        assert!(lines.iter().all(|l| l.ends_with("(Upright)") || l.ends_with("(Reversed)")));
    }

    proptest! {
        #[test]
        fn prepared_deck_is_a_permutation(seed in any::<i32>()) {
            let prepared = prepare_deck(DeckKind::Tarot, seed);
            prop_assert_eq!(prepared.len(), TAROT_DECK.len());
            let ids: HashSet<_> = prepared.iter().map(|d| d.item.id()).collect();
            prop_assert_eq!(ids.len(), TAROT_DECK.len());
        }

        #[test]
        fn deal_is_reproducible(seed in any::<i32>(), count in 0usize..20) {
            let deck = tarot();
            prop_assert_eq!(deal_spread(&deck, count, seed), deal_spread(&deck, count, seed));
        }
    }
}
