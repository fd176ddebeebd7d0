use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;

/// Tarot category: the Major Arcana or one of the four minor suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Arcana {
    /// The 22 trump cards.
    Major,
    /// Suit of fire and will.
    Wands,
    /// Suit of water and feeling.
    Cups,
    /// Suit of air and thought.
    Swords,
    /// Suit of earth and matter.
    Pentacles,
}

impl fmt::Display for Arcana {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Major => write!(f, "Major Arcana"),
            Self::Wands => write!(f, "Wands"),
            Self::Cups => write!(f, "Cups"),
            Self::Swords => write!(f, "Swords"),
            Self::Pentacles => write!(f, "Pentacles"),
        }
    }
}

/// Classical element associated with a tarot card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    /// Fire.
    Fire,
    /// Water.
    Water,
    /// Air.
    Air,
    /// Earth.
    Earth,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fire => write!(f, "Fire"),
            Self::Water => write!(f, "Water"),
            Self::Air => write!(f, "Air"),
            Self::Earth => write!(f, "Earth"),
        }
    }
}

/// A tarot card. The only orientation-capable item in a seeded draw.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TarotCard {
    /// Stable identifier, e.g. `"the-fool"`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Major Arcana or suit.
    pub arcana: Arcana,
    /// Associated element.
    pub element: Element,
    /// Short keywords.
    pub keywords: &'static [&'static str],
    /// Upright meaning.
    pub meaning: &'static str,
    /// Reversed meaning.
    pub reversed_meaning: &'static str,
    /// A small real-world action inspired by the card.
    pub micro_quest: &'static str,
}

/// A rune of the Elder Futhark.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Rune {
    /// Stable identifier, e.g. `"fehu"`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Unicode glyph.
    pub symbol: &'static str,
    /// Short keywords.
    pub keywords: &'static [&'static str],
    /// Upright meaning.
    pub meaning: &'static str,
    /// Whether the glyph can fall merkstave (reversed).
    pub reversible: bool,
}

/// An angel oracle card.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct AngelCard {
    /// Stable identifier, e.g. `"angel-courage"`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Short keywords.
    pub keywords: &'static [&'static str],
    /// Message of the card.
    pub meaning: &'static str,
}

/// Which reference deck an item (or a spread) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeckKind {
    /// The 78-card tarot deck.
    Tarot,
    /// The Elder Futhark runes.
    Runes,
    /// The angel card deck.
    AngelCards,
}

impl DeckKind {
    /// All deck kinds.
    pub fn all() -> &'static [Self] {
        &[Self::Tarot, Self::Runes, Self::AngelCards]
    }
}

impl FromStr for DeckKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "tarot" => Ok(Self::Tarot),
            "runes" | "rune" | "futhark" => Ok(Self::Runes),
            "angel-cards" | "angels" | "angel" => Ok(Self::AngelCards),
            _ => Err(CoreError::UnknownDeck(s.to_string())),
        }
    }
}

impl fmt::Display for DeckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tarot => write!(f, "tarot"),
            Self::Runes => write!(f, "runes"),
            Self::AngelCards => write!(f, "angel-cards"),
        }
    }
}

/// A reference to one static divination item.
///
/// Orientation capability and detail fields are decided by matching on the
/// variant, never by probing for fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DivinationItem {
    /// A tarot card.
    Tarot(&'static TarotCard),
    /// A rune.
    Rune(&'static Rune),
    /// An angel card.
    Angel(&'static AngelCard),
}

impl DivinationItem {
    /// Stable identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Tarot(c) => c.id,
            Self::Rune(r) => r.id,
            Self::Angel(a) => a.id,
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tarot(c) => c.name,
            Self::Rune(r) => r.name,
            Self::Angel(a) => a.name,
        }
    }

    /// Short keywords.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Tarot(c) => c.keywords,
            Self::Rune(r) => r.keywords,
            Self::Angel(a) => a.keywords,
        }
    }

    /// Upright meaning.
    pub fn meaning(&self) -> &'static str {
        match self {
            Self::Tarot(c) => c.meaning,
            Self::Rune(r) => r.meaning,
            Self::Angel(a) => a.meaning,
        }
    }

    /// The deck this item belongs to.
    pub fn deck(&self) -> DeckKind {
        match self {
            Self::Tarot(_) => DeckKind::Tarot,
            Self::Rune(_) => DeckKind::Runes,
            Self::Angel(_) => DeckKind::AngelCards,
        }
    }

    /// Whether a seeded draw rolls an orientation for this item.
    ///
    /// Only tarot cards do. Runes receive an orientation when cast, not when
    /// dealt from a shuffled deck.
    pub fn is_orientable(&self) -> bool {
        matches!(self, Self::Tarot(_))
    }

    /// The tarot card, if this item is one.
    pub fn as_tarot(&self) -> Option<&'static TarotCard> {
        match *self {
            Self::Tarot(c) => Some(c),
            _ => None,
        }
    }

    /// The rune, if this item is one.
    pub fn as_rune(&self) -> Option<&'static Rune> {
        match *self {
            Self::Rune(r) => Some(r),
            _ => None,
        }
    }
}

impl fmt::Display for DivinationItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rune(r) => write!(f, "{} {}", r.symbol, r.name),
            other => write!(f, "{}", other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{ANGEL_CARDS, ELDER_FUTHARK, TAROT_DECK};

    #[test]
    fn deck_kind_parse_variants() {
        assert_eq!("tarot".parse::<DeckKind>(), Ok(DeckKind::Tarot));
        assert_eq!("RUNES".parse::<DeckKind>(), Ok(DeckKind::Runes));
        assert_eq!("angel_cards".parse::<DeckKind>(), Ok(DeckKind::AngelCards));
        assert_eq!(
            "lenormand".parse::<DeckKind>(),
            Err(CoreError::UnknownDeck("lenormand".to_string()))
        );
    }

    #[test]
    fn deck_kind_display_round_trips() {
        for kind in DeckKind::all() {
            assert_eq!(kind.to_string().parse::<DeckKind>(), Ok(*kind));
        }
    }

    #[test]
    fn only_tarot_is_orientable() {
        assert!(DivinationItem::Tarot(&TAROT_DECK[0]).is_orientable());
        assert!(!DivinationItem::Rune(&ELDER_FUTHARK[0]).is_orientable());
        assert!(!DivinationItem::Angel(&ANGEL_CARDS[0]).is_orientable());
    }

    #[test]
    fn accessors_dispatch_on_variant() {
        let fool = DivinationItem::Tarot(&TAROT_DECK[0]);
        assert_eq!(fool.id(), "the-fool");
        assert_eq!(fool.deck(), DeckKind::Tarot);
        assert!(fool.as_tarot().is_some());
        assert!(fool.as_rune().is_none());

        let fehu = DivinationItem::Rune(&ELDER_FUTHARK[0]);
        assert_eq!(fehu.to_string(), "ᚠ Fehu");
        assert_eq!(fehu.as_rune().map(|r| r.reversible), Some(true));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(DivinationItem::Tarot(&TAROT_DECK[0])).unwrap();
        assert_eq!(json["kind"], "tarot");
        assert_eq!(json["arcana"], "Major");
        assert_eq!(json["reversedMeaning"], TAROT_DECK[0].reversed_meaning);

        let json = serde_json::to_value(DivinationItem::Angel(&ANGEL_CARDS[0])).unwrap();
        assert_eq!(json["kind"], "angel");
        assert!(json.get("arcana").is_none());
    }
}
