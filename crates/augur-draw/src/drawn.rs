//! Draw results: an item paired with its orientation and, for cast runes, its placement.

use std::fmt;

use augur_core::DivinationItem;
use serde::Serialize;

/// Which way up an item landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Right way up.
    Upright,
    /// Inverted. For runes this is called merkstave.
    Reversed,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upright => write!(f, "Upright"),
            Self::Reversed => write!(f, "Reversed"),
        }
    }
}

/// Radial zone of a cast rune relative to the canvas centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Proximity {
    /// Close to the centre: the heart of the matter.
    Inner,
    /// Surrounding influences.
    Middle,
    /// Distant or peripheral influences.
    Outer,
}

impl fmt::Display for Proximity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inner => write!(f, "inner"),
            Self::Middle => write!(f, "middle"),
            Self::Outer => write!(f, "outer"),
        }
    }
}

/// Where a rune landed on the casting cloth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunePlacement {
    /// Horizontal position in percent of the canvas.
    pub x: f64,
    /// Vertical position in percent of the canvas.
    pub y: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Cluster id; `None` when the rune landed isolated.
    #[serde(rename = "clusterId", skip_serializing_if = "Option::is_none")]
    pub cluster: Option<u32>,
    /// Radial zone.
    pub proximity: Proximity,
}

/// One drawn or cast divination item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawnItem {
    /// The reference item.
    #[serde(rename = "card")]
    pub item: DivinationItem,
    /// `None` when the item was not given an orientation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    /// Present only for cast runes.
    #[serde(flatten)]
    pub placement: Option<RunePlacement>,
}

impl DrawnItem {
    /// An item with no orientation and no placement.
    pub fn new(item: DivinationItem) -> Self {
        Self {
            item,
            orientation: None,
            placement: None,
        }
    }

    /// Attach an orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Whether the item landed reversed.
    pub fn is_reversed(&self) -> bool {
        self.orientation == Some(Orientation::Reversed)
    }

    /// The meaning that applies to this draw: a reversed tarot card reads its reversed meaning.
    pub fn meaning(&self) -> &'static str {
        match self.item.as_tarot() {
            Some(card) if self.is_reversed() => card.reversed_meaning,
            _ => self.item.meaning(),
        }
    }

    /// Short label such as `"The Tower (Reversed)"` or `"ᚨ Ansuz (Merkstave)"`.
    pub fn label(&self) -> String {
        match (self.orientation, self.item) {
            (Some(Orientation::Reversed), DivinationItem::Rune(_)) => {
                format!("{} (Merkstave)", self.item)
            }
            (Some(orientation), _) => format!("{} ({orientation})", self.item),
            (None, _) => self.item.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use augur_core::deck::{ANGEL_CARDS, ELDER_FUTHARK, TAROT_DECK};

    #[test]
    fn reversed_tarot_reads_reversed_meaning() {
        let card = &TAROT_DECK[16];
        let drawn = DrawnItem::new(DivinationItem::Tarot(card)).with_orientation(Orientation::Reversed);
        assert!(drawn.is_reversed());
        assert_eq!(drawn.meaning(), card.reversed_meaning);
        assert_eq!(drawn.label(), format!("{} (Reversed)", card.name));
    }

    #[test]
    fn labels_by_kind() {
        let rune = DrawnItem::new(DivinationItem::Rune(&ELDER_FUTHARK[3]))
            .with_orientation(Orientation::Reversed);
        assert_eq!(rune.label(), "ᚨ Ansuz (Merkstave)");
        let angel = DrawnItem::new(DivinationItem::Angel(&ANGEL_CARDS[0]));
        assert_eq!(angel.label(), "Abundance");
        assert!(!angel.is_reversed());
    }

    #[test]
    fn serialization_omits_absent_fields() {
        let angel = DrawnItem::new(DivinationItem::Angel(&ANGEL_CARDS[0]));
        let json = serde_json::to_value(&angel).unwrap();
        assert_eq!(json["card"]["kind"], "angel");
        assert!(json.get("orientation").is_none());
        assert!(json.get("x").is_none());
    }

    #[test]
    fn serialization_flattens_placement() {
        let mut rune = DrawnItem::new(DivinationItem::Rune(&ELDER_FUTHARK[0]))
            .with_orientation(Orientation::Upright);
        rune.placement = Some(RunePlacement {
            x: 40.0,
            y: 60.0,
            rotation: -12.5,
            cluster: Some(1),
            proximity: Proximity::Inner,
        });
        let json = serde_json::to_value(&rune).unwrap();
        assert_eq!(json["orientation"], "upright");
        assert_eq!(json["x"], 40.0);
        assert_eq!(json["clusterId"], 1);
        assert_eq!(json["proximity"], "inner");
    }
}
