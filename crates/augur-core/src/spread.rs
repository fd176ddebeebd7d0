//! Reading spreads: how many items a reading uses and what each position means.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;
use crate::item::DeckKind;

/// A named reading layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpreadKind {
    /// Past, present, future.
    ThreeCard,
    /// Mind, body, spirit.
    MindBodySpirit,
    /// Five-card career reading.
    CareerPath,
    /// Five-card alchemical reading.
    TheGreatWork,
    /// Six-card relationship reading.
    Relationship,
    /// Five-card decision reading.
    DecisionMaking,
    /// The eleven-card Celtic Cross (with significator).
    CelticCross,
    /// One rune.
    SingleRune,
    /// Three runes for the Norns: past, present, becoming.
    ThreeRuneNorn,
    /// Five runes laid as a cross.
    FiveRuneCross,
    /// Nine runes in a three-by-three grid.
    NineRuneGrid,
    /// Every rune cast at once.
    FullCast,
}

impl SpreadKind {
    /// All spreads, tarot spreads first.
    pub fn all() -> &'static [Self] {
        &[
            Self::ThreeCard,
            Self::MindBodySpirit,
            Self::CareerPath,
            Self::TheGreatWork,
            Self::Relationship,
            Self::DecisionMaking,
            Self::CelticCross,
            Self::SingleRune,
            Self::ThreeRuneNorn,
            Self::FiveRuneCross,
            Self::NineRuneGrid,
            Self::FullCast,
        ]
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::ThreeCard => "Past, Present, Future",
            Self::MindBodySpirit => "Mind, Body, Spirit",
            Self::CareerPath => "Career Path",
            Self::TheGreatWork => "The Great Work",
            Self::Relationship => "Relationship",
            Self::DecisionMaking => "Decision Making",
            Self::CelticCross => "Celtic Cross",
            Self::SingleRune => "Single Rune",
            Self::ThreeRuneNorn => "Three Norns",
            Self::FiveRuneCross => "Five Rune Cross",
            Self::NineRuneGrid => "Nine Rune Grid",
            Self::FullCast => "Full Cast",
        }
    }

    /// The deck a spread draws from.
    pub fn deck(self) -> DeckKind {
        match self {
            Self::SingleRune
            | Self::ThreeRuneNorn
            | Self::FiveRuneCross
            | Self::NineRuneGrid
            | Self::FullCast => DeckKind::Runes,
            _ => DeckKind::Tarot,
        }
    }

    /// Position labels, one per drawn item.
    pub fn positions(self) -> &'static [&'static str] {
        match self {
            Self::ThreeCard => &["Past", "Present", "Future"],
            Self::MindBodySpirit => &["Mind", "Body", "Spirit"],
            Self::CareerPath => &[
                "Current Position",
                "Obstacles",
                "Strengths",
                "Action to Take",
                "Likely Outcome",
            ],
            Self::TheGreatWork => &[
                "Prima Materia",
                "Nigredo",
                "Albedo",
                "Rubedo",
                "The Philosopher's Stone",
            ],
            Self::Relationship => &[
                "You",
                "The Other",
                "The Connection",
                "Strengths",
                "Challenges",
                "Where It Leads",
            ],
            Self::DecisionMaking => &[
                "The Situation",
                "Option A",
                "Option B",
                "Hidden Factors",
                "Guidance",
            ],
            Self::CelticCross => &[
                "Significator",
                "Present",
                "Challenge",
                "Foundation",
                "Recent Past",
                "Crown",
                "Near Future",
                "Self",
                "Environment",
                "Hopes and Fears",
                "Outcome",
            ],
            Self::SingleRune => &["Guidance"],
            Self::ThreeRuneNorn => &["Urd (What Was)", "Verdandi (What Is)", "Skuld (What Shall Be)"],
            Self::FiveRuneCross => &["Past", "Present", "Future", "Challenge", "Outcome"],
            Self::NineRuneGrid => &[
                "Hidden Past",
                "Past Attitude",
                "Past Influence",
                "Hidden Present",
                "Present Attitude",
                "Present Influence",
                "Hidden Future",
                "Future Attitude",
                "Future Outcome",
            ],
            Self::FullCast => &[],
        }
    }

    /// Number of items drawn.
    ///
    /// A full cast uses every rune of the Elder Futhark and has no positions.
    pub fn card_count(self) -> usize {
        match self {
            Self::FullCast => crate::deck::ELDER_FUTHARK.len(),
            other => other.positions().len(),
        }
    }

    /// Label for the item at `index`, or `None` past the end of the positions.
    pub fn position(self, index: usize) -> Option<&'static str> {
        self.positions().get(index).copied()
    }
}

impl FromStr for SpreadKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        Self::all()
            .iter()
            .copied()
            .find(|k| k.to_string() == normalized)
            .or(match normalized.as_str() {
                "3-card" | "past-present-future" => Some(Self::ThreeCard),
                "great-work" => Some(Self::TheGreatWork),
                "decision" => Some(Self::DecisionMaking),
                "norn" | "norns" => Some(Self::ThreeRuneNorn),
                _ => None,
            })
            .ok_or_else(|| CoreError::UnknownSpread(s.to_string()))
    }
}

impl fmt::Display for SpreadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slug = match self {
            Self::ThreeCard => "three-card",
            Self::MindBodySpirit => "mind-body-spirit",
            Self::CareerPath => "career-path",
            Self::TheGreatWork => "the-great-work",
            Self::Relationship => "relationship",
            Self::DecisionMaking => "decision-making",
            Self::CelticCross => "celtic-cross",
            Self::SingleRune => "single-rune",
            Self::ThreeRuneNorn => "three-rune-norn",
            Self::FiveRuneCross => "five-rune-cross",
            Self::NineRuneGrid => "nine-rune-grid",
            Self::FullCast => "full-cast",
        };
        write!(f, "{slug}")
    }
}
