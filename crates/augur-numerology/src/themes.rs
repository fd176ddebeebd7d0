//! Theme tables for numerology numbers.
//!
//! Three tables give a number its theme and description depending on where
//! it appears: the core numbers of a blueprint, a pinnacle, or a challenge.
//! A number missing from a table resolves to [`PLACEHOLDER`].

use std::fmt;

/// A short title plus a sentence of interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Title such as "The Leader".
    pub theme: &'static str,
    /// One-sentence interpretation.
    pub description: &'static str,
}

/// Returned for any number a table has no entry for.
pub const PLACEHOLDER: Theme = Theme {
    theme: "Incomplete Data",
    description: "Provide more details to calculate this number.",
};

const fn theme(theme: &'static str, description: &'static str) -> Theme {
    Theme { theme, description }
}

/// Core numbers (Life Path, Destiny, Soul Urge, ...). Zero is not listed and
/// falls through to the placeholder.
const CORE: &[(u32, Theme)] = &[
    (1, theme("The Leader", "Embodies independence, innovation, and leadership.")),
    (2, theme("The Diplomat", "Represents cooperation, harmony, and partnership.")),
    (3, theme("The Communicator", "Signifies creativity, self-expression, and joy.")),
    (4, theme("The Builder", "Stands for stability, hard work, and practicality.")),
    (5, theme("The Adventurer", "Symbolizes freedom, change, and curiosity.")),
    (6, theme("The Nurturer", "Represents responsibility, love, and community.")),
    (7, theme("The Seeker", "Embodies introspection, wisdom, and spirituality.")),
    (8, theme("The Powerhouse", "Signifies ambition, abundance, and authority.")),
    (9, theme("The Humanitarian", "Stands for compassion, completion, and universal love.")),
    (
        11,
        theme(
            "The Visionary",
            "A Master Number of intuition, idealism, and spiritual insight.",
        ),
    ),
    (
        22,
        theme(
            "The Master Builder",
            "A Master Number of large-scale manifestation and practical dreams.",
        ),
    ),
    (
        33,
        theme(
            "The Master Teacher",
            "A Master Number of healing, compassion, and spiritual guidance.",
        ),
    ),
];

const PINNACLE: &[(u32, Theme)] = &[
    (
        0,
        theme(
            "Rest & Recalibration",
            "A period of quiet contemplation and preparation for what is to come.",
        ),
    ),
    (
        1,
        theme(
            "The Innovator",
            "A time for developing independence, leadership, and pioneering new paths.",
        ),
    ),
    (
        2,
        theme(
            "The Diplomat",
            "Focus on partnerships, cooperation, and developing intuition. Relationships are paramount.",
        ),
    ),
    (
        3,
        theme(
            "The Creative",
            "An expansive period for self-expression, creativity, and social engagement.",
        ),
    ),
    (
        4,
        theme(
            "The Builder",
            "A cycle for hard work, establishing security, and building lasting foundations.",
        ),
    ),
    (
        5,
        theme(
            "The Liberator",
            "Expect change, freedom, and adventure. This is a time to adapt and embrace the unexpected.",
        ),
    ),
    (
        6,
        theme(
            "The Caretaker",
            "A period focused on home, family, and community service. Matters of the heart are central.",
        ),
    ),
    (
        7,
        theme(
            "The Analyst",
            "A time for introspection, spiritual growth, and seeking deeper knowledge.",
        ),
    ),
    (
        8,
        theme(
            "The Executive",
            "Focus on personal power, financial success, and taking control.",
        ),
    ),
    (
        9,
        theme(
            "The Philanthropist",
            "A cycle of completion and compassion. Letting go and serving others are highlighted.",
        ),
    ),
    (
        11,
        theme(
            "The Spiritual Beacon",
            "A master cycle of heightened intuition, spiritual awakening, and inspirational leadership.",
        ),
    ),
    (
        22,
        theme(
            "The Master Architect",
            "A powerful period for turning ambitious dreams into tangible reality on a large scale.",
        ),
    ),
    (
        33,
        theme(
            "The Master Healer",
            "A profound cycle of compassionate service and nurturing guidance on a wide scale.",
        ),
    ),
];

const CHALLENGE: &[(u32, Theme)] = &[
    (
        0,
        theme(
            "The Open Path",
            "A path of least resistance, or a sign that the other challenges are the main focus. Choose your own lesson.",
        ),
    ),
    (
        1,
        theme(
            "The Challenge of Assertion",
            "Standing up for yourself without turning aggressive or indecisive. The lesson is finding your own voice.",
        ),
    ),
    (
        2,
        theme(
            "The Challenge of Sensitivity",
            "Overcoming hypersensitivity and fear of collaboration. The lesson is diplomacy and trust in partnership.",
        ),
    ),
    (
        3,
        theme(
            "The Challenge of Expression",
            "Moving past self-doubt and scattered energy. The lesson is focused, joyful communication.",
        ),
    ),
    (
        4,
        theme(
            "The Challenge of Discipline",
            "Resisting both laziness and rigidity. The lesson is steady effort and a stable life.",
        ),
    ),
    (
        5,
        theme(
            "The Challenge of Freedom",
            "Avoiding impulsiveness and the fear of change. The lesson is using freedom constructively.",
        ),
    ),
    (
        6,
        theme(
            "The Challenge of Responsibility",
            "Balancing the needs of others with your own. The lesson is healthy nurturing without perfectionism.",
        ),
    ),
    (
        7,
        theme(
            "The Challenge of Faith",
            "Overcoming skepticism and isolation. The lesson is trusting inner wisdom.",
        ),
    ),
    (
        8,
        theme(
            "The Challenge of Power",
            "Using authority and money wisely without domineering or being dominated. The lesson is integrity.",
        ),
    ),
    (
        9,
        theme(
            "The Challenge of Release",
            "Letting go of old attachments and resentments. The lesson is compassion without clinging.",
        ),
    ),
    (
        11,
        theme(
            "The Challenge of Illusion",
            "Living up to high ideals without nervous tension or self-doubt. The lesson is grounding visionary ideas.",
        ),
    ),
    (
        22,
        theme(
            "The Challenge of Scale",
            "Wielding great influence for the common good without being overwhelmed. The lesson is practical idealism.",
        ),
    ),
    (
        33,
        theme(
            "The Challenge of Martyrdom",
            "Helping others without sacrificing your own well-being. The lesson is compassionate detachment.",
        ),
    ),
];

/// Which table a number is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeTable {
    /// The eight core blueprint numbers and the universal numbers.
    Core,
    /// Pinnacle cycles.
    Pinnacle,
    /// Challenge cycles.
    Challenge,
}

impl ThemeTable {
    fn entries(self) -> &'static [(u32, Theme)] {
        match self {
            Self::Core => CORE,
            Self::Pinnacle => PINNACLE,
            Self::Challenge => CHALLENGE,
        }
    }

    /// Look up `number`, falling back to [`PLACEHOLDER`].
    pub fn lookup(self, number: u32) -> Theme {
        self.entries()
            .iter()
            .find(|(n, _)| *n == number)
            .map_or(PLACEHOLDER, |(_, theme)| *theme)
    }
}

impl fmt::Display for ThemeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Core => write!(f, "core"),
            Self::Pinnacle => write!(f, "pinnacle"),
            Self::Challenge => write!(f, "challenge"),
        }
    }
}
