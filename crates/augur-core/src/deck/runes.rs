//! The Elder Futhark, 24 runes in traditional aett order.

use crate::item::Rune;

/// The Elder Futhark rune set.
///
/// Runes whose glyph reads the same when inverted are marked as not
/// reversible and never fall merkstave.
pub static ELDER_FUTHARK: &[Rune] = &[
    Rune {
        id: "fehu",
        name: "Fehu",
        symbol: "ᚠ",
        keywords: &["wealth", "abundance", "energy"],
        meaning: "Earned prosperity and the energy to keep it flowing.",
        reversible: true,
    },
    Rune {
        id: "uruz",
        name: "Uruz",
        symbol: "ᚢ",
        keywords: &["strength", "vitality", "endurance"],
        meaning: "Raw physical strength and untamed health.",
        reversible: true,
    },
    Rune {
        id: "thurisaz",
        name: "Thurisaz",
        symbol: "ᚦ",
        keywords: &["protection", "conflict", "catalyst"],
        meaning: "A thorn that defends and forces change.",
        reversible: true,
    },
    Rune {
        id: "ansuz",
        name: "Ansuz",
        symbol: "ᚨ",
        keywords: &["communication", "wisdom", "signals"],
        meaning: "Divine breath; messages and insight arrive.",
        reversible: true,
    },
    Rune {
        id: "raidho",
        name: "Raidho",
        symbol: "ᚱ",
        keywords: &["journey", "rhythm", "movement"],
        meaning: "A journey taken in the right rhythm.",
        reversible: true,
    },
    Rune {
        id: "kenaz",
        name: "Kenaz",
        symbol: "ᚲ",
        keywords: &["knowledge", "creativity", "illumination"],
        meaning: "The torch that reveals and creates.",
        reversible: true,
    },
    Rune {
        id: "gebo",
        name: "Gebo",
        symbol: "ᚷ",
        keywords: &["gift", "partnership", "exchange"],
        meaning: "A gift that binds giver and receiver.",
        reversible: false,
    },
    Rune {
        id: "wunjo",
        name: "Wunjo",
        symbol: "ᚹ",
        keywords: &["joy", "harmony", "belonging"],
        meaning: "Joy found in fellowship and shared purpose.",
        reversible: true,
    },
    Rune {
        id: "hagalaz",
        name: "Hagalaz",
        symbol: "ᚺ",
        keywords: &["disruption", "hail", "transformation"],
        meaning: "Uncontrollable forces that clear the way.",
        reversible: false,
    },
    Rune {
        id: "nauthiz",
        name: "Nauthiz",
        symbol: "ᚾ",
        keywords: &["need", "constraint", "resistance"],
        meaning: "Friction that teaches what you truly need.",
        reversible: true,
    },
    Rune {
        id: "isa",
        name: "Isa",
        symbol: "ᛁ",
        keywords: &["stillness", "ice", "pause"],
        meaning: "A frozen moment; wait and gather yourself.",
        reversible: false,
    },
    Rune {
        id: "jera",
        name: "Jera",
        symbol: "ᛃ",
        keywords: &["harvest", "cycles", "reward"],
        meaning: "The year turns and effort is rewarded.",
        reversible: false,
    },
    Rune {
        id: "eihwaz",
        name: "Eihwaz",
        symbol: "ᛇ",
        keywords: &["endurance", "defence", "transition"],
        meaning: "The yew that bridges life and death.",
        reversible: false,
    },
    Rune {
        id: "perthro",
        name: "Perthro",
        symbol: "ᛈ",
        keywords: &["mystery", "fate", "chance"],
        meaning: "The dice cup of fate; secrets unfold.",
        reversible: true,
    },
    Rune {
        id: "algiz",
        name: "Algiz",
        symbol: "ᛉ",
        keywords: &["protection", "instinct", "sanctuary"],
        meaning: "A shield raised by higher powers.",
        reversible: true,
    },
    Rune {
        id: "sowilo",
        name: "Sowilo",
        symbol: "ᛊ",
        keywords: &["success", "sun", "wholeness"],
        meaning: "The sun's victory and clear guidance.",
        reversible: false,
    },
    Rune {
        id: "tiwaz",
        name: "Tiwaz",
        symbol: "ᛏ",
        keywords: &["justice", "honour", "sacrifice"],
        meaning: "Courage to do what is right at a cost.",
        reversible: true,
    },
    Rune {
        id: "berkano",
        name: "Berkano",
        symbol: "ᛒ",
        keywords: &["birth", "growth", "renewal"],
        meaning: "The birch of new beginnings and nurture.",
        reversible: true,
    },
    Rune {
        id: "ehwaz",
        name: "Ehwaz",
        symbol: "ᛖ",
        keywords: &["trust", "teamwork", "progress"],
        meaning: "Partnership that moves you forward.",
        reversible: true,
    },
    Rune {
        id: "mannaz",
        name: "Mannaz",
        symbol: "ᛗ",
        keywords: &["humanity", "self", "cooperation"],
        meaning: "The self within the wider community.",
        reversible: true,
    },
    Rune {
        id: "laguz",
        name: "Laguz",
        symbol: "ᛚ",
        keywords: &["flow", "intuition", "emotion"],
        meaning: "Water that follows its own deep course.",
        reversible: true,
    },
    Rune {
        id: "ingwaz",
        name: "Ingwaz",
        symbol: "ᛜ",
        keywords: &["gestation", "completion", "potential"],
        meaning: "Stored energy waiting to be released.",
        reversible: false,
    },
    Rune {
        id: "dagaz",
        name: "Dagaz",
        symbol: "ᛞ",
        keywords: &["breakthrough", "dawn", "awakening"],
        meaning: "Daybreak; a sudden shift into light.",
        reversible: false,
    },
    Rune {
        id: "othala",
        name: "Othala",
        symbol: "ᛟ",
        keywords: &["heritage", "home", "inheritance"],
        meaning: "Ancestral ground and what it passes on.",
        reversible: true,
    },
];
