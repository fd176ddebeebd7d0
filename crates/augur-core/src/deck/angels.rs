//! Angel card oracle deck.

use crate::item::AngelCard;

/// The angel card deck. Angel cards have no reversed reading.
pub static ANGEL_CARDS: &[AngelCard] = &[
    AngelCard {
        id: "angel-abundance",
        name: "Abundance",
        keywords: &["prosperity", "receiving", "plenty"],
        meaning: "Open your hands; there is more than enough for you.",
    },
    AngelCard {
        id: "angel-balance",
        name: "Balance",
        keywords: &["equilibrium", "rest", "moderation"],
        meaning: "Give equal care to work, rest and play.",
    },
    AngelCard {
        id: "angel-clarity",
        name: "Clarity",
        keywords: &["vision", "understanding", "focus"],
        meaning: "The fog lifts and the next step becomes obvious.",
    },
    AngelCard {
        id: "angel-courage",
        name: "Courage",
        keywords: &["bravery", "action", "heart"],
        meaning: "Fear is present, and you can move anyway.",
    },
    AngelCard {
        id: "angel-faith",
        name: "Faith",
        keywords: &["trust", "surrender", "belief"],
        meaning: "Trust that unseen help is already arriving.",
    },
    AngelCard {
        id: "angel-forgiveness",
        name: "Forgiveness",
        keywords: &["release", "peace", "healing"],
        meaning: "Letting go of blame frees your own heart.",
    },
    AngelCard {
        id: "angel-gratitude",
        name: "Gratitude",
        keywords: &["appreciation", "joy", "presence"],
        meaning: "Count what you have and it multiplies.",
    },
    AngelCard {
        id: "angel-guidance",
        name: "Guidance",
        keywords: &["direction", "signs", "support"],
        meaning: "Watch for signs; you are being shown the way.",
    },
    AngelCard {
        id: "angel-harmony",
        name: "Harmony",
        keywords: &["peace", "cooperation", "flow"],
        meaning: "Small adjustments restore peace around you.",
    },
    AngelCard {
        id: "angel-healing",
        name: "Healing",
        keywords: &["restoration", "care", "wholeness"],
        meaning: "Rest and kindness are mending you.",
    },
    AngelCard {
        id: "angel-inspiration",
        name: "Inspiration",
        keywords: &["ideas", "creativity", "spark"],
        meaning: "A new idea wants to be expressed through you.",
    },
    AngelCard {
        id: "angel-joy",
        name: "Joy",
        keywords: &["delight", "play", "lightness"],
        meaning: "Make room today for something purely fun.",
    },
    AngelCard {
        id: "angel-love",
        name: "Love",
        keywords: &["compassion", "connection", "warmth"],
        meaning: "You are loved, and your love matters.",
    },
    AngelCard {
        id: "angel-patience",
        name: "Patience",
        keywords: &["timing", "trust", "calm"],
        meaning: "What you seek is on its way at the right pace.",
    },
    AngelCard {
        id: "angel-protection",
        name: "Protection",
        keywords: &["safety", "shield", "comfort"],
        meaning: "You are surrounded and kept safe.",
    },
    AngelCard {
        id: "angel-purpose",
        name: "Purpose",
        keywords: &["calling", "meaning", "service"],
        meaning: "Your gifts are needed; follow what lights you up.",
    },
    AngelCard {
        id: "angel-release",
        name: "Release",
        keywords: &["letting go", "freedom", "space"],
        meaning: "Put down what you no longer need to carry.",
    },
    AngelCard {
        id: "angel-strength",
        name: "Strength",
        keywords: &["resilience", "endurance", "power"],
        meaning: "You are stronger than this moment.",
    },
    AngelCard {
        id: "angel-transformation",
        name: "Transformation",
        keywords: &["change", "growth", "rebirth"],
        meaning: "An old form falls away to reveal a new one.",
    },
    AngelCard {
        id: "angel-wisdom",
        name: "Wisdom",
        keywords: &["insight", "knowing", "maturity"],
        meaning: "Your experience already holds the answer.",
    },
];
