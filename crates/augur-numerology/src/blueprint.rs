//! The Cosmic Blueprint: every number derived from a profile.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cipher::{NameFilter, name_number};
use crate::cycles::{LifeCycle, challenges, pinnacles};
use crate::profile::{BirthDate, UserProfile};
use crate::reduce::{Reduced, digit_sum, reduce};
use crate::themes::ThemeTable;

/// Unreduced totals that carry a karmic debt.
pub const KARMIC_DEBT_NUMBERS: [u32; 4] = [13, 14, 16, 19];

/// A number with its theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosmicNumber {
    /// The reduced number, 0 when it could not be calculated.
    pub number: u32,
    /// Theme title.
    pub theme: String,
    /// Theme description.
    pub description: String,
}

impl CosmicNumber {
    /// A number themed from the core table.
    pub fn core(number: u32) -> Self {
        let theme = ThemeTable::Core.lookup(number);
        Self {
            number,
            theme: theme.theme.to_string(),
            description: theme.description.to_string(),
        }
    }
}

/// A full numerology profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmicBlueprint {
    /// From the birth date.
    pub life_path: CosmicNumber,
    /// All letters of the given name.
    pub destiny: CosmicNumber,
    /// Vowels of the given name.
    pub soul_urge: CosmicNumber,
    /// Consonants of the given name.
    pub personality: CosmicNumber,
    /// All letters of the mother's maiden name.
    pub heritage: CosmicNumber,
    /// All letters of the current name.
    pub current_vibe: CosmicNumber,
    /// The reduced day of birth, read even when the rest of the date is unusable.
    pub birthday: CosmicNumber,
    /// Life Path plus Destiny.
    pub maturity: CosmicNumber,
    /// Four pinnacles in life order.
    pub pinnacles: [LifeCycle; 4],
    /// Four challenges in life order.
    pub challenges: [LifeCycle; 4],
    /// Karmic debt numbers found, in detection order, without repeats.
    pub karmic_debts: Vec<u32>,
}

impl CosmicBlueprint {
    /// The eight core numbers with their display labels.
    pub fn core_numbers(&self) -> [(&'static str, &CosmicNumber); 8] {
        [
            ("Life Path", &self.life_path),
            ("Destiny", &self.destiny),
            ("Soul Urge", &self.soul_urge),
            ("Personality", &self.personality),
            ("Heritage", &self.heritage),
            ("Current Vibe", &self.current_vibe),
            ("Birthday", &self.birthday),
            ("Maturity", &self.maturity),
        ]
    }

    /// Whether any karmic debt was found.
    pub fn has_karmic_debt(&self) -> bool {
        !self.karmic_debts.is_empty()
    }

    /// A plain-text rendering, one line per number and cycle.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for (label, n) in self.core_numbers() {
            let _ = writeln!(out, "{label}: {} ({})", n.number, n.theme);
        }
        for (i, p) in self.pinnacles.iter().enumerate() {
            let _ = writeln!(out, "Pinnacle {}: {} ({}, {})", i + 1, p.number, p.theme, p.age_range);
        }
        for (i, c) in self.challenges.iter().enumerate() {
            let _ = writeln!(out, "Challenge {}: {} ({}, {})", i + 1, c.number, c.theme, c.age_range);
        }
        if self.has_karmic_debt() {
            let debts: Vec<String> = self.karmic_debts.iter().map(u32::to_string).collect();
            let _ = writeln!(out, "Karmic Debt: {}", debts.join(", "));
        }
        out
    }
}

/// Life Path: digit sums of year, month and day added together, then reduced.
fn life_path(birth: Option<BirthDate>) -> Reduced {
    birth.map_or_else(Reduced::default, |date| {
        Reduced::from_sum(digit_sum(date.year) + digit_sum(date.month) + digit_sum(date.day))
    })
}

/// Compute the blueprint for a profile.
///
/// Never fails: unusable names or dates give number 0 with the
/// "Incomplete Data" theme.
pub fn generate_blueprint(profile: &UserProfile) -> CosmicBlueprint {
    let birth = profile.birth();
    let life_path = life_path(birth);
    let destiny = name_number(&profile.given_name, NameFilter::All);
    let soul_urge = name_number(&profile.given_name, NameFilter::Vowels);
    let personality = name_number(&profile.given_name, NameFilter::Consonants);
    let heritage = name_number(&profile.mothers_maiden_name, NameFilter::All);
    let current_vibe = name_number(&profile.current_name, NameFilter::All);
    let birthday = profile.birth_day().map_or(0, reduce);
    let maturity = reduce(life_path.reduced + destiny.reduced);

    let mut karmic_debts = Vec::new();
    for total in [life_path.unreduced, destiny.unreduced] {
        if KARMIC_DEBT_NUMBERS.contains(&total) && !karmic_debts.contains(&total) {
            karmic_debts.push(total);
        }
    }

    debug!(
        life_path = life_path.reduced,
        destiny = destiny.reduced,
        karmic_debts = ?karmic_debts,
        "generated blueprint"
    );

    CosmicBlueprint {
        life_path: CosmicNumber::core(life_path.reduced),
        destiny: CosmicNumber::core(destiny.reduced),
        soul_urge: CosmicNumber::core(soul_urge.reduced),
        personality: CosmicNumber::core(personality.reduced),
        heritage: CosmicNumber::core(heritage.reduced),
        current_vibe: CosmicNumber::core(current_vibe.reduced),
        birthday: CosmicNumber::core(birthday),
        maturity: CosmicNumber::core(maturity),
        pinnacles: pinnacles(birth, life_path.reduced),
        challenges: challenges(birth, life_path.reduced),
        karmic_debts,
    }
}
