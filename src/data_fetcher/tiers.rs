//! Competitive tier table.

use serde_json::Number;
use std::fmt;

/// Valorant competitive tier. Closed over the known ordinals 0..=25, with
/// `Unknown` standing in for anything the table does not cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompetitiveTier {
    Unrated,
    Iron1,
    Iron2,
    Iron3,
    Bronze1,
    Bronze2,
    Bronze3,
    Silver1,
    Silver2,
    Silver3,
    Gold1,
    Gold2,
    Gold3,
    Platinum1,
    Platinum2,
    Platinum3,
    Diamond1,
    Diamond2,
    Diamond3,
    Ascendant1,
    Ascendant2,
    Ascendant3,
    Immortal1,
    Immortal2,
    Immortal3,
    Radiant,
    Unknown,
}

/// Known tiers, indexed by ordinal.
const TIERS: [CompetitiveTier; 26] = [
    CompetitiveTier::Unrated,
    CompetitiveTier::Iron1,
    CompetitiveTier::Iron2,
    CompetitiveTier::Iron3,
    CompetitiveTier::Bronze1,
    CompetitiveTier::Bronze2,
    CompetitiveTier::Bronze3,
    CompetitiveTier::Silver1,
    CompetitiveTier::Silver2,
    CompetitiveTier::Silver3,
    CompetitiveTier::Gold1,
    CompetitiveTier::Gold2,
    CompetitiveTier::Gold3,
    CompetitiveTier::Platinum1,
    CompetitiveTier::Platinum2,
    CompetitiveTier::Platinum3,
    CompetitiveTier::Diamond1,
    CompetitiveTier::Diamond2,
    CompetitiveTier::Diamond3,
    CompetitiveTier::Ascendant1,
    CompetitiveTier::Ascendant2,
    CompetitiveTier::Ascendant3,
    CompetitiveTier::Immortal1,
    CompetitiveTier::Immortal2,
    CompetitiveTier::Immortal3,
    CompetitiveTier::Radiant,
];

impl CompetitiveTier {
    /// Maps any ordinal to a tier. Never fails; out-of-table values are `Unknown`.
    pub fn from_ordinal(ordinal: i64) -> Self {
        usize::try_from(ordinal)
            .ok()
            .and_then(|index| TIERS.get(index).copied())
            .unwrap_or(CompetitiveTier::Unknown)
    }

    /// Maps any JSON number to a tier. Integral values go through
    /// [`CompetitiveTier::from_ordinal`]; fractions and integers beyond `i64`
    /// are `Unknown`.
    pub fn from_number(number: &Number) -> Self {
        if let Some(ordinal) = number.as_i64() {
            return Self::from_ordinal(ordinal);
        }
        match number.as_f64() {
            Some(value) if value.fract() == 0.0 && (0.0..=25.0).contains(&value) => {
                Self::from_ordinal(value as i64)
            }
            _ => CompetitiveTier::Unknown,
        }
    }

    /// Ordinal of a known tier; `None` for `Unknown`.
    pub fn ordinal(self) -> Option<i64> {
        TIERS.iter().position(|t| *t == self).map(|i| i as i64)
    }

    pub fn label(self) -> &'static str {
        match self {
            CompetitiveTier::Unrated => "Unrated",
            CompetitiveTier::Iron1 => "Iron 1",
            CompetitiveTier::Iron2 => "Iron 2",
            CompetitiveTier::Iron3 => "Iron 3",
            CompetitiveTier::Bronze1 => "Bronze 1",
            CompetitiveTier::Bronze2 => "Bronze 2",
            CompetitiveTier::Bronze3 => "Bronze 3",
            CompetitiveTier::Silver1 => "Silver 1",
            CompetitiveTier::Silver2 => "Silver 2",
            CompetitiveTier::Silver3 => "Silver 3",
            CompetitiveTier::Gold1 => "Gold 1",
            CompetitiveTier::Gold2 => "Gold 2",
            CompetitiveTier::Gold3 => "Gold 3",
            CompetitiveTier::Platinum1 => "Platinum 1",
            CompetitiveTier::Platinum2 => "Platinum 2",
            CompetitiveTier::Platinum3 => "Platinum 3",
            CompetitiveTier::Diamond1 => "Diamond 1",
            CompetitiveTier::Diamond2 => "Diamond 2",
            CompetitiveTier::Diamond3 => "Diamond 3",
            CompetitiveTier::Ascendant1 => "Ascendant 1",
            CompetitiveTier::Ascendant2 => "Ascendant 2",
            CompetitiveTier::Ascendant3 => "Ascendant 3",
            CompetitiveTier::Immortal1 => "Immortal 1",
            CompetitiveTier::Immortal2 => "Immortal 2",
            CompetitiveTier::Immortal3 => "Immortal 3",
            CompetitiveTier::Radiant => "Radiant",
            CompetitiveTier::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CompetitiveTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
