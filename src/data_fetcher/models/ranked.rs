use crate::data_fetcher::tiers::CompetitiveTier;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Response of the ranked-player endpoint. Only the tier is used.
///
/// The tier is kept as a raw JSON number so that any numeric value, however
/// large or fractional, maps to a tier instead of failing to parse.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RankedResponse {
    #[serde(rename = "competitiveTier", default)]
    pub competitive_tier: Option<Number>,
}

impl RankedResponse {
    /// Current tier; `Unrated` when the field is absent or null.
    pub fn tier(&self) -> CompetitiveTier {
        match &self.competitive_tier {
            Some(number) => CompetitiveTier::from_number(number),
            None => CompetitiveTier::Unrated,
        }
    }
}
