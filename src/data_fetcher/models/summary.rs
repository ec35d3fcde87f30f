use super::account::PlayerHandle;
use super::matchlist::MatchId;
use crate::data_fetcher::tiers::CompetitiveTier;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Everything the presenter needs to render one player's last competitive match.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSummary {
    pub handle: PlayerHandle,
    pub match_id: MatchId,
    pub rank: CompetitiveTier,
    pub won: bool,
    pub map_name: String,
    pub start_time: DateTime<Utc>,
    /// The player's stats in payload order, without the win flag.
    pub stat_fields: Map<String, Value>,
}

impl MatchSummary {
    pub fn rank_label(&self) -> &'static str {
        self.rank.label()
    }

    pub fn result_label(&self) -> &'static str {
        if self.won { "Win" } else { "Loss" }
    }
}
