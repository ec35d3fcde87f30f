use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a single match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(String);

impl MatchId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MatchlistEntry {
    #[serde(rename = "matchId")]
    pub match_id: MatchId,
    #[serde(rename = "gameStartTimeMillis", default, skip_serializing_if = "Option::is_none")]
    pub game_start_time_millis: Option<i64>,
    #[serde(rename = "queueId", default, skip_serializing_if = "Option::is_none")]
    pub queue_id: Option<String>,
}

/// Response of the match history endpoint. Newest match first.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MatchlistResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub puuid: Option<String>,
    #[serde(default)]
    pub history: Vec<MatchlistEntry>,
}

impl MatchlistResponse {
    pub fn most_recent(&self) -> Option<&MatchlistEntry> {
        self.history.first()
    }
}
