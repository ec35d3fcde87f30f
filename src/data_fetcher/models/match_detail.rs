use super::account::PlayerId;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Full record of one match as returned by the match-by-id endpoint.
/// Only the parts needed to build a summary are modelled; everything else is ignored.
#[derive(Debug, Deserialize, Clone)]
pub struct MatchRecord {
    pub metadata: MatchMetadata,
    pub players: MatchPlayers,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MatchMetadata {
    #[serde(rename = "mapName")]
    pub map_name: String,
    #[serde(rename = "gameStartTime", deserialize_with = "deserialize_start_time")]
    pub start_time: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MatchPlayers {
    pub all_players: Vec<MatchParticipant>,
}

/// One player's line in a match.
#[derive(Debug, Deserialize, Clone)]
pub struct MatchParticipant {
    pub puuid: PlayerId,
    pub stats: StatLine,
}

/// Per-player stats. The win flag is pulled out into its own field; every other
/// stat stays in `fields`, in payload order.
#[derive(Debug, Deserialize, Clone)]
pub struct StatLine {
    pub win: bool,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl MatchRecord {
    pub fn participants(&self) -> &[MatchParticipant] {
        &self.players.all_players
    }

    /// Finds the stat line of the given player, if they took part.
    pub fn participant(&self, player_id: &PlayerId) -> Option<&MatchParticipant> {
        self.participants().iter().find(|p| &p.puuid == player_id)
    }
}

impl MatchParticipant {
    pub fn won(&self) -> bool {
        self.stats.win
    }
}

/// Parses a match start time. RFC 3339 is expected; a timestamp without an
/// offset is read as UTC.
pub fn parse_start_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw.trim_end_matches('Z'), "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

fn deserialize_start_time<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_start_time(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid gameStartTime '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    const MATCH_JSON: &str = r#"{
        "metadata": {"matchId": "M1", "mapName": "Ascent", "gameStartTime": "2024-01-15T18:30:00Z"},
        "players": {
            "all_players": [
                {"puuid": "P1", "team": "Red", "stats": {"score": 4200, "kills": 10, "deaths": 5, "win": true}},
                {"puuid": "P2", "team": "Blue", "stats": {"kills": 7, "deaths": 11, "win": false}}
            ]
        }
    }"#;

    #[test]
    fn test_match_record_deserialization() {
        let record: MatchRecord = serde_json::from_str(MATCH_JSON).unwrap();
        assert_eq!(record.metadata.map_name, "Ascent");
        assert_eq!(record.metadata.start_time.year(), 2024);
        assert_eq!(record.metadata.start_time.hour(), 18);
        assert_eq!(record.participants().len(), 2);
    }

    #[test]
    fn test_win_flag_is_split_from_stat_fields() {
        let record: MatchRecord = serde_json::from_str(MATCH_JSON).unwrap();
        let me = record.participant(&PlayerId::new("P1")).unwrap();
        assert!(me.won());
        assert!(!me.stats.fields.contains_key("win"));
        let keys: Vec<&str> = me.stats.fields.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["score", "kills", "deaths"]);
    }

    #[test]
    fn test_participant_lookup_misses_unknown_player() {
        let record: MatchRecord = serde_json::from_str(MATCH_JSON).unwrap();
        assert!(record.participant(&PlayerId::new("P3")).is_none());
    }

    #[test]
    fn test_missing_win_flag_is_a_shape_error() {
        let json = r#"{
            "metadata": {"mapName": "Bind", "gameStartTime": "2024-01-15T18:30:00Z"},
            "players": {"all_players": [{"puuid": "P1", "stats": {"kills": 1}}]}
        }"#;
        assert!(serde_json::from_str::<MatchRecord>(json).is_err());
    }

    #[test]
    fn test_missing_players_is_a_shape_error() {
        let json = r#"{"metadata": {"mapName": "Bind", "gameStartTime": "2024-01-15T18:30:00Z"}}"#;
        assert!(serde_json::from_str::<MatchRecord>(json).is_err());
    }

    #[test]
    fn test_parse_start_time_formats() {
        let zulu = parse_start_time("2024-01-15T18:30:00Z").unwrap();
        let fractional = parse_start_time("2024-01-15T18:30:00.123Z").unwrap();
        let naive = parse_start_time("2024-01-15T18:30:00").unwrap();
        let offset = parse_start_time("2024-01-15T20:30:00+02:00").unwrap();

        assert_eq!(zulu, naive);
        assert_eq!(zulu, offset);
        assert_eq!(fractional.timestamp(), zulu.timestamp());
        assert!(parse_start_time("yesterday").is_none());
    }

    #[test]
    fn test_invalid_start_time_is_a_shape_error() {
        let json = r#"{
            "metadata": {"mapName": "Bind", "gameStartTime": "not a time"},
            "players": {"all_players": []}
        }"#;
        let err = serde_json::from_str::<MatchRecord>(json).unwrap_err();
        assert!(err.to_string().contains("invalid gameStartTime"));
    }
}
