use crate::config::Config;
use crate::data_fetcher::api::create_riot_client;
use serde_json::{Value, json};

/// API key used by every test client; mock servers match the header against it
pub const TEST_API_KEY: &str = "RGAPI-test-key";

/// Test utilities for creating synthetic Riot API payloads
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Account-by-Riot-ID response
    pub fn account_json(puuid: &str, game_name: &str, tag_line: &str) -> Value {
        json!({
            "puuid": puuid,
            "gameName": game_name,
            "tagLine": tag_line,
        })
    }

    /// Match history response, newest match first
    pub fn matchlist_json(puuid: &str, match_ids: &[&str]) -> Value {
        let history: Vec<Value> = match_ids
            .iter()
            .enumerate()
            .map(|(i, id)| {
                json!({
                    "matchId": id,
                    "gameStartTimeMillis": 1_705_343_400_000_i64 - (i as i64) * 3_600_000,
                    "queueId": "competitive",
                })
            })
            .collect();
        json!({ "puuid": puuid, "history": history })
    }

    /// Match record with the given map, start time and participants
    pub fn match_json(map_name: &str, start_time: &str, participants: Vec<Value>) -> Value {
        json!({
            "metadata": {
                "matchId": "M1",
                "mapName": map_name,
                "gameStartTime": start_time,
                "queueId": "competitive",
            },
            "players": {
                "all_players": participants,
            },
        })
    }

    /// One participant; `stats` must carry the `win` flag
    pub fn participant_json(puuid: &str, stats: Value) -> Value {
        json!({
            "puuid": puuid,
            "teamId": "Blue",
            "stats": stats,
        })
    }

    /// Ranked-player response with the given tier ordinal
    pub fn ranked_json(competitive_tier: i64) -> Value {
        json!({
            "puuid": "P1",
            "competitiveTier": competitive_tier,
        })
    }
}

/// Config pointing every endpoint at `base_uri` (usually a mock server)
pub fn test_config(base_uri: &str) -> Config {
    Config {
        riot_api_key: TEST_API_KEY.to_string(),
        api_base_url: Some(base_uri.to_string()),
        ..Config::default()
    }
}

/// Riot client carrying `TEST_API_KEY`
pub fn create_test_client() -> reqwest::Client {
    create_riot_client(&test_config("http://localhost")).expect("test client should build")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{AccountResponse, MatchRecord, MatchlistResponse, PlayerId};

    #[test]
    fn test_builders_produce_parseable_payloads() {
        let account: AccountResponse =
            serde_json::from_value(TestDataBuilder::account_json("P1", "Alice", "1234")).unwrap();
        assert_eq!(account.puuid, PlayerId::new("P1"));

        let matchlist: MatchlistResponse =
            serde_json::from_value(TestDataBuilder::matchlist_json("P1", &["M2", "M1"])).unwrap();
        assert_eq!(matchlist.history.len(), 2);
        assert_eq!(matchlist.most_recent().unwrap().match_id.as_str(), "M2");

        let record: MatchRecord = serde_json::from_value(TestDataBuilder::match_json(
            "Bind",
            "2024-01-15T18:30:00Z",
            vec![TestDataBuilder::participant_json(
                "P1",
                json!({"kills": 1, "win": true}),
            )],
        ))
        .unwrap();
        assert!(record.participant(&PlayerId::new("P1")).unwrap().won());
    }

    #[test]
    fn test_config_targets_base_uri() {
        let config = test_config("http://127.0.0.1:9000/");
        assert_eq!(config.api_base_url(), "http://127.0.0.1:9000");
        assert_eq!(config.riot_api_key, TEST_API_KEY);
    }
}
