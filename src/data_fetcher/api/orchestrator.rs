// src/data_fetcher/api/orchestrator.rs - Last-match pipeline: identity → {history → detail, rank} → summary

use crate::config::Config;
use crate::data_fetcher::models::{MatchId, MatchRecord, MatchSummary, PlayerHandle, PlayerId};
use crate::data_fetcher::tiers::CompetitiveTier;
use crate::error::AppError;
use futures::future::try_join;
use reqwest::Client;
use tracing::{error, info, instrument};

use super::account_api::resolve_player_id;
use super::match_api::{fetch_last_competitive_match, fetch_match};
use super::ranked_api::fetch_current_rank;

/// Main entry point: builds the summary of a player's last competitive match.
///
/// Resolves the handle first; the history → detail chain and the rank lookup
/// both depend only on the resolved identifier, so they run concurrently and
/// are joined before the summary is assembled. The first failure on either
/// branch aborts the whole run and drops the other branch. Nothing is retried.
///
/// # Errors
/// * `AppError::Provider` - Any call returned a non-success status or an unreadable body
/// * `AppError::NoMatchFound` - The player has no competitive history
/// * `AppError::SelfNotFound` - The player is missing from their own match
///
/// # Example
/// ```rust,no_run
/// use lastmatch_bot::config::Config;
/// use lastmatch_bot::data_fetcher::api::{build_summary, create_riot_client};
/// use lastmatch_bot::data_fetcher::models::PlayerHandle;
///
/// #[tokio::main]
/// async fn main() -> Result<(), lastmatch_bot::AppError> {
///     let config = Config::load().await?;
///     let client = create_riot_client(&config)?;
///     let handle: PlayerHandle = "Alice#1234".parse()?;
///     let summary = build_summary(&client, &config, &handle).await?;
///     println!("{} on {}", summary.result_label(), summary.map_name);
///     Ok(())
/// }
/// ```
#[instrument(skip_all, fields(handle = %handle))]
pub async fn build_summary(
    client: &Client,
    config: &Config,
    handle: &PlayerHandle,
) -> Result<MatchSummary, AppError> {
    info!("Building last match summary");

    let player_id = resolve_player_id(client, config, handle).await?;

    let last_match = async {
        let match_id = fetch_last_competitive_match(client, config, &player_id).await?;
        let record = fetch_match(client, config, &match_id).await?;
        Ok::<_, AppError>((match_id, record))
    };
    let rank = fetch_current_rank(client, config, &player_id);

    let ((match_id, record), rank) = try_join(last_match, rank).await?;

    summarize(handle, &player_id, match_id, record, rank)
}

/// Assembles the summary from the fetched pieces.
///
/// Picks the requesting player's stat line out of the match; the win flag is
/// surfaced on its own and is not part of `stat_fields`.
pub fn summarize(
    handle: &PlayerHandle,
    player_id: &PlayerId,
    match_id: MatchId,
    record: MatchRecord,
    rank: CompetitiveTier,
) -> Result<MatchSummary, AppError> {
    let Some(me) = record.participant(player_id) else {
        error!(
            "Player {} ({}) not among the {} participants of match {}",
            handle,
            player_id,
            record.participants().len(),
            match_id
        );
        return Err(AppError::self_not_found(player_id.as_str(), match_id.as_str()));
    };

    // `fields` never holds the win flag; it is split off when the record is parsed
    let won = me.won();
    let stat_fields = me.stats.fields.clone();

    Ok(MatchSummary {
        handle: handle.clone(),
        match_id,
        rank,
        won,
        map_name: record.metadata.map_name,
        start_time: record.metadata.start_time,
        stat_fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;
    use serde_json::json;

    fn record_with(participants: Vec<serde_json::Value>) -> MatchRecord {
        serde_json::from_value(TestDataBuilder::match_json(
            "Ascent",
            "2024-01-15T18:30:00Z",
            participants,
        ))
        .unwrap()
    }

    #[test]
    fn test_summarize_excludes_win_and_keeps_stats() {
        let handle = PlayerHandle::new("Alice", "1234").unwrap();
        let record = record_with(vec![
            TestDataBuilder::participant_json("P2", json!({"kills": 1, "deaths": 1, "win": false})),
            TestDataBuilder::participant_json("P1", json!({"kills": 10, "deaths": 5, "win": true})),
        ]);

        let summary = summarize(
            &handle,
            &PlayerId::new("P1"),
            MatchId::new("M1"),
            record,
            CompetitiveTier::Gold1,
        )
        .unwrap();

        assert!(summary.won);
        assert!(!summary.stat_fields.contains_key("win"));
        assert_eq!(summary.stat_fields.len(), 2);
        assert_eq!(summary.stat_fields["kills"], json!(10));
        assert_eq!(summary.stat_fields["deaths"], json!(5));
        assert_eq!(summary.map_name, "Ascent");
        assert_eq!(summary.rank_label(), "Gold 1");
        assert_eq!(summary.handle.to_string(), "Alice#1234");
    }

    #[test]
    fn test_summarize_self_not_found() {
        let handle = PlayerHandle::new("Alice", "1234").unwrap();
        let record = record_with(vec![TestDataBuilder::participant_json(
            "P2",
            json!({"kills": 1, "win": true}),
        )]);

        let err = summarize(
            &handle,
            &PlayerId::new("P1"),
            MatchId::new("M1"),
            record,
            CompetitiveTier::Unrated,
        )
        .unwrap_err();

        assert!(matches!(err, AppError::SelfNotFound { .. }));
    }

    #[test]
    fn test_summarize_preserves_stat_order() {
        let handle = PlayerHandle::new("Alice", "1234").unwrap();
        let record = record_with(vec![TestDataBuilder::participant_json(
            "P1",
            json!({"score": 3100, "win": false, "kills": 3, "deaths": 10, "assists": 2}),
        )]);

        let summary = summarize(
            &handle,
            &PlayerId::new("P1"),
            MatchId::new("M1"),
            record,
            CompetitiveTier::Unknown,
        )
        .unwrap();

        let keys: Vec<&str> = summary.stat_fields.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["score", "kills", "deaths", "assists"]);
        assert!(!summary.won);
        assert_eq!(summary.rank_label(), "Unknown");
    }
}
