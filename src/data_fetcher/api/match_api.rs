use crate::config::Config;
use crate::data_fetcher::models::{MatchId, MatchRecord, MatchlistResponse, PlayerId};
use crate::error::AppError;
use reqwest::Client;
use tracing::{info, instrument, warn};

use super::fetch_utils::fetch;
use super::urls::{build_match_url, build_matchlist_url};

/// Finds the player's most recent competitive match.
///
/// # Errors
/// * `AppError::Provider` - Non-success status or malformed history
/// * `AppError::NoMatchFound` - The competitive history is empty
#[instrument(skip_all, fields(player = %player_id))]
pub async fn fetch_last_competitive_match(
    client: &Client,
    config: &Config,
    player_id: &PlayerId,
) -> Result<MatchId, AppError> {
    let url = build_matchlist_url(&config.api_base_url(), player_id.as_str())?;
    let matchlist: MatchlistResponse = fetch(client, &url).await?;

    match matchlist.most_recent() {
        Some(entry) => {
            info!("Last competitive match of {}: {}", player_id, entry.match_id);
            Ok(entry.match_id.clone())
        }
        None => {
            warn!("No competitive matches in history of {}", player_id);
            Err(AppError::no_match_found(player_id.as_str()))
        }
    }
}

/// Fetches the full record of one match.
///
/// # Errors
/// * `AppError::Provider` - Non-success status, or a record missing metadata,
///   participants or their stat lines
#[instrument(skip_all, fields(match_id = %match_id))]
pub async fn fetch_match(
    client: &Client,
    config: &Config,
    match_id: &MatchId,
) -> Result<MatchRecord, AppError> {
    let url = build_match_url(&config.api_base_url(), match_id.as_str())?;
    let record: MatchRecord = fetch(client, &url).await?;
    info!(
        "Fetched match {} on {} with {} participants",
        match_id,
        record.metadata.map_name,
        record.participants().len()
    );
    Ok(record)
}
