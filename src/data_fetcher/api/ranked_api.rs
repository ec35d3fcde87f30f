use crate::config::Config;
use crate::data_fetcher::models::{PlayerId, RankedResponse};
use crate::data_fetcher::tiers::CompetitiveTier;
use crate::error::AppError;
use reqwest::Client;
use tracing::{info, instrument, warn};

use super::fetch_utils::fetch;
use super::urls::build_ranked_url;

/// Looks up the player's current competitive tier.
///
/// Any number the table does not cover, fractional or out of range, degrades to
/// `CompetitiveTier::Unknown`; only a non-success status or a non-numeric tier
/// is an error.
#[instrument(skip_all, fields(player = %player_id))]
pub async fn fetch_current_rank(
    client: &Client,
    config: &Config,
    player_id: &PlayerId,
) -> Result<CompetitiveTier, AppError> {
    let url = build_ranked_url(&config.api_base_url(), player_id.as_str())?;
    let ranked: RankedResponse = fetch(client, &url).await?;

    let tier = ranked.tier();
    match tier.ordinal() {
        Some(ordinal) => info!("Current rank of {}: {} (tier {})", player_id, tier, ordinal),
        None => warn!(
            "Unrecognised competitive tier {:?} for {}",
            ranked.competitive_tier, player_id
        ),
    }
    Ok(tier)
}
