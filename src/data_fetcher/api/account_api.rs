use crate::config::Config;
use crate::data_fetcher::models::{AccountResponse, PlayerHandle, PlayerId};
use crate::error::AppError;
use reqwest::Client;
use tracing::{info, instrument};

use super::fetch_utils::fetch;
use super::urls::build_account_url;

/// Resolves a Riot ID to the player's stable identifier (PUUID).
///
/// # Errors
/// * `AppError::Provider` - Non-success status, or a body without `puuid`
/// * Transport errors from the underlying request
#[instrument(skip_all, fields(handle = %handle))]
pub async fn resolve_player_id(
    client: &Client,
    config: &Config,
    handle: &PlayerHandle,
) -> Result<PlayerId, AppError> {
    let url = build_account_url(&config.api_base_url(), handle.display_name(), handle.tag())?;
    let account: AccountResponse = fetch(client, &url).await?;
    info!("Resolved {} to player {}", handle, account.puuid);
    Ok(account.puuid)
}
